//! Example demonstrating error recovery with the stanza splitter and field
//! extractor.
//!
//! Both parsers skip past the line they complain about, so a caller can
//! report every problem in a file and still get at the valid fields.

use deb822_stanza::{FieldExtractor, StanzaSplitter};

fn main() {
    let input = r#"Source: test-package
Maintainer John Doe <john@example.com>
Section: utils

-Package: missing-name
Architecture: all

Package: recovered-package
Architecture: all
Depends: some-dep,
# other-dep was dropped
 another-dep
Description: A test package
 This is a multi-line description
 that spans multiple lines.
"#;

    let mut extractor = FieldExtractor::new(b"");
    let mut errors = 0;

    for stanza in StanzaSplitter::new(input.as_bytes()) {
        let stanza = match stanza {
            Ok(stanza) => stanza,
            Err(e) => {
                println!("error: {}", e);
                errors += 1;
                continue;
            }
        };

        println!("=== Stanza at {} ===", stanza.location());
        extractor.reset_stanza(&stanza);
        loop {
            match extractor.next_field() {
                Ok(Some(field)) => println!(
                    "  {}: {}",
                    String::from_utf8_lossy(field.name),
                    String::from_utf8_lossy(field.value)
                ),
                Ok(None) => break,
                Err(e) => {
                    println!("  error: {}", e);
                    errors += 1;
                }
            }
        }
    }

    println!("\n{} error(s) found", errors);
}
