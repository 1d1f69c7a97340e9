use deb822_stanza::{
    BufferConfig, Deb822, ErrorKind, FieldExtractor, ParseError, StanzaSplitter,
};
use indoc::indoc;

/// Walk a document, collecting `(name, value)` pairs per stanza and every
/// error along the way.
fn walk(input: &[u8]) -> (Vec<Vec<(String, String)>>, Vec<(ErrorKind, usize, usize)>) {
    let mut stanzas = Vec::new();
    let mut errors = Vec::new();
    let mut record = |e: ParseError| errors.push((e.kind, e.line(), e.column()));

    let mut extractor = FieldExtractor::new(b"");
    for stanza in StanzaSplitter::new(input) {
        let stanza = match stanza {
            Ok(stanza) => stanza,
            Err(e) => {
                record(e);
                continue;
            }
        };
        extractor.reset_stanza(&stanza);
        let mut fields = Vec::new();
        loop {
            match extractor.next_field() {
                Ok(Some(field)) => fields.push((
                    field.name_str().unwrap().to_string(),
                    field.value_str().unwrap().to_string(),
                )),
                Ok(None) => break,
                Err(e) => record(e),
            }
        }
        stanzas.push(fields);
    }
    (stanzas, errors)
}

fn pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_debian_control() {
    let input = indoc! {"
        # Generated file, do not edit.
        Source: test-package
        Section: utils
        Priority: optional
        Maintainer: Test User <test@example.com>
        Build-Depends: debhelper-compat (= 13),
                       libfoo-dev
        Standards-Version: 4.6.2

        Package: test-package
        Architecture: any
        Depends: ${shlibs:Depends}, ${misc:Depends}
        Description: A test package
         This is a longer description
         that spans multiple lines.
         .
         It even has a paragraph break.
    "};

    let (stanzas, errors) = walk(input.as_bytes());
    assert!(errors.is_empty());
    assert_eq!(
        stanzas,
        vec![
            pairs(&[
                ("Source", "test-package"),
                ("Section", "utils"),
                ("Priority", "optional"),
                ("Maintainer", "Test User <test@example.com>"),
                ("Build-Depends", "debhelper-compat (= 13), libfoo-dev"),
                ("Standards-Version", "4.6.2"),
            ]),
            pairs(&[
                ("Package", "test-package"),
                ("Architecture", "any"),
                ("Depends", "${shlibs:Depends}, ${misc:Depends}"),
                (
                    "Description",
                    "A test package This is a longer description that spans multiple lines. . It even has a paragraph break."
                ),
            ]),
        ]
    );
}

#[test]
fn test_error_recovery_across_document() {
    let input = indoc! {"
        Source: broken
        Maintainer John Doe <john@example.com>
        Section: utils

        -Package: nope
        Architecture: all

        Package: recovered
         indented: oops
        Depends: foo
    "};

    let (stanzas, errors) = walk(input.as_bytes());
    assert_eq!(
        errors,
        vec![
            (ErrorKind::InvalidDefinition, 2, 11),
            (ErrorKind::InvalidFieldName, 5, 0),
        ]
    );
    assert_eq!(
        stanzas,
        vec![
            pairs(&[("Source", "broken"), ("Section", "utils")]),
            pairs(&[("Architecture", "all")]),
            pairs(&[
                ("Package", "recovered indented: oops"),
                ("Depends", "foo")
            ]),
        ]
    );
}

#[test]
fn test_comments_in_values() {
    let input = indoc! {"
        Depends: foo,
        # bar was dropped
         baz,
           # quux stays
        Suggests:
        # nothing
        Recommends: x
    "};

    let (stanzas, errors) = walk(input.as_bytes());
    assert!(errors.is_empty());
    assert_eq!(
        stanzas,
        vec![pairs(&[
            ("Depends", "foo, baz, # quux stays"),
            ("Suggests", ""),
            ("Recommends", "x"),
        ])]
    );
}

#[test]
fn test_fixed_buffer_across_stanzas() {
    let input = indoc! {"
        Package: small

        Package: this-name-is-too-long-for-the-buffer
        Version: 1
    "};

    let mut storage = [0u8; 16];
    let mut extractor = FieldExtractor::with_config(b"", BufferConfig::Fixed(&mut storage));
    let mut splitter = StanzaSplitter::new(input.as_bytes());

    extractor.reset_stanza(&splitter.next_stanza().unwrap().unwrap());
    assert_eq!(extractor.next_field().unwrap().unwrap().value, b"small");
    assert!(extractor.next_field().unwrap().is_none());

    extractor.reset_stanza(&splitter.next_stanza().unwrap().unwrap());
    let err = extractor.next_field().unwrap_err();
    assert_eq!(err.kind, ErrorKind::BufferExceeded);
    assert_eq!((err.line(), err.column()), (3, 25));
    assert_eq!(err.offender, b"-");
    assert_eq!(extractor.next_field().unwrap().unwrap().value, b"1");
}

#[test]
fn test_owned_document() {
    let input = indoc! {"
        Package: hello
        Description: greets
         the world

        Package: bye
    "};
    let deb822: Deb822 = input.parse().unwrap();
    let names: Vec<&str> = deb822
        .iter()
        .filter_map(|p| p.get_str("package"))
        .collect();
    assert_eq!(names, vec!["hello", "bye"]);
    assert_eq!(
        deb822.iter().next().unwrap().get_str("DESCRIPTION"),
        Some("greets the world")
    );
}
