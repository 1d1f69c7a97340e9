#![no_main]

use deb822_stanza::{Deb822, FieldExtractor, StanzaSplitter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut storage = [0u8; 64];
    let mut fixed = FieldExtractor::with_config(
        b"",
        deb822_stanza::BufferConfig::Fixed(&mut storage),
    );
    let mut growable = FieldExtractor::new(b"");

    for stanza in StanzaSplitter::new(data) {
        let Ok(stanza) = stanza else { continue };
        assert!(!stanza.is_empty());

        fixed.reset_stanza(&stanza);
        while !matches!(fixed.next_field(), Ok(None)) {}

        growable.reset_stanza(&stanza);
        while !matches!(growable.next_field(), Ok(None)) {}
    }

    // Whatever parses must also format.
    if let Ok(doc) = Deb822::parse(data) {
        let _ = doc.to_string();
    }
});
