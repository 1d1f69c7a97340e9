use criterion::{criterion_group, criterion_main, Criterion};
use deb822_stanza::{Deb822, FieldExtractor, StanzaSplitter};

/// A Sources-like index with a few thousand stanzas.
fn sources() -> String {
    let mut out = String::new();
    for i in 0..2000 {
        out.push_str(&format!(
            "Package: package-{i}\n\
             Binary: package-{i}, libpackage{i}-dev\n\
             Version: 1.{i}-1\n\
             Maintainer: Maintainer {i} <maint{i}@example.com>\n\
             Build-Depends: debhelper-compat (= 13),\n \
             libfoo-dev (>= 1.{i}),\n \
             pkg-config\n\
             # generated\n\
             Description: package number {i}\n \
             with a longer description\n \
             .\n \
             spanning several lines\n\n"
        ));
    }
    out
}

fn split_benchmark(c: &mut Criterion) {
    let data = sources();

    c.bench_function("split_stanzas", |b| {
        b.iter(|| StanzaSplitter::new(data.as_bytes()).count());
    });

    c.bench_function("extract_fields", |b| {
        b.iter(|| {
            let mut extractor = FieldExtractor::new(b"");
            let mut total = 0;
            for stanza in StanzaSplitter::new(data.as_bytes()) {
                extractor.reset_stanza(&stanza.unwrap());
                while let Some(field) = extractor.next_field().unwrap() {
                    total += field.value.len();
                }
            }
            total
        });
    });

    c.bench_function("parse_owned", |b| {
        b.iter(|| Deb822::parse(data.as_bytes()).unwrap().len());
    });
}

criterion_group!(benches, split_benchmark);
criterion_main!(benches);
