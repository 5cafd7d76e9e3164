use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use slackify_core::convert;

fn generate_large_html() -> String {
    let mut s = String::with_capacity(100_000);
    s.push_str("<h1>Benchmark Document</h1>");
    for i in 0..10_000 {
        s.push_str(&format!(
            "<ul><li>List item number {} with <b>bold</b> text</li></ul>",
            i
        ));
        s.push_str("<p>Paragraph with a <a href=\"https://example.com\">link</a> and &amp; an entity.</p>");
    }
    s
}

fn benchmark_convert(c: &mut Criterion) {
    let input = generate_large_html();
    let mut group = c.benchmark_group("convert_throughput");

    // Throughput in bytes of HTML consumed per second.
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("convert", |b| {
        b.iter(|| convert(black_box(&input)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_convert);
criterion_main!(benches);
