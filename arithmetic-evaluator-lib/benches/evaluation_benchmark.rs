use arithmetic_evaluator::interpreter::evaluate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "2+3".to_string(),
        "2 + 3 * 4 - 8 / 2".to_string(),
        "(1.5 + -2) * (3 - (4 / 0.25))".to_string(),
        "((((1+2)*3-4)/5+6)*7-8)/9".to_string(),
        "1+".repeat(99) + "1",
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
