//! Throughput benchmark for the scanner.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tcc_lex::tokenize;

const PROGRAM: &str = "\
VAR n, 100
VAR sum, 0
VAR i, 1
WHILE i <= n
LOAD R1, sum
LOAD R2, i
ADD R3, R1, R2
SET sum, R3
INC i
ENDWHILE
PRINT sum
HALT
";

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_small_program", |b| {
        b.iter(|| tokenize(black_box(PROGRAM)).unwrap());
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
