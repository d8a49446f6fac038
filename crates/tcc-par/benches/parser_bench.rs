//! Throughput benchmark for the parser.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tcc_par::parse;

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

fn bench_parse(c: &mut Criterion) {
    let tokens = tcc_lex::tokenize(PROGRAM).unwrap();
    c.bench_function("parse_small_program", |b| {
        b.iter(|| parse(black_box(tokens.clone())).unwrap());
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
