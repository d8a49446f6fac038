//! Throughput benchmark for the emitter.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tcc_gen::emit;

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

fn bench_emit(c: &mut Criterion) {
    let tokens = tcc_lex::tokenize(PROGRAM).unwrap();
    let program = tcc_par::parse(tokens).unwrap();
    c.bench_function("emit_small_program", |b| {
        b.iter(|| emit(black_box(&program)).unwrap());
    });
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
