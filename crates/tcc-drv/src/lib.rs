//! tcc-drv - Pipeline driver for TinyCompiled
//!
//! ============================================================================
//! WHAT THIS CRATE DOES
//! ============================================================================
//!
//! Chains the three core stages — `tcc-lex`, `tcc-par`, `tcc-gen` — behind
//! a single [`compile`] entry point, and exposes each stage individually
//! (`tokenize`, `parse`, `emit`) for callers that only need a prefix of the
//! pipeline (a debug printer inspecting tokens, for instance).
//!
//! There is no file I/O, no CLI argument parsing, and no process exit-code
//! logic here — those belong to the out-of-scope terminal visualizer and
//! CLI driver. This crate is a headless library: it takes a source string
//! and returns an assembly string or a structured error, full stop.
//!
//! ============================================================================
//! OBSERVABILITY
//! ============================================================================
//!
//! Each stage runs inside a `tracing` span at `debug` level
//! (`tokenize`, `parse`, `emit`), and a failing stage logs an `error`-level
//! event with the stage name and the error before propagating it. This
//! mirrors the teacher's verbose-logging calls around its pipeline phases,
//! but through `tracing` instead of raw `eprintln!` — the logging crate the
//! rest of this corpus already depends on.

mod options;

pub use options::CompileOptions;
pub use tcc_gen::DivisionMode;

use tcc_par::Program;
use tcc_util::Result;
use tracing::{debug, error, instrument};

/// Runs the full pipeline: `tokenize` → `parse` → `emit`, using
/// [`CompileOptions::default`].
///
/// Equivalent to [`compile_with_options`] with the default options.
pub fn compile(source: &str) -> Result<String> {
    compile_with_options(source, &CompileOptions::default())
}

/// Runs the full pipeline under caller-supplied `options`.
#[instrument(skip(source, options), fields(source_len = source.len()))]
pub fn compile_with_options(source: &str, options: &CompileOptions) -> Result<String> {
    let tokens = tokenize(source)?;
    let program = parse(tokens)?;
    emit_with_options(&program, options)
}

/// Scanner only: turns `source` into a token sequence. Exposed for
/// debug/UI use (e.g. printing the token list without parsing it).
#[instrument(skip(source), fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<tcc_lex::Token>> {
    debug!("tokenizing");
    tcc_lex::tokenize(source).map_err(|e| {
        error!(stage = "lexical", %e, "tokenize failed");
        e
    })
}

/// Parser only: turns a token sequence into a [`Program`].
#[instrument(skip(tokens), fields(token_count = tokens.len()))]
pub fn parse(tokens: Vec<tcc_lex::Token>) -> Result<Program> {
    debug!("parsing");
    tcc_par::parse(tokens).map_err(|e| {
        error!(stage = "syntactic", %e, "parse failed");
        e
    })
}

/// Emitter only, using [`CompileOptions::default`].
pub fn emit(program: &Program) -> Result<String> {
    emit_with_options(program, &CompileOptions::default())
}

/// Emitter only, under caller-supplied `options`.
#[instrument(skip(program, options), fields(stmt_count = program.len()))]
pub fn emit_with_options(program: &Program, options: &CompileOptions) -> Result<String> {
    debug!("emitting");
    tcc_gen::emit_with_options(program, options.to_emit_options()).map_err(|e| {
        error!(stage = "semantic", %e, "emit failed");
        e
    })
}
