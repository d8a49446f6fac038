//! tcc-gen - Single-pass NASM emitter for TC
//!
//! ============================================================================
//! WHAT THIS CRATE DOES
//! ============================================================================
//!
//! Walks a [`tcc_par::Program`] exactly once, in source order, and returns
//! the assembled NASM text (`.data`, `.bss`, `.text`, in that order, with a
//! `global _start` entry point). Every statement kind has a corresponding
//! lowering function in one of this crate's modules:
//!
//! - [`data`] - `LOAD`/`SET`/`MOVE`
//! - [`arith`] - `ADD`/`SUB`/`MUL`/`DIV`/`INC`/`DEC`
//! - [`bitwise`] - `AND`/`OR`/`XOR`/`NOT`/`SHL`/`SHR`
//! - [`control`] - condition lowering, `IF`/`WHILE`/`FOR`/`LOOP`/`REPEAT`
//! - [`func`] - `FUNC`/`CALL`/`RET`/`PUSH`/`POP`
//! - [`io`] - `PRINT`/`INPUT` and their helper subroutines
//!
//! The emitter is almost infallible by construction — the only two ways it
//! can fail are a variable redeclared with a conflicting initializer, and
//! (with the default [`EmitOptions`]) a `LOOP` whose counter was never
//! declared. Both are "semantic, at emission" per `spec.md` §7; everything
//! else the emitter does is a mechanical AST walk with no way to fail once
//! the input is a syntactically valid `Program`.
//!
//! Undeclared `LOAD`/`CALL` targets are deliberately *not* checked here —
//! see DESIGN.md's Open Question Decisions for why that is deferred to the
//! assembler/linker rather than caught in this crate.

mod arith;
mod bitwise;
mod context;
mod control;
mod data;
mod func;
mod io;
mod regs;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use context::{DivisionMode, EmitOptions};

use context::EmitContext;
use tcc_par::Program;
use tcc_util::Result;

/// Emits `program` as NASM assembly text, using the default
/// [`EmitOptions`] (signed division, `LOOP` counter must be declared).
pub fn emit(program: &Program) -> Result<String> {
    emit_with_options(program, EmitOptions::default())
}

/// Emits `program` as NASM assembly text under the given `options`.
pub fn emit_with_options(program: &Program, options: EmitOptions) -> Result<String> {
    let mut ctx = EmitContext::new(options);
    stmt::emit_stmts(&mut ctx, program)?;
    // A normal (non-HALT) fall-off end of the program still needs to exit
    // cleanly via sys_exit; emitting it unconditionally after the walk is
    // harmless when the last statement was itself HALT (unreachable code
    // after an already-terminated syscall is fine in NASM output).
    ctx.line("mov rax, 60");
    ctx.line("mov rdi, 0");
    ctx.line("syscall");
    Ok(ctx.finish())
}
