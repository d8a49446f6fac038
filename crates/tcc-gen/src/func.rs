//! Functions, calls, and the stack — `spec.md` §4.3.7.

use tcc_par::Stmt;
use tcc_util::Result;

use crate::context::EmitContext;
use crate::regs::phys;

/// `FUNC name ... ENDFUNC`.
///
/// Emitted into the functions buffer, placed after the program epilogue
/// (`spec.md` §4.3.7, resolved in DESIGN.md) so straight-line execution
/// from `_start` never falls into a function body.
pub(crate) fn emit_func_def(ctx: &mut EmitContext, name: &str, body: &[Stmt]) -> Result<()> {
    ctx.mark_function_defined(name);
    ctx.in_functions_buffer(|ctx| {
        ctx.label(name);
        crate::stmt::emit_stmts(ctx, body)
    })
}

/// `CALL name`.
pub(crate) fn emit_call(ctx: &mut EmitContext, name: &str) -> Result<()> {
    ctx.line(&format!("call {name}"));
    Ok(())
}

/// `RET [reg]`.
pub(crate) fn emit_return(ctx: &mut EmitContext, value: Option<u8>) -> Result<()> {
    if let Some(r) = value {
        let reg = phys(r);
        if reg != "rax" {
            ctx.line(&format!("mov rax, {reg}"));
        }
    }
    ctx.line("ret");
    Ok(())
}

/// `PUSH reg`.
pub(crate) fn emit_push(ctx: &mut EmitContext, reg: u8) -> Result<()> {
    ctx.line(&format!("push {}", phys(reg)));
    Ok(())
}

/// `POP reg`.
pub(crate) fn emit_pop(ctx: &mut EmitContext, reg: u8) -> Result<()> {
    ctx.line(&format!("pop {}", phys(reg)));
    Ok(())
}
