//! `AND`/`OR`/`XOR`/`NOT`/`SHL`/`SHR` lowering — `spec.md` §4.3.5.

use tcc_par::{BitwiseOp, ShiftOp};
use tcc_util::Result;

use crate::context::EmitContext;
use crate::regs::phys;

/// `AND|OR|XOR dest, left, right` - all three operands are registers.
pub(crate) fn emit_binary_bitwise(
    ctx: &mut EmitContext,
    op: BitwiseOp,
    dest_reg: u8,
    left_reg: u8,
    right_reg: u8,
) -> Result<()> {
    let dest = phys(dest_reg);
    let left = phys(left_reg);
    if dest != left {
        ctx.line(&format!("mov {dest}, {left}"));
    }
    let mnemonic = match op {
        BitwiseOp::And => "and",
        BitwiseOp::Or => "or",
        BitwiseOp::Xor => "xor",
    };
    ctx.line(&format!("{mnemonic} {dest}, {}", phys(right_reg)));
    Ok(())
}

/// `NOT reg` - bitwise complement in place.
pub(crate) fn emit_not(ctx: &mut EmitContext, reg: u8) -> Result<()> {
    ctx.line(&format!("not {}", phys(reg)));
    Ok(())
}

/// `SHL|SHR dest, src, count` - `count` is an immediate, already checked
/// `0..=63` by the parser.
pub(crate) fn emit_shift(
    ctx: &mut EmitContext,
    op: ShiftOp,
    dest_reg: u8,
    src_reg: u8,
    count: u8,
) -> Result<()> {
    let dest = phys(dest_reg);
    let src = phys(src_reg);
    if dest != src {
        ctx.line(&format!("mov {dest}, {src}"));
    }
    let mnemonic = match op {
        ShiftOp::Shl => "shl",
        ShiftOp::Shr => "shr",
    };
    ctx.line(&format!("{mnemonic} {dest}, {count}"));
    Ok(())
}
