//! `LOAD`, `SET`, `MOVE` lowering — `spec.md` §4.3.3.

use tcc_par::{Operand, RegOrImm};
use tcc_util::Result;

use crate::context::EmitContext;
use crate::regs::phys;

/// `LOAD dest_reg, src`.
pub(crate) fn emit_load(ctx: &mut EmitContext, dest_reg: u8, src: &Operand) -> Result<()> {
    let dest = phys(dest_reg);
    match src {
        Operand::Immediate(n) => ctx.line(&format!("mov {dest}, {n}")),
        Operand::Identifier(name) => ctx.line(&format!("mov {dest}, [{name}]")),
        Operand::Register(r) => ctx.line(&format!("mov {dest}, {}", phys(*r))),
    }
    Ok(())
}

/// `SET dest_name, src`.
pub(crate) fn emit_set(ctx: &mut EmitContext, dest_name: &str, src: &RegOrImm) -> Result<()> {
    match src {
        RegOrImm::Immediate(n) => ctx.line(&format!("mov qword [{dest_name}], {n}")),
        RegOrImm::Register(r) => ctx.line(&format!("mov qword [{dest_name}], {}", phys(*r))),
    }
    Ok(())
}

/// `MOVE dest_reg, src_reg`.
pub(crate) fn emit_move(ctx: &mut EmitContext, dest_reg: u8, src_reg: u8) -> Result<()> {
    ctx.line(&format!("mov {}, {}", phys(dest_reg), phys(src_reg)));
    Ok(())
}
