//! Top-level statement dispatch, shared by the program walk and every
//! block construct's nested body.

use tcc_par::Stmt;
use tcc_util::Result;

use crate::context::EmitContext;
use crate::{arith, bitwise, control, data, func, io};

/// Emits every statement in `body`, in order.
pub(crate) fn emit_stmts(ctx: &mut EmitContext, body: &[Stmt]) -> Result<()> {
    for stmt in body {
        emit_stmt(ctx, stmt)?;
    }
    Ok(())
}

/// Emits one statement, dispatching on its variant.
pub(crate) fn emit_stmt(ctx: &mut EmitContext, stmt: &Stmt) -> Result<()> {
    match stmt {
        Stmt::VarDecl { name, init } => ctx.declare_var(name, *init),

        Stmt::Load { dest_reg, src } => data::emit_load(ctx, *dest_reg, src),
        Stmt::Set { dest_name, src } => data::emit_set(ctx, dest_name, src),
        Stmt::Move { dest_reg, src_reg } => data::emit_move(ctx, *dest_reg, *src_reg),

        Stmt::BinaryArith { op, dest_reg, left_reg, right } => {
            arith::emit_binary_arith(ctx, *op, *dest_reg, *left_reg, right)
        },
        Stmt::UnaryArith { op, target } => arith::emit_unary_arith(ctx, *op, target),

        Stmt::BinaryBitwise { op, dest_reg, left_reg, right_reg } => {
            bitwise::emit_binary_bitwise(ctx, *op, *dest_reg, *left_reg, *right_reg)
        },
        Stmt::Not { reg } => bitwise::emit_not(ctx, *reg),
        Stmt::Shift { op, dest_reg, src_reg, count } => {
            bitwise::emit_shift(ctx, *op, *dest_reg, *src_reg, *count)
        },

        Stmt::If { cond, then_body, else_body } => {
            control::emit_if(ctx, cond, then_body, else_body)
        },
        Stmt::While { cond, body } => control::emit_while(ctx, cond, body),
        Stmt::For { var, start, end, step, body } => {
            control::emit_for(ctx, var, *start, *end, *step, body)
        },
        Stmt::Loop { counter_name, limit, body } => {
            control::emit_loop(ctx, counter_name, *limit, body)
        },
        Stmt::Repeat { body, cond } => control::emit_repeat(ctx, body, cond),

        Stmt::FuncDef { name, body } => func::emit_func_def(ctx, name, body),
        Stmt::Call { name } => func::emit_call(ctx, name),
        Stmt::Return { value } => func::emit_return(ctx, *value),
        Stmt::Push { reg } => func::emit_push(ctx, *reg),
        Stmt::Pop { reg } => func::emit_pop(ctx, *reg),

        Stmt::Print { value } => io::emit_print(ctx, value),
        Stmt::Input { target } => io::emit_input(ctx, target),

        Stmt::Halt => {
            ctx.line("mov rax, 60");
            ctx.line("mov rdi, 0");
            ctx.line("syscall");
            Ok(())
        },
        Stmt::Nop => {
            ctx.line("nop");
            Ok(())
        },
    }
}
