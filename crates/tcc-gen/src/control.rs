//! Condition lowering and block-construct emission — `spec.md` §4.3.6.

use tcc_par::{Condition, Operand, RelOp, Stmt};
use tcc_util::{Error, Result, Stage};

use crate::context::EmitContext;
use crate::regs::phys;

fn load_operand_into(ctx: &mut EmitContext, reg: &str, operand: &Operand) {
    match operand {
        Operand::Immediate(n) => ctx.line(&format!("mov {reg}, {n}")),
        Operand::Identifier(name) => ctx.line(&format!("mov {reg}, [{name}]")),
        Operand::Register(r) => ctx.line(&format!("mov {reg}, {}", phys(*r))),
    }
}

/// Emits a compare-and-jump that transfers control to `false_label` iff
/// `cond` is false — the inverted relational operator per `spec.md`
/// §4.3.6's table.
pub(crate) fn emit_condition_to(ctx: &mut EmitContext, cond: &Condition, false_label: &str) {
    load_operand_into(ctx, "r10", &cond.left);
    load_operand_into(ctx, "r11", &cond.right);
    ctx.line("cmp r10, r11");
    let jump = match cond.op {
        RelOp::Eq => "jne",
        RelOp::Neq => "je",
        RelOp::Gt => "jle",
        RelOp::Lt => "jge",
        RelOp::Gte => "jl",
        RelOp::Lte => "jg",
    };
    ctx.line(&format!("{jump} {false_label}"));
}

/// `IF cond ... [ELSE ...] ENDIF`.
pub(crate) fn emit_if(
    ctx: &mut EmitContext,
    cond: &Condition,
    then_body: &[Stmt],
    else_body: &Option<Vec<Stmt>>,
) -> Result<()> {
    let id = ctx.next_label_id();
    let else_label = format!("else_{id}");
    let endif_label = format!("endif_{id}");

    emit_condition_to(ctx, cond, &else_label);
    crate::stmt::emit_stmts(ctx, then_body)?;
    if else_body.is_some() {
        ctx.line(&format!("jmp {endif_label}"));
    }
    ctx.label(&else_label);
    if let Some(body) = else_body {
        crate::stmt::emit_stmts(ctx, body)?;
    }
    ctx.label(&endif_label);
    Ok(())
}

/// `WHILE cond ... ENDWHILE`.
pub(crate) fn emit_while(ctx: &mut EmitContext, cond: &Condition, body: &[Stmt]) -> Result<()> {
    let id = ctx.next_label_id();
    let start = format!("while_start_{id}");
    let end = format!("while_end_{id}");

    ctx.label(&start);
    emit_condition_to(ctx, cond, &end);
    crate::stmt::emit_stmts(ctx, body)?;
    ctx.line(&format!("jmp {start}"));
    ctx.label(&end);
    Ok(())
}

/// `FOR var FROM start TO end [STEP step] ... ENDFOR`.
///
/// The exit test is strict (`>` ascending, `<` descending): the body runs
/// for `var` in `[start, end]` inclusive on both ends when `step` evenly
/// divides the range (`spec.md` §4.3.6).
pub(crate) fn emit_for(
    ctx: &mut EmitContext,
    var: &str,
    start: i64,
    end: i64,
    step: i64,
    body: &[Stmt],
) -> Result<()> {
    ctx.declare_implicit_bss(var);

    let id = ctx.next_label_id();
    let start_label = format!("for_start_{id}");
    let end_label = format!("for_end_{id}");

    ctx.line(&format!("mov qword [{var}], {start}"));
    ctx.label(&start_label);
    ctx.line(&format!("mov r10, [{var}]"));
    ctx.line(&format!("mov r11, {end}"));
    ctx.line("cmp r10, r11");
    let exit_jump = if step > 0 { "jg" } else { "jl" };
    ctx.line(&format!("{exit_jump} {end_label}"));
    crate::stmt::emit_stmts(ctx, body)?;
    match step {
        1 => ctx.line(&format!("inc qword [{var}]")),
        -1 => ctx.line(&format!("dec qword [{var}]")),
        _ => ctx.line(&format!("add qword [{var}], {step}")),
    }
    ctx.line(&format!("jmp {start_label}"));
    ctx.label(&end_label);
    Ok(())
}

/// `LOOP counter, limit ... ENDLOOP`.
///
/// Unlike `FOR`, the counter must already be declared (when
/// [`EmitOptions::loop_requires_declared_counter`](crate::EmitOptions) is
/// set, the default) — the body is responsible for advancing it.
pub(crate) fn emit_loop(
    ctx: &mut EmitContext,
    counter_name: &str,
    limit: i64,
    body: &[Stmt],
) -> Result<()> {
    if ctx.options.loop_requires_declared_counter && !ctx.is_declared(counter_name) {
        return Err(Error::new(
            Stage::Semantic,
            0,
            0,
            format!("LOOP counter '{counter_name}' must be declared with VAR before use"),
        ));
    }

    let id = ctx.next_label_id();
    let start_label = format!("loop_start_{id}");
    let end_label = format!("loop_end_{id}");

    ctx.label(&start_label);
    ctx.line(&format!("mov r10, [{counter_name}]"));
    ctx.line(&format!("mov r11, {limit}"));
    ctx.line("cmp r10, r11");
    ctx.line(&format!("jge {end_label}"));
    crate::stmt::emit_stmts(ctx, body)?;
    ctx.line(&format!("jmp {start_label}"));
    ctx.label(&end_label);
    Ok(())
}

/// `REPEAT ... UNTIL cond` - body runs once before the first check; the
/// "false" branch of the condition points back to the top, since the loop
/// continues only while the exit condition is false.
pub(crate) fn emit_repeat(ctx: &mut EmitContext, body: &[Stmt], cond: &Condition) -> Result<()> {
    let start = format!("repeat_start_{}", ctx.next_label_id());
    ctx.label(&start);
    crate::stmt::emit_stmts(ctx, body)?;
    emit_condition_to(ctx, cond, &start);
    Ok(())
}
