//! `PRINT`/`INPUT` lowering and their assembly helper subroutines.

use tcc_par::{Operand, RegOrIdent};
use tcc_util::Result;

use crate::context::EmitContext;
use crate::regs::phys;

/// `PRINT <value>`: load `value` into `r15`, call the helper.
///
/// `spec.md` §4.3.8. The helper is emitted once at the end of the output,
/// gated on [`EmitContext::used_print`].
pub(crate) fn emit_print(ctx: &mut EmitContext, value: &Operand) -> Result<()> {
    match value {
        Operand::Immediate(n) => ctx.line(&format!("mov r15, {n}")),
        Operand::Register(r) => ctx.line(&format!("mov r15, {}", phys(*r))),
        Operand::Identifier(name) => ctx.line(&format!("mov r15, [{name}]")),
    }
    ctx.line("call print_int");
    ctx.used_print = true;
    Ok(())
}

/// `INPUT <target>`: call the helper, then store `r15` into `target`.
pub(crate) fn emit_input(ctx: &mut EmitContext, target: &RegOrIdent) -> Result<()> {
    ctx.line("call read_int");
    match target {
        RegOrIdent::Register(r) => ctx.line(&format!("mov {}, r15", phys(*r))),
        RegOrIdent::Identifier(name) => ctx.line(&format!("mov qword [{name}], r15")),
    }
    ctx.used_input = true;
    Ok(())
}

/// Converts `r15` (a signed 64-bit integer) to decimal ASCII, writes it to
/// stdout via the `write` syscall, then writes a trailing newline byte.
/// Preserves every user-visible register it touches.
pub(crate) const PRINT_INT_HELPER: &str = "\
print_int:
    push rax
    push rbx
    push rdx
    push rsi
    push rdi
    push r12
    push r13
    push r14
    mov rax, r15
    mov r12, digit_buffer
    add r12, 31
    mov byte [r12], 0
    xor r13, r13
    cmp rax, 0
    jge .print_int_positive
    mov r13, 1
    neg rax
.print_int_positive:
    mov rbx, 10
    mov r14, r12
.print_int_digit_loop:
    xor rdx, rdx
    div rbx
    add dl, '0'
    dec r14
    mov [r14], dl
    cmp rax, 0
    jne .print_int_digit_loop
    cmp r13, 0
    je .print_int_no_sign
    dec r14
    mov byte [r14], '-'
.print_int_no_sign:
    mov rsi, r14
    mov rdx, r12
    sub rdx, r14
    mov rax, 1
    mov rdi, 1
    syscall
    mov rax, 1
    mov rdi, 1
    mov rsi, newline
    mov rdx, 1
    syscall
    pop r14
    pop r13
    pop r12
    pop rdi
    pop rsi
    pop rdx
    pop rbx
    pop rax
    ret
";

/// Reads up to 32 bytes from stdin via the `read` syscall, parses a signed
/// decimal integer (optional leading `-`, terminated by a newline or the
/// end of the bytes read), and leaves the result in `r15`.
pub(crate) const READ_INT_HELPER: &str = "\
read_int:
    push rax
    push rbx
    push rcx
    push rdx
    push rsi
    push rdi
    push r12
    push r13
    push r14
    xor rax, rax
    xor rdi, rdi
    mov rsi, input_buffer
    mov rdx, 32
    syscall
    mov r12, rax
    xor r13, r13
    xor r14, r14
    xor r15, r15
    cmp r12, 0
    jle .read_int_done
    mov al, [input_buffer]
    cmp al, '-'
    jne .read_int_loop
    mov r13, 1
    mov r14, 1
.read_int_loop:
    cmp r14, r12
    jge .read_int_apply_sign
    mov al, [input_buffer + r14]
    cmp al, 10
    je .read_int_apply_sign
    cmp al, '0'
    jl .read_int_apply_sign
    cmp al, '9'
    jg .read_int_apply_sign
    sub al, '0'
    movzx rax, al
    imul r15, r15, 10
    add r15, rax
    inc r14
    jmp .read_int_loop
.read_int_apply_sign:
    cmp r13, 0
    je .read_int_done
    neg r15
.read_int_done:
    pop r14
    pop r13
    pop r12
    pop rdi
    pop rsi
    pop rdx
    pop rcx
    pop rbx
    pop rax
    ret
";
