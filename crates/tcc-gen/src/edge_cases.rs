//! Boundary and negative-scenario tests mirroring `spec.md` §8.

use tcc_par::parse;

use crate::{emit, emit_with_options, DivisionMode, EmitOptions};

fn emit_source(source: &str) -> String {
    let tokens = tcc_lex::tokenize(source).unwrap();
    let program = parse(tokens).unwrap();
    emit(&program).unwrap_or_else(|e| panic!("unexpected emit error on {source:?}: {e}"))
}

#[test]
fn every_label_emitted_is_unique() {
    let asm = emit_source(
        "WHILE R1 < 10\n\
         IF R1 > 5\n\
         HALT\n\
         ELSE\n\
         NOP\n\
         ENDIF\n\
         INC R1\n\
         ENDWHILE\n\
         HALT",
    );
    let labels: Vec<&str> = asm
        .lines()
        .filter(|l| l.ends_with(':') && !l.starts_with('.'))
        .collect();
    let mut seen = std::collections::HashSet::new();
    for label in &labels {
        assert!(seen.insert(*label), "duplicate label: {label}");
    }
}

#[test]
fn div_with_dest_equal_to_rax_skips_the_rax_save_restore() {
    // DIV R1, R2, R3 - dest is R1 == rax, so no `push rax` / `pop rax`.
    let asm = emit_source("LOAD R2, 10\nLOAD R3, 3\nDIV R1, R2, R3\nHALT");
    assert!(!asm.contains("push rax"));
    assert!(asm.contains("cqo"));
    assert!(asm.contains("idiv"));
}

#[test]
fn div_with_dest_equal_to_rdx_skips_the_rdx_save_restore() {
    // DIV R4, R2, R3 - dest is R4 == rdx.
    let asm = emit_source("LOAD R2, 10\nLOAD R3, 3\nDIV R4, R2, R3\nHALT");
    assert!(!asm.contains("push rdx"));
}

#[test]
fn unsigned_division_mode_emits_xor_rdx_rdx() {
    let tokens = tcc_lex::tokenize("LOAD R2, 10\nLOAD R3, 3\nDIV R1, R2, R3\nHALT").unwrap();
    let program = parse(tokens).unwrap();
    let options = EmitOptions { division: DivisionMode::Unsigned, ..EmitOptions::default() };
    let asm = emit_with_options(&program, options).unwrap();
    assert!(asm.contains("xor rdx, rdx"));
    assert!(asm.contains("div "));
    assert!(!asm.contains("idiv"));
}

#[test]
fn for_loop_implicitly_declares_its_counter() {
    let asm = emit_source("FOR i FROM 1 TO 3\nHALT\nENDFOR\nHALT");
    assert!(asm.contains("i resq 1"));
}

#[test]
fn for_descending_uses_the_less_than_exit_jump() {
    let asm = emit_source("FOR i FROM 3 TO 1 STEP -1\nHALT\nENDFOR\nHALT");
    assert!(asm.contains("jl for_end_"));
    assert!(asm.contains("dec qword [i]"));
}

#[test]
fn shift_count_63_is_accepted_and_emitted_verbatim() {
    let asm = emit_source("LOAD R2, 1\nSHL R1, R2, 63\nHALT");
    assert!(asm.contains("shl rax, 63"));
}

#[test]
fn repeat_jumps_backward_on_false_condition() {
    let asm = emit_source("VAR i, 0\nREPEAT\nINC i\nUNTIL i >= 3\nHALT");
    // the condition's false branch must point at repeat_start_0, not
    // forward to any end label - REPEAT has no end label at all.
    assert!(asm.contains("repeat_start_0:"));
    assert!(!asm.contains("repeat_end_"));
}

#[test]
fn function_never_falls_through_from_start() {
    let asm = emit_source("FUNC noop\nRET\nENDFUNC\nHALT");
    let start_idx = asm.find("_start:").unwrap();
    let func_idx = asm.find("noop:").unwrap();
    let first_syscall_idx = asm[start_idx..].find("syscall").unwrap() + start_idx;
    assert!(func_idx > first_syscall_idx);
}

#[test]
fn ret_with_register_already_in_rax_skips_the_redundant_mov() {
    let asm = emit_source("FUNC f\nLOAD R1, 1\nRET R1\nENDFUNC\nHALT");
    assert!(!asm.contains("mov rax, rax"));
}
