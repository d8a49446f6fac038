//! Boundary and negative-scenario tests mirroring `spec.md` §8.

use tcc_lex::tokenize;

use crate::{parse, Stmt};

fn parse_ok(source: &str) -> Vec<Stmt> {
    parse(tokenize(source).unwrap()).unwrap_or_else(|e| panic!("unexpected parse error: {e}"))
}

fn parse_err(source: &str) {
    let tokens = tokenize(source).expect("source should scan cleanly");
    assert!(parse(tokens).is_err(), "expected a parse error for {source:?}");
}

#[test]
fn sum_to_n_with_while_parses() {
    let src = "\
VAR n, 100
VAR sum, 0
VAR i, 1
WHILE i <= n
LOAD R1, sum
LOAD R2, i
ADD R3, R1, R2
SET sum, R3
INC i
ENDWHILE
PRINT sum
HALT
";
    let program = parse_ok(src);
    assert_eq!(program.len(), 6);
}

#[test]
fn for_ascending_and_descending_both_parse() {
    parse_ok("FOR i FROM 1 TO 5\nPRINT i\nENDFOR\nHALT");
    parse_ok("FOR i FROM 5 TO 1 STEP -1\nPRINT i\nENDFOR\nHALT");
}

#[test]
fn repeat_until_parses() {
    parse_ok("VAR i, 0\nREPEAT\nINC i\nPRINT i\nUNTIL i >= 3\nHALT");
}

#[test]
fn div_example_parses() {
    parse_ok("LOAD R1, 17\nLOAD R2, 5\nDIV R3, R1, R2\nPRINT R3\nHALT");
}

#[test]
fn missing_endif_is_a_syntax_error() {
    // spec.md §8 negative scenario.
    parse_err("IF R1 > 10\nPRINT R1\nHALT");
}

#[test]
fn condition_with_immediate_on_the_left_is_a_syntax_error() {
    parse_err("IF 10 > R1\nHALT\nENDIF");
}

#[test]
fn set_with_an_identifier_source_is_a_syntax_error() {
    // SET's source is register-or-immediate only; spec.md §3.4.
    parse_err("SET x, y\nHALT");
}

#[test]
fn load_with_register_r9_as_identifier_still_parses() {
    // spec.md §8 negative scenario: LOAD R9 names an identifier, not a
    // register (only R1..R8 scan as Register tokens) — this is valid syntax,
    // whose undeclared-identifier consequence is resolved later by tcc-gen.
    let program = parse_ok("LOAD R1, R9\nHALT");
    assert_eq!(program.len(), 2);
}

#[test]
fn deeply_nested_blocks_parse() {
    let src = "\
WHILE R1 < 10
IF R1 > 5
FOR i FROM 1 TO 3
LOOP j, 2
HALT
ENDLOOP
ENDFOR
ENDIF
INC R1
ENDWHILE
";
    parse_ok(src);
}

#[test]
fn function_with_call_and_return_parses() {
    let src = "\
FUNC square
MOVE R2, R1
MUL R1, R1, R2
RET R1
ENDFUNC
LOAD R1, 7
CALL square
PRINT R1
HALT
";
    let program = parse_ok(src);
    assert_eq!(program.len(), 5);
}

#[test]
fn empty_if_body_is_allowed() {
    parse_ok("IF R1 > 0\nENDIF\nHALT");
}

#[test]
fn trailing_garbage_after_halt_is_a_syntax_error() {
    parse_err("HALT\nENDIF");
}
