//! End-to-end source-to-assembly scenarios — `spec.md` §8's six positive
//! scenarios.

#[test]
fn sum_to_n_via_while_loop() {
    let source = "\
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
    let asm = tcc_drv::compile(source).unwrap();
    assert!(asm.contains("while_start_0:"));
    assert!(asm.contains("while_end_0:"));
    assert!(asm.contains("call print_int"));
}

#[test]
fn for_loop_ascending() {
    let source = "\
FOR i FROM 1 TO 10
PRINT i
ENDFOR
HALT
";
    let asm = tcc_drv::compile(source).unwrap();
    assert!(asm.contains("jg for_end_0"));
    assert!(asm.contains("inc qword [i]"));
}

#[test]
fn for_loop_descending() {
    let source = "\
FOR i FROM 10 TO 1 STEP -1
PRINT i
ENDFOR
HALT
";
    let asm = tcc_drv::compile(source).unwrap();
    assert!(asm.contains("jl for_end_0"));
    assert!(asm.contains("dec qword [i]"));
}

#[test]
fn repeat_until_runs_body_before_first_check() {
    let source = "\
VAR i, 0
REPEAT
INC i
PRINT i
UNTIL i >= 5
HALT
";
    let asm = tcc_drv::compile(source).unwrap();
    assert!(asm.contains("repeat_start_0:"));
}

#[test]
fn div_example_with_register_operands() {
    let source = "\
LOAD R1, 17
LOAD R2, 5
DIV R3, R1, R2
PRINT R3
HALT
";
    let asm = tcc_drv::compile(source).unwrap();
    assert!(asm.contains("cqo"));
    assert!(asm.contains("idiv rbx"));
}

#[test]
fn loop_construct_with_a_predeclared_counter() {
    let source = "\
VAR count, 0
LOOP count, 5
INC count
PRINT count
ENDLOOP
HALT
";
    let asm = tcc_drv::compile(source).unwrap();
    assert!(asm.contains("loop_start_0:"));
    assert!(asm.contains("jge loop_end_0"));
}

#[test]
fn function_definition_call_and_return_value() {
    let source = "\
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
    let asm = tcc_drv::compile(source).unwrap();
    assert!(asm.contains("square:"));
    assert!(asm.contains("call square"));
}

#[test]
fn input_then_print_round_trip() {
    let source = "\
VAR x
INPUT x
PRINT x
HALT
";
    let asm = tcc_drv::compile(source).unwrap();
    assert!(asm.contains("call read_int"));
    assert!(asm.contains("call print_int"));
}

#[test]
fn tokens_and_ast_are_individually_inspectable() {
    let source = "LOAD R1, 10\nHALT";
    let tokens = tcc_drv::tokenize(source).unwrap();
    assert_eq!(tokens.len(), 7); // LOAD R1 , 10 NEWLINE HALT Eof
    let program = tcc_drv::parse(tokens).unwrap();
    assert_eq!(program.len(), 2);
    let asm = tcc_drv::emit(&program).unwrap();
    assert!(asm.contains("mov rax, 10"));
}
