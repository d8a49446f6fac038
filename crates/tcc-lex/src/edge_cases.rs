//! Boundary and property-style tests for the scanner.
//!
//! Mirrors `spec.md` §8's testable properties: scanner idempotence under
//! inserted whitespace, comment neutrality, keyword case-insensitivity, and
//! the `i64::MIN`/`i64::MAX` boundary.

use proptest::prelude::*;

use crate::{tokenize, Token, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap_or_else(|e| panic!("unexpected scan error on {source:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn every_token_has_a_position_at_or_after_one_one() {
    for tok in tokenize("VAR x, 42\nPRINT x\nHALT\n").unwrap() {
        assert!(tok.line >= 1, "line must be >= 1: {tok:?}");
        assert!(tok.column >= 1, "column must be >= 1: {tok:?}");
    }
}

#[test]
fn r9_is_not_a_register_load_source() {
    // spec.md §8 negative scenario: LOAD R9, 1 — R9 is an identifier, not a
    // register, so it scans cleanly but is semantically a variable load.
    let tokens = tokenize("LOAD R9, 1").unwrap();
    assert_eq!(
        tokens[1].kind,
        TokenKind::Identifier("R9".to_string())
    );
}

#[test]
fn boundary_values_scan() {
    assert_eq!(kinds("9223372036854775807"), vec![TokenKind::Number(i64::MAX), TokenKind::Eof]);
    assert_eq!(kinds("-9223372036854775808"), vec![TokenKind::Number(i64::MIN), TokenKind::Eof]);
}

#[test]
fn out_of_range_values_error_cleanly() {
    assert!(tokenize("99999999999999999999").is_err());
    assert!(tokenize("-99999999999999999999").is_err());
}

proptest! {
    /// Scanner idempotence on whitespace (spec.md §8): inserting extra
    /// spaces/tabs between tokens never changes the token *kind* stream.
    #[test]
    fn whitespace_padding_preserves_token_kinds(pad in 1usize..6) {
        let base = "LOAD R1, 10\nADD R2, R1, R3\nPRINT R2\nHALT\n";
        let padded = base.replace(' ', &" ".repeat(pad));
        prop_assert_eq!(kinds(base), kinds(&padded));
    }

    /// Comment neutrality (spec.md §8): appending `; ...` to any line
    /// doesn't change the token stream.
    #[test]
    fn trailing_comment_is_neutral(comment in "[ -~]{0,20}") {
        let base = "LOAD R1, 10\nPRINT R1\nHALT\n";
        let with_comments: String = base
            .lines()
            .map(|line| format!("{line} ; {comment}\n"))
            .collect();
        prop_assert_eq!(kinds(base), kinds(&with_comments));
    }
}

#[test]
fn keyword_case_insensitivity_preserves_value_field() {
    // Every casing of a keyword produces the same TokenKind, and the
    // TokenKind's lexeme() is the canonical uppercase spelling regardless
    // of how it was written in source (spec.md §8).
    for variant in ["halt", "Halt", "HALT", "hAlT"] {
        let tok: Token = tokenize(variant).unwrap().into_iter().next().unwrap();
        assert_eq!(tok.kind, TokenKind::Halt);
        assert_eq!(tok.kind.lexeme(), "HALT");
    }
}
