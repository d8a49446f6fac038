//! Identifier, keyword, and register lexing.
//!
//! `spec.md` §4.1 rule 7: a lexeme starting with `[A-Za-z_]` and continuing
//! with `[A-Za-z0-9_]*` is, in order of priority:
//!
//! 1. exactly `R1`..`R8`, case-sensitive -> `REGISTER`,
//! 2. a case-insensitive match against the keyword table -> that keyword,
//! 3. otherwise -> `IDENTIFIER`, keeping the source's original casing.
//!
//! The keyword table is a hashed lookup keyed on the uppercased lexeme
//! (`spec.md` §9: "do not use regex alternation over all cases"), built
//! once and shared across every `Scanner`.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

use super::Scanner;

fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        use TokenKind::*;
        FxHashMap::from_iter([
            ("VAR", Var),
            ("LOAD", Load),
            ("SET", Set),
            ("MOVE", Move),
            ("ADD", Add),
            ("SUB", Sub),
            ("MUL", Mul),
            ("DIV", Div),
            ("INC", Inc),
            ("DEC", Dec),
            ("AND", And),
            ("OR", Or),
            ("XOR", Xor),
            ("NOT", Not),
            ("SHL", Shl),
            ("SHR", Shr),
            ("FUNC", Func),
            ("ENDFUNC", EndFunc),
            ("CALL", Call),
            ("RET", Ret),
            ("LOOP", Loop),
            ("ENDLOOP", EndLoop),
            ("WHILE", While),
            ("ENDWHILE", EndWhile),
            ("FOR", For),
            ("ENDFOR", EndFor),
            ("FROM", From),
            ("TO", To),
            ("STEP", Step),
            ("REPEAT", Repeat),
            ("UNTIL", Until),
            ("IF", If),
            ("ELSE", Else),
            ("ENDIF", EndIf),
            ("PUSH", Push),
            ("POP", Pop),
            ("PRINT", Print),
            ("INPUT", Input),
            ("HALT", Halt),
            ("NOP", Nop),
        ])
    })
}

/// Parses a lexeme as a register name: exactly `R1`..`R8`, case-sensitive.
fn register_index(lexeme: &str) -> Option<u8> {
    let mut chars = lexeme.chars();
    if chars.next()? != 'R' {
        return None;
    }
    let digit = chars.next()?;
    if chars.next().is_some() {
        return None; // more than two characters, e.g. "R10"
    }
    let index = digit.to_digit(10)? as u8;
    (1..=8).contains(&index).then_some(index)
}

impl<'a> Scanner<'a> {
    /// Scans an identifier, keyword, or register starting at the cursor.
    pub(super) fn scan_identifier_or_keyword(&mut self) -> TokenKind {
        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_alphanumeric() || self.cursor.current_char() == '_'
        {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start);

        if let Some(index) = register_index(lexeme) {
            return TokenKind::Register(index);
        }

        let upper = lexeme.to_ascii_uppercase();
        if let Some(kind) = keyword_table().get(upper.as_str()) {
            return kind.clone();
        }

        TokenKind::Identifier(lexeme.to_string())
    }
}
