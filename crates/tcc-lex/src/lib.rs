//! tcc-lex - Lexical analyzer for TC source text
//!
//! ============================================================================
//! WHAT THIS CRATE DOES
//! ============================================================================
//!
//! Turns a TC source string into a flat token sequence terminated by a single
//! `Eof` token. This is the only place in the pipeline that:
//!
//! - resolves a numeric literal's base (decimal / `0x` / `0b`) and optional
//!   leading minus sign into an `i64`,
//! - tells a `REGISTER` lexeme (`R1`..`R8`, case-sensitive) apart from an
//!   `IDENTIFIER` that merely starts with `R`,
//! - collapses runs of blank lines into a single `NEWLINE` token.
//!
//! Every later stage trusts that a `Number` token already holds a valid
//! 64-bit signed value and that a `Register` token already holds an index in
//! `1..=8` — neither is re-validated by the parser or the emitter.
//!
//! ============================================================================
//! SCAN ORDER
//! ============================================================================
//!
//! At each position, in priority order: whitespace (skipped), comments
//! (skipped), newlines (collapsed), two-character relational operators,
//! single-character punctuation, numeric literals, then identifiers /
//! keywords / registers. See `spec.md` §4.1 for the full table this mirrors.

pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Scanner;
pub use token::{Token, TokenKind, TokenValue};

use tcc_util::Result;

/// Scans `source` into a token sequence terminated by `Eof`.
///
/// Convenience wrapper equivalent to constructing a [`Scanner`] and driving
/// it with [`Scanner::next_token`] until `Eof`, inclusive.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let is_eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}
