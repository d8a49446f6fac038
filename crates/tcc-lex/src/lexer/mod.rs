//! Scanner core - dispatch loop and whitespace/comment/newline handling.

mod identifier;
mod number;
mod operator;

use tcc_util::{Error, Position, Result, Stage};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Converts TC source text into a token sequence.
///
/// A `Scanner` is driven one token at a time with [`Scanner::next_token`]
/// until it returns `Eof`, inclusive. It holds no state beyond the
/// underlying [`Cursor`] — two scanners over the same source produce
/// identical output, satisfying the determinism invariant in `spec.md` §5.
///
/// # Examples
///
/// ```
/// use tcc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("VAR x, 1");
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Var);
/// assert_eq!(
///     scanner.next_token().unwrap().kind,
///     TokenKind::Identifier("x".to_string())
/// );
/// ```
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Scans and returns the next token.
    ///
    /// Returns `Ok(Token { kind: TokenKind::Eof, .. })` forever once the end
    /// of input is reached — callers stop pulling once they see it.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_insignificant();
        let start = self.mark();

        let c = self.cursor.current_char();
        if c == '\0' {
            return Ok(Token::at(TokenKind::Eof, start));
        }
        if c == '\n' {
            return Ok(Token::at(self.scan_newline_run(), start));
        }
        if c == ',' {
            self.cursor.advance();
            return Ok(Token::at(TokenKind::Comma, start));
        }
        if c == ':' {
            self.cursor.advance();
            return Ok(Token::at(TokenKind::Colon, start));
        }
        if let Some(kind) = self.try_scan_relational()? {
            return Ok(Token::at(kind, start));
        }
        if self.starts_number() {
            return Ok(Token::at(self.scan_number()?, start));
        }
        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(Token::at(self.scan_identifier_or_keyword(), start));
        }
        if c == '-' {
            return Err(self.error(start, "stray '-' not followed by a digit"));
        }

        self.cursor.advance();
        Err(self.error(start, format!("unrecognized character '{c}'")))
    }

    /// Skips spaces, tabs, and `;`-to-end-of-line comments.
    ///
    /// Does *not* skip newlines — those are significant tokens and are
    /// handled (with run-collapsing) by [`Scanner::scan_newline_run`].
    fn skip_insignificant(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' => {
                    self.cursor.advance();
                },
                ';' => {
                    while !matches!(self.cursor.current_char(), '\n' | '\0') {
                        self.cursor.advance();
                    }
                },
                _ => break,
            }
        }
    }

    /// Consumes one or more consecutive newlines (interleaved with
    /// whitespace and comments) and returns a single `Newline` kind.
    ///
    /// `spec.md` §4.1 permits either collapsing adjacent newlines in the
    /// scanner or skipping runs in the parser; this scanner collapses them,
    /// so the parser only ever sees isolated statement separators.
    fn scan_newline_run(&mut self) -> TokenKind {
        loop {
            self.cursor.advance(); // consume the '\n' that got us here
            self.skip_insignificant();
            if self.cursor.current_char() != '\n' {
                break;
            }
        }
        TokenKind::Newline
    }

    fn mark(&self) -> Position {
        Position::new(self.cursor.line(), self.cursor.column())
    }

    fn error(&self, at: Position, message: impl Into<String>) -> Error {
        Error::at(Stage::Lexical, at, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        crate::tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn comment_is_skipped() {
        assert_eq!(
            kinds("HALT ; stop now\n"),
            vec![TokenKind::Halt, TokenKind::Newline, TokenKind::Eof]
        );
    }

    #[test]
    fn blank_lines_collapse_to_one_newline() {
        assert_eq!(
            kinds("HALT\n\n\n\nNOP\n"),
            vec![
                TokenKind::Halt,
                TokenKind::Newline,
                TokenKind::Nop,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn whitespace_between_tokens_is_insignificant() {
        assert_eq!(kinds("HALT"), kinds("   HALT   "));
        assert_eq!(kinds("LOAD R1,1"), kinds("LOAD\tR1  ,\t1"));
    }

    #[test]
    fn bare_equals_is_an_error() {
        assert!(crate::tokenize("x = 1").is_err());
    }

    #[test]
    fn bare_bang_is_an_error() {
        assert!(crate::tokenize("IF R1 ! R2\nENDIF").is_err());
    }

    #[test]
    fn stray_minus_is_an_error() {
        assert!(crate::tokenize("SUB R1, R2, -").is_err());
    }
}
