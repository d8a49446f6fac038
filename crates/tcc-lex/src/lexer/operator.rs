//! Relational operator lexing - `==`, `!=`, `>=`, `<=`, `>`, `<`.
//!
//! All six require at most one character of lookahead (`spec.md` §9,
//! "Two-character operator lookahead"). A bare `!` that isn't followed by
//! `=` is not otherwise meaningful in TC and is a lexical error; a bare `=`
//! is likewise not meaningful on its own (assignment is the `SET` keyword,
//! not an operator).

use tcc_util::Result;

use crate::token::TokenKind;

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a relational operator starting at the cursor, if there is one.
    ///
    /// Returns `Ok(None)` and leaves the cursor untouched when the current
    /// character isn't the start of a relational operator, so the caller can
    /// fall through to the next scan rule.
    pub(super) fn try_scan_relational(&mut self) -> Result<Option<TokenKind>> {
        let pos = self.mark();
        match self.cursor.current_char() {
            '=' => {
                self.cursor.advance();
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    Ok(Some(TokenKind::Eq))
                } else {
                    Err(self.error(pos, "unrecognized character '='"))
                }
            },
            '!' => {
                self.cursor.advance();
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    Ok(Some(TokenKind::Neq))
                } else {
                    Err(self.error(pos, "stray '!' not followed by '='"))
                }
            },
            '>' => {
                self.cursor.advance();
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    Ok(Some(TokenKind::Gte))
                } else {
                    Ok(Some(TokenKind::Gt))
                }
            },
            '<' => {
                self.cursor.advance();
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    Ok(Some(TokenKind::Lte))
                } else {
                    Ok(Some(TokenKind::Lt))
                }
            },
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn all_six_relational_operators_scan() {
        assert_eq!(kinds("=="), vec![TokenKind::Eq, TokenKind::Eof]);
        assert_eq!(kinds("!="), vec![TokenKind::Neq, TokenKind::Eof]);
        assert_eq!(kinds(">="), vec![TokenKind::Gte, TokenKind::Eof]);
        assert_eq!(kinds("<="), vec![TokenKind::Lte, TokenKind::Eof]);
        assert_eq!(kinds(">"), vec![TokenKind::Gt, TokenKind::Eof]);
        assert_eq!(kinds("<"), vec![TokenKind::Lt, TokenKind::Eof]);
    }

    #[test]
    fn gt_does_not_need_a_following_char() {
        assert_eq!(kinds("R1>R2"), vec![
            TokenKind::Register(1),
            TokenKind::Gt,
            TokenKind::Register(2),
            TokenKind::Eof,
        ]);
    }
}
