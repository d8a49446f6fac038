//! Numeric literal lexing - decimal, hexadecimal, and binary, signed.
//!
//! `spec.md` §4.1 rule 6 and §6.2: a numeric literal begins with an ASCII
//! digit, or with `-` immediately followed (no whitespace) by a digit. This
//! is the *only* place in TC a `-` is legal at the lexer level — there is no
//! binary-minus expression token, so `SUB R1, R2, -3` lexes as `SUB`, `R1`,
//! `,`, `R2`, `,`, `Number(-3)`, never as a stray minus followed by `3`.

use tcc_util::Result;

use crate::token::TokenKind;

use super::Scanner;

impl<'a> Scanner<'a> {
    /// `true` if the cursor sits at the start of a numeric literal.
    pub(super) fn starts_number(&self) -> bool {
        let c = self.cursor.current_char();
        c.is_ascii_digit() || (c == '-' && self.cursor.peek_char(1).is_ascii_digit())
    }

    /// Scans a numeric literal into a validated `i64`.
    ///
    /// Handles an optional leading `-`, then a `0x`/`0X` or `0b`/`0B` base
    /// prefix, falling back to decimal. An empty digit sequence after a base
    /// prefix, or a magnitude that doesn't fit in `i64`, is a lexical error.
    pub(super) fn scan_number(&mut self) -> Result<TokenKind> {
        let pos = self.mark();

        let negative = if self.cursor.current_char() == '-' {
            self.cursor.advance();
            true
        } else {
            false
        };

        let magnitude = if self.cursor.current_char() == '0'
            && matches!(self.cursor.peek_char(1), 'x' | 'X')
        {
            self.cursor.advance();
            self.cursor.advance();
            self.scan_digits(16, pos)?
        } else if self.cursor.current_char() == '0' && matches!(self.cursor.peek_char(1), 'b' | 'B')
        {
            self.cursor.advance();
            self.cursor.advance();
            self.scan_digits(2, pos)?
        } else {
            self.scan_digits(10, pos)?
        };

        if self.cursor.current_char().is_ascii_alphabetic() || self.cursor.current_char() == '_' {
            return Err(self.error(
                pos,
                "identifier cannot start with a digit (no separator between numeric literal and following name)",
            ));
        }

        self.finish_signed(magnitude, negative, pos)
    }

    /// Consumes a run of digits valid in `base` and parses them as `u64`.
    fn scan_digits(&mut self, base: u32, pos: tcc_util::Position) -> Result<u64> {
        let start = self.cursor.position();
        while self.cursor.current_char().is_digit(base) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        if text.is_empty() {
            return Err(self.error(pos, format!("malformed numeric literal: no digits in base-{base} literal")));
        }
        u64::from_str_radix(text, base)
            .map_err(|_| self.error(pos, format!("numeric literal '{text}' overflows 64-bit signed range")))
    }

    /// Combines an unsigned magnitude and sign into a validated `i64`,
    /// handling the `i64::MIN` asymmetry (its magnitude doesn't fit in
    /// `i64` on its own).
    fn finish_signed(&self, magnitude: u64, negative: bool, pos: tcc_util::Position) -> Result<TokenKind> {
        const MIN_MAGNITUDE: u64 = i64::MIN.unsigned_abs();

        if negative {
            if magnitude == MIN_MAGNITUDE {
                return Ok(TokenKind::Number(i64::MIN));
            }
            if magnitude > i64::MAX as u64 {
                return Err(self.error(pos, format!("numeric literal '-{magnitude}' overflows 64-bit signed range")));
            }
            Ok(TokenKind::Number(-(magnitude as i64)))
        } else {
            if magnitude > i64::MAX as u64 {
                return Err(self.error(pos, format!("numeric literal '{magnitude}' overflows 64-bit signed range")));
            }
            Ok(TokenKind::Number(magnitude as i64))
        }
    }
}
