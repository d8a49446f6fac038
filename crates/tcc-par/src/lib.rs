//! tcc-par - Recursive-descent parser for TC
//!
//! ============================================================================
//! WHAT THIS CRATE DOES
//! ============================================================================
//!
//! Consumes the token sequence `tcc-lex` produces and builds the AST
//! (`tcc_par::ast`). The parser is single-token-lookahead recursive descent
//! with no backtracking: every statement is identified by its leading
//! keyword, dispatched through one `match` (`spec.md` §4.2).
//!
//! Unlike a typical compiler front end, this parser does **not** attempt
//! error recovery. `spec.md` §7's propagation policy is "the first error in
//! a stage aborts that stage" — a syntax error anywhere means `parse`
//! returns `Err` immediately, with no partial AST and no synchronization
//! token search. This is a deliberate simplification over the teacher
//! crate's diagnostic-accumulating parser (see DESIGN.md): TC programs are
//! small and single-file, so "stop at the first mistake and say where" beats
//! a parser that tries to guess past it.
//!
//! ============================================================================
//! BLOCK PARSING PATTERN
//! ============================================================================
//!
//! Every block construct (`IF`, `WHILE`, `FOR`, `LOOP`, `REPEAT`, `FUNC`)
//! reads its body with [`Parser::parse_body`], which collects statements
//! until the current token is one of the caller-supplied terminator kinds.
//! The block's own parse function then consumes that terminator. This keeps
//! nested blocks that share terminator keywords (`ELSE`/`ENDIF` inside a
//! `WHILE` inside an `IF`, for instance) unambiguous: each `parse_body` call
//! only ever looks at the *current* block's terminator set.

pub mod ast;
mod control;
mod operand;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::{
    ArithOp, BitwiseOp, Condition, IncDecOp, Operand, Program, RegOrImm, RegOrIdent, RelOp,
    ShiftOp, Stmt,
};

use tcc_lex::{Token, TokenKind};
use tcc_util::{Error, Result, Stage};

/// Parses a token sequence (as produced by `tcc_lex::tokenize`) into a
/// [`Program`].
///
/// Convenience wrapper equivalent to constructing a [`Parser`] and calling
/// [`Parser::parse_program`].
pub fn parse(tokens: Vec<Token>) -> Result<Program> {
    Parser::new(tokens).parse_program()
}

/// Recursive-descent parser over a fixed token sequence.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// `tokens` must end in `Eof` (as `tcc_lex::tokenize` guarantees); an
    /// empty vector is treated as a program with no tokens at all, which
    /// will fail the first time the parser looks at the current token.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses the entire token stream into a [`Program`].
    pub fn parse_program(&mut self) -> Result<Program> {
        let body = self.parse_body(&[TokenKind::Eof])?;
        self.expect(&TokenKind::Eof)?;
        Ok(body)
    }

    // ----------------------------------------------------------------
    // Token stream primitives
    // ----------------------------------------------------------------

    pub(crate) fn current(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .unwrap_or_else(|| self.tokens.last().expect("token stream always ends in Eof"))
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if self.pos < self.tokens.len() - 1 || tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    /// Skips any run of `Newline` tokens at the current position.
    ///
    /// TC statements are separated by one or more newlines
    /// (`tcc-lex` has already collapsed runs of blank lines to a single
    /// `Newline` token, so this only ever skips one token per call in
    /// practice — but it loops regardless, to stay correct if that scanner
    /// invariant ever changes).
    pub(crate) fn skip_newlines(&mut self) {
        while self.current().kind == TokenKind::Newline {
            self.advance();
        }
    }

    /// Reads statements until the current token matches one of `until`,
    /// or `Eof`.
    ///
    /// `spec.md` §4.2: each statement is terminated either by one or more
    /// `NEWLINE`s or by a block-terminator keyword — `until` is exactly the
    /// set of block-terminator keywords valid at this nesting level, so
    /// after each statement the current token must be `Newline`, a member
    /// of `until`, or `Eof`; anything else means the source ran two
    /// statements together with no separator.
    pub(crate) fn parse_body(&mut self, until: &[TokenKind]) -> Result<Vec<Stmt>> {
        let mut stmts = Vec::new();
        self.skip_newlines();
        loop {
            if until.contains(&self.current().kind) || self.current().kind == TokenKind::Eof {
                break;
            }
            stmts.push(self.parse_stmt()?);
            if until.contains(&self.current().kind) || self.current().kind == TokenKind::Eof {
                break;
            }
            if self.current().kind != TokenKind::Newline {
                return Err(self.unexpected("expected a newline or block terminator after statement"));
            }
            self.skip_newlines();
        }
        Ok(stmts)
    }

    /// Consumes the current token if its kind equals `kind`, erroring
    /// otherwise.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Token> {
        if &self.current().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("expected {kind:?}")))
        }
    }

    /// Consumes a `Register` token, returning its index.
    pub(crate) fn expect_register(&mut self) -> Result<u8> {
        match self.current().kind.clone() {
            TokenKind::Register(r) => {
                self.advance();
                Ok(r)
            },
            _ => Err(self.unexpected("expected a register (R1..R8)")),
        }
    }

    /// Consumes an `Identifier` token, returning its text.
    pub(crate) fn expect_identifier(&mut self) -> Result<String> {
        match self.current().kind.clone() {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(name)
            },
            _ => Err(self.unexpected("expected an identifier")),
        }
    }

    /// Consumes a `Number` token, returning its value.
    pub(crate) fn expect_number(&mut self) -> Result<i64> {
        match self.current().kind.clone() {
            TokenKind::Number(n) => {
                self.advance();
                Ok(n)
            },
            _ => Err(self.unexpected("expected a numeric literal")),
        }
    }

    pub(crate) fn unexpected(&self, message: &str) -> Error {
        let tok = self.current();
        Error::new(
            Stage::Syntactic,
            tok.line,
            tok.column,
            format!("{message}, found {:?}", tok.kind),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(source: &str) -> Program {
        let tokens = tcc_lex::tokenize(source).unwrap();
        parse(tokens).unwrap_or_else(|e| panic!("parse error on {source:?}: {e}"))
    }

    #[test]
    fn empty_program_parses_to_empty_vec() {
        assert_eq!(program(""), Vec::<Stmt>::new());
    }

    #[test]
    fn halt_and_nop_parse() {
        assert_eq!(program("HALT\nNOP\n"), vec![Stmt::Halt, Stmt::Nop]);
    }

    #[test]
    fn eof_inside_unclosed_if_is_a_syntax_error() {
        // spec.md §8 negative scenario: "IF R1 > 10\nPRINT R1" with no ENDIF.
        let tokens = tcc_lex::tokenize("IF R1 > 10\nPRINT R1").unwrap();
        assert!(parse(tokens).is_err());
    }
}
