//! Parsers for TC's block-bearing statements.

use tcc_lex::TokenKind;
use tcc_util::Result;

use crate::ast::Stmt;
use crate::Parser;

impl Parser {
    /// `IF cond ... [ELSE ...] ENDIF`.
    pub(crate) fn parse_if(&mut self) -> Result<Stmt> {
        self.advance(); // IF
        let cond = self.parse_condition()?;
        let then_body = self.parse_body(&[TokenKind::Else, TokenKind::EndIf])?;
        let else_body = if self.current().kind == TokenKind::Else {
            self.advance();
            Some(self.parse_body(&[TokenKind::EndIf])?)
        } else {
            None
        };
        self.expect(&TokenKind::EndIf)?;
        Ok(Stmt::If { cond, then_body, else_body })
    }

    /// `WHILE cond ... ENDWHILE`.
    pub(crate) fn parse_while(&mut self) -> Result<Stmt> {
        self.advance(); // WHILE
        let cond = self.parse_condition()?;
        let body = self.parse_body(&[TokenKind::EndWhile])?;
        self.expect(&TokenKind::EndWhile)?;
        Ok(Stmt::While { cond, body })
    }

    /// `FOR var FROM start TO end [STEP step] ... ENDFOR`.
    ///
    /// A `STEP` of `0` is rejected here, at parse time: it would make the
    /// loop's trip count ill-defined no matter how the emitter lowered it,
    /// so there is no reason to defer the check to code generation.
    pub(crate) fn parse_for(&mut self) -> Result<Stmt> {
        self.advance(); // FOR
        let var = self.expect_identifier()?;
        self.expect(&TokenKind::From)?;
        let start = self.expect_number()?;
        self.expect(&TokenKind::To)?;
        let end = self.expect_number()?;
        let step = if self.current().kind == TokenKind::Step {
            self.advance();
            self.expect_number()?
        } else {
            1
        };
        if step == 0 {
            return Err(self.unexpected("FOR step must not be 0"));
        }
        let body = self.parse_body(&[TokenKind::EndFor])?;
        self.expect(&TokenKind::EndFor)?;
        Ok(Stmt::For { var, start, end, step, body })
    }

    /// `LOOP counter, limit ... ENDLOOP`.
    ///
    /// `counter` must already be a declared variable name (checked by
    /// `tcc-gen`, not here — the parser has no symbol table); the body is
    /// responsible for advancing it. An `ENDLOOP` with no progress inside
    /// the body compiles to an infinite loop, same as writing it in assembly
    /// directly — this stage does not try to detect that.
    pub(crate) fn parse_loop(&mut self) -> Result<Stmt> {
        self.advance(); // LOOP
        let counter_name = self.expect_identifier()?;
        self.expect(&TokenKind::Comma)?;
        let limit = self.expect_number()?;
        let body = self.parse_body(&[TokenKind::EndLoop])?;
        self.expect(&TokenKind::EndLoop)?;
        Ok(Stmt::Loop { counter_name, limit, body })
    }

    /// `REPEAT ... UNTIL cond` - body runs at least once.
    pub(crate) fn parse_repeat(&mut self) -> Result<Stmt> {
        self.advance(); // REPEAT
        let body = self.parse_body(&[TokenKind::Until])?;
        self.expect(&TokenKind::Until)?;
        let cond = self.parse_condition()?;
        Ok(Stmt::Repeat { body, cond })
    }

    /// `FUNC name ... ENDFUNC`.
    ///
    /// TC has no nested function definitions (`spec.md` §3.6's Non-goals) —
    /// `parse_body` would happily recurse into one if the source contained
    /// one, since it has no notion of "currently inside a FUNC"; a nested
    /// `FUNC` is left for `tcc-gen` to reject, the same way an undeclared
    /// identifier is (see DESIGN.md).
    pub(crate) fn parse_func_def(&mut self) -> Result<Stmt> {
        self.advance(); // FUNC
        let name = self.expect_identifier()?;
        let body = self.parse_body(&[TokenKind::EndFunc])?;
        self.expect(&TokenKind::EndFunc)?;
        Ok(Stmt::FuncDef { name, body })
    }
}
