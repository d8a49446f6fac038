//! Operand and condition parsing shared by several statement kinds.

use tcc_lex::TokenKind;
use tcc_util::Result;

use crate::ast::{Condition, Operand, RegOrImm, RegOrIdent, RelOp};
use crate::Parser;

impl Parser {
    /// Parses a full operand: register, identifier, or immediate.
    pub(crate) fn parse_operand(&mut self) -> Result<Operand> {
        match self.current().kind.clone() {
            TokenKind::Register(r) => {
                self.advance();
                Ok(Operand::Register(r))
            },
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Operand::Identifier(name))
            },
            TokenKind::Number(n) => {
                self.advance();
                Ok(Operand::Immediate(n))
            },
            _ => Err(self.unexpected("expected a register, identifier, or number")),
        }
    }

    /// Parses an operand restricted to register or immediate (`SET`'s
    /// source, an arithmetic right operand).
    pub(crate) fn parse_reg_or_imm(&mut self) -> Result<RegOrImm> {
        match self.current().kind.clone() {
            TokenKind::Register(r) => {
                self.advance();
                Ok(RegOrImm::Register(r))
            },
            TokenKind::Number(n) => {
                self.advance();
                Ok(RegOrImm::Immediate(n))
            },
            _ => Err(self.unexpected("expected a register or number")),
        }
    }

    /// Parses an operand restricted to register or identifier (`INC`/`DEC`'s
    /// target, `INPUT`'s target).
    pub(crate) fn parse_reg_or_ident(&mut self) -> Result<RegOrIdent> {
        match self.current().kind.clone() {
            TokenKind::Register(r) => {
                self.advance();
                Ok(RegOrIdent::Register(r))
            },
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(RegOrIdent::Identifier(name))
            },
            _ => Err(self.unexpected("expected a register or identifier")),
        }
    }

    /// Parses a condition's left operand: register or identifier only.
    ///
    /// `spec.md` §3.3 restricts a condition's left-hand side to a register
    /// or variable — `IF 10 > R1` is a syntax error, not merely a semantic
    /// one, because a bare immediate can never be the *subject* of a
    /// comparison in TC's grammar.
    fn parse_condition_left(&mut self) -> Result<Operand> {
        match self.current().kind.clone() {
            TokenKind::Register(r) => {
                self.advance();
                Ok(Operand::Register(r))
            },
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Operand::Identifier(name))
            },
            _ => Err(self.unexpected(
                "a condition's left-hand side must be a register or identifier, not an immediate",
            )),
        }
    }

    fn parse_rel_op(&mut self) -> Result<RelOp> {
        let op = match self.current().kind {
            TokenKind::Eq => RelOp::Eq,
            TokenKind::Neq => RelOp::Neq,
            TokenKind::Gt => RelOp::Gt,
            TokenKind::Lt => RelOp::Lt,
            TokenKind::Gte => RelOp::Gte,
            TokenKind::Lte => RelOp::Lte,
            _ => return Err(self.unexpected("expected a relational operator (== != > < >= <=)")),
        };
        self.advance();
        Ok(op)
    }

    /// Parses a full `left op right` condition.
    pub(crate) fn parse_condition(&mut self) -> Result<Condition> {
        let left = self.parse_condition_left()?;
        let op = self.parse_rel_op()?;
        let right = self.parse_operand()?;
        Ok(Condition { left, op, right })
    }
}
