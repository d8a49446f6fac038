//! Statement dispatch and parsers for TC's non-block statement kinds.

use tcc_lex::TokenKind;
use tcc_util::Result;

use crate::ast::{ArithOp, BitwiseOp, IncDecOp, ShiftOp, Stmt};
use crate::Parser;

impl Parser {
    /// Parses one statement, dispatching on the leading keyword.
    ///
    /// Block constructs (`IF`, `WHILE`, `FOR`, `LOOP`, `REPEAT`, `FUNC`) are
    /// handled in `control.rs`; everything else is handled here.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt> {
        match self.current().kind {
            TokenKind::Var => self.parse_var_decl(),
            TokenKind::Load => self.parse_load(),
            TokenKind::Set => self.parse_set(),
            TokenKind::Move => self.parse_move(),
            TokenKind::Add => self.parse_binary_arith(ArithOp::Add),
            TokenKind::Sub => self.parse_binary_arith(ArithOp::Sub),
            TokenKind::Mul => self.parse_binary_arith(ArithOp::Mul),
            TokenKind::Div => self.parse_binary_arith(ArithOp::Div),
            TokenKind::Inc => self.parse_unary_arith(IncDecOp::Inc),
            TokenKind::Dec => self.parse_unary_arith(IncDecOp::Dec),
            TokenKind::And => self.parse_binary_bitwise(BitwiseOp::And),
            TokenKind::Or => self.parse_binary_bitwise(BitwiseOp::Or),
            TokenKind::Xor => self.parse_binary_bitwise(BitwiseOp::Xor),
            TokenKind::Not => self.parse_not(),
            TokenKind::Shl => self.parse_shift(ShiftOp::Shl),
            TokenKind::Shr => self.parse_shift(ShiftOp::Shr),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Loop => self.parse_loop(),
            TokenKind::Repeat => self.parse_repeat(),
            TokenKind::Func => self.parse_func_def(),
            TokenKind::Call => self.parse_call(),
            TokenKind::Ret => self.parse_return(),
            TokenKind::Push => self.parse_push(),
            TokenKind::Pop => self.parse_pop(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Input => self.parse_input(),
            TokenKind::Halt => {
                self.advance();
                Ok(Stmt::Halt)
            },
            TokenKind::Nop => {
                self.advance();
                Ok(Stmt::Nop)
            },
            _ => Err(self.unexpected("expected a statement")),
        }
    }

    /// `VAR name[, init]`.
    ///
    /// The initializer parses as a bare numeric literal, never a register or
    /// identifier: it is placed directly into a `.data` `dq` directive by
    /// the emitter, which has no register or variable context to draw from
    /// at that point in the program (see DESIGN.md).
    fn parse_var_decl(&mut self) -> Result<Stmt> {
        self.advance(); // VAR
        let name = self.expect_identifier()?;
        let init = if self.current().kind == TokenKind::Comma {
            self.advance();
            Some(self.expect_number()?)
        } else {
            None
        };
        Ok(Stmt::VarDecl { name, init })
    }

    /// `LOAD dest_reg, src`.
    fn parse_load(&mut self) -> Result<Stmt> {
        self.advance(); // LOAD
        let dest_reg = self.expect_register()?;
        self.expect(&TokenKind::Comma)?;
        let src = self.parse_operand()?;
        Ok(Stmt::Load { dest_reg, src })
    }

    /// `SET dest_name, src`.
    fn parse_set(&mut self) -> Result<Stmt> {
        self.advance(); // SET
        let dest_name = self.expect_identifier()?;
        self.expect(&TokenKind::Comma)?;
        let src = self.parse_reg_or_imm()?;
        Ok(Stmt::Set { dest_name, src })
    }

    /// `MOVE dest_reg, src_reg`.
    fn parse_move(&mut self) -> Result<Stmt> {
        self.advance(); // MOVE
        let dest_reg = self.expect_register()?;
        self.expect(&TokenKind::Comma)?;
        let src_reg = self.expect_register()?;
        Ok(Stmt::Move { dest_reg, src_reg })
    }

    /// `ADD|SUB|MUL|DIV dest, left, right`.
    fn parse_binary_arith(&mut self, op: ArithOp) -> Result<Stmt> {
        self.advance();
        let dest_reg = self.expect_register()?;
        self.expect(&TokenKind::Comma)?;
        let left_reg = self.expect_register()?;
        self.expect(&TokenKind::Comma)?;
        let right = self.parse_reg_or_imm()?;
        Ok(Stmt::BinaryArith { op, dest_reg, left_reg, right })
    }

    /// `INC|DEC target`.
    fn parse_unary_arith(&mut self, op: IncDecOp) -> Result<Stmt> {
        self.advance();
        let target = self.parse_reg_or_ident()?;
        Ok(Stmt::UnaryArith { op, target })
    }

    /// `AND|OR|XOR dest, left, right` - all three operands are registers.
    fn parse_binary_bitwise(&mut self, op: BitwiseOp) -> Result<Stmt> {
        self.advance();
        let dest_reg = self.expect_register()?;
        self.expect(&TokenKind::Comma)?;
        let left_reg = self.expect_register()?;
        self.expect(&TokenKind::Comma)?;
        let right_reg = self.expect_register()?;
        Ok(Stmt::BinaryBitwise { op, dest_reg, left_reg, right_reg })
    }

    /// `NOT reg`.
    fn parse_not(&mut self) -> Result<Stmt> {
        self.advance(); // NOT
        let reg = self.expect_register()?;
        Ok(Stmt::Not { reg })
    }

    /// `SHL|SHR dest, src, count` - `count` is an immediate `0..=63`.
    fn parse_shift(&mut self, op: ShiftOp) -> Result<Stmt> {
        self.advance();
        let dest_reg = self.expect_register()?;
        self.expect(&TokenKind::Comma)?;
        let src_reg = self.expect_register()?;
        self.expect(&TokenKind::Comma)?;
        let count_val = self.expect_number()?;
        let count = u8::try_from(count_val).map_err(|_| {
            self.unexpected(&format!("shift count must be 0..=63, found {count_val}"))
        })?;
        if count > 63 {
            return Err(self.unexpected(&format!("shift count must be 0..=63, found {count}")));
        }
        Ok(Stmt::Shift { op, dest_reg, src_reg, count })
    }

    /// `CALL name`.
    fn parse_call(&mut self) -> Result<Stmt> {
        self.advance(); // CALL
        let name = self.expect_identifier()?;
        Ok(Stmt::Call { name })
    }

    /// `RET [reg]`.
    fn parse_return(&mut self) -> Result<Stmt> {
        self.advance(); // RET
        let value = match self.current().kind {
            TokenKind::Register(r) => {
                self.advance();
                Some(r)
            },
            _ => None,
        };
        Ok(Stmt::Return { value })
    }

    /// `PUSH reg`.
    fn parse_push(&mut self) -> Result<Stmt> {
        self.advance(); // PUSH
        let reg = self.expect_register()?;
        Ok(Stmt::Push { reg })
    }

    /// `POP reg`.
    fn parse_pop(&mut self) -> Result<Stmt> {
        self.advance(); // POP
        let reg = self.expect_register()?;
        Ok(Stmt::Pop { reg })
    }

    /// `PRINT value`.
    fn parse_print(&mut self) -> Result<Stmt> {
        self.advance(); // PRINT
        let value = self.parse_operand()?;
        Ok(Stmt::Print { value })
    }

    /// `INPUT target`.
    fn parse_input(&mut self) -> Result<Stmt> {
        self.advance(); // INPUT
        let target = self.parse_reg_or_ident()?;
        Ok(Stmt::Input { target })
    }
}
