//! tcc-par - AST node definitions
//!
//! Every statement kind TC supports, as a closed set of variants. Adding a
//! new kind means adding a new `Stmt` arm, which forces every `match` over
//! `Stmt` in `tcc-gen` to grow a new arm too — the "sum types over class
//! hierarchies" design note in `spec.md` §9.

/// A parsed program: an ordered sequence of top-level statements.
pub type Program = Vec<Stmt>;

/// A value that is a register, an identifier, or an immediate integer.
///
/// Used wherever TC grammar accepts "register | identifier | immediate":
/// `LOAD`'s source, `PRINT`'s argument, a condition's right-hand side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// An already-evaluated 64-bit signed integer.
    Immediate(i64),
    /// A global variable name.
    Identifier(String),
    /// A virtual register, `1..=8`.
    Register(u8),
}

/// A value that is a register or an immediate integer, never an identifier.
///
/// Used by `SET`'s source and `ADD`/`SUB`/`MUL`/`DIV`'s right operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegOrImm {
    /// A virtual register, `1..=8`.
    Register(u8),
    /// An already-evaluated 64-bit signed integer.
    Immediate(i64),
}

/// A value that is a register or an identifier, never an immediate.
///
/// Used by `INC`/`DEC`'s target and `INPUT`'s target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegOrIdent {
    /// A virtual register, `1..=8`.
    Register(u8),
    /// A global variable name.
    Identifier(String),
}

/// A relational operator, as used in a [`Condition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelOp {
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
}

/// A condition as used by `IF`, `WHILE`, `REPEAT`/`UNTIL`, and `FOR`'s
/// implicit exit test.
///
/// `left` is restricted to register or identifier; `right` additionally
/// permits an immediate (`spec.md` §3.3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    /// Left-hand operand — register or identifier, never a bare immediate.
    pub left: Operand,
    /// The relational operator.
    pub op: RelOp,
    /// Right-hand operand — register, identifier, or immediate.
    pub right: Operand,
}

/// An `ADD`/`SUB`/`MUL`/`DIV` opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// An `INC`/`DEC` opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncDecOp {
    Inc,
    Dec,
}

/// An `AND`/`OR`/`XOR` opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

/// A `SHL`/`SHR` opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Shl,
    Shr,
}

/// A single TC statement.
///
/// Block-bearing variants (`If`, `While`, `For`, `Loop`, `Repeat`,
/// `FuncDef`) own their body as a plain `Vec<Stmt>` — TC's AST has no
/// cross-references between nodes, so simple tree ownership suffices
/// (`spec.md` §9, "arena or vector for AST nodes").
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// `VAR name[, init]` - declares a global 64-bit variable.
    VarDecl { name: String, init: Option<i64> },

    /// `LOAD dest_reg, src` - moves a value into a register.
    Load { dest_reg: u8, src: Operand },

    /// `SET dest_name, src` - moves a value into a variable.
    Set { dest_name: String, src: RegOrImm },

    /// `MOVE dest_reg, src_reg` - copies one register into another.
    Move { dest_reg: u8, src_reg: u8 },

    /// `ADD|SUB|MUL|DIV dest, left, right` - register arithmetic.
    BinaryArith {
        op: ArithOp,
        dest_reg: u8,
        left_reg: u8,
        right: RegOrImm,
    },

    /// `INC|DEC target` - increments or decrements a register or variable.
    UnaryArith { op: IncDecOp, target: RegOrIdent },

    /// `AND|OR|XOR dest, left, right` - register bitwise operation.
    BinaryBitwise {
        op: BitwiseOp,
        dest_reg: u8,
        left_reg: u8,
        right_reg: u8,
    },

    /// `NOT reg` - bitwise complement in place.
    Not { reg: u8 },

    /// `SHL|SHR dest, src, count` - shift by an immediate count, `0..=63`.
    Shift {
        op: ShiftOp,
        dest_reg: u8,
        src_reg: u8,
        count: u8,
    },

    /// `IF cond ... [ELSE ...] ENDIF`.
    If {
        cond: Condition,
        then_body: Vec<Stmt>,
        else_body: Option<Vec<Stmt>>,
    },

    /// `WHILE cond ... ENDWHILE` - condition-first loop.
    While { cond: Condition, body: Vec<Stmt> },

    /// `FOR var FROM start TO end [STEP step] ... ENDFOR`.
    ///
    /// `step` defaults to `1` and is never `0` in a successfully parsed
    /// program (`spec.md` §3.5, §8).
    For {
        var: String,
        start: i64,
        end: i64,
        step: i64,
        body: Vec<Stmt>,
    },

    /// `LOOP counter, limit ... ENDLOOP`.
    ///
    /// Repeats while `counter < limit`; the body is responsible for
    /// advancing `counter` (`spec.md` §3.4, §9).
    Loop {
        counter_name: String,
        limit: i64,
        body: Vec<Stmt>,
    },

    /// `REPEAT ... UNTIL cond` - body runs at least once, continues until
    /// `cond` becomes true.
    Repeat { body: Vec<Stmt>, cond: Condition },

    /// `FUNC name ... ENDFUNC` - a function definition.
    FuncDef { name: String, body: Vec<Stmt> },

    /// `CALL name`.
    Call { name: String },

    /// `RET [reg]` - returns, optionally leaving a value in `rax`.
    Return { value: Option<u8> },

    /// `PUSH reg`.
    Push { reg: u8 },

    /// `POP reg`.
    Pop { reg: u8 },

    /// `PRINT value` - writes a signed decimal integer, newline-terminated.
    Print { value: Operand },

    /// `INPUT target` - reads a signed decimal integer.
    Input { target: RegOrIdent },

    /// `HALT` - ends the program.
    Halt,

    /// `NOP` - does nothing.
    Nop,
}
