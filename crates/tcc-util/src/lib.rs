//! tcc-util - Shared types for the TinyCompiled pipeline
//!
//! Every later stage (`tcc-lex`, `tcc-par`, `tcc-gen`, `tcc-drv`) depends on
//! this crate for two things only: a source position record (`Position`) and
//! a single structured error type (`Error`). Nothing here knows about TC
//! syntax or semantics — that keeps the dependency graph a strict chain
//! instead of a web.

use std::fmt;

use thiserror::Error as ThisError;

/// A 1-based line/column location in a source file.
///
/// Every token the scanner produces, and every error any stage reports,
/// carries one of these. Lines and columns both start at 1, never 0 — an
/// empty or all-whitespace source still has a well-defined `Position { line:
/// 1, column: 1 }` for its `EOF` token.
///
/// # Examples
///
/// ```
/// use tcc_util::Position;
///
/// let pos = Position::new(1, 1);
/// assert_eq!(pos.line, 1);
/// assert_eq!(pos.column, 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, 1-based.
    pub line: u32,
    /// Column number, 1-based, counted in characters (not bytes).
    pub column: u32,
}

impl Position {
    /// The position of the very first character of a source file.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The pipeline stage that raised an [`Error`].
///
/// Purely informational — it never changes propagation behavior, it just
/// lets a caller (or a test assertion) distinguish "the scanner choked on
/// this character" from "the parser expected a different token" without
/// parsing the message string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Raised by `tcc-lex` while turning source text into tokens.
    Lexical,
    /// Raised by `tcc-par` while turning tokens into an AST.
    Syntactic,
    /// Raised by `tcc-gen` while walking a syntactically valid AST —
    /// `spec.md` §7's "minimal, at emission" semantic errors (conflicting
    /// variable redeclaration, an undeclared `LOOP` counter).
    Semantic,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lexical => write!(f, "lexical"),
            Stage::Syntactic => write!(f, "syntactic"),
            Stage::Semantic => write!(f, "semantic"),
        }
    }
}

/// A single structured compile error.
///
/// This is the uniform error surface `spec.md` §6.1 describes: every stage
/// that can fail (the scanner, the parser) reports exactly one of these, and
/// the pipeline driver aborts the whole compile as soon as the first one
/// appears (`spec.md` §7 — no partial AST, no speculative recovery).
///
/// # Examples
///
/// ```
/// use tcc_util::{Error, Stage};
///
/// let err = Error::new(Stage::Lexical, 3, 7, "unrecognized character '@'");
/// assert_eq!(format!("{err}"), "3:7: unrecognized character '@'");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{line}:{column}: {message}")]
pub struct Error {
    /// The pipeline stage that raised the error.
    pub stage: Stage,
    /// 1-based line of the offending token or character.
    pub line: u32,
    /// 1-based column of the offending token or character.
    pub column: u32,
    /// Human-readable description.
    pub message: String,
}

impl Error {
    /// Builds an error at a given line/column.
    pub fn new(stage: Stage, line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            stage,
            line,
            column,
            message: message.into(),
        }
    }

    /// Builds an error at a [`Position`].
    pub fn at(stage: Stage, pos: Position, message: impl Into<String>) -> Self {
        Self::new(stage, pos.line, pos.column, message)
    }
}

/// Result type alias used throughout the pipeline.
pub type Result<T> = std::result::Result<T, Error>;
