//! Error types surfaced by the lexer.
//!
//! Scan errors normally travel in-band as [`ItemKind::ERROR`] items; these
//! types are what [`Item::err`] and [`Lexer::try_new`] hand back when a
//! caller wants a `std::error::Error`.
//!
//! [`ItemKind::ERROR`]: crate::ItemKind::ERROR
//! [`Item::err`]: crate::Item::err
//! [`Lexer::try_new`]: crate::Lexer::try_new

use thiserror::Error;

/// A scan error reported by a state function.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct ScanError {
    /// Start offset of the lexeme being scanned when the error was raised.
    pub pos: usize,
    /// Human-readable description.
    pub message: String,
}

/// Failure to set up a lexing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexerError {
    /// No entry state was supplied; a session cannot run without one.
    #[error("lexer requires a start state")]
    MissingStartState,
}
