//! Scanning engine for hand-rolled lexers.
//!
//! Grammar authors write their tokenizer as a set of state functions. Each
//! one reads runes through a [`Lexer`], emits zero or more items, and returns
//! the next state to run. The engine owns everything else: the read
//! position, UTF-8 decoding, one rune of backtracking, and the queue that
//! hands items to the consumer in the order they were emitted.
//!
//! # Layers
//!
//! - [`rune`]: decoding one [`Rune`] at a byte offset, with end-of-input and
//!   malformed-input sentinels.
//! - [`Cursor`]: lexeme start, read position, single-step backup.
//! - [`RuneClass`]: criteria for the `accept*` family (sets, ranges,
//!   [`RangeTable`]s, [`UnicodeClass`]es).
//! - [`Lexer`]: acceptance primitives, emission, and the pull-based driver.
//!
//! # Example
//!
//! ```
//! use statelex::{ItemKind, Lexer, StateFn, UnicodeClass};
//!
//! const NUMBER: ItemKind = ItemKind::new(0);
//! const WORD: ItemKind = ItemKind::new(1);
//!
//! fn lex_any(l: &mut Lexer<'_>) -> Option<StateFn> {
//!     l.accept_run(UnicodeClass::Whitespace);
//!     l.ignore();
//!     if l.accept_run(UnicodeClass::AsciiDigit) > 0 {
//!         l.emit(NUMBER);
//!     } else if l.accept_run(UnicodeClass::Alphabetic) > 0 {
//!         l.emit(WORD);
//!     } else if l.peek().is_eof() {
//!         l.emit(ItemKind::EOF);
//!         return None;
//!     } else {
//!         let ch = l.peek().ch();
//!         return l.errorf(format_args!("unexpected {ch:?}"));
//!     }
//!     Some(StateFn::new(lex_any))
//! }
//!
//! let values: Vec<String> = Lexer::new(StateFn::new(lex_any), "route 66")
//!     .map(|item| item.to_string())
//!     .collect();
//! assert_eq!(values, ["route", "66", "EOF"]);
//! ```
//!
//! # Errors
//!
//! Scan errors are items of kind [`ItemKind::ERROR`] in the same stream as
//! ordinary lexemes. By convention a state function reports one with
//! `return lexer.errorf(...)`, which also stops scanning, so the consumer
//! sees the error followed by end-of-input items.

mod class;
mod cursor;
mod error;
mod item;
mod lexer;
pub mod rune;

pub use class::{RangeTable, RuneClass, UnicodeClass};
pub use cursor::Cursor;
pub use error::{LexerError, ScanError};
pub use item::{Item, ItemKind};
pub use lexer::{Lexer, StateFn};
pub use rune::Rune;
