//! Rune cursor with one level of backtracking.
//!
//! The cursor walks a borrowed byte buffer one rune at a time. It tracks the
//! start of the lexeme being assembled (`start`), the offset of the next
//! unread byte (`pos`), and how far the last read moved `pos` so that exactly
//! one read can be undone.
//!
//! # Invariants
//!
//! - `0 <= start <= pos <= input.len()`.
//! - `start` and `pos` always sit on rune boundaries inside a well-formed
//!   prefix of the input. Every byte between them was either decoded as a
//!   valid rune or matched against a `&str` literal, so [`Cursor::current`]
//!   is always valid UTF-8.
//!
//! # Malformed Input
//!
//! A decoding error is sticky: [`Cursor::advance`] returns [`Rune::ERROR`]
//! without moving, so repeated reads at a malformed offset keep failing.
//! [`Cursor::skip_invalid`] is the only way past it.

use crate::rune::{self, Rune};
use tracing::debug;

/// Read position over an input buffer.
///
/// The cursor is [`Copy`], so a caller can snapshot and restore it around
/// speculative scanning.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    /// Start of the in-progress lexeme.
    start: usize,
    /// Offset of the next unread byte.
    pos: usize,
    /// Result of the most recent `advance()`.
    last: Rune,
    /// Bytes the most recent read moved `pos`; zero when there is nothing to
    /// back up.
    undo: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            last: Rune::EOF,
            undo: 0,
        }
    }

    /// The whole input buffer.
    #[inline]
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Start offset of the in-progress lexeme.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The rune returned by the most recent [`advance()`](Self::advance).
    ///
    /// Before the first read this is [`Rune::EOF`].
    #[inline]
    pub fn last(&self) -> Rune {
        self.last
    }

    /// Bytes not yet read.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// `true` once every byte of the input has been read.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Text of the in-progress lexeme, `[start, pos)`.
    #[allow(
        unsafe_code,
        reason = "start..pos only ever spans validated runes and &str literal matches"
    )]
    pub fn current(&self) -> &'a str {
        let bytes = &self.input[self.start..self.pos];
        debug_assert!(
            std::str::from_utf8(bytes).is_ok(),
            "lexeme {}..{} is not valid UTF-8",
            self.start,
            self.pos
        );
        // SAFETY: `start` and `pos` only move across runes that `rune::decode`
        // accepted, across `&str` literals matched byte-for-byte, or across
        // the `valid_up_to()` prefix reported by `str::from_utf8`. Both
        // offsets therefore bound a well-formed UTF-8 sequence.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }

    /// Read one rune.
    ///
    /// At end of input returns [`Rune::EOF`] and leaves `pos` alone. On
    /// malformed bytes returns [`Rune::ERROR`] and leaves `pos` alone, on this
    /// and every later call at the same offset. Otherwise moves `pos` past
    /// the rune.
    #[inline]
    pub fn advance(&mut self) -> Rune {
        let rune = rune::decode(self.input, self.pos);
        self.last = rune;
        if rune.as_char().is_none() {
            self.undo = 0;
            return rune;
        }
        self.pos += rune.width();
        self.undo = rune.width();
        rune
    }

    /// Put the most recently read rune back.
    ///
    /// Only the read immediately preceding the call can be undone. A second
    /// call in a row, a call before any read, or a call after a sentinel was
    /// returned does nothing and returns `false`. Backing up across `start`
    /// (after [`ignore()`](Self::ignore) or an emit) is refused the same way.
    pub fn backup(&mut self) -> bool {
        if self.undo == 0 || self.pos - self.undo < self.start {
            debug!(
                pos = self.pos,
                start = self.start,
                "backup without an undoable read"
            );
            self.undo = 0;
            return false;
        }
        self.pos -= self.undo;
        self.undo = 0;
        true
    }

    /// Look at the next rune without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Rune {
        let rune = self.advance();
        if rune.as_char().is_some() {
            self.pos -= rune.width();
            self.undo = 0;
        }
        rune
    }

    /// Drop the in-progress lexeme: `start = pos`.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Mark `[start, pos)` as taken and begin a fresh lexeme.
    ///
    /// Returns the text that was taken.
    pub(crate) fn take(&mut self) -> &'a str {
        let text = self.current();
        self.start = self.pos;
        text
    }

    /// Advance past `lit` if the unread input starts with it.
    ///
    /// Compares bytes directly; no per-rune decoding. A successful match
    /// cannot be undone with [`backup()`](Self::backup).
    pub fn eat_str(&mut self, lit: &str) -> bool {
        if !self.remaining().starts_with(lit.as_bytes()) {
            return false;
        }
        self.pos += lit.len();
        self.undo = 0;
        true
    }

    /// Advance to the next occurrence of the ASCII byte `delim`.
    ///
    /// Stops at `delim` (not consuming it), at end of input, or at the first
    /// malformed byte, whichever comes first. Returns the number of bytes
    /// consumed. Uses `memchr` for the search.
    pub fn eat_until(&mut self, delim: u8) -> usize {
        let rest = self.remaining();
        let end = memchr::memchr(delim, rest).unwrap_or(rest.len());
        let len = match std::str::from_utf8(&rest[..end]) {
            Ok(_) => end,
            Err(err) => err.valid_up_to(),
        };
        self.pos += len;
        self.undo = 0;
        len
    }

    /// Step over malformed bytes at `pos`.
    ///
    /// When the next bytes are not valid UTF-8, moves past the malformed
    /// sequence, drops the in-progress lexeme (`start = pos`) and returns the
    /// number of bytes skipped. Returns 0 and changes nothing when the next
    /// rune is valid or the input is exhausted.
    pub fn skip_invalid(&mut self) -> usize {
        let len = rune::invalid_len(self.input, self.pos);
        if len > 0 {
            self.pos += len;
            self.start = self.pos;
            self.undo = 0;
        }
        len
    }
}
