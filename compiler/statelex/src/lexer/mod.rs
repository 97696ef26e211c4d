//! The lexing session: cursor, item queue and driver loop.
//!
//! A [`Lexer`] has two audiences.
//!
//! **State functions** move the cursor ([`advance`](Lexer::advance),
//! [`backup`](Lexer::backup), [`peek`](Lexer::peek),
//! [`ignore`](Lexer::ignore)), match input with the `accept*` family, and
//! report lexemes with [`emit`](Lexer::emit) or errors with
//! [`errorf`](Lexer::errorf).
//!
//! **The consumer** calls [`next_item`](Lexer::next_item) (or iterates the
//! lexer). Each call first drains items already queued, in emission order,
//! and only runs the current state function when the queue is empty. Once
//! the state is terminal and the queue is empty, every call returns a fresh
//! end-of-input item.
//!
//! Reaching the end of the input does not stop scanning by itself; the
//! state functions decide when to emit [`ItemKind::EOF`] and return `None`.

mod accept;
mod state;

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::LexerError;
use crate::item::{Item, ItemKind};
use crate::rune::Rune;

pub use state::StateFn;

/// A single lexing session over a borrowed input buffer.
#[derive(Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// State to run when the queue is empty; `None` once scanning is over.
    state: Option<StateFn>,
    /// Emitted items not yet handed to the consumer.
    items: VecDeque<Item<'a>>,
    /// Set once the iterator has yielded its end-of-input item.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Create a session that starts scanning `input` in state `start`.
    pub fn new<I>(start: StateFn, input: &'a I) -> Self
    where
        I: AsRef<[u8]> + ?Sized,
    {
        Self {
            cursor: Cursor::new(input.as_ref()),
            state: Some(start),
            items: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Create a session from an optional start state.
    ///
    /// Fails with [`LexerError::MissingStartState`] when `start` is `None`.
    pub fn try_new<I>(start: Option<StateFn>, input: &'a I) -> Result<Self, LexerError>
    where
        I: AsRef<[u8]> + ?Sized,
    {
        let start = start.ok_or(LexerError::MissingStartState)?;
        Ok(Self::new(start, input))
    }

    // ─── Cursor access ────────────────────────────────────────────────

    /// Start offset of the in-progress lexeme.
    #[inline]
    pub fn start(&self) -> usize {
        self.cursor.start()
    }

    /// Offset just past the last rune read.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Text of the in-progress lexeme.
    #[inline]
    pub fn current(&self) -> &'a str {
        self.cursor.current()
    }

    /// The last rune read and its width.
    ///
    /// Named apart from [`Cursor::last`] so that it never resolves to
    /// [`Iterator::last`], which would drain the whole stream.
    #[inline]
    pub fn last_rune(&self) -> Rune {
        self.cursor.last()
    }

    /// The whole input buffer.
    pub fn input(&self) -> &'a [u8] {
        self.cursor.input()
    }

    /// Input not yet read.
    pub fn remaining(&self) -> &'a [u8] {
        self.cursor.remaining()
    }

    /// `true` once every input byte has been read.
    pub fn at_end(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Add the next rune to the current lexeme.
    ///
    /// See [`Cursor::advance`] for the sentinel behaviour at end of input and
    /// on malformed bytes.
    #[inline]
    pub fn advance(&mut self) -> Rune {
        self.cursor.advance()
    }

    /// Return the last rune read to the input. Returns `false` if there was
    /// nothing to undo.
    #[inline]
    pub fn backup(&mut self) -> bool {
        self.cursor.backup()
    }

    /// The next rune, without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Rune {
        self.cursor.peek()
    }

    /// Throw away the current lexeme.
    #[inline]
    pub fn ignore(&mut self) {
        self.cursor.ignore();
    }

    /// Step over malformed bytes at the read position, discarding the current
    /// lexeme. Returns the number of bytes skipped (0 if the input there is
    /// well-formed).
    pub fn skip_invalid(&mut self) -> usize {
        let skipped = self.cursor.skip_invalid();
        if skipped > 0 {
            debug!(pos = self.cursor.pos(), skipped, "skipped malformed input");
        }
        skipped
    }

    // ─── Emission ─────────────────────────────────────────────────────

    /// Queue the current lexeme as an item of `kind` and start a new lexeme.
    ///
    /// An [`ItemKind::EOF`] item always has an empty value; any pending
    /// lexeme text is consumed but not attached to it.
    pub fn emit(&mut self, kind: ItemKind) {
        let pos = self.cursor.start();
        let value = self.cursor.take();
        trace!(%kind, pos, len = value.len(), "emit");
        let item = if kind == ItemKind::EOF {
            Item::eof(pos)
        } else {
            Item::new(kind, pos, value)
        };
        self.items.push_back(item);
    }

    /// Queue a formatted error item and return the terminal state.
    ///
    /// State functions usually end with
    /// `return lexer.errorf(format_args!(...))`.
    pub fn errorf(&mut self, args: fmt::Arguments<'_>) -> Option<StateFn> {
        self.error(args.to_string())
    }

    /// Queue an error item with a fixed message and return the terminal
    /// state.
    pub fn error(&mut self, message: impl Into<String>) -> Option<StateFn> {
        let message = message.into();
        let pos = self.cursor.start();
        debug!(pos, %message, "scan error");
        self.items.push_back(Item::error(pos, message));
        None
    }

    /// Number of emitted items waiting to be delivered.
    pub fn pending(&self) -> usize {
        self.items.len()
    }

    // ─── Driver ───────────────────────────────────────────────────────

    /// `true` when scanning is over and every queued item was delivered.
    pub fn is_finished(&self) -> bool {
        self.state.is_none() && self.items.is_empty()
    }

    /// Produce the next item.
    ///
    /// Drains queued items first; runs state functions only when the queue
    /// is empty. After an end-of-input item has been delivered, or once the
    /// state is terminal with nothing queued, every call returns an
    /// end-of-input item.
    pub fn next_item(&mut self) -> Item<'a> {
        loop {
            if let Some(item) = self.items.pop_front() {
                trace!(kind = %item.kind(), pos = item.pos(), "deliver");
                if item.is_eof() {
                    self.finish();
                }
                return item;
            }
            let Some(state) = self.state.take() else {
                return Item::eof(self.cursor.start());
            };
            self.state = state.run(self);
            if self.state.is_none() {
                trace!(pos = self.cursor.pos(), queued = self.items.len(), "terminal state");
            }
        }
    }

    /// Stop scanning for good. Anything queued behind an end-of-input item
    /// is unreachable and dropped.
    fn finish(&mut self) {
        self.state = None;
        if !self.items.is_empty() {
            debug!(dropped = self.items.len(), "items queued after end of input");
            self.items.clear();
        }
    }
}

/// Yields every item up to and including the first end-of-input item.
impl<'a> Iterator for Lexer<'a> {
    type Item = crate::item::Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.next_item();
        self.exhausted = item.is_eof();
        Some(item)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
