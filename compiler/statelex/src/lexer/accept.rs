//! Acceptance primitives.
//!
//! Each `accept*` method reads at most one unit of input, tests it, and on
//! failure restores the cursor exactly as it was. The `accept_run*`
//! counterparts repeat until the first failure and return how many times
//! they matched; zero is a normal result.
//!
//! The end-of-input and malformed-input sentinels never satisfy a
//! [`RuneClass`] or a `char` predicate, so every run terminates at the end of
//! the input or at the first bad byte. [`Lexer::accept_rune`] is the one
//! primitive whose predicate sees the sentinels.

use super::Lexer;
use crate::class::RuneClass;
use crate::rune::Rune;

impl Lexer<'_> {
    /// Consume the next rune if it belongs to `class`.
    ///
    /// `class` may be a `char`, a `&str` set, a `char` range, a
    /// [`RangeTable`](crate::RangeTable) reference or a
    /// [`UnicodeClass`](crate::UnicodeClass).
    pub fn accept<C: RuneClass>(&mut self, class: C) -> bool {
        self.accept_fn(|ch| class.contains(ch))
    }

    /// Consume runes while they belong to `class`.
    pub fn accept_run<C: RuneClass>(&mut self, class: C) -> usize {
        self.accept_run_fn(|ch| class.contains(ch))
    }

    /// Consume the next rune if `pred` holds for it.
    ///
    /// `pred` is not called at end of input or on malformed bytes.
    pub fn accept_fn(&mut self, pred: impl Fn(char) -> bool) -> bool {
        self.accept_rune(|rune| rune.as_char().is_some_and(&pred))
    }

    /// Consume runes while `pred` holds.
    pub fn accept_run_fn(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.accept_fn(&pred) {
            count += 1;
        }
        count
    }

    /// Consume the next rune if `pred` holds for the raw read result.
    ///
    /// Unlike the other primitives, `pred` also sees [`Rune::EOF`] and
    /// [`Rune::ERROR`]. Accepting a sentinel consumes nothing.
    pub fn accept_rune(&mut self, pred: impl Fn(Rune) -> bool) -> bool {
        let saved = self.cursor;
        let rune = self.cursor.advance();
        if pred(rune) {
            true
        } else {
            self.cursor = saved;
            false
        }
    }

    /// Consume runes while `pred` holds for the raw read result.
    ///
    /// A matched sentinel counts once and ends the run, since reading again
    /// would return the same sentinel.
    pub fn accept_run_rune(&mut self, pred: impl Fn(Rune) -> bool) -> usize {
        let mut count = 0;
        while self.accept_rune(&pred) {
            count += 1;
            if self.cursor.last().as_char().is_none() {
                break;
            }
        }
        count
    }

    /// Consume `lit` if the unread input starts with it.
    ///
    /// The comparison is a byte prefix check, so multi-rune keywords and
    /// operators need no per-rune branching. The empty string always
    /// matches and consumes nothing.
    pub fn accept_string(&mut self, lit: &str) -> bool {
        self.cursor.eat_str(lit)
    }

    /// Consume consecutive copies of `lit`. An empty `lit` returns 0.
    pub fn accept_run_string(&mut self, lit: &str) -> usize {
        if lit.is_empty() {
            return 0;
        }
        let mut count = 0;
        while self.cursor.eat_str(lit) {
            count += 1;
        }
        count
    }

    /// Consume everything up to, not including, the ASCII byte `delim`.
    ///
    /// Stops early at end of input or at the first malformed byte. Returns
    /// the number of bytes consumed. The jump cannot be undone with
    /// [`backup`](Lexer::backup).
    pub fn accept_until(&mut self, delim: u8) -> usize {
        self.cursor.eat_until(delim)
    }
}
