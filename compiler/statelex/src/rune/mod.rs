//! Single-rune decoding over a raw byte buffer.
//!
//! Every read from the input produces a [`Rune`]: the decoded scalar value
//! plus the number of bytes it occupied. Two sentinel values stand in for
//! "no rune here":
//!
//! - [`Rune::EOF`] (width 0) when the read position is at or past the end
//!   of the input.
//! - [`Rune::ERROR`] (`U+FFFD`, width 1) when the bytes at the read position
//!   are not well-formed UTF-8.
//!
//! A correctly encoded `U+FFFD` in the input decodes with width 3 and is an
//! ordinary rune, so the width is what tells the two apart.

/// End-of-input marker character (ASCII EOT).
pub const EOF_CHAR: char = '\u{4}';

/// A decoded rune and its encoded width in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rune {
    ch: char,
    width: usize,
}

impl Rune {
    /// Sentinel returned when no input remains.
    pub const EOF: Rune = Rune {
        ch: EOF_CHAR,
        width: 0,
    };

    /// Sentinel returned when the input holds malformed UTF-8.
    pub const ERROR: Rune = Rune {
        ch: char::REPLACEMENT_CHARACTER,
        width: 1,
    };

    /// A rune that occupied `width` bytes of input.
    pub const fn new(ch: char, width: usize) -> Self {
        Self { ch, width }
    }

    /// The decoded character. Sentinels report [`EOF_CHAR`] and `U+FFFD`.
    #[inline]
    pub const fn ch(self) -> char {
        self.ch
    }

    /// Number of input bytes this rune was decoded from.
    #[inline]
    pub const fn width(self) -> usize {
        self.width
    }

    /// `true` for the end-of-input sentinel.
    #[inline]
    pub const fn is_eof(self) -> bool {
        self.width == 0
    }

    /// `true` for the malformed-input sentinel.
    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.width == 1 && self.ch == char::REPLACEMENT_CHARACTER
    }

    /// The character, or `None` for either sentinel.
    #[inline]
    pub const fn as_char(self) -> Option<char> {
        if self.is_eof() || self.is_invalid() {
            None
        } else {
            Some(self.ch)
        }
    }
}

/// Returns the number of bytes in the UTF-8 sequence introduced by `lead`.
///
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
///
/// This only looks at the leading byte; [`decode`] still validates the whole
/// sequence.
#[inline]
pub const fn utf8_char_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Decode the rune starting at byte offset `pos` of `input`.
///
/// Returns [`Rune::EOF`] when `pos >= input.len()` and [`Rune::ERROR`] when
/// the bytes at `pos` are truncated, overlong, a surrogate, or otherwise not
/// valid UTF-8.
pub fn decode(input: &[u8], pos: usize) -> Rune {
    let Some(&lead) = input.get(pos) else {
        return Rune::EOF;
    };
    if lead.is_ascii() {
        return Rune::new(char::from(lead), 1);
    }
    let width = utf8_char_width(lead);
    let Some(bytes) = input.get(pos..pos + width) else {
        return Rune::ERROR;
    };
    match std::str::from_utf8(bytes) {
        Ok(s) => s.chars().next().map_or(Rune::ERROR, |ch| Rune::new(ch, width)),
        Err(_) => Rune::ERROR,
    }
}

/// Length of the malformed byte run starting at `pos`.
///
/// Returns 0 when the bytes at `pos` decode cleanly (or `pos` is at the end
/// of `input`). Otherwise returns the length of the shortest prefix that can
/// be dropped so decoding can resume, never less than 1.
pub fn invalid_len(input: &[u8], pos: usize) -> usize {
    let rest = input.get(pos..).unwrap_or_default();
    if rest.is_empty() {
        return 0;
    }
    let window = &rest[..rest.len().min(4)];
    match std::str::from_utf8(window) {
        Ok(_) => 0,
        Err(err) if err.valid_up_to() > 0 => 0,
        Err(err) => err.error_len().unwrap_or(window.len()).max(1),
    }
}

#[cfg(test)]
mod tests;
