//! Rune classes: the criteria acceptance primitives test runes against.
//!
//! A [`RuneClass`] answers one question, "is this character a member?".
//! Classes are only ever asked about real characters; the lexer rejects the
//! end-of-input and malformed-input sentinels before consulting them.
//!
//! | Class                   | Matches                                   |
//! |-------------------------|-------------------------------------------|
//! | `char`                  | exactly that character                    |
//! | `&str`, `&[char]`       | any character in the set                  |
//! | `RangeInclusive<char>`  | any character in `min..=max`              |
//! | `&RangeTable`           | any character in one of the table ranges  |
//! | `UnicodeClass`          | a named Unicode property                  |

use std::ops::RangeInclusive;

use unicode_xid::UnicodeXID;

/// A set of characters.
pub trait RuneClass {
    /// Returns `true` if `ch` belongs to the class.
    fn contains(&self, ch: char) -> bool;
}

impl RuneClass for char {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        *self == ch
    }
}

impl RuneClass for &str {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        str::contains(self, ch)
    }
}

impl RuneClass for &[char] {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        <[char]>::contains(self, &ch)
    }
}

impl RuneClass for RangeInclusive<char> {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        RangeInclusive::contains(self, &ch)
    }
}

impl RuneClass for &RangeTable {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        RangeTable::contains(self, ch)
    }
}

/// Sorted table of inclusive character ranges.
///
/// Lookup is a binary search, so tables may be large. The ranges must be
/// sorted by their low bound and must not overlap; [`RangeTable::new`]
/// checks this once, at compile time for `const` and `static` tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeTable {
    ranges: &'static [(char, char)],
}

impl RangeTable {
    /// ASCII `0`-`9`.
    pub const ASCII_DIGIT: RangeTable = RangeTable::new(&[('0', '9')]);

    /// ASCII letters.
    pub const ASCII_LETTER: RangeTable = RangeTable::new(&[('A', 'Z'), ('a', 'z')]);

    /// Space, `\t`, `\n`, `\x0C`, `\r`.
    pub const ASCII_WHITESPACE: RangeTable =
        RangeTable::new(&[('\t', '\n'), ('\x0C', '\r'), (' ', ' ')]);

    /// Wrap a sorted, non-overlapping list of `(lo, hi)` ranges.
    ///
    /// # Panics
    ///
    /// If a range is inverted, or the ranges are unsorted or overlap.
    pub const fn new(ranges: &'static [(char, char)]) -> Self {
        let mut i = 0;
        while i < ranges.len() {
            let (lo, hi) = ranges[i];
            assert!(lo as u32 <= hi as u32, "range table has an inverted range");
            if i > 0 {
                assert!(
                    (ranges[i - 1].1 as u32) < lo as u32,
                    "range table must be sorted and non-overlapping"
                );
            }
            i += 1;
        }
        Self { ranges }
    }

    /// The ranges in this table.
    pub fn ranges(&self) -> &'static [(char, char)] {
        self.ranges
    }

    /// Returns `true` if `ch` falls inside one of the ranges.
    pub fn contains(&self, ch: char) -> bool {
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if hi < ch {
                    std::cmp::Ordering::Less
                } else if lo > ch {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }
}

/// Named Unicode character properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnicodeClass {
    /// `Alphabetic` derived property.
    Alphabetic,
    /// General categories `Nd`, `Nl`, `No`.
    Numeric,
    /// `Alphabetic` or `Numeric`.
    Alphanumeric,
    /// `White_Space` property.
    Whitespace,
    /// `Uppercase` derived property.
    Uppercase,
    /// `Lowercase` derived property.
    Lowercase,
    /// General category `Cc`.
    Control,
    /// ASCII `0`-`9` only.
    AsciiDigit,
    /// ASCII hexadecimal digits.
    AsciiHexDigit,
    /// `XID_Start`: characters that may begin an identifier.
    XidStart,
    /// `XID_Continue`: characters that may continue an identifier.
    XidContinue,
}

impl RuneClass for UnicodeClass {
    fn contains(&self, ch: char) -> bool {
        match self {
            Self::Alphabetic => ch.is_alphabetic(),
            Self::Numeric => ch.is_numeric(),
            Self::Alphanumeric => ch.is_alphanumeric(),
            Self::Whitespace => ch.is_whitespace(),
            Self::Uppercase => ch.is_uppercase(),
            Self::Lowercase => ch.is_lowercase(),
            Self::Control => ch.is_control(),
            Self::AsciiDigit => ch.is_ascii_digit(),
            Self::AsciiHexDigit => ch.is_ascii_hexdigit(),
            Self::XidStart => UnicodeXID::is_xid_start(ch),
            Self::XidContinue => UnicodeXID::is_xid_continue(ch),
        }
    }
}

#[cfg(test)]
mod tests;
