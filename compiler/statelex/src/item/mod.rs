//! Items: the lexemes handed to the consumer.
//!
//! An [`Item`] pairs a caller-defined [`ItemKind`] tag with the byte offset
//! and text of a lexeme. Two kinds are reserved by the engine and sit at the
//! top of the `u16` range so that caller kinds numbered from zero never
//! collide with them:
//!
//! | Kind               | Value            | Item value                |
//! |--------------------|------------------|---------------------------|
//! | [`ItemKind::EOF`]  | `u16::MAX`       | empty                     |
//! | [`ItemKind::ERROR`]| `u16::MAX - 1`   | the error message         |

use std::borrow::Cow;
use std::fmt;

use crate::error::ScanError;

/// Longest value, in characters, that `Display` prints in full.
const DISPLAY_LIMIT: usize = 10;

/// Tag identifying what an [`Item`] is.
///
/// Callers define their own kinds as constants:
///
/// ```
/// use statelex::ItemKind;
///
/// const NUMBER: ItemKind = ItemKind::new(0);
/// const IDENT: ItemKind = ItemKind::new(1);
/// assert!(!NUMBER.is_reserved());
/// assert_ne!(IDENT, ItemKind::EOF);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKind(u16);

impl ItemKind {
    /// End of the item stream.
    pub const EOF: ItemKind = ItemKind(u16::MAX);

    /// A scan error; the item value holds the message.
    pub const ERROR: ItemKind = ItemKind(u16::MAX - 1);

    /// Wrap a raw kind number.
    ///
    /// `u16::MAX` and `u16::MAX - 1` are the reserved kinds; passing them
    /// yields [`ItemKind::EOF`] and [`ItemKind::ERROR`].
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw kind number.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// `true` for the two engine-reserved kinds.
    #[inline]
    pub const fn is_reserved(self) -> bool {
        self.0 >= u16::MAX - 1
    }
}

impl From<u16> for ItemKind {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EOF => f.write_str("EOF"),
            Self::ERROR => f.write_str("ERROR"),
            Self(raw) => write!(f, "{raw}"),
        }
    }
}

/// A scanned lexeme.
///
/// Lexeme values borrow from the input; error messages are owned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item<'a> {
    kind: ItemKind,
    pos: usize,
    value: Cow<'a, str>,
}

impl<'a> Item<'a> {
    /// Build an item.
    pub fn new(kind: ItemKind, pos: usize, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            kind,
            pos,
            value: value.into(),
        }
    }

    /// An end-of-input item at `pos` with an empty value.
    pub fn eof(pos: usize) -> Self {
        Self::new(ItemKind::EOF, pos, "")
    }

    /// An error item at `pos` carrying `message`.
    pub fn error(pos: usize, message: impl Into<Cow<'a, str>>) -> Self {
        Self::new(ItemKind::ERROR, pos, message)
    }

    /// What the item is.
    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Byte offset where the lexeme starts.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The lexeme text, or the message for error items.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// `true` for the end-of-input item.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == ItemKind::EOF
    }

    /// `true` for a scan error item.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == ItemKind::ERROR
    }

    /// The error this item carries, if it is an error item.
    pub fn err(&self) -> Option<ScanError> {
        self.is_error().then(|| ScanError {
            pos: self.pos,
            message: self.value.clone().into_owned(),
        })
    }

    /// Detach the item from the input buffer.
    pub fn into_owned(self) -> Item<'static> {
        Item {
            kind: self.kind,
            pos: self.pos,
            value: Cow::Owned(self.value.into_owned()),
        }
    }
}

/// Error items print their message and the end-of-input item prints `EOF`.
/// Values longer than ten characters print as a quoted ten-character prefix
/// followed by `...`.
///
/// The limit counts characters, not UTF-8 bytes, so a value such as
/// `"éééééé"` (six characters, twelve bytes) prints in full and a prefix
/// never splits a rune.
impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::ERROR => f.write_str(&self.value),
            ItemKind::EOF => f.write_str("EOF"),
            _ if self.value.chars().count() > DISPLAY_LIMIT => {
                let head: String = self.value.chars().take(DISPLAY_LIMIT).collect();
                write!(f, "{head:?}...")
            }
            _ => f.write_str(&self.value),
        }
    }
}
