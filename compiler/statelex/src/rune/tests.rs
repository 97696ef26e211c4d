use super::*;
use pretty_assertions::assert_eq;

// === Sentinels ===

#[test]
fn eof_sentinel_has_zero_width() {
    assert!(Rune::EOF.is_eof());
    assert!(!Rune::EOF.is_invalid());
    assert_eq!(Rune::EOF.width(), 0);
    assert_eq!(Rune::EOF.ch(), EOF_CHAR);
    assert_eq!(Rune::EOF.as_char(), None);
}

#[test]
fn error_sentinel_is_replacement_with_width_one() {
    assert!(Rune::ERROR.is_invalid());
    assert!(!Rune::ERROR.is_eof());
    assert_eq!(Rune::ERROR.width(), 1);
    assert_eq!(Rune::ERROR.as_char(), None);
}

#[test]
fn encoded_replacement_char_is_valid() {
    let input = "\u{FFFD}".as_bytes();
    let rune = decode(input, 0);
    assert_eq!(rune, Rune::new('\u{FFFD}', 3));
    assert!(!rune.is_invalid());
    assert_eq!(rune.as_char(), Some('\u{FFFD}'));
}

// === Decoding ===

#[test]
fn decode_ascii() {
    assert_eq!(decode(b"abc", 0), Rune::new('a', 1));
    assert_eq!(decode(b"abc", 2), Rune::new('c', 1));
}

#[test]
fn decode_multibyte_widths() {
    let input = "é€😀".as_bytes();
    assert_eq!(decode(input, 0), Rune::new('é', 2));
    assert_eq!(decode(input, 2), Rune::new('€', 3));
    assert_eq!(decode(input, 5), Rune::new('😀', 4));
    assert_eq!(decode(input, 9), Rune::EOF);
}

#[test]
fn decode_past_end_is_eof() {
    assert_eq!(decode(b"", 0), Rune::EOF);
    assert_eq!(decode(b"x", 1), Rune::EOF);
    assert_eq!(decode(b"x", 10), Rune::EOF);
}

#[test]
fn decode_lone_continuation_byte_is_error() {
    assert_eq!(decode(&[0x80, b'a'], 0), Rune::ERROR);
}

#[test]
fn decode_truncated_sequence_is_error() {
    // First two bytes of a three-byte sequence.
    assert_eq!(decode(&[0xE2, 0x82], 0), Rune::ERROR);
}

#[test]
fn decode_overlong_and_surrogate_are_errors() {
    assert_eq!(decode(&[0xC0, 0xAF], 0), Rune::ERROR);
    assert_eq!(decode(&[0xED, 0xA0, 0x80], 0), Rune::ERROR);
    assert_eq!(decode(&[0xFF], 0), Rune::ERROR);
}

#[test]
fn decode_mid_sequence_offset_is_error() {
    let input = "é".as_bytes();
    assert_eq!(decode(input, 1), Rune::ERROR);
}

// === Width table ===

#[test]
fn char_width_from_lead_byte() {
    assert_eq!(utf8_char_width(b'a'), 1);
    assert_eq!(utf8_char_width(0xC3), 2);
    assert_eq!(utf8_char_width(0xE2), 3);
    assert_eq!(utf8_char_width(0xF0), 4);
    assert_eq!(utf8_char_width(0x80), 1);
    assert_eq!(utf8_char_width(0xFF), 1);
}

// === Invalid run length ===

#[test]
fn invalid_len_zero_for_valid_or_empty() {
    assert_eq!(invalid_len(b"abc", 0), 0);
    assert_eq!(invalid_len("€x".as_bytes(), 0), 0);
    assert_eq!(invalid_len(b"abc", 3), 0);
}

#[test]
fn invalid_len_single_bad_byte() {
    assert_eq!(invalid_len(&[0xFF, b'a'], 0), 1);
    assert_eq!(invalid_len(&[b'a', 0x80, b'b'], 1), 1);
}

#[test]
fn invalid_len_truncated_sequence_before_ascii() {
    // `E2 82` is a cut-off `€`; both bytes go together.
    assert_eq!(invalid_len(&[0xE2, 0x82, b'a'], 0), 2);
}

#[test]
fn invalid_len_truncated_at_end_of_input() {
    assert_eq!(invalid_len(&[b'a', 0xF0, 0x9F], 1), 2);
}
