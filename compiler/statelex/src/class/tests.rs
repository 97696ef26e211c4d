use super::*;

// === Primitive classes ===

#[test]
fn single_char_class() {
    assert!('x'.contains('x'));
    assert!(!'x'.contains('y'));
}

#[test]
fn str_set_class() {
    let set = "+-*/";
    assert!(RuneClass::contains(&set, '*'));
    assert!(!RuneClass::contains(&set, '%'));
    assert!(!RuneClass::contains(&"", 'a'));
}

#[test]
fn char_slice_class() {
    let set: &[char] = &['λ', 'μ'];
    assert!(RuneClass::contains(&set, 'μ'));
    assert!(!RuneClass::contains(&set, 'ν'));
}

#[test]
fn inclusive_range_class() {
    let range = '0'..='7';
    assert!(RuneClass::contains(&range, '0'));
    assert!(RuneClass::contains(&range, '7'));
    assert!(!RuneClass::contains(&range, '8'));
}

// === Range tables ===

#[test]
fn range_table_lookup() {
    static GREEK: RangeTable = RangeTable::new(&[('Α', 'Ω'), ('α', 'ω')]);
    assert!(GREEK.contains('Δ'));
    assert!(GREEK.contains('ω'));
    assert!(!GREEK.contains('a'));
    assert!(!GREEK.contains('ϊ'));
}

#[test]
fn range_table_bounds_are_inclusive() {
    let table = RangeTable::ASCII_LETTER;
    assert!(table.contains('A'));
    assert!(table.contains('Z'));
    assert!(table.contains('a'));
    assert!(table.contains('z'));
    assert!(!table.contains('['));
    assert!(!table.contains('@'));
}

#[test]
fn empty_range_table_matches_nothing() {
    let table = RangeTable::new(&[]);
    assert!(!table.contains('a'));
    assert!(table.ranges().is_empty());
}

#[test]
fn builtin_ascii_tables() {
    assert!(RangeTable::ASCII_DIGIT.contains('5'));
    assert!(!RangeTable::ASCII_DIGIT.contains('a'));
    for ch in [' ', '\t', '\n', '\r', '\x0C'] {
        assert!(RangeTable::ASCII_WHITESPACE.contains(ch), "{ch:?}");
    }
    assert!(!RangeTable::ASCII_WHITESPACE.contains('\x0B'));
}

#[test]
fn range_table_ref_is_a_class() {
    let table = &RangeTable::ASCII_DIGIT;
    assert!(RuneClass::contains(&table, '3'));
}

#[test]
#[should_panic(expected = "sorted and non-overlapping")]
fn range_table_rejects_overlapping_ranges() {
    let _ = RangeTable::new(&[('a', 'm'), ('k', 'z')]);
}

#[test]
#[should_panic(expected = "inverted range")]
fn range_table_rejects_inverted_range() {
    let _ = RangeTable::new(&[('z', 'a')]);
}

// === Unicode classes ===

#[test]
fn unicode_classes() {
    assert!(UnicodeClass::Alphabetic.contains('ß'));
    assert!(!UnicodeClass::Alphabetic.contains('1'));
    assert!(UnicodeClass::Numeric.contains('٣'));
    assert!(UnicodeClass::Alphanumeric.contains('z'));
    assert!(UnicodeClass::Whitespace.contains('\u{2003}'));
    assert!(UnicodeClass::Uppercase.contains('Ä'));
    assert!(UnicodeClass::Lowercase.contains('ä'));
    assert!(UnicodeClass::Control.contains('\u{7}'));
    assert!(UnicodeClass::AsciiDigit.contains('9'));
    assert!(!UnicodeClass::AsciiDigit.contains('٣'));
    assert!(UnicodeClass::AsciiHexDigit.contains('F'));
    assert!(!UnicodeClass::AsciiHexDigit.contains('g'));
}

#[test]
fn xid_classes() {
    assert!(UnicodeClass::XidStart.contains('a'));
    assert!(UnicodeClass::XidStart.contains('日'));
    assert!(!UnicodeClass::XidStart.contains('1'));
    assert!(UnicodeClass::XidContinue.contains('1'));
    assert!(UnicodeClass::XidContinue.contains('_'));
    assert!(!UnicodeClass::XidContinue.contains('-'));
}
