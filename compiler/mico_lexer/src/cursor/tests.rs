use crate::{Cursor, SourceBuffer};

// === Basic navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'h');
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn source_len_reports_content_length() {
    let buf = SourceBuffer::new("let x");
    let cursor = buf.cursor();
    assert_eq!(cursor.source_len(), 5);
}

// === EOF detection ===

#[test]
fn is_eof_at_sentinel() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance(); // past 'x', at sentinel
    assert!(cursor.is_eof());
}

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance(); // at '\0' (interior null)
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof()); // pos=1 < source_len=3
    cursor.advance(); // at 'b'
    assert_eq!(cursor.current(), b'b');
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3); // pos = 3
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(1), "bc");
}

#[test]
fn slice_empty_range() {
    let buf = SourceBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(2, 2), "");
}

#[test]
fn slice_whole_multibyte_char() {
    // 'é' is 2 bytes; slicing the whole character is a valid &str.
    let buf = SourceBuffer::new("é");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 2), "é");
}

// === eat_while ===

#[test]
fn eat_while_consumes_matching_prefix() {
    let buf = SourceBuffer::new("aaabbb");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_no_match_does_not_move() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 0);
}

// === eat_whitespace ===

#[test]
fn eat_whitespace_skips_spaces_and_tabs() {
    let buf = SourceBuffer::new("  \t x");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn eat_whitespace_skips_newlines() {
    let buf = SourceBuffer::new("\n\r\n  x");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_whitespace_noop_on_non_whitespace() {
    let buf = SourceBuffer::new("x  ");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_whitespace_runs_to_eof_on_blank_source() {
    let buf = SourceBuffer::new(" \t\n\r");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert!(cursor.is_eof());
}

// === UTF-8 character width ===

#[test]
fn utf8_char_width_classes() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2); // é lead byte
    assert_eq!(Cursor::utf8_char_width(0xE6), 3); // 日 lead byte
    assert_eq!(Cursor::utf8_char_width(0xF0), 4); // emoji lead byte
    assert_eq!(Cursor::utf8_char_width(0x80), 1); // continuation byte
    assert_eq!(Cursor::utf8_char_width(0), 1); // sentinel
}

#[test]
fn advance_char_skips_whole_characters() {
    let buf = SourceBuffer::new("é日x");
    let mut cursor = buf.cursor();
    cursor.advance_char(); // past 'é' (2 bytes)
    assert_eq!(cursor.pos(), 2);
    cursor.advance_char(); // past '日' (3 bytes)
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'x');
}

// === Copy snapshots ===

#[test]
fn copy_snapshot_restores_position() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    let saved = cursor; // Copy
    cursor.advance_n(3);
    assert_eq!(cursor.pos(), 5);
    assert_eq!(saved.pos(), 2);
    assert_eq!(saved.current(), b'c');
}
