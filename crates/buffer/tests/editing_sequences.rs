// Chunk: docs/chunks/gap_buffer_core - Byte gap buffer, line index and cursor model

//! Integration tests for realistic editing sequences.
//!
//! These tests verify that the gap buffer, the line index and the cursor stay
//! in sync through typing, correcting and navigating.

use gapedit_buffer::{Line, LineIndex, Position, TextBuffer};
use pretty_assertions::assert_eq;

fn type_str(buf: &mut TextBuffer, s: &str) {
    for byte in s.bytes() {
        buf.insert(byte);
    }
}

/// Line spans computed from scratch, for comparing against the live index.
fn fresh_lines(buf: &TextBuffer) -> Vec<Line> {
    let mut index = LineIndex::new();
    index.rebuild(buf.bytes());
    index.lines().to_vec()
}

#[test]
fn test_type_word_then_delete_entirely() {
    let mut buf = TextBuffer::new();

    type_str(&mut buf, "hello");
    assert_eq!(buf.contents(), b"hello");
    assert_eq!(buf.cursor_position(), Position::new(0, 5));

    for _ in 0..5 {
        buf.backspace();
    }
    assert!(buf.is_empty());
    assert_eq!(buf.cursor_position(), Position::new(0, 0));
    assert_eq!(buf.lines(), &[Line::new(0, 0)]);
}

#[test]
fn test_type_multiple_lines_and_navigate() {
    let mut buf = TextBuffer::new();

    type_str(&mut buf, "first line\nsecond line\nthird line");

    assert_eq!(buf.line_count(), 3);
    assert_eq!(buf.line_content(0), "first line");
    assert_eq!(buf.line_content(1), "second line");
    assert_eq!(buf.line_content(2), "third line");

    buf.set_cursor(Position::new(1, 7)); // "second |line"
    type_str(&mut buf, "awesome ");
    assert_eq!(buf.line_content(1), "second awesome line");

    buf.move_up();
    assert_eq!(buf.cursor_position(), Position::new(0, 10));

    buf.move_down();
    buf.move_down();
    assert_eq!(buf.cursor_position(), Position::new(2, 10));
}

#[test]
fn test_split_and_rejoin_lines() {
    let mut buf = TextBuffer::from_str("helloworld");

    buf.set_cursor(Position::new(0, 5));
    buf.insert(b'\n');
    assert_eq!(buf.line_count(), 2);
    assert_eq!(buf.contents(), b"hello\nworld");

    buf.backspace();
    assert_eq!(buf.line_count(), 1);
    assert_eq!(buf.contents(), b"helloworld");
    assert_eq!(buf.cursor_position(), Position::new(0, 5));
}

#[test]
fn test_rapid_insert_delete_cycles() {
    let mut buf = TextBuffer::new();

    type_str(&mut buf, "teh");
    buf.backspace();
    buf.backspace();
    buf.backspace();
    type_str(&mut buf, "the quikc");
    buf.backspace();
    buf.backspace();
    type_str(&mut buf, "ck brown fox");

    assert_eq!(buf.contents(), b"the quick brown fox");
}

#[test]
fn test_insert_then_backspace_restores_text() {
    let original = "ab\ncd\n\nef";
    for offset in 0..=original.len() {
        let mut buf = TextBuffer::from_str(original);
        buf.set_cursor_offset(offset);
        buf.insert(b'Z');
        assert_eq!(buf.cursor(), offset + 1);
        buf.backspace();
        assert_eq!(buf.contents(), original.as_bytes(), "offset {}", offset);
        assert_eq!(buf.cursor(), offset);
    }
}

#[test]
fn test_move_right_past_end_clamps() {
    let mut buf = TextBuffer::from_str("ab\ncd\n");
    buf.set_cursor_offset(2);
    for _ in 0..buf.len() + 5 {
        buf.move_right();
    }
    assert_eq!(buf.cursor(), buf.len());

    for _ in 0..buf.len() + 5 {
        buf.move_left();
    }
    assert_eq!(buf.cursor(), 0);
}

#[test]
fn test_full_buffer_navigation_by_rows() {
    let mut buf = TextBuffer::from_str("short\na much longer line\n\nmid");
    buf.set_cursor(Position::new(1, 15));

    buf.move_up();
    assert_eq!(buf.cursor_position(), Position::new(0, 5));

    buf.move_down();
    assert_eq!(buf.cursor_position(), Position::new(1, 5));

    buf.move_down();
    assert_eq!(buf.cursor_position(), Position::new(2, 0));

    buf.move_down();
    assert_eq!(buf.cursor_position(), Position::new(3, 0));

    buf.move_down();
    assert_eq!(buf.cursor_position(), Position::new(3, 0));
}

#[test]
fn test_type_on_blank_line_after_many_edits() {
    let mut buf = TextBuffer::from_str("fn main() {\n\n}\n");

    buf.set_cursor(Position::new(1, 0));
    buf.insert(b'\t');
    type_str(&mut buf, "println!();");

    assert_eq!(buf.line_content(1), "    println!();");
    assert_eq!(buf.line_count(), 3);
    assert_eq!(buf.cursor_position(), Position::new(1, 15));
}

#[test]
fn test_trailing_newline_then_typing() {
    let mut buf = TextBuffer::from_str("ab");
    buf.set_cursor_offset(2);

    buf.insert(b'\n');
    assert_eq!(buf.line_count(), 1);
    assert_eq!(buf.cursor_position(), Position::new(1, 0));

    buf.insert(b'c');
    assert_eq!(buf.line_count(), 2);
    assert_eq!(buf.lines(), &[Line::new(0, 2), Line::new(3, 4)]);
}

#[test]
fn test_line_index_consistency_after_mixed_edits() {
    let mut buf = TextBuffer::from_str("alpha\nbeta\ngamma\n");

    let script: &[(&str, usize)] = &[
        ("insert", 3),
        ("newline", 0),
        ("backspace", 7),
        ("up", 0),
        ("insert", 2),
        ("down", 0),
        ("newline", 0),
        ("right", 0),
        ("backspace", 1),
    ];

    for &(op, n) in script {
        match op {
            "insert" => {
                for _ in 0..n {
                    buf.insert(b'x');
                }
            }
            "newline" => {
                buf.insert(b'\r');
            }
            "backspace" => {
                for _ in 0..n {
                    buf.backspace();
                }
            }
            "up" => {
                buf.move_up();
            }
            "down" => {
                buf.move_down();
            }
            "right" => {
                buf.move_right();
            }
            other => panic!("unknown op {other}"),
        }
        assert_eq!(buf.lines(), fresh_lines(&buf).as_slice(), "after {}", op);
        assert!(buf.cursor() <= buf.len());
    }
}
