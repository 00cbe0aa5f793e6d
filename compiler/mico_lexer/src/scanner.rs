//! Hand-written scanner producing [`Token`]s with borrowed text.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! one token per call with zero heap allocation. Keyword resolution goes
//! through the token catalog's [`classify`]; everything else is decided
//! by the byte the token starts with.
//!
//! # Design
//!
//! `next_token` discards whitespace, then dispatches on the current
//! byte. Each arm calls a focused method that advances the cursor and
//! slices the token text from `start` to the new position. The sentinel
//! byte (`0x00`) dispatches to the end-of-input arm, which never
//! advances -- the scanner parks on the sentinel and keeps returning
//! [`TokenKind::Eof`].

use crate::cursor::Cursor;
use crate::token::{classify, Token, TokenKind};

/// Pull scanner producing one [`Token`] per call.
///
/// Whitespace separates tokens and is never emitted. Error conditions
/// are encoded as [`TokenKind::InvalidChar`] tokens, not as
/// `Result::Err`: every call returns a token, and every call on a
/// non-exhausted scanner makes forward progress.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    #[must_use]
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] with empty text when the source is
    /// exhausted. Subsequent calls after that continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.end_of_input(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'=' => self.single(start, TokenKind::Equal),
            b'+' => self.single(start, TokenKind::Plus),
            b'-' => self.single(start, TokenKind::Minus),
            b'!' => self.single(start, TokenKind::Bang),
            b'/' => self.single(start, TokenKind::Slash),
            b'*' => self.single(start, TokenKind::Star),
            b'<' => self.single(start, TokenKind::Less),
            b'>' => self.single(start, TokenKind::Greater),
            b'(' => self.single(start, TokenKind::LeftParen),
            b')' => self.single(start, TokenKind::RightParen),
            b'{' => self.single(start, TokenKind::LeftBrace),
            b'}' => self.single(start, TokenKind::RightBrace),
            b',' => self.single(start, TokenKind::Comma),
            b';' => self.single(start, TokenKind::Semicolon),
            // Whitespace cannot reach here (consumed above). Everything
            // else -- stray ASCII punctuation, control bytes, or the
            // lead byte of a non-ASCII character -- has no place in the
            // grammar.
            _ => self.invalid_char(start),
        }
    }

    // ─── End of input ───────────────────────────────────────────────────

    /// The end-of-input arm never advances, so once the scanner reaches
    /// the sentinel every further call lands here again: `Eof` is
    /// self-perpetuating.
    ///
    /// An interior null byte takes this same path (at scan time it is
    /// indistinguishable from the sentinel) and ends the token stream
    /// early; [`SourceBuffer`](crate::SourceBuffer) reports those as
    /// encoding issues at construction so callers can reject the input.
    fn end_of_input(&self) -> Token<'a> {
        Token {
            kind: TokenKind::Eof,
            text: "",
        }
    }

    // ─── Identifiers & numbers ──────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance(); // consume first byte (already validated)
        self.cursor.eat_while(is_letter);
        let text = self.cursor.slice_from(start);
        Token {
            kind: classify(text),
            text,
        }
    }

    #[inline]
    fn number(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance(); // consume first digit
        self.cursor.eat_while(|b| b.is_ascii_digit());
        Token {
            kind: TokenKind::Int,
            text: self.cursor.slice_from(start),
        }
    }

    // ─── Operators & delimiters ─────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, start: u32, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        Token {
            kind,
            text: self.cursor.slice_from(start),
        }
    }

    // ─── Error tokens ───────────────────────────────────────────────────

    fn invalid_char(&mut self, start: u32) -> Token<'a> {
        // Advance past the whole character, not just one byte, so the
        // token text stays valid UTF-8 and the next call starts on a
        // character boundary. For stray ASCII this is exactly one byte.
        self.cursor.advance_char();
        Token {
            kind: TokenKind::InvalidChar,
            text: self.cursor.slice_from(start),
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier bytes.
/// `true` for a-z, A-Z, and underscore. Digits are deliberately absent:
/// they neither start nor continue an identifier, so `a1` scans as an
/// identifier followed by an integer.
/// Table lookup replaces the multi-range `matches!` with a single
/// indexed read. The sentinel byte (0x00) maps to `false`, naturally
/// terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_LETTER_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'_');
        i += 1;
    }
    table
};

/// Returns `true` if `b` can start or continue an identifier.
#[inline]
fn is_letter(b: u8) -> bool {
    IS_LETTER_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all tokens.
///
/// Returns owned `(kind, text)` pairs, excluding the final `Eof` -- the
/// buffer the token texts would otherwise borrow from lives only inside
/// the call. For streaming access, construct a
/// [`SourceBuffer`](crate::SourceBuffer) + [`Scanner`] directly.
#[must_use]
pub fn tokenize(source: &str) -> Vec<(TokenKind, String)> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.kind == TokenKind::Eof {
            break;
        }
        tokens.push((tok.kind, tok.text.to_owned()));
    }
    tokens
}
