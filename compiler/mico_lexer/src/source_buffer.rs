//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` byte after the source content, so the
//! scanner detects end of input by reading the current byte instead of
//! comparing positions on every step. The allocation is rounded up to a
//! 64-byte boundary; the padding is zero-filled, so every read at or past
//! the end of the source stays in bounds and reads the sentinel value.
//!
//! # Encoding detection
//!
//! Construction scans the source for byte-level problems the scanner
//! itself cannot report:
//! - a UTF-8 BOM, which Mico source must not carry;
//! - interior `0x00` bytes, which are indistinguishable from the
//!   sentinel at scan time and would silently end the token stream.
//!
//! Issues are recorded as [`EncodingIssue`] values and never alter the
//! token sequence; callers decide whether to reject the input.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, sentinel-terminated copy of a source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The byte at `source_len` is always `0x00`, and so is everything after
/// it up to the end of the allocation.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected while constructing a [`SourceBuffer`].
///
/// Carries the kind plus the byte position and length of the offending
/// sequence, enough for a caller to build a span without per-kind
/// special cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in a source buffer.
///
/// The source arrives as `&str`, so it is already valid UTF-8; what is
/// left to catch are valid-but-unwanted sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at the start of the source.
    Utf8Bom,
    /// `0x00` byte inside the source content. The scanner reads it as
    /// its end-of-input sentinel, so the token stream ends there.
    InteriorNull,
}

impl SourceBuffer {
    /// Create a sentinel-terminated buffer from source text.
    ///
    /// Copies the source into a zero-filled, cache-line-sized
    /// allocation; the sentinel and padding need no separate writes.
    /// Also records any [`EncodingIssue`]s found in the source.
    ///
    /// Sources larger than `u32::MAX` bytes (~4 GiB) are accepted but
    /// `source_len` saturates; callers scanning inputs that large are
    /// expected to reject them before lexing.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (minimum: source + 1
        // sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let mut encoding_issues = Vec::new();
        detect_bom(source_bytes, &mut encoding_issues);
        detect_interior_nulls(source_bytes, &mut encoding_issues);

        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf,
            source_len: source_len_u32,
            encoding_issues,
        }
    }

    /// The source bytes, without sentinel or padding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`);
    /// everything after it is zero-filled padding up to the next 64-byte
    /// boundary.
    #[must_use]
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    #[must_use]
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    ///
    /// Reporting is out of band: the token stream is unaffected, and it
    /// is up to the caller to reject input with issues (in particular
    /// [`EncodingIssueKind::InteriorNull`], which truncates scanning).
    #[must_use]
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Size assertion: `SourceBuffer` should be ~56 bytes on 64-bit platforms.
/// Vec<u8> = 24, u32 = 4, Vec<EncodingIssue> = 24, + 4 padding = 56.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);

/// Detect a UTF-8 byte order mark at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.len() >= 3 && source[0] == 0xEF && source[1] == 0xBB && source[2] == 0xBF {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
}

/// Detect `0x00` bytes within the source content.
///
/// Uses `memchr` for SIMD-accelerated search instead of byte-at-a-time
/// iteration; clean sources pay one pass over the bytes.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}
