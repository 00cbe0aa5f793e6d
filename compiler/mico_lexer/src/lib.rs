//! Hand-written lexer for Mico.
//!
//! This crate provides:
//!
//! - **Token definitions** ([`TokenKind`], [`Token`], [`classify`]): the
//!   closed set of Mico token kinds, with keyword classification.
//! - **Source preparation** ([`SourceBuffer`]): a sentinel-terminated,
//!   cache-line padded copy of the input, plus encoding diagnostics
//!   ([`EncodingIssue`]).
//! - **Byte navigation** ([`Cursor`]): bounds-check-free position tracking
//!   over the padded buffer.
//! - **Scanning** ([`Scanner`], [`tokenize`]): the pull lexer itself.
//!
//! # Design
//!
//! The buffer is padded with at least one `0x00` byte, so [`Cursor::current`]
//! never branches on length: reading byte `0` at or past the end of the
//! source *is* end of input. Tokens borrow their text from the scanned
//! source; nothing is copied or interned at this layer.
//!
//! Interior `0x00` bytes in the source also read as end of input, so the
//! scanner stops there. [`SourceBuffer::encoding_issues`] reports them out
//! of band.
//!
//! # Crate Dependencies
//!
//! None inside the workspace. `mico_lexer` sits at the bottom of the
//! compiler; everything else layers on top of it.

mod cursor;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use token::{classify, Token, TokenKind};
