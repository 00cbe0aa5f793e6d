//! Token catalog: the closed set of token kinds, their fixed spellings,
//! and keyword resolution.
//!
//! Kinds are one byte, with discriminants grouped into semantic ranges
//! (literals, operators, delimiters, keywords, errors, control) so that
//! consumers can classify a whole group with a range check instead of a
//! variant-by-variant match.

/// One-byte discriminator for every token the scanner can produce.
///
/// The set is closed: Mico has exactly two keywords, eight operators,
/// six delimiters, identifiers, decimal integer literals, an invalid
/// marker, and the end-of-input marker. Nothing is added at runtime.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Identifiers & literals: 0-15
    /// Identifier: ASCII letters and underscores (`x`, `add`, `snake_case`).
    Ident = 0,
    /// Decimal integer literal (`5`, `10`, `838383`).
    Int = 1,

    // Operators: 32-47
    /// `+`
    Plus = 32,
    /// `-`
    Minus = 33,
    /// `*`
    Star = 34,
    /// `/`
    Slash = 35,
    /// `!`
    Bang = 36,
    /// `=` (assignment; Mico has no `==`)
    Equal = 37,
    /// `<`
    Less = 38,
    /// `>`
    Greater = 39,

    // Delimiters: 80-95
    /// `(`
    LeftParen = 80,
    /// `)`
    RightParen = 81,
    /// `{`
    LeftBrace = 82,
    /// `}`
    RightBrace = 83,
    /// `,`
    Comma = 84,
    /// `;`
    Semicolon = 85,

    // Keywords: 96-111
    /// `fn`
    Fn = 96,
    /// `let`
    Let = 97,

    // Errors: 240-254
    /// A character with no place in the grammar (`@`, `#`, `é`, ...).
    /// The token's text carries the whole offending character.
    InvalidChar = 240,

    // Control: 255
    /// End of input. Produced forever once the scanner is exhausted.
    Eof = 255,
}

impl TokenKind {
    /// Fixed source spelling for operators, delimiters, and keywords.
    ///
    /// Returns `None` for kinds whose text varies per token (`Ident`,
    /// `Int`, `InvalidChar`) and for `Eof`, which has no text at all.
    #[must_use]
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Bang => Some("!"),
            TokenKind::Equal => Some("="),
            TokenKind::Less => Some("<"),
            TokenKind::Greater => Some(">"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Fn => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::Ident | TokenKind::Int | TokenKind::InvalidChar | TokenKind::Eof => None,
        }
    }

    /// Human-readable description for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer literal",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Bang => "`!`",
            TokenKind::Equal => "`=`",
            TokenKind::Less => "`<`",
            TokenKind::Greater => "`>`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Fn => "`fn`",
            TokenKind::Let => "`let`",
            TokenKind::InvalidChar => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether this kind is a reserved word (`fn`, `let`).
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Fn | TokenKind::Let)
    }
}

/// Resolve an identifier spelling to its token kind.
///
/// Total: every spelling maps to *some* kind. `fn` and `let` resolve to
/// their keyword kinds, anything else to [`TokenKind::Ident`].
/// Case-sensitive, so `Fn` and `LET` stay identifiers.
///
/// Uses the spelling's length as a first-pass filter (keywords are 2-3
/// chars), then matches the specific keywords of that length.
#[inline]
#[must_use]
pub fn classify(text: &str) -> TokenKind {
    match text.len() {
        2 => match text {
            "fn" => TokenKind::Fn,
            _ => TokenKind::Ident,
        },
        3 => match text {
            "let" => TokenKind::Let,
            _ => TokenKind::Ident,
        },
        _ => TokenKind::Ident,
    }
}

/// A classified token: a kind plus the exact source text it covers.
///
/// `text` borrows from the scanned source, so tokens are cheap to copy
/// and compare. `Eof` tokens carry empty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the text was classified as.
    pub kind: TokenKind,
    /// The exact lexeme, sliced out of the source.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    #[must_use]
    pub fn new(kind: TokenKind, text: &'src str) -> Self {
        Token { kind, text }
    }
}

/// Size assertion: `TokenKind` must stay one byte.
const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

/// Size assertion: `Token` is a tag plus a `&str` fat pointer and is
/// passed around by value. 16 + 1 + 7 padding = 24 bytes.
const _: () = assert!(std::mem::size_of::<Token<'static>>() <= 24);
