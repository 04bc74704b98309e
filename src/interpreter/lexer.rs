use logos::Logos;

/// A 0-based byte offset into the source expression.
pub type Position = usize;

/// Raw classification produced by logos.
///
/// `scan` maps these onto [`TokenKind`] and attaches spans and text; the
/// end-of-input and illegal cases have no pattern here because logos
/// reports them through iterator exhaustion and lexing errors.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// Numeric literal tokens with at most one `.`, such as `42`, `3.14`,
    /// `.5` or `1.`; a second dot terminates the literal, so `1.2.3` scans
    /// as `1.2`, `.`, `3`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    #[regex(r"[0-9]+\.")]
    #[regex(r"\.[0-9]+")]
    Number,
    /// Identifier tokens; constant or function names such as `PI` or
    /// `sqrt`. A letter followed by letters or digits.
    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Ident,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any single printable ASCII character that is not a letter, a digit,
    /// whitespace or a parenthesis.
    #[regex(r"[\x21-\x27\x2a-\x2f\x3a-\x40\x5b-\x60\x7b-\x7e]")]
    Operator,
}

/// Classifies a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input. Every scan produces exactly one, as the last token.
    Eof,
    /// A byte sequence the lexer cannot classify (e.g. non-ASCII input).
    Illegal,
    /// A numeric literal.
    Number,
    /// An alphabetic identifier.
    Ident,
    /// A single special character.
    Operator,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// A lexical token: a minimal but meaningful unit of the source expression.
///
/// Tokens are immutable once produced. The span is expressed in 0-based
/// byte offsets with an exclusive `end`, so `end - start == text.len()` for
/// every non-EOF token; the EOF token sits at `(len, len)` with empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:  TokenKind,
    /// Offset of the first byte of the token.
    pub start: Position,
    /// Offset one past the last byte of the token.
    pub end:   Position,
    /// The token's source text.
    pub text:  String,
}

/// Scans an expression into a sequence of tokens.
///
/// Whitespace (space, tab, carriage return, newline) separates tokens and
/// is never emitted. The returned sequence is always terminated by exactly
/// one [`TokenKind::Eof`] token. Scanning itself never fails; input the
/// lexer cannot classify becomes an [`TokenKind::Illegal`] token, which the
/// parser rejects.
///
/// # Example
/// ```
/// use calcyard::{TokenKind, scan};
///
/// let tokens = scan("1 + 2");
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Operator, TokenKind::Number, TokenKind::Eof]);
/// assert_eq!(tokens[1].start, 2);
/// assert_eq!(tokens[1].end, 3);
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        let kind = match raw {
            Ok(RawToken::Number) => TokenKind::Number,
            Ok(RawToken::Ident) => TokenKind::Ident,
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::Operator) => TokenKind::Operator,
            Err(()) => TokenKind::Illegal,
        };
        let span = lexer.span();
        tokens.push(Token { kind,
                            start: span.start,
                            end: span.end,
                            text: lexer.slice().to_string() });
    }

    tokens.push(Token { kind:  TokenKind::Eof,
                        start: source.len(),
                        end:   source.len(),
                        text:  String::new(), });

    tokens
}
