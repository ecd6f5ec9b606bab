// Copyright (c) 2018 Fabian Schuiki

//! Tokens of the grammar description language and the token stream the parser
//! consumes.

use std::fmt;

/// The kinds of tokens that may appear in a grammar description.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    Pipe,
    OneOrMore,
    ZeroOrMore,
    ZeroOrOne,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    NonTerminal,
    TerminalSymbol,
    TerminalOper,
    TerminalName,
    TerminalExpr,
}

/// A single token of a grammar description.
///
/// Tokens are produced once by the lexer and never mutated. The parser clones
/// the tokens it matches into the AST nodes it builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The verbatim text of the token, including any delimiters.
    pub text: String,
    /// The decorated identifier derived from the text, if the kind has one.
    ///
    /// Decorated names are what a code emitter would use as token constants,
    /// e.g. `expr` becomes `EXPR_TOKEN` and `"+="` becomes `PLUS_EQUAL_TOKEN`.
    pub name: Option<String>,
    /// The line the token starts on, 1-based.
    pub line: u32,
    /// The column the token starts on, 1-based.
    pub col: u32,
}

impl Token {
    /// Create a new token, synthesizing the decorated name for the kinds that
    /// carry one.
    pub fn new<S: Into<String>>(kind: TokenKind, text: S, line: u32, col: u32) -> Token {
        let text = text.into();
        let name = match kind {
            TokenKind::NonTerminal => Some(decorate_ident(&text)),
            TokenKind::TerminalName => Some(decorate_ident(&text)),
            TokenKind::TerminalOper => Some(decorate_oper(&text)),
            _ => None,
        };
        Token {
            kind: kind,
            text: text,
            name: name,
            line: line,
            col: col,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Decorate a bare identifier: uppercase it and append `_TOKEN`.
fn decorate_ident(text: &str) -> String {
    let mut buffer: String = text.chars().map(|c| c.to_ascii_uppercase()).collect();
    buffer.push_str("_TOKEN");
    buffer
}

/// Decorate a quoted operator: spell out each glyph and append `TOKEN`.
///
/// The surrounding quotes are stripped. Glyphs without a spelled-out name are
/// uppercased verbatim.
fn decorate_oper(text: &str) -> String {
    let mut buffer = String::new();
    let inner: Vec<char> = text.chars().collect();
    let inner = match inner.len() {
        0 | 1 | 2 => &inner[..0],
        n => &inner[1..n - 1],
    };
    for &c in inner {
        match c {
            '~' => buffer.push_str("TILDE_"),
            '`' => buffer.push_str("BQUOTE_"),
            '!' => buffer.push_str("BANG_"),
            '@' => buffer.push_str("AT_"),
            '#' => buffer.push_str("POUND_"),
            '$' => buffer.push_str("DOLLAR_"),
            '%' => buffer.push_str("PERCENT_"),
            '^' => buffer.push_str("CARET_"),
            '&' => buffer.push_str("AMPERSAND_"),
            '*' => buffer.push_str("STAR_"),
            '(' => buffer.push_str("OPAREN_"),
            ')' => buffer.push_str("CPAREN_"),
            '-' => buffer.push_str("MINUS_"),
            '+' => buffer.push_str("PLUS_"),
            '=' => buffer.push_str("EQUAL_"),
            '{' => buffer.push_str("OCBRACE_"),
            '}' => buffer.push_str("CCBRACE_"),
            '[' => buffer.push_str("OSBRACE_"),
            ']' => buffer.push_str("CSBRACE_"),
            '<' => buffer.push_str("OABRACE_"),
            '>' => buffer.push_str("CABRACE_"),
            ':' => buffer.push_str("COLON_"),
            ';' => buffer.push_str("SCOLON_"),
            '"' => buffer.push_str("DQUOTE_"),
            '\'' => buffer.push_str("SQUOTE_"),
            ',' => buffer.push_str("COMMA_"),
            '.' => buffer.push_str("DOT_"),
            '?' => buffer.push_str("QUESTION_"),
            '/' => buffer.push_str("SLASH_"),
            '\\' => buffer.push_str("BSLASH_"),
            '|' => buffer.push_str("BAR_"),
            _ => {
                buffer.push(c.to_ascii_uppercase());
                buffer.push('_');
            }
        }
    }
    buffer.push_str("TOKEN");
    buffer
}

/// A saved position in a token stream.
///
/// Obtained from `TokenStream::mark` and handed back to `TokenStream::reset`
/// to rewind the cursor, which is what makes the parser's ordered-choice
/// backtracking free of re-lexing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mark(usize);

/// An immutable, randomly-addressable sequence of tokens with a rewindable
/// cursor.
///
/// The last token is always the `EndOfInput` token; the cursor never moves
/// past it.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    crnt: usize,
}

impl TokenStream {
    /// Create a stream from a token vector.
    ///
    /// The vector must be terminated by an `EndOfInput` token.
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        debug_assert!(tokens.last().map(|t| t.kind) == Some(TokenKind::EndOfInput));
        TokenStream {
            tokens: tokens,
            crnt: 0,
        }
    }

    /// The token under the cursor. Does not advance.
    pub fn current(&self) -> &Token {
        &self.tokens[self.crnt]
    }

    /// Consume the token under the cursor and return it.
    ///
    /// The cursor does not move past the end-of-input token; once there,
    /// this keeps returning it.
    pub fn advance(&mut self) -> &Token {
        let consumed = self.crnt;
        if self.crnt + 1 < self.tokens.len() {
            self.crnt += 1;
        }
        &self.tokens[consumed]
    }

    /// Capture the cursor position.
    pub fn mark(&self) -> Mark {
        Mark(self.crnt)
    }

    /// Rewind the cursor to a previously captured position.
    pub fn reset(&mut self, mark: Mark) {
        self.crnt = mark.0;
    }

    /// The number of tokens in the stream, including the end-of-input token.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(kinds: &[TokenKind]) -> TokenStream {
        let mut tokens: Vec<_> = kinds
            .iter()
            .map(|&k| Token::new(k, "x", 1, 1))
            .collect();
        tokens.push(Token::new(TokenKind::EndOfInput, "end of input", 1, 1));
        TokenStream::new(tokens)
    }

    #[test]
    fn advance_returns_consumed() {
        let mut ts = stream(&[TokenKind::Pipe, TokenKind::OneOrMore]);
        assert_eq!(ts.advance().kind, TokenKind::Pipe);
        assert_eq!(ts.current().kind, TokenKind::OneOrMore);
    }

    #[test]
    fn advance_stops_at_end_of_input() {
        let mut ts = stream(&[TokenKind::Pipe]);
        ts.advance();
        assert_eq!(ts.current().kind, TokenKind::EndOfInput);
        assert_eq!(ts.advance().kind, TokenKind::EndOfInput);
        assert_eq!(ts.current().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn mark_reset_rewinds() {
        let mut ts = stream(&[TokenKind::Pipe, TokenKind::OneOrMore, TokenKind::ZeroOrOne]);
        let mark = ts.mark();
        ts.advance();
        ts.advance();
        assert_eq!(ts.current().kind, TokenKind::ZeroOrOne);
        ts.reset(mark);
        assert_eq!(ts.current().kind, TokenKind::Pipe);
    }

    #[test]
    fn decorated_names() {
        let t = Token::new(TokenKind::NonTerminal, "Expr", 1, 1);
        assert_eq!(t.name.as_ref().unwrap(), "EXPR_TOKEN");
        let t = Token::new(TokenKind::TerminalName, "ident", 1, 1);
        assert_eq!(t.name.as_ref().unwrap(), "IDENT_TOKEN");
        let t = Token::new(TokenKind::TerminalOper, "\"+=\"", 1, 1);
        assert_eq!(t.name.as_ref().unwrap(), "PLUS_EQUAL_TOKEN");
        let t = Token::new(TokenKind::TerminalOper, "\"a\"", 1, 1);
        assert_eq!(t.name.as_ref().unwrap(), "A_TOKEN");
        let t = Token::new(TokenKind::TerminalSymbol, "'x'", 1, 1);
        assert!(t.name.is_none());
    }
}
