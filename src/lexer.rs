// Copyright (c) 2018 Fabian Schuiki

//! A lexer for grammar descriptions.
//!
//! The lexical classes are simple: bare identifiers starting with an
//! uppercase letter are non-terminals, all other bare identifiers are
//! terminal names, single-quoted text is a terminal symbol, double-quoted
//! text is a terminal operator, and slash-delimited text is a lexical
//! expression. `#` starts a comment that runs to the end of the line.

use std::iter::Peekable;
use std::str::Chars;

use errors::Reporter;
use token::{Token, TokenKind, TokenStream};

/// A lexer for grammar descriptions.
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    reporter: &'a mut Reporter,
    line: u32,
    col: u32,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over an input string.
    pub fn new(input: &'a str, reporter: &'a mut Reporter) -> Lexer<'a> {
        Lexer {
            input: input.chars().peekable(),
            reporter: reporter,
            line: 1,
            col: 1,
        }
    }

    /// Consume the next input character, tracking line and column.
    fn bump(&mut self) -> Option<char> {
        let c = self.input.next();
        match c {
            Some('\n') => {
                self.line += 1;
                self.col = 1;
            }
            Some(_) => self.col += 1,
            None => (),
        }
        c
    }

    /// Skip whitespace and `#` comments.
    fn skip_irrelevant(&mut self) {
        loop {
            match self.input.peek() {
                Some(&c) if c.is_whitespace() => {
                    self.bump();
                }
                Some(&'#') => while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                },
                _ => return,
            }
        }
    }

    /// Scan a delimited literal whose opening delimiter has already been
    /// consumed. Escapes are kept verbatim in the text; an escaped closing
    /// delimiter does not terminate the literal.
    fn scan_delimited(&mut self, delim: char, kind: TokenKind, line: u32, col: u32) -> Token {
        let mut buffer = String::new();
        buffer.push(delim);
        loop {
            match self.bump() {
                Some('\\') => {
                    buffer.push('\\');
                    if let Some(c) = self.bump() {
                        buffer.push(c);
                    }
                }
                Some(c) => {
                    buffer.push(c);
                    if c == delim {
                        break;
                    }
                }
                None => {
                    self.reporter
                        .syntax_error(line, &format!("unterminated literal {}", buffer));
                    break;
                }
            }
        }
        Token::new(kind, buffer, line, col)
    }

    /// Scan a bare identifier whose first character has already been
    /// consumed.
    fn scan_ident(&mut self, first: char, line: u32, col: u32) -> Token {
        let mut buffer = String::new();
        buffer.push(first);
        while let Some(&c) = self.input.peek() {
            if !c.is_alphanumeric() && c != '_' {
                break;
            }
            buffer.push(c);
            self.bump();
        }
        let kind = if first.is_uppercase() {
            TokenKind::NonTerminal
        } else {
            TokenKind::TerminalName
        };
        Token::new(kind, buffer, line, col)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_irrelevant();
            let (line, col) = (self.line, self.col);
            let c = match self.bump() {
                Some(c) => c,
                None => return None,
            };
            let token = match c {
                '{' => Token::new(TokenKind::OpenCurly, "{", line, col),
                '}' => Token::new(TokenKind::CloseCurly, "}", line, col),
                '(' => Token::new(TokenKind::OpenParen, "(", line, col),
                ')' => Token::new(TokenKind::CloseParen, ")", line, col),
                '+' => Token::new(TokenKind::OneOrMore, "+", line, col),
                '*' => Token::new(TokenKind::ZeroOrMore, "*", line, col),
                '?' => Token::new(TokenKind::ZeroOrOne, "?", line, col),
                '|' => Token::new(TokenKind::Pipe, "|", line, col),
                '\'' => self.scan_delimited('\'', TokenKind::TerminalSymbol, line, col),
                '"' => self.scan_delimited('"', TokenKind::TerminalOper, line, col),
                '/' => self.scan_delimited('/', TokenKind::TerminalExpr, line, col),
                c if c.is_alphabetic() || c == '_' => self.scan_ident(c, line, col),
                c => {
                    self.reporter
                        .syntax_error(line, &format!("unrecognized character \"{}\"", c));
                    continue;
                }
            };
            return Some(token);
        }
    }
}

/// Lex an entire input string into a token stream.
///
/// The stream is terminated by an end-of-input token carrying the position
/// past the last character. Lexical errors are reported and the offending
/// characters skipped.
pub fn tokenize(input: &str, reporter: &mut Reporter) -> TokenStream {
    let mut tokens = Vec::new();
    let mut lexer = Lexer::new(input, reporter);
    while let Some(token) = lexer.next() {
        tokens.push(token);
    }
    let (line, col) = (lexer.line, lexer.col);
    tokens.push(Token::new(TokenKind::EndOfInput, "end of input", line, col));
    TokenStream::new(tokens)
}
