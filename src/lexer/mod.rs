pub mod token;


use lazy_static::lazy_static;
use multipeek::{multipeek, MultiPeek};
use std::collections::HashMap;
use std::str::Chars;
use token::{Span, Token, TokenType};

macro_rules! hash_map {
    ( $( $key: expr => $value: expr ),* $(,)? ) => {{
        let mut m = HashMap::new();
        $(
            m.insert($key, $value);
        )*
        m
    }}
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> = hash_map! {
        "private" => TokenType::KPrivate,
        "public"  => TokenType::KPublic,
    };
}

/// Hand-written scanner over the program text.
///
/// Tokens are produced on demand. Tokens handed back through [`Lexer::push_back`] are kept on a
/// stack and re-delivered, most recent first, before any fresh input is scanned.
pub struct Lexer<'a> {
    input_str: &'a str,
    input: MultiPeek<Chars<'a>>,
    pushed_back: Vec<Token>,
    line: usize,
    start: usize,
    current: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input_str: &'a str) -> Self {
        Self {
            input_str,
            input: multipeek(input_str.chars()),
            pushed_back: Vec::new(),
            line: 1,
            start: 0,
            current: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.input.peek().copied()
    }

    fn peek_next(&mut self) -> Option<char> {
        self.input.peek_nth(1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.input.next()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn get_lexeme(&self) -> &'a str {
        &self.input_str[self.start..self.current]
    }

    fn make_token(&self, tok_type: TokenType) -> Token {
        Token {
            lexeme: self.get_lexeme().to_string(),
            tok_type,
            line: self.line,
            span: Span(self.start, self.current),
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r' | '\x0B' | '\x0C') => {
                    self.advance();
                }
                Some('\n') => {
                    self.line += 1;
                    self.advance();
                }
                Some('/') => {
                    if let Some('/') = self.peek_next() {
                        self.advance();
                        self.advance();
                        while let Some(c) = self.advance() {
                            if c == '\n' {
                                self.line += 1;
                                break;
                            }
                        }
                    } else {
                        break;
                    }
                }
                _ => break,
            };
        }
    }

    fn identifier(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            self.advance();
        }

        match KEYWORDS.get(self.get_lexeme()) {
            Some(ttype) => self.make_token(*ttype),
            None => self.make_token(TokenType::Identifier),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Hands a token back to the lexer; it is returned by the next call to
    /// [`Lexer::next_token`] unchanged, line number included.
    pub fn push_back(&mut self, token: Token) {
        self.pushed_back.push(token);
    }

    /// Drains the stream up to and including the first `EOF` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let eof = token.is(TokenType::EOF);
            tokens.push(token);
            if eof {
                break;
            }
        }
        tokens
    }

    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.pushed_back.pop() {
            return token;
        }

        self.skip_whitespace();

        self.start = self.current;
        let Some(c) = self.advance() else {
            return self.make_token(TokenType::EOF);
        };

        match c {
            '=' => self.make_token(TokenType::Equal),
            ':' => self.make_token(TokenType::Colon),
            ',' => self.make_token(TokenType::Comma),
            ';' => self.make_token(TokenType::Semicolon),
            '{' => self.make_token(TokenType::LBrace),
            '}' => self.make_token(TokenType::RBrace),

            c if c.is_ascii_alphabetic() => self.identifier(),
            _ => self.make_token(TokenType::Error),
        }
    }
}
