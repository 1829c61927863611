use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Equal,
    Colon,
    Comma,
    Semicolon,
    LBrace,
    RBrace,

    KPublic,
    KPrivate,

    Identifier,

    Error,
    EOF,
}

impl TokenType {
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::EOF => "END_OF_FILE",
            TokenType::KPublic => "PUBLIC",
            TokenType::KPrivate => "PRIVATE",
            TokenType::Equal => "EQUAL",
            TokenType::Colon => "COLON",
            TokenType::Comma => "COMMA",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::LBrace => "LBRACE",
            TokenType::RBrace => "RBRACE",
            TokenType::Identifier => "ID",
            TokenType::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span(pub usize, pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub tok_type: TokenType,
    pub line: usize,
    pub span: Span,
}

impl Token {
    pub fn is(&self, tok_type: TokenType) -> bool {
        self.tok_type == tok_type
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} , {} , {}}}",
            self.lexeme,
            self.tok_type.name(),
            self.line
        )
    }
}
