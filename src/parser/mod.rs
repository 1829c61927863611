pub mod ast;
pub mod pretty_print_ast;

#[cfg(test)]
mod test;

use crate::lexer::token::{Token, TokenType};
use crate::lexer::Lexer;
use crate::symbols::{ScopeStack, SymbolTable, VariableEntry, Visibility};
use ast::*;
use thiserror::Error;

// <program>            ::= <global-vars> <scope-list> <assignment-list>
// <global-vars>        ::= <id-list> ";"
// <scope-list>         ::= <scope>*
// <scope>              ::= ID "{" <scope-content> "}"
// <scope-content>      ::= <visibility-section>* <scope-list> <assignment-list>
// <visibility-section> ::= ( "public" | "private" ) ":" <id-list> ";"
// <id-list>            ::= ID ( "," ID )*
// <assignment-list>    ::= <assignment>*
// <assignment>         ::= ID "=" ID ";"
//
// <scope> and <assignment> are only entered after two tokens of lookahead (`ID "{"` and
// `ID "="`); otherwise the loop stops and both tokens are handed back to the lexer.

#[derive(Error, Debug)]
#[error("Syntax Error: {error} at line {}", .token.line)]
pub struct ParseError {
    pub token: Token,
    #[source]
    pub error: ParseErrorType,
}

#[derive(Error, Debug)]
pub enum ParseErrorType {
    #[error("Expected {exp}")]
    Expected { exp: &'static str, got: String },
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    symbols: SymbolTable,
    scopes: ScopeStack,
    assignments: Vec<Assignment>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            symbols: SymbolTable::new(),
            scopes: ScopeStack::new(),
            assignments: Vec::new(),
        }
    }

    fn advance(&mut self) -> Token {
        self.lexer.next_token()
    }

    fn unget(&mut self, token: Token) {
        self.lexer.push_back(token);
    }

    fn peek_token_type(&mut self) -> TokenType {
        let token = self.advance();
        let tok_type = token.tok_type;
        self.unget(token);
        tok_type
    }

    /// Looks two tokens ahead without consuming either.
    fn check_pair(&mut self, first: TokenType, second: TokenType) -> bool {
        let token = self.advance();
        if !token.is(first) {
            self.unget(token);
            return false;
        }
        let next = self.advance();
        let matched = next.is(second);
        self.unget(next);
        self.unget(token);
        matched
    }

    fn match_(&mut self, tok_type: TokenType) -> bool {
        let token = self.advance();
        if token.is(tok_type) {
            true
        } else {
            self.unget(token);
            false
        }
    }

    fn consume(&mut self, tok_type: TokenType, exp: &'static str) -> ParseResult<Token> {
        let token = self.advance();
        if token.is(tok_type) {
            Ok(token)
        } else {
            Err(self.error_at(token, exp))
        }
    }

    fn consume_identifier(&mut self) -> ParseResult<WithToken<String>> {
        let token = self.consume(TokenType::Identifier, "ID")?;
        Ok(WithToken(token.lexeme.clone(), token))
    }

    fn error_at(&self, token: Token, exp: &'static str) -> ParseError {
        let got = match token.tok_type {
            TokenType::EOF => String::from("<eof>"),
            _ => token.lexeme.clone(),
        };
        ParseError {
            token,
            error: ParseErrorType::Expected { exp, got },
        }
    }

    fn declare(&mut self, name: WithToken<String>, visibility: Visibility) {
        let WithToken(name, token) = name;
        self.symbols.declare(VariableEntry {
            name,
            scope: self.scopes.current_scope(),
            visibility,
            line: token.line,
        });
    }
}

impl<'a> Parser<'a> {
    pub fn program(mut self) -> ParseResult<Program> {
        self.global_vars()?;
        self.scope_list()?;
        self.assignment_list()?;

        let next = self.advance();
        let trailing = (!next.is(TokenType::EOF)).then_some(next);

        Ok(Program {
            symbols: self.symbols,
            assignments: self.assignments,
            trailing,
        })
    }

    fn global_vars(&mut self) -> ParseResult<()> {
        self.identifier_list(Visibility::Public)?;
        self.consume(TokenType::Semicolon, "';'")?;
        Ok(())
    }

    fn identifier_list(&mut self, visibility: Visibility) -> ParseResult<()> {
        loop {
            let name = self.consume_identifier()?;
            self.declare(name, visibility);
            if !self.match_(TokenType::Comma) {
                break;
            }
        }
        Ok(())
    }

    fn scope_list(&mut self) -> ParseResult<()> {
        while self.check_pair(TokenType::Identifier, TokenType::LBrace) {
            self.scope()?;
        }
        Ok(())
    }

    fn scope(&mut self) -> ParseResult<()> {
        let WithToken(name, _) = self.consume_identifier()?;
        self.scopes.enter(name);

        self.consume(TokenType::LBrace, "'{'")?;
        self.scope_content()?;
        self.consume(TokenType::RBrace, "'}'")?;

        self.scopes.unwind();
        Ok(())
    }

    fn scope_content(&mut self) -> ParseResult<()> {
        while let TokenType::KPublic | TokenType::KPrivate = self.peek_token_type() {
            self.visibility_section()?;
        }
        self.scope_list()?;
        self.assignment_list()
    }

    fn visibility_section(&mut self) -> ParseResult<()> {
        let token = self.advance();
        let visibility = match token.tok_type {
            TokenType::KPublic => Visibility::Public,
            TokenType::KPrivate => Visibility::Private,
            _ => return Err(self.error_at(token, "'public' or 'private'")),
        };

        self.consume(TokenType::Colon, "':'")?;
        self.identifier_list(visibility)?;
        self.consume(TokenType::Semicolon, "';'")?;
        Ok(())
    }

    fn assignment_list(&mut self) -> ParseResult<()> {
        while self.check_pair(TokenType::Identifier, TokenType::Equal) {
            self.assignment()?;
        }
        Ok(())
    }

    fn assignment(&mut self) -> ParseResult<()> {
        let lhs = self.consume_identifier()?;
        self.consume(TokenType::Equal, "'='")?;
        let rhs = self.consume_identifier()?;
        self.consume(TokenType::Semicolon, "';'")?;

        self.assignments.push(Assignment {
            lhs,
            rhs,
            scopes: self.scopes.snapshot(),
        });
        Ok(())
    }
}
