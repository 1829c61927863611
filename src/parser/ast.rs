use crate::lexer::token::Token;
use crate::symbols::{ScopeChain, SymbolTable};
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithToken<T>(pub T, pub Token);

impl<T> Deref for WithToken<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// `lhs = rhs;` together with the scopes that enclosed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub lhs: WithToken<String>,
    pub rhs: WithToken<String>,
    pub scopes: ScopeChain,
}

#[derive(Debug)]
pub struct Program {
    pub symbols: SymbolTable,
    pub assignments: Vec<Assignment>,
    /// First token after the end of the program, if the input did not end there.
    pub trailing: Option<Token>,
}
