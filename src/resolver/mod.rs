
use crate::parser::ast::Assignment;
use crate::symbols::{ScopeChain, SymbolTable, Visibility};
use std::fmt;

/// Where a bare identifier ends up after lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Scoped { scope: String, name: String },
    Global(String),
    /// Not declared anywhere the reference can see. This is a normal outcome, not an error.
    Unresolved(String),
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Scoped { scope, name } => write!(f, "{}.{}", scope, name),
            Resolved::Global(name) => write!(f, "::{}", name),
            Resolved::Unresolved(name) => write!(f, "?.{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAssignment {
    pub lhs: Resolved,
    pub rhs: Resolved,
}

impl fmt::Display for ResolvedAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

/// Maps identifiers to their declaring scope using a finished symbol table.
pub struct Resolver<'t> {
    symbols: &'t SymbolTable,
}

impl<'t> Resolver<'t> {
    pub fn new(symbols: &'t SymbolTable) -> Resolver<'t> {
        Resolver { symbols }
    }

    /// Looks `name` up from the innermost scope of `scopes` outwards.
    ///
    /// The innermost scope sees all of its own variables. Enclosing scopes only lend out public
    /// ones; a private match there is passed over and the walk goes on outwards. When no
    /// enclosing scope accepts the name, globals are tried last.
    pub fn resolve(&self, name: &str, scopes: &ScopeChain) -> Resolved {
        for (depth, scope) in scopes.innermost_first().enumerate() {
            match self.symbols.lookup_in(scope, name) {
                Some(entry) if depth == 0 || entry.visibility == Visibility::Public => {
                    return Resolved::Scoped {
                        scope: scope.to_string(),
                        name: name.to_string(),
                    };
                }
                _ => continue,
            }
        }

        match self.symbols.lookup_global(name) {
            Some(_) => Resolved::Global(name.to_string()),
            None => Resolved::Unresolved(name.to_string()),
        }
    }

    pub fn resolve_assignment(&self, assignment: &Assignment) -> ResolvedAssignment {
        ResolvedAssignment {
            lhs: self.resolve(&assignment.lhs, &assignment.scopes),
            rhs: self.resolve(&assignment.rhs, &assignment.scopes),
        }
    }

    pub fn resolve_all<'a, I>(&self, assignments: I) -> Vec<ResolvedAssignment>
    where
        I: IntoIterator<Item = &'a Assignment>,
    {
        assignments
            .into_iter()
            .map(|assignment| self.resolve_assignment(assignment))
            .collect()
    }
}
