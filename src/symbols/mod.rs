mod scope_stack;


pub use scope_stack::{ScopeChain, ScopeStack};

use ordermap::OrderMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// The scope a variable was declared in.
///
/// Named scopes are identified by their name alone: two blocks spelled `A { ... }` anywhere in
/// the program share one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Named(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "::"),
            Scope::Named(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableEntry {
    pub name: String,
    pub scope: Scope,
    pub visibility: Visibility,
    pub line: usize,
}

/// Append-only table of every declared variable, in declaration order.
///
/// Duplicate declarations are kept. Lookups answer with the first entry declared for a given
/// scope and name, which is what a forward scan of `entries` would find.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<VariableEntry>,
    globals: OrderMap<String, usize>,
    scoped: OrderMap<String, OrderMap<String, usize>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, entry: VariableEntry) {
        let index = self.entries.len();
        let names = match &entry.scope {
            Scope::Global => &mut self.globals,
            Scope::Named(scope) => self.scoped.entry(scope.clone()).or_default(),
        };
        names.entry(entry.name.clone()).or_insert(index);
        self.entries.push(entry);
    }

    pub fn lookup(&self, scope: &Scope, name: &str) -> Option<&VariableEntry> {
        match scope {
            Scope::Global => self.lookup_global(name),
            Scope::Named(scope) => self.lookup_in(scope, name),
        }
    }

    pub fn lookup_in(&self, scope: &str, name: &str) -> Option<&VariableEntry> {
        self.scoped
            .get(scope)
            .and_then(|names| names.get(name))
            .map(|&i| &self.entries[i])
    }

    pub fn lookup_global(&self, name: &str) -> Option<&VariableEntry> {
        self.globals.get(name).map(|&i| &self.entries[i])
    }

    /// Named scopes in the order their first variable was declared.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scoped.keys().map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariableEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a VariableEntry;
    type IntoIter = std::slice::Iter<'a, VariableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
