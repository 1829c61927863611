use super::Scope;

/// Names of the scopes enclosing a point in the program, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeChain(pub Vec<String>);

impl ScopeChain {
    /// Walks the chain from the innermost scope outwards.
    pub fn innermost_first(&self) -> impl Iterator<Item = &str> {
        self.0.iter().rev().map(String::as_str)
    }

    pub fn innermost(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ScopeStack {
    scope_stack: Vec<String>,
}

impl ScopeStack {
    pub fn new() -> ScopeStack {
        ScopeStack {
            scope_stack: Vec::new(),
        }
    }

    pub fn enter(&mut self, name: String) {
        self.scope_stack.push(name);
    }

    pub fn unwind(&mut self) -> Option<String> {
        self.scope_stack.pop()
    }

    /// Scope that declarations made right now belong to.
    pub fn current_scope(&self) -> Scope {
        match self.scope_stack.last() {
            Some(name) => Scope::Named(name.clone()),
            None => Scope::Global,
        }
    }

    pub fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    pub fn snapshot(&self) -> ScopeChain {
        ScopeChain(self.scope_stack.clone())
    }
}
