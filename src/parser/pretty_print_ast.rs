use super::ast::*;
use crate::symbols::{Scope, VariableEntry, Visibility};
use colored::Colorize;

/// Human-readable dump of a parsed, unresolved program.
pub struct PrettyPrint {
    indent: usize,
}

impl PrettyPrint {
    const INDENT: &'static str = "    ";

    pub fn new() -> Self {
        Self { indent: 0 }
    }

    fn pad(&self) -> String {
        Self::INDENT.repeat(self.indent)
    }

    pub fn print_program(&mut self, program: &Program) -> String {
        let mut lines = vec![format!("{}", "SYMBOLS".red())];
        self.indent += 1;
        lines.extend(program.symbols.iter().map(|entry| self.print_entry(entry)));
        self.indent -= 1;

        lines.push(format!("{}", "ASSIGNMENTS".red()));
        self.indent += 1;
        lines.extend(
            program
                .assignments
                .iter()
                .map(|assignment| self.print_assignment(assignment)),
        );
        self.indent -= 1;

        if let Some(token) = &program.trailing {
            lines.push(format!(
                "{} at line {}: {:?}",
                "IGNORED TRAILING INPUT".yellow(),
                token.line,
                token.lexeme
            ));
        }

        lines.join("\n")
    }

    fn print_entry(&self, entry: &VariableEntry) -> String {
        let scope = match &entry.scope {
            Scope::Global => "::".cyan(),
            Scope::Named(name) => name.blue(),
        };
        let visibility = match entry.visibility {
            Visibility::Public => entry.visibility.to_string().green(),
            Visibility::Private => entry.visibility.to_string().magenta(),
        };
        format!(
            "{}{} {} {} (line {})",
            self.pad(),
            scope,
            entry.name,
            visibility,
            entry.line
        )
    }

    fn print_assignment(&self, assignment: &Assignment) -> String {
        let chain = if assignment.scopes.is_empty() {
            "::".to_string()
        } else {
            assignment.scopes.0.join(" > ")
        };
        format!(
            "{}[{}] {} = {} (line {})",
            self.pad(),
            chain.blue(),
            assignment.lhs.0,
            assignment.rhs.0,
            assignment.lhs.1.line
        )
    }
}

impl Default for PrettyPrint {
    fn default() -> Self {
        Self::new()
    }
}
