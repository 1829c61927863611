use lexer::Lexer;
use parser::{pretty_print_ast::PrettyPrint, Parser};

pub mod lexer;
pub mod parser;
pub mod symbols;

#[cfg(feature = "resolve")]
pub mod resolver;
#[cfg(feature = "resolve")]
use resolver::Resolver;

/// Parses `input` and resolves every assignment in it.
///
/// Returns one `lhs = rhs` line per assignment, in source order, each terminated by a newline.
/// The first syntax error aborts the whole run and nothing is resolved.
pub fn analyze(input: &str, debug: bool) -> anyhow::Result<String> {
    let program = Parser::new(Lexer::new(input)).program()?;

    if debug {
        eprintln!("{}", PrettyPrint::new().print_program(&program));
    }

    #[cfg(feature = "resolve")]
    let output = Resolver::new(&program.symbols)
        .resolve_all(&program.assignments)
        .iter()
        .map(|assignment| format!("{}\n", assignment))
        .collect();

    #[cfg(not(feature = "resolve"))]
    let output = format!("{}\n", PrettyPrint::new().print_program(&program));

    Ok(output)
}
