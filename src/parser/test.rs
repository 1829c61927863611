use super::pretty_print_ast::PrettyPrint;
use super::*;
use crate::symbols::{ScopeChain, Scope};

fn parse(input: &str) -> ParseResult<Program> {
    Parser::new(Lexer::new(input)).program()
}

fn expect_error(input: &str, exp: &str, line: usize) {
    let err = parse(input).expect_err("input should not parse");
    let ParseErrorType::Expected { exp: got_exp, .. } = &err.error;
    assert_eq!(*got_exp, exp, "wrong expectation for {input:?}");
    assert_eq!(err.token.line, line, "wrong line for {input:?}");
}

fn chain(scopes: &[&str]) -> ScopeChain {
    ScopeChain(scopes.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_global_declarations() -> Result<(), ParseError> {
    let program = parse("a, b, c;")?;

    let declared: Vec<_> = program
        .symbols
        .iter()
        .map(|e| (e.name.as_str(), e.scope.clone(), e.visibility))
        .collect();
    assert_eq!(
        declared,
        vec![
            ("a", Scope::Global, Visibility::Public),
            ("b", Scope::Global, Visibility::Public),
            ("c", Scope::Global, Visibility::Public),
        ]
    );
    assert!(program.assignments.is_empty());
    assert!(program.trailing.is_none());
    Ok(())
}

#[test]
fn test_scoped_declarations() -> Result<(), ParseError> {
    let input = "g;
        A {
            public: a, b;
            private: c;
            B {
                private: d;
            }
            public: e;
        }";
    let program = parse(input);

    // visibility sections must come before nested scopes
    assert!(program.is_err());

    let input = "g;
        A {
            public: a, b;
            private: c;
            public: e;
            B {
                private: d;
            }
        }";
    let program = parse(input)?;
    let declared: Vec<_> = program
        .symbols
        .iter()
        .map(|e| (e.name.as_str(), e.scope.to_string(), e.visibility, e.line))
        .collect();
    assert_eq!(
        declared,
        vec![
            ("g", "::".to_string(), Visibility::Public, 1),
            ("a", "A".to_string(), Visibility::Public, 3),
            ("b", "A".to_string(), Visibility::Public, 3),
            ("c", "A".to_string(), Visibility::Private, 4),
            ("e", "A".to_string(), Visibility::Public, 5),
            ("d", "B".to_string(), Visibility::Private, 7),
        ]
    );
    Ok(())
}

#[test]
fn test_assignment_scope_chains() -> Result<(), ParseError> {
    let input = "x;
        A {
            B {
                C { x = y; }
                x = z;
            }
            D { }
            y = x;
        }
        q = r;";
    let program = parse(input)?;

    let parsed: Vec<_> = program
        .assignments
        .iter()
        .map(|a| (a.lhs.0.as_str(), a.rhs.0.as_str(), a.scopes.clone()))
        .collect();
    assert_eq!(
        parsed,
        vec![
            ("x", "y", chain(&["A", "B", "C"])),
            ("x", "z", chain(&["A", "B"])),
            ("y", "x", chain(&["A"])),
            ("q", "r", chain(&[])),
        ]
    );
    assert_eq!(program.assignments[1].lhs.1.line, 5);
    Ok(())
}

#[test]
fn test_duplicate_declarations_are_kept() -> Result<(), ParseError> {
    let program = parse("a, a; A { public: p; private: p; } A { public: p; }")?;
    assert_eq!(program.symbols.len(), 5);
    assert_eq!(program.symbols.scopes().collect::<Vec<_>>(), vec!["A"]);
    assert_eq!(
        program.symbols.lookup_in("A", "p").map(|e| e.visibility),
        Some(Visibility::Public)
    );
    Ok(())
}

#[test]
fn test_keywords_are_not_identifiers() {
    expect_error("public;", "ID", 1);
    expect_error("a; A { x = public; }", "ID", 1);
}

#[test]
fn test_syntax_errors() {
    expect_error("", "ID", 1);
    expect_error(";", "ID", 1);
    expect_error("a, ;", "ID", 1);
    expect_error("a b;", "';'", 1);
    expect_error("a\n\nA { }", "';'", 3);
    expect_error("a; A { public x; }", "':'", 1);
    expect_error("a; A { public: ; }", "ID", 1);
    expect_error("a; A { public: x }", "';'", 1);
    expect_error("a; A {\n  x = y;\n", "'}'", 3);
    expect_error("a; A { x = y }", "';'", 1);
    expect_error("a; A { x = ; }", "ID", 1);
    expect_error("a; A { x y; }", "'}'", 1);
    expect_error("a; A { x = y; _ }", "'}'", 1);
}

#[test]
fn test_error_reports_offending_token() {
    let err = parse("a;\nA {\n  x = y\n}").expect_err("missing semicolon");
    assert_eq!(err.token.tok_type, TokenType::RBrace);
    assert_eq!(err.token.line, 4);
    assert_eq!(err.to_string(), "Syntax Error: Expected ';' at line 4");

    let err = parse("a; A { x = y;").expect_err("unterminated scope");
    let ParseErrorType::Expected { got, .. } = &err.error;
    assert_eq!(got, "<eof>");
}

#[test]
fn test_trailing_input_is_kept_aside() -> Result<(), ParseError> {
    let program = parse("a; a = a;\n}")?;
    assert_eq!(program.assignments.len(), 1);

    let trailing = program.trailing.expect("trailing token");
    assert_eq!(trailing.tok_type, TokenType::RBrace);
    assert_eq!(trailing.line, 2);
    Ok(())
}

#[test]
fn test_scope_after_assignment_is_trailing() -> Result<(), ParseError> {
    // assignments close the scope list, so a later scope is never parsed
    let program = parse("a; a = a; A { public: b; }")?;
    assert_eq!(program.symbols.len(), 1);
    assert_eq!(
        program.trailing.map(|t| t.lexeme),
        Some("A".to_string())
    );
    Ok(())
}

#[test]
fn test_pretty_print() -> Result<(), ParseError> {
    colored::control::set_override(false);
    let program = parse("g; A { private: x; B { x = g; } } junk")?;
    let dump = PrettyPrint::new().print_program(&program);

    assert!(dump.contains("    :: g public (line 1)"));
    assert!(dump.contains("    A x private (line 1)"));
    assert!(dump.contains("    [A > B] x = g (line 1)"));
    assert!(dump.contains("IGNORED TRAILING INPUT at line 1: \"junk\""));
    Ok(())
}
