use super::parse;

/// The operator-precedence stringification cases from the spec's
/// testable-properties table: parsing then `Display`-ing a program
/// must fully parenthesize it in a way that reflects precedence.
#[test]
fn stringifies_with_correct_precedence() {
    let cases = [
        ("-a * b;", "((-a) * b)"),
        ("a + b / c;", "(a + (b / c))"),
        ("!-a;", "(!(-a))"),
        ("1 + (2 + 3) + 4;", "((1 + (2 + 3)) + 4)"),
        ("-(5 + 5);", "(-(5 + 5))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5;", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
    ];

    for (input, expected) in cases {
        assert_eq!(parse(input).to_string(), expected, "input: {input}");
    }
}

/// Re-parsing the stringified form should reproduce the same AST — the
/// spec's "pretty-print round-trip" property.
#[test]
fn stringified_program_reparses_to_equivalent_ast() {
    for input in ["-a * b;", "a + b / c;", "1 + (2 + 3) + 4;"] {
        let program = parse(input);
        let once = program.to_string();
        let reparsed = parse(&format!("{once};"));
        assert_eq!(reparsed.to_string(), once);
    }
}
