use lox_front::ast::{Expr, Literal};
use lox_front::error::{LoxError, ScannerError};
use lox_front::{parse, run};

fn messages(errors: &[LoxError]) -> Vec<String> {
    errors.iter().map(|err| err.to_string()).collect()
}

#[test]
fn test_precedence_ladder() {
    assert_eq!(run("1 + 2 * 3"), Ok(String::from("(+ 1 (* 2 3))")));
    assert_eq!(run("1 < 2 < 3"), Ok(String::from("(< (< 1 2) 3)")));
    assert_eq!(
        run("(1 + 2) * 3"),
        Ok(String::from("(* (group (+ 1 2)) 3)"))
    );
    assert_eq!(
        run("-1 + 2 == !false != nil"),
        Ok(String::from("(!= (== (+ (- 1) 2) (! false)) nil)"))
    );
}

#[test]
fn test_unary_nesting() {
    assert_eq!(run("-1"), Ok(String::from("(- 1)")));
    assert_eq!(run("!!true"), Ok(String::from("(! (! true))")));
}

#[test]
fn test_multi_line_source_with_comments() {
    let source = "// header comment\n(1.5 +\n 2) // trailing\n/ \"two\"";
    assert_eq!(run(source), Ok(String::from("(/ (group (+ 1.5 2)) two)")));
}

#[test]
fn test_missing_paren_reports_end() {
    let errors = run("(1 + 2").unwrap_err();
    assert_eq!(
        messages(&errors),
        vec!["[line 1] Error at end: Expect ')' after expression."]
    );
}

#[test]
fn test_unterminated_string_yields_no_tree() {
    let errors = run("\"abc").unwrap_err();
    assert_eq!(
        errors[0],
        LoxError::Scan(ScannerError {
            message: String::from("Unterminated string."),
            line: 1,
        })
    );
    // the parser still ran on the Eof-terminated stream
    assert_eq!(
        messages(&errors),
        vec![
            "[line 1] Error: Unterminated string.",
            "[line 1] Error at end: Expect expression.",
        ]
    );
}

#[test]
fn test_lexical_errors_alone_prevent_printing() {
    let errors = run("1 + 2 @").unwrap_err();
    assert_eq!(
        messages(&errors),
        vec!["[line 1] Error: Unexpected character: @."]
    );
}

#[test]
fn test_every_lexical_error_is_collected() {
    let errors = run("1 @\n+ # 2").unwrap_err();
    assert_eq!(
        messages(&errors),
        vec![
            "[line 1] Error: Unexpected character: @.",
            "[line 2] Error: Unexpected character: #.",
        ]
    );
    assert_eq!(errors[1].line(), 2);
}

#[test]
fn test_syntax_error_line_attribution() {
    let errors = run("1 +\n\n*").unwrap_err();
    assert_eq!(
        messages(&errors),
        vec!["[line 3] Error at '*': Expect expression."]
    );
}

#[test]
fn test_parse_returns_tree() {
    let expr = parse("\"lox\"").unwrap();
    assert_eq!(expr, Expr::literal(Literal::Str(String::from("lox"))));
}

#[test]
fn test_rendering_is_deterministic() {
    let sources = ["1 + 2 * 3", "(1 + 2) * 3", "!(1 >= 2) == false", "-(-3.25)"];
    for source in sources {
        let first = run(source).unwrap();
        let second = run(source).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_literal_rendering_round_trips() {
    for source in ["1", "2.5", "true", "false", "nil"] {
        let rendered = run(source).unwrap();
        assert_eq!(run(&rendered).unwrap(), rendered);
    }
}

#[test]
fn test_line_numbers_past_u16_range() {
    let errors = run(&format!("{}@ 1", "\n".repeat(70_000))).unwrap_err();
    assert_eq!(
        messages(&errors),
        vec!["[line 70001] Error: Unexpected character: @."]
    );
}

#[test]
fn test_deep_nesting_is_an_error_not_a_crash() {
    let source = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    let errors = run(&source).unwrap_err();
    assert_eq!(
        messages(&errors),
        vec!["[line 1] Error at '(': Too much nesting."]
    );

    let errors = run(&format!("{}1", "-".repeat(50_000))).unwrap_err();
    assert_eq!(
        messages(&errors),
        vec!["[line 1] Error at '-': Too much nesting."]
    );
}
