use std::{fs, path::Path};

use grapher::{
    ast::{BinaryOperator, BuiltinConstant, BuiltinFunction, Expr, UnaryOperator},
    compile,
    error::{LexError, ParseError, PlotError, SyntaxError},
    interpreter::{evaluator::core::evaluate, parser::core::{MAX_DEPTH, MAX_TREE_DEPTH}},
    plot::{Sample, Viewport, sample},
    session::{
        equation::{Equation, EquationState},
        list::EquationList,
        text::TextBuffer,
    },
};
use walkdir::WalkDir;

#[test]
fn documentation_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("docs").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for block in extract_example_blocks(&content) {
            for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
                count += 1;
                check_example_line(line, path);
            }
        }
    }

    assert!(count > 0, "No grapher examples found in docs");
}

/// Checks one example of the form `expr => value`, `expr where x = v =>
/// value` or `expr => invalid`.
fn check_example_line(line: &str, path: &Path) {
    let (lhs, expected) = line.rsplit_once("=>")
                              .unwrap_or_else(|| panic!("Malformed example in {path:?}: {line}"));
    let (source, x) = match lhs.split_once(" where x = ") {
        Some((source, x)) => (source, x.trim().parse::<f32>().unwrap()),
        None => (lhs, 0.0),
    };
    let expected = expected.trim();

    if expected == "invalid" {
        assert!(compile(source.trim()).is_err(),
                "Example {line:?} in {path:?} was expected to be invalid");
        return;
    }

    let expr = compile(source.trim()).unwrap_or_else(|e| {
                                         panic!("Example {line:?} in {path:?} failed: {e}")
                                     });
    let value = evaluate(&expr, x);
    match expected {
        "nan" => assert!(value.is_nan(), "{line:?}: got {value}"),
        "inf" => assert_eq!(value, f32::INFINITY, "{line:?}"),
        "-inf" => assert_eq!(value, f32::NEG_INFINITY, "{line:?}"),
        number => {
            let expected: f32 = number.parse().unwrap();
            assert!((value - expected).abs() <= 1e-5 * expected.abs().max(1.0),
                    "{line:?}: expected {expected}, got {value}");
        },
    }
}

fn extract_example_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```grapher") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn value_at(src: &str, x: f32) -> f32 {
    match compile(src) {
        Ok(expr) => evaluate(&expr, x),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_value(src: &str, x: f32, expected: f32) {
    let value = value_at(src, x);
    assert!((value - expected).abs() <= 1e-6 * expected.abs().max(1.0),
            "{src:?} at x = {x}: expected {expected}, got {value}");
}

fn assert_invalid(src: &str) {
    if compile(src).is_ok() {
        panic!("Expression {src:?} parsed but was expected to be invalid")
    }
}

fn parse_error(src: &str) -> ParseError {
    match compile(src) {
        Err(SyntaxError::Parse(e)) => e,
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

#[test]
fn precedence() {
    assert_value("2+3*4", 0.0, 14.0);
    assert_value("(2+3)*4", 0.0, 20.0);
    assert_value("2*3+4", 0.0, 10.0);
    assert_value("10-4/2", 0.0, 8.0);
    assert_value("7%4*2", 0.0, 6.0);
}

#[test]
fn equal_ranks_associate_left() {
    assert_value("1-2-3", 0.0, -4.0);
    assert_value("8/4/2", 0.0, 1.0);
    assert_value("9%5%3", 0.0, 1.0);

    let expected = Expr::binary(BinaryOperator::Sub,
                                Expr::binary(BinaryOperator::Sub, Expr::Number(1.0), Expr::Number(2.0)),
                                Expr::Number(3.0));
    assert_eq!(compile("1-2-3").unwrap(), expected);
}

#[test]
fn implicit_multiplication() {
    assert_value("2x", 3.0, 6.0);
    assert_value("2(1+1)", 0.0, 4.0);
    assert_value("(1+1)(2+1)", 0.0, 6.0);
    assert_value("x(x+1)", 2.0, 6.0);
    assert_value("2pi", 0.0, 2.0 * std::f32::consts::PI);
    assert_value("3x2", 5.0, 30.0);
    assert_value("2sin(x)+3", 0.0, 3.0);
}

#[test]
fn implicit_multiplication_binds_like_explicit() {
    assert_eq!(compile("1/2x").unwrap(), compile("1/2*x").unwrap());
    assert_value("1/2x", 4.0, 2.0);
}

#[test]
fn unary_operators() {
    assert_value("--2", 0.0, 2.0);
    assert_value("-+-2", 0.0, 2.0);
    assert_value("-x", 3.0, -3.0);
    assert_value("2*-3", 0.0, -6.0);
    assert_value("2--3", 0.0, 5.0);
    assert_value("-2*3", 0.0, -6.0);
    assert_value("-(1+2)", 0.0, -3.0);

    let expected = Expr::unary(UnaryOperator::Minus,
                               Expr::unary(UnaryOperator::Minus, Expr::Number(2.0)));
    assert_eq!(compile("--2").unwrap(), expected);
}

#[test]
fn unary_minus_binds_tighter_than_infix() {
    let expected = Expr::binary(BinaryOperator::Add,
                                Expr::unary(UnaryOperator::Minus, Expr::Number(2.0)),
                                Expr::Number(3.0));
    assert_eq!(compile("-2+3").unwrap(), expected);
}

#[test]
fn function_forms() {
    assert_value("sin(0)", 0.0, 0.0);
    assert_value("sqrt4", 0.0, 2.0);
    assert_value("sqrt 9", 0.0, 3.0);
    assert_value("sqrt4x", 4.0, 4.0);
    assert_value("sqrt(4)x", 3.0, 6.0);
    assert_value("abs(-3)", 0.0, 3.0);
    assert_value("exp0", 0.0, 1.0);
    assert_value("log e", 0.0, 1.0);
}

#[test]
fn run_application_stops_at_parenthesis() {
    // f2(x) is f(2) * x.
    assert_eq!(compile("sqrt4(x)").unwrap(), compile("sqrt(4)*x").unwrap());
    assert_value("sqrt4(x)", 5.0, 10.0);
}

#[test]
fn function_chaining_nests_calls() {
    let expected = Expr::call(BuiltinFunction::Sin,
                              Expr::call(BuiltinFunction::Cos, Expr::Constant(BuiltinConstant::X)));
    assert_eq!(compile("sin cos x").unwrap(), expected);
    assert_eq!(compile("sincosx").unwrap(), expected);
    assert_invalid("abs floor -2.5");
    assert_value("abs floor(-2.5)", 0.0, 3.0);
    assert_value("sqrt sqrt 16", 0.0, 2.0);
}

#[test]
fn adjacent_functions_multiply() {
    // Each function takes its own run, and the results multiply.
    assert_eq!(compile("sin x cos x").unwrap(),
               compile("sin(x)*cos(x)").unwrap());
}

#[test]
fn longest_name_wins() {
    assert_value("sinh0", 0.0, 0.0);
    assert_value("cosh0", 0.0, 1.0);
    assert_value("exp(1)", 0.0, std::f32::consts::E);
    assert_value("asin1", 0.0, std::f32::consts::FRAC_PI_2);
}

#[test]
fn builtin_functions() {
    assert_value("floor(2.7)", 0.0, 2.0);
    assert_value("ceil(2.1)", 0.0, 3.0);
    assert_value("round(2.5)", 0.0, 3.0);
    assert_value("round(-2.5)", 0.0, -3.0);
    assert_value("sgn(-4)", 0.0, -1.0);
    assert_value("sgn(0)", 0.0, 0.0);
    assert_value("sgn(11)", 0.0, 1.0);
    assert_value("tanh0", 0.0, 0.0);
    assert_value("atan1", 0.0, std::f32::consts::FRAC_PI_4);
    assert_value("acos1", 0.0, 0.0);
    assert_value("tan0", 0.0, 0.0);
    assert_value("cos pi", 0.0, -1.0);
}

#[test]
fn number_literals() {
    assert_value("2.5", 0.0, 2.5);
    assert_value(".5", 0.0, 0.5);
    assert_value("1.", 0.0, 1.0);
    assert_value("2e3", 0.0, 2000.0);
    assert_value("2E-1", 0.0, 0.2);
    assert_value("1.5e+1", 0.0, 15.0);
    // An incomplete exponent leaves `e` as the constant.
    assert_value("2e", 0.0, 2.0 * std::f32::consts::E);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(compile(" 2 + 3 * x ").unwrap(), compile("2+3*x").unwrap());
    assert_value("\t1 -\n2", 0.0, -1.0);
}

#[test]
fn division_by_zero_is_ieee() {
    assert_eq!(value_at("1/0", 0.0), f32::INFINITY);
    assert_eq!(value_at("-1/0", 0.0), f32::NEG_INFINITY);
    assert!(value_at("0/0", 0.0).is_nan());
    assert!(value_at("1%0", 0.0).is_nan());
    assert!(value_at("1/x", 0.0).is_infinite());
}

#[test]
fn out_of_domain_is_nan() {
    assert!(value_at("sqrt(-1)", 0.0).is_nan());
    assert!(value_at("log(-1)", 0.0).is_nan());
    assert!(value_at("asin 2", 0.0).is_nan());
    assert_eq!(value_at("log 0", 0.0), f32::NEG_INFINITY);
}

#[test]
fn reserved_variable_evaluates_to_nan() {
    assert!(evaluate(&Expr::Variable, 1.0).is_nan());
    let expr = Expr::binary(BinaryOperator::Add, Expr::Number(1.0), Expr::Variable);
    assert!(evaluate(&expr, 1.0).is_nan());
}

#[test]
fn malformed_input_is_invalid() {
    assert_invalid("");
    assert_invalid("   ");
    assert_invalid("(1+2");
    assert_invalid("1+2)");
    assert_invalid("2+");
    assert_invalid("-2^");
    assert_invalid("-");
    assert_invalid("()");
    assert_invalid("2()");
    assert_invalid("sin");
    assert_invalid("sin()");
    assert_invalid("sin-x");
    assert_invalid("2++");
    assert_invalid("y");
    assert_invalid("ppi");
}

#[test]
fn lex_errors_report_position() {
    match compile("1 + ?") {
        Err(SyntaxError::Lex(LexError::UnrecognizedInput { text, position })) => {
            assert_eq!(text, "?");
            assert_eq!(position, 4);
        },
        other => panic!("Unexpected result: {other:?}"),
    }
    match compile("(*2)") {
        Err(SyntaxError::Lex(error)) => {
            assert_eq!(error, LexError::MisplacedOperator { operator: '*',
                                                            position: 1, });
            assert_eq!(error.position(), 1);
        },
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn lex_error_positions_are_byte_offsets() {
    // `π` is two bytes long.
    match compile("1+\u{3c0}") {
        Err(SyntaxError::Lex(error)) => {
            assert_eq!(error.position(), 2);
            assert!(error.to_string().starts_with("Error at byte 2:"), "{error}");
        },
        other => panic!("Unexpected result: {other:?}"),
    }
    match compile("2 + (*x)") {
        Err(SyntaxError::Lex(error)) => {
            assert_eq!(error.to_string(),
                       "Error at byte 5: Operator '*' needs an operand on its left.");
        },
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn parse_errors_name_the_violation() {
    assert_eq!(parse_error(""), ParseError::EmptyExpression);
    assert_eq!(parse_error("(1+2"), ParseError::UnmatchedParen);
    assert_eq!(parse_error("1+2)"), ParseError::UnmatchedParen);
    assert_eq!(parse_error("sin(1"), ParseError::UnmatchedParen);
    assert_eq!(parse_error("2+"), ParseError::MissingOperand { operator: '+' });
    assert_eq!(parse_error("sin"), ParseError::MissingArgument { function: BuiltinFunction::Sin });
    assert_eq!(parse_error("sin()"), ParseError::EmptyExpression);
    assert_eq!(parse_error("()"), ParseError::UnexpectedToken { token: ")".to_string() });
}

#[test]
fn deep_nesting_is_rejected() {
    let chain = "sin".repeat(MAX_DEPTH + 1) + "x";
    assert_eq!(parse_error(&chain), ParseError::NestingTooDeep { limit: MAX_DEPTH });
    assert!(compile(&("sin".repeat(MAX_DEPTH) + "x")).is_ok());

    let negations = "-".repeat(MAX_DEPTH + 1) + "1";
    assert_eq!(parse_error(&negations), ParseError::NestingTooDeep { limit: MAX_DEPTH });
    assert_value(&("-".repeat(MAX_DEPTH) + "1"), 0.0, 1.0);

    let groups = "(".repeat(MAX_DEPTH + 1) + "x" + &")".repeat(MAX_DEPTH + 1);
    assert_eq!(parse_error(&groups), ParseError::NestingTooDeep { limit: MAX_DEPTH });
    let groups = "(".repeat(MAX_DEPTH) + "x" + &")".repeat(MAX_DEPTH);
    assert_value(&groups, 7.0, 7.0);
}

#[test]
fn nesting_counts_every_enclosing_construct() {
    // Each `-(` opens two levels.
    let half = MAX_DEPTH / 2;
    let source = "-(".repeat(half + 1) + "1" + &")".repeat(half + 1);
    assert_eq!(parse_error(&source), ParseError::NestingTooDeep { limit: MAX_DEPTH });

    let source = "-(".repeat(half) + "1" + &")".repeat(half);
    assert_value(&source, 0.0, 1.0);
}

#[test]
fn long_flat_chains_are_not_nesting() {
    let sum = vec!["1"; 1000].join("+");
    assert_value(&sum, 0.0, 1000.0);

    let product = vec!["x"; 1000].join("*");
    assert_value(&product, 1.0, 1.0);
    assert_value(&product, -1.0, 1.0);

    let implicit = "x".repeat(1000);
    assert_eq!(compile(&implicit).unwrap(), compile(&product).unwrap());

    let differences = vec!["(1-1)"; 1000].join("-");
    assert_value(&differences, 0.0, 0.0);
}

#[test]
fn tree_depth_is_capped_separately() {
    assert!(compile(&vec!["1"; MAX_TREE_DEPTH].join("+")).is_ok());

    let too_long = vec!["1"; MAX_TREE_DEPTH + 1].join("+");
    assert_eq!(parse_error(&too_long), ParseError::TreeTooDeep { limit: MAX_TREE_DEPTH });
}

#[test]
fn recommitting_is_idempotent() {
    let mut equation = Equation::with_text("2sin(x)+x%3");
    equation.commit();
    let first = equation.expr().cloned();
    let first_value = equation.evaluate(1.7);

    equation.commit();
    assert_eq!(equation.expr().cloned(), first);
    assert_eq!(equation.evaluate(1.7).map(f32::to_bits),
               first_value.map(f32::to_bits));
}

#[test]
fn equation_lifecycle() {
    let mut equation = Equation::new();
    assert_eq!(equation.state(), EquationState::Unparsed);
    assert_eq!(equation.evaluate(0.0), None);

    for c in "x+1".chars() {
        equation.editor_mut().insert(c);
    }
    // Editing alone does not re-parse.
    assert_eq!(equation.state(), EquationState::Unparsed);
    assert_eq!(equation.text(), "");

    assert_eq!(equation.commit(), EquationState::Valid);
    assert_eq!(equation.text(), "x+1");
    assert_eq!(equation.evaluate(2.0), Some(3.0));
    assert!(equation.error().is_none());

    equation.editor_mut().insert('+');
    assert_eq!(equation.evaluate(2.0), Some(3.0));

    assert_eq!(equation.commit(), EquationState::Invalid);
    assert!(equation.expr().is_none());
    assert_eq!(equation.evaluate(2.0), None);
    assert_eq!(equation.error(),
               Some(&SyntaxError::Parse(ParseError::MissingOperand { operator: '+' })));

    equation.editor_mut().backspace();
    assert_eq!(equation.commit(), EquationState::Valid);
}

#[test]
fn text_buffer_editing() {
    let mut buffer = TextBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.backspace(), None);

    buffer.insert('x');
    buffer.insert('1');
    buffer.move_left();
    buffer.insert('+');
    assert_eq!(buffer.to_string(), "x+1");
    assert_eq!(buffer.cursor(), 2);

    assert_eq!(buffer.backspace(), Some('+'));
    assert_eq!(buffer.to_string(), "x1");
    assert_eq!(buffer.cursor(), 1);

    buffer.append('0');
    assert_eq!(buffer.to_string(), "x10");
    assert_eq!(buffer.cursor(), 1);

    buffer.set_cursor(99);
    assert_eq!(buffer.cursor(), 3);
    buffer.move_right();
    assert_eq!(buffer.cursor(), 3);

    buffer.set_cursor(0);
    buffer.move_left();
    assert_eq!(buffer.cursor(), 0);
    assert_eq!(buffer.len(), 3);
}

#[test]
fn equation_list_selection_commits_on_focus_change() {
    let mut list = EquationList::new();
    assert!(!list.select(0));
    assert_eq!(list.commit_selected(), None);

    list.add().editor_mut().insert('x');
    assert_eq!(list.get(0).unwrap().state(), EquationState::Unparsed);

    list.add().editor_mut().insert('(');
    assert_eq!(list.get(0).unwrap().state(), EquationState::Valid);
    assert_eq!(list.get(1).unwrap().state(), EquationState::Unparsed);

    assert!(list.select(0));
    assert_eq!(list.get(1).unwrap().state(), EquationState::Invalid);

    // Re-selecting the same equation does not commit it.
    list.selected_mut().unwrap().editor_mut().insert('+');
    assert!(list.select(0));
    assert_eq!(list.selected().unwrap().text(), "x");

    assert_eq!(list.commit_selected(), Some(EquationState::Invalid));
    assert_eq!(list.valid().count(), 0);
}

#[test]
fn equation_list_removal() {
    let mut list = EquationList::new();
    for source in ["x", "2x", "3x"] {
        let equation = list.add();
        source.chars().for_each(|c| equation.editor_mut().insert(c));
    }
    list.commit_selected();
    assert_eq!(list.valid().map(|(index, _)| index).collect::<Vec<_>>(), vec![0, 1, 2]);

    list.select(0);
    let removed = list.remove_selected().unwrap();
    assert_eq!(removed.text(), "x");
    assert_eq!(list.selected_index(), Some(0));
    assert_eq!(list.selected().unwrap().text(), "2x");

    list.remove_selected();
    list.remove_selected();
    assert!(list.is_empty());
    assert_eq!(list.selected_index(), None);
    assert!(list.remove_selected().is_none());
}

#[test]
fn equation_list_add_after_emptying() {
    let mut list = EquationList::new();
    list.add();
    list.add();
    list.remove_selected();
    list.remove_selected();
    list.add();
    assert_eq!(list.len(), 1);
    assert_eq!(list.selected_index(), Some(0));
}

#[test]
fn sampling_spans_the_viewport() {
    let expr = compile("x%2").unwrap();
    let viewport = Viewport::new((-1.0, 3.0), (-5.0, 5.0)).unwrap();
    let points = sample(&expr, &viewport, 9).unwrap();

    assert_eq!(points.len(), 9);
    assert_eq!(points.first().map(|p| p.x), Some(-1.0));
    assert_eq!(points.last().map(|p| p.x), Some(3.0));
    for point in &points {
        assert!((point.y - point.x % 2.0).abs() < 1e-6, "{point:?}");
    }
}

#[test]
fn sampling_keeps_undefined_points() {
    let expr = compile("1/x").unwrap();
    let points = sample(&expr, &Viewport::default(), 21).unwrap();
    let pole = points.iter().find(|p| p.x == 0.0).unwrap();
    assert!(pole.y.is_infinite());

    let viewport = Viewport::default();
    assert!(!viewport.contains(*pole));
    assert!(!viewport.contains(Sample { x: 0.0, y: f32::NAN }));
    assert!(viewport.contains(Sample { x: 0.0, y: 5.0 }));
}

#[test]
fn sampling_rejects_bad_setups() {
    let expr = compile("x").unwrap();
    let viewport = Viewport::default();
    assert_eq!(sample(&expr, &viewport, 1), Err(PlotError::TooFewColumns { columns: 1 }));
    assert_eq!(sample(&expr, &viewport, 0), Err(PlotError::TooFewColumns { columns: 0 }));
    assert_eq!(Viewport::new((2.0, 1.0), (0.0, 1.0)),
               Err(PlotError::InvalidRange { min: 2.0, max: 1.0 }));
    assert!(Viewport::new((0.0, f32::INFINITY), (0.0, 1.0)).is_err());
    assert_eq!(Viewport::default().x_range(), (-10.0, 10.0));
    assert_eq!(Viewport::default().y_range(), (-5.0, 5.0));
}
