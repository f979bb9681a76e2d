//! Integration tests for the formula engine.

use super::*;

fn value(source: &str, pairs: &[(&str, f64)]) -> f64 {
    Expression::new(source)
        .unwrap()
        .evaluate(&bind(pairs.iter().copied()))
        .unwrap()
}

#[test]
fn test_lone_variable_substitutes_to_value_text() {
    for (name, n) in [("x", 2.0), ("y", -0.5), ("Q", 1234.0), ("t", 0.0)] {
        let expr = Expression::new(name).unwrap();
        assert_eq!(expr.substitute(&bind([(name, n)])), n.to_string());
    }
}

#[test]
fn test_implicit_multiplication() {
    assert!((value("xy", &[("x", 2.0), ("y", 3.0)]) - 6.0).abs() < 1e-10);
    assert!((value("3xy + 1", &[("x", 2.0), ("y", 3.0)]) - 19.0).abs() < 1e-10);
}

#[test]
fn test_sign_folding() {
    assert!((value("5 + x", &[("x", -3.0)]) - 2.0).abs() < 1e-10);
}

#[test]
fn test_double_negative_folding() {
    assert!((value("5 - x", &[("x", -3.0)]) - 8.0).abs() < 1e-10);
}

#[test]
fn test_radical_notation() {
    assert!((value("√(x)", &[("x", 9.0)]) - 3.0).abs() < 1e-10);
}

#[test]
fn test_radical_over_negated_negative_binding() {
    // -x with x = -4 folds to "+ 4" inside the radical
    assert!((value("√-x", &[("x", -4.0)]) - 2.0).abs() < 1e-10);
    assert!((value("1 + √+x", &[("x", 9.0)]) - 4.0).abs() < 1e-10);
}

#[test]
fn test_folded_sign_changes_square_of_negative() {
    // The sign of a negative value becomes a binary operator once folded
    assert!((value("x**2", &[("x", -3.0)]) - 9.0).abs() < 1e-10);
    assert!((value("0 + x**2", &[("x", -3.0)]) + 9.0).abs() < 1e-10);
    assert!((value("0 + (x)**2", &[("x", -3.0)]) - 9.0).abs() < 1e-10);
}

#[test]
fn test_absolute_value_notation() {
    assert!((value("|x|", &[("x", -4.0)]) - 4.0).abs() < 1e-10);
}

#[test]
fn test_line_distance_formula() {
    let d = value(
        "|ax + by + c| / √((a)**2 + (b)**2)",
        &[("a", 0.0), ("b", 1.0), ("c", 0.0), ("x", 5.0), ("y", 7.0)],
    );
    assert!((d - 7.0).abs() < 1e-10);
}

#[test]
fn test_line_distance_formula_negative_coefficients() {
    // 3x - 4y - 5 = 0, point (1, -3): |3 + 12 - 5| / 5 = 2
    let d = value(
        "|ax + by + c| / √((a)**2 + (b)**2)",
        &[("a", 3.0), ("b", -4.0), ("c", -5.0), ("x", 1.0), ("y", -3.0)],
    );
    assert!((d - 2.0).abs() < 1e-10);
}

#[test]
fn test_missing_binding_defaults_to_zero() {
    assert!((value("x + y", &[("x", 4.0)]) - 4.0).abs() < 1e-10);
}

#[test]
fn test_empty_equation_fails() {
    assert!(matches!(Expression::new(""), Err(FormulaError::InvalidEquation(_))));
}

#[test]
fn test_repeated_evaluation_is_deterministic() {
    let expr = Expression::new("|ax + by + c| / √((a)**2 + (b)**2)").unwrap();
    let bindings = bind([("a", 0.3), ("b", -1.0), ("c", 12.5), ("x", 40.0), ("y", 7.25)]);

    let first = expr.evaluate(&bindings).unwrap();
    let second = expr.evaluate(&bindings).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_evaluation_does_not_mutate_expression() {
    let expr = Expression::new("2x + y").unwrap();
    let before = expr.clone();

    expr.evaluate(&bind([("x", 1.0), ("y", 2.0)])).unwrap();
    expr.evaluate(&bind([("x", -8.0)])).unwrap();

    assert_eq!(expr.source(), before.source());
    assert_eq!(expr.variables(), before.variables());
}

#[test]
fn test_rewrite_shows_plugged_in_equation() {
    let expr = Expression::new("|ax + by + c| / √((a)**2 + (b)**2)").unwrap();
    let source = rewrite(
        &expr,
        &bind([("a", 2.0), ("b", -1.0), ("c", 3.0), ("x", 4.0), ("y", 5.0)]),
    )
    .unwrap();
    assert_eq!(source, "abs(2*4 - 1*5 + 3) / sqrt((2)**2 + (-1)**2)");
}

#[test]
fn test_free_evaluate_matches_method() {
    let expr = Expression::new("x**2 - 1").unwrap();
    let bindings = bind([("x", -3.0)]);
    assert_eq!(evaluate(&expr, &bindings).unwrap(), expr.evaluate(&bindings).unwrap());
    assert!((expr.evaluate(&bindings).unwrap() - 8.0).abs() < 1e-10);
}

#[test]
fn test_division_by_zero_propagates() {
    let v = value("1 / x", &[]);
    assert!(v.is_infinite());
}

#[test]
fn test_unbalanced_bars_surface_at_evaluation() {
    let expr = Expression::new("|x + 1").unwrap();
    let result = expr.evaluate(&bind([("x", 1.0)]));
    assert!(matches!(result, Err(FormulaError::UnbalancedDelimiter { delimiter: '|', .. })));
}

#[test]
fn test_authoring_mistake_is_syntax_error() {
    let expr = Expression::new("2x +").unwrap();
    let err = expr.evaluate(&bind([("x", 1.0)])).unwrap_err();
    assert_eq!(err.code(), "SYNTAX_ERROR");
}

#[test]
fn test_non_finite_binding_round_trips() {
    assert!(value("x + 1", &[("x", f64::NAN)]).is_nan());
    assert_eq!(value("x", &[("x", f64::NEG_INFINITY)]), f64::NEG_INFINITY);
}

#[test]
fn test_run_mode_end_to_end() {
    let config = FormulaConfig {
        identifiers: IdentifierMode::Run,
        ..FormulaConfig::default()
    };
    let expr = Expression::with_config("√(width**2 + height**2)", &config).unwrap();
    let d = expr.evaluate(&bind([("width", 3.0), ("height", 4.0)])).unwrap();
    assert!((d - 5.0).abs() < 1e-10);
}

#[test]
fn test_concurrent_evaluation() {
    let expr = std::sync::Arc::new(Expression::new("ax + b").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let expr = expr.clone();
            std::thread::spawn(move || {
                expr.evaluate(&bind([("a", i as f64), ("x", 2.0), ("b", 1.0)])).unwrap()
            })
        })
        .collect();

    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![1.0, 3.0, 5.0, 7.0]);
}
