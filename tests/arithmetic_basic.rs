use calc_mini::{Engine, Operator};

fn press(eng: &mut Engine, labels: &[&str]) {
    for label in labels {
        eng.process_str(label);
    }
}

fn displays(eng: &Engine) -> (&str, &str) {
    (eng.previous_display(), eng.current_display())
}

#[test]
fn add_then_compute() {
    let mut eng = Engine::new();
    press(&mut eng, &["5", "+"]);
    assert_eq!(displays(&eng), ("5 +", "5"));

    press(&mut eng, &["3"]);
    assert_eq!(displays(&eng), ("5 +", "3"));

    press(&mut eng, &["="]);
    assert_eq!(displays(&eng), ("5 + 3 =", "8"));
}

#[test]
fn each_operator_uses_its_glyph() {
    let cases = [
        (Operator::Add, "12 + 4 =", "16"),
        (Operator::Subtract, "12 - 4 =", "8"),
        (Operator::Multiply, "12 x 4 =", "48"),
        (Operator::Divide, "12 ÷ 4 =", "3"),
    ];
    for (op, previous, current) in cases {
        let mut eng = Engine::new();
        press(&mut eng, &["1", "2", op.glyph(), "4", "="]);
        assert_eq!(displays(&eng), (previous, current), "operator {op:?}");
    }
}

#[test]
fn subtraction_can_go_negative() {
    let mut eng = Engine::new();
    press(&mut eng, &["3", "-", "5", "="]);
    assert_eq!(eng.current_display(), "-2");
}

#[test]
fn divide_by_zero_shows_infinity() {
    let mut eng = Engine::new();
    press(&mut eng, &["7", "÷", "0", "="]);
    assert_eq!(displays(&eng), ("7 ÷ 0 =", "Infinity"));

    let mut eng = Engine::new();
    press(&mut eng, &["7", "+/-", "÷", "0", "="]);
    assert_eq!(displays(&eng), ("-7 ÷ 0 =", "-Infinity"));
}

#[test]
fn zero_over_zero_is_nan_and_sticks() {
    let mut eng = Engine::new();
    press(&mut eng, &["0", "÷", "0", "="]);
    assert_eq!(displays(&eng), ("0 ÷ 0 =", "NaN"));

    // A NaN left operand makes further `=` a no-op.
    press(&mut eng, &["="]);
    assert_eq!(displays(&eng), ("0 ÷ 0 =", "NaN"));
    assert!(eng.snapshot().awaiting_reset);
}

#[test]
fn compute_without_input_is_noop() {
    let mut eng = Engine::new();
    press(&mut eng, &["="]);
    assert_eq!(displays(&eng), ("", "0"));
    assert_eq!(eng.snapshot(), Engine::new().snapshot());
}

#[test]
fn compute_with_only_digits_is_noop() {
    let mut eng = Engine::new();
    press(&mut eng, &["4", "2", "="]);
    assert_eq!(displays(&eng), ("", "42"));
    assert!(!eng.snapshot().awaiting_reset);
}

#[test]
fn missing_right_operand_reuses_left() {
    let mut eng = Engine::new();
    press(&mut eng, &["5", "+", "="]);
    assert_eq!(displays(&eng), ("5 + 5 =", "10"));
}

#[test]
fn repeated_equals_reapplies_last_operator() {
    let mut eng = Engine::new();
    press(&mut eng, &["5", "+", "3", "="]);
    assert_eq!(eng.current_display(), "8");

    press(&mut eng, &["="]);
    assert_eq!(displays(&eng), ("8 + 8 =", "16"));

    press(&mut eng, &["="]);
    assert_eq!(displays(&eng), ("16 + 16 =", "32"));
}

#[test]
fn operator_after_result_continues_from_it() {
    let mut eng = Engine::new();
    press(&mut eng, &["5", "+", "3", "=", "x"]);
    assert_eq!(displays(&eng), ("8 x", "8"));

    press(&mut eng, &["2", "="]);
    assert_eq!(displays(&eng), ("8 x 2 =", "16"));
}

#[test]
fn digit_after_result_starts_fresh() {
    let mut eng = Engine::new();
    press(&mut eng, &["5", "+", "3", "=", "2"]);
    assert_eq!(displays(&eng), ("", "2"));

    let snap = eng.snapshot();
    assert_eq!(snap.left, None);
    assert_eq!(snap.operator, None);
    assert!(!snap.awaiting_reset);
}

#[test]
fn chained_operator_replaces_pending_one() {
    let mut eng = Engine::new();
    press(&mut eng, &["5", "+", "x"]);
    assert_eq!(eng.previous_display(), "5 x");
    press(&mut eng, &["3", "="]);
    assert_eq!(displays(&eng), ("5 x 3 =", "15"));

    // The half-typed right operand is dropped, not evaluated.
    let mut eng = Engine::new();
    press(&mut eng, &["5", "+", "3", "x"]);
    assert_eq!(eng.previous_display(), "5 x");
    assert_eq!(eng.snapshot().right, "");
    press(&mut eng, &["2", "="]);
    assert_eq!(displays(&eng), ("5 x 2 =", "10"));
}

#[test]
fn operator_first_commits_zero() {
    let mut eng = Engine::new();
    press(&mut eng, &["+"]);
    assert_eq!(eng.previous_display(), "0 +");
    press(&mut eng, &["5", "="]);
    assert_eq!(displays(&eng), ("0 + 5 =", "5"));
}

#[test]
fn floating_point_noise_is_rounded_away() {
    let mut eng = Engine::new();
    press(&mut eng, &["0", ".", "1", "+", "0", ".", "2", "="]);
    assert_eq!(displays(&eng), ("0.1 + 0.2 =", "0.3"));
}

#[test]
fn ten_character_results_stay_plain() {
    let mut eng = Engine::new();
    press(&mut eng, &["1", "÷", "3", "="]);
    assert_eq!(eng.current_display(), "0.33333333");
}

#[test]
fn long_results_switch_to_exponential() {
    let mut eng = Engine::new();
    press(&mut eng, &["1", "0", "0", "÷", "3", "="]);
    assert_eq!(eng.current_display(), "3.3333e+1");

    let mut eng = Engine::new();
    press(
        &mut eng,
        &["1", "2", "3", "4", "5", "6", "7", "8", "9", "x", "1", "0", "0", "0", "="],
    );
    assert_eq!(eng.current_display(), "1.2346e+11");

    let mut eng = Engine::new();
    press(&mut eng, &["1", "+/-", "÷", "3", "="]);
    assert_eq!(eng.current_display(), "-3.3333e-1");
}

#[test]
fn exponential_result_feeds_the_next_calculation() {
    let mut eng = Engine::new();
    press(&mut eng, &["1", "0", "0", "÷", "3", "=", "x", "3", "="]);
    assert_eq!(displays(&eng), ("3.3333e+1 x 3 =", "99.999"));
}

#[test]
fn rounding_ties_go_away_from_zero() {
    // 1/512 = 0.001953125 exactly; the ninth decimal is a tie.
    let mut eng = Engine::new();
    press(&mut eng, &["1", "÷", "5", "1", "2", "="]);
    assert_eq!(eng.current_display(), "0.00195313");
}

#[test]
fn clear_resets_everything() {
    let mut eng = Engine::new();
    press(&mut eng, &["5", "+", "3", "=", "x", "7", "AC"]);
    assert_eq!(displays(&eng), ("", "0"));
    assert_eq!(eng.snapshot(), Engine::new().snapshot());

    // No operator survives a clear, so a bare `=` does nothing.
    press(&mut eng, &["="]);
    assert_eq!(displays(&eng), ("", "0"));
}
