//! Property-based tests for the calculator engine state machine

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use tally_calculator::core::{
    format_display, reduce, CalcEvent, Calculator, CalculatorState, Operator, Phase, Token,
};

// ===== Strategy definitions =====

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        9 => (0u8..=9u8).prop_map(Token::Digit),
        1 => Just(Token::Point),
    ]
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = CalcEvent> {
    prop_oneof![
        6 => token_strategy().prop_map(CalcEvent::Digit),
        2 => operator_strategy().prop_map(CalcEvent::Operator),
        1 => Just(CalcEvent::Equals),
        1 => Just(CalcEvent::Delete),
        1 => Just(CalcEvent::Clear),
    ]
}

/// Any state reachable from idle
fn state_strategy() -> impl Strategy<Value = CalculatorState> {
    prop::collection::vec(event_strategy(), 0..40)
        .prop_map(|events| events.into_iter().fold(CalculatorState::default(), reduce))
}

fn digits_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,12}"
}

// ===== Entry properties =====

proptest! {
    /// With at most one point, the operand is the concatenation of the tokens
    #[test]
    fn prop_append_concatenates(
        before in "[0-9]{0,6}",
        point in any::<bool>(),
        after in "[0-9]{0,6}",
    ) {
        let input = if point { format!("{before}.{after}") } else { format!("{before}{after}") };
        let mut calc = Calculator::new();
        for c in input.chars() {
            calc.append_char(c).unwrap();
        }
        prop_assert_eq!(calc.current_operand(), input.as_str());
    }

    /// A second decimal point never lands
    #[test]
    fn prop_point_idempotent(digits in digits_strategy(), extra in 1usize..4) {
        let mut calc = Calculator::new();
        for c in digits.chars() {
            calc.append_char(c).unwrap();
        }
        calc.append_digit(Token::Point);
        let once = calc.current_operand().to_string();
        for _ in 0..extra {
            calc.append_digit(Token::Point);
        }
        prop_assert_eq!(calc.current_operand(), once.as_str());
        prop_assert_eq!(calc.current_operand().matches('.').count(), 1);
    }

    /// Reachable states never hold more than one point in either operand
    #[test]
    fn prop_operands_have_one_point_at_most(state in state_strategy()) {
        prop_assert!(state.current_operand().matches('.').count() <= 1);
        prop_assert!(state.previous_operand().matches('.').count() <= 1);
    }
}

// ===== No-op properties =====

proptest! {
    /// Choosing an operator with an empty operand leaves the state alone
    #[test]
    fn prop_operator_without_operand_is_noop(state in state_strategy(), op in operator_strategy()) {
        let mut calc = Calculator::from_state(state);
        if calc.current_operand().is_empty() {
            let before = calc.state().clone();
            calc.choose_operator(op);
            prop_assert_eq!(calc.state(), &before);
        }
    }

    /// Evaluating without a pending operator leaves the state alone
    #[test]
    fn prop_evaluate_without_operator_is_noop(state in state_strategy()) {
        let mut calc = Calculator::from_state(state);
        if calc.pending_operator().is_none() {
            let before = calc.state().clone();
            prop_assert_eq!(calc.evaluate(), None);
            prop_assert_eq!(calc.state(), &before);
        }
    }

    /// Reset from any reachable state returns to idle
    #[test]
    fn prop_reset_from_any_state(state in state_strategy()) {
        let mut calc = Calculator::from_state(state);
        calc.reset();
        prop_assert_eq!(calc.state(), &CalculatorState::default());
        prop_assert_eq!(calc.phase(), Phase::Idle);
        prop_assert!(calc.render().is_empty());
    }

    /// Delete shortens by one character and never underflows
    #[test]
    fn prop_delete_shortens(state in state_strategy()) {
        let mut calc = Calculator::from_state(state);
        let len = calc.current_operand().chars().count();
        calc.delete();
        prop_assert_eq!(calc.current_operand().chars().count(), len.saturating_sub(1));
    }
}

// ===== Arithmetic properties =====

proptest! {
    /// Integer addition through the keypad matches native addition
    #[test]
    fn prop_addition_matches(a in 0u32..100_000, b in 0u32..100_000) {
        let mut calc = Calculator::new();
        for c in a.to_string().chars() {
            calc.append_char(c).unwrap();
        }
        calc.choose_operator(Operator::Add);
        for c in b.to_string().chars() {
            calc.append_char(c).unwrap();
        }
        prop_assert_eq!(calc.evaluate(), Some(f64::from(a) + f64::from(b)));
        prop_assert_eq!(calc.current_operand(), (u64::from(a) + u64::from(b)).to_string());
        prop_assert_eq!(calc.phase(), Phase::Entering);
    }

    /// Chaining with a second operator equals evaluating in between
    #[test]
    fn prop_chain_equals_stepwise(
        a in 1u16..1000,
        b in 1u16..1000,
        c in 1u16..1000,
        first in operator_strategy(),
        second in operator_strategy(),
    ) {
        let digits = |n: u16| n.to_string().chars().map(Token::try_from).collect::<Result<Vec<_>, _>>();
        let mut chained = Calculator::new();
        let mut stepwise = Calculator::new();
        for t in digits(a).unwrap() {
            chained.append_digit(t);
            stepwise.append_digit(t);
        }
        chained.choose_operator(first);
        stepwise.choose_operator(first);
        for t in digits(b).unwrap() {
            chained.append_digit(t);
            stepwise.append_digit(t);
        }
        chained.choose_operator(second);
        stepwise.evaluate();
        stepwise.choose_operator(second);
        prop_assert_eq!(chained.state(), stepwise.state());

        for t in digits(c).unwrap() {
            chained.append_digit(t);
        }
        chained.evaluate();
        prop_assert_eq!(chained.phase(), Phase::Entering);
    }
}

// ===== Rendering properties =====

proptest! {
    /// The secondary line is empty exactly when no operator is pending
    #[test]
    fn prop_secondary_tracks_pending(state in state_strategy()) {
        let calc = Calculator::from_state(state);
        let display = calc.render();
        prop_assert_eq!(display.secondary.is_empty(), calc.pending_operator().is_none());
        if let Some(op) = calc.pending_operator() {
            prop_assert!(display.secondary.ends_with(op.symbol()));
        }
    }

    /// The main line is the formatted current operand
    #[test]
    fn prop_main_is_formatted_current(state in state_strategy()) {
        let calc = Calculator::from_state(state);
        prop_assert_eq!(calc.render().main, format_display(calc.current_operand()));
    }
}

// ===== Scenarios =====

#[test]
fn test_round_trip_add() {
    let mut calc = Calculator::new();
    calc.append_char('3').unwrap();
    calc.choose_operator(Operator::Add);
    calc.append_char('5').unwrap();
    calc.evaluate();
    assert_eq!(calc.current_operand(), "8");
    assert_eq!(calc.previous_operand(), "");
    assert_eq!(calc.pending_operator(), None);
}

#[test]
fn test_chained_operation() {
    let events = [
        CalcEvent::Digit(Token::Digit(3)),
        CalcEvent::Operator(Operator::Add),
        CalcEvent::Digit(Token::Digit(4)),
        CalcEvent::Operator(Operator::Add),
        CalcEvent::Digit(Token::Digit(5)),
        CalcEvent::Equals,
    ];
    let state = events.into_iter().fold(CalculatorState::default(), reduce);
    assert_eq!(state.current_operand(), "12");
}

#[test]
fn test_format_display_examples() {
    assert_eq!(format_display("1234.5"), "1,234.5");
    assert_eq!(format_display("1234"), "1,234");
    assert_eq!(format_display(""), "");
}
