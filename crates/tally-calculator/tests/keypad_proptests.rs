//! Property-based tests for the keypad and its input mappings

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use tally_calculator::binding::{DomDriver, Keypad, KeypadAction};
use tally_calculator::core::Operator;
use tally_calculator::driver::CalculatorDriver;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Any action a keypad button can carry
fn keypad_action_strategy() -> impl Strategy<Value = KeypadAction> {
    prop_oneof![
        digit_strategy().prop_map(KeypadAction::Digit),
        Just(KeypadAction::Point),
        operator_strategy().prop_map(KeypadAction::Operator),
        Just(KeypadAction::Equals),
        Just(KeypadAction::Delete),
        Just(KeypadAction::AllClear),
    ]
}

fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

/// Key scripts made only of bound characters
fn script_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            '0', '1', '2', '5', '9', '.', '+', '-', '*', '/', '=', '<', 'C', ' ',
        ]),
        0..30,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// ===== Property tests for KeypadAction =====

proptest! {
    /// Every valid action is found on the keypad exactly once
    #[test]
    fn prop_every_action_has_one_button(action in keypad_action_strategy()) {
        let keypad = Keypad::new();
        let count = keypad.buttons().iter().filter(|b| b.action == action).count();
        prop_assert_eq!(count, 1);
    }

    /// Every valid action translates to an engine event
    #[test]
    fn prop_action_to_event(action in keypad_action_strategy()) {
        prop_assert!(action.to_event().is_some());
    }

    /// Digits above nine never reach the engine
    #[test]
    fn prop_out_of_range_digit_has_no_event(d in 10u8..=u8::MAX) {
        prop_assert!(KeypadAction::Digit(d).to_event().is_none());
    }

    /// A button's markup reads back as the action it was built from
    #[test]
    fn prop_button_markup_reads_back(action in keypad_action_strategy()) {
        let keypad = Keypad::new();
        let button = keypad.find_button_by_action(action).unwrap();
        prop_assert_eq!(KeypadAction::from_button(&button.to_element()), Some(action));
    }

    /// Single-character key names behave like script characters
    #[test]
    fn prop_single_char_key_matches_script(c in any::<char>()) {
        let key = c.to_string();
        prop_assert_eq!(
            KeypadAction::from_key(&key),
            KeypadAction::from_script_char(c).ok()
        );
    }
}

// ===== Property tests for Keypad layout =====

proptest! {
    /// Every grid cell is covered by exactly one button
    #[test]
    fn prop_grid_fully_covered((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let covering = keypad.buttons().iter().filter(|b| b.covers(row, col)).count();
        prop_assert_eq!(covering, 1);
        prop_assert!(keypad.get_button_at(row, col).is_some());
    }

    /// Clicking a button by ID yields its action
    #[test]
    fn prop_handle_click_by_id(action in keypad_action_strategy()) {
        let keypad = Keypad::new();
        let id = keypad.find_button_by_action(action).unwrap().id.clone();
        prop_assert_eq!(keypad.handle_click(&id), Some(action));
    }
}

// ===== Property tests for drivers =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Bound scripts never fail and all-clear always empties the page
    #[test]
    fn prop_scripts_run_and_clear(script in script_strategy()) {
        let mut driver = DomDriver::new();
        prop_assert!(driver.press_sequence(&script).is_ok());
        driver.clear();
        prop_assert_eq!(driver.main_text(), "");
        prop_assert_eq!(driver.secondary_text(), "");
    }

    /// The page always shows what the binding renders
    #[test]
    fn prop_page_matches_binding(script in script_strategy()) {
        let mut driver = DomDriver::new();
        driver.press_sequence(&script).unwrap();
        let display = driver.binding().display();
        prop_assert_eq!(driver.main_text(), display.main);
        prop_assert_eq!(driver.secondary_text(), display.secondary);
    }
}
