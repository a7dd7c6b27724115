//! Property-based tests for the evaluator and result formatting

use pocketcalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn digit_event_strategy() -> impl Strategy<Value = InputEvent> {
    digit_strategy().prop_filter_map("decimal digit", InputEvent::digit)
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Any button press
fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => digit_event_strategy(),
        1 => Just(InputEvent::Point),
        2 => operator_strategy().prop_map(InputEvent::Operator),
        1 => Just(InputEvent::Equals),
        1 => Just(InputEvent::ClearAll),
        1 => Just(InputEvent::ClearEntry),
        1 => Just(InputEvent::ToggleSign),
        1 => Just(InputEvent::Percent),
    ]
}

/// Presses that only edit the operand being typed
fn entry_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => digit_event_strategy(),
        1 => Just(InputEvent::Point),
        1 => Just(InputEvent::ClearEntry),
        1 => Just(InputEvent::ToggleSign),
    ]
}

fn number_keys(n: u32) -> Vec<InputEvent> {
    n.to_string()
        .bytes()
        .filter_map(|b| InputEvent::digit(b - b'0'))
        .collect()
}

fn press_all(events: &[InputEvent]) -> Evaluator {
    let mut eval = Evaluator::new();
    for &event in events {
        eval.handle_input(event);
    }
    eval
}

// ===== Digit entry =====

proptest! {
    /// Up to nine digits without a leading zero are shown as typed
    #[test]
    fn prop_digits_shown_verbatim(
        first in 1u8..=9u8,
        rest in prop::collection::vec(digit_strategy(), 0..8),
    ) {
        let mut digits = vec![first];
        digits.extend(rest);
        let events: Vec<_> = digits.iter().filter_map(|&d| InputEvent::digit(d)).collect();
        let eval = press_all(&events);

        let expected: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert_eq!(eval.display(), expected.as_str());
        prop_assert_eq!(eval.first_operand(), expected.as_str());
    }

    /// Extra digits past nine are dropped
    #[test]
    fn prop_digits_capped_at_nine(digits in prop::collection::vec(1u8..=9u8, 10..20)) {
        let events: Vec<_> = digits.iter().filter_map(|&d| InputEvent::digit(d)).collect();
        let eval = press_all(&events);
        prop_assert_eq!(eval.display().len(), 9);
    }

    /// An accepted digit always turns the clear key into "C"
    #[test]
    fn prop_digit_sets_clear_label(events in prop::collection::vec(event_strategy(), 0..20)) {
        let mut eval = press_all(&events);
        let before = eval.display().to_string();
        let state = eval.handle_input(InputEvent::Digit(7));
        if !state.is_error() && state.text != before {
            prop_assert_eq!(state.clear_label, ClearLabel::Clear);
        }
    }
}

// ===== Whole-machine invariants =====

proptest! {
    /// The display never grows past nine characters
    #[test]
    fn prop_display_never_exceeds_limit(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut eval = Evaluator::new();
        for event in events {
            let state = eval.handle_input(event);
            prop_assert!(
                state.text.chars().count() <= MAX_DISPLAY_LEN,
                "display {:?} after {}", state.text, event
            );
        }
    }

    /// Clear-all always returns to the initial state
    #[test]
    fn prop_clear_all_resets(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut eval = press_all(&events);
        let state = eval.handle_input(InputEvent::ClearAll);
        prop_assert_eq!(state.text.as_str(), "0");
        prop_assert_eq!(state.phase, Phase::EnteringFirst);
        prop_assert_eq!(state.pending_operator, None);
        prop_assert_eq!(state.clear_label, ClearLabel::AllClear);
        prop_assert_eq!(eval.first_operand(), "");
        prop_assert_eq!(eval.second_operand(), "");
    }

    /// Once in error, only clear-all changes anything
    #[test]
    fn prop_error_is_sticky(events in prop::collection::vec(event_strategy(), 0..20)) {
        let mut eval = press_all(&[
            InputEvent::Digit(1),
            InputEvent::Operator(Operator::Divide),
            InputEvent::Digit(0),
            InputEvent::Equals,
        ]);
        prop_assert!(eval.is_error());
        for event in events {
            if event == InputEvent::ClearAll {
                break;
            }
            let state = eval.handle_input(event);
            prop_assert_eq!(state.text.as_str(), ERROR_MARKER);
            prop_assert_eq!(state.phase, Phase::Error);
        }
    }

    /// Typing alone always leaves a parsable number on the display
    #[test]
    fn prop_entry_is_numeric(events in prop::collection::vec(entry_strategy(), 0..30)) {
        let eval = press_all(&events);
        let text = eval.display();
        prop_assert!(parse_operand(text).is_ok(), "unparsable display {:?}", text);
    }

    /// The display is the error marker, the empty operator placeholder or a number,
    /// and typing never leaves an exponent in it
    #[test]
    fn prop_display_always_parsable(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut eval = Evaluator::new();
        for event in events {
            let state = eval.handle_input(event);
            if state.is_error() {
                prop_assert_eq!(state.text.as_str(), ERROR_MARKER);
                continue;
            }
            if !state.text.is_empty() {
                prop_assert!(
                    parse_operand(&state.text).is_ok(),
                    "unparsable display {:?} after {}", state.text, event
                );
            }
            if event.is_entry() {
                prop_assert!(!state.text.contains('e'), "exponent {:?} after {}", state.text, event);
            }
        }
    }

    /// Editing a scientific result never produces an unparsable or rescaled number
    #[test]
    fn prop_edit_after_scientific_result(
        a in 10_000u32..100_000,
        b in 100_000u32..1_000_000,
        edit in entry_strategy(),
    ) {
        let mut events = number_keys(a);
        events.push(InputEvent::Operator(Operator::Multiply));
        events.extend(number_keys(b));
        events.push(InputEvent::Equals);
        let mut eval = press_all(&events);
        prop_assert!(eval.display().contains('e'));

        let state = eval.handle_input(edit);
        prop_assert!(!state.is_error());
        prop_assert!(parse_operand(&state.text).is_ok(), "{:?} after {}", state.text, edit);
        if edit != InputEvent::ToggleSign {
            prop_assert!(!state.text.contains('e'), "{:?} after {}", state.text, edit);
        }

        let events = [
            InputEvent::Operator(Operator::Add),
            InputEvent::Digit(1),
            InputEvent::Equals,
        ];
        for event in events {
            eval.handle_input(event);
        }
        prop_assert!(!eval.is_error());
    }

    /// Sign toggling twice restores the display
    #[test]
    fn prop_toggle_sign_twice(digits in prop::collection::vec(digit_strategy(), 1..8)) {
        let mut events: Vec<_> = digits.iter().filter_map(|&d| InputEvent::digit(d)).collect();
        let before = press_all(&events).display().to_string();
        events.push(InputEvent::ToggleSign);
        events.push(InputEvent::ToggleSign);
        let after = press_all(&events);
        prop_assert_eq!(after.display(), before.as_str());
    }
}

// ===== Arithmetic =====

proptest! {
    /// Small integer sums match native arithmetic
    #[test]
    fn prop_addition_matches(a in 0u32..100_000, b in 0u32..100_000) {
        let mut events = number_keys(a);
        events.push(InputEvent::Operator(Operator::Add));
        events.extend(number_keys(b));
        events.push(InputEvent::Equals);
        let eval = press_all(&events);
        let expected = (a + b).to_string();
        prop_assert_eq!(eval.display(), expected.as_str());
    }

    /// Dividing by zero always ends in the error phase
    #[test]
    fn prop_divide_by_zero_errors(a in 0u8..=9u8) {
        let mut eval = Evaluator::new();
        let state = eval.press_sequence(&format!("{a} ÷ 0 =")).unwrap();
        prop_assert!(state.is_error());
        prop_assert_eq!(state.text.as_str(), ERROR_MARKER);
    }
}

// ===== Formatting =====

proptest! {
    /// Formatted results always fit the display
    #[test]
    fn prop_format_fits_display(value in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let text = format_result(value);
        prop_assert!(text.chars().count() <= MAX_DISPLAY_LEN, "{} -> {:?}", value, text);
    }

    /// Formatted results can be fed back in as operands
    #[test]
    fn prop_format_parses_back(value in -1.0e12f64..1.0e12f64) {
        let text = format_result(value);
        prop_assert!(parse_operand(&text).is_ok(), "{} -> {:?}", value, text);
    }

    /// Integers that fit are printed exactly
    #[test]
    fn prop_format_small_integers(n in -99_999_999i64..=999_999_999i64) {
        #[allow(clippy::cast_precision_loss)]
        let value = n as f64;
        prop_assert_eq!(format_result(value), n.to_string());
    }
}
