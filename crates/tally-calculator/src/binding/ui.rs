//! UI binding: routes front-end input to the engine and pushes the rendered
//! display to an injected sink after every call.

use tracing::{debug, warn};

use super::keypad::KeypadAction;
use super::sink::DisplaySink;
use crate::core::{
    parse_operand, CalcError, CalcEvent, CalcResult, Calculator, DisplayText, NumberFormat,
};

/// Owns a calculator and the sink its display is written to
#[derive(Debug)]
pub struct UiBinding<S: DisplaySink> {
    calculator: Calculator,
    format: NumberFormat,
    sink: S,
}

impl<S: DisplaySink> UiBinding<S> {
    /// Creates a binding with English number formatting and writes the
    /// initial (empty) display
    pub fn new(sink: S) -> Self {
        Self::with_format(sink, NumberFormat::english())
    }

    /// Creates a binding with a custom number format
    pub fn with_format(sink: S, format: NumberFormat) -> Self {
        let mut binding = Self {
            calculator: Calculator::new(),
            format,
            sink,
        };
        binding.refresh();
        binding
    }

    /// Read-only view of the engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The number format used when rendering
    #[must_use]
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Replaces the number format and re-renders
    pub fn set_format(&mut self, format: NumberFormat) {
        self.format = format;
        self.refresh();
    }

    /// The sink receiving display updates
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the binding, returning the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Renders the current display without writing it
    #[must_use]
    pub fn display(&self) -> DisplayText {
        self.calculator.render_with(&self.format)
    }

    /// True when the current operand holds an infinite or NaN result
    #[must_use]
    pub fn has_invalid_result(&self) -> bool {
        let current = self.calculator.current_operand();
        current.starts_with("NaN") || parse_operand(current).is_some_and(|v| !v.is_finite())
    }

    /// Applies one event, then renders to the sink
    pub fn handle(&mut self, event: CalcEvent) {
        let was_invalid = self.has_invalid_result();
        self.calculator.dispatch(event);
        if !was_invalid && self.has_invalid_result() {
            warn!(
                result = self.calculator.current_operand(),
                "calculation produced a non-finite result"
            );
        }
        self.refresh();
    }

    /// Applies a keypad action. Returns false when the action maps to no
    /// event.
    pub fn press(&mut self, action: KeypadAction) -> bool {
        match action.to_event() {
            Some(event) => {
                self.handle(event);
                true
            }
            None => {
                debug!(?action, "keypad action ignored");
                false
            }
        }
    }

    /// Applies a keyboard key by name
    pub fn press_key(&mut self, key: &str) -> CalcResult<()> {
        let action =
            KeypadAction::from_key(key).ok_or_else(|| CalcError::UnknownKey(key.to_string()))?;
        self.press(action);
        Ok(())
    }

    /// Writes the current display to the sink
    pub fn refresh(&mut self) {
        let display = self.display();
        self.sink.write_display(&display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::sink::RecordingSink;
    use crate::core::{Operator, Token};

    fn binding() -> UiBinding<RecordingSink> {
        UiBinding::new(RecordingSink::new())
    }

    #[test]
    fn test_new_writes_initial_frame() {
        let binding = binding();
        assert_eq!(binding.sink().frames(), &[DisplayText::default()]);
    }

    #[test]
    fn test_every_event_renders() {
        let mut binding = binding();
        binding.handle(CalcEvent::Digit(Token::Digit(1)));
        binding.handle(CalcEvent::Digit(Token::Digit(2)));
        binding.handle(CalcEvent::Operator(Operator::Add));
        // initial frame plus one per event
        assert_eq!(binding.sink().frames().len(), 4);
        assert_eq!(binding.sink().last(), Some(&DisplayText::new("", "12 +")));
    }

    #[test]
    fn test_noop_events_still_render() {
        let mut binding = binding();
        binding.handle(CalcEvent::Equals);
        binding.handle(CalcEvent::Delete);
        assert_eq!(binding.sink().frames().len(), 3);
    }

    #[test]
    fn test_press_keypad_actions() {
        let mut binding = binding();
        assert!(binding.press(KeypadAction::Digit(9)));
        assert!(binding.press(KeypadAction::Operator(Operator::Multiply)));
        assert!(binding.press(KeypadAction::Digit(9)));
        assert!(binding.press(KeypadAction::Equals));
        assert_eq!(binding.display(), DisplayText::new("81", ""));
    }

    #[test]
    fn test_press_out_of_range_digit() {
        let mut binding = binding();
        assert!(!binding.press(KeypadAction::Digit(11)));
        assert_eq!(binding.sink().frames().len(), 1);
    }

    #[test]
    fn test_press_key_names() {
        let mut binding = binding();
        for key in ["1", "0", "0", "0", "/", "8", "Enter"] {
            binding.press_key(key).unwrap();
        }
        assert_eq!(binding.display().main, "125");
    }

    #[test]
    fn test_press_unknown_key() {
        let mut binding = binding();
        assert_eq!(
            binding.press_key("F5"),
            Err(CalcError::UnknownKey("F5".into()))
        );
    }

    #[test]
    fn test_custom_format() {
        let mut binding = UiBinding::with_format(
            RecordingSink::new(),
            NumberFormat::for_locale("de").unwrap(),
        );
        for key in ["1", "2", "3", "4", ".", "5"] {
            binding.press_key(key).unwrap();
        }
        assert_eq!(binding.display().main, "1.234,5");

        binding.set_format(NumberFormat::english());
        assert_eq!(binding.sink().last().unwrap().main, "1,234.5");
    }

    #[test]
    fn test_invalid_result_flag() {
        let mut binding = binding();
        binding.press(KeypadAction::Point);
        assert!(!binding.has_invalid_result());
        binding.press(KeypadAction::AllClear);
        for key in ["5", "/", "0", "Enter"] {
            binding.press_key(key).unwrap();
        }
        assert!(binding.has_invalid_result());
        assert_eq!(binding.display().main, "");
        binding.press(KeypadAction::AllClear);
        assert!(!binding.has_invalid_result());
    }

    #[test]
    fn test_into_sink() {
        let mut binding = binding();
        binding.press(KeypadAction::Digit(4));
        let sink = binding.into_sink();
        assert_eq!(sink.last(), Some(&DisplayText::new("4", "")));
    }
}
