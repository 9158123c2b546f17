//! DOM Driver - Unified Testing Interface
//!
//! Drives the calculator page the way a user would: clicks land on keypad
//! buttons, the bound action is read from the button markup, and results
//! are read back from the output elements.

use super::dom::{DomEvent, MockDom, CURRENT_OPERAND_ATTR, PREVIOUS_OPERAND_ATTR};
use super::keypad::{Keypad, KeypadAction};
use super::ui::UiBinding;
use crate::core::{CalcError, CalcResult, NumberFormat};
use crate::driver::CalculatorDriver;

/// Driver wrapping a binding whose sink is the mock calculator page
#[derive(Debug)]
pub struct DomDriver {
    binding: UiBinding<MockDom>,
    keypad: Keypad,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a driver over a fresh calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(NumberFormat::english())
    }

    /// Creates a driver rendering with the given number format
    #[must_use]
    pub fn with_format(format: NumberFormat) -> Self {
        let keypad = Keypad::new();
        let dom = MockDom::calculator(&keypad);
        Self {
            binding: UiBinding::with_format(dom, format),
            keypad,
        }
    }

    /// Returns the binding
    #[must_use]
    pub fn binding(&self) -> &UiBinding<MockDom> {
        &self.binding
    }

    /// Returns the page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.binding.sink()
    }

    /// Clicks an element by ID. The action is read from the element's
    /// markup, so an unbound element is reported as an unknown key.
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        self.binding
            .sink_mut()
            .dispatch_event(DomEvent::click(element_id));
        let action = self
            .dom()
            .get_element(element_id)
            .and_then(KeypadAction::from_button)
            .ok_or_else(|| CalcError::UnknownKey(element_id.to_string()))?;
        self.binding.press(action);
        Ok(())
    }

    /// Presses a keyboard key by name
    pub fn key_down(&mut self, key: &str) -> CalcResult<()> {
        self.binding.sink_mut().dispatch_event(DomEvent::key_down(key));
        self.binding.press_key(key)
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, action: KeypadAction) {
        let id = self
            .keypad
            .find_button_by_action(action)
            .map(|btn| btn.id.clone());
        match id {
            Some(id) => {
                // every keypad button is registered on the page
                let _ = self.click(&id);
            }
            None => {
                self.binding.press(action);
            }
        }
    }

    fn main_text(&self) -> String {
        self.dom()
            .text_of(CURRENT_OPERAND_ATTR)
            .unwrap_or_default()
            .to_string()
    }

    fn secondary_text(&self) -> String {
        self.dom()
            .text_of(PREVIOUS_OPERAND_ATTR)
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use crate::driver::run_all_scenarios;

    #[test]
    fn test_dom_driver_new() {
        let driver = DomDriver::new();
        assert!(driver.main_text().is_empty());
        assert!(driver.secondary_text().is_empty());
    }

    #[test]
    fn test_click_records_event_and_updates_page() {
        let mut driver = DomDriver::new();
        driver.click("btn-7").unwrap();
        assert_eq!(driver.dom().event_history(), &[DomEvent::click("btn-7")]);
        assert_eq!(driver.dom().get_element_text("current-operand"), Some("7"));
    }

    #[test]
    fn test_click_unbound_element() {
        let mut driver = DomDriver::new();
        assert_eq!(
            driver.click("current-operand"),
            Err(CalcError::UnknownKey("current-operand".into()))
        );
        assert_eq!(
            driver.click("nope"),
            Err(CalcError::UnknownKey("nope".into()))
        );
    }

    #[test]
    fn test_press_routes_through_buttons() {
        let mut driver = DomDriver::new();
        driver.press(KeypadAction::Digit(2));
        driver.press(KeypadAction::Operator(Operator::Multiply));
        assert_eq!(
            driver.dom().event_history(),
            &[DomEvent::click("btn-2"), DomEvent::click("btn-multiply")]
        );
        assert_eq!(driver.secondary_text(), "2 ×");
    }

    #[test]
    fn test_key_down() {
        let mut driver = DomDriver::new();
        driver.key_down("9").unwrap();
        driver.key_down("Backspace").unwrap();
        driver.key_down("4").unwrap();
        assert_eq!(driver.main_text(), "4");
        assert!(driver.key_down("Tab").is_err());
    }

    #[test]
    fn test_with_format() {
        let mut driver = DomDriver::with_format(NumberFormat::for_locale("de-CH").unwrap());
        driver.press_sequence("12345").unwrap();
        assert_eq!(driver.main_text(), "12'345");
    }

    #[test]
    fn test_all_scenarios() {
        let mut driver = DomDriver::new();
        run_all_scenarios(&mut driver);
    }
}
