//! Keypad layout and input mapping

use super::dom::DomElement;
use crate::core::{CalcError, CalcEvent, CalcResult, Operator, Token};

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append the decimal point
    Point,
    /// Choose an operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Remove the last typed character
    Delete,
    /// Reset everything
    AllClear,
}

impl KeypadAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => Token::POINT.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }

    /// The `data-*` attribute marking a button bound to this action
    #[must_use]
    pub const fn data_attribute(&self) -> &'static str {
        match self {
            Self::Digit(_) | Self::Point => "data-number",
            Self::Operator(_) => "data-operation",
            Self::Equals => "data-equals",
            Self::Delete => "data-delete",
            Self::AllClear => "data-all-clear",
        }
    }

    /// Translates the action into an engine event; `None` for an
    /// out-of-range digit
    #[must_use]
    pub fn to_event(&self) -> Option<CalcEvent> {
        match self {
            Self::Digit(d) if *d <= 9 => Some(CalcEvent::Digit(Token::Digit(*d))),
            Self::Digit(_) => None,
            Self::Point => Some(CalcEvent::Digit(Token::Point)),
            Self::Operator(op) => Some(CalcEvent::Operator(*op)),
            Self::Equals => Some(CalcEvent::Equals),
            Self::Delete => Some(CalcEvent::Delete),
            Self::AllClear => Some(CalcEvent::Clear),
        }
    }

    /// Maps one character of a key script.
    ///
    /// Digits and `.` append, operator symbols choose, `=` evaluates, `<`
    /// deletes and `c`/`C` clears.
    pub fn from_script_char(c: char) -> CalcResult<Self> {
        if let Ok(token) = Token::try_from(c) {
            return Ok(match token {
                Token::Digit(d) => Self::Digit(d),
                Token::Point => Self::Point,
            });
        }
        match c {
            '=' => Ok(Self::Equals),
            '<' => Ok(Self::Delete),
            'c' | 'C' => Ok(Self::AllClear),
            _ => {
                let mut buf = [0u8; 4];
                c.encode_utf8(&mut buf)
                    .parse::<Operator>()
                    .map(Self::Operator)
                    .map_err(|_| CalcError::UnknownKey(c.to_string()))
            }
        }
    }

    /// Maps a keyboard key name (as reported by a browser or terminal)
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Equals),
            "Backspace" | "Delete" => Some(Self::Delete),
            "Escape" => Some(Self::AllClear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_script_char(c).ok(),
                    _ => None,
                }
            }
        }
    }

    /// Reads the action bound to a button through its `data-*` attributes
    /// and label, the way the page markup declares them
    #[must_use]
    pub fn from_button(element: &DomElement) -> Option<Self> {
        let label = element.text_content.trim();
        if element.has_attr("data-number") {
            let mut chars = label.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => match Token::try_from(c).ok()? {
                    Token::Digit(d) => Some(Self::Digit(d)),
                    Token::Point => Some(Self::Point),
                },
                _ => None,
            };
        }
        if element.has_attr("data-operation") {
            return label.parse().ok().map(Self::Operator);
        }
        if element.has_attr("data-equals") {
            Some(Self::Equals)
        } else if element.has_attr("data-delete") {
            Some(Self::Delete)
        } else if element.has_attr("data-all-clear") {
            Some(Self::AllClear)
        } else {
            None
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns spanned
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-column button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Point => "btn-point".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op.name()),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Delete => "btn-delete".to_string(),
            KeypadAction::AllClear => "btn-all-clear".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
            span: 1,
        }
    }

    /// Widens the button across `span` columns
    #[must_use]
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Builds the `<button>` element for this definition
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut element = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.action.label())
            .with_attr(self.action.data_attribute(), "")
            .with_class("keypad-btn");
        if self.span > 1 {
            element = element.with_class(&format!("span-{}", self.span));
        }
        element
    }
}

/// Keypad layout definition
///
/// ```text
/// [  AC   ] [DEL] [ ÷ ]
/// [ 1 ] [ 2 ] [ 3 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 7 ] [ 8 ] [ 9 ] [ − ]
/// [ . ] [ 0 ] [   =   ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{AllClear, Delete, Digit, Equals, Point};
        let op = KeypadAction::Operator;

        let buttons = vec![
            KeypadButtonDef::new(AllClear, 0, 0).with_span(2),
            KeypadButtonDef::new(Delete, 0, 2),
            KeypadButtonDef::new(op(Operator::Divide), 0, 3),
            KeypadButtonDef::new(Digit(1), 1, 0),
            KeypadButtonDef::new(Digit(2), 1, 1),
            KeypadButtonDef::new(Digit(3), 1, 2),
            KeypadButtonDef::new(op(Operator::Multiply), 1, 3),
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(op(Operator::Add), 2, 3),
            KeypadButtonDef::new(Digit(7), 3, 0),
            KeypadButtonDef::new(Digit(8), 3, 1),
            KeypadButtonDef::new(Digit(9), 3, 2),
            KeypadButtonDef::new(op(Operator::Subtract), 3, 3),
            KeypadButtonDef::new(Point, 4, 0),
            KeypadButtonDef::new(Digit(0), 4, 1),
            KeypadButtonDef::new(Equals, 4, 2).with_span(2),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButtonDef> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button bound to an action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Returns the action for a clicked element ID
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id("calc-keypad").with_class("keypad"),
            |keypad, btn| keypad.with_child(btn.to_element()),
        )
    }
}
