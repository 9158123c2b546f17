//! Input events and the functional reducer

use serde::{Deserialize, Serialize};

use crate::core::{Calculator, CalculatorState, Operator, Token};

/// One user input, as delivered by a front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcEvent {
    /// Digit or decimal point pressed
    Digit(Token),
    /// Operator pressed
    Operator(Operator),
    /// Equals pressed
    Equals,
    /// Delete pressed
    Delete,
    /// All-clear pressed
    Clear,
}

impl From<Token> for CalcEvent {
    fn from(token: Token) -> Self {
        Self::Digit(token)
    }
}

impl From<Operator> for CalcEvent {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

/// Pure `(state, event) -> state` form of [`Calculator::dispatch`]
#[must_use]
pub fn reduce(state: CalculatorState, event: CalcEvent) -> CalculatorState {
    let mut calc = Calculator::from_state(state);
    calc.dispatch(event);
    calc.into_state()
}
