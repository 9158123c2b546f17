//! Tally Calculator - keypad calculator engine
//!
//! An immediate-execution calculator: operands are typed digit by digit,
//! operators chain left to right, and the display shows the current value
//! alongside the pending expression with thousands grouping.
//!
//! # Testing Principles
//!
//! - **Error prevention**: the pending operator and its left operand live in one value
//! - **Balanced testing**: the same scenarios run against every driver
//! - **Visual feedback**: every input renders a fresh display frame
//!
//! # Example
//!
//! ```rust
//! use tally_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for c in "1234".chars() {
//!     calc.append_char(c).unwrap();
//! }
//! calc.choose_operator(Operator::Multiply);
//! calc.append_char('2').unwrap();
//! assert_eq!(calc.render(), DisplayText::new("2", "1,234 ×"));
//!
//! calc.evaluate();
//! assert_eq!(calc.render().main, "2,468");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod binding;
pub mod core;
pub mod driver;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::binding::{
        DisplaySink, DomDriver, Keypad, KeypadAction, MockDom, RecordingSink, UiBinding,
    };
    pub use crate::core::{
        format_display, reduce, CalcError, CalcEvent, CalcResult, Calculator, CalculatorState,
        DisplayText, NumberFormat, Operator, Phase, Token,
    };
    pub use crate::driver::CalculatorDriver;
}
