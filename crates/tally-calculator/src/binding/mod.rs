//! UI binding layer
//!
//! Front-ends translate their input into [`KeypadAction`]s or
//! [`CalcEvent`](crate::core::CalcEvent)s and hand them to a [`UiBinding`],
//! which owns the engine and writes the rendered display to an injected
//! [`DisplaySink`] after every call.

mod dom;
mod driver;
mod keypad;
mod sink;
mod ui;

pub use dom::{DomElement, DomEvent, MockDom, CURRENT_OPERAND_ATTR, PREVIOUS_OPERAND_ATTR};
pub use driver::DomDriver;
pub use keypad::{Keypad, KeypadAction, KeypadButtonDef};
pub use sink::{DisplaySink, RecordingSink};
pub use ui::UiBinding;
