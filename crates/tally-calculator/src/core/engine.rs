//! Calculator engine: operand/operator accumulation with chained evaluation

use tracing::{debug, trace};

use crate::core::{
    parse_operand, stringify_result, CalcEvent, CalcResult, DisplayText, NumberFormat, Operator,
    Token,
};

/// Observable phase of the input state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing typed, nothing pending
    Idle,
    /// Typing the first operand
    Entering,
    /// Operator chosen, right operand not started
    OperatorPending,
    /// Operator chosen, typing the right operand
    Accumulating,
}

/// Left operand captured when an operator was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    operator: Operator,
    operand: String,
}

/// Raw calculator input state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    current: String,
    pending: Option<Pending>,
}

impl CalculatorState {
    /// The operand being typed; empty when nothing has been entered
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// The operand captured before the pending operator; empty when no
    /// operator is pending
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        self.pending.as_ref().map_or("", |p| p.operand.as_str())
    }

    /// The operator waiting to be applied
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Current phase of the state machine
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.pending.is_some(), self.current.is_empty()) {
            (false, true) => Phase::Idle,
            (false, false) => Phase::Entering,
            (true, true) => Phase::OperatorPending,
            (true, false) => Phase::Accumulating,
        }
    }
}

/// The calculator engine.
///
/// Owns its [`CalculatorState`] exclusively; callers mutate it only through
/// the operations below and read it back through [`Calculator::render`].
/// Invalid input never raises an error: an unparsable operand or a second
/// decimal point leaves the state unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Creates an idle calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing state
    #[must_use]
    pub fn from_state(state: CalculatorState) -> Self {
        Self { state }
    }

    /// Read-only view of the state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Consumes the engine, returning its state
    #[must_use]
    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// See [`CalculatorState::current_operand`]
    #[must_use]
    pub fn current_operand(&self) -> &str {
        self.state.current_operand()
    }

    /// See [`CalculatorState::previous_operand`]
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        self.state.previous_operand()
    }

    /// See [`CalculatorState::pending_operator`]
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator()
    }

    /// See [`CalculatorState::phase`]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Clears both operands and the pending operator
    pub fn reset(&mut self) {
        self.state = CalculatorState::default();
        debug!("calculator reset");
    }

    /// Removes the last character of the current operand
    pub fn delete(&mut self) {
        if self.state.current.pop().is_none() {
            trace!("delete on empty operand");
        }
    }

    /// Appends a digit or the decimal point to the current operand.
    ///
    /// A second decimal point is dropped.
    pub fn append_digit(&mut self, token: Token) {
        let Some(c) = token.as_char() else {
            trace!(?token, "out-of-range digit dropped");
            return;
        };
        if token == Token::Point && self.state.current.contains(Token::POINT) {
            trace!("duplicate decimal point dropped");
            return;
        }
        self.state.current.push(c);
    }

    /// Validates `c` as a token and appends it
    pub fn append_char(&mut self, c: char) -> CalcResult<()> {
        let token = Token::try_from(c)?;
        self.append_digit(token);
        Ok(())
    }

    /// Promotes the current operand to the left operand of `op`.
    ///
    /// Does nothing while the current operand is empty. When an operator is
    /// already pending, the pending computation is evaluated first so that
    /// `3 + 4 +` continues from `7`.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.state.current.is_empty() {
            trace!(%op, "operator ignored without operand");
            return;
        }
        if self.state.pending.is_some() {
            self.evaluate();
        }
        let operand = std::mem::take(&mut self.state.current);
        debug!(%op, operand = %operand, "operator chosen");
        self.state.pending = Some(Pending {
            operator: op,
            operand,
        });
    }

    /// Applies the pending operator to the two operands.
    ///
    /// The result replaces the current operand and the pending operator is
    /// cleared. Returns the raw result, or `None` when nothing was computed
    /// because no operator is pending or an operand does not parse.
    pub fn evaluate(&mut self) -> Option<f64> {
        let Some(pending) = self.state.pending.as_ref() else {
            trace!("evaluate without pending operator");
            return None;
        };
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&pending.operand),
            parse_operand(&self.state.current),
        ) else {
            trace!(
                previous = %pending.operand,
                current = %self.state.current,
                "evaluate skipped: operand does not parse"
            );
            return None;
        };

        let operator = pending.operator;
        let result = operator.apply(lhs, rhs);
        debug!(lhs, %operator, rhs, result, "evaluated");
        self.state.current = stringify_result(result);
        self.state.pending = None;
        Some(result)
    }

    /// Routes an input event to the matching operation
    pub fn dispatch(&mut self, event: CalcEvent) {
        match event {
            CalcEvent::Digit(token) => self.append_digit(token),
            CalcEvent::Operator(op) => self.choose_operator(op),
            CalcEvent::Equals => {
                self.evaluate();
            }
            CalcEvent::Delete => self.delete(),
            CalcEvent::Clear => self.reset(),
        }
    }

    /// Renders the display pair with English grouping
    #[must_use]
    pub fn render(&self) -> DisplayText {
        self.render_with(&NumberFormat::english())
    }

    /// Renders the display pair with the given number format
    #[must_use]
    pub fn render_with(&self, format: &NumberFormat) -> DisplayText {
        let main = format.format(&self.state.current);
        let secondary = match &self.state.pending {
            Some(pending) => format!(
                "{} {}",
                format.format(&pending.operand),
                pending.operator.symbol()
            ),
            None => String::new(),
        };
        DisplayText { main, secondary }
    }
}
