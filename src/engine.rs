use tracing::{debug, trace};

use crate::error::ClipboardError;
use crate::format::{self, MAX_FRACTION_DIGITS};
use crate::key::KeyEvent;
use crate::traits::Clipboard;
use crate::types::{Operator, Token};

/// Limits and display rules applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum characters in the edit buffer.
    pub max_input_len: usize,
    /// Decimal places results are rounded to, at most [`MAX_FRACTION_DIGITS`].
    pub round_decimals: usize,
    /// Results printing longer than this switch to exponential notation.
    pub max_result_len: usize,
    /// Fractional mantissa digits used in exponential notation, at most
    /// [`MAX_FRACTION_DIGITS`].
    pub exponent_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: 9,
            round_decimals: 8,
            max_result_len: 10,
            exponent_digits: 4,
        }
    }
}

/// A committed operand: its value and the text it is displayed with.
#[derive(Debug, Clone, PartialEq)]
struct Operand {
    value: f64,
    text: String,
}

impl Operand {
    fn from_text(text: &str) -> Option<Self> {
        format::parse(text).map(|value| Operand {
            value,
            text: text.to_string(),
        })
    }

    fn zero() -> Self {
        Operand {
            value: 0.0,
            text: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    left: Option<Operand>,
    right: String,
    operator: Option<Operator>,
    // Operator of the last compute, reused by a bare `=`.
    last_operator: Option<Operator>,
    awaiting_reset: bool,
    previous: String,
    current: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSnapshot {
    pub previous: String,
    pub current: String,
    pub left: Option<f64>,
    pub right: String,
    pub operator: Option<Operator>,
    pub awaiting_reset: bool,
}

#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.config.max_input_len = len;
        self
    }

    pub fn round_decimals(mut self, places: usize) -> Self {
        self.config.round_decimals = places.min(MAX_FRACTION_DIGITS);
        self
    }

    pub fn max_result_len(mut self, len: usize) -> Self {
        self.config.max_result_len = len;
        self
    }

    pub fn exponent_digits(mut self, digits: usize) -> Self {
        self.config.exponent_digits = digits.min(MAX_FRACTION_DIGITS);
        self
    }

    pub fn config(self, config: EngineConfig) -> Self {
        Self { config }
            .round_decimals(config.round_decimals)
            .exponent_digits(config.exponent_digits)
    }

    pub fn build(self) -> Engine {
        Engine {
            config: self.config,
            left: None,
            right: String::new(),
            operator: None,
            last_operator: None,
            awaiting_reset: false,
            previous: String::new(),
            current: "0".to_string(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The upper display line, e.g. `"5 +"` or `"5 + 3 ="`.
    pub fn previous_display(&self) -> &str {
        &self.previous
    }

    /// The lower display line: the number being typed or the last result.
    pub fn current_display(&self) -> &str {
        &self.current
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            previous: self.previous.clone(),
            current: self.current.clone(),
            left: self.left.as_ref().map(|op| op.value),
            right: self.right.clone(),
            operator: self.operator,
            awaiting_reset: self.awaiting_reset,
        }
    }

    /// Classifies a button label and processes it. Unknown labels are ignored.
    pub fn process_str(&mut self, raw: &str) {
        match Token::classify(raw) {
            Some(token) => self.process_input(token),
            None => debug!(input = raw, "ignoring unknown token"),
        }
    }

    /// Processes a key press. Keys without a calculator meaning are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.to_token() {
            Some(token) => self.process_input(token),
            None => trace!(?key, "key has no calculator binding"),
        }
    }

    pub fn process_input(&mut self, token: Token) {
        trace!(?token, "processing input");
        match token {
            Token::Digit(ch) => self.on_digit(ch),
            Token::Operator(op) => self.on_operator(op),
            Token::Clear => self.clear(),
            Token::SignToggle => self.toggle_sign(),
            Token::Percent => self.percent(),
            Token::Delete => self.delete(),
            Token::Compute => self.compute(),
        }
    }

    /// Writes the current display line to `clipboard`.
    pub fn copy_current<C: Clipboard + ?Sized>(
        &self,
        clipboard: &mut C,
    ) -> Result<(), ClipboardError> {
        clipboard.set(self.current.clone())
    }

    fn on_digit(&mut self, ch: char) {
        if !(ch.is_ascii_digit() || ch == '.') {
            debug!(%ch, "not a digit");
            return;
        }

        // Typing right after `=` starts a new calculation.
        if self.awaiting_reset {
            self.clear();
        }

        if self.right.len() >= self.config.max_input_len {
            debug!(buffer = %self.right, "input buffer full");
            return;
        }

        match ch {
            '.' if self.right.is_empty() => self.right.push_str("0."),
            '.' if self.right.contains('.') => {
                debug!("second decimal point rejected");
                return;
            }
            '0' if self.right == "0" => return,
            _ => self.right.push(ch),
        }

        self.current = self.right.clone();
    }

    fn on_operator(&mut self, op: Operator) {
        if self.operator.is_some() {
            // Chained operator: swap it, the pending expression is not evaluated.
            self.right.clear();
        } else if !self.right.is_empty() || self.left.is_none() {
            let committed = if self.right.is_empty() {
                Operand::zero()
            } else {
                Operand::from_text(&self.right).unwrap_or_else(Operand::zero)
            };
            self.left = Some(committed);
            self.right.clear();
        }
        // Otherwise the buffer is empty after `=` and the result stays on the left.

        self.operator = Some(op);
        self.awaiting_reset = false;
        let left = self.left.as_ref().map_or("0", |l| l.text.as_str());
        self.previous = format!("{left} {op}");
    }

    /// Resets the engine to its initial state.
    pub fn clear(&mut self) {
        self.left = None;
        self.right.clear();
        self.operator = None;
        self.last_operator = None;
        self.awaiting_reset = false;
        self.previous.clear();
        self.current = "0".to_string();
    }

    fn toggle_sign(&mut self) {
        if self.right.is_empty() {
            match &self.left {
                Some(left) => self.right = left.text.clone(),
                None => return,
            }
        }

        self.right = match self.right.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.right),
        };
        self.show_buffer();
    }

    fn percent(&mut self) {
        if self.right.is_empty() {
            return;
        }
        // A lone `-` reads as NaN.
        let value = format::parse(&self.right).unwrap_or(f64::NAN);
        self.right = format::to_string(value / 100.0);
        self.current = self.right.clone();
    }

    fn delete(&mut self) {
        self.right.pop();
        self.show_buffer();
    }

    /// Shows the edit buffer, or `0` once it is empty.
    fn show_buffer(&mut self) {
        self.current = if self.right.is_empty() {
            "0".to_string()
        } else {
            self.right.clone()
        };
    }

    fn compute(&mut self) {
        let Some(left) = self.left.clone().filter(|l| !l.value.is_nan()) else {
            debug!("nothing to compute");
            return;
        };
        let Some(op) = self.operator.or(self.last_operator) else {
            debug!("no operator to apply");
            return;
        };
        let right = Operand::from_text(&self.right).unwrap_or_else(|| left.clone());

        let raw = op.apply(left.value, right.value);
        let text = self.format_result(raw);
        debug!(lhs = left.value, %op, rhs = right.value, result = %text, "computed");

        self.previous = format!("{} {op} {} =", left.text, right.text);
        self.current = text.clone();
        self.left = Some(Operand {
            value: format::parse(&text).unwrap_or(raw),
            text,
        });
        self.right.clear();
        self.operator = None;
        self.last_operator = Some(op);
        self.awaiting_reset = true;
    }

    fn format_result(&self, value: f64) -> String {
        let rounded = format::round_to(value, self.config.round_decimals);
        let text = format::to_string(rounded);
        if text.len() > self.config.max_result_len {
            format::to_exponential(rounded, self.config.exponent_digits)
        } else {
            text
        }
    }
}
