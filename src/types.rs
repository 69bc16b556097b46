use std::fmt;
use std::str::FromStr;

use crate::error::ParseTokenError;

/// One of the four arithmetic operators on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The glyph shown on the button and in the "previous" display line.
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
            Operator::Divide => "÷",
        }
    }

    /// Looks up an operator by its canonical glyph.
    pub fn from_glyph(glyph: &str) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.glyph() == glyph)
    }

    /// Applies the operator with plain IEEE-754 semantics.
    ///
    /// Division by zero is not trapped: it yields an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A discrete input accepted by the [`Engine`](crate::Engine).
///
/// Hosts either build tokens directly or parse the button labels
/// (`"7"`, `"."`, `"÷"`, `"AC"`, `"+/-"`, `"%"`, `"del"`, `"="`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    /// An arithmetic operator.
    Operator(Operator),
    /// Reset everything (`AC`).
    Clear,
    /// Flip the sign of the value being edited (`+/-`).
    SignToggle,
    /// Divide the value being edited by 100 (`%`).
    Percent,
    /// Drop the last typed character (`del`).
    Delete,
    /// Evaluate the pending expression (`=`).
    Compute,
}

impl Token {
    /// Classifies a raw button label, returning `None` for anything unknown.
    pub fn classify(raw: &str) -> Option<Token> {
        let mut chars = raw.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && (ch.is_ascii_digit() || ch == '.')
        {
            return Some(Token::Digit(ch));
        }
        if let Some(op) = Operator::from_glyph(raw) {
            return Some(Token::Operator(op));
        }
        match raw {
            "AC" => Some(Token::Clear),
            "+/-" => Some(Token::SignToggle),
            "%" => Some(Token::Percent),
            "del" => Some(Token::Delete),
            "=" => Some(Token::Compute),
            _ => None,
        }
    }

    /// The label this token is written as on the keypad.
    pub fn label(&self) -> String {
        match self {
            Token::Digit(ch) => ch.to_string(),
            Token::Operator(op) => op.glyph().to_string(),
            Token::Clear => "AC".to_string(),
            Token::SignToggle => "+/-".to_string(),
            Token::Percent => "%".to_string(),
            Token::Delete => "del".to_string(),
            Token::Compute => "=".to_string(),
        }
    }
}

impl FromStr for Token {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::classify(s).ok_or_else(|| ParseTokenError(s.to_string()))
    }
}
