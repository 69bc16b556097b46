use crate::types::{Operator, Token};

/// Key codes representing individual keys on the keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key, as produced with the current modifiers applied
    /// (`'+'` rather than shift+`'='`).
    Char(char),
    /// The Escape key, clears the calculator.
    Esc,
    /// The Enter/Return key, computes the result.
    Enter,
    /// The Backspace key, deletes the last typed character.
    Backspace,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self { code, mods }
    }

    /// A character key with no modifiers.
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), Modifiers::empty())
    }

    /// Translates the key press into a calculator token.
    ///
    /// Chords with Ctrl, Alt or Meta are left to the host (quit, copy, ...)
    /// and map to `None`. Shift is ignored since it is already folded into
    /// the character.
    pub fn to_token(&self) -> Option<Token> {
        if self
            .mods
            .intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::META)
        {
            return None;
        }
        match self.code {
            KeyCode::Enter | KeyCode::Char('=') => Some(Token::Compute),
            KeyCode::Esc => Some(Token::Clear),
            KeyCode::Backspace => Some(Token::Delete),
            KeyCode::Char('*') => Some(Token::Operator(Operator::Multiply)),
            KeyCode::Char('/') => Some(Token::Operator(Operator::Divide)),
            KeyCode::Char('+') => Some(Token::Operator(Operator::Add)),
            KeyCode::Char('-') => Some(Token::Operator(Operator::Subtract)),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => Some(Token::Digit(c)),
            KeyCode::Char(_) => None,
        }
    }
}
