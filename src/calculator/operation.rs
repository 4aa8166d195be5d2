//! Binary operations and digit keys.

use std::fmt;

/// A pending binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol shown on the button and next to the previous operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }

    /// Accepts both `/` and `÷` for division.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' | '÷' => Some(Operation::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A key that can be appended to an operand: `0`-`9` or `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');

    /// Numeral key `n`, taken modulo ten.
    pub const fn numeral(n: u8) -> Self {
        Digit((b'0' + n % 10) as char)
    }

    pub fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_digit() || ch == '.' {
            Some(Digit(ch))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }

    pub fn is_zero(self) -> bool {
        self.0 == '0'
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
