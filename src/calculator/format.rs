//! Display formatting for operands.

use crate::config::DisplayConfig;

/// Groups the integer digits of an operand while keeping whatever follows
/// the decimal point exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandFormatter {
    separator: String,
    group_size: usize,
}

impl Default for OperandFormatter {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            group_size: 3,
        }
    }
}

impl From<&DisplayConfig> for OperandFormatter {
    fn from(config: &DisplayConfig) -> Self {
        Self::new(config.group_separator.clone(), config.group_size)
    }
}

impl OperandFormatter {
    /// A `group_size` of zero is treated as one.
    pub fn new(separator: impl Into<String>, group_size: usize) -> Self {
        Self {
            separator: separator.into(),
            group_size: group_size.max(1),
        }
    }

    /// `None` stays `None`. Markers that are not numeric (`Error`, `NaN`)
    /// pass through untouched.
    pub fn format(&self, operand: Option<&str>) -> Option<String> {
        let operand = operand?;
        let (integer, decimal) = match operand.split_once('.') {
            Some((integer, decimal)) => (integer, Some(decimal)),
            None => (operand, None),
        };

        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };
        let digits_ok = digits.chars().all(|ch| ch.is_ascii_digit());
        let decimal_ok = decimal.map_or(true, |d| d.chars().all(|ch| ch.is_ascii_digit()));
        if !digits_ok || !decimal_ok || (digits.is_empty() && decimal.is_none()) {
            return Some(operand.to_string());
        }

        let mut out = String::with_capacity(operand.len() + operand.len() / self.group_size);
        out.push_str(sign);
        out.push_str(&self.group(digits));
        if let Some(decimal) = decimal {
            out.push('.');
            out.push_str(decimal);
        }
        Some(out)
    }

    fn group(&self, digits: &str) -> String {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return "0".to_string();
        }
        let len = trimmed.len();
        let mut grouped = String::with_capacity(len + len / self.group_size * self.separator.len());
        for (idx, ch) in trimmed.chars().enumerate() {
            if idx > 0 && (len - idx) % self.group_size == 0 {
                grouped.push_str(&self.separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

/// Formats with en-US grouping (`1,234,567.89`).
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    OperandFormatter::default().format(operand)
}
