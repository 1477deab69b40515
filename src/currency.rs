// src/currency.rs

//! Currency display formatting
//!
//! Prices are whole numbers in the smallest currency unit. For display they
//! are grouped in thousands and prefixed with a symbol (`$1,500,000`); the
//! reverse direction strips both before converting back to an integer.
//! The format is passed explicitly rather than read from process locale.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Symbol and digit grouping used to render prices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            grouping_separator: default_grouping_separator(),
        }
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_grouping_separator() -> char {
    ','
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, grouping_separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            grouping_separator,
        }
    }

    /// Render an amount, e.g. `1500000` -> `$1,500,000`
    pub fn format(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(ch);
        }

        if amount < 0 {
            format!("-{}{}", self.symbol, grouped)
        } else {
            format!("{}{}", self.symbol, grouped)
        }
    }

    /// Parse a displayed or typed amount back to an integer
    ///
    /// Accepts plain digits as well as the output of [`format`](Self::format).
    pub fn parse(&self, text: &str) -> Result<i64> {
        let trimmed = text.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix(self.symbol.as_str()).unwrap_or(rest);
        let cleaned: String = rest
            .chars()
            .filter(|c| *c != self.grouping_separator)
            .collect();

        let not_whole = || Error::ParseError(format!("'{}' is not a whole amount", text));

        let digits = cleaned.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_whole());
        }

        let value: i64 = digits.parse().map_err(|_| not_whole())?;
        if negative {
            value.checked_neg().ok_or_else(not_whole)
        } else {
            Ok(value)
        }
    }
}
