use crate::error::{FragmentError, Result};
use chrono::DateTime;
use serde::Deserialize;

/// A card expiry date in any of the shapes callers hand over.
///
/// Deserializes from `[7, 23]`, `{"month": 7, "year": 2023}`, a Unix timestamp
/// or a preformatted string.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum ExpiryDate {
    Pair(u32, u32),
    Keyed { month: u32, year: u32 },
    Timestamp(i64),
    Formatted(String),
}

impl ExpiryDate {
    /// Renders the date as `MM/YYYY`.
    ///
    /// Two-digit years are taken to be in the 2000s. Timestamps are read as UTC.
    /// A formatted string that reads as a number is a timestamp; any other string
    /// is kept exactly as given.
    pub fn normalize(&self) -> Result<String> {
        match self {
            ExpiryDate::Pair(month, year) | ExpiryDate::Keyed { month, year } => {
                Ok(month_year(*month, *year))
            }
            ExpiryDate::Timestamp(seconds) => from_timestamp(*seconds),
            ExpiryDate::Formatted(text) => match numeric_seconds(text)? {
                Some(seconds) => from_timestamp(seconds),
                None => Ok(text.clone()),
            },
        }
    }
}

/// Reads `text` as a timestamp if it is a number: optional sign, digits, optional
/// fraction and exponent (`1689422400`, `-1`, `1.5e9`). Fractions of a second are
/// dropped. Returns `None` for anything else.
fn numeric_seconds(text: &str) -> Result<Option<i64>> {
    let trimmed = text.trim();
    let numeric_chars = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric_chars || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    if let Ok(seconds) = trimmed.parse::<i64>() {
        return Ok(Some(seconds));
    }
    match trimmed.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() && seconds.abs() < i64::MAX as f64 => {
            Ok(Some(seconds.trunc() as i64))
        }
        Ok(_) => Err(FragmentError::InvalidExpiryDate(format!(
            "timestamp {text} is out of range"
        ))),
        Err(_) => Ok(None),
    }
}

fn month_year(month: u32, year: u32) -> String {
    let year = if year < 100 { 2000 + year } else { year };
    format!("{month:02}/{year}")
}

fn from_timestamp(seconds: i64) -> Result<String> {
    DateTime::from_timestamp(seconds, 0)
        .map(|date| date.format("%m/%Y").to_string())
        .ok_or_else(|| {
            FragmentError::InvalidExpiryDate(format!("timestamp {seconds} is out of range"))
        })
}

impl From<(u32, u32)> for ExpiryDate {
    fn from((month, year): (u32, u32)) -> Self {
        ExpiryDate::Pair(month, year)
    }
}

impl From<i64> for ExpiryDate {
    fn from(seconds: i64) -> Self {
        ExpiryDate::Timestamp(seconds)
    }
}

impl From<&str> for ExpiryDate {
    fn from(text: &str) -> Self {
        ExpiryDate::Formatted(text.to_string())
    }
}

impl From<String> for ExpiryDate {
    fn from(text: String) -> Self {
        ExpiryDate::Formatted(text)
    }
}
