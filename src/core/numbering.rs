use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::BijakError;

/// Sequential document numbers within an Indian financial year.
///
/// Generates numbers in the format `{prefix}{fy}/{sequential}`,
/// e.g. "INV/2024-25/001", "INV/2024-25/002", etc. The financial year
/// runs April to March unless another start month is configured, and the
/// counter restarts at 1 in each new financial year.
///
/// The sequence serializes with its counter so it can be persisted between
/// runs; omitted fields take the defaults of [`DocumentNumberSequence::new`].
/// A loaded sequence is checked like one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SequenceConfig")]
pub struct DocumentNumberSequence {
    prefix: String,
    fy_start_year: i32,
    start_month: u32,
    next_number: u64,
    zero_pad: usize,
}

#[derive(Deserialize)]
struct SequenceConfig {
    prefix: String,
    fy_start_year: i32,
    #[serde(default = "default_start_month")]
    start_month: u32,
    #[serde(default = "default_next_number")]
    next_number: u64,
    #[serde(default = "default_zero_pad")]
    zero_pad: usize,
}

impl TryFrom<SequenceConfig> for DocumentNumberSequence {
    type Error = BijakError;

    fn try_from(config: SequenceConfig) -> Result<Self, Self::Error> {
        if config.next_number == 0 {
            return Err(BijakError::Numbering(
                "next number must be at least 1".into(),
            ));
        }
        Self::starting_at(config.prefix, config.fy_start_year, config.next_number)
            .with_padding(config.zero_pad)
            .with_start_month(config.start_month)
    }
}

fn default_start_month() -> u32 {
    4
}

fn default_next_number() -> u64 {
    1
}

fn default_zero_pad() -> usize {
    3
}

impl DocumentNumberSequence {
    /// Create a sequence for the financial year beginning in `fy_start_year`.
    pub fn new(prefix: impl Into<String>, fy_start_year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            fy_start_year,
            start_month: default_start_month(),
            next_number: default_next_number(),
            zero_pad: default_zero_pad(),
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, fy_start_year: i32, next_number: u64) -> Self {
        Self {
            next_number,
            ..Self::new(prefix, fy_start_year)
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Set the month (1-12) the financial year starts in (default: April).
    pub fn with_start_month(mut self, month: u32) -> Result<Self, BijakError> {
        if !(1..=12).contains(&month) {
            return Err(BijakError::Numbering(format!(
                "financial year start month {month} must be 1-12"
            )));
        }
        self.start_month = month;
        Ok(self)
    }

    /// Generate the next document number.
    ///
    /// Fails without consuming anything once the counter is exhausted.
    pub fn next_number(&mut self) -> Result<String, BijakError> {
        let following = self.next_number.checked_add(1).ok_or_else(|| {
            BijakError::Numbering(format!(
                "sequence {} exhausted in financial year {}",
                self.prefix,
                self.financial_year()
            ))
        })?;
        let number = self.format(self.next_number);
        self.next_number = following;
        Ok(number)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    /// Label of the current financial year, e.g. "2024-25".
    pub fn financial_year(&self) -> String {
        fy_label(self.fy_start_year)
    }

    /// Calendar year the current financial year starts in.
    pub fn fy_start_year(&self) -> i32 {
        self.fy_start_year
    }

    /// Get the next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Financial year (by start year) that `date` falls in.
    pub fn financial_year_of(&self, date: NaiveDate) -> i32 {
        if date.month() >= self.start_month {
            date.year()
        } else {
            date.year() - 1
        }
    }

    /// Move to a later financial year, resetting the counter to 1.
    pub fn advance_to(&mut self, fy_start_year: i32) -> Result<(), BijakError> {
        if fy_start_year <= self.fy_start_year {
            return Err(BijakError::Numbering(format!(
                "financial year {} must be later than current year {}",
                fy_label(fy_start_year),
                self.financial_year()
            )));
        }
        self.fy_start_year = fy_start_year;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance if `date` is in a later financial year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let fy = self.financial_year_of(date);
        if fy > self.fy_start_year {
            debug!(
                prefix = %self.prefix,
                from = %self.financial_year(),
                to = %fy_label(fy),
                issued = self.next_number.saturating_sub(1),
                "document numbering rolled over to new financial year"
            );
            self.fy_start_year = fy;
            self.next_number = 1;
            true
        } else {
            false
        }
    }

    fn format(&self, number: u64) -> String {
        format!(
            "{}{}/{:0>width$}",
            self.prefix,
            self.financial_year(),
            number,
            width = self.zero_pad
        )
    }
}

fn fy_label(start_year: i32) -> String {
    format!("{}-{:02}", start_year, (start_year + 1).rem_euclid(100))
}
