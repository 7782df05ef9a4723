// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid transaction type '{0}', expected 'income' or 'expense'")]
    InvalidKind(String),
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(ModelError::InvalidKind(other.to_string())),
        }
    }
}

/// A single income or expense record. Dates are plain calendar dates
/// (`NaiveDate`, `YYYY-MM-DD`); there is no time-of-day or timezone
/// component anywhere in the data model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    /// Sub-label under the category; meaningful only for expenses.
    pub item: String,
    pub note: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create payload. The store assigns `id` and both timestamps.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub item: String,
    pub note: Option<String>,
}

/// A validated calendar month (one-indexed, 1 = January). Out-of-range
/// month numbers are rejected at construction, so every `Month` held by
/// a caller names a real month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, ModelError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ModelError::InvalidMonth(format!("{}-{}", year, month)));
        }
        Ok(Month { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        let last = match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if NaiveDate::from_ymd_opt(self.year, 2, 29).is_some() {
                    29
                } else {
                    28
                }
            }
        };
        NaiveDate::from_ymd_opt(self.year, self.month, last).unwrap()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
            .map_err(|_| ModelError::InvalidMonth(trimmed.to_string()))?;
        Ok(Month::of(date))
    }
}
