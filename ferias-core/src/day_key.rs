//! Calendar day and month keys.
//!
//! A `DayKey` is the `YYYY-MM-DD` string a calendar widget is keyed by; a
//! `MonthKey` is the `YYYY-MM` prefix used to pick a month. Both wrap plain
//! calendar dates: no time of day, no time zone. The only place a clock is
//! read is `Clock::today`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FeriasError, FeriasResult};

/// A single calendar day, displayed as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        DayKey(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.0)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = FeriasError;

    fn from_str(s: &str) -> FeriasResult<Self> {
        parse_date(s).map(DayKey)
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> FeriasResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FeriasError::InvalidDate(s.to_string()))
}

/// A calendar month, displayed as `YYYY-MM`.
///
/// Stored as the first day of the month so every key is a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        MonthKey(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days().last().unwrap_or(self.0)
    }

    /// Every day of the month, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.0.month();
        self.0.iter_days().take_while(move |d| d.month() == month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        MonthKey::of(date) == *self
    }

    /// The previous month, if representable.
    pub fn prev(&self) -> Option<Self> {
        self.0.pred_opt().map(MonthKey::of)
    }

    /// The following month, if representable.
    pub fn next(&self) -> Option<Self> {
        self.last_day().succ_opt().map(MonthKey::of)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl FromStr for MonthKey {
    type Err = FeriasError;

    fn from_str(s: &str) -> FeriasResult<Self> {
        let trimmed = s.trim();
        // chrono cannot parse a date without a day, so pin it to the 1st
        if trimmed.len() != 7 {
            return Err(FeriasError::InvalidMonth(s.to_string()));
        }
        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map(MonthKey)
            .map_err(|_| FeriasError::InvalidMonth(s.to_string()))
    }
}

/// Which clock decides what "today" is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clock {
    /// Calendar day of the current UTC instant.
    #[default]
    Utc,
    /// Calendar day on the machine's local clock.
    Local,
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::Utc => Utc::now().date_naive(),
            Clock::Local => Local::now().date_naive(),
        }
    }

    pub fn current_month(&self) -> MonthKey {
        MonthKey::of(self.today())
    }
}
