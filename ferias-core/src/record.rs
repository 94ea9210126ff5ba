//! Vacation records as stored by the vacation service.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::date_range::{self, DayRange};
use crate::day_key::DayKey;

/// One employee's vacation, as returned by the service.
///
/// `return_date` is the day the employee is back, and it is counted as a
/// vacation day when marking the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRecord {
    /// Assigned by the service; never generated locally.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(rename = "name")]
    pub employee_name: String,
    #[serde(deserialize_with = "de_wire_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "de_wire_date")]
    pub return_date: NaiveDate,
}

impl VacationRecord {
    /// Whether `day` falls within start..=return.
    pub fn contains(&self, day: DayKey) -> bool {
        self.start_date <= day.date() && day.date() <= self.return_date
    }

    /// The calendar days this vacation covers.
    pub fn days(&self) -> DayRange {
        date_range::expand(self.start_date, self.return_date)
    }
}

/// Body of a create request. The service answers with a full `VacationRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVacation {
    #[serde(rename = "name")]
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub return_date: NaiveDate,
}

// =============================================================================
// Wire tolerance
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match WireId::deserialize(deserializer)? {
        WireId::Text(s) => s,
        WireId::Number(n) => n.to_string(),
    })
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
///
/// Timestamps are reduced to the calendar date of their UTC instant.
fn de_wire_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_wire_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid date '{raw}', expected YYYY-MM-DD or an RFC 3339 timestamp"
        ))
    })
}

fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}
