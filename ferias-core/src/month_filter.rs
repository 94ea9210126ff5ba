//! Selecting the vacations shown for a month.

use serde::{Deserialize, Serialize};

use crate::day_key::MonthKey;
use crate::record::VacationRecord;

/// How a record is matched against a month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// The start or return date lies in the month.
    ///
    /// A vacation that begins before the month and ends after it is not
    /// selected, even though it covers every day of the month.
    #[default]
    Endpoint,
    /// Any day of the vacation lies in the month.
    Overlap,
}

impl FilterMode {
    pub fn matches(&self, record: &VacationRecord, month: MonthKey) -> bool {
        match self {
            FilterMode::Endpoint => {
                month.contains(record.start_date) || month.contains(record.return_date)
            }
            FilterMode::Overlap => {
                record.start_date <= month.last_day() && record.return_date >= month.first_day()
            }
        }
    }
}

/// The records selected for `month`, in their original order.
pub fn for_month(
    records: &[VacationRecord],
    month: MonthKey,
    mode: FilterMode,
) -> Vec<&VacationRecord> {
    records.iter().filter(|r| mode.matches(r, month)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, start: &str, end: &str) -> VacationRecord {
        VacationRecord {
            id: id.into(),
            employee_name: format!("employee {id}"),
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            return_date: NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
        }
    }

    fn march() -> MonthKey {
        "2024-03".parse().unwrap()
    }

    fn ids(selected: Vec<&VacationRecord>) -> Vec<&str> {
        selected.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_endpoint_includes_start_in_month() {
        let records = vec![record("1", "2024-03-28", "2024-04-02")];
        assert_eq!(ids(for_month(&records, march(), FilterMode::Endpoint)), vec!["1"]);
    }

    #[test]
    fn test_endpoint_includes_return_in_month() {
        let records = vec![record("1", "2024-02-25", "2024-03-04")];
        assert_eq!(ids(for_month(&records, march(), FilterMode::Endpoint)), vec!["1"]);
    }

    #[test]
    fn test_endpoint_excludes_other_month() {
        let records = vec![record("1", "2024-02-20", "2024-02-25")];
        assert!(for_month(&records, march(), FilterMode::Endpoint).is_empty());
    }

    #[test]
    fn test_endpoint_excludes_vacation_spanning_whole_month() {
        let records = vec![record("1", "2024-02-15", "2024-04-10")];
        assert!(for_month(&records, march(), FilterMode::Endpoint).is_empty());
    }

    #[test]
    fn test_overlap_includes_vacation_spanning_whole_month() {
        let records = vec![
            record("1", "2024-02-15", "2024-04-10"),
            record("2", "2024-02-20", "2024-02-29"),
            record("3", "2024-04-01", "2024-04-03"),
        ];
        assert_eq!(ids(for_month(&records, march(), FilterMode::Overlap)), vec!["1"]);
    }

    #[test]
    fn test_for_month_preserves_order() {
        let records = vec![
            record("b", "2024-03-20", "2024-03-22"),
            record("x", "2024-01-01", "2024-01-02"),
            record("a", "2024-03-01", "2024-03-02"),
        ];
        assert_eq!(
            ids(for_month(&records, march(), FilterMode::Endpoint)),
            vec!["b", "a"]
        );
        assert_eq!(records.len(), 3);
    }
}
