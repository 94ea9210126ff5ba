//! User-facing notifications.
//!
//! Every message here is fixed text. Error details go to the log, not to the
//! user.

use std::fmt;

use crate::error::{FailureKind, FeriasError};
use crate::record::VacationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, message: impl Into<String>) -> Self {
        Notice {
            kind,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn failure(kind: FailureKind) -> Self {
        match kind {
            FailureKind::LoadFailure => {
                Notice::new(NoticeKind::Error, "Error", "Could not load vacations.")
            }
            FailureKind::SubmitFailure => {
                Notice::new(NoticeKind::Error, "Error", "Could not add the vacation.")
            }
        }
    }

    /// Shown when the form is rejected before anything is sent.
    pub fn incomplete_form() -> Self {
        Notice::new(NoticeKind::Error, "Error", "Please fill in all fields.")
    }

    pub fn invalid_range() -> Self {
        Notice::new(
            NoticeKind::Error,
            "Error",
            "The return date cannot be before the start date.",
        )
    }

    /// The notice for a failed `add`: input problems get their own text,
    /// everything else is a generic submit failure.
    pub fn for_submit_error(err: &FeriasError) -> Self {
        match err {
            FeriasError::ReversedRange { .. } => Notice::invalid_range(),
            e if e.is_validation() => Notice::incomplete_form(),
            _ => Notice::failure(FailureKind::SubmitFailure),
        }
    }

    pub fn added() -> Self {
        Notice::new(NoticeKind::Success, "Success", "Vacation added successfully!")
    }

    /// Who is on vacation on a given day.
    pub fn day(records: &[&VacationRecord]) -> Self {
        if records.is_empty() {
            return Notice::new(NoticeKind::Info, "No vacations", "No vacations on this date.");
        }
        let lines: Vec<String> = records
            .iter()
            .map(|r| format!("{}: {} - {}", r.employee_name, r.start_date, r.return_date))
            .collect();
        Notice::new(NoticeKind::Info, "Vacations", lines.join("\n"))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_day_notice_lists_records() {
        let ana = VacationRecord {
            id: "1".into(),
            employee_name: "Ana".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
        };
        let bruno = VacationRecord {
            id: "2".into(),
            employee_name: "Bruno".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
        };

        let notice = Notice::day(&[&ana, &bruno]);
        assert_eq!(notice.title, "Vacations");
        assert_eq!(
            notice.message,
            "Ana: 2024-05-01 - 2024-05-03\nBruno: 2024-05-02 - 2024-05-09"
        );
    }

    #[test]
    fn test_day_notice_empty() {
        let notice = Notice::day(&[]);
        assert_eq!(notice.title, "No vacations");
    }

    #[test]
    fn test_submit_error_notices() {
        assert_eq!(
            Notice::for_submit_error(&FeriasError::MissingField("employee name")),
            Notice::incomplete_form()
        );
        let reversed = FeriasError::ReversedRange {
            start_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(Notice::for_submit_error(&reversed), Notice::invalid_range());
        let server = FeriasError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(
            Notice::for_submit_error(&server),
            Notice::failure(FailureKind::SubmitFailure)
        );
    }

    #[test]
    fn test_failure_messages_are_fixed() {
        assert_eq!(
            Notice::failure(FailureKind::LoadFailure).message,
            "Could not load vacations."
        );
        assert_eq!(
            Notice::failure(FailureKind::SubmitFailure).message,
            "Could not add the vacation."
        );
    }
}
