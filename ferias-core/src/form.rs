//! Input state for a new vacation before it is submitted.

use chrono::NaiveDate;

use crate::error::{FeriasError, FeriasResult};
use crate::record::NewVacation;

/// What the user has entered so far. Every field may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacationForm {
    pub employee_name: String,
    pub start_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
}

impl VacationForm {
    pub fn new(
        employee_name: impl Into<String>,
        start_date: Option<NaiveDate>,
        return_date: Option<NaiveDate>,
    ) -> Self {
        VacationForm {
            employee_name: employee_name.into(),
            start_date,
            return_date,
        }
    }

    /// Check the input and build the create request.
    ///
    /// The name must contain something other than whitespace, both dates must
    /// be set, and the return date may not precede the start date.
    pub fn validate(&self) -> FeriasResult<NewVacation> {
        let name = self.employee_name.trim();
        if name.is_empty() {
            return Err(FeriasError::MissingField("employee name"));
        }
        let start_date = self.start_date.ok_or(FeriasError::MissingField("start date"))?;
        let return_date = self
            .return_date
            .ok_or(FeriasError::MissingField("return date"))?;

        if start_date > return_date {
            return Err(FeriasError::ReversedRange {
                start_date,
                return_date,
            });
        }

        Ok(NewVacation {
            employee_name: name.to_string(),
            start_date,
            return_date,
        })
    }

    /// Clear all fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_validate_builds_request_with_trimmed_name() {
        let form = VacationForm::new("  Ana  ", Some(date("2024-05-01")), Some(date("2024-05-03")));
        let request = form.validate().unwrap();

        assert_eq!(request.employee_name, "Ana");
        assert_eq!(request.start_date, date("2024-05-01"));
        assert_eq!(request.return_date, date("2024-05-03"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let form = VacationForm::new("   ", Some(date("2024-05-01")), Some(date("2024-05-03")));
        assert!(matches!(
            form.validate(),
            Err(FeriasError::MissingField("employee name"))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_dates() {
        let no_start = VacationForm::new("Ana", None, Some(date("2024-05-03")));
        assert!(matches!(
            no_start.validate(),
            Err(FeriasError::MissingField("start date"))
        ));

        let no_return = VacationForm::new("Ana", Some(date("2024-05-01")), None);
        assert!(matches!(
            no_return.validate(),
            Err(FeriasError::MissingField("return date"))
        ));
    }

    #[test]
    fn test_validate_rejects_reversed_range() {
        let form = VacationForm::new("Ana", Some(date("2024-05-03")), Some(date("2024-05-01")));
        let err = form.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, FeriasError::ReversedRange { .. }));
    }

    #[test]
    fn test_same_day_vacation_is_valid() {
        let form = VacationForm::new("Ana", Some(date("2024-05-01")), Some(date("2024-05-01")));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = VacationForm::new("Ana", Some(date("2024-05-01")), None);
        form.reset();
        assert_eq!(form, VacationForm::default());
    }
}
