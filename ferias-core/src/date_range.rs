//! Expansion of a vacation's date range into individual calendar days.

use chrono::NaiveDate;

use crate::day_key::DayKey;

/// Every calendar day from `start` to `end`, both inclusive.
///
/// A reversed range (`start > end`) yields nothing.
pub fn expand(start: NaiveDate, end: NaiveDate) -> DayRange {
    let remaining = if start <= end {
        (end - start).num_days() as usize + 1
    } else {
        0
    };
    DayRange {
        next: start,
        remaining,
    }
}

/// Lazy iterator returned by [`expand`].
#[derive(Debug, Clone)]
pub struct DayRange {
    next: NaiveDate,
    remaining: usize,
}

impl Iterator for DayRange {
    type Item = DayKey;

    fn next(&mut self) -> Option<DayKey> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            // remaining > 0 means `end` lies ahead, so the successor exists
            self.next = day.succ_opt()?;
        }
        Some(DayKey::new(day))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DayRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn keys(start: &str, end: &str) -> Vec<String> {
        expand(date(start), date(end)).map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_expand_includes_both_endpoints() {
        assert_eq!(
            keys("2024-05-01", "2024-05-03"),
            vec!["2024-05-01", "2024-05-02", "2024-05-03"]
        );
    }

    #[test]
    fn test_expand_single_day() {
        assert_eq!(keys("2024-05-01", "2024-05-01"), vec!["2024-05-01"]);
    }

    #[test]
    fn test_expand_reversed_range_is_empty() {
        let range = expand(date("2024-05-03"), date("2024-05-01"));
        assert_eq!(range.len(), 0);
        assert!(keys("2024-05-03", "2024-05-01").is_empty());
    }

    #[test]
    fn test_expand_length_matches_day_difference() {
        let start = date("2023-12-20");
        let end = date("2024-03-02");
        let days: Vec<DayKey> = expand(start, end).collect();

        assert_eq!(days.len() as i64, (end - start).num_days() + 1);
        assert_eq!(expand(start, end).len(), days.len());

        let mut unique = days.clone();
        unique.dedup();
        assert_eq!(unique.len(), days.len());
    }

    #[test]
    fn test_expand_crosses_leap_day_and_year_end() {
        assert_eq!(
            keys("2024-02-28", "2024-03-01"),
            vec!["2024-02-28", "2024-02-29", "2024-03-01"]
        );
        assert_eq!(
            keys("2024-12-31", "2025-01-01"),
            vec!["2024-12-31", "2025-01-01"]
        );
    }

    #[test]
    fn test_expand_at_max_date_terminates() {
        let days: Vec<DayKey> = expand(NaiveDate::MAX, NaiveDate::MAX).collect();
        assert_eq!(days, vec![DayKey::new(NaiveDate::MAX)]);
    }
}
