//! Calendar markings derived from vacation records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::VACATION_DOT_COLOR;
use crate::date_range;
use crate::day_key::{DayKey, MonthKey};
use crate::record::VacationRecord;

/// How a single day is drawn on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marking {
    pub marked: bool,
    pub dot_color: String,
}

impl Marking {
    /// The marking every vacation day gets.
    pub fn vacation() -> Self {
        Marking {
            marked: true,
            dot_color: VACATION_DOT_COLOR.to_string(),
        }
    }
}

/// Day-key to marking, serialized as a JSON object keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkingMap(BTreeMap<DayKey, Marking>);

impl MarkingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from scratch over all records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a VacationRecord>) -> Self {
        let mut map = Self::new();
        for record in records {
            map.mark_record(record);
        }
        map
    }

    /// Mark every day of `start..=end`. Overlaps overwrite with the same value.
    pub fn mark_range(&mut self, start: NaiveDate, end: NaiveDate) {
        for day in date_range::expand(start, end) {
            self.0.insert(day, Marking::vacation());
        }
    }

    pub fn mark_record(&mut self, record: &VacationRecord) {
        self.mark_range(record.start_date, record.return_date);
    }

    pub fn get(&self, day: DayKey) -> Option<&Marking> {
        self.0.get(&day)
    }

    pub fn contains(&self, day: DayKey) -> bool {
        self.0.contains_key(&day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &Marking)> {
        self.0.iter()
    }

    /// Markings that fall inside `month`, in day order.
    pub fn days_in(&self, month: MonthKey) -> MarkingMap {
        let first = DayKey::new(month.first_day());
        let last = DayKey::new(month.last_day());
        MarkingMap(
            self.0
                .range(first..=last)
                .map(|(day, marking)| (*day, marking.clone()))
                .collect(),
        )
    }
}
