//! Client-side copy of the vacation records and their calendar markings.

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::day_key::{DayKey, MonthKey};
use crate::error::FeriasResult;
use crate::form::VacationForm;
use crate::marking::MarkingMap;
use crate::month_filter::{self, FilterMode};
use crate::record::VacationRecord;
use crate::remote::VacationService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// No load has succeeded yet.
    Loading,
    /// Records reflect at least one successful load.
    Ready,
}

/// Records fetched from a [`VacationService`], plus the markings derived from them.
///
/// Local state only changes after the service confirms: a failed load or add
/// leaves records, markings and state exactly as they were. Mutation takes
/// `&mut self`, so submissions through one store never interleave.
pub struct VacationStore<S> {
    service: S,
    records: Vec<VacationRecord>,
    markings: MarkingMap,
    state: StoreState,
}

impl<S: VacationService> VacationStore<S> {
    pub fn new(service: S) -> Self {
        VacationStore {
            service,
            records: Vec::new(),
            markings: MarkingMap::new(),
            state: StoreState::Loading,
        }
    }

    /// Replace all records with the service's list and rebuild the markings.
    pub async fn load_all(&mut self) -> FeriasResult<()> {
        let records = self.service.list().await.inspect_err(|e| {
            error!(error = %e, "Failed to load vacations");
        })?;

        self.markings = MarkingMap::from_records(&records);
        self.records = records;
        self.state = StoreState::Ready;

        debug!(
            records = self.records.len(),
            marked_days = self.markings.len(),
            "Loaded vacations"
        );
        Ok(())
    }

    /// Validate, send to the service, and on success record the stored copy.
    ///
    /// Nothing is sent when validation fails.
    pub async fn add(
        &mut self,
        employee_name: &str,
        start_date: Option<NaiveDate>,
        return_date: Option<NaiveDate>,
    ) -> FeriasResult<&VacationRecord> {
        let request = VacationForm::new(employee_name, start_date, return_date)
            .validate()
            .inspect_err(|e| debug!(error = %e, "Rejected vacation input"))?;

        let created = self.service.create(&request).await.inspect_err(|e| {
            error!(error = %e, employee = %request.employee_name, "Failed to add vacation");
        })?;

        debug!(id = %created.id, employee = %created.employee_name, "Added vacation");

        self.markings.mark_record(&created);
        self.records.push(created);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Submit the form, clearing it only if the vacation was stored.
    pub async fn submit(&mut self, form: &mut VacationForm) -> FeriasResult<&VacationRecord> {
        let result = self
            .add(&form.employee_name, form.start_date, form.return_date)
            .await;

        if result.is_ok() {
            form.reset();
        }
        result
    }

    /// Records whose start..=return range contains `day`.
    pub fn query_by_day(&self, day: DayKey) -> Vec<&VacationRecord> {
        self.records.iter().filter(|r| r.contains(day)).collect()
    }

    pub fn for_month(&self, month: MonthKey, mode: FilterMode) -> Vec<&VacationRecord> {
        month_filter::for_month(&self.records, month, mode)
    }

    pub fn records(&self) -> &[VacationRecord] {
        &self.records
    }

    pub fn markings(&self) -> &MarkingMap {
        &self.markings
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
