//! The remote vacation service.
//!
//! The store only talks to the service through [`VacationService`], so tests
//! and alternative transports can stand in for the HTTP client.

mod http;

pub use http::HttpVacationService;

use std::future::Future;

use crate::error::FeriasResult;
use crate::record::{NewVacation, VacationRecord};

/// Where vacation records are persisted.
pub trait VacationService {
    /// Fetch every stored record, in service order.
    fn list(&self) -> impl Future<Output = FeriasResult<Vec<VacationRecord>>> + Send;

    /// Store a new record. Returns the stored copy, including its id.
    fn create(
        &self,
        vacation: &NewVacation,
    ) -> impl Future<Output = FeriasResult<VacationRecord>> + Send;
}
