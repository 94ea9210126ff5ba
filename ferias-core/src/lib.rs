//! Core types for the ferias vacation calendar.
//!
//! This crate provides everything the `ferias` CLI needs that is not terminal I/O:
//! - `VacationRecord` and the wire shapes of the vacation service
//! - date range expansion into calendar markings
//! - month filtering of records
//! - `VacationStore`, the client-side copy of the remote record list

pub mod config;
pub mod constants;
pub mod date_range;
pub mod day_key;
pub mod error;
pub mod form;
pub mod marking;
pub mod month_filter;
pub mod notice;
pub mod record;
pub mod remote;
pub mod store;

pub use day_key::{Clock, DayKey, MonthKey};
pub use error::{FailureKind, FeriasError, FeriasResult};
pub use record::{NewVacation, VacationRecord};
pub use store::{StoreState, VacationStore};
