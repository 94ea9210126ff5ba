pub mod add;
pub mod calendar;
pub mod config;
pub mod day;
pub mod marks;
pub mod month;

use anyhow::{Context, Result};
use ferias_core::config::FeriasConfig;
use ferias_core::notice::Notice;
use ferias_core::remote::HttpVacationService;
use ferias_core::{FailureKind, MonthKey, VacationStore};
use tracing::debug;

use crate::render::Render;
use crate::utils::tui::create_spinner;

/// Build a store against the configured service, without loading it.
pub fn connect(config: &FeriasConfig) -> Result<VacationStore<HttpVacationService>> {
    let service = HttpVacationService::new(config)?;
    debug!(url = %service.vacations_url(), "Using vacation service");
    Ok(VacationStore::new(service))
}

/// Build a store and load every record from the service.
///
/// A failed load shows the load-failure notice before returning the error.
pub async fn load_store(config: &FeriasConfig) -> Result<VacationStore<HttpVacationService>> {
    let mut store = connect(config)?;

    let spinner = create_spinner("Loading vacations...");
    let loaded = store.load_all().await;
    spinner.finish_and_clear();

    if loaded.is_err() {
        eprintln!("{}", Notice::failure(FailureKind::LoadFailure).render());
    }
    loaded.with_context(|| format!("Failed to load vacations from {}", config.api_url))?;

    Ok(store)
}

/// The requested month, or the current one under the configured clock.
pub fn resolve_month(month: Option<&str>, config: &FeriasConfig) -> Result<MonthKey> {
    match month {
        Some(m) => Ok(m.parse()?),
        None => Ok(config.clock.current_month()),
    }
}
