use anyhow::Result;
use ferias_core::config::FeriasConfig;
use ferias_core::month_filter::FilterMode;
use owo_colors::OwoColorize;

use crate::render::render_record;

pub async fn run(config: &FeriasConfig, month: Option<&str>, overlap: bool) -> Result<()> {
    let month = super::resolve_month(month, config)?;
    let store = super::load_store(config).await?;

    let mode = if overlap {
        FilterMode::Overlap
    } else {
        FilterMode::Endpoint
    };
    let vacations = store.for_month(month, mode);

    let title = format!("Vacations in {}", month.first_day().format("%B %Y"));
    println!("{}", title.bold());

    if vacations.is_empty() {
        println!("{}", "  No vacations this month".dimmed());
        return Ok(());
    }

    for record in vacations {
        println!("{}", render_record(record, &config.date_format));
    }

    Ok(())
}
