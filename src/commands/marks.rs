use anyhow::{Context, Result};
use ferias_core::MonthKey;
use ferias_core::config::FeriasConfig;

pub async fn run(config: &FeriasConfig, month: Option<&str>) -> Result<()> {
    let month: Option<MonthKey> = month.map(str::parse).transpose()?;
    let store = super::load_store(config).await?;

    let markings = match month {
        Some(m) => store.markings().days_in(m),
        None => store.markings().clone(),
    };

    let json = serde_json::to_string_pretty(&markings).context("Failed to encode markings")?;
    println!("{json}");

    Ok(())
}
