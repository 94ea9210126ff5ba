use anyhow::Result;
use ferias_core::config::FeriasConfig;

use crate::render::render_month;

pub async fn run(config: &FeriasConfig, month: Option<&str>) -> Result<()> {
    let month = super::resolve_month(month, config)?;
    let store = super::load_store(config).await?;

    println!(
        "{}",
        render_month(month, store.markings(), config.clock.today())
    );

    Ok(())
}
