use anyhow::Result;
use ferias_core::DayKey;
use ferias_core::config::FeriasConfig;
use ferias_core::notice::Notice;

use crate::render::Render;

pub async fn run(config: &FeriasConfig, date: &str) -> Result<()> {
    let day: DayKey = date.parse()?;
    let store = super::load_store(config).await?;

    let on_vacation = store.query_by_day(day);
    println!("{}", Notice::day(&on_vacation).render());

    Ok(())
}
