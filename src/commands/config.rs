use anyhow::Result;
use ferias_core::config::FeriasConfig;
use owo_colors::OwoColorize;

pub fn path() -> Result<()> {
    println!("{}", FeriasConfig::config_path()?.display());
    Ok(())
}

pub fn init() -> Result<()> {
    let path = FeriasConfig::config_path()?;

    if path.exists() {
        println!("{}", format!("Config already exists at {}", path.display()).dimmed());
        return Ok(());
    }

    FeriasConfig::create_default_config(&path)?;
    println!("{}", format!("Created {}", path.display()).green());
    Ok(())
}

pub fn show(config: &FeriasConfig) -> Result<()> {
    println!("{} {}", "api_url:".dimmed(), config.api_url);
    println!("{} {}", "timeout_secs:".dimmed(), config.timeout_secs);
    println!("{} {:?}", "clock:".dimmed(), config.clock);
    println!("{} {}", "date_format:".dimmed(), config.date_format);
    Ok(())
}
