use std::io::IsTerminal;

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use ferias_core::config::FeriasConfig;
use ferias_core::day_key::parse_date;
use ferias_core::form::VacationForm;
use ferias_core::notice::Notice;
use owo_colors::OwoColorize;

use crate::render::{Render, render_record};

pub async fn run(
    config: &FeriasConfig,
    name: Option<String>,
    start: Option<String>,
    return_date: Option<String>,
) -> Result<()> {
    let interactive = std::io::stdin().is_terminal()
        && (name.is_none() || start.is_none() || return_date.is_none());

    // --- Name ---
    let employee_name = match name {
        Some(n) => n,
        None if interactive => Input::<String>::new()
            .with_prompt("  Employee name")
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    // --- Dates ---
    let start_date = date_field(start, "  First vacation day (YYYY-MM-DD)", interactive)?;
    let return_date = date_field(return_date, "  Back on (YYYY-MM-DD)", interactive)?;

    let mut form = VacationForm::new(employee_name, start_date, return_date);
    let mut store = super::connect(config)?;

    if interactive {
        println!();
    }

    match store.submit(&mut form).await {
        Ok(record) => {
            println!("{}", Notice::added().render());
            println!("{}", render_record(record, &config.date_format));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", Notice::for_submit_error(&e).render());
            Err(e.into())
        }
    }
}

/// Use the flag value if given, otherwise prompt when interactive.
fn date_field(value: Option<String>, prompt: &str, interactive: bool) -> Result<Option<NaiveDate>> {
    match value {
        Some(s) => Ok(Some(parse_date(&s)?)),
        None if interactive => prompt_date(prompt),
        None => Ok(None),
    }
}

/// Prompt for a date with retry on parse errors. Empty input leaves it unset.
fn prompt_date(prompt: &str) -> Result<Option<NaiveDate>> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match parse_date(&input) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
