//! Terminal rendering for ferias types.
//!
//! Extension traits and helpers that add colored output to ferias-core
//! types using owo_colors.

use chrono::{Datelike, NaiveDate};
use ferias_core::DayKey;
use ferias_core::MonthKey;
use ferias_core::marking::MarkingMap;
use ferias_core::notice::{Notice, NoticeKind};
use ferias_core::record::VacationRecord;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Notice {
    fn render(&self) -> String {
        let title = match self.kind {
            NoticeKind::Error => self.title.red().bold().to_string(),
            NoticeKind::Success => self.title.green().bold().to_string(),
            NoticeKind::Info => self.title.bold().to_string(),
        };
        format!("{}\n{}", title, self.message)
    }
}

/// One line per record: name, then the date span in the configured format.
pub fn render_record(record: &VacationRecord, date_format: &str) -> String {
    let span = format!(
        "{} - {}",
        record.start_date.format(date_format),
        record.return_date.format(date_format)
    );
    format!("  {} {}", record.employee_name.bold(), span.dimmed())
}

/// Weeks of `month` laid out Sunday-first; `None` pads days outside the month.
pub fn month_weeks(month: MonthKey) -> Vec<[Option<NaiveDate>; 7]> {
    let mut weeks = Vec::new();
    let mut week = [None; 7];

    for day in month.days() {
        let column = day.weekday().num_days_from_sunday() as usize;
        week[column] = Some(day);
        if column == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

/// A month grid with vacation days in green and today underlined.
pub fn render_month(month: MonthKey, markings: &MarkingMap, today: NaiveDate) -> String {
    let mut lines = Vec::new();
    let title = month.first_day().format("%B %Y").to_string();
    lines.push(format!("{:^20}", title).bold().to_string());
    lines.push("Su Mo Tu We Th Fr Sa".dimmed().to_string());

    for week in month_weeks(month) {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                None => "  ".to_string(),
                Some(day) => render_day(*day, markings, today),
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines.join("\n")
}

fn render_day(day: NaiveDate, markings: &MarkingMap, today: NaiveDate) -> String {
    let label = format!("{:>2}", day.day());
    let marked = markings.contains(DayKey::new(day));

    match (marked, day == today) {
        (true, true) => label.green().bold().underline().to_string(),
        (true, false) => label.green().bold().to_string(),
        (false, true) => label.underline().to_string(),
        (false, false) => label,
    }
}
