//! Brazilian date formatting for report cells and titles.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// `YYYY-MM-DD` (optionally with a time suffix) rendered as `DD/MM/YYYY`.
/// Unparseable input is echoed back verbatim; empty input stays empty.
pub fn format_date_br(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// ISO datetime rendered as `DD/MM/YYYY HH:MM:SS`; falls back to the input
/// when it does not parse.
pub fn format_datetime_br(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return datetime.format("%d/%m/%Y %H:%M:%S").to_string();
        }
    }
    trimmed.to_string()
}

/// Capitalized Portuguese month name, 1-based.
pub fn month_name(month: u32) -> &'static str {
    let index = (month.max(1) - 1) as usize;
    MONTHS[index.min(MONTHS.len() - 1)]
}

/// Year and month of a `YYYY-MM-DD...` string; `None` when malformed.
pub fn parse_year_month(value: &str) -> Option<(i32, u32)> {
    let date_part = value.trim().get(..10)?;
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    Some((date.year(), date.month()))
}
