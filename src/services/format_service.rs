use chrono::{DateTime, Datelike, Utc};

pub const PLACEHOLDER: &str = "-";

const BYTE_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Decimal (powers of 1000) humanized size with one fractional digit, e.g. `1.5 MB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let mut rounded = format!("{value:.1}");
    // 999.95 KB prints as 1000.0; carry it into the next unit.
    if rounded.starts_with("1000") && unit < BYTE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
        rounded = format!("{value:.1}");
    }
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{trimmed} {}", BYTE_UNITS[unit])
}

/// `MMM Do YYYY`, e.g. `Jan 1st 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    let day = date.day();
    format!(
        "{} {}{} {}",
        date.format("%b"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
