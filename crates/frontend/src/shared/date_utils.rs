/// Utilities for date formatting in Indonesian locale
///
/// Backend dates arrive as `YYYY-MM-DD` or full ISO timestamps.
use chrono::{Datelike, NaiveDate};
use contracts::domain::a004_rental::parse_date;

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Format ISO date string with the month spelled out
/// Example: "2023-05-15" -> "15 Mei 2023"
pub fn format_date_long(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_ID[date.month0() as usize],
            date.year()
        ),
        None => date_str.to_string(),
    }
}

/// Rental period as shown in tables: "01/05/2024 s/d 04/05/2024"
pub fn format_period(start: &str, end: &str) -> String {
    format!("{} s/d {}", format_date(start), format_date(end))
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Today as `YYYY-MM-DD`, the value format of `<input type="date">`
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long("2023-05-15"), "15 Mei 2023");
        assert_eq!(format_date_long("2023-12-01T00:00:00Z"), "1 Desember 2023");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(
            format_period("2024-05-01", "2024-05-04"),
            "01/05/2024 s/d 04/05/2024"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date_long(""), "");
    }
}
