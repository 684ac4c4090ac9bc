//! Number formatting for tables, Indonesian style ("1.234.567")

/// Formats with `.` as thousands separator, rounded to whole units
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::number_format::format_thousands;
///
/// let formatted = format_thousands(1234567.0);
/// assert_eq!(formatted, "1.234.567");
/// ```
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) if rest != "0" => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", rounded.as_str()),
    };

    let mut result = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    format!("{}{}", sign, result)
}

/// Formats a Rupiah amount
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::number_format::format_rupiah;
///
/// let formatted = format_rupiah(250000.0);
/// assert_eq!(formatted, "Rp 250.000");
/// ```
pub fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_thousands(value))
}

/// Parses user input such as "250.000" or "250000" into an amount
pub fn parse_rupiah(input: &str) -> Option<f64> {
    let digits: String = input
        .trim()
        .trim_start_matches("Rp")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1.000");
        assert_eq!(format_thousands(1234567.4), "1.234.567");
        assert_eq!(format_thousands(-25000.0), "-25.000");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(250000.0), "Rp 250.000");
        assert_eq!(format_rupiah(1_500_000.0), "Rp 1.500.000");
    }

    #[test]
    fn test_parse_rupiah() {
        assert_eq!(parse_rupiah("Rp 250.000"), Some(250000.0));
        assert_eq!(parse_rupiah("1500,5"), Some(1500.5));
        assert_eq!(parse_rupiah("  "), None);
        assert_eq!(parse_rupiah("abc"), None);
    }
}
