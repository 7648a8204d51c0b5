// ============================================================================
// FORMAT - Helpers de fechas para las vistas
// ============================================================================

use chrono::{DateTime, NaiveDate};

/// "2024-03-15" -> "15.03.2024". Si no parsea, devuelve el valor tal cual.
pub fn format_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// RFC 3339 -> "15.03.2024, 14:30". Si no parsea, devuelve el valor tal cual.
pub fn format_date_time(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%d.%m.%Y, %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
    }

    #[test]
    fn formats_timestamps() {
        assert_eq!(format_date_time("2024-03-15T14:30:00+00:00"), "15.03.2024, 14:30");
    }

    #[test]
    fn passes_through_unparseable_values() {
        assert_eq!(format_date("вчера"), "вчера");
        assert_eq!(format_date_time("—"), "—");
    }
}
