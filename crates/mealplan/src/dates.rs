use time::macros::format_description;
use time::{Date, Duration};

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Monday of the week containing `date`.
pub fn week_start(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_monday()))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_iso_date(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_week_start_is_monday() {
        // 2025-01-15 is a Wednesday
        assert_eq!(week_start(date!(2025 - 01 - 15)), date!(2025 - 01 - 13));
        assert_eq!(week_start(date!(2025 - 01 - 13)), date!(2025 - 01 - 13));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(week_start(date!(2025 - 01 - 19)), date!(2025 - 01 - 13));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date(" 2025-03-01 ").unwrap(), date!(2025 - 03 - 01));
        assert!(parse_iso_date("01/03/2025").is_err());
    }
}
