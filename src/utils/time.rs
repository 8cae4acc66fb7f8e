use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Midnight UTC of a `YYYY-MM-DD` date, as used by the demo catalog.
pub fn date_utc(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("invalid midnight for {}", s))?;
    Ok(midnight.and_utc())
}

/// Date-only rendering used on job cards and the admin table.
pub fn display_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_calendar_dates() {
        let dt = date_utc("2024-01-15").unwrap();
        assert_eq!(display_date(dt), "2024-01-15");
        assert!(date_utc("15/01/2024").is_err());
    }
}
