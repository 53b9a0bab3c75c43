//! Date, time and duration formatting for list columns.

use contracts::domain::a007_user_settings::Language;

/// DD.MM.YYYY HH:MM:SS from a UTC timestamp
pub fn format_datetime(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// DD.MM.YYYY from a UTC timestamp
pub fn format_date(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// Print duration as "2h 15m" / "2ч 15м"; minute-only under an hour
pub fn format_duration(minutes: f64, locale: Language) -> String {
    let total = minutes.max(0.0).round() as u64;
    let hours = total / 60;
    let mins = total % 60;

    let (h, m) = match locale {
        Language::En => ("h", "m"),
        Language::Ru => ("ч", "м"),
    };

    if hours > 0 {
        if mins > 0 {
            format!("{}{} {}{}", hours, h, mins, m)
        } else {
            format!("{}{}", hours, h)
        }
    } else {
        format!("{}{}", mins, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = chrono::Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(dt), "15.03.2024 14:02:26");
        assert_eq!(format_date(dt), "15.03.2024");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(135.0, Language::En), "2h 15m");
        assert_eq!(format_duration(135.0, Language::Ru), "2ч 15м");
        assert_eq!(format_duration(120.0, Language::En), "2h");
        assert_eq!(format_duration(45.0, Language::En), "45m");
        assert_eq!(format_duration(0.0, Language::Ru), "0м");
    }
}
