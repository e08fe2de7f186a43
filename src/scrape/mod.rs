pub mod groups;
pub mod schedule;

use chrono::{NaiveDate, NaiveDateTime};

pub const ORIGIN: &str = "https://natk.ru/";
pub const INDEX_URL: &str = "https://natk.ru/stud-grad/schedule";

/// Resolve a site-relative href against the schedule host.
pub fn make_absolute(url: &str) -> String {
    if url.is_empty() || url.starts_with("http") {
        return url.to_string();
    }
    format!("{}{}", ORIGIN, url.trim_start_matches('/'))
}

/// "Специальность: Программирование" -> "Программирование".
/// Text without a colon comes back unchanged.
pub fn value_after_colon(text: &str) -> &str {
    match text.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => text,
    }
}

const DATE_FORMATS: [&str; 2] = ["%d.%m.%Y", "%Y-%m-%d"];
const DATETIME_FORMATS: [&str; 2] = ["%d.%m.%Y %H:%M", "%d.%m.%Y %H:%M:%S"];

/// Date parsing over the handful of shapes the site prints.
pub fn parse_date_loose(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_absolute_passes_empty_and_absolute_through() {
        assert_eq!(make_absolute(""), "");
        assert_eq!(make_absolute("https://x/y"), "https://x/y");
        assert_eq!(make_absolute("http://other.host/p"), "http://other.host/p");
    }

    #[test]
    fn make_absolute_resolves_relative_against_origin() {
        assert_eq!(make_absolute("/foo/bar"), "https://natk.ru/foo/bar");
        assert_eq!(make_absolute("foo/bar"), "https://natk.ru/foo/bar");
        assert_eq!(make_absolute("//foo"), "https://natk.ru/foo");
    }

    #[test]
    fn value_after_colon_takes_trimmed_tail() {
        assert_eq!(
            value_after_colon("Специальность: Программирование"),
            "Программирование"
        );
        assert_eq!(value_after_colon("Срок обучения:3 года 10 месяцев"), "3 года 10 месяцев");
        assert_eq!(value_after_colon("без метки"), "без метки");
    }

    #[test]
    fn parse_date_loose_accepts_site_shapes() {
        let expected = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(parse_date_loose("01.09.2025"), Some(expected));
        assert_eq!(parse_date_loose(" 01.09.2025 "), Some(expected));
        assert_eq!(parse_date_loose("2025-09-01"), Some(expected));
        assert_eq!(parse_date_loose("01.09.2025 10:30"), Some(expected));
    }

    #[test]
    fn parse_date_loose_rejects_garbage() {
        assert_eq!(parse_date_loose("Понедельник"), None);
        assert_eq!(parse_date_loose("32.13.2025"), None);
        assert_eq!(parse_date_loose(""), None);
    }
}
