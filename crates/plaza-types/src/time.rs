use chrono::{DateTime, FixedOffset, Locale, Offset, Utc};

// Display locale and timezone are fixed: the feed is presented the way the
// original site rendered it, pt-BR in São Paulo time (UTC-03:00, no DST
// since 2019).
const SAO_PAULO_OFFSET_SECS: i32 = 3 * 3600;

/// Full localized publish date, e.g.
/// "terça-feira, 3 de maio de 2022 às 20:00"
pub fn format_published_at(published_at: DateTime<Utc>) -> String {
    let offset = FixedOffset::west_opt(SAO_PAULO_OFFSET_SECS)
        .unwrap_or_else(|| Utc.fix());
    published_at
        .with_timezone(&offset)
        .format_localized("%A, %-d de %B de %Y às %H:%M", Locale::pt_BR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_fixed_locale_and_timezone() {
        // 23:00 UTC is 20:00 in São Paulo, on a Tuesday
        let published: DateTime<Utc> = "2022-05-03T23:00:00Z".parse().unwrap();
        let formatted = format_published_at(published);
        assert!(formatted.starts_with("ter"), "got: {}", formatted);
        assert!(formatted.ends_with("3 de maio de 2022 às 20:00"), "got: {}", formatted);
    }

    #[test]
    fn is_deterministic() {
        let published: DateTime<Utc> = "2022-05-10T23:00:00Z".parse().unwrap();
        assert_eq!(format_published_at(published), format_published_at(published));
        assert!(format_published_at(published).contains("10 de maio de 2022"));
    }
}
