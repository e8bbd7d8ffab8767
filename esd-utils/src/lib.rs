//! Shared utility functions for ESD crates.

/// Date utility functions
pub mod dates {
    use anyhow::anyhow;
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    /// Formats tried, in order, for timestamps without an explicit offset.
    const NAIVE_FORMATS: [&str; 5] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];

    /// Parse an ISO-8601-like timestamp into a naive instant.
    ///
    /// Timestamps carrying an offset (`Z`, `+01:00`) are normalized to UTC.
    /// Timestamps without one are taken as-is, and a bare `YYYY-MM-DD`
    /// date is read as midnight.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.naive_utc());
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(dt);
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| anyhow!("unrecognized timestamp: {:?}", s))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        }

        #[test]
        fn test_parse_naive_timestamp() {
            let dt = parse_timestamp("2019-09-10T00:00:00").unwrap();
            assert_eq!(dt, ymd_hms(2019, 9, 10, 0, 0, 0));
        }

        #[test]
        fn test_parse_fractional_and_space_separated() {
            let dt = parse_timestamp("2019-09-10T12:30:15.250").unwrap();
            assert_eq!(dt.format("%H:%M:%S%.3f").to_string(), "12:30:15.250");

            let dt = parse_timestamp("2019-09-10 12:30:15").unwrap();
            assert_eq!(dt, ymd_hms(2019, 9, 10, 12, 30, 15));
        }

        #[test]
        fn test_parse_offset_normalizes_to_utc() {
            let dt = parse_timestamp("2019-09-10T02:00:00+02:00").unwrap();
            assert_eq!(dt, ymd_hms(2019, 9, 10, 0, 0, 0));

            let dt = parse_timestamp("2019-09-10T00:00:00Z").unwrap();
            assert_eq!(dt, ymd_hms(2019, 9, 10, 0, 0, 0));
        }

        #[test]
        fn test_parse_date_only_is_midnight() {
            let dt = parse_timestamp(" 2020-02-29 ").unwrap();
            assert_eq!(dt, ymd_hms(2020, 2, 29, 0, 0, 0));
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert!(parse_timestamp("").is_err());
            assert!(parse_timestamp("yesterday").is_err());
            assert!(parse_timestamp("2019-13-01T00:00:00").is_err());
        }
    }
}

/// Text comparison and matching helpers
pub mod text {
    use std::cmp::Ordering;

    fn case_rank(c: char) -> u8 {
        if c.is_uppercase() {
            1
        } else {
            0
        }
    }

    /// Base letter of a lowercase Latin-1 accented letter; other chars map
    /// to themselves.
    fn base_letter(c: char) -> char {
        match c {
            'à'..='å' => 'a',
            'ç' => 'c',
            'è'..='ë' => 'e',
            'ì'..='ï' => 'i',
            'ñ' => 'n',
            'ò'..='ö' | 'ø' => 'o',
            'ù'..='ü' => 'u',
            'ý' | 'ÿ' => 'y',
            _ => c,
        }
    }

    fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars().flat_map(char::to_lowercase).map(base_letter)
    }

    fn accent_ranks(s: &str) -> impl Iterator<Item = u8> + '_ {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| if base_letter(c) == c { 0 } else { 1 })
    }

    /// Compare two strings the way a browser's default collation does for
    /// plain text: letters first compare by base letter without regard to
    /// accents or case, then unaccented sorts before accented, then
    /// lowercase before uppercase.
    ///
    /// Only Latin-1 accented letters are folded to a base letter; any other
    /// script compares by its lowercase code points. Falls back to code point
    /// order so the result is a total order.
    pub fn locale_compare(a: &str, b: &str) -> Ordering {
        folded(a)
            .cmp(folded(b))
            .then_with(|| accent_ranks(a).cmp(accent_ranks(b)))
            .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
            .then_with(|| a.cmp(b))
    }

    /// True if `needle` occurs in `haystack`, ignoring case.
    /// An empty needle matches everything.
    pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_locale_compare_ignores_case_at_first_level() {
            assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
            assert_eq!(locale_compare("Carbon monoxide", "Ozone"), Ordering::Less);
            assert_eq!(locale_compare("ozone", "Nitrogen dioxide"), Ordering::Greater);
        }

        #[test]
        fn test_locale_compare_lowercase_first_on_tie() {
            assert_eq!(locale_compare("a", "A"), Ordering::Less);
            assert_eq!(locale_compare("Ozone", "ozone"), Ordering::Greater);
            assert_eq!(locale_compare("Ozone", "Ozone"), Ordering::Equal);
        }

        #[test]
        fn test_locale_compare_prefix_sorts_first() {
            assert_eq!(locale_compare("Nitro", "Nitrogen"), Ordering::Less);
            assert_eq!(locale_compare("", "a"), Ordering::Less);
        }

        #[test]
        fn test_locale_compare_folds_accents() {
            assert_eq!(locale_compare("Ozône", "Ozonf"), Ordering::Less);
            assert_eq!(locale_compare("Ozone", "Ozône"), Ordering::Less);
            assert_eq!(locale_compare("Éther", "ether"), Ordering::Greater);
            assert_eq!(locale_compare("Ñandu", "Nz"), Ordering::Less);
        }

        #[test]
        fn test_contains_ignore_case() {
            assert!(contains_ignore_case("Carbon monoxide", "MONO"));
            assert!(contains_ignore_case("O3", "o"));
            assert!(contains_ignore_case("anything", ""));
            assert!(!contains_ignore_case("Ozone", "co"));
        }
    }
}
