use proptest::prelude::*;

use super::format::{escape_html, format_grouped};

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn prop_grouped_number_reparses(n in 0i64..=9_999_999_999) {
        let grouped = format_grouped(n);
        let digits: String = grouped.chars().filter(|&c| c != '.').collect();
        prop_assert_eq!(digits.parse::<i64>().unwrap(), n);
    }

    #[test]
    fn prop_groups_are_three_digits(n in 1_000i64..=i64::MAX) {
        let grouped = format_grouped(n);
        let mut groups = grouped.split('.');
        let head = groups.next().unwrap();
        prop_assert!((1..=3).contains(&head.len()));
        prop_assert!(!head.starts_with('0'));
        for group in groups {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn prop_negative_mirrors_positive(n in 1i64..=i64::MAX) {
        prop_assert_eq!(format_grouped(-n), format!("-{}", format_grouped(n)));
    }

    #[test]
    fn prop_escape_roundtrips(s in ".*") {
        prop_assert_eq!(unescape(&escape_html(&s)), s);
    }

    #[test]
    fn prop_escaped_has_no_markup(s in ".*") {
        let escaped = escape_html(&s);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
    }
}
