// tests/properties.rs
use finance_scraper::format::fmt_with_suffix;
use finance_scraper::normalize::normalize;
use finance_scraper::Metric;
use proptest::prelude::*;

fn n(raw: &str) -> f64 {
    normalize(Metric::EnterpriseValue, raw).unwrap()
}

/// Split "-1,234.5" style output back into (number, suffix).
fn split(formatted: &str) -> (f64, Option<&str>) {
    match formatted.split_once(' ') {
        Some((num, suffix)) => (num.parse().unwrap(), Some(suffix)),
        None => (formatted.parse().unwrap(), None),
    }
}

fn two_decimals(num: &str) -> bool {
    matches!(num.split_once('.'), Some((_, frac)) if frac.len() == 2)
}

proptest! {
    #[test]
    fn grouped_numbers_parse_like_plain_floats(
        raw in r"-?[0-9]{1,3}(,[0-9]{3}){0,4}(\.[0-9]{1,6})?%?"
    ) {
        let plain: String = raw.chars().filter(|c| *c != ',' && *c != '%').collect();
        prop_assert_eq!(n(&raw), plain.parse::<f64>().unwrap());
    }

    #[test]
    fn suffix_multiplies(x in 0.0f64..1_000_000.0, idx in 0usize..3) {
        let (suffix, mult) = [("M", 1e6), ("B", 1e9), ("T", 1e12)][idx];
        let prefix = format!("{x:.4}");
        let expected = prefix.parse::<f64>().unwrap() * mult;
        let got = n(&format!("{prefix}{suffix}"));
        prop_assert!((got - expected).abs() <= expected.abs() * 1e-12);
    }

    #[test]
    fn small_values_have_no_suffix(v in -999.0f64..999.0) {
        let s = fmt_with_suffix(v);
        let (_, suffix) = split(&s);
        prop_assert!(suffix.is_none(), "{}", s);
        prop_assert!(two_decimals(&s), "{}", s);
    }

    #[test]
    fn large_values_have_one_suffix_in_range(v in 1_000.0f64..1e20) {
        let s = fmt_with_suffix(v);
        let (num, suffix) = split(&s);
        let suffix = suffix.unwrap();
        prop_assert_eq!(suffix.chars().count(), 1);
        prop_assert!("kMBTPE".contains(suffix), "{}", s);
        prop_assert!((1.0..1000.0).contains(&num), "{}", s);
        prop_assert!(two_decimals(s.split(' ').next().unwrap()), "{}", s);
    }

    #[test]
    fn sign_is_preserved(v in 0.001f64..1e20) {
        prop_assert_eq!(fmt_with_suffix(-v), format!("-{}", fmt_with_suffix(v)));
    }
}

#[test]
fn empty_and_na_are_zero() {
    assert_eq!(n(""), 0.0);
    assert_eq!(n("N/A"), 0.0);
}
