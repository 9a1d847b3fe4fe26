//! Sort keys and comparators for record listings.
//!
//! Three key flavours are used by the list operations:
//!
//! - Text: lowercased field text, compared by code point.
//! - Folded: lowercased, NFD-decomposed, combining marks U+0300..U+036F
//!   removed, so "Álvarez" and "alvarez" share a key.
//! - Numeric: the field text read with JavaScript `parseFloat` rules.
//!   Non-numeric text yields NaN, and NaN keys sort after every number.
//!
//! All sorts are stable: records with equal keys keep their fetch order.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

use crate::record::{Field, Record};

/// Case-insensitive key.
pub fn text_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case- and accent-insensitive key.
pub fn folded_key(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Read the longest numeric prefix of `s`, as JavaScript `parseFloat` does.
///
/// Leading whitespace is skipped. Accepted prefixes are
/// `[+-]digits[.digits][(e|E)[+-]digits]`, `[+-].digits...` and
/// `[+-]Infinity`. Anything else is NaN.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        // A lone "." only counts when digits surround it.
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    // Rust's float grammar rejects a trailing "." ("5."), JavaScript accepts it.
    s[..i].trim_end_matches('.').parse().unwrap_or(f64::NAN)
}

/// Three-way comparison for numeric keys with NaN ordered last.
pub fn compare_numeric(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Stable sort by the lowercased text of `field`.
pub fn sort_by_text(records: &mut [Record], field: Field) {
    records.sort_by_cached_key(|r| text_key(&r.field_text(field)));
}

/// Stable sort by the lowercased, accent-stripped text of `field`.
pub fn sort_by_folded(records: &mut [Record], field: Field) {
    records.sort_by_cached_key(|r| folded_key(&r.field_text(field)));
}

/// Stable sort by the numeric value of `field`, NaN last.
pub fn sort_by_number(records: &mut [Record], field: Field) {
    records.sort_by(|a, b| {
        compare_numeric(
            parse_float(&a.field_text(field)),
            parse_float(&b.field_text(field)),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::persona;
    use serde_json::json;

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn folded_key_strips_accents_and_case() {
        assert_eq!(folded_key("Álvarez"), "alvarez");
        assert_eq!(folded_key("Benítez"), "benitez");
        assert_eq!(folded_key("Muñoz"), "munoz");
        assert_eq!(folded_key("Jaén"), folded_key("JAEN"));
    }

    #[test]
    fn text_key_keeps_accents() {
        assert_eq!(text_key("Álvarez"), "álvarez");
        assert_ne!(text_key("Álvarez"), text_key("Alvarez"));
    }

    #[test]
    fn parse_float_reads_numeric_prefix() {
        assert_eq!(parse_float("4"), 4.0);
        assert_eq!(parse_float("  2.5"), 2.5);
        assert_eq!(parse_float("-3"), -3.0);
        assert_eq!(parse_float("+.5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2019,2023"), 2019.0);
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_float_non_numeric_is_nan() {
        for s in ["", "abc", ".", "-", "e5", "null", "[object Object]"] {
            assert!(parse_float(s).is_nan(), "{s:?} should be NaN");
        }
    }

    #[test]
    fn compare_numeric_orders_nan_last() {
        assert_eq!(compare_numeric(1.0, 2.0), Ordering::Less);
        assert_eq!(compare_numeric(2.0, 2.0), Ordering::Equal);
        assert_eq!(compare_numeric(f64::NAN, 2.0), Ordering::Greater);
        assert_eq!(compare_numeric(2.0, f64::NAN), Ordering::Less);
        assert_eq!(compare_numeric(f64::NAN, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn text_sort_is_case_insensitive_and_stable() {
        let mut records = vec![
            persona("1", "Ana", "ruiz"),
            persona("2", "Luis", "Pérez"),
            persona("3", "Eva", "Ruiz"),
            persona("4", "Sol", "García"),
        ];
        sort_by_text(&mut records, Field::Apellidos);
        assert_eq!(ids(&records), ["4", "2", "1", "3"]);
    }

    #[test]
    fn text_sort_does_not_fold_accents() {
        // "á" (U+00E1) sorts after every ASCII letter without folding.
        let mut records = vec![persona("1", "a", "Álvarez"), persona("2", "b", "Benítez")];
        sort_by_text(&mut records, Field::Apellidos);
        assert_eq!(ids(&records), ["2", "1"]);
    }

    #[test]
    fn folded_sort_ignores_accents() {
        let mut records = vec![
            persona("1", "a", "Benítez"),
            persona("2", "b", "Álvarez"),
            persona("3", "c", "alvarez"),
        ];
        sort_by_folded(&mut records, Field::Apellidos);
        assert_eq!(ids(&records), ["2", "3", "1"]);
    }

    #[test]
    fn numeric_sort_puts_nan_last_and_keeps_order() {
        let mut a = persona("a", "A", "A");
        a.data.num_participaciones = json!("n/a");
        let mut b = persona("b", "B", "B");
        b.data.num_participaciones = json!(10);
        let mut c = persona("c", "C", "C");
        c.data.num_participaciones = json!("9");
        let mut d = persona("d", "D", "D");
        d.data.num_participaciones = json!(null);
        let mut e = persona("e", "E", "E");
        e.data.num_participaciones = json!(9);

        let mut records = vec![a, b, c, d, e];
        sort_by_number(&mut records, Field::NumParticipaciones);
        assert_eq!(ids(&records), ["c", "e", "b", "a", "d"]);
    }

    #[test]
    fn numeric_sort_is_not_lexicographic() {
        let mut a = persona("a", "A", "A");
        a.data.anios_participacion = json!(10);
        let mut b = persona("b", "B", "B");
        b.data.anios_participacion = json!(9);
        let mut records = vec![a, b];
        sort_by_number(&mut records, Field::AniosParticipacion);
        assert_eq!(ids(&records), ["b", "a"]);
    }
}
