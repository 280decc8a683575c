// src/core/sanitize.rs

use chrono::NaiveDate;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop a leading `prefix` (ASCII case-insensitive), then trim.
pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> &'a str {
    let t = s.trim_start();
    match t.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => t[prefix.len()..].trim(),
        _ => t.trim(),
    }
}

/// Last non-empty path segment of a URL or path ("/profile/acme/" → "acme").
/// Query strings are ignored.
pub fn last_path_segment(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or("");
    path.rsplit('/')
        .map(str::trim)
        .find(|seg| !seg.is_empty())
        .filter(|seg| !seg.contains(':')) // "http:" is not a name
        .map(|seg| s!(seg))
}

/* ---------------- Numbers ---------------- */

/// First run of digits in `s`, ignoring ',', '.' and spaces used as group
/// separators inside it ("1,234 sales" → 1234).
pub fn parse_count(s: &str) -> Option<u64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let mut digits = String::new();
    for ch in s[start..].chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ',' | '.' | ' ' => {}
            _ => break,
        }
    }
    digits.parse().ok()
}

/* ---------------- Prices ---------------- */

/// Turn a scraped price string into a number.
///
/// Only digits, '.' and ',' are kept. A separator written right before the first
/// digit (".50") is a decimal point and gets a leading 0; other separators in
/// front of the first digit ("Rs. 1,250") are dropped, as are trailing ones.
/// With both separators present the last one is the decimal point. A lone ',' kind is a thousands separator when every
/// group after the first has exactly three digits (and the first is 1..=3 digits,
/// not "0"); otherwise the last ',' is the decimal point. Repeated '.' in
/// three-digit groups is a thousands separator too.
pub fn parse_price(raw: &str) -> Option<f64> {
    let chars: Vec<char> = raw.chars().collect();
    let mut buf = String::with_capacity(chars.len() + 1);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_digit() {
            buf.push(c);
        } else if c == '.' || c == ',' {
            if !buf.is_empty() {
                buf.push(c);
            } else if chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()) {
                buf.push('0');
                buf.push(c);
            }
        }
    }
    let kept = buf.trim_end_matches(|c| c == '.' || c == ',');
    if !kept.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let has_dot = kept.contains('.');
    let has_comma = kept.contains(',');

    let normalized = match (has_dot, has_comma) {
        (true, true) => {
            let last_dot = kept.rfind('.').unwrap_or(0);
            let last_comma = kept.rfind(',').unwrap_or(0);
            if last_dot > last_comma {
                keep_last_as_decimal(&kept.replace(',', ""), '.')
            } else {
                keep_last_as_decimal(&kept.replace('.', ""), ',')
            }
        }
        (false, true) => {
            if thousands_grouped(kept, ',') {
                kept.replace(',', "")
            } else {
                keep_last_as_decimal(kept, ',')
            }
        }
        (true, false) if kept.matches('.').count() > 1 => {
            if thousands_grouped(kept, '.') {
                kept.replace('.', "")
            } else {
                keep_last_as_decimal(kept, '.')
            }
        }
        _ => s!(kept),
    };

    normalized.parse::<f64>().ok()
}

fn thousands_grouped(s: &str, sep: char) -> bool {
    let mut parts = s.split(sep);
    let first = parts.next().unwrap_or("");
    if first.is_empty() || first.len() > 3 || first == "0" {
        return false;
    }
    parts.all(|p| p.len() == 3)
}

/// Remove every `sep` except the last, which becomes '.'.
fn keep_last_as_decimal(s: &str, sep: char) -> String {
    match s.rfind(sep) {
        Some(i) => {
            let int: String = s[..i].chars().filter(|c| *c != sep).collect();
            join!(int, ".", &s[i + sep.len_utf8()..])
        }
        None => s!(s),
    }
}

/* ---------------- Dates ---------------- */

const DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d", "%d %b %Y", "%d-%m-%Y", "%d/%m/%Y"];

/// Registration dates as the market prints them. "Mar 2020" means March 1st.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let t = normalize_ws(raw);
    if t.is_empty() {
        return None;
    }
    // "2021-03-05 14:22:01" → date part
    let t = match t.split_once(' ') {
        Some((d, rest)) if rest.contains(':') && d.contains('-') => s!(d),
        _ => t.clone(),
    };
    for f in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&t, f) {
            return Some(d);
        }
    }
    NaiveDate::parse_from_str(&join!(&t, " 1"), "%b %Y %d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_with_currency_and_decimals() {
        assert_eq!(parse_price("$ 30.00"), Some(30.0));
        assert_eq!(parse_price("USD 1,234.56"), Some(1234.56));
        assert_eq!(parse_price("1.234,56 €"), Some(1234.56));
        assert_eq!(parse_price("12,50"), Some(12.5));
    }

    #[test]
    fn comma_groups_of_three_are_thousands() {
        assert_eq!(parse_price("1,250"), Some(1250.0));
        assert_eq!(parse_price("12,345,678"), Some(12_345_678.0));
        assert_eq!(parse_price("0,125"), Some(0.125));
        assert_eq!(parse_price("1234,567"), Some(1234.567));
    }

    #[test]
    fn repeated_dots() {
        assert_eq!(parse_price("1.250.000"), Some(1_250_000.0));
        assert_eq!(parse_price("1.2.5"), Some(12.5));
        assert_eq!(parse_price("1.250"), Some(1.25));
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("Price on request"), None);
        assert_eq!(parse_price(".,"), None);
        assert_eq!(parse_price("$ 45."), Some(45.0));
    }

    #[test]
    fn leading_separator_is_a_decimal_point() {
        assert_eq!(parse_price("USD .50"), Some(0.5));
        assert_eq!(parse_price(",75"), Some(0.75));
        // separator not touching the amount belongs to the currency label
        assert_eq!(parse_price("Rs. 1,250"), Some(1250.0));
        assert_eq!(parse_price("USD. 30.00"), Some(30.0));
    }

    #[test]
    fn counts_ignore_group_separators() {
        assert_eq!(parse_count("1,234 sales"), Some(1234));
        assert_eq!(parse_count("Transactions: 87"), Some(87));
        assert_eq!(parse_count("-"), None);
    }

    #[test]
    fn dates_in_market_formats() {
        let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
        assert_eq!(parse_date("Mar 12, 2020"), d(2020, 3, 12));
        assert_eq!(parse_date("March 12, 2020"), d(2020, 3, 12));
        assert_eq!(parse_date("2020-03-12"), d(2020, 3, 12));
        assert_eq!(parse_date("2020-03-12 10:11:12"), d(2020, 3, 12));
        assert_eq!(parse_date("12 Mar 2020"), d(2020, 3, 12));
        assert_eq!(parse_date("05 Jan 2021"), d(2021, 1, 5));
        assert_eq!(parse_date("12-03-2020"), d(2020, 3, 12));
        assert_eq!(parse_date("31-12-2019"), d(2019, 12, 31));
        assert_eq!(parse_date("12/03/2020"), d(2020, 3, 12));
        assert_eq!(parse_date("Mar 2020"), d(2020, 3, 1));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn path_segments_and_prefixes() {
        assert_eq!(last_path_segment("http://m.onion/profile/acme/").as_deref(), Some("acme"));
        assert_eq!(last_path_segment("/profile/acme?tab=items").as_deref(), Some("acme"));
        assert_eq!(last_path_segment("http://"), None);
        assert_eq!(strip_prefix_ci("Verification Level 3", "verification "), "Level 3");
        assert_eq!(strip_prefix_ci("Level 3", "verification "), "Level 3");
    }
}
