// Date parsing and en-IN display helpers shared by the pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Accepts `YYYY-MM-DD`, RFC 3339, and naive `YYYY-MM-DD[T ]HH:MM:SS[.f]`
/// (read as UTC). Date-only values are midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Short en-IN date (`17/10/2026`); unparseable input is shown as-is.
pub fn display_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%-d/%-m/%Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn rupees(amount: f64) -> String {
    format!("₹{}", grouped_number(amount))
}

/// Indian digit grouping (`12,34,567`) with up to two decimals, trailing
/// zeros dropped.
pub fn grouped_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let mut out = String::new();
    if value < 0.0 && cents > 0 {
        out.push('-');
    }
    out.push_str(&group_indian(whole));
    if frac > 0 {
        out.push('.');
        out.push_str(format!("{frac:02}").trim_end_matches('0'));
    }
    out
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Plain number without a trailing `.0` for whole values.
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
