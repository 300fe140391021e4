// src/catalog/format.rs

use chrono::{Duration, NaiveDateTime};

/// Render a price in cents as a dollar string: 250000 -> "$2,500.00".
pub fn format_price(cents: i64) -> String {
    let dollars = (cents / 100).abs();
    let rem = (cents % 100).abs();

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}${grouped}.{rem:02}")
}

/// "1 Color", "3 Colors". Standard English rule: append "s" unless
/// the count is exactly 1.
pub fn pluralize(noun: &str, count: i64) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// A shoe released within the trailing month counts as new.
///
/// `now` is passed in rather than read from the clock so callers stay
/// deterministic; the router captures it once per request.
pub fn is_new_shoe(release_date: NaiveDateTime, now: NaiveDateTime) -> bool {
    now.signed_duration_since(release_date) < Duration::days(30)
}
