use crate::catalog::format::{format_price, is_new_shoe, pluralize};
use crate::tests::utils::{days_ago, now};
use chrono::Duration;

#[test]
fn format_price_renders_cents_as_dollars() {
    assert_eq!(format_price(5995), "$59.95");
    assert_eq!(format_price(10095), "$100.95");
}

#[test]
fn format_price_groups_thousands() {
    assert_eq!(format_price(250000), "$2,500.00");
    assert_eq!(format_price(123456789), "$1,234,567.89");
}

#[test]
fn format_price_pads_small_amounts() {
    assert_eq!(format_price(0), "$0.00");
    assert_eq!(format_price(5), "$0.05");
    assert_eq!(format_price(100), "$1.00");
}

#[test]
fn pluralize_appends_s_except_for_one() {
    assert_eq!(pluralize("Color", 0), "0 Colors");
    assert_eq!(pluralize("Color", 1), "1 Color");
    assert_eq!(pluralize("Color", 3), "3 Colors");
}

#[test]
fn shoe_released_two_weeks_ago_is_new() {
    assert!(is_new_shoe(days_ago(15), now()));
}

#[test]
fn shoe_released_six_weeks_ago_is_not_new() {
    assert!(!is_new_shoe(days_ago(45), now()));
}

#[test]
fn window_is_exclusive_at_thirty_days() {
    let t = now();
    assert!(!is_new_shoe(t - Duration::days(30), t));
    assert!(is_new_shoe(t - Duration::days(30) + Duration::seconds(1), t));
}
