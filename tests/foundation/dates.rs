//! Integration tests for EDTF spans and validity windows

use airside_foundation::{Bound, DateRange, DateSpan};
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn range(inception: &str, cessation: &str) -> DateRange {
    DateRange::parse(inception, cessation).unwrap()
}

fn at(date: &str) -> DateSpan {
    DateSpan::parse(date).unwrap()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn precision_widens_the_span() {
    assert_eq!(at("2020"), DateSpan {
        lower: Bound::Date(day(2020, 1, 1)),
        upper: Bound::Date(day(2020, 12, 31)),
    });
    assert_eq!(at("2020-02").upper, Bound::Date(day(2020, 2, 29)));
    assert_eq!(at("2021-11-09"), DateSpan::day(day(2021, 11, 9)));
}

#[test]
fn qualifiers_do_not_move_bounds() {
    assert_eq!(at("2020~"), at("2020"));
    assert_eq!(at("2020-06?"), at("2020-06"));
    assert_eq!(at("%2020-06-01"), at("2020-06-01"));
}

#[test]
fn unspecified_digits() {
    assert_eq!(at("201X").lower, Bound::Date(day(2010, 1, 1)));
    assert_eq!(at("201X").upper, Bound::Date(day(2019, 12, 31)));
    assert_eq!(at("19XX").upper, Bound::Date(day(1999, 12, 31)));
}

#[test]
fn winter_runs_into_the_next_year() {
    assert_eq!(at("2023-24").upper, Bound::Date(day(2024, 2, 29)));
}

#[test]
fn markers() {
    assert_eq!(at(".."), DateSpan::open());
    assert_eq!(at("open"), DateSpan::open());
    for unknown in ["", "uuuu", "unknown"] {
        assert_eq!(at(unknown), DateSpan::unknown());
    }
}

#[test]
fn intervals_take_outer_bounds() {
    let span = at("2020-06/2021");
    assert_eq!(span.lower, Bound::Date(day(2020, 6, 1)));
    assert_eq!(span.upper, Bound::Date(day(2021, 12, 31)));
    assert_eq!(at("../2021").lower, Bound::Open);
    assert!(DateSpan::parse("2021/2020").is_err());
}

#[test]
fn malformed_dates_are_rejected() {
    for bad in ["20", "2020-13", "2021-02-30", "2020-01-01-01", "yesterday"] {
        assert!(DateSpan::parse(bad).is_err(), "{bad}");
    }
}

// =============================================================================
// Containment
// =============================================================================

#[test]
fn year_window_contains_its_dates() {
    let window = range("2020", "2021");
    assert!(window.contains(&at("2020-06-01")));
    assert!(window.contains(&at("2021-12-31")));
    assert!(!window.contains(&at("2022-01-01")));
    assert!(!window.contains(&at("2019-12-31")));
}

#[test]
fn bounds_are_inclusive() {
    let window = range("2021-05-25", "2021-11-09");
    assert!(window.contains(&at("2021-05-25")));
    assert!(window.contains(&at("2021-11-09")));
}

#[test]
fn open_and_unknown_ends_accept_everything() {
    assert!(range("2021-11-09", "..").contains(&at("2999")));
    assert!(range("", "2000").contains(&at("1066")));
    assert!(range("..", "..").contains(&at("2024-07-23")));
}

#[test]
fn queries_anchor_at_their_start() {
    let window = range("2024-06-17", "..");
    assert!(!window.contains(&at("2024")));
    assert!(!window.contains(&at("2024-06")));
    assert!(window.contains(&at("2024-07")));
}

#[test]
fn queries_without_dates_match_nothing() {
    assert!(!range("..", "..").contains(&DateSpan::open()));
    assert!(!range("..", "..").contains(&DateSpan::unknown()));
}
