// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::analytics::period::{Period, month_range, year_range};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn month_range_covers_whole_month() {
    let r = month_range(2024, 3).unwrap();
    assert_eq!(r.start, d(2024, 3, 1));
    assert_eq!(r.end, d(2024, 3, 31));
    assert!(r.contains(d(2024, 3, 1)));
    assert!(r.contains(d(2024, 3, 31)));
    assert!(!r.contains(d(2024, 4, 1)));
}

#[test]
fn month_range_handles_february() {
    // 2024 is a leap year, 2023 is not
    assert_eq!(month_range(2024, 2).unwrap().end, d(2024, 2, 29));
    assert_eq!(month_range(2023, 2).unwrap().end, d(2023, 2, 28));
}

#[test]
fn month_range_rejects_bad_month() {
    assert!(month_range(2024, 0).is_none());
    assert!(month_range(2024, 13).is_none());
}

#[test]
fn year_range_spans_calendar_year() {
    let r = year_range(2024).unwrap();
    assert_eq!(r.start, d(2024, 1, 1));
    assert_eq!(r.end, d(2024, 12, 31));
}

#[test]
fn symbolic_periods_resolve_against_reference_date() {
    let today = d(2024, 6, 15);

    let week = Period::Week.resolve(today);
    assert_eq!(week.start, d(2024, 6, 8));
    assert_eq!(week.end, today);

    let month = Period::Month.resolve(today);
    assert_eq!(month.start, d(2024, 5, 15));

    let year = Period::Year.resolve(today);
    assert_eq!(year.start, d(2023, 6, 15));

    let all = Period::All.resolve(today);
    assert_eq!(all.start, d(2000, 1, 1));
    assert_eq!(all.end, today);
}

#[test]
fn period_parses_known_tags_only() {
    assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
    assert_eq!("all".parse::<Period>().unwrap(), Period::All);
    assert!("decade".parse::<Period>().is_err());
}
