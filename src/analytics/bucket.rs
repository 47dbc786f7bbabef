// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use std::collections::BTreeMap;

use crate::models::Transaction;

use super::period::DateRange;

/// Granularity for date bucketing. Keys sort lexicographically in date
/// order, so a BTreeMap keyed by them is an ordered series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketUnit {
    Day,
    Week,
    Month,
    Quarter,
}

/// Subset of `txs` whose date falls within `range`, inclusive on both ends.
pub fn filter_range<'a>(txs: &'a [Transaction], range: &DateRange) -> Vec<&'a Transaction> {
    txs.iter().filter(|t| range.contains(t.date)).collect()
}

/// Canonical bucket key for a date: ISO date for days, Sunday-aligned week
/// start for weeks, `YYYY-MM` for months, `Q1`..`Q4` for quarters.
pub fn bucket_key(date: NaiveDate, unit: BucketUnit) -> String {
    match unit {
        BucketUnit::Day => date.format("%Y-%m-%d").to_string(),
        BucketUnit::Week => date
            .week(Weekday::Sun)
            .first_day()
            .format("%Y-%m-%d")
            .to_string(),
        BucketUnit::Month => date.format("%Y-%m").to_string(),
        BucketUnit::Quarter => format!("Q{}", date.month0() / 3 + 1),
    }
}

/// Group a (typically pre-filtered) subset by bucket key, in key order.
pub fn group_by_bucket<'a>(
    txs: &[&'a Transaction],
    unit: BucketUnit,
) -> BTreeMap<String, Vec<&'a Transaction>> {
    let mut map: BTreeMap<String, Vec<&'a Transaction>> = BTreeMap::new();
    for t in txs {
        map.entry(bucket_key(t.date, unit)).or_default().push(t);
    }
    map
}

/// Partition by the category label, ignoring dates. Insertion order is
/// preserved so equal-amount breakdowns stay stable downstream.
pub fn group_by_category<'a>(txs: &[&'a Transaction]) -> Vec<(String, Vec<&'a Transaction>)> {
    let mut groups: Vec<(String, Vec<&'a Transaction>)> = Vec::new();
    for t in txs {
        match groups.iter_mut().find(|(name, _)| *name == t.category) {
            Some((_, bucket)) => bucket.push(t),
            None => groups.push((t.category.clone(), vec![t])),
        }
    }
    groups
}

/// Every day of the given month, in order. Empty for an invalid month.
pub fn days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let mut days = Vec::new();
    let mut d = first;
    while d.month() == month {
        days.push(d);
        match d.checked_add_days(Days::new(1)) {
            Some(next) => d = next,
            None => break,
        }
    }
    days
}

/// The 12 `YYYY-MM` keys of a calendar year.
pub fn months_of_year(year: i32) -> Vec<String> {
    (1..=12).map(|m| format!("{:04}-{:02}", year, m)).collect()
}

/// The trailing `n` calendar month keys ending at `today`'s month,
/// ascending. Months with no transactions still get a key, so series built
/// against this axis are gap-free.
pub fn trailing_months(today: NaiveDate, n: usize) -> Vec<String> {
    let Some(anchor) = NaiveDate::from_ymd_opt(today.year(), today.month(), 1) else {
        return Vec::new();
    };
    let mut keys = Vec::with_capacity(n);
    for back in (0..n).rev() {
        if let Some(m) = anchor.checked_sub_months(Months::new(back as u32)) {
            keys.push(m.format("%Y-%m").to_string());
        }
    }
    keys
}
