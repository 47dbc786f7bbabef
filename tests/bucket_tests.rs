// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::analytics::bucket::{
    BucketUnit, bucket_key, days_of_month, filter_range, group_by_bucket, group_by_category,
    months_of_year, trailing_months,
};
use ledgerlens::analytics::period::DateRange;
use ledgerlens::models::{Transaction, TxKind};
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tx(date: NaiveDate, kind: TxKind, category: &str, amount: i64) -> Transaction {
    Transaction {
        id: 0,
        date,
        kind,
        category: category.to_string(),
        amount: Decimal::from(amount),
        note: None,
    }
}

#[test]
fn filter_is_inclusive_on_both_ends() {
    let txs = vec![
        tx(d(2024, 3, 1), TxKind::Expense, "Food", 10),
        tx(d(2024, 3, 31), TxKind::Expense, "Food", 20),
        tx(d(2024, 4, 1), TxKind::Expense, "Food", 30),
    ];
    let range = DateRange {
        start: d(2024, 3, 1),
        end: d(2024, 3, 31),
    };
    let subset = filter_range(&txs, &range);
    assert_eq!(subset.len(), 2);
}

#[test]
fn bucket_keys_are_canonical() {
    // 2024-03-06 is a Wednesday; its Sunday-aligned week starts 2024-03-03
    let date = d(2024, 3, 6);
    assert_eq!(bucket_key(date, BucketUnit::Day), "2024-03-06");
    assert_eq!(bucket_key(date, BucketUnit::Week), "2024-03-03");
    assert_eq!(bucket_key(date, BucketUnit::Month), "2024-03");
    assert_eq!(bucket_key(date, BucketUnit::Quarter), "Q1");
    assert_eq!(bucket_key(d(2024, 5, 10), BucketUnit::Quarter), "Q2");
    assert_eq!(bucket_key(d(2024, 12, 31), BucketUnit::Quarter), "Q4");
}

#[test]
fn grouping_orders_buckets_by_key() {
    let txs = vec![
        tx(d(2024, 5, 2), TxKind::Expense, "Food", 10),
        tx(d(2024, 1, 15), TxKind::Expense, "Food", 20),
        tx(d(2024, 5, 20), TxKind::Expense, "Food", 30),
    ];
    let refs: Vec<&Transaction> = txs.iter().collect();
    let grouped = group_by_bucket(&refs, BucketUnit::Month);
    let keys: Vec<&String> = grouped.keys().collect();
    assert_eq!(keys, ["2024-01", "2024-05"]);
    assert_eq!(grouped["2024-05"].len(), 2);
}

#[test]
fn category_grouping_keeps_insertion_order() {
    let txs = vec![
        tx(d(2024, 1, 1), TxKind::Expense, "Food", 10),
        tx(d(2024, 1, 2), TxKind::Expense, "Transport", 10),
        tx(d(2024, 1, 3), TxKind::Expense, "Food", 5),
    ];
    let refs: Vec<&Transaction> = txs.iter().collect();
    let groups = group_by_category(&refs);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "Food");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, "Transport");
}

#[test]
fn day_enumeration_matches_calendar() {
    assert_eq!(days_of_month(2024, 1).len(), 31);
    assert_eq!(days_of_month(2024, 2).len(), 29); // leap year
    assert_eq!(days_of_month(2023, 2).len(), 28);
    assert_eq!(days_of_month(2024, 4).len(), 30);
    assert!(days_of_month(2024, 13).is_empty());
}

#[test]
fn months_of_year_yields_twelve_keys() {
    let keys = months_of_year(2024);
    assert_eq!(keys.len(), 12);
    assert_eq!(keys[0], "2024-01");
    assert_eq!(keys[11], "2024-12");
}

#[test]
fn trailing_months_cross_year_boundary() {
    let keys = trailing_months(d(2024, 1, 15), 3);
    assert_eq!(keys, ["2023-11", "2023-12", "2024-01"]);

    let twelve = trailing_months(d(2024, 6, 1), 12);
    assert_eq!(twelve.len(), 12);
    assert_eq!(twelve[0], "2023-07");
    assert_eq!(twelve[11], "2024-06");
}
