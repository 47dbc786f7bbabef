// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::analytics::aggregate::{Rounding, period_stats};
use ledgerlens::analytics::compare::{compare_periods, percent_change};
use ledgerlens::models::{Transaction, TxKind};
use rust_decimal::Decimal;

fn d(v: i64) -> Decimal {
    Decimal::from(v)
}

#[test]
fn positive_base_uses_the_formula() {
    // (150 - 100) / 100 * 100 = 50
    assert_eq!(percent_change(d(150), d(100)), d(50));
    assert_eq!(percent_change(d(50), d(100)), d(-50));
    assert_eq!(percent_change(d(100), d(100)), d(0));
}

#[test]
fn zero_base_growth_caps_at_hundred() {
    assert_eq!(percent_change(d(50), d(0)), d(100));
    assert_eq!(percent_change(d(0), d(0)), d(0));
}

#[test]
fn negative_base_takes_the_zero_base_branch() {
    assert_eq!(percent_change(d(10), d(-5)), d(100));
    assert_eq!(percent_change(d(0), d(-5)), d(0));
}

#[test]
fn changes_round_to_whole_percent() {
    // (110 - 90) / 90 * 100 = 22.22 -> 22
    assert_eq!(percent_change(d(110), d(90)), d(22));
    // (135 - 90) / 90 * 100 = 50
    assert_eq!(percent_change(d(135), d(90)), d(50));
}

fn tx(kind: TxKind, amount: i64, year: i32) -> Transaction {
    Transaction {
        id: 0,
        date: NaiveDate::from_ymd_opt(year, 6, 15).unwrap(),
        kind,
        category: "General".to_string(),
        amount: Decimal::from(amount),
        note: None,
    }
}

#[test]
fn comparison_pairs_periods_with_deltas() {
    let current_txs = vec![tx(TxKind::Income, 1000, 2024), tx(TxKind::Expense, 400, 2024)];
    let previous_txs = vec![tx(TxKind::Income, 500, 2023), tx(TxKind::Expense, 400, 2023)];
    let cur_refs: Vec<&Transaction> = current_txs.iter().collect();
    let prev_refs: Vec<&Transaction> = previous_txs.iter().collect();

    let cmp = compare_periods(
        period_stats(&cur_refs, Rounding::Whole),
        period_stats(&prev_refs, Rounding::Whole),
    );
    assert_eq!(cmp.income_change, d(100));
    assert_eq!(cmp.expense_change, d(0));
    // balance 600 vs 100 -> 500%
    assert_eq!(cmp.balance_change, d(500));
}
