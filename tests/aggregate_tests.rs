// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::analytics::aggregate::{Rounding, category_breakdown, period_stats};
use ledgerlens::models::{Transaction, TxKind};
use rust_decimal::Decimal;

fn tx(day: u32, kind: TxKind, category: &str, amount: &str) -> Transaction {
    Transaction {
        id: 0,
        date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        kind,
        category: category.to_string(),
        amount: amount.parse().unwrap(),
        note: None,
    }
}

#[test]
fn stats_conserve_balance() {
    let txs = vec![
        tx(1, TxKind::Income, "Salary", "200"),
        tx(2, TxKind::Expense, "Food", "50"),
        tx(3, TxKind::Expense, "Transport", "30"),
    ];
    let refs: Vec<&Transaction> = txs.iter().collect();
    let s = period_stats(&refs, Rounding::Exact);
    assert_eq!(s.total_income, Decimal::from(200));
    assert_eq!(s.total_expense, Decimal::from(80));
    assert_eq!(s.balance, s.total_income - s.total_expense);
    assert_eq!(s.transaction_count, 3);
    // all amounts regardless of direction: (200 + 80) / 3
    assert_eq!(s.avg_transaction_amount.round_dp(2).to_string(), "93.33");
}

#[test]
fn zero_income_means_zero_savings_rate() {
    let txs = vec![tx(1, TxKind::Expense, "Food", "50")];
    let refs: Vec<&Transaction> = txs.iter().collect();
    let s = period_stats(&refs, Rounding::Exact);
    assert_eq!(s.savings_rate, Decimal::ZERO);
    assert_eq!(s.balance, Decimal::from(-50));
}

#[test]
fn empty_subset_is_all_zeros() {
    let refs: Vec<&Transaction> = Vec::new();
    let s = period_stats(&refs, Rounding::Whole);
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expense, Decimal::ZERO);
    assert_eq!(s.balance, Decimal::ZERO);
    assert_eq!(s.savings_rate, Decimal::ZERO);
    assert_eq!(s.avg_transaction_amount, Decimal::ZERO);
    assert_eq!(s.transaction_count, 0);
}

#[test]
fn rounding_policy_applies_to_savings_rate_only() {
    // 200 / 300 = 66.67%
    let txs = vec![
        tx(1, TxKind::Income, "Salary", "300"),
        tx(2, TxKind::Expense, "Food", "100"),
    ];
    let refs: Vec<&Transaction> = txs.iter().collect();
    let whole = period_stats(&refs, Rounding::Whole);
    assert_eq!(whole.savings_rate, Decimal::from(67));
    let exact = period_stats(&refs, Rounding::Exact);
    assert_eq!(exact.savings_rate.round_dp(2).to_string(), "66.67");
}

#[test]
fn breakdown_sorts_descending_and_percentages_sum_to_hundred() {
    let txs = vec![
        tx(1, TxKind::Expense, "Transport", "30"),
        tx(2, TxKind::Expense, "Food", "60"),
        tx(3, TxKind::Expense, "Bills", "10"),
        tx(4, TxKind::Income, "Salary", "500"),
    ];
    let refs: Vec<&Transaction> = txs.iter().collect();
    let cats = category_breakdown(&refs, TxKind::Expense);
    assert_eq!(cats.len(), 3);
    assert_eq!(cats[0].category, "Food");
    assert_eq!(cats[0].percentage, Decimal::from(60));
    assert_eq!(cats[1].category, "Transport");
    assert_eq!(cats[2].category, "Bills");
    let total: Decimal = cats.iter().map(|c| c.percentage).sum();
    assert_eq!(total, Decimal::from(100));
}

#[test]
fn breakdown_with_zero_total_has_zero_percentages() {
    let txs = vec![tx(1, TxKind::Expense, "Food", "0")];
    let refs: Vec<&Transaction> = txs.iter().collect();
    let cats = category_breakdown(&refs, TxKind::Expense);
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].percentage, Decimal::ZERO);
}

#[test]
fn breakdown_attaches_colors() {
    let txs = vec![
        tx(1, TxKind::Expense, "Food", "10"),
        tx(2, TxKind::Expense, "NoSuchCategory", "10"),
    ];
    let refs: Vec<&Transaction> = txs.iter().collect();
    let cats = category_breakdown(&refs, TxKind::Expense);
    let food = cats.iter().find(|c| c.category == "Food").unwrap();
    assert_eq!(food.color, "#FF6B6B");
    let other = cats.iter().find(|c| c.category == "NoSuchCategory").unwrap();
    assert_eq!(other.color, ledgerlens::utils::DEFAULT_CATEGORY_COLOR);
}

#[test]
fn breakdown_only_counts_requested_direction() {
    let txs = vec![
        tx(1, TxKind::Income, "Salary", "100"),
        tx(2, TxKind::Expense, "Food", "40"),
    ];
    let refs: Vec<&Transaction> = txs.iter().collect();
    let income = category_breakdown(&refs, TxKind::Income);
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].category, "Salary");
    assert_eq!(income[0].percentage, Decimal::from(100));
}
