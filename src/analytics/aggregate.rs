// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TxKind};
use crate::utils::{category_color, round_whole};

use super::bucket::group_by_category;

/// Rounding policy for derived rates. The report surface rounds to whole
/// percent; library consumers keep the exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Whole,
    Exact,
}

impl Rounding {
    pub fn apply(self, v: Decimal) -> Decimal {
        match self {
            Rounding::Whole => round_whole(v),
            Rounding::Exact => v,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub savings_rate: Decimal,
    pub transaction_count: usize,
    pub avg_transaction_amount: Decimal,
}

/// Reduce a transaction subset to its period metrics. All divisions are
/// guarded: zero income yields a zero savings rate, zero count a zero
/// average.
pub fn period_stats(txs: &[&Transaction], rounding: Rounding) -> PeriodStats {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    for t in txs {
        match t.kind {
            TxKind::Income => total_income += t.amount,
            TxKind::Expense => total_expense += t.amount,
        }
    }
    let balance = total_income - total_expense;
    let savings_rate = if total_income.is_zero() {
        Decimal::ZERO
    } else {
        rounding.apply(balance / total_income * Decimal::ONE_HUNDRED)
    };
    let transaction_count = txs.len();
    let avg_transaction_amount = if transaction_count == 0 {
        Decimal::ZERO
    } else {
        (total_income + total_expense) / Decimal::from(transaction_count as u64)
    };
    PeriodStats {
        total_income,
        total_expense,
        balance,
        savings_rate,
        transaction_count,
        avg_transaction_amount,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: Decimal,
    pub count: usize,
    pub percentage: Decimal,
    pub color: String,
}

/// Per-category totals for one transaction direction, sorted descending by
/// amount. Percentages are whole percent of the direction's total, zero
/// when the total is zero; ties keep insertion order (stable sort).
pub fn category_breakdown(txs: &[&Transaction], kind: TxKind) -> Vec<CategoryBreakdown> {
    let subset: Vec<&Transaction> = txs.iter().copied().filter(|t| t.kind == kind).collect();
    let total: Decimal = subset.iter().map(|t| t.amount).sum();

    let mut breakdown: Vec<CategoryBreakdown> = group_by_category(&subset)
        .into_iter()
        .map(|(category, group)| {
            let amount: Decimal = group.iter().map(|t| t.amount).sum();
            let percentage = if total.is_zero() {
                Decimal::ZERO
            } else {
                round_whole(amount / total * Decimal::ONE_HUNDRED)
            };
            let color = category_color(&category).to_string();
            CategoryBreakdown {
                category,
                amount,
                count: group.len(),
                percentage,
                color,
            }
        })
        .collect();
    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown
}
