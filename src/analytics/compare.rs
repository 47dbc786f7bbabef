// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::round_whole;

use super::aggregate::PeriodStats;

/// Whole-percent change from `previous` to `current`.
///
/// A zero (or negative) base is special-cased: growth from nothing reports
/// as 100%, nothing-to-nothing as 0%. Downstream consumers depend on these
/// exact values; do not replace them with infinity or null.
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous > Decimal::ZERO {
        round_whole((current - previous) / previous * Decimal::ONE_HUNDRED)
    } else if current > Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonData {
    pub current: PeriodStats,
    pub previous: PeriodStats,
    pub income_change: Decimal,
    pub expense_change: Decimal,
    pub balance_change: Decimal,
}

/// Pair two period reductions with their metric deltas. The balance delta
/// uses the same positive-base guard as the others.
pub fn compare_periods(current: PeriodStats, previous: PeriodStats) -> ComparisonData {
    let income_change = percent_change(current.total_income, previous.total_income);
    let expense_change = percent_change(current.total_expense, previous.total_expense);
    let balance_change = percent_change(current.balance, previous.balance);
    ComparisonData {
        current,
        previous,
        income_change,
        expense_change,
        balance_change,
    }
}
