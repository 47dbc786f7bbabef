// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TxKind};

use super::bucket::{self, BucketUnit};

/// One bucket of a time-ordered series.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Aggregate a subset into one point per enumerated key, in key order.
/// Keys with no transactions yield zero-valued points, so the series is
/// gap-free for charting.
pub fn bucketed_series(txs: &[&Transaction], keys: &[String], unit: BucketUnit) -> Vec<TrendPoint> {
    let grouped = bucket::group_by_bucket(txs, unit);
    keys.iter()
        .map(|key| {
            let mut income = Decimal::ZERO;
            let mut expense = Decimal::ZERO;
            if let Some(group) = grouped.get(key) {
                for t in group {
                    match t.kind {
                        TxKind::Income => income += t.amount,
                        TxKind::Expense => expense += t.amount,
                    }
                }
            }
            TrendPoint {
                date: key.clone(),
                income,
                expense,
                balance: income - expense,
            }
        })
        .collect()
}

/// Monthly series over the trailing `months` calendar months ending at
/// `today`'s month, regardless of how much history exists.
pub fn monthly_trend(txs: &[Transaction], today: NaiveDate, months: usize) -> Vec<TrendPoint> {
    let refs: Vec<&Transaction> = txs.iter().collect();
    let keys = bucket::trailing_months(today, months);
    bucketed_series(&refs, &keys, BucketUnit::Month)
}

/// Trailing moving average: index `i` averages `[max(0, i-w+1) .. i]`, so
/// the window narrows at the start of the series instead of being centered
/// or dropped.
pub fn moving_average(series: &[Decimal], window: usize) -> Vec<Decimal> {
    let w = window.max(1);
    series
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = (i + 1).saturating_sub(w);
            let slice = &series[start..=i];
            let sum: Decimal = slice.iter().copied().sum();
            sum / Decimal::from(slice.len() as u64)
        })
        .collect()
}

/// Least-squares projection of the next value: regress index against value
/// over `0..n-1` and evaluate at `x = n`. Negative projections clamp to
/// zero; series shorter than 2 points fall back to the last known value,
/// or zero when empty.
pub fn forecast_next(series: &[Decimal]) -> Decimal {
    let n = series.len();
    if n == 0 {
        return Decimal::ZERO;
    }
    if n == 1 {
        return series[0];
    }
    let count = Decimal::from(n as u64);
    let mut sum_x = Decimal::ZERO;
    let mut sum_y = Decimal::ZERO;
    let mut sum_xy = Decimal::ZERO;
    let mut sum_xx = Decimal::ZERO;
    for (i, y) in series.iter().enumerate() {
        let x = Decimal::from(i as u64);
        sum_x += x;
        sum_y += *y;
        sum_xy += x * *y;
        sum_xx += x * x;
    }
    let denom = count * sum_xx - sum_x * sum_x;
    if denom.is_zero() {
        return series[n - 1];
    }
    let slope = (count * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / count;
    (slope * count + intercept).max(Decimal::ZERO)
}

#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Project the next bucket. Income and expense are regressed
/// independently; the balance is their difference, not a regression of its
/// own.
pub fn forecast(points: &[TrendPoint]) -> Forecast {
    let incomes: Vec<Decimal> = points.iter().map(|p| p.income).collect();
    let expenses: Vec<Decimal> = points.iter().map(|p| p.expense).collect();
    let income = forecast_next(&incomes);
    let expense = forecast_next(&expenses);
    Forecast {
        income,
        expense,
        balance: income - expense,
    }
}
