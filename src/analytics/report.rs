// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The four report assemblers and their response envelope. A report is
//! either fully assembled or not returned at all: bad parameters fail
//! before any computation, and nothing here emits a partial shape.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{Transaction, TxKind};
use crate::utils::{category_color, round_whole};

use super::aggregate::{CategoryBreakdown, PeriodStats, Rounding, category_breakdown, period_stats};
use super::bucket::{BucketUnit, days_of_month, filter_range, months_of_year};
use super::compare::{ComparisonData, compare_periods};
use super::insight::trend_insights;
use super::period::{month_range, year_range};
use super::trend::{Forecast, TrendPoint, bucketed_series, forecast, monthly_trend};

/// Months in the trend window, always anchored at the current month.
pub const TREND_MONTHS: usize = 12;
/// Trailing window width for report moving averages.
pub const MOVING_AVG_WINDOW: usize = 3;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Unknown report type '{0}', expected monthly|yearly|category|trend")]
    UnknownKind(String),
    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),
    #[error("Invalid year {0}")]
    InvalidYear(i32),
    #[error("Report computation failed: {0}")]
    Computation(String),
}

impl ReportError {
    /// HTTP-equivalent status: bad parameters are the caller's fault,
    /// anything else is ours.
    pub fn status(&self) -> u16 {
        match self {
            ReportError::UnknownKind(_)
            | ReportError::InvalidMonth(_)
            | ReportError::InvalidYear(_) => 400,
            ReportError::Computation(_) => 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Monthly,
    Yearly,
    Category,
    Trend,
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(ReportKind::Monthly),
            "yearly" => Ok(ReportKind::Yearly),
            "category" => Ok(ReportKind::Category),
            "trend" => Ok(ReportKind::Trend),
            other => Err(ReportError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub category: Option<String>,
}

/// Response envelope shared with the JSON output surface:
/// `{ success, data?, message? }`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ReportResponse<T> {
    pub fn ok(data: T) -> Self {
        ReportResponse {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        ReportResponse {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthDetailReport {
    pub period: String,
    pub summary: PeriodStats,
    pub daily_data: Vec<TrendPoint>,
    pub category_breakdown: Vec<CategoryBreakdown>,
    pub avg_daily_income: Decimal,
    pub avg_daily_expense: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearOverviewReport {
    pub year: i32,
    pub monthly_data: Vec<TrendPoint>,
    pub totals: PeriodStats,
    pub avg_monthly_income: Decimal,
    pub avg_monthly_expense: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MonthlyReport {
    Month(MonthDetailReport),
    Year(YearOverviewReport),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyReport {
    pub year: i32,
    pub summary: PeriodStats,
    pub expense_categories: Vec<CategoryBreakdown>,
    pub income_categories: Vec<CategoryBreakdown>,
    pub quarterly_data: Vec<TrendPoint>,
    pub comparison: ComparisonData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetailReport {
    pub category: String,
    pub color: String,
    pub total: Decimal,
    pub transaction_count: usize,
    pub data: Vec<TrendPoint>,
    pub recent_transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOverviewReport {
    pub expense_categories: Vec<CategoryBreakdown>,
    pub income_categories: Vec<CategoryBreakdown>,
    pub top_expense_category: Option<CategoryBreakdown>,
    pub top_income_category: Option<CategoryBreakdown>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CategoryReport {
    Detail(CategoryDetailReport),
    Overview(CategoryOverviewReport),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub data: Vec<TrendPoint>,
    pub income_moving_avg: Vec<Decimal>,
    pub expense_moving_avg: Vec<Decimal>,
    pub forecast: Forecast,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Monthly(MonthlyReport),
    Yearly(YearlyReport),
    Category(CategoryReport),
    Trend(TrendReport),
}

fn check_month(month: u32) -> Result<u32, ReportError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(ReportError::InvalidMonth(month))
    }
}

/// Month given: day-by-day series for that month. Year only: 12 month rows
/// with yearly totals.
pub fn monthly_report(
    txs: &[Transaction],
    year: i32,
    month: Option<u32>,
) -> Result<MonthlyReport, ReportError> {
    match month {
        Some(m) => {
            let m = check_month(m)?;
            let range = month_range(year, m).ok_or(ReportError::InvalidYear(year))?;
            let subset = filter_range(txs, &range);
            let summary = period_stats(&subset, Rounding::Whole);

            let keys: Vec<String> = days_of_month(year, m)
                .into_iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect();
            let daily_data = bucketed_series(&subset, &keys, BucketUnit::Day);

            let days = Decimal::from(daily_data.len().max(1) as u64);
            let avg_daily_income = round_whole(summary.total_income / days);
            let avg_daily_expense = round_whole(summary.total_expense / days);

            Ok(MonthlyReport::Month(MonthDetailReport {
                period: format!("{:04}-{:02}", year, m),
                category_breakdown: category_breakdown(&subset, TxKind::Expense),
                summary,
                daily_data,
                avg_daily_income,
                avg_daily_expense,
            }))
        }
        None => {
            let range = year_range(year).ok_or(ReportError::InvalidYear(year))?;
            let subset = filter_range(txs, &range);
            let totals = period_stats(&subset, Rounding::Whole);

            let monthly_data = bucketed_series(&subset, &months_of_year(year), BucketUnit::Month);

            let twelve = Decimal::from(12);
            let avg_monthly_income = round_whole(totals.total_income / twelve);
            let avg_monthly_expense = round_whole(totals.total_expense / twelve);

            Ok(MonthlyReport::Year(YearOverviewReport {
                year,
                monthly_data,
                totals,
                avg_monthly_income,
                avg_monthly_expense,
            }))
        }
    }
}

/// Full-year aggregate with quarter buckets and a year-over-year
/// comparison against the prior calendar year.
pub fn yearly_report(txs: &[Transaction], year: i32) -> Result<YearlyReport, ReportError> {
    let range = year_range(year).ok_or(ReportError::InvalidYear(year))?;
    let subset = filter_range(txs, &range);
    let summary = period_stats(&subset, Rounding::Whole);

    let quarter_keys: Vec<String> = (1..=4).map(|q| format!("Q{}", q)).collect();
    let quarterly_data = bucketed_series(&subset, &quarter_keys, BucketUnit::Quarter);

    let prev_range = year_range(year - 1).ok_or(ReportError::InvalidYear(year - 1))?;
    let prev_subset = filter_range(txs, &prev_range);
    let previous = period_stats(&prev_subset, Rounding::Whole);

    Ok(YearlyReport {
        year,
        expense_categories: category_breakdown(&subset, TxKind::Expense),
        income_categories: category_breakdown(&subset, TxKind::Income),
        quarterly_data,
        comparison: compare_periods(summary.clone(), previous),
        summary,
    })
}

/// Named category: its time series (daily within a month, monthly within a
/// year) and 20 most-recent transactions. No name: the full breakdown for
/// both directions with the top entry of each highlighted.
pub fn category_report(
    txs: &[Transaction],
    year: i32,
    month: Option<u32>,
    category: Option<&str>,
) -> Result<CategoryReport, ReportError> {
    let (range, keys, unit) = match month {
        Some(m) => {
            let m = check_month(m)?;
            let range = month_range(year, m).ok_or(ReportError::InvalidYear(year))?;
            let keys: Vec<String> = days_of_month(year, m)
                .into_iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect();
            (range, keys, BucketUnit::Day)
        }
        None => {
            let range = year_range(year).ok_or(ReportError::InvalidYear(year))?;
            (range, months_of_year(year), BucketUnit::Month)
        }
    };
    let subset = filter_range(txs, &range);

    match category {
        Some(name) => {
            let matched: Vec<&Transaction> = subset
                .iter()
                .copied()
                .filter(|t| t.category.eq_ignore_ascii_case(name))
                .collect();
            // Prefer the stored spelling for display and color lookup.
            let canonical = matched
                .first()
                .map(|t| t.category.clone())
                .unwrap_or_else(|| name.to_string());

            let data = bucketed_series(&matched, &keys, unit);
            let total: Decimal = matched.iter().map(|t| t.amount).sum();

            let mut recent: Vec<&Transaction> = matched.clone();
            recent.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
            let recent_transactions: Vec<Transaction> =
                recent.into_iter().take(20).cloned().collect();

            Ok(CategoryReport::Detail(CategoryDetailReport {
                color: category_color(&canonical).to_string(),
                category: canonical,
                total,
                transaction_count: matched.len(),
                data,
                recent_transactions,
            }))
        }
        None => {
            let expense_categories = category_breakdown(&subset, TxKind::Expense);
            let income_categories = category_breakdown(&subset, TxKind::Income);
            Ok(CategoryReport::Overview(CategoryOverviewReport {
                top_expense_category: expense_categories.first().cloned(),
                top_income_category: income_categories.first().cloned(),
                expense_categories,
                income_categories,
            }))
        }
    }
}

/// Trailing 12-month series with moving averages, a next-month forecast,
/// and the observation insights. Always anchored at `today`'s month.
pub fn trend_report(txs: &[Transaction], today: NaiveDate) -> TrendReport {
    let data = monthly_trend(txs, today, TREND_MONTHS);

    let incomes: Vec<Decimal> = data.iter().map(|p| p.income).collect();
    let expenses: Vec<Decimal> = data.iter().map(|p| p.expense).collect();
    let income_moving_avg = super::trend::moving_average(&incomes, MOVING_AVG_WINDOW)
        .into_iter()
        .map(round_whole)
        .collect();
    let expense_moving_avg = super::trend::moving_average(&expenses, MOVING_AVG_WINDOW)
        .into_iter()
        .map(round_whole)
        .collect();

    let projected = forecast(&data);
    let income = round_whole(projected.income);
    let expense = round_whole(projected.expense);

    TrendReport {
        insights: trend_insights(&data),
        data,
        income_moving_avg,
        expense_moving_avg,
        forecast: Forecast {
            income,
            expense,
            balance: income - expense,
        },
    }
}

/// Dispatch on a validated kind. Missing years default to `today`'s year.
pub fn generate(
    kind: ReportKind,
    params: &ReportParams,
    txs: &[Transaction],
    today: NaiveDate,
) -> Result<Report, ReportError> {
    let year = params.year.unwrap_or_else(|| today.year());
    match kind {
        ReportKind::Monthly => monthly_report(txs, year, params.month).map(Report::Monthly),
        ReportKind::Yearly => yearly_report(txs, year).map(Report::Yearly),
        ReportKind::Category => {
            category_report(txs, year, params.month, params.category.as_deref())
                .map(Report::Category)
        }
        ReportKind::Trend => Ok(Report::Trend(trend_report(txs, today))),
    }
}

/// Boundary wrapper: parse the raw kind string and fold any failure into
/// the `{success:false, message}` envelope instead of propagating it.
pub fn respond(
    kind: &str,
    params: &ReportParams,
    txs: &[Transaction],
    today: NaiveDate,
) -> ReportResponse<Report> {
    match kind
        .parse::<ReportKind>()
        .and_then(|k| generate(k, params, txs, today))
    {
        Ok(report) => ReportResponse::ok(report),
        Err(err) => ReportResponse::fail(err.to_string()),
    }
}
