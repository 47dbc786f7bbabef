// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Threshold rules over aggregated output. Two deliberately separate
//! evaluators: plain observation strings for the trend report, and richer
//! cards for dashboard surfaces. The thresholds are behavioral contracts.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::round_whole;

use super::aggregate::{CategoryBreakdown, PeriodStats};
use super::compare::percent_change;
use super::trend::TrendPoint;

fn mean(points: &[TrendPoint], value: fn(&TrendPoint) -> Decimal) -> Decimal {
    if points.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = points.iter().map(value).sum();
    sum / Decimal::from(points.len() as u64)
}

/// Observations over a monthly series (normally the trailing 12 buckets).
///
/// The trend notes compare the recent three months against the preceding
/// three; a window moves only when it clears the 10% band. Comparisons are
/// multiplicative so an all-zero prior window needs no division guard.
pub fn trend_insights(points: &[TrendPoint]) -> Vec<String> {
    let ratio_up = Decimal::new(11, 1);
    let ratio_down = Decimal::new(9, 1);
    let mut notes = Vec::new();

    if points.len() >= 6 {
        let recent = &points[points.len() - 3..];
        let prior = &points[points.len() - 6..points.len() - 3];

        let recent_income = mean(recent, |p| p.income);
        let prior_income = mean(prior, |p| p.income);
        if recent_income > prior_income * ratio_up {
            notes.push("Income is trending up over the last three months.".to_string());
        } else if recent_income < prior_income * ratio_down {
            notes.push("Income is trending down over the last three months.".to_string());
        }

        let recent_expense = mean(recent, |p| p.expense);
        let prior_expense = mean(prior, |p| p.expense);
        if recent_expense > prior_expense * ratio_up {
            notes.push("Spending is trending up over the last three months.".to_string());
        } else if recent_expense < prior_expense * ratio_down {
            notes.push("Spending is trending down over the last three months.".to_string());
        }
    }

    if let Some(last) = points.last() {
        if last.balance < Decimal::ZERO {
            notes.push(format!("You spent more than you earned in {}.", last.date));
        }
    }

    if points.len() >= 3 {
        let recent = &points[points.len() - 3..];
        let income_avg = mean(recent, |p| p.income);
        let expense_avg = mean(recent, |p| p.expense);
        if income_avg > Decimal::ZERO {
            let rate = round_whole((income_avg - expense_avg) / income_avg * Decimal::ONE_HUNDRED);
            if rate >= Decimal::from(20) {
                notes.push(format!(
                    "You are saving {}% of your income on average. Keep it up.",
                    rate
                ));
            } else if rate < Decimal::from(10) {
                notes.push(format!(
                    "Your savings rate is {}%. Consider cutting spending.",
                    rate
                ));
            }
        }
    }

    notes
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

fn card(icon: &str, title: impl Into<String>, description: impl Into<String>) -> InsightCard {
    InsightCard {
        icon: icon.to_string(),
        title: title.into(),
        description: description.into(),
    }
}

/// Card evaluator for the richer dashboard surface: savings badges, top
/// expense category, average daily spend, and an expense-growth alert
/// against the previous period.
pub fn insight_cards(
    current: &PeriodStats,
    previous: &PeriodStats,
    expense_categories: &[CategoryBreakdown],
    days: u32,
) -> Vec<InsightCard> {
    let mut cards = Vec::new();

    let rate = round_whole(current.savings_rate);
    if rate >= Decimal::from(30) {
        cards.push(card(
            "trending-up",
            "Great saving",
            format!("You saved {}% of your income this period.", rate),
        ));
    } else if rate < Decimal::from(10) && current.total_income > Decimal::ZERO {
        cards.push(card(
            "alert-circle",
            "Low savings rate",
            format!("Only {}% of your income was saved this period.", rate),
        ));
    }

    if let Some(top) = expense_categories.first() {
        cards.push(card(
            "pie-chart",
            "Top spending category",
            format!(
                "{} accounts for {}% of your spending.",
                top.category, top.percentage
            ),
        ));
    }

    if days > 0 {
        let daily = (current.total_expense / Decimal::from(days)).round_dp(2);
        cards.push(card(
            "calendar",
            "Average daily spend",
            format!("You spend {} per day on average.", daily),
        ));
    }

    let growth = percent_change(current.total_expense, previous.total_expense);
    if growth > Decimal::from(20) {
        cards.push(card(
            "warning",
            "Spending up",
            format!("Expenses grew {}% compared to the previous period.", growth),
        ));
    }

    cards
}
