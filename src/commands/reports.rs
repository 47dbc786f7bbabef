// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::aggregate::{
    CategoryBreakdown, PeriodStats, Rounding, category_breakdown, period_stats,
};
use crate::analytics::bucket::{days_of_month, filter_range};
use crate::analytics::insight::insight_cards;
use crate::analytics::period::month_range;
use crate::analytics::report::{
    self, CategoryReport, MonthlyReport, Report, ReportKind, ReportParams, TrendReport,
};
use crate::analytics::trend::TrendPoint;
use crate::db;
use crate::models::TxKind;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{Datelike, Months, NaiveDate};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    match m.subcommand() {
        Some(("monthly", sub)) => run(
            conn,
            sub,
            "monthly",
            ReportParams {
                year: sub.get_one::<i32>("year").copied(),
                month: sub.get_one::<u32>("month").copied(),
                category: None,
            },
            today,
        ),
        Some(("yearly", sub)) => run(
            conn,
            sub,
            "yearly",
            ReportParams {
                year: sub.get_one::<i32>("year").copied(),
                month: None,
                category: None,
            },
            today,
        ),
        Some(("category", sub)) => run(
            conn,
            sub,
            "category",
            ReportParams {
                year: sub.get_one::<i32>("year").copied(),
                month: sub.get_one::<u32>("month").copied(),
                category: sub.get_one::<String>("category").cloned(),
            },
            today,
        ),
        Some(("trend", sub)) => run(conn, sub, "trend", ReportParams::default(), today),
        Some(("insights", sub)) => insights(conn, sub, today),
        _ => Ok(()),
    }
}

fn run(
    conn: &Connection,
    sub: &clap::ArgMatches,
    kind: &str,
    params: ReportParams,
    today: NaiveDate,
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = db::all_transactions(conn)?;

    if json_flag || jsonl_flag {
        // JSON surfaces get the full response envelope, failures included.
        let resp = report::respond(kind, &params, &txs, today);
        maybe_print_json(json_flag, jsonl_flag, &resp)?;
        return Ok(());
    }

    let rep = report::generate(kind.parse::<ReportKind>()?, &params, &txs, today)?;
    render(&rep);
    Ok(())
}

fn summary_rows(s: &PeriodStats) -> Vec<Vec<String>> {
    vec![
        vec!["Income".into(), s.total_income.to_string()],
        vec!["Expense".into(), s.total_expense.to_string()],
        vec!["Balance".into(), s.balance.to_string()],
        vec!["Savings rate".into(), format!("{}%", s.savings_rate)],
        vec!["Transactions".into(), s.transaction_count.to_string()],
        vec![
            "Avg amount".into(),
            s.avg_transaction_amount.round_dp(2).to_string(),
        ],
    ]
}

fn point_rows(points: &[TrendPoint]) -> Vec<Vec<String>> {
    points
        .iter()
        .map(|p| {
            vec![
                p.date.clone(),
                p.income.to_string(),
                p.expense.to_string(),
                p.balance.to_string(),
            ]
        })
        .collect()
}

fn breakdown_rows(cats: &[CategoryBreakdown]) -> Vec<Vec<String>> {
    cats.iter()
        .map(|c| {
            vec![
                c.category.clone(),
                c.amount.to_string(),
                c.count.to_string(),
                format!("{}%", c.percentage),
            ]
        })
        .collect()
}

fn render(rep: &Report) {
    match rep {
        Report::Monthly(MonthlyReport::Month(r)) => {
            println!("Report for {}", r.period);
            println!(
                "{}",
                pretty_table(&["Metric", "Value"], summary_rows(&r.summary))
            );
            println!(
                "{}",
                pretty_table(
                    &["Day", "Income", "Expense", "Balance"],
                    point_rows(&r.daily_data),
                )
            );
            println!(
                "{}",
                pretty_table(
                    &["Category", "Spent", "Count", "Share"],
                    breakdown_rows(&r.category_breakdown),
                )
            );
            println!(
                "Per day: income {} / expense {}",
                r.avg_daily_income, r.avg_daily_expense
            );
        }
        Report::Monthly(MonthlyReport::Year(r)) => {
            println!("Report for {}", r.year);
            println!(
                "{}",
                pretty_table(
                    &["Month", "Income", "Expense", "Balance"],
                    point_rows(&r.monthly_data),
                )
            );
            println!(
                "{}",
                pretty_table(&["Metric", "Value"], summary_rows(&r.totals))
            );
            println!(
                "Per month: income {} / expense {}",
                r.avg_monthly_income, r.avg_monthly_expense
            );
        }
        Report::Yearly(r) => {
            println!("Report for {}", r.year);
            println!(
                "{}",
                pretty_table(&["Metric", "Value"], summary_rows(&r.summary))
            );
            println!(
                "{}",
                pretty_table(
                    &["Quarter", "Income", "Expense", "Balance"],
                    point_rows(&r.quarterly_data),
                )
            );
            println!(
                "{}",
                pretty_table(
                    &["Category", "Spent", "Count", "Share"],
                    breakdown_rows(&r.expense_categories),
                )
            );
            println!(
                "{}",
                pretty_table(
                    &["Category", "Earned", "Count", "Share"],
                    breakdown_rows(&r.income_categories),
                )
            );
            println!(
                "vs {}: income {}%, expense {}%, balance {}%",
                r.year - 1,
                r.comparison.income_change,
                r.comparison.expense_change,
                r.comparison.balance_change
            );
        }
        Report::Category(CategoryReport::Detail(r)) => {
            println!(
                "Category '{}': total {} over {} transactions",
                r.category, r.total, r.transaction_count
            );
            println!(
                "{}",
                pretty_table(&["Bucket", "Income", "Expense", "Balance"], point_rows(&r.data))
            );
            let rows: Vec<Vec<String>> = r
                .recent_transactions
                .iter()
                .map(|t| {
                    vec![
                        t.date.to_string(),
                        t.kind.to_string(),
                        t.amount.to_string(),
                        t.note.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Date", "Type", "Amount", "Note"], rows)
            );
        }
        Report::Category(CategoryReport::Overview(r)) => {
            println!(
                "{}",
                pretty_table(
                    &["Category", "Spent", "Count", "Share"],
                    breakdown_rows(&r.expense_categories),
                )
            );
            println!(
                "{}",
                pretty_table(
                    &["Category", "Earned", "Count", "Share"],
                    breakdown_rows(&r.income_categories),
                )
            );
            if let Some(top) = &r.top_expense_category {
                println!("Top expense category: {} ({}%)", top.category, top.percentage);
            }
            if let Some(top) = &r.top_income_category {
                println!("Top income category: {} ({}%)", top.category, top.percentage);
            }
        }
        Report::Trend(r) => render_trend(r),
    }
}

fn render_trend(r: &TrendReport) {
    let rows: Vec<Vec<String>> = r
        .data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                p.date.clone(),
                p.income.to_string(),
                r.income_moving_avg
                    .get(i)
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                p.expense.to_string(),
                r.expense_moving_avg
                    .get(i)
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                p.balance.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Month", "Income", "Income MA", "Expense", "Expense MA", "Balance"],
            rows,
        )
    );
    println!(
        "Next month projection: income {}, expense {}, balance {}",
        r.forecast.income, r.forecast.expense, r.forecast.balance
    );
    for note in &r.insights {
        println!("- {}", note);
    }
}

fn insights(conn: &Connection, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = sub
        .get_one::<i32>("year")
        .copied()
        .unwrap_or_else(|| today.year());
    let month = sub.get_one::<u32>("month").copied().unwrap_or(today.month());

    let range = month_range(year, month)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{}", year, month))?;
    let prev_start = range
        .start
        .checked_sub_months(Months::new(1))
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{}", year, month))?;
    let prev_range = month_range(prev_start.year(), prev_start.month())
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{}", year, month))?;

    let txs = db::all_transactions(conn)?;
    let subset = filter_range(&txs, &range);
    let prev_subset = filter_range(&txs, &prev_range);
    let current = period_stats(&subset, Rounding::Whole);
    let previous = period_stats(&prev_subset, Rounding::Whole);
    let expense_categories = category_breakdown(&subset, TxKind::Expense);
    let days = days_of_month(year, month).len() as u32;

    let cards = insight_cards(&current, &previous, &expense_categories, days);
    if !maybe_print_json(json_flag, jsonl_flag, &cards)? {
        let rows: Vec<Vec<String>> = cards
            .iter()
            .map(|c| vec![c.icon.clone(), c.title.clone(), c.description.clone()])
            .collect();
        println!("{}", pretty_table(&["Icon", "Title", "Description"], rows));
    }
    Ok(())
}
