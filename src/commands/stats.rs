// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::aggregate::{
    CategoryBreakdown, PeriodStats, Rounding, category_breakdown, period_stats,
};
use crate::analytics::bucket::filter_range;
use crate::analytics::period::Period;
use crate::db;
use crate::models::TxKind;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsOutput {
    period: String,
    start: String,
    end: String,
    stats: PeriodStats,
    expense_categories: Vec<CategoryBreakdown>,
    income_categories: Vec<CategoryBreakdown>,
}

/// Dashboard-style window statistics. Unlike the report surface this keeps
/// the savings rate at full precision; display rounding happens here.
pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let period_raw = m.get_one::<String>("period").unwrap();
    let period = period_raw.parse::<Period>()?;

    let today = chrono::Local::now().date_naive();
    let range = period.resolve(today);
    let txs = db::all_transactions(conn)?;
    let subset = filter_range(&txs, &range);

    let stats = period_stats(&subset, Rounding::Exact);
    let expense_categories = category_breakdown(&subset, TxKind::Expense);
    let income_categories = category_breakdown(&subset, TxKind::Income);

    let out = StatsOutput {
        period: period_raw.to_string(),
        start: range.start.to_string(),
        end: range.end.to_string(),
        stats,
        expense_categories,
        income_categories,
    };

    if !maybe_print_json(json_flag, jsonl_flag, &out)? {
        println!("Period {} ({} to {})", out.period, out.start, out.end);
        let rows = vec![
            vec!["Income".into(), out.stats.total_income.to_string()],
            vec!["Expense".into(), out.stats.total_expense.to_string()],
            vec!["Balance".into(), out.stats.balance.to_string()],
            vec![
                "Savings rate".into(),
                format!("{}%", out.stats.savings_rate.round_dp(1)),
            ],
            vec![
                "Transactions".into(),
                out.stats.transaction_count.to_string(),
            ],
            vec![
                "Avg amount".into(),
                out.stats.avg_transaction_amount.round_dp(2).to_string(),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
        let cat_rows: Vec<Vec<String>> = out
            .expense_categories
            .iter()
            .map(|c| {
                vec![
                    c.category.clone(),
                    c.amount.to_string(),
                    c.count.to_string(),
                    format!("{}%", c.percentage),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Count", "Share"], cat_rows)
        );
    }
    Ok(())
}
