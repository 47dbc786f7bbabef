// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Parse a monetary amount. Amounts are unsigned magnitudes; direction is
/// carried by the transaction type.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d < Decimal::ZERO {
        anyhow::bail!(
            "Invalid amount '{}': amounts must be non-negative, use --type expense instead",
            s
        );
    }
    Ok(d)
}

/// Round to a whole number, halves away from zero.
pub fn round_whole(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[allow(dead_code)]
pub fn fmt_money(d: &Decimal) -> String {
    format!("{}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

static CATEGORY_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Food", "#FF6B6B"),
        ("Transport", "#4ECDC4"),
        ("Shopping", "#FFD93D"),
        ("Entertainment", "#A78BFA"),
        ("Health", "#F472B6"),
        ("Education", "#60A5FA"),
        ("Bills", "#FB923C"),
        ("Rent", "#F87171"),
        ("Travel", "#34D399"),
        ("Salary", "#10B981"),
        ("Investment", "#6366F1"),
        ("Gifts", "#FBBF24"),
        ("Other", "#9CA3AF"),
    ])
});

pub const DEFAULT_CATEGORY_COLOR: &str = "#9CA3AF";

pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .get(category)
        .copied()
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}
