// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxKind;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Scan stored rows for anything the analytics pipeline assumes away:
/// unparseable dates/amounts, unknown types, negative amounts, empty
/// categories.
pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    let mut stmt =
        conn.prepare("SELECT id, date, type, category, amount FROM transactions ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let kind: String = r.get(2)?;
        let category: String = r.get(3)?;
        let amount: String = r.get(4)?;

        if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            rows.push(vec!["invalid_date".into(), format!("tx {}: '{}'", id, date)]);
        }
        if TxKind::from_str(&kind).is_err() {
            rows.push(vec!["invalid_type".into(), format!("tx {}: '{}'", id, kind)]);
        }
        match amount.parse::<Decimal>() {
            Ok(a) if a < Decimal::ZERO => {
                rows.push(vec![
                    "negative_amount".into(),
                    format!("tx {}: {}", id, amount),
                ]);
            }
            Ok(_) => {}
            Err(_) => {
                rows.push(vec![
                    "invalid_amount".into(),
                    format!("tx {}: '{}'", id, amount),
                ]);
            }
        }
        if category.trim().is_empty() {
            rows.push(vec!["empty_category".into(), format!("tx {}", id)]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
