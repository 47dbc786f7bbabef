// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxKind;
use crate::utils::{parse_amount, parse_date};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rusqlite::{Connection, params};
use std::str::FromStr;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(conn, sub),
        _ => Ok(()),
    }
}

/// Import `date,type,category,amount,note` rows. The whole file lands in
/// one SQLite transaction, so a bad row imports nothing.
fn import_transactions(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let tx = conn.transaction()?;
    let mut imported = 0usize;

    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim().to_string();
        let kind_raw = rec.get(1).context("type missing")?.trim().to_string();
        let category = rec.get(2).context("category missing")?.trim().to_string();
        let amount_raw = rec.get(3).context("amount missing")?.trim().to_string();
        let note = rec
            .get(4)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        let date = parse_date(&date_raw)
            .with_context(|| format!("Invalid transaction date '{}'", date_raw))?;
        let kind = TxKind::from_str(&kind_raw)
            .with_context(|| format!("Invalid transaction type '{}'", kind_raw))?;
        let amount = parse_amount(&amount_raw)
            .with_context(|| format!("Invalid amount '{}' for {}", amount_raw, category))?;
        if category.is_empty() {
            anyhow::bail!("Empty category on {}", date_raw);
        }

        tx.execute(
            "INSERT INTO transactions(date, type, category, amount, note) \
             VALUES (?1,?2,?3,?4,?5)",
            params![
                date.to_string(),
                kind.as_str(),
                category,
                amount.to_string(),
                note.as_deref()
            ],
        )?;
        imported += 1;
    }
    tx.commit()?;
    println!("Imported {} transactions from {}", imported, path);
    Ok(())
}
