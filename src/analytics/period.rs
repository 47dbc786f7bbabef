// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, Months, NaiveDate};
use std::str::FromStr;

/// Inclusive date range. Ranges are date-granular, which subsumes the
/// end-of-day inclusivity of timestamp-based filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Symbolic reporting window, resolved against an explicit reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
    Year,
    All,
}

impl Period {
    /// Resolve to a concrete range ending at `today`. `All` is pinned to an
    /// epoch far enough back to include any recorded transaction.
    pub fn resolve(self, today: NaiveDate) -> DateRange {
        let start = match self {
            Period::Week => today
                .checked_sub_days(Days::new(7))
                .unwrap_or(NaiveDate::MIN),
            Period::Month => today
                .checked_sub_months(Months::new(1))
                .unwrap_or(NaiveDate::MIN),
            Period::Year => today
                .checked_sub_months(Months::new(12))
                .unwrap_or(NaiveDate::MIN),
            Period::All => NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN),
        };
        DateRange { start, end: today }
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            "all" => Ok(Period::All),
            other => Err(anyhow::anyhow!(
                "Invalid period '{}', expected week|month|year|all",
                other
            )),
        }
    }
}

/// First through last calendar day of the given month. None when the month
/// is outside 1-12 or the year is unrepresentable.
pub fn month_range(year: i32, month: u32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = start
        .checked_add_months(Months::new(1))?
        .checked_sub_days(Days::new(1))?;
    Some(DateRange { start, end })
}

/// Jan 1 through Dec 31 of the given year.
pub fn year_range(year: i32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some(DateRange { start, end })
}
