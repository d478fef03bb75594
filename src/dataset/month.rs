use chrono::{Datelike, NaiveDate};
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use indoc::formatdoc;
use std::fmt;
use std::str::FromStr;

// ----------------------------------------------------------------------------
// Trip Month

/// A calendar month of published trip records.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TripMonth {
    year: i32,
    month: u32,
}

impl TripMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, Report> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| eyre!("Invalid month: {year}-{month}. Months run from 1 to 12."))?;
        Ok(TripMonth { year, month })
    }

    /// The month immediately after this one.
    fn succ(&self) -> TripMonth {
        match self.month {
            12 => TripMonth { year: self.year + 1, month: 1 },
            _ => TripMonth { year: self.year, month: self.month + 1 },
        }
    }
}

impl fmt::Display for TripMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for TripMonth {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self, Report> {
        // Pin to the first day so chrono can do the parsing.
        let date = NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d")
            .wrap_err_with(|| {
                eyre!("Month is invalid: {input:?}. Example of a valid month: 2009-01")
            })?;
        TripMonth::new(date.year(), date.month())
    }
}

// ----------------------------------------------------------------------------
// Month Range

/// The months from start to end inclusive, in chronological order.
#[derive(Clone, Debug)]
pub struct MonthRange {
    next: Option<TripMonth>,
    end: TripMonth,
}

impl MonthRange {
    pub fn new(start: TripMonth, end: TripMonth) -> Result<Self, Report> {
        if start > end {
            return Err(eyre!(formatdoc!(
                "Invalid month range.
                Start {start} is after end {end}."
            )));
        }
        Ok(MonthRange { next: Some(start), end })
    }
}

impl Iterator for MonthRange {
    type Item = TripMonth;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = (current < self.end).then(|| current.succ());
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) => {
                ((self.end.year - next.year) * 12 + self.end.month as i32
                    - next.month as i32
                    + 1) as usize
            }
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthRange {}
