//! One calendar day of cumulative counters.
//!
//! A [`Day`] never validates its own position: the owning
//! [`Series`](crate::Series) guarantees that day `i` is dated `epoch + i`
//! and only hands out shared references to callers.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

/// Errors raised when an untyped counter kind enters the crate.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum CounterKindError {
    /// A numeric kind code outside `0..=3`.
    #[snafu(display("invalid counter kind code {code} (expected 0..=3)"))]
    InvalidKind {
        /// The rejected code.
        code: u8,
    },

    /// A kind name that is not one of deaths, confirmed, recovered, tested.
    #[snafu(display(
        "unknown counter kind '{name}' (expected deaths|confirmed|recovered|tested)"
    ))]
    UnknownName {
        /// The rejected name.
        name: String,
    },
}

/// Which counter of a [`Day`] an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterKind {
    /// Cumulative deaths.
    Deaths,
    /// Cumulative confirmed cases.
    Confirmed,
    /// Cumulative recovered cases.
    Recovered,
    /// Cumulative tests performed.
    Tested,
}

impl CounterKind {
    /// All kinds in code order.
    pub const ALL: [CounterKind; 4] = [
        CounterKind::Deaths,
        CounterKind::Confirmed,
        CounterKind::Recovered,
        CounterKind::Tested,
    ];

    /// Stable numeric code used by ingestion sources.
    pub fn code(self) -> u8 {
        match self {
            CounterKind::Deaths => 0,
            CounterKind::Confirmed => 1,
            CounterKind::Recovered => 2,
            CounterKind::Tested => 3,
        }
    }

    /// Lower-case name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            CounterKind::Deaths => "deaths",
            CounterKind::Confirmed => "confirmed",
            CounterKind::Recovered => "recovered",
            CounterKind::Tested => "tested",
        }
    }
}

impl TryFrom<u8> for CounterKind {
    type Error = CounterKindError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CounterKind::Deaths),
            1 => Ok(CounterKind::Confirmed),
            2 => Ok(CounterKind::Recovered),
            3 => Ok(CounterKind::Tested),
            _ => InvalidKindSnafu { code }.fail(),
        }
    }
}

impl FromStr for CounterKind {
    type Err = CounterKindError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let name = input.trim().to_ascii_lowercase();
        CounterKind::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .context(UnknownNameSnafu {
                name: input.to_string(),
            })
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four counters of one day, used for whole-day writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Cumulative deaths.
    pub deaths: i64,
    /// Cumulative confirmed cases.
    pub confirmed: i64,
    /// Cumulative recovered cases.
    pub recovered: i64,
    /// Cumulative tests performed.
    pub tested: i64,
}

impl Counters {
    /// Shorthand constructor in kind order.
    pub fn new(deaths: i64, confirmed: i64, recovered: i64, tested: i64) -> Self {
        Self {
            deaths,
            confirmed,
            recovered,
            tested,
        }
    }
}

/// One calendar day's cumulative counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    date: NaiveDate,
    #[serde(flatten)]
    counters: Counters,
}

impl Day {
    /// A blank day (all counters zero) on `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            counters: Counters::default(),
        }
    }

    /// A day on `date` with the given counters.
    pub fn with_counters(date: NaiveDate, counters: Counters) -> Self {
        Self { date, counters }
    }

    /// The calendar date of this day.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// All four counters.
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Cumulative deaths.
    pub fn deaths(&self) -> i64 {
        self.counters.deaths
    }

    /// Cumulative confirmed cases.
    pub fn confirmed(&self) -> i64 {
        self.counters.confirmed
    }

    /// Cumulative recovered cases.
    pub fn recovered(&self) -> i64 {
        self.counters.recovered
    }

    /// Cumulative tests performed.
    pub fn tested(&self) -> i64 {
        self.counters.tested
    }

    /// Read the counter for `kind`.
    pub fn get(&self, kind: CounterKind) -> i64 {
        match kind {
            CounterKind::Deaths => self.counters.deaths,
            CounterKind::Confirmed => self.counters.confirmed,
            CounterKind::Recovered => self.counters.recovered,
            CounterKind::Tested => self.counters.tested,
        }
    }

    fn slot(&mut self, kind: CounterKind) -> &mut i64 {
        match kind {
            CounterKind::Deaths => &mut self.counters.deaths,
            CounterKind::Confirmed => &mut self.counters.confirmed,
            CounterKind::Recovered => &mut self.counters.recovered,
            CounterKind::Tested => &mut self.counters.tested,
        }
    }

    /// Overwrite the counter for `kind`.
    pub fn set(&mut self, kind: CounterKind, value: i64) {
        *self.slot(kind) = value;
    }

    /// Add `value` onto the counter for `kind`.
    ///
    /// Used when several sources each report a partial contribution for the
    /// same date.
    pub fn merge(&mut self, kind: CounterKind, value: i64) {
        *self.slot(kind) += value;
    }

    /// Overwrite all four counters at once.
    pub fn set_all(&mut self, counters: Counters) {
        self.counters = counters;
    }

    /// Add every counter of `other` onto this day.
    ///
    /// Dates are not compared here; the series checks alignment first.
    pub fn merge_day(&mut self, other: &Day) {
        for kind in CounterKind::ALL {
            self.merge(kind, other.get(kind));
        }
    }
}
