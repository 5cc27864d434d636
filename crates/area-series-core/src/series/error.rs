//! Error types and SNAFU context selectors for `series`.
//!
//! Alignment errors (`StartDateMismatch`, `DateMismatch`, `OutOfOrder`,
//! `InvalidDate`) mean a source does not line up with the calendar of the
//! series; range errors (`DayOutOfRange`) mean an index past the current
//! day count. Nothing here is retried internally.

use chrono::NaiveDate;
use snafu::prelude::*;

/// Errors from series mutation operations.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum SeriesError {
    /// The first value of a bulk write is dated differently from day 0.
    #[snafu(display("series: mismatch on start date for data: {expected} (series starts {found})"))]
    StartDateMismatch {
        /// Start date supplied with the values.
        expected: NaiveDate,
        /// Date of day 0 in the series.
        found: NaiveDate,
    },

    /// Two series being merged disagree on the date at a shared index.
    #[snafu(display(
        "series: date mismatch merging day {index}: incoming {expected}, series has {found}"
    ))]
    DateMismatch {
        /// Zero-based index of the offending day.
        index: usize,
        /// Date of the incoming day.
        expected: NaiveDate,
        /// Date of the existing day.
        found: NaiveDate,
    },

    /// An explicit day is not strictly after the current last day.
    #[snafu(display("series: invalid date {date} added after {last}"))]
    OutOfOrder {
        /// Date that was rejected.
        date: NaiveDate,
        /// Date of the current last day.
        last: NaiveDate,
    },

    /// An explicit day carries the unset date.
    #[snafu(display("series: invalid unset date in add_day"))]
    InvalidDate,

    /// A one-based day number past the end of the series.
    #[snafu(display("series: day {day_no} out of range for set day (len {len})"))]
    DayOutOfRange {
        /// One-based day number requested.
        day_no: usize,
        /// Current number of days.
        len: usize,
    },
}

impl SeriesError {
    /// True for errors caused by a source whose dates do not line up.
    pub fn is_alignment(&self) -> bool {
        matches!(
            self,
            SeriesError::StartDateMismatch { .. }
                | SeriesError::DateMismatch { .. }
                | SeriesError::OutOfOrder { .. }
                | SeriesError::InvalidDate
        )
    }

    /// True for errors caused by an index outside the current day count.
    pub fn is_range(&self) -> bool {
        matches!(self, SeriesError::DayOutOfRange { .. })
    }
}
