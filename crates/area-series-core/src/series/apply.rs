//! Bulk application of source data onto a `Series`.
//!
//! Sources arrive as one counter kind's cumulative values plus the date of
//! the first value. The series grows at the end to fit the values, then
//! checks that its day 0 lines up with the source before writing.
//!
//! Failed alignment is not rolled back: any days appended to fit the
//! source stay in the series. Callers that abort a source on error should
//! treat the series as suspect rather than assume it is unchanged.

use chrono::NaiveDate;
use log::{debug, warn};
use snafu::prelude::*;

use crate::{
    day::{CounterKind, Counters, Day},
    series::{
        Series,
        error::{DateMismatchSnafu, DayOutOfRangeSnafu, SeriesError, StartDateMismatchSnafu},
    },
};

impl Series {
    /// Grow the series so it holds at least `len` days.
    fn extend_to(&mut self, len: usize) {
        if self.days.len() < len {
            let missing = len - self.days.len();
            debug!(
                "series {}: extending by {missing} days to fit {len} values",
                self.area.id
            );
            self.add_days(missing);
        }
    }

    fn ensure_starts_at(&self, start: NaiveDate) -> Result<(), SeriesError> {
        let Some(found) = self.first_date() else {
            return Ok(());
        };
        if found != start {
            warn!(
                "series {}: source starts {start} but series starts {found}",
                self.area.id
            );
            return StartDateMismatchSnafu {
                expected: start,
                found,
            }
            .fail();
        }
        Ok(())
    }

    fn apply_values(
        &mut self,
        start: NaiveDate,
        kind: CounterKind,
        values: &[i64],
        write: impl Fn(&mut Day, CounterKind, i64),
    ) -> Result<(), SeriesError> {
        self.extend_to(values.len());
        self.ensure_starts_at(start)?;

        for (day, &value) in self.days.iter_mut().zip(values) {
            write(day, kind, value);
        }
        Ok(())
    }

    /// Overwrite `kind` on each day with the matching entry of `values`,
    /// where `values[0]` is dated `start`.
    ///
    /// The series is first extended at the end to hold `values.len()` days.
    /// Days past the end of `values` keep their counters. Applying the same
    /// values twice leaves the series unchanged.
    ///
    /// # Errors
    /// [`SeriesError::StartDateMismatch`] if day 0 is not dated `start`.
    /// Days appended before the check are kept.
    pub fn set_data(
        &mut self,
        start: NaiveDate,
        kind: CounterKind,
        values: &[i64],
    ) -> Result<(), SeriesError> {
        self.apply_values(start, kind, values, Day::set)
    }

    /// Add each entry of `values` onto `kind`, where `values[0]` is dated
    /// `start`.
    ///
    /// Same extension and alignment rules as [`Series::set_data`]. Merging is
    /// additive: applying the same values twice doubles them.
    ///
    /// # Errors
    /// [`SeriesError::StartDateMismatch`] if day 0 is not dated `start`.
    pub fn merge_data(
        &mut self,
        start: NaiveDate,
        kind: CounterKind,
        values: &[i64],
    ) -> Result<(), SeriesError> {
        self.apply_values(start, kind, values, Day::merge)
    }

    /// Add every counter of `other` onto this series, day by day.
    ///
    /// This series is extended to `other.len()` days first. Only indices
    /// present in both are merged; any surplus on either side is left alone
    /// without error, so sources reporting slightly different trailing
    /// windows can still be combined.
    ///
    /// # Errors
    /// [`SeriesError::DateMismatch`] at the first shared index whose dates
    /// differ. Days merged before that index keep their new values.
    pub fn merge_series(&mut self, other: &Series) -> Result<(), SeriesError> {
        self.extend_to(other.len());

        if self.days.len() != other.len() {
            debug!(
                "series {}: merging {} days from series {} into {} days",
                self.area.id,
                other.len(),
                other.area.id,
                self.days.len()
            );
        }

        for (index, (day, incoming)) in self.days.iter_mut().zip(other.days()).enumerate() {
            ensure!(
                day.date() == incoming.date(),
                DateMismatchSnafu {
                    index,
                    expected: incoming.date(),
                    found: day.date(),
                }
            );
            day.merge_day(incoming);
        }
        Ok(())
    }

    /// Overwrite all counters of day `day_no` (one-based).
    ///
    /// Unlike the bulk writers this never extends the series.
    ///
    /// # Errors
    /// [`SeriesError::DayOutOfRange`] if `day_no` is 0 or past the last day.
    pub fn set_day_data(&mut self, day_no: usize, counters: Counters) -> Result<(), SeriesError> {
        let len = self.days.len();
        let day = day_no
            .checked_sub(1)
            .and_then(|index| self.days.get_mut(index))
            .context(DayOutOfRangeSnafu { day_no, len })?;
        day.set_all(counters);
        Ok(())
    }
}
