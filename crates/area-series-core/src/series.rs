//! Calendar-aligned daily series for one area.
//!
//! A [`Series`] owns its days exclusively. Day `i` is dated `first + i`
//! with no gaps: new days are only ever appended, either in bulk by
//! [`Series::add_days`] (continuing from the last day, or from the
//! configured epoch when empty) or one at a time by [`Series::add_day`]
//! with an explicit, strictly later date.
//!
//! Mutations are split by concern:
//!
//! - day lifecycle (this file),
//! - bulk application and merging of source data (`apply`),
//! - read-only derived statistics (`stats`).
//!
//! All mutations take `&mut self`, so reads can never observe a series in
//! the middle of an update.

mod apply;
pub mod error;
mod stats;

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use log::trace;
use serde::Serialize;
use snafu::prelude::*;

pub use error::SeriesError;

use crate::{
    area::{Area, AreaParseError},
    config::SeriesConfig,
    day::{Counters, Day},
    series::error::{InvalidDateSnafu, OutOfOrderSnafu},
};

/// One area's metadata plus its ordered sequence of days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    area: Area,
    updated_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    epoch: NaiveDate,
    days: Vec<Day>,
}

impl Series {
    /// Create an empty series for `area`, growing from `config.epoch`.
    pub fn new(area: Area, config: &SeriesConfig) -> Self {
        Self {
            area,
            updated_at: None,
            epoch: config.epoch,
            days: Vec::new(),
        }
    }

    /// Parse an 8-field area record and create an empty series for it.
    ///
    /// # Errors
    /// Returns [`AreaParseError`] if the record is malformed; see
    /// [`Area::from_record`].
    pub fn from_record<S: AsRef<str>>(
        fields: &[S],
        config: &SeriesConfig,
    ) -> Result<Self, AreaParseError> {
        Ok(Self::new(Area::from_record(fields)?, config))
    }

    /// Identity and metadata of the area.
    pub fn area(&self) -> &Area {
        &self.area
    }

    /// Date used for day 0 when the series grows from empty.
    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// First known update time of the upstream data, if any was recorded.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Record an upstream update time; only ever moves forward.
    pub fn set_updated(&mut self, updated: DateTime<Utc>) {
        if self.updated_at.is_none_or(|current| current < updated) {
            self.updated_at = Some(updated);
        }
    }

    /// All days, earliest first.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True if no day has been added yet.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Date of the first day, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(Day::date)
    }

    /// Date of the last day, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.last_day().map(Day::date)
    }

    /// The last day, or `None` when there is no data yet.
    ///
    /// `None` is distinct from a real day whose counters are all zero.
    pub fn last_day(&self) -> Option<&Day> {
        self.days.last()
    }

    /// The second-last day, or `None` with fewer than two days.
    pub fn penultimate_day(&self) -> Option<&Day> {
        self.days.len().checked_sub(2).map(|i| &self.days[i])
    }

    /// Append `count` blank days.
    ///
    /// The first new day is dated the day after the current last day, or
    /// the epoch when the series is empty; each following day adds one.
    /// Growth stops early only if the calendar runs out at `NaiveDate::MAX`.
    pub fn add_days(&mut self, count: usize) {
        let start = match self.last_date() {
            Some(last) => match last.succ_opt() {
                Some(next) => next,
                None => return,
            },
            None => self.epoch,
        };

        self.days.extend(start.iter_days().take(count).map(Day::new));
    }

    /// Append a single day with an explicit date and counters.
    ///
    /// This is the only way to place a day somewhere other than the epoch
    /// chain; callers mixing it with [`Series::add_days`] must keep the two
    /// consistent themselves.
    ///
    /// # Errors
    /// - [`SeriesError::InvalidDate`] if `date` is the unset date
    ///   (`NaiveDate::default()`).
    /// - [`SeriesError::OutOfOrder`] if `date` is not strictly after the
    ///   current last day.
    pub fn add_day(&mut self, date: NaiveDate, counters: Counters) -> Result<(), SeriesError> {
        ensure!(date != NaiveDate::default(), InvalidDateSnafu);

        if let Some(last) = self.last_date() {
            ensure!(last < date, OutOfOrderSnafu { date, last });
        }

        trace!("series {}: add day {date}", self.area.id);
        self.days.push(Day::with_counters(date, counters));
        Ok(())
    }

    /// Display title: "Global", the country, or "Province (Country)".
    pub fn title(&self) -> String {
        self.area.title()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let area = &self.area;
        if area.is_global() {
            write!(f, "Global ({})", self.days.len())
        } else if area.province.is_empty() {
            write!(f, "{} ({})", area.country, self.days.len())
        } else {
            write!(f, "{}, {} ({})", area.province, area.country, self.days.len())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_util::*;
    use super::*;

    #[test]
    fn add_days_from_empty_starts_at_epoch() {
        let mut s = series("France", "");
        s.add_days(3);

        let dates: Vec<NaiveDate> = s.days().iter().map(Day::date).collect();
        assert_eq!(dates, vec![epoch(), date(2020, 1, 23), date(2020, 1, 24)]);
        assert!(s.days().iter().all(|d| d.counters() == Counters::default()));
    }

    #[test]
    fn add_days_continues_after_last_day() {
        let mut s = series("France", "");
        s.add_days(2);
        s.add_days(2);
        assert_eq!(s.len(), 4);
        assert_eq!(s.last_date(), Some(date(2020, 1, 25)));
    }

    #[test]
    fn add_days_uses_injected_epoch() {
        let mut s = series_with_epoch(date(2021, 12, 31));
        s.add_days(2);
        assert_eq!(s.first_date(), Some(date(2021, 12, 31)));
        assert_eq!(s.last_date(), Some(date(2022, 1, 1)));
    }

    #[test]
    fn add_days_continues_from_explicit_first_day() {
        let mut s = series("Spain", "");
        s.add_day(date(2020, 3, 1), Counters::new(1, 2, 3, 4)).unwrap();
        s.add_days(1);
        assert_eq!(s.last_date(), Some(date(2020, 3, 2)));
    }

    #[test]
    fn add_day_rejects_unset_date() {
        let mut s = series("Spain", "");
        let err = s
            .add_day(NaiveDate::default(), Counters::default())
            .unwrap_err();
        assert_eq!(err, SeriesError::InvalidDate);
        assert!(err.is_alignment());
        assert!(s.is_empty());
    }

    #[test]
    fn add_day_rejects_equal_or_earlier_dates() {
        let mut s = series("Spain", "");
        s.add_day(date(2020, 3, 2), Counters::default()).unwrap();

        for d in [date(2020, 3, 2), date(2020, 3, 1)] {
            let err = s.add_day(d, Counters::default()).unwrap_err();
            assert_eq!(
                err,
                SeriesError::OutOfOrder {
                    date: d,
                    last: date(2020, 3, 2)
                }
            );
        }
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn last_and_penultimate_degrade_to_none() {
        let mut s = series("Italy", "");
        assert!(s.last_day().is_none());
        assert!(s.penultimate_day().is_none());

        s.add_days(1);
        assert_eq!(s.last_day().map(Day::date), Some(epoch()));
        assert!(s.penultimate_day().is_none());

        s.add_days(1);
        assert_eq!(s.penultimate_day().map(Day::date), Some(epoch()));
    }

    #[test]
    fn set_updated_only_moves_forward() {
        use chrono::TimeZone;

        let mut s = series("Italy", "");
        let early = Utc.with_ymd_and_hms(2020, 4, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2020, 4, 2, 0, 0, 0).unwrap();

        s.set_updated(late);
        s.set_updated(early);
        assert_eq!(s.updated_at(), Some(late));
    }

    #[test]
    fn display_includes_day_count() {
        let mut global = series("", "");
        global.add_days(2);
        assert_eq!(global.to_string(), "Global (2)");
        assert_eq!(series("Italy", "").to_string(), "Italy (0)");
        assert_eq!(series("China", "Hubei").to_string(), "Hubei, China (0)");
        assert_eq!(series("China", "Hubei").title(), "Hubei (China)");
    }
}
