//! Read-side statistics derived from the day sequence.
//!
//! Nothing here mutates the series or fails: when there are not enough
//! days yet, results degrade to zero or an empty sequence. The one
//! exception is the doubling-time proxy, which has no meaning without a
//! last day and therefore returns `Option`.

use chrono::NaiveDate;

use crate::{
    day::{CounterKind, Day},
    labels::date_label,
    series::Series,
};

/// Number of trailing days covered by the rolling average.
const AVERAGE_WINDOW: usize = 3;

impl Series {
    /// Cumulative values of `kind`, one per day, earliest first.
    pub fn cumulative(&self, kind: CounterKind) -> Vec<i64> {
        self.days.iter().map(|d| d.get(kind)).collect()
    }

    /// Day-over-day increase of `kind`; day 0 is measured against zero.
    pub fn daily(&self, kind: CounterKind) -> Vec<i64> {
        self.days
            .iter()
            .scan(0, |previous, day| {
                let value = day.get(kind);
                let delta = value - *previous;
                *previous = value;
                Some(delta)
            })
            .collect()
    }

    /// Latest cumulative value of `kind`, or 0 with no days.
    pub fn total(&self, kind: CounterKind) -> i64 {
        self.last_day().map_or(0, |d| d.get(kind))
    }

    /// Increase of `kind` on the last day over the day before.
    ///
    /// Missing days count as zero, so a single-day series reports its whole
    /// total.
    pub fn today(&self, kind: CounterKind) -> i64 {
        self.total(kind) - self.penultimate_day().map_or(0, |d| d.get(kind))
    }

    /// Average daily increase of `kind` over the last three days.
    ///
    /// Computed as `(last - third_from_last) / 3` with integer division;
    /// 0 with fewer than three days.
    pub fn average_daily(&self, kind: CounterKind) -> i64 {
        let n = self.days.len();
        if n < AVERAGE_WINDOW {
            return 0;
        }
        let span = self.days[n - 1].get(kind) - self.days[n - AVERAGE_WINDOW].get(kind);
        span / AVERAGE_WINDOW as i64
    }

    /// Days since `kind` was roughly half its latest value.
    ///
    /// Walks back from the day before the last, counting consecutive days
    /// whose value is at least `last / 2`, and stops at the first day below
    /// that. Returns `None` on an empty series.
    pub fn doubling_days(&self, kind: CounterKind) -> Option<usize> {
        let (last, earlier) = self.days.split_last()?;
        let half = last.get(kind) / 2;
        Some(
            earlier
                .iter()
                .rev()
                .take_while(|d| d.get(kind) >= half)
                .count(),
        )
    }

    /// Value of `kind` on `date`, or 0 if the series has no such day.
    pub fn fetch_date(&self, date: NaiveDate, kind: CounterKind) -> i64 {
        self.days
            .iter()
            .find(|d| d.date() == date)
            .map_or(0, |d| d.get(kind))
    }

    /// Cumulative deaths from the first day reaching `n` deaths.
    ///
    /// The window runs up to but excluding the last day, whose figures are
    /// usually still incomplete. `None` if deaths never reach `n`.
    pub fn deaths_from(&self, n: i64) -> Option<Vec<i64>> {
        let start = self.days.iter().position(|d| d.deaths() >= n)?;
        let end = self.days.len() - 1;
        Some(self.days[start..end].iter().map(Day::deaths).collect())
    }

    /// Short date labels ("Jan 2"), one per day.
    ///
    /// The iterator is lazy and `Clone`, so it can be walked more than once.
    pub fn dates(&self) -> impl Iterator<Item = String> + Clone + '_ {
        self.days.iter().map(|d| date_label(d.date()))
    }

    /// Cumulative deaths per day.
    pub fn deaths(&self) -> Vec<i64> {
        self.cumulative(CounterKind::Deaths)
    }

    /// Cumulative confirmed cases per day.
    pub fn confirmed(&self) -> Vec<i64> {
        self.cumulative(CounterKind::Confirmed)
    }

    /// Cumulative recovered cases per day.
    pub fn recovered(&self) -> Vec<i64> {
        self.cumulative(CounterKind::Recovered)
    }

    /// Cumulative tests per day.
    pub fn tested(&self) -> Vec<i64> {
        self.cumulative(CounterKind::Tested)
    }

    /// Deaths reported each day.
    pub fn deaths_daily(&self) -> Vec<i64> {
        self.daily(CounterKind::Deaths)
    }

    /// Confirmed cases reported each day.
    pub fn confirmed_daily(&self) -> Vec<i64> {
        self.daily(CounterKind::Confirmed)
    }

    /// Latest cumulative deaths.
    pub fn total_deaths(&self) -> i64 {
        self.total(CounterKind::Deaths)
    }

    /// Latest cumulative confirmed cases.
    pub fn total_confirmed(&self) -> i64 {
        self.total(CounterKind::Confirmed)
    }

    /// Latest cumulative recovered cases.
    pub fn total_recovered(&self) -> i64 {
        self.total(CounterKind::Recovered)
    }

    /// Latest cumulative tests.
    pub fn total_tested(&self) -> i64 {
        self.total(CounterKind::Tested)
    }

    /// Deaths reported on the last day.
    pub fn deaths_today(&self) -> i64 {
        self.today(CounterKind::Deaths)
    }

    /// Confirmed cases reported on the last day.
    pub fn confirmed_today(&self) -> i64 {
        self.today(CounterKind::Confirmed)
    }

    /// Average daily deaths over the last three days.
    pub fn average_deaths(&self) -> i64 {
        self.average_daily(CounterKind::Deaths)
    }

    /// Average daily confirmed cases over the last three days.
    pub fn average_confirmed(&self) -> i64 {
        self.average_daily(CounterKind::Confirmed)
    }

    /// Doubling-time proxy for deaths; see [`Series::doubling_days`].
    pub fn double_death_days(&self) -> Option<usize> {
        self.doubling_days(CounterKind::Deaths)
    }

    /// Doubling-time proxy for confirmed cases; see [`Series::doubling_days`].
    pub fn double_confirmed_days(&self) -> Option<usize> {
        self.doubling_days(CounterKind::Confirmed)
    }
}
