//! Integration tests for read-side statistics over realistic series.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use area_series_core::{
    Area, CounterKind, Series, SeriesConfig, day_labels, format_count, labels::date_label,
};
use chrono::NaiveDate;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn series_from(epoch: NaiveDate, deaths: &[i64], confirmed: &[i64]) -> Series {
    let mut s = Series::new(
        Area {
            id: 7,
            country: "Spain".into(),
            ..Area::default()
        },
        &SeriesConfig::with_epoch(epoch),
    );
    s.set_data(epoch, CounterKind::Deaths, deaths).unwrap();
    s.set_data(epoch, CounterKind::Confirmed, confirmed).unwrap();
    s
}

#[test]
fn headline_figures_for_a_growing_outbreak() -> TestResult {
    let epoch = date(2020, 3, 10);
    let s = series_from(
        epoch,
        &[10, 17, 28, 35, 54, 55, 133, 195, 289, 342],
        &[1_695, 2_277, 3_146, 5_232, 6_391, 7_798, 9_942, 11_748, 13_910, 17_963],
    );

    assert_eq!(s.total_deaths(), 342);
    assert_eq!(s.deaths_today(), 53);
    assert_eq!(s.average_deaths(), (342 - 195) / 3);
    assert_eq!(s.confirmed_today(), 4_053);
    assert_eq!(format_count(s.total_confirmed()), "18.0k");

    // Half of 342 is 171: 289 and 195 qualify, 133 does not.
    assert_eq!(s.double_death_days(), Some(2));
    // Half of 17963 is 8981: 13910, 11748, 9942 qualify.
    assert_eq!(s.double_confirmed_days(), Some(3));

    assert_eq!(s.fetch_date(date(2020, 3, 14), CounterKind::Deaths), 54);
    Ok(())
}

#[test]
fn daily_series_sum_back_to_totals() {
    let s = series_from(
        date(2020, 1, 22),
        &[0, 5, 12, 12, 20],
        &[4, 9, 30, 31, 60],
    );

    assert_eq!(s.deaths_daily(), vec![0, 5, 7, 0, 8]);
    assert_eq!(s.deaths_daily().iter().sum::<i64>(), s.total_deaths());
    assert_eq!(s.confirmed_daily().iter().sum::<i64>(), s.total_confirmed());
}

#[test]
fn deaths_from_threshold_aligns_with_day_labels() {
    let s = series_from(
        date(2020, 2, 20),
        &[0, 1, 3, 10, 12, 25, 40],
        &[0, 0, 0, 0, 0, 0, 0],
    );

    let window = s.deaths_from(10).unwrap();
    assert_eq!(window, vec![10, 12, 25]);
    assert_eq!(day_labels(window.len()), vec!["Day 1", "Day 2", "Day 3"]);

    assert_eq!(s.deaths_from(41), None);
}

#[test]
fn date_labels_follow_the_series_calendar() {
    let s = series_from(date(2020, 12, 30), &[0, 0, 0], &[0, 0, 0]);
    let labels: Vec<String> = s.dates().collect();
    assert_eq!(labels, vec!["Dec 30", "Dec 31", "Jan 1"]);
    assert_eq!(labels[0], date_label(s.first_date().unwrap()));
}

#[test]
fn early_series_degrade_instead_of_failing() {
    let empty = Series::new(Area::default(), &SeriesConfig::default());
    assert_eq!(empty.total_confirmed(), 0);
    assert_eq!(empty.confirmed_today(), 0);
    assert_eq!(empty.average_confirmed(), 0);
    assert_eq!(empty.double_confirmed_days(), None);
    assert_eq!(empty.deaths_from(0), None);
    assert_eq!(empty.dates().count(), 0);

    // A real zero-count day is data, not absence.
    let mut zero = Series::new(Area::default(), &SeriesConfig::default());
    zero.add_days(1);
    assert!(zero.last_day().is_some());
    assert_eq!(zero.total_confirmed(), 0);
    assert_eq!(zero.double_confirmed_days(), Some(0));
}
