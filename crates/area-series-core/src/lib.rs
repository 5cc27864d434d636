//! Core engine for per-area daily epidemiological series.
//!
//! This crate provides the computational pieces behind a reporting
//! dashboard:
//!
//! - A [`Day`] record holding four cumulative counters (deaths, confirmed,
//!   recovered, tested) keyed by [`CounterKind`] (`day` module).
//! - An [`Area`] describing the identity and metadata of one reporting area,
//!   parsed from a fixed 8-field record (`area` module).
//! - A [`Series`] that owns a contiguous, calendar-aligned sequence of days
//!   for one area, grows it from a configurable epoch, and applies or merges
//!   data from independently aligned sources (`series` module).
//! - Read-side derived statistics (daily deltas, 3-day averages, a doubling
//!   time proxy, date windows) and presentation labels (`labels` module).
//!
//! Ingestion of raw source files, rendering, and persistence are left to
//! callers; this crate only consumes validated scalars and produces plain
//! sequences of numbers and strings.
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod area;
pub mod config;
pub mod day;
pub mod labels;
pub mod series;

pub use area::{Area, AreaParseError, slug};
pub use config::{ConfigError, SeriesConfig};
pub use day::{CounterKind, CounterKindError, Counters, Day};
pub use labels::{day_labels, format_count};
pub use series::{Series, SeriesError};
