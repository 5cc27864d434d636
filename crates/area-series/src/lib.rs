//! # area-series
//!
//! Per-area daily series of cumulative epidemiological counters, with the
//! derived statistics a dashboard needs (daily deltas, 3-day averages,
//! doubling-time proxy, compact labels).
//!
//! This crate is the supported public entry point and provides a small,
//! stable surface over `area-series-core`.
//!
//! ## Example
//!
//! ```
//! use area_series::prelude::*;
//!
//! let config = SeriesConfig::default();
//! let row = ["France", "", "7", "46.2", "2.2", "67000000", "2020-03-17", "#0055a4"];
//! let mut france = Series::from_record(&row, &config).unwrap();
//!
//! france
//!     .set_data(config.epoch, CounterKind::Deaths, &[0, 2, 5, 9])
//!     .unwrap();
//! assert_eq!(france.deaths_daily(), vec![0, 2, 3, 4]);
//! assert_eq!(france.to_string(), "France (4)");
//! ```

/// Convenience prelude with the stable, supported surface.
pub mod prelude;

pub use area_series_core::area::{AREA_RECORD_FIELDS, Area, AreaParseError, slug};
pub use area_series_core::config::{ConfigError, SeriesConfig};
pub use area_series_core::day::{CounterKind, CounterKindError, Counters, Day};
pub use area_series_core::labels::{date_label, day_labels, format_count};
pub use area_series_core::series::{Series, SeriesError};
