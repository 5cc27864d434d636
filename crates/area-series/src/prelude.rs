//! Wrapper prelude.
//!
//! Downstream code should prefer importing from this prelude instead of
//! depending on `area-series-core` module paths.

pub use crate::{
    Area, AreaParseError, ConfigError, CounterKind, Counters, Day, Series, SeriesConfig,
    SeriesError, format_count,
};
