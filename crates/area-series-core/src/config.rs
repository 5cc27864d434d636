//! Series configuration.
//!
//! The only tunable today is the default epoch: the calendar date assigned
//! to the first day of a series that grows from empty via
//! [`Series::add_days`](crate::Series::add_days). Each series carries its own
//! copy, injected at construction, so two series built from different
//! configs never influence each other.
//!
//! ```
//! use area_series_core::SeriesConfig;
//!
//! let cfg = SeriesConfig::from_json_str(r#"{ "epoch": "2020-03-01" }"#).unwrap();
//! assert_eq!(cfg.epoch.to_string(), "2020-03-01");
//!
//! // Missing fields fall back to the defaults.
//! let cfg = SeriesConfig::from_json_str("{}").unwrap();
//! assert_eq!(cfg, SeriesConfig::default());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

/// Errors produced while loading a [`SeriesConfig`].
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this schema.
    #[snafu(display("invalid series config JSON: {source}"))]
    Json {
        /// Underlying serde_json error.
        source: serde_json::Error,
    },

    /// The configured epoch is the unset date and cannot anchor a series.
    #[snafu(display("series epoch must be set (got {epoch})"))]
    InvalidEpoch {
        /// The rejected epoch.
        epoch: NaiveDate,
    },
}

/// Configuration shared by all series built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Date of day 0 for series that are grown from empty.
    pub epoch: NaiveDate,
}

impl SeriesConfig {
    /// Default epoch: 2020-01-22, the first day covered by the upstream
    /// daily reports.
    pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 22) {
        Some(d) => d,
        None => panic!("default epoch is a valid calendar date"),
    };

    /// Build a config with an explicit epoch.
    pub fn with_epoch(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    /// Parse a config from a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] for malformed JSON or an unparsable
    /// date, and [`ConfigError::InvalidEpoch`] if the epoch is the unset
    /// date (`NaiveDate::default()`).
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let cfg: SeriesConfig = serde_json::from_str(input).context(JsonSnafu)?;
        ensure!(
            cfg.epoch != NaiveDate::default(),
            InvalidEpochSnafu { epoch: cfg.epoch }
        );
        Ok(cfg)
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            epoch: Self::DEFAULT_EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_epoch_is_jan_22_2020() {
        let cfg = SeriesConfig::default();
        assert_eq!(cfg.epoch, NaiveDate::from_ymd_opt(2020, 1, 22).unwrap());
    }

    #[test]
    fn from_json_overrides_epoch() {
        let cfg = SeriesConfig::from_json_str(r#"{"epoch":"2021-06-30"}"#).unwrap();
        assert_eq!(cfg.epoch, NaiveDate::from_ymd_opt(2021, 6, 30).unwrap());
    }

    #[test]
    fn from_json_rejects_malformed_date() {
        let err = SeriesConfig::from_json_str(r#"{"epoch":"30/06/2021"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn from_json_rejects_unset_epoch() {
        let err = SeriesConfig::from_json_str(r#"{"epoch":"1970-01-01"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEpoch { .. }));
    }

    #[test]
    fn config_serializes_epoch_as_iso_date() {
        let json = serde_json::to_string(&SeriesConfig::default()).unwrap();
        assert_eq!(json, r#"{"epoch":"2020-01-22"}"#);
    }
}
