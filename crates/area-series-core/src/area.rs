//! Area identity and metadata.
//!
//! An [`Area`] is the global aggregate (no country, no province), a country
//! (country only) or a province within a country. Areas are built from a
//! fixed-width 8-field record supplied by the ingestion layer:
//!
//! ```text
//! country, province, area_id, latitude, longitude, population, lockdown, color
//! ```
//!
//! `lockdown` is `YYYY-MM-DD` or empty when no lockdown was recorded.
//!
//! Lookups by human-typed names or URL path segments go through [`slug`],
//! which lower-cases and replaces spaces with hyphens.

use std::num::{ParseFloatError, ParseIntError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

/// Number of fields in an area record.
pub const AREA_RECORD_FIELDS: usize = 8;

const LOCKDOWN_FORMAT: &str = "%Y-%m-%d";

const EUROPEAN_COUNTRIES: [&str; 10] = [
    "United Kingdom",
    "France",
    "Italy",
    "Belgium",
    "Spain",
    "Germany",
    "Netherlands",
    "Switzerland",
    "Sweden",
    "Portugal",
];

/// Errors produced while parsing an area record.
///
/// Every variant names the offending field and carries the full row so
/// ingestion can log it and skip the source.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AreaParseError {
    /// The record does not have exactly eight fields.
    #[snafu(display("areas: expected 8 fields, found {found} at row: {row}"))]
    FieldCount {
        /// Number of fields present.
        found: usize,
        /// The offending row, comma-joined.
        row: String,
    },

    /// The area id is not an integer.
    #[snafu(display("areas: invalid area id at row: {row}: {source}"))]
    InvalidAreaId {
        /// The offending row, comma-joined.
        row: String,
        /// Integer parse failure.
        source: ParseIntError,
    },

    /// The latitude is not a number.
    #[snafu(display("areas: invalid latitude at row: {row}: {source}"))]
    InvalidLatitude {
        /// The offending row, comma-joined.
        row: String,
        /// Float parse failure.
        source: ParseFloatError,
    },

    /// The longitude is not a number.
    #[snafu(display("areas: invalid longitude at row: {row}: {source}"))]
    InvalidLongitude {
        /// The offending row, comma-joined.
        row: String,
        /// Float parse failure.
        source: ParseFloatError,
    },

    /// The population is not an integer.
    #[snafu(display("areas: invalid population at row: {row}: {source}"))]
    InvalidPopulation {
        /// The offending row, comma-joined.
        row: String,
        /// Integer parse failure.
        source: ParseIntError,
    },

    /// The lockdown date is present but not `YYYY-MM-DD`.
    #[snafu(display("areas: invalid lockdown '{value}' at row: {row}: {source}"))]
    InvalidLockdown {
        /// The offending row, comma-joined.
        row: String,
        /// The rejected lockdown field.
        value: String,
        /// Date parse failure.
        source: chrono::ParseError,
    },
}

/// Convert a name into a form suitable for URLs and loose matching.
///
/// ```
/// assert_eq!(area_series_core::slug("United Kingdom"), "united-kingdom");
/// ```
pub fn slug(value: &str) -> String {
    value.to_lowercase().replace(' ', "-")
}

/// Identity and metadata for one reporting area.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Area {
    /// Externally assigned numeric id, unique per area.
    pub id: i64,
    /// Country or region; empty for the global aggregate.
    pub country: String,
    /// Province or state; empty for countries and the global aggregate.
    pub province: String,
    /// Population if known, otherwise 0.
    pub population: i64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Display colour used when plotting this area.
    pub color: String,
    /// First day of a full lockdown, if one was recorded.
    pub lockdown_at: Option<NaiveDate>,
}

impl Area {
    /// Parse an area from an 8-field record.
    ///
    /// # Errors
    /// Returns [`AreaParseError`] when the field count is wrong, when the
    /// area id, latitude, longitude or population fail to parse, or when a
    /// non-empty lockdown field is not a `YYYY-MM-DD` date. Fields are used
    /// verbatim: surrounding whitespace is a parse error, not trimmed.
    pub fn from_record<S: AsRef<str>>(fields: &[S]) -> Result<Self, AreaParseError> {
        let row = || {
            fields
                .iter()
                .map(|f| f.as_ref())
                .collect::<Vec<&str>>()
                .join(",")
        };

        ensure!(
            fields.len() == AREA_RECORD_FIELDS,
            FieldCountSnafu {
                found: fields.len(),
                row: row(),
            }
        );

        let field = |i: usize| fields[i].as_ref();

        let id = field(2)
            .parse::<i64>()
            .with_context(|_| InvalidAreaIdSnafu { row: row() })?;
        let latitude = field(3)
            .parse::<f64>()
            .with_context(|_| InvalidLatitudeSnafu { row: row() })?;
        let longitude = field(4)
            .parse::<f64>()
            .with_context(|_| InvalidLongitudeSnafu { row: row() })?;
        let population = field(5)
            .parse::<i64>()
            .with_context(|_| InvalidPopulationSnafu { row: row() })?;

        let lockdown_at = match field(6) {
            "" => None,
            value => Some(
                NaiveDate::parse_from_str(value, LOCKDOWN_FORMAT).with_context(|_| {
                    InvalidLockdownSnafu {
                        row: row(),
                        value: value.to_string(),
                    }
                })?,
            ),
        };

        Ok(Area {
            id,
            country: fields[0].as_ref().to_string(),
            province: fields[1].as_ref().to_string(),
            population,
            latitude,
            longitude,
            color: fields[7].as_ref().to_string(),
            lockdown_at,
        })
    }

    /// True for the global aggregate (no country, no province).
    pub fn is_global(&self) -> bool {
        self.country.is_empty() && self.province.is_empty()
    }

    /// True for a country-level area.
    pub fn is_country(&self) -> bool {
        !self.is_global() && !self.is_province()
    }

    /// True for a province within a country.
    pub fn is_province(&self) -> bool {
        !self.country.is_empty() && !self.province.is_empty()
    }

    /// True for a country-level area in the fixed European comparison set.
    ///
    /// Provinces are never European under this predicate.
    pub fn is_european(&self) -> bool {
        self.province.is_empty() && EUROPEAN_COUNTRIES.contains(&self.country.as_str())
    }

    /// Case-insensitive match on both country and province.
    pub fn matches(&self, country: &str, province: &str) -> bool {
        self.matches_country(country) && self.matches_province(province)
    }

    /// Case-insensitive match on country; spaces and hyphens are equivalent.
    pub fn matches_country(&self, country: &str) -> bool {
        slug(&self.country) == slug(country)
    }

    /// Case-insensitive match on province; spaces and hyphens are equivalent.
    pub fn matches_province(&self, province: &str) -> bool {
        slug(&self.province) == slug(province)
    }

    /// Display title: "Global", the country, or "Province (Country)".
    pub fn title(&self) -> String {
        if self.is_global() {
            "Global".to_string()
        } else if self.is_country() {
            self.country.clone()
        } else {
            format!("{} ({})", self.province, self.country)
        }
    }
}
