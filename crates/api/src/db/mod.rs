pub mod climate_data;
pub mod sqlite;

pub use climate_data::*;
pub use sqlite::*;

use sqlx::FromRow;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Dataset file not found: {0}")]
    NotFound(String),
    #[error("Table `{table}` is missing columns: {}", .missing.join(", "))]
    Schema {
        table: &'static str,
        missing: Vec<String>,
    },
    #[error("Database integrity check failed: {0}")]
    Integrity(String),
}

/// A record shape the dataset must provide.
pub trait Table {
    const NAME: &'static str;
    const COLUMNS: &'static [&'static str];
}

/// One reading per station per date.
#[derive(Debug, FromRow)]
pub struct Measurement {
    pub station: String,
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

impl Table for Measurement {
    const NAME: &'static str = "measurement";
    const COLUMNS: &'static [&'static str] = &["station", "date", "prcp", "tobs"];
}

/// Only the identifier is served; any metadata columns are left alone.
#[derive(Debug, FromRow)]
pub struct Station {
    pub station: String,
}

impl Table for Station {
    const NAME: &'static str = "station";
    const COLUMNS: &'static [&'static str] = &["station"];
}

/// Precipitation reported for a date (one representative row per date)
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A single temperature reading of one station
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

/// Aggregates over `tobs`; all `None` when no rows matched
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct TemperatureStats {
    pub min_temp: Option<f64>,
    pub avg_temp: Option<f64>,
    pub max_temp: Option<f64>,
}
