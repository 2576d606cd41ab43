//! JSON record shapes returned by the data routes.
//!
//! Key names are part of the public interface and kept exactly as clients
//! expect them, including `Total Observations`, which carries a single
//! temperature reading rather than a count.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::{PrecipitationRow, TemperatureObservation, TemperatureStats};

/// `{ "<date>": <precipitation> }`, one record per date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct PrecipitationRecord(BTreeMap<String, Option<f64>>);

impl PrecipitationRecord {
    pub fn new(date: String, precipitation: Option<f64>) -> Self {
        Self(BTreeMap::from([(date, precipitation)]))
    }

    pub fn date(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    pub fn precipitation(&self) -> Option<f64> {
        self.0.values().next().copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TobsRecord {
    #[serde(rename = "Station")]
    pub station: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Total Observations")]
    pub total_observations: f64,
}

/// Temperature aggregates over a date window.
///
/// Carries `End Date` for a bounded window and `Last Date` (the last day of
/// the dataset) for an open one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureSummary {
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "End Date", skip_serializing_if = "Option::is_none", default)]
    pub end_date: Option<String>,
    #[serde(rename = "Last Date", skip_serializing_if = "Option::is_none", default)]
    pub last_date: Option<String>,
    #[serde(rename = "Minimum Temperature")]
    pub minimum_temperature: Option<f64>,
    #[serde(rename = "Average Temperature")]
    pub average_temperature: Option<f64>,
    #[serde(rename = "Maximum Temperature")]
    pub maximum_temperature: Option<f64>,
}

pub fn precipitation_records(rows: Vec<PrecipitationRow>) -> Vec<PrecipitationRecord> {
    rows.into_iter()
        .map(|row| PrecipitationRecord::new(row.date, row.prcp))
        .collect()
}

pub fn tobs_records(station: &str, rows: Vec<TemperatureObservation>) -> Vec<TobsRecord> {
    rows.into_iter()
        .map(|row| TobsRecord {
            station: station.to_owned(),
            date: row.date,
            total_observations: row.tobs,
        })
        .collect()
}

/// Summary of everything from `start` up to the end of the dataset
pub fn open_summary(start: &str, last_update: &str, stats: TemperatureStats) -> TemperatureSummary {
    TemperatureSummary {
        start_date: start.to_owned(),
        end_date: None,
        last_date: Some(last_update.to_owned()),
        minimum_temperature: stats.min_temp,
        average_temperature: stats.avg_temp,
        maximum_temperature: stats.max_temp,
    }
}

pub fn range_summary(start: &str, end: &str, stats: TemperatureStats) -> TemperatureSummary {
    TemperatureSummary {
        start_date: start.to_owned(),
        end_date: Some(end.to_owned()),
        last_date: None,
        minimum_temperature: stats.min_temp,
        average_temperature: stats.avg_temp,
        maximum_temperature: stats.max_temp,
    }
}
