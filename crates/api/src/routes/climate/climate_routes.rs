use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use log::error;
use std::sync::Arc;

use crate::{
    db, open_summary, precipitation_records, range_summary, tobs_records, AppState,
    PrecipitationRecord, TemperatureSummary, TobsRecord,
};

fn internal_error(err: db::Error) -> (StatusCode, String) {
    error!("error querying climate data: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Failed to query climate data: {}", err),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation by date for the 12 months from the cutoff date", content_type = "application/json", body = Vec<PrecipitationRecord>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query precipitation")
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PrecipitationRecord>>, (StatusCode, String)> {
    let rows = state
        .climate_db
        .precipitation_since(&state.dataset.cutoff_date)
        .await
        .map_err(internal_error)?;

    Ok(Json(precipitation_records(rows)))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Identifiers of every weather station", content_type = "application/json", body = Vec<String>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query stations")
    ))]
pub async fn stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    let stations = state
        .climate_db
        .all_stations()
        .await
        .map_err(internal_error)?;

    Ok(Json(stations))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations of the most active station for the 12 months from the cutoff date", content_type = "application/json", body = Vec<TobsRecord>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperature observations")
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TobsRecord>>, (StatusCode, String)> {
    let station = &state.dataset.most_active_station;
    let rows = state
        .climate_db
        .temperature_observations(station, &state.dataset.cutoff_date)
        .await
        .map_err(internal_error)?;

    Ok(Json(tobs_records(station, rows)))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
         ("start" = String, Path, description = "Start date, YYYY-MM-DD (inclusive)"),
    ),
    responses(
        (status = OK, description = "Minimum, average and maximum temperature from the start date on", content_type = "application/json", body = Vec<TemperatureSummary>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperature statistics")
    ))]
pub async fn temperature_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureSummary>>, (StatusCode, String)> {
    let stats = state
        .climate_db
        .temperature_stats_from(&start)
        .await
        .map_err(internal_error)?;

    Ok(Json(vec![open_summary(
        &start,
        &state.dataset.last_update,
        stats,
    )]))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
         ("start" = String, Path, description = "Start date, YYYY-MM-DD (inclusive)"),
         ("end" = String, Path, description = "End date, YYYY-MM-DD (inclusive)"),
    ),
    responses(
        (status = OK, description = "Minimum, average and maximum temperature between the start and end dates", content_type = "application/json", body = Vec<TemperatureSummary>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperature statistics")
    ))]
pub async fn temperature_range(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummary>>, (StatusCode, String)> {
    let stats = state
        .climate_db
        .temperature_stats_range(&start, &end)
        .await
        .map_err(internal_error)?;

    Ok(Json(vec![range_summary(&start, &end, stats)]))
}
