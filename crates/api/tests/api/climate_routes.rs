use crate::helpers::{spawn_app, MockClimateAccess};
use climate_api::{
    db::Error, PrecipitationRecord, PrecipitationRow, TemperatureObservation, TemperatureStats,
    TemperatureSummary, TobsRecord,
};
use hyper::StatusCode;
use mockall::predicate::eq;
use serde_json::{from_str, json, Value};
use std::sync::Arc;

#[tokio::test]
async fn precipitation_uses_cutoff_date_and_returns_single_key_records() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_precipitation_since()
        .with(eq("2016-08-23"))
        .times(1)
        .returning(|_| {
            Ok(vec![
                PrecipitationRow {
                    date: "2016-08-23".to_string(),
                    prcp: Some(0.0),
                },
                PrecipitationRow {
                    date: "2016-08-24".to_string(),
                    prcp: None,
                },
            ])
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get("/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = from_str(&body).unwrap();
    assert_eq!(value, json!([{ "2016-08-23": 0.0 }, { "2016-08-24": null }]));

    let records: Vec<PrecipitationRecord> = from_str(&body).unwrap();
    assert_eq!(records[1].date(), Some("2016-08-24"));
}

#[tokio::test]
async fn stations_returns_flat_list_of_identifiers() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_all_stations()
        .times(1)
        .returning(|| Ok(vec!["USC00519397".to_string(), "USC00513117".to_string()]));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get("/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"["USC00519397","USC00513117"]"#);
}

#[tokio::test]
async fn tobs_queries_most_active_station_since_cutoff() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_temperature_observations()
        .with(eq("USC00519281"), eq("2016-08-23"))
        .times(1)
        .returning(|_, _| {
            Ok(vec![TemperatureObservation {
                date: "2016-08-23".to_string(),
                tobs: 77.0,
            }])
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"[{"Station":"USC00519281","Date":"2016-08-23","Total Observations":77.0}]"#
    );
    let records: Vec<TobsRecord> = from_str(&body).unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn start_route_reports_stats_up_to_last_update() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_temperature_stats_from()
        .with(eq("2017-01-01"))
        .times(1)
        .returning(|_| {
            Ok(TemperatureStats {
                min_temp: Some(58.0),
                avg_temp: Some(74.14),
                max_temp: Some(87.0),
            })
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get("/api/v1.0/2017-01-01").await;

    assert_eq!(status, StatusCode::OK);
    let summaries: Vec<TemperatureSummary> = from_str(&body).unwrap();
    assert_eq!(
        summaries,
        vec![TemperatureSummary {
            start_date: "2017-01-01".to_string(),
            end_date: None,
            last_date: Some("2017-08-23".to_string()),
            minimum_temperature: Some(58.0),
            average_temperature: Some(74.14),
            maximum_temperature: Some(87.0),
        }]
    );
}

#[tokio::test]
async fn start_end_route_passes_both_bounds() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_temperature_stats_range()
        .with(eq("2017-01-01"), eq("2017-01-31"))
        .times(1)
        .returning(|_, _| {
            Ok(TemperatureStats {
                min_temp: Some(62.0),
                avg_temp: Some(67.75),
                max_temp: Some(72.0),
            })
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get("/api/v1.0/2017-01-01/2017-01-31").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = from_str(&body).unwrap();
    assert_eq!(
        value,
        json!([{
            "Start Date": "2017-01-01",
            "End Date": "2017-01-31",
            "Minimum Temperature": 62.0,
            "Average Temperature": 67.75,
            "Maximum Temperature": 72.0,
        }])
    );
}

#[tokio::test]
async fn malformed_dates_are_passed_through_and_answered_with_nulls() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_temperature_stats_range()
        .with(eq("not-a-date"), eq("2016-01-01"))
        .times(1)
        .returning(|_, _| Ok(TemperatureStats::default()));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get("/api/v1.0/not-a-date/2016-01-01").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = from_str(&body).unwrap();
    assert_eq!(value[0]["Minimum Temperature"], Value::Null);
    assert_eq!(value[0]["Average Temperature"], Value::Null);
    assert_eq!(value[0]["Maximum Temperature"], Value::Null);
}

#[tokio::test]
async fn storage_failure_surfaces_as_server_error() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_all_stations()
        .times(1)
        .returning(|| Err(Error::Query(sqlx::Error::PoolTimedOut)));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get("/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Failed to query climate data"));
}

#[tokio::test]
async fn named_routes_take_precedence_over_start_date() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_temperature_observations()
        .times(1)
        .returning(|_, _| Ok(vec![]));
    climate_data.expect_temperature_stats_from().times(0);

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}
