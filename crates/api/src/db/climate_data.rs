use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::{
    Database, Error, PrecipitationRow, Session, TemperatureObservation, TemperatureStats,
};

/// Read queries the HTTP layer runs against the dataset.
///
/// Dates are compared as strings against the stored `YYYY-MM-DD` values, so
/// malformed input yields empty or null results rather than an error.
#[async_trait]
pub trait ClimateData: Send + Sync {
    /// One precipitation value per date on or after `since`
    async fn precipitation_since(&self, since: &str) -> Result<Vec<PrecipitationRow>, Error>;
    async fn all_stations(&self) -> Result<Vec<String>, Error>;
    async fn temperature_observations(
        &self,
        station: &str,
        since: &str,
    ) -> Result<Vec<TemperatureObservation>, Error>;
    async fn temperature_stats_from(&self, start: &str) -> Result<TemperatureStats, Error>;
    /// Both bounds inclusive, `start <= end` is not checked
    async fn temperature_stats_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureStats, Error>;
}

pub struct ClimateAccess {
    db: Arc<Database>,
}

impl ClimateAccess {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClimateData for ClimateAccess {
    async fn precipitation_since(&self, since: &str) -> Result<Vec<PrecipitationRow>, Error> {
        let mut session = self.db.session().await?;
        precipitation_since(&mut session, since).await
    }

    async fn all_stations(&self) -> Result<Vec<String>, Error> {
        let mut session = self.db.session().await?;
        all_stations(&mut session).await
    }

    async fn temperature_observations(
        &self,
        station: &str,
        since: &str,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let mut session = self.db.session().await?;
        temperature_observations(&mut session, station, since).await
    }

    async fn temperature_stats_from(&self, start: &str) -> Result<TemperatureStats, Error> {
        let mut session = self.db.session().await?;
        temperature_stats_from(&mut session, start).await
    }

    async fn temperature_stats_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureStats, Error> {
        let mut session = self.db.session().await?;
        temperature_stats_range(&mut session, start, end).await
    }
}

/// Several stations report each date; the value kept for a date is the one
/// from its first-recorded row. It is a representative, not an aggregate.
pub async fn precipitation_since(
    session: &mut Session,
    since: &str,
) -> Result<Vec<PrecipitationRow>, Error> {
    debug!("querying precipitation since {}", since);
    let rows: Vec<PrecipitationRow> = sqlx::query_as(
        r#"
        SELECT m.date AS date, m.prcp AS prcp
        FROM measurement m
        WHERE m.rowid IN (
            SELECT MIN(rowid) FROM measurement WHERE date >= ?1 GROUP BY date
        )
        ORDER BY m.date
        "#,
    )
    .bind(since)
    .fetch_all(session.connection())
    .await?;
    Ok(rows)
}

pub async fn all_stations(session: &mut Session) -> Result<Vec<String>, Error> {
    let stations: Vec<String> =
        sqlx::query_scalar("SELECT station FROM station ORDER BY rowid")
            .fetch_all(session.connection())
            .await?;
    Ok(stations)
}

pub async fn temperature_observations(
    session: &mut Session,
    station: &str,
    since: &str,
) -> Result<Vec<TemperatureObservation>, Error> {
    debug!("querying tobs for {} since {}", station, since);
    let rows: Vec<TemperatureObservation> = sqlx::query_as(
        r#"
        SELECT date, tobs
        FROM measurement
        WHERE station = ?1 AND date >= ?2
        ORDER BY date, rowid
        "#,
    )
    .bind(station)
    .bind(since)
    .fetch_all(session.connection())
    .await?;
    Ok(rows)
}

pub async fn temperature_stats_from(
    session: &mut Session,
    start: &str,
) -> Result<TemperatureStats, Error> {
    debug!("querying temperature stats from {}", start);
    let stats: TemperatureStats = sqlx::query_as(
        r#"
        SELECT CAST(MIN(tobs) AS REAL) AS min_temp,
               CAST(AVG(tobs) AS REAL) AS avg_temp,
               CAST(MAX(tobs) AS REAL) AS max_temp
        FROM measurement
        WHERE date >= ?1
        "#,
    )
    .bind(start)
    .fetch_one(session.connection())
    .await?;
    Ok(stats)
}

pub async fn temperature_stats_range(
    session: &mut Session,
    start: &str,
    end: &str,
) -> Result<TemperatureStats, Error> {
    debug!("querying temperature stats from {} to {}", start, end);
    let stats: TemperatureStats = sqlx::query_as(
        r#"
        SELECT CAST(MIN(tobs) AS REAL) AS min_temp,
               CAST(AVG(tobs) AS REAL) AS avg_temp,
               CAST(MAX(tobs) AS REAL) AS max_temp
        FROM measurement
        WHERE date >= ?1 AND date <= ?2
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_one(session.connection())
    .await?;
    Ok(stats)
}
