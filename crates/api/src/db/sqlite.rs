use climate_core::is_file;
use log::{info, trace};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite, SqliteConnection,
};
use std::time::Duration;

use super::{Error, Measurement, Station, Table};

/// Read-only handle on the pre-loaded climate dataset.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the dataset at `path` and check it carries the expected tables.
    ///
    /// The file is never created or written to.
    pub async fn new(path: &str) -> Result<Self, Error> {
        if !is_file(path) {
            return Err(Error::NotFound(path.to_string()));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false)
            .pragma("busy_timeout", "5000");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.health_check().await?;
        db.verify_table::<Measurement>().await?;
        db.verify_table::<Station>().await?;
        db.probe_records().await?;

        info!("SQLite dataset opened at: {}", path);
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Acquire a connection scoped to one request.
    pub async fn session(&self) -> Result<Session, Error> {
        let conn = self.pool.acquire().await?;
        trace!("session acquired");
        Ok(Session { conn })
    }

    /// Check database connectivity and integrity.
    pub async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;

        let result: String = sqlx::query_scalar("PRAGMA quick_check;")
            .fetch_one(&self.pool)
            .await?;
        if result != "ok" {
            return Err(Error::Integrity(result));
        }

        Ok(())
    }

    async fn verify_table<T: Table>(&self) -> Result<(), Error> {
        let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
            .bind(T::NAME)
            .fetch_all(&self.pool)
            .await?;

        let missing: Vec<String> = T::COLUMNS
            .iter()
            .filter(|expected| !columns.iter().any(|c| c.eq_ignore_ascii_case(expected)))
            .map(|c| c.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::Schema {
                table: T::NAME,
                missing,
            });
        }
        Ok(())
    }

    /// Decode one row of each table so type mismatches fail at startup
    /// instead of on the first request.
    async fn probe_records(&self) -> Result<(), Error> {
        let measurement: Option<Measurement> =
            sqlx::query_as("SELECT station, date, prcp, tobs FROM measurement LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;
        let station: Option<Station> = sqlx::query_as("SELECT station FROM station LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        trace!(
            "probed records, measurement: {:?}, station: {:?}",
            measurement,
            station
        );
        Ok(())
    }
}

/// A pooled connection held for the duration of one request.
///
/// Returned to the pool when dropped, whichever way the request ends.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        trace!("session released");
    }
}
