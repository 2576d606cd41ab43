use serde::Deserialize;

/// Fixed reference points of the dataset snapshot.
///
/// Built once at startup and shared read-only with the query layer. Values can
/// be overridden from the `[dataset]` table of the config file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Lower bound (inclusive) for the "last 12 months" routes
    pub cutoff_date: String,
    /// Station with the most observations in the snapshot
    pub most_active_station: String,
    /// Last date present in the snapshot
    pub last_update: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            cutoff_date: "2016-08-23".to_string(),
            most_active_station: "USC00519281".to_string(),
            last_update: "2017-08-23".to_string(),
        }
    }
}
