pub mod db;
mod routes;
mod shaper;
mod startup;
pub mod templates;
mod utils;

pub use climate_core::DatasetConfig;
pub use db::*;
pub use routes::*;
pub use shaper::*;
pub use startup::*;
pub use utils::*;
