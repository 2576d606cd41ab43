pub mod home;

pub use home::{home_page, DataRoute, DATA_ROUTES};
