use maud::{html, Markup};

use crate::templates::layouts::{base, PageConfig};

/// A data route as advertised on the welcome page
pub struct DataRoute {
    pub path: &'static str,
    pub inputs: Option<&'static str>,
    pub description: &'static str,
    /// Results start at the configured cutoff date
    pub since_cutoff: bool,
}

pub const DATA_ROUTES: [DataRoute; 5] = [
    DataRoute {
        path: "/api/v1.0/precipitation",
        inputs: None,
        description: "Precipitation levels (in inches) by date for 12 months",
        since_cutoff: true,
    },
    DataRoute {
        path: "/api/v1.0/stations",
        inputs: None,
        description: "List of weather stations",
        since_cutoff: false,
    },
    DataRoute {
        path: "/api/v1.0/tobs",
        inputs: None,
        description: "List of temperature observations (TOBS) (in fahrenheit) for the most active station for 12 months",
        since_cutoff: true,
    },
    DataRoute {
        path: "/api/v1.0/<start>",
        inputs: Some("Input start date in YYYY-MM-DD"),
        description: "List of minimum temperature, average temperature and maximum temperature from a given period",
        since_cutoff: false,
    },
    DataRoute {
        path: "/api/v1.0/<start>/<end>",
        inputs: Some("Input start date and end date in YYYY-MM-DD"),
        description: "List of minimum temperature, average temperature and maximum temperature between the given start and end dates (inclusive)",
        since_cutoff: false,
    },
];

pub fn home_page(cutoff_date: &str) -> Markup {
    let config = PageConfig {
        title: "Hawaii Climate API",
    };

    base(&config, content(cutoff_date))
}

fn content(cutoff_date: &str) -> Markup {
    html! {
        div class="content" {
            p {
                "Welcome to our site! We offer free highly specialised weather APIs on Hawaii - no signup required! :)"
            }
            h2 class="subtitle" { "Available Routes:" }
            ul id="routes" {
                @for route in &DATA_ROUTES {
                    li class="route" {
                        code { (route.path) }
                        @if let Some(inputs) = route.inputs {
                            p { (inputs) }
                        }
                        p {
                            "Format: JSON. " (route.description)
                            @if route.since_cutoff {
                                " from " (cutoff_date)
                            }
                        }
                    }
                }
            }
        }
    }
}
