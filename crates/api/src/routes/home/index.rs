use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::{templates::home_page, AppState};

/// Welcome page listing the data routes (GET /)
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(home_page(&state.dataset.cutoff_date).into_string())
}
