//! Plain-text banner at `/`

use axum::{Router, extract::State, routing::get};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .with_state(state.clone())
}

async fn banner(State(state): State<AppState>) -> String {
    format!(
        "Halo! Server Backend Pasokari Siap ({} Version) 🚀",
        state.config.email.transport.kind().label()
    )
}
