pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::landing::handlers as landing;
use crate::pricing::handlers as pricing;
use crate::sessions::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Landing page
        .route("/", get(landing::handle_landing))
        .route("/order", get(landing::handle_order))
        // Pricing API
        .route("/api/v1/catalog", get(pricing::handle_catalog))
        .route("/api/v1/quote", post(pricing::handle_quote))
        // Calculator sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_close_session),
        )
        .route("/api/v1/sessions/:id/size", put(sessions::handle_select_size))
        .route("/api/v1/sessions/:id/sheets", put(sessions::handle_set_sheets))
        .route(
            "/api/v1/sessions/:id/order",
            get(sessions::handle_session_order),
        )
        .with_state(state)
}
