//! Router configuration.

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::deposits::{export_deposits_handler, list_deposits_handler, resend_deposit_handler};
use super::handlers::{
    ApiDoc, dashboard_summary_handler, get_config_handler, health_check_handler,
    liveness_handler, readiness_handler, update_config_handler,
};
use super::users::{
    block_user_handler, list_blocked_users_handler, list_users_handler, unblock_user_handler,
};
use crate::app::AppState;

/// Request bodies are small JSON documents
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the application router
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes: Router = Router::new()
        .route("/config", get(get_config_handler).patch(update_config_handler))
        .route("/users", get(list_users_handler))
        .route("/users/blocked", get(list_blocked_users_handler))
        .route("/users/block", post(block_user_handler))
        .route("/users/unblock", post(unblock_user_handler))
        .route("/deposits", get(list_deposits_handler))
        .route("/deposits/export", get(export_deposits_handler))
        .route("/deposits/{id}/resend", post(resend_deposit_handler))
        .route("/dashboard", get(dashboard_summary_handler))
        .with_state(Arc::clone(&app_state));

    let health_routes: Router = Router::new()
        .route("/health", get(health_check_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
