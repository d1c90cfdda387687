//! HTTP request handlers with OpenAPI documentation.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use utoipa::OpenApi;

use super::deposits::DepositQuery;
use super::error::{ApiError, Localize};
use crate::app::{AppState, UseCase};
use crate::domain::{
    BlockUserRequest, Config, CryptoType, DashboardSummary, DepositFilters, DepositStatus,
    Discount, DiscountType, ErrorCode, ErrorDetail, ErrorResponse, HealthResponse, HealthStatus,
    ListAllBlockedUser, ListedUser, Page, ReportedDeposit, TransactionStatus, UnblockUserRequest,
    UpdateConfigRequest, UserDeposit, UserDocument,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Admin Dashboard API",
        description = "Back office for the crypto/fiat payment platform: configuration, users and deposit reports",
        license(
            name = "MIT"
        )
    ),
    paths(
        get_config_handler,
        update_config_handler,
        crate::api::users::list_users_handler,
        crate::api::users::list_blocked_users_handler,
        crate::api::users::block_user_handler,
        crate::api::users::unblock_user_handler,
        crate::api::deposits::list_deposits_handler,
        crate::api::deposits::export_deposits_handler,
        crate::api::deposits::resend_deposit_handler,
        dashboard_summary_handler,
        health_check_handler,
        liveness_handler,
        readiness_handler,
    ),
    components(
        schemas(
            Config,
            UpdateConfigRequest,
            ListedUser,
            UserDocument,
            UserDeposit,
            ListAllBlockedUser,
            BlockUserRequest,
            UnblockUserRequest,
            ReportedDeposit,
            Discount,
            DiscountType,
            DepositFilters,
            DepositQuery,
            DepositStatus,
            TransactionStatus,
            CryptoType,
            Page<ListedUser>,
            Page<ReportedDeposit>,
            DashboardSummary,
            HealthResponse,
            HealthStatus,
            ErrorResponse,
            ErrorDetail,
            ErrorCode,
        )
    ),
    tags(
        (name = "config", description = "Platform configuration"),
        (name = "users", description = "User listing and blocking"),
        (name = "deposits", description = "Deposit report, resend and export"),
        (name = "dashboard", description = "Landing page figures"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Current platform configuration
#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    responses(
        (status = 200, description = "Current configuration", body = Config),
        (status = 502, description = "Payments API failed or returned an invalid body", body = ErrorResponse)
    )
)]
pub async fn get_config_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Config>, ApiError> {
    let config = state
        .use_cases
        .list_config
        .execute(())
        .await
        .localize(state.locale)?;
    Ok(Json(config))
}

/// Partially update the configuration
///
/// Only the fields present in the body are changed. Returns the resulting
/// configuration.
#[utoipa::path(
    patch,
    path = "/config",
    tag = "config",
    request_body = UpdateConfigRequest,
    responses(
        (status = 200, description = "Configuration after the update", body = Config),
        (status = 502, description = "Payments API failed or returned an invalid body", body = ErrorResponse)
    )
)]
pub async fn update_config_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateConfigRequest>,
) -> Result<Json<Config>, ApiError> {
    let config = state
        .use_cases
        .update_config
        .execute(payload)
        .await
        .localize(state.locale)?;
    Ok(Json(config))
}

/// Landing page figures
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 502, description = "Payments API failed or returned an invalid body", body = ErrorResponse)
    )
)]
pub async fn dashboard_summary_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let summary = state
        .use_cases
        .dashboard_summary
        .execute(())
        .await
        .localize(state.locale)?;
    Ok(Json(summary))
}

/// Detailed health check, including payments API reachability
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Health status", body = HealthResponse)
    )
)]
pub async fn health_check_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(state.health_check().await)
}

/// Kubernetes liveness probe
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "health",
    responses(
        (status = 200, description = "Application is alive")
    )
)]
pub async fn liveness_handler() -> StatusCode {
    StatusCode::OK
}

/// Kubernetes readiness probe
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Payments API reachable"),
        (status = 503, description = "Payments API unreachable")
    )
)]
pub async fn readiness_handler(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.health_check().await.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    }
}
