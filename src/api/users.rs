//! User listing and blocking handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use super::error::{ApiError, Localize};
use crate::app::{AppState, UseCase};
use crate::domain::{
    BlockUserRequest, ErrorResponse, ListAllBlockedUser, ListedUser, Page, PageRequest,
    UnblockUserRequest,
};

/// List users one page at a time
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(
        ("page" = Option<u32>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("pageSize" = Option<u32>, Query, description = "Items per page (1-100, default: 20)")
    ),
    responses(
        (status = 200, description = "One page of users", body = Page<ListedUser>),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 502, description = "Payments API failed or returned an invalid body", body = ErrorResponse)
    )
)]
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<ListedUser>>, ApiError> {
    let users = state
        .use_cases
        .list_users
        .execute(page)
        .await
        .localize(state.locale)?;
    Ok(Json(users))
}

/// List every blocked user
#[utoipa::path(
    get,
    path = "/users/blocked",
    tag = "users",
    responses(
        (status = 200, description = "Blocked users", body = Vec<ListAllBlockedUser>),
        (status = 502, description = "Payments API failed or returned an invalid body", body = ErrorResponse)
    )
)]
pub async fn list_blocked_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ListAllBlockedUser>>, ApiError> {
    let users = state
        .use_cases
        .list_blocked_users
        .execute(())
        .await
        .localize(state.locale)?;
    Ok(Json(users))
}

/// Block a user
///
/// At least one of `userId`, `documentId` or `username` must be present and
/// non-blank; otherwise the request is rejected without reaching the
/// payments API.
#[utoipa::path(
    post,
    path = "/users/block",
    tag = "users",
    request_body = BlockUserRequest,
    responses(
        (status = 204, description = "User blocked"),
        (status = 400, description = "No identifier given", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "User already blocked", body = ErrorResponse),
        (status = 502, description = "Payments API failed", body = ErrorResponse)
    )
)]
pub async fn block_user_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BlockUserRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .use_cases
        .block_user
        .execute(payload)
        .await
        .localize(state.locale)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lift a block
#[utoipa::path(
    post,
    path = "/users/unblock",
    tag = "users",
    request_body = UnblockUserRequest,
    responses(
        (status = 204, description = "User unblocked"),
        (status = 400, description = "No identifier given", body = ErrorResponse),
        (status = 404, description = "User not found or not blocked", body = ErrorResponse),
        (status = 502, description = "Payments API failed", body = ErrorResponse)
    )
)]
pub async fn unblock_user_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UnblockUserRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .use_cases
        .unblock_user
        .execute(payload)
        .await
        .localize(state.locale)?;
    Ok(StatusCode::NO_CONTENT)
}
