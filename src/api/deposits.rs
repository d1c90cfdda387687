//! Deposit report handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::error::{ApiError, Localize};
use crate::app::export::{CSV_CONTENT_TYPE, DepositSpreadsheet};
use crate::app::use_cases::deposits::ListDepositsRequest;
use crate::app::{AppState, UseCase};
use crate::domain::{
    CryptoType, DepositFilters, DepositStatus, ErrorResponse, Page, PageRequest, ReportedDeposit,
    ResendDepositOrderRequest,
};

/// Query string of the deposit report: paging plus filters, flat
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DepositQuery {
    /// Page number, starting at 1 (default: 1)
    pub page: Option<u32>,
    /// Items per page (1-100, default: 20)
    pub page_size: Option<u32>,
    pub status: Option<DepositStatus>,
    pub crypto_type: Option<CryptoType>,
    /// Inclusive, `YYYY-MM-DD`
    pub start_date: Option<NaiveDate>,
    /// Inclusive, `YYYY-MM-DD`
    pub end_date: Option<NaiveDate>,
    /// Matches username or transaction id
    pub search: Option<String>,
}

impl DepositQuery {
    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }

    /// Filters with a blank search treated as absent
    pub fn filters(&self) -> DepositFilters {
        DepositFilters {
            status: self.status,
            crypto_type: self.crypto_type,
            start_date: self.start_date,
            end_date: self.end_date,
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

/// List deposits matching the filters, one page at a time
#[utoipa::path(
    get,
    path = "/deposits",
    tag = "deposits",
    params(DepositQuery),
    responses(
        (status = 200, description = "One page of deposits", body = Page<ReportedDeposit>),
        (status = 400, description = "Invalid query string"),
        (status = 502, description = "Payments API failed or returned an invalid body", body = ErrorResponse)
    )
)]
pub async fn list_deposits_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DepositQuery>,
) -> Result<Json<Page<ReportedDeposit>>, ApiError> {
    let request = ListDepositsRequest::new(query.page_request(), query.filters());
    let deposits = state
        .use_cases
        .list_deposits
        .execute(request)
        .await
        .localize(state.locale)?;
    Ok(Json(deposits))
}

/// Download every deposit matching the filters as CSV
///
/// Paging parameters are ignored. The file is named
/// `deposits-report-YYYY-MM-DD.csv` after the current UTC date.
#[utoipa::path(
    get,
    path = "/deposits/export",
    tag = "deposits",
    params(DepositQuery),
    responses(
        (status = 200, description = "CSV spreadsheet", body = String, content_type = "text/csv"),
        (status = 502, description = "Payments API failed or returned an invalid body", body = ErrorResponse)
    )
)]
pub async fn export_deposits_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DepositQuery>,
) -> Result<Response, ApiError> {
    let deposits = state
        .use_cases
        .list_all_deposits
        .execute(query.filters())
        .await
        .localize(state.locale)?;

    let sheet =
        DepositSpreadsheet::build(&deposits, Utc::now().date_naive()).localize(state.locale)?;
    let disposition = format!("attachment; filename=\"{}\"", sheet.filename());
    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        sheet.into_bytes(),
    )
        .into_response())
}

/// Resend the payment order of a deposit
#[utoipa::path(
    post,
    path = "/deposits/{id}/resend",
    tag = "deposits",
    params(
        ("id" = String, Path, description = "Transaction ID")
    ),
    responses(
        (status = 204, description = "Order resent"),
        (status = 404, description = "Deposit not found", body = ErrorResponse),
        (status = 502, description = "Payments API failed", body = ErrorResponse)
    )
)]
pub async fn resend_deposit_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .use_cases
        .resend_deposit_order
        .execute(ResendDepositOrderRequest::new(id))
        .await
        .localize(state.locale)?;
    Ok(StatusCode::NO_CONTENT)
}
