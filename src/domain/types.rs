//! Domain types with validation support.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::error::ErrorCode;

/// Maximum page size accepted by list endpoints
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default page size for list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Language used for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt-BR")]
    PortugueseBr,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::PortugueseBr => "pt-BR",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::English),
            "pt" | "pt-br" => Ok(Self::PortugueseBr),
            _ => Err(format!("Invalid locale: {}", s)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a reported deposit, as the reporting endpoints spell it.
///
/// User deposit history uses the lowercase [`TransactionStatus`] for what
/// looks like the same concept. The two are kept apart until the upstream API
/// settles on one representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositStatus {
    Pending,
    Processing,
    Paid,
    Completed,
    Failed,
    Expired,
    Cancelled,
}

impl DepositStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Paid => "PAID",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Expired => "EXPIRED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::str::FromStr for DepositStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "PAID" => Ok(Self::Paid),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            "EXPIRED" => Ok(Self::Expired),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid deposit status: {}", s)),
        }
    }
}

impl std::fmt::Display for DepositStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of an entry in a user's deposit history (lowercase on the wire)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Paid,
    Completed,
    Failed,
    Expired,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Paid => "paid",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "paid" => Ok(Self::Paid),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "expired" => Ok(Self::Expired),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Crypto asset a deposit settles in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum CryptoType {
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "LBTC")]
    LiquidBtc,
    #[serde(rename = "USDT")]
    Usdt,
    #[serde(rename = "DEPIX")]
    Depix,
}

impl CryptoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::LiquidBtc => "LBTC",
            Self::Usdt => "USDT",
            Self::Depix => "DEPIX",
        }
    }
}

impl std::str::FromStr for CryptoType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BTC" => Ok(Self::Btc),
            "LBTC" => Ok(Self::LiquidBtc),
            "USDT" => Ok(Self::Usdt),
            "DEPIX" => Ok(Self::Depix),
            _ => Err(format!("Invalid crypto type: {}", s)),
        }
    }
}

impl std::fmt::Display for CryptoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a coupon discount is applied
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "PERCENTAGE",
            Self::Fixed => "FIXED",
        }
    }
}

/// Page selection for list requests (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[schema(example = 1)]
    pub page: u32,
    /// Items per page (1-100, default: 20)
    #[serde(default = "default_page_size")]
    #[schema(example = 20)]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Same request with page and size forced into the accepted range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

/// One page of entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T: ToSchema> {
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T: ToSchema> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            items,
            total,
            page,
            page_size,
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), 0, request.page, request.page_size)
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

/// Filters applied to the deposit report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepositFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DepositStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_type: Option<CryptoType>,
    /// Inclusive lower bound on the transaction date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the transaction date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Free-text match on username or transaction id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl DepositFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn is_present(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.trim().is_empty())
}

fn missing_identifier() -> ValidationError {
    ValidationError::new("missing_identifier").with_message(Cow::Borrowed(
        "One of userId, documentId or username is required",
    ))
}

fn validate_block_identifier(request: &BlockUserRequest) -> Result<(), ValidationError> {
    if request.has_identifier() {
        Ok(())
    } else {
        Err(missing_identifier())
    }
}

fn validate_unblock_identifier(request: &UnblockUserRequest) -> Result<(), ValidationError> {
    if request.has_identifier() {
        Ok(())
    } else {
        Err(missing_identifier())
    }
}

/// Request to block a user, identified by any of id, document or username
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_block_identifier"))]
pub struct BlockUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "usr_123")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "123.456.789-00")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "satoshi")]
    pub username: Option<String>,
    /// Free-text reason shown in the blocked users list
    #[serde(default)]
    #[schema(example = "spam")]
    pub reason: Option<String>,
}

impl BlockUserRequest {
    #[must_use]
    pub fn by_user_id(user_id: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            reason,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn by_username(username: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            username: Some(username.into()),
            reason,
            ..Default::default()
        }
    }

    pub fn has_identifier(&self) -> bool {
        is_present(self.user_id.as_deref())
            || is_present(self.document_id.as_deref())
            || is_present(self.username.as_deref())
    }
}

/// Request to lift a block; same identification rules as [`BlockUserRequest`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_unblock_identifier"))]
pub struct UnblockUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl UnblockUserRequest {
    #[must_use]
    pub fn by_user_id(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Default::default()
        }
    }

    pub fn has_identifier(&self) -> bool {
        is_present(self.user_id.as_deref())
            || is_present(self.document_id.as_deref())
            || is_present(self.username.as_deref())
    }
}

/// Partial configuration update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_peg_active: Option<bool>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_fee_threshold: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub second_fee_threshold: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub third_fee_threshold: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee_value: Option<Decimal>,
}

impl UpdateConfigRequest {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Request to resend the payment order of a deposit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResendDepositOrderRequest {
    #[schema(example = "tx_9f8e7d")]
    pub transaction_id: String,
}

impl ResendDepositOrderRequest {
    #[must_use]
    pub fn new(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
        }
    }
}

/// Health status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Reachability of the payments API
    pub upstream: HealthStatus,
    pub timestamp: DateTime<Utc>,
    #[schema(example = "0.1.0")]
    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn new(upstream: HealthStatus) -> Self {
        Self {
            status: upstream,
            upstream,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error response structure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    /// Localized message suitable for display
    #[schema(example = "User not found.")]
    pub message: String,
}
