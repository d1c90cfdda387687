//! Raw payloads exchanged with the payments API.
//!
//! These mirror the remote JSON schema exactly. Decoding is strict: a missing
//! field or an enum value outside the known set fails deserialization, which
//! the HTTP adapters report as a serialization error. Entities are built from
//! these in [`super::entities`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{CryptoType, DepositStatus, DiscountType, TransactionStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    pub maintenance_mode: bool,
    pub swap_peg_active: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub first_fee_threshold: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub second_fee_threshold: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub third_fee_threshold: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositPayload {
    pub transaction_id: String,
    pub phone: String,
    pub cold_wallet: String,
    pub network: String,
    pub payment_method: String,
    pub transaction_date: DateTime<Utc>,
    #[serde(default)]
    pub coupon: Option<String>,
    #[serde(rename = "valueBRL", with = "rust_decimal::serde::float")]
    pub value_brl: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub asset_value: Decimal,
    pub status: DepositStatus,
    pub crypto_type: CryptoType,
    pub username: String,
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount_value: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub value_collected: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub id: String,
    pub document_type: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDepositPayload {
    pub id: String,
    #[serde(rename = "valueBRL", with = "rust_decimal::serde::float")]
    pub value_brl: Decimal,
    pub status: TransactionStatus,
    pub crypto_type: CryptoType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub is_active: bool,
    pub level: u8,
    #[serde(default)]
    pub documents: Vec<DocumentPayload>,
    #[serde(default)]
    pub deposits: Vec<UserDepositPayload>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedUserPayload {
    #[serde(flatten)]
    pub user: UserPayload,
    #[serde(default)]
    pub block_reason: Option<String>,
    pub blocked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub total_users: u64,
    pub active_users: u64,
    pub blocked_users: u64,
    pub deposits_today: u64,
    #[serde(rename = "volumeTodayBRL", with = "rust_decimal::serde::float")]
    pub volume_today_brl: Decimal,
    pub pending_deposits: u64,
}

/// Paged list envelope used by the listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePayload<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Error body returned by the payments API on failure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
