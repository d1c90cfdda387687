//! Immutable entities built from remote payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::payloads::{
    BlockedUserPayload, ConfigPayload, DashboardPayload, DepositPayload, DocumentPayload,
    UserDepositPayload, UserPayload,
};
use super::types::{CryptoType, DepositStatus, DiscountType, TransactionStatus};

/// System configuration as edited from the settings screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// When set, the platform rejects new orders
    pub maintenance_mode: bool,
    pub swap_peg_active: bool,
    /// Fee thresholds in BRL, ascending
    #[serde(with = "rust_decimal::serde::float")]
    pub first_fee_threshold: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub second_fee_threshold: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub third_fee_threshold: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee_value: Decimal,
}

impl From<ConfigPayload> for Config {
    fn from(payload: ConfigPayload) -> Self {
        Self {
            maintenance_mode: payload.maintenance_mode,
            swap_peg_active: payload.swap_peg_active,
            first_fee_threshold: payload.first_fee_threshold,
            second_fee_threshold: payload.second_fee_threshold,
            third_fee_threshold: payload.third_fee_threshold,
            fee_value: payload.fee_value,
        }
    }
}

/// Coupon discount applied to a deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub kind: DiscountType,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

impl Discount {
    fn label(&self) -> String {
        match self.kind {
            DiscountType::Percentage => format!("{}%", self.value),
            DiscountType::Fixed => format!("R$ {}", self.value),
        }
    }
}

/// A single payment transaction shown in the deposit report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportedDeposit {
    pub transaction_id: String,
    pub phone: String,
    pub cold_wallet: String,
    pub network: String,
    pub payment_method: String,
    pub transaction_date: DateTime<Utc>,
    pub coupon: Option<String>,
    #[serde(rename = "valueBRL", with = "rust_decimal::serde::float")]
    pub value_brl: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub asset_value: Decimal,
    pub status: DepositStatus,
    pub crypto_type: CryptoType,
    pub username: String,
    /// Present only when the payload carries both a discount type and value
    pub discount: Option<Discount>,
    #[serde(with = "rust_decimal::serde::float")]
    pub value_collected: Decimal,
}

impl From<DepositPayload> for ReportedDeposit {
    fn from(payload: DepositPayload) -> Self {
        let discount = match (payload.discount_type, payload.discount_value) {
            (Some(kind), Some(value)) => Some(Discount { kind, value }),
            _ => None,
        };

        Self {
            transaction_id: payload.transaction_id,
            phone: payload.phone,
            cold_wallet: payload.cold_wallet,
            network: payload.network,
            payment_method: payload.payment_method,
            transaction_date: payload.transaction_date,
            coupon: payload.coupon.filter(|c| !c.is_empty()),
            value_brl: payload.value_brl,
            asset_value: payload.asset_value,
            status: payload.status,
            crypto_type: payload.crypto_type,
            username: payload.username,
            discount,
            value_collected: payload.value_collected,
        }
    }
}

impl ReportedDeposit {
    /// Display fields for report tables and spreadsheet export.
    ///
    /// Money values keep their full scale so the row parses back to the
    /// same amounts.
    pub fn display_row(&self) -> DepositRow {
        DepositRow {
            transaction_id: self.transaction_id.clone(),
            transaction_date: self.transaction_date.format("%d/%m/%Y %H:%M").to_string(),
            username: self.username.clone(),
            phone: self.phone.clone(),
            value_brl: self.value_brl.to_string(),
            asset_value: self.asset_value.to_string(),
            crypto_type: self.crypto_type.as_str().to_string(),
            network: self.network.clone(),
            cold_wallet: self.cold_wallet.clone(),
            payment_method: self.payment_method.clone(),
            status: self.status.as_str().to_string(),
            coupon: self.coupon.clone().unwrap_or_else(|| "-".to_string()),
            discount: self
                .discount
                .map(|d| d.label())
                .unwrap_or_else(|| "-".to_string()),
            value_collected: self.value_collected.to_string(),
        }
    }
}

/// Flattened, display-ready view of a [`ReportedDeposit`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositRow {
    pub transaction_id: String,
    pub transaction_date: String,
    pub username: String,
    pub phone: String,
    pub value_brl: String,
    pub asset_value: String,
    pub crypto_type: String,
    pub network: String,
    pub cold_wallet: String,
    pub payment_method: String,
    pub status: String,
    pub coupon: String,
    pub discount: String,
    pub value_collected: String,
}

impl DepositRow {
    pub const HEADERS: [&'static str; 14] = [
        "Transaction ID",
        "Date",
        "Username",
        "Phone",
        "Value (BRL)",
        "Asset Value",
        "Crypto",
        "Network",
        "Cold Wallet",
        "Payment Method",
        "Status",
        "Coupon",
        "Discount",
        "Collected (BRL)",
    ];

    pub fn cells(&self) -> [&str; 14] {
        [
            self.transaction_id.as_str(),
            self.transaction_date.as_str(),
            self.username.as_str(),
            self.phone.as_str(),
            self.value_brl.as_str(),
            self.asset_value.as_str(),
            self.crypto_type.as_str(),
            self.network.as_str(),
            self.cold_wallet.as_str(),
            self.payment_method.as_str(),
            self.status.as_str(),
            self.coupon.as_str(),
            self.discount.as_str(),
            self.value_collected.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub id: String,
    pub document_type: String,
    pub number: String,
}

impl From<DocumentPayload> for UserDocument {
    fn from(payload: DocumentPayload) -> Self {
        Self {
            id: payload.id,
            document_type: payload.document_type,
            number: payload.number,
        }
    }
}

/// Entry of a user's deposit history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDeposit {
    pub id: String,
    #[serde(rename = "valueBRL", with = "rust_decimal::serde::float")]
    pub value_brl: Decimal,
    pub status: TransactionStatus,
    pub crypto_type: CryptoType,
    pub created_at: DateTime<Utc>,
}

impl From<UserDepositPayload> for UserDeposit {
    fn from(payload: UserDepositPayload) -> Self {
        Self {
            id: payload.id,
            value_brl: payload.value_brl,
            status: payload.status,
            crypto_type: payload.crypto_type,
            created_at: payload.created_at,
        }
    }
}

/// User projection shown in the users list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListedUser {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    /// Verification tier
    pub level: u8,
    pub documents: Vec<UserDocument>,
    pub deposits: Vec<UserDeposit>,
    pub created_at: DateTime<Utc>,
}

impl ListedUser {
    /// Sum of the user's deposit history in BRL
    pub fn total_deposited_brl(&self) -> Decimal {
        self.deposits.iter().map(|d| d.value_brl).sum()
    }
}

impl From<UserPayload> for ListedUser {
    fn from(payload: UserPayload) -> Self {
        Self {
            id: payload.id,
            username: payload.username,
            email: payload.email,
            phone: payload.phone,
            active: payload.is_active,
            level: payload.level,
            documents: payload.documents.into_iter().map(Into::into).collect(),
            deposits: payload.deposits.into_iter().map(Into::into).collect(),
            created_at: payload.created_at,
        }
    }
}

/// User projection shown in the blocked users list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAllBlockedUser {
    pub user: ListedUser,
    pub reason: Option<String>,
    pub blocked_at: DateTime<Utc>,
}

impl From<BlockedUserPayload> for ListAllBlockedUser {
    fn from(payload: BlockedUserPayload) -> Self {
        Self {
            user: payload.user.into(),
            reason: payload.block_reason,
            blocked_at: payload.blocked_at,
        }
    }
}

/// Headline figures for the dashboard landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_users: u64,
    pub active_users: u64,
    pub blocked_users: u64,
    pub deposits_today: u64,
    #[serde(rename = "volumeTodayBRL", with = "rust_decimal::serde::float")]
    pub volume_today_brl: Decimal,
    pub pending_deposits: u64,
}

impl From<DashboardPayload> for DashboardSummary {
    fn from(payload: DashboardPayload) -> Self {
        Self {
            total_users: payload.total_users,
            active_users: payload.active_users,
            blocked_users: payload.blocked_users,
            deposits_today: payload.deposits_today,
            volume_today_brl: payload.volume_today_brl,
            pending_deposits: payload.pending_deposits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn deposit_json() -> serde_json::Value {
        json!({
            "transactionId": "tx_001",
            "phone": "+5511999990000",
            "coldWallet": "bc1qexample",
            "network": "bitcoin",
            "paymentMethod": "PIX",
            "transactionDate": "2026-03-14T15:09:26Z",
            "coupon": "WELCOME10",
            "valueBRL": 1250.75,
            "assetValue": 0.00321,
            "status": "PAID",
            "cryptoType": "BTC",
            "username": "satoshi",
            "discountType": "PERCENTAGE",
            "discountValue": 10,
            "valueCollected": 1125.68
        })
    }

    #[test]
    fn test_deposit_mapping_roundtrip_to_display_row() {
        let payload: DepositPayload = serde_json::from_value(deposit_json()).unwrap();
        let deposit = ReportedDeposit::from(payload.clone());
        let row = deposit.display_row();

        assert_eq!(row.transaction_id, payload.transaction_id);
        assert_eq!(Decimal::from_str(&row.value_brl).unwrap(), payload.value_brl);
        assert_eq!(DepositStatus::from_str(&row.status).unwrap(), payload.status);
        assert_eq!(CryptoType::from_str(&row.crypto_type).unwrap(), payload.crypto_type);
        assert_eq!(row.transaction_date, "14/03/2026 15:09");
        assert_eq!(row.discount, "10%");
    }

    #[test]
    fn test_deposit_discount_requires_type_and_value() {
        let mut raw = deposit_json();
        raw["discountValue"] = serde_json::Value::Null;
        raw["coupon"] = json!("");
        let deposit = ReportedDeposit::from(serde_json::from_value::<DepositPayload>(raw).unwrap());
        assert!(deposit.discount.is_none());
        assert!(deposit.coupon.is_none());

        let row = deposit.display_row();
        assert_eq!(row.discount, "-");
        assert_eq!(row.coupon, "-");
    }

    #[test]
    fn test_deposit_payload_rejects_unknown_status() {
        let mut raw = deposit_json();
        raw["status"] = json!("pending");
        assert!(serde_json::from_value::<DepositPayload>(raw).is_err());
    }

    #[test]
    fn test_blocked_user_mapping() {
        let raw = json!({
            "id": "usr_1",
            "username": "mallory",
            "isActive": false,
            "level": 2,
            "documents": [{"id": "doc_1", "documentType": "CPF", "number": "123"}],
            "deposits": [{
                "id": "dep_1",
                "valueBRL": 100,
                "status": "paid",
                "cryptoType": "USDT",
                "createdAt": "2026-01-01T00:00:00Z"
            }, {
                "id": "dep_2",
                "valueBRL": 50.5,
                "status": "pending",
                "cryptoType": "USDT",
                "createdAt": "2026-01-02T00:00:00Z"
            }],
            "createdAt": "2025-12-01T00:00:00Z",
            "blockReason": "chargeback",
            "blockedAt": "2026-02-01T10:00:00Z"
        });
        let payload: BlockedUserPayload = serde_json::from_value(raw).unwrap();
        let blocked = ListAllBlockedUser::from(payload);

        assert_eq!(blocked.user.username, "mallory");
        assert!(!blocked.user.active);
        assert_eq!(blocked.user.level, 2);
        assert_eq!(blocked.user.documents.len(), 1);
        assert_eq!(blocked.user.deposits[0].status, TransactionStatus::Paid);
        assert_eq!(blocked.user.total_deposited_brl(), Decimal::new(1505, 1));
        assert_eq!(blocked.reason.as_deref(), Some("chargeback"));
    }

    #[test]
    fn test_config_mapping_preserves_fields() {
        let payload: ConfigPayload = serde_json::from_value(json!({
            "maintenanceMode": true,
            "swapPegActive": false,
            "firstFeeThreshold": 500,
            "secondFeeThreshold": 1000,
            "thirdFeeThreshold": 5000,
            "feeValue": 2.5
        }))
        .unwrap();
        let config = Config::from(payload);
        assert!(config.maintenance_mode);
        assert!(!config.swap_peg_active);
        assert_eq!(config.fee_value, Decimal::new(25, 1));
    }

    #[test]
    fn test_config_payload_requires_every_field() {
        let result = serde_json::from_value::<ConfigPayload>(json!({"maintenanceMode": true}));
        assert!(result.is_err());
    }
}
