//! Sample payloads shared by unit and integration tests.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::payloads::{
    ConfigPayload, DashboardPayload, DepositPayload, DocumentPayload, UserDepositPayload,
    UserPayload,
};
use crate::domain::{CryptoType, DepositStatus, DiscountType, TransactionStatus};

pub fn sample_config_payload() -> ConfigPayload {
    ConfigPayload {
        maintenance_mode: false,
        swap_peg_active: true,
        first_fee_threshold: Decimal::new(500, 0),
        second_fee_threshold: Decimal::new(1_000, 0),
        third_fee_threshold: Decimal::new(5_000, 0),
        fee_value: Decimal::new(250, 2),
    }
}

/// A paid BTC deposit made by `satoshi` on 2026-03-14
pub fn sample_deposit_payload(transaction_id: &str) -> DepositPayload {
    DepositPayload {
        transaction_id: transaction_id.to_string(),
        phone: "+5511999990000".to_string(),
        cold_wallet: "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".to_string(),
        network: "bitcoin".to_string(),
        payment_method: "PIX".to_string(),
        transaction_date: Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap(),
        coupon: Some("WELCOME10".to_string()),
        value_brl: Decimal::new(125_075, 2),
        asset_value: Decimal::new(321, 5),
        status: DepositStatus::Paid,
        crypto_type: CryptoType::Btc,
        username: "satoshi".to_string(),
        discount_type: Some(DiscountType::Percentage),
        discount_value: Some(Decimal::new(10, 0)),
        value_collected: Decimal::new(112_568, 2),
    }
}

pub fn sample_user_payload(id: &str, username: &str) -> UserPayload {
    UserPayload {
        id: id.to_string(),
        username: username.to_string(),
        email: Some(format!("{}@example.com", username)),
        phone: None,
        is_active: true,
        level: 1,
        documents: vec![DocumentPayload {
            id: format!("doc_{}", id),
            document_type: "CPF".to_string(),
            number: format!("DOC-{}", id),
        }],
        deposits: vec![UserDepositPayload {
            id: format!("dep_{}", id),
            value_brl: Decimal::new(10_000, 2),
            status: TransactionStatus::Paid,
            crypto_type: CryptoType::Depix,
            created_at: Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap(),
        }],
        created_at: Utc.with_ymd_and_hms(2025, 11, 20, 8, 30, 0).unwrap(),
    }
}

pub fn sample_dashboard_payload() -> DashboardPayload {
    DashboardPayload {
        total_users: 1_204,
        active_users: 987,
        blocked_users: 12,
        deposits_today: 58,
        volume_today_brl: Decimal::new(4_350_090, 2),
        pending_deposits: 7,
    }
}
