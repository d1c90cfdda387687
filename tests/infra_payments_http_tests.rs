//! Integration tests for the payments API adapters.
//!
//! Uses `wiremock` to stand in for the payments API and checks request shape
//! plus the normalization of every failure mode into `RepositoryError`.

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_partial_json, header, method, path, query_param},
};

use payment_admin_dashboard::domain::payloads::PagePayload;
use payment_admin_dashboard::domain::{
    BlockUserRequest, ConfigRepository, CryptoType, DashboardRepository, DepositFilters,
    DepositRepository, DepositStatus, PageRequest, RepositoryError, UnblockUserRequest,
    UpdateConfigRequest, UserRepository,
};
use payment_admin_dashboard::infra::{
    ApiClient, ApiClientConfig, HttpConfigRepository, HttpDashboardRepository,
    HttpDepositRepository, HttpUserRepository,
};
use payment_admin_dashboard::test_utils::{
    sample_config_payload, sample_dashboard_payload, sample_deposit_payload, sample_user_payload,
};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiClientConfig::new(server.uri())).unwrap()
}

// ============================================================================
// CONFIG
// ============================================================================

mod config_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_config_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/config"))
            .and(header("authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_config_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let config = ApiClientConfig::new(server.uri())
            .with_token(SecretString::from("secret-token".to_string()));
        let repo = HttpConfigRepository::new(ApiClient::new(config).unwrap());

        let payload = repo.fetch_config().await.unwrap();
        assert_eq!(payload, sample_config_payload());
    }

    #[tokio::test]
    async fn test_update_config_sends_only_present_fields() {
        let server = MockServer::start().await;
        let mut updated = sample_config_payload();
        updated.maintenance_mode = true;
        updated.fee_value = Decimal::new(3, 0);

        Mock::given(method("PATCH"))
            .and(path("/admin/config"))
            .and(body_json(json!({ "maintenanceMode": true, "feeValue": 3.0 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
            .expect(1)
            .mount(&server)
            .await;

        let repo = HttpConfigRepository::new(client_for(&server));
        let request = UpdateConfigRequest {
            maintenance_mode: Some(true),
            fee_value: Some(Decimal::new(3, 0)),
            ..Default::default()
        };

        let payload = repo.update_config(&request).await.unwrap();
        assert!(payload.maintenance_mode);
        assert_eq!(payload.fee_value, Decimal::new(3, 0));
    }

    #[tokio::test]
    async fn test_malformed_json_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/config"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let repo = HttpConfigRepository::new(client_for(&server));
        let result = repo.fetch_config().await;
        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_missing_field_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/config"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "maintenanceMode": true })),
            )
            .mount(&server)
            .await;

        let repo = HttpConfigRepository::new(client_for(&server));
        let result = repo.fetch_config().await;
        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_server_error_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/config"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let repo = HttpConfigRepository::new(client_for(&server));
        let result = repo.fetch_config().await;
        assert!(matches!(result, Err(RepositoryError::Unknown(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unknown() {
        let client = ApiClient::new(ApiClientConfig::new("http://127.0.0.1:1")).unwrap();
        let repo = HttpConfigRepository::new(client);

        let result = repo.fetch_config().await;
        assert!(matches!(result, Err(RepositoryError::Unknown(_))));
    }

    #[tokio::test]
    async fn test_timeout_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/config"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(sample_config_payload())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config =
            ApiClientConfig::new(server.uri()).with_timeout(Duration::from_millis(200));
        let repo = HttpConfigRepository::new(ApiClient::new(config).unwrap());

        let result = repo.fetch_config().await;
        assert!(matches!(result, Err(RepositoryError::Unknown(_))));
    }
}

// ============================================================================
// USERS
// ============================================================================

mod user_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_users_sends_paging() {
        let server = MockServer::start().await;
        let page = PagePayload {
            items: vec![sample_user_payload("usr_1", "satoshi")],
            total: 41,
            page: 3,
            page_size: 20,
        };
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .and(query_param("page", "3"))
            .and(query_param("pageSize", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&page))
            .expect(1)
            .mount(&server)
            .await;

        let repo = HttpUserRepository::new(client_for(&server));
        let result = repo.list_users(&PageRequest::new(3, 20)).await.unwrap();
        assert_eq!(result, page);
    }

    #[tokio::test]
    async fn test_block_conflict_is_already_exists() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/users/block"))
            .and(body_partial_json(json!({ "username": "satoshi", "reason": "spam" })))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "code": "ALREADY_EXISTS",
                "message": "User already blocked"
            })))
            .mount(&server)
            .await;

        let repo = HttpUserRepository::new(client_for(&server));
        let request = BlockUserRequest::by_username("satoshi", Some("spam".to_string()));

        let result = repo.block_user(&request).await;
        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists("User already blocked".to_string()))
        );
    }

    #[tokio::test]
    async fn test_unblock_missing_user_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/users/unblock"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let repo = HttpUserRepository::new(client_for(&server));
        let result = repo.unblock_user(&UnblockUserRequest::by_user_id("usr_9")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_body_code_decides_when_status_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/users/block"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "NOT_FOUND",
                "message": "No such user"
            })))
            .mount(&server)
            .await;

        let repo = HttpUserRepository::new(client_for(&server));
        let result = repo
            .block_user(&BlockUserRequest::by_user_id("usr_404", None))
            .await;
        assert_eq!(result, Err(RepositoryError::NotFound("No such user".to_string())));
    }

    #[tokio::test]
    async fn test_unknown_remote_code_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/users/blocked"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "UNKNOWN_ERROR",
                "message": "boom"
            })))
            .mount(&server)
            .await;

        let repo = HttpUserRepository::new(client_for(&server));
        let result = repo.list_blocked_users().await;
        assert_eq!(result, Err(RepositoryError::Unknown("boom".to_string())));
    }

    #[tokio::test]
    async fn test_list_blocked_users_decodes_flattened_user() {
        let server = MockServer::start().await;
        let mut body = serde_json::to_value(sample_user_payload("usr_1", "satoshi")).unwrap();
        body["blockReason"] = json!("chargeback");
        body["blockedAt"] = json!("2026-02-01T10:00:00Z");
        Mock::given(method("GET"))
            .and(path("/admin/users/blocked"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([body])))
            .mount(&server)
            .await;

        let repo = HttpUserRepository::new(client_for(&server));
        let blocked = repo.list_blocked_users().await.unwrap();
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].user.username, "satoshi");
        assert_eq!(blocked[0].block_reason.as_deref(), Some("chargeback"));
    }
}

// ============================================================================
// DEPOSITS
// ============================================================================

mod deposit_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_deposits_sends_filters() {
        let server = MockServer::start().await;
        let page = PagePayload {
            items: vec![sample_deposit_payload("tx_1")],
            total: 1,
            page: 1,
            page_size: 20,
        };
        Mock::given(method("GET"))
            .and(path("/admin/deposits"))
            .and(query_param("page", "1"))
            .and(query_param("status", "PAID"))
            .and(query_param("cryptoType", "BTC"))
            .and(query_param("startDate", "2026-03-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&page))
            .expect(1)
            .mount(&server)
            .await;

        let repo = HttpDepositRepository::new(client_for(&server));
        let filters = DepositFilters {
            status: Some(DepositStatus::Paid),
            crypto_type: Some(CryptoType::Btc),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            ..Default::default()
        };

        let result = repo
            .list_deposits(&PageRequest::default(), &filters)
            .await
            .unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].transaction_id, "tx_1");
        assert_eq!(result.items[0].status, DepositStatus::Paid);
    }

    #[tokio::test]
    async fn test_unknown_deposit_status_is_serialization_error() {
        let server = MockServer::start().await;
        let mut deposit = serde_json::to_value(sample_deposit_payload("tx_1")).unwrap();
        deposit["status"] = json!("REFUNDED");
        Mock::given(method("GET"))
            .and(path("/admin/deposits/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([deposit])))
            .mount(&server)
            .await;

        let repo = HttpDepositRepository::new(client_for(&server));
        let result = repo.list_all_deposits(&DepositFilters::default()).await;
        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_resend_encodes_transaction_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/deposits/tx%2F1/resend"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let repo = HttpDepositRepository::new(client_for(&server));
        repo.resend_deposit_order("tx/1").await.unwrap();
    }

    #[tokio::test]
    async fn test_resend_missing_deposit_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/deposits/tx_404/resend"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "NOT_FOUND",
                "message": "Deposit not found"
            })))
            .mount(&server)
            .await;

        let repo = HttpDepositRepository::new(client_for(&server));
        let result = repo.resend_deposit_order("tx_404").await;
        assert_eq!(
            result,
            Err(RepositoryError::NotFound("Deposit not found".to_string()))
        );
    }
}

// ============================================================================
// DASHBOARD
// ============================================================================

mod dashboard_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_summary_and_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_dashboard_payload()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let repo = HttpDashboardRepository::new(client_for(&server));
        let summary = repo.fetch_summary().await.unwrap();
        assert_eq!(summary.total_users, 1_204);
        assert_eq!(summary.pending_deposits, 7);
        assert!(repo.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_health_check_fails_on_503() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let repo = HttpDashboardRepository::new(client_for(&server));
        assert!(matches!(
            repo.health_check().await,
            Err(RepositoryError::Unknown(_))
        ));
    }
}
