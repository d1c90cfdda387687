//! Test doubles and fixtures, available to integration tests through the
//! `test-utils` feature.

pub mod fixtures;
pub mod mocks;

pub use fixtures::{
    sample_config_payload, sample_dashboard_payload, sample_deposit_payload, sample_user_payload,
};
pub use mocks::{
    MockConfig, MockConfigRepository, MockDashboardRepository, MockDepositRepository,
    MockUserRepository,
};
