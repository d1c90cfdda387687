//! Infrastructure layer containing external service implementations.

pub mod payments;

pub use payments::{
    ApiClient, ApiClientConfig, HttpConfigRepository, HttpDashboardRepository,
    HttpDepositRepository, HttpUserRepository,
};
