//! Payments API adapters.
//!
//! One repository per resource, all sharing an [`ApiClient`]. Each method
//! issues exactly one request: no retries, no caching.

mod client;
mod config;
mod dashboard;
mod deposits;
mod users;

pub use client::{ApiClient, ApiClientConfig, DEFAULT_TIMEOUT_SECS};
pub use config::HttpConfigRepository;
pub use dashboard::HttpDashboardRepository;
pub use deposits::HttpDepositRepository;
pub use users::HttpUserRepository;
