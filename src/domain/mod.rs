//! Domain layer containing core business types, traits, and error definitions.

pub mod entities;
pub mod error;
pub mod payloads;
pub mod traits;
pub mod types;

pub use entities::{
    Config, DashboardSummary, DepositRow, Discount, ListAllBlockedUser, ListedUser,
    ReportedDeposit, UserDeposit, UserDocument,
};
pub use error::{
    ConfigError, DashboardError, DepositError, DomainError, ErrorCode, RepositoryError, UserError,
};
pub use traits::{ConfigRepository, DashboardRepository, DepositRepository, UserRepository};
pub use types::{
    BlockUserRequest, CryptoType, DepositFilters, DepositStatus, DiscountType, ErrorDetail,
    ErrorResponse, HealthResponse, HealthStatus, Locale, Page, PageRequest,
    ResendDepositOrderRequest, TransactionStatus, UnblockUserRequest, UpdateConfigRequest,
};
