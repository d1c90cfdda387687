//! Application layer: use cases, their container, screen state and exports.

pub mod container;
pub mod export;
pub mod screens;
pub mod state;
pub mod use_cases;

pub use container::UseCases;
pub use export::{DepositSpreadsheet, export_filename};
pub use screens::{
    BlockedUsersScreen, ConfigScreen, DashboardScreen, DepositReportScreen, UsersScreen,
};
pub use state::AppState;
pub use use_cases::UseCase;
