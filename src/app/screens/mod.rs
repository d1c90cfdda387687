//! Per-page dashboard state.
//!
//! A screen owns what one page shows: the last loaded data, modal flags,
//! pagination and a dismissible error message. Every action goes through a
//! use case and the outcome is folded back into the screen; nothing here
//! talks to a repository directly.

mod config;
mod dashboard;
mod deposits;
mod users;

pub use config::ConfigScreen;
pub use dashboard::DashboardScreen;
pub use deposits::DepositReportScreen;
pub use users::{BlockedUsersScreen, UsersScreen};

use crate::domain::{DomainError, Locale};

/// Last error shown to the operator, cleared by hand or by the next success
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    pub fn show<E: DomainError>(&mut self, error: &E, locale: Locale) {
        self.message = Some(error.user_message(locale).to_string());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use crate::app::UseCases;
    use crate::test_utils::{
        MockConfigRepository, MockDashboardRepository, MockDepositRepository, MockUserRepository,
    };

    /// Use cases over the given mocks, with fresh defaults for the rest
    pub struct Harness {
        pub config: Arc<MockConfigRepository>,
        pub users: Arc<MockUserRepository>,
        pub deposits: Arc<MockDepositRepository>,
        pub dashboard: Arc<MockDashboardRepository>,
    }

    impl Default for Harness {
        fn default() -> Self {
            Self {
                config: Arc::new(MockConfigRepository::new()),
                users: Arc::new(MockUserRepository::new()),
                deposits: Arc::new(MockDepositRepository::new()),
                dashboard: Arc::new(MockDashboardRepository::new()),
            }
        }
    }

    impl Harness {
        pub fn use_cases(&self) -> Arc<UseCases> {
            Arc::new(UseCases::new(
                self.config.clone(),
                self.users.clone(),
                self.deposits.clone(),
                self.dashboard.clone(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserError;

    #[test]
    fn test_banner_localizes_and_dismisses() {
        let mut banner = ErrorBanner::default();
        assert!(banner.message().is_none());

        banner.show(&UserError::NotFound, Locale::PortugueseBr);
        assert_eq!(banner.message(), Some("Usuário não encontrado."));

        banner.dismiss();
        assert!(banner.message().is_none());
    }
}
