use std::sync::Arc;

use super::ErrorBanner;
use crate::app::{UseCase, UseCases};
use crate::domain::{DashboardSummary, Locale};

/// Landing page figures
pub struct DashboardScreen {
    use_cases: Arc<UseCases>,
    locale: Locale,
    summary: Option<DashboardSummary>,
    error: ErrorBanner,
}

impl DashboardScreen {
    #[must_use]
    pub fn new(use_cases: Arc<UseCases>, locale: Locale) -> Self {
        Self {
            use_cases,
            locale,
            summary: None,
            error: ErrorBanner::default(),
        }
    }

    pub async fn load(&mut self) {
        match self.use_cases.dashboard_summary.execute(()).await {
            Ok(summary) => {
                self.summary = Some(summary);
                self.error.dismiss();
            }
            Err(e) => self.error.show(&e, self.locale),
        }
    }

    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.summary.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.message()
    }

    pub fn dismiss_error(&mut self) {
        self.error.dismiss();
    }
}
