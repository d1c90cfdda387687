use std::sync::Arc;

use tracing::info;

use super::ErrorBanner;
use crate::app::{UseCase, UseCases};
use crate::domain::{Config, Locale, UpdateConfigRequest};

/// System configuration page with its edit modal
pub struct ConfigScreen {
    use_cases: Arc<UseCases>,
    locale: Locale,
    config: Option<Config>,
    edit_open: bool,
    loading: bool,
    error: ErrorBanner,
}

impl ConfigScreen {
    #[must_use]
    pub fn new(use_cases: Arc<UseCases>, locale: Locale) -> Self {
        Self {
            use_cases,
            locale,
            config: None,
            edit_open: false,
            loading: false,
            error: ErrorBanner::default(),
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.use_cases.list_config.execute(()).await {
            Ok(config) => {
                self.config = Some(config);
                self.error.dismiss();
            }
            Err(e) => self.error.show(&e, self.locale),
        }
        self.loading = false;
    }

    pub fn open_edit(&mut self) {
        self.edit_open = true;
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
    }

    /// Send a partial update. The modal closes only when the save succeeds.
    pub async fn save(&mut self, changes: UpdateConfigRequest) -> bool {
        self.loading = true;
        let saved = match self.use_cases.update_config.execute(changes).await {
            Ok(config) => {
                info!("Configuration saved");
                self.config = Some(config);
                self.edit_open = false;
                self.error.dismiss();
                true
            }
            Err(e) => {
                self.error.show(&e, self.locale);
                false
            }
        };
        self.loading = false;
        saved
    }

    pub fn dismiss_error(&mut self) {
        self.error.dismiss();
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.message()
    }
}
