use std::sync::Arc;

use tracing::info;

use super::ErrorBanner;
use crate::app::{UseCase, UseCases};
use crate::domain::{
    BlockUserRequest, ListAllBlockedUser, ListedUser, Locale, Page, PageRequest,
    UnblockUserRequest,
};

/// Paginated user list with the block modal
pub struct UsersScreen {
    use_cases: Arc<UseCases>,
    locale: Locale,
    page: PageRequest,
    users: Option<Page<ListedUser>>,
    block_open: bool,
    loading: bool,
    error: ErrorBanner,
}

impl UsersScreen {
    #[must_use]
    pub fn new(use_cases: Arc<UseCases>, locale: Locale) -> Self {
        Self {
            use_cases,
            locale,
            page: PageRequest::default(),
            users: None,
            block_open: false,
            loading: false,
            error: ErrorBanner::default(),
        }
    }

    pub async fn load(&mut self) {
        self.fetch(self.page).await;
    }

    /// The current page only moves once `request` has loaded
    async fn fetch(&mut self, request: PageRequest) {
        self.loading = true;
        match self.use_cases.list_users.execute(request).await {
            Ok(page) => {
                self.page = PageRequest::new(page.page, page.page_size);
                self.users = Some(page);
                self.error.dismiss();
            }
            Err(e) => self.error.show(&e, self.locale),
        }
        self.loading = false;
    }

    pub async fn go_to_page(&mut self, page: u32) {
        self.fetch(PageRequest { page, ..self.page }).await;
    }

    /// Changing the page size restarts from the first page
    pub async fn set_page_size(&mut self, page_size: u32) {
        self.fetch(PageRequest::new(1, page_size)).await;
    }

    pub async fn next_page(&mut self) {
        if self.users.as_ref().is_some_and(Page::has_next) {
            self.go_to_page(self.page.page + 1).await;
        }
    }

    pub async fn previous_page(&mut self) {
        if self.page.page > 1 {
            self.go_to_page(self.page.page - 1).await;
        }
    }

    pub fn open_block_modal(&mut self) {
        self.block_open = true;
    }

    pub fn close_block_modal(&mut self) {
        self.block_open = false;
    }

    /// Block a user and refresh the current page on success
    pub async fn block(&mut self, request: BlockUserRequest) -> bool {
        match self.use_cases.block_user.execute(request).await {
            Ok(()) => {
                info!("User blocked");
                self.block_open = false;
                self.load().await;
                true
            }
            Err(e) => {
                self.error.show(&e, self.locale);
                false
            }
        }
    }

    pub async fn unblock(&mut self, request: UnblockUserRequest) -> bool {
        match self.use_cases.unblock_user.execute(request).await {
            Ok(()) => {
                info!("User unblocked");
                self.load().await;
                true
            }
            Err(e) => {
                self.error.show(&e, self.locale);
                false
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error.dismiss();
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn users(&self) -> Option<&Page<ListedUser>> {
        self.users.as_ref()
    }

    pub fn is_block_modal_open(&self) -> bool {
        self.block_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.message()
    }
}

/// Blocked users, sorted by username
pub struct BlockedUsersScreen {
    use_cases: Arc<UseCases>,
    locale: Locale,
    users: Vec<ListAllBlockedUser>,
    error: ErrorBanner,
}

impl BlockedUsersScreen {
    #[must_use]
    pub fn new(use_cases: Arc<UseCases>, locale: Locale) -> Self {
        Self {
            use_cases,
            locale,
            users: Vec::new(),
            error: ErrorBanner::default(),
        }
    }

    pub async fn load(&mut self) {
        match self.use_cases.list_blocked_users.execute(()).await {
            Ok(mut users) => {
                users.sort_by_cached_key(|b| b.user.username.to_lowercase());
                self.users = users;
                self.error.dismiss();
            }
            Err(e) => self.error.show(&e, self.locale),
        }
    }

    pub async fn unblock(&mut self, user_id: &str) -> bool {
        let request = UnblockUserRequest::by_user_id(user_id);
        match self.use_cases.unblock_user.execute(request).await {
            Ok(()) => {
                info!(user_id, "User unblocked");
                self.load().await;
                true
            }
            Err(e) => {
                self.error.show(&e, self.locale);
                false
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error.dismiss();
    }

    pub fn users(&self) -> &[ListAllBlockedUser] {
        &self.users
    }

    pub fn error(&self) -> Option<&str> {
        self.error.message()
    }
}
