//! The API layer, containing web handlers and routing.

pub mod deposits;
pub mod error;
pub mod handlers;
pub mod router;
pub mod users;

pub use error::{ApiError, Localize};
pub use handlers::ApiDoc;
pub use router::create_router;
