//! # HTTP Layer
//!
//! Axum router, session extractor, error mapping and server for the admin
//! pages.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use extract::AdminSession;
pub use routes::{build_router, redirect_to, ApiState, Repositories, ADMIN_PATH};
pub use server::start_api_server;
