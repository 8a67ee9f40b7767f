//! # repology-admin
//!
//! Administrative HTTP service for the repology package comparison site:
//! shared-password login, triage of user reports, repository update
//! diagnostics, project redirect management and name sample browsing.
//!
//! ## Architecture
//!
//! ```text
//! HTTP (axum) → Admin session gate → Services → Database gateway (SQLx)
//!      ↓                ↓
//! JSON views     Session store (flash messages)
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use errors::{AdminError, Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
