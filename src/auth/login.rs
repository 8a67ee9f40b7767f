//! Shared-password admin login

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::config::AdminConfig;
use crate::domain::Flash;

/// Result of a login form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// New value of the session's admin flag, `None` to leave it unchanged
    pub admin: Option<bool>,
    pub flash: Flash,
}

/// Decide what a login form submission does.
///
/// A submission without a `password` field is the logout button.
pub fn attempt_login(config: &AdminConfig, password: Option<&str>) -> LoginOutcome {
    let secret = match config.password.as_deref() {
        Some(secret) if config.login_enabled() => secret,
        _ => {
            return LoginOutcome { admin: None, flash: Flash::danger("Admin login disabled") };
        }
    };

    match password {
        None => {
            info!("Admin logged out");
            LoginOutcome { admin: Some(false), flash: Flash::success("Logged out successfully") }
        }
        Some(supplied) if passwords_match(supplied, secret) => {
            info!("Admin logged in");
            LoginOutcome { admin: Some(true), flash: Flash::success("Logged in successfully") }
        }
        Some(_) => {
            warn!("Rejected admin login with incorrect password");
            LoginOutcome { admin: None, flash: Flash::danger("Incorrect admin password") }
        }
    }
}

/// Constant-time comparison: hashing fixes the length and the XOR fold
/// never exits early, so timing reveals nothing about the secret.
fn passwords_match(supplied: &str, secret: &str) -> bool {
    let supplied = Sha256::digest(supplied.as_bytes());
    let secret = Sha256::digest(secret.as_bytes());
    supplied.iter().zip(secret.iter()).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
}
