//! One-shot user notifications
//!
//! Services return a [`Flash`] describing the outcome of an admin action. The
//! HTTP layer parks it in the session and the next rendered view drains it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a flash message, named after the CSS classes the pages use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Danger,
}

impl fmt::Display for FlashLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashLevel::Success => write!(f, "success"),
            FlashLevel::Danger => write!(f, "danger"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self { level: FlashLevel::Success, message: message.into() }
    }

    pub fn danger<S: Into<String>>(message: S) -> Self {
        Self { level: FlashLevel::Danger, message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        self.level == FlashLevel::Success
    }
}
