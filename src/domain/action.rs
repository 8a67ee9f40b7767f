//! Admin form actions
//!
//! Forms submit the action as a free-form string. Parsing is permissive: any
//! value that is not a recognised keyword falls back to the default variant,
//! which is what the admin pages have always done.

use serde::{Deserialize, Serialize};

/// What to do with a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportAction {
    /// Mark accepted and store the reply
    Accept,
    /// Mark rejected and store the reply
    Reject,
    /// Store the reply and clear any previous outcome
    Reply,
    /// Remove the report entirely
    Delete,
}

impl ReportAction {
    pub fn parse(action: Option<&str>) -> Self {
        match action {
            Some("accept") => ReportAction::Accept,
            Some("reject") => ReportAction::Reject,
            Some("delete") => ReportAction::Delete,
            _ => ReportAction::Reply,
        }
    }

    /// Outcome flag stored for non-delete actions
    pub fn outcome(self) -> Option<bool> {
        match self {
            ReportAction::Accept => Some(true),
            ReportAction::Reject => Some(false),
            ReportAction::Reply | ReportAction::Delete => None,
        }
    }
}

/// What to do with a submitted `oldname -> newname` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectAction {
    Add,
    Remove,
}

impl RedirectAction {
    pub fn parse(action: Option<&str>) -> Self {
        match action {
            Some("remove") => RedirectAction::Remove,
            _ => RedirectAction::Add,
        }
    }
}
