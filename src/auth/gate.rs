//! Admin capability
//!
//! Every mutating service call takes an [`AdminGrant`]. The grant cannot be
//! constructed outside this module, and the only way to get one is from a
//! session whose `admin` flag is set.

use crate::auth::session::SessionData;

/// Proof that the current request belongs to an authenticated admin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminGrant {
    _private: (),
}

impl AdminGrant {
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self { _private: () }
    }
}

pub fn authorize(session: &SessionData) -> Option<AdminGrant> {
    session.admin.then_some(AdminGrant { _private: () })
}

pub fn is_authorized(session: Option<&SessionData>) -> bool {
    session.and_then(authorize).is_some()
}
