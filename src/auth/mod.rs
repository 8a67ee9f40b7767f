//! Admin authentication
//!
//! A single shared password unlocks the admin pages. Login state lives in a
//! server-side session; services only ever see an [`AdminGrant`].

pub mod gate;
pub mod login;
pub mod session;

pub use gate::{authorize, is_authorized, AdminGrant};
pub use login::{attempt_login, LoginOutcome};
pub use session::{SessionData, SessionStore};
