//! Server-side session store for the admin pages.
//!
//! The browser only holds a random session id in an HTTP-only cookie. The
//! `admin` flag and pending flash messages live in process memory and vanish
//! on restart. Sessions idle for longer than the configured TTL are treated as
//! missing and purged lazily whenever a new session is created. The store
//! holds at most `max_sessions` entries; beyond that the least recently seen
//! session is evicted, unauthenticated ones first.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;

use crate::config::SessionConfig;
use crate::domain::{Flash, SessionId};

/// Per-browser session state
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    pub admin: bool,
    pub flashes: Vec<Flash>,
    pub last_seen: DateTime<Utc>,
}

impl SessionData {
    fn new() -> Self {
        Self { admin: false, flashes: Vec::new(), last_seen: Utc::now() }
    }

    fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.last_seen > ttl
    }
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<SessionId, SessionData>,
    ttl: Duration,
    cookie_name: String,
    secure_cookie: bool,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl: config.ttl(),
            cookie_name: config.cookie_name.clone(),
            secure_cookie: config.secure_cookie,
            max_sessions: config.max_sessions.max(1),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Find the live session referenced by the request cookies.
    ///
    /// Unknown, malformed and expired ids all resolve to `None`. A live
    /// session has its `last_seen` refreshed.
    pub fn resolve(&self, jar: &CookieJar) -> Option<SessionId> {
        let id = SessionId::parse(jar.get(&self.cookie_name)?.value()).ok()?;
        let now = Utc::now();

        let mut entry = self.sessions.get_mut(&id)?;
        if entry.is_expired(self.ttl, now) {
            drop(entry);
            self.sessions.remove(&id);
            debug!(session_id = %id, "Session expired");
            return None;
        }
        entry.last_seen = now;
        Some(id)
    }

    /// Start a new unauthenticated session
    pub fn create(&self) -> SessionId {
        self.insert(SessionData::new())
    }

    /// Replace `previous` with a fresh session id holding the given admin
    /// flag and the old pending flashes. The old id stops resolving.
    pub fn rotate(&self, previous: Option<SessionId>, admin: bool) -> SessionId {
        let mut data = SessionData { admin, ..SessionData::new() };
        if let Some((old_id, old)) = previous.and_then(|id| self.sessions.remove(&id)) {
            debug!(session_id = %old_id, "Session retired");
            data.flashes = old.flashes;
        }
        self.insert(data)
    }

    fn insert(&self, data: SessionData) -> SessionId {
        self.purge_expired();
        while self.sessions.len() >= self.max_sessions {
            if !self.evict_least_recent() {
                break;
            }
        }

        let id = SessionId::new();
        self.sessions.insert(id, data);
        debug!(session_id = %id, "Session created");
        id
    }

    fn evict_least_recent(&self) -> bool {
        let victim = self
            .sessions
            .iter()
            .min_by_key(|entry| (entry.admin, entry.last_seen))
            .map(|entry| *entry.key());

        match victim {
            Some(id) => {
                self.sessions.remove(&id);
                debug!(session_id = %id, "Session evicted at capacity");
                true
            }
            None => false,
        }
    }

    /// Resolve the request's session, creating one (and its cookie) if needed
    pub fn ensure(&self, jar: CookieJar) -> (SessionId, CookieJar) {
        match self.resolve(&jar) {
            Some(id) => (id, jar),
            None => {
                let id = self.create();
                (id, jar.add(self.session_cookie(id)))
            }
        }
    }

    /// Copy of the session state, if the session is still present
    pub fn snapshot(&self, id: SessionId) -> Option<SessionData> {
        self.sessions.get(&id).map(|entry| entry.clone())
    }

    pub fn is_admin(&self, id: SessionId) -> bool {
        self.sessions.get(&id).map(|entry| entry.admin).unwrap_or(false)
    }

    pub fn set_admin(&self, id: SessionId, admin: bool) {
        if let Some(mut entry) = self.sessions.get_mut(&id) {
            entry.admin = admin;
        }
    }

    pub fn push_flash(&self, id: SessionId, flash: Flash) {
        if let Some(mut entry) = self.sessions.get_mut(&id) {
            entry.flashes.push(flash);
        }
    }

    /// Drain pending flashes. Each flash is returned exactly once.
    pub fn take_flashes(&self, id: SessionId) -> Vec<Flash> {
        self.sessions
            .get_mut(&id)
            .map(|mut entry| std::mem::take(&mut entry.flashes))
            .unwrap_or_default()
    }

    /// Drop every expired session, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, data| !data.is_expired(self.ttl, now));
        let purged = before.saturating_sub(self.sessions.len());
        if purged > 0 {
            debug!(purged, "Purged expired sessions");
        }
        purged
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Build the HTTP-only cookie carrying a session id
    pub fn session_cookie(&self, id: SessionId) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), id.to_string()))
            .path("/")
            .http_only(true)
            .secure(self.secure_cookie)
            .same_site(SameSite::Lax)
            .build()
    }

    #[cfg(test)]
    fn backdate(&self, id: SessionId, by: Duration) {
        if let Some(mut entry) = self.sessions.get_mut(&id) {
            entry.last_seen = entry.last_seen - by;
        }
    }
}
