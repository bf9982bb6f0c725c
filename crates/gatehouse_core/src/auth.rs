//! Session gate consumed by the host page.
//!
//! # Responsibility
//! - Track the single boolean login flag for the session.
//!
//! The host redirects away when unauthenticated; the core carries no
//! authorization model beyond this flag.

/// Per-session authentication state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// A session that has passed the login gate.
    pub fn logged_in() -> Self {
        Self {
            authenticated: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}
