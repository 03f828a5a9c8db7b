//! Session-role state machine.
//!
//! The dashboard's only real state machine: unauthenticated, or logged in
//! as one of three staff roles. The state is two keys (`isLoggedIn`,
//! `userRole`) held in a config struct with explicit load/save against a
//! JSON file, no encoding and no expiry - the same shape the web client
//! persists in `localStorage`.
//!
//! Role gating is advisory. It decides which dashboard variant renders
//! and whether the edit/delete controls appear, but nothing downstream
//! re-checks it; every mutation stays reachable by direct navigation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use medilink_core::StaffRole;

/// Errors that can occur loading or saving session state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The saved state is not valid JSON.
    #[error("Corrupt session file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Which dashboard a logged-in user lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardVariant {
    Admin,
    Manager,
    Supervisor,
}

/// Persisted session state - the web client's two session keys as a
/// struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    is_logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_role: Option<StaffRole>,
}

impl SessionState {
    /// Load session state from `path`.
    ///
    /// A missing file is the unauthenticated state, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save session state to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Transition: unauthenticated (or any role) -> `role`.
    pub fn login(&mut self, role: StaffRole) {
        self.is_logged_in = true;
        self.user_role = Some(role);
        tracing::debug!(role = %role, "Session logged in");
    }

    /// Transition: any state -> unauthenticated.
    pub fn logout(&mut self) {
        self.is_logged_in = false;
        self.user_role = None;
        tracing::debug!("Session logged out");
    }

    /// Whether a login has been recorded.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// The logged-in role, if any.
    #[must_use]
    pub const fn role(&self) -> Option<StaffRole> {
        self.user_role
    }

    /// Which dashboard variant should render.
    ///
    /// `None` means the login page. A file claiming `isLoggedIn` without
    /// a role is treated as unauthenticated.
    #[must_use]
    pub const fn dashboard(&self) -> Option<DashboardVariant> {
        if !self.is_logged_in {
            return None;
        }
        match self.user_role {
            Some(StaffRole::Admin) => Some(DashboardVariant::Admin),
            Some(StaffRole::Manager) => Some(DashboardVariant::Manager),
            Some(StaffRole::Supervisor) => Some(DashboardVariant::Supervisor),
            None => None,
        }
    }

    /// Whether the edit/delete controls are enabled. Admin only.
    #[must_use]
    pub const fn can_manage_catalog(&self) -> bool {
        matches!(
            (self.is_logged_in, self.user_role),
            (true, Some(StaffRole::Admin))
        )
    }
}

/// The client-side copy of the login table.
///
/// Mirrors the server's default credential map; a match yields the role
/// to log the session in with.
#[must_use]
pub fn authenticate(username: &str, password: &str) -> Option<StaffRole> {
    match (username, password) {
        ("admin", "admin123") => Some(StaffRole::Admin),
        ("manager", "manager123") => Some(StaffRole::Manager),
        ("supervisor", "supervisor123") => Some(StaffRole::Supervisor),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_unauthenticated() {
        let session = SessionState::default();
        assert!(!session.is_logged_in());
        assert_eq!(session.role(), None);
        assert_eq!(session.dashboard(), None);
        assert!(!session.can_manage_catalog());
    }

    #[test]
    fn test_login_logout_transitions() {
        let mut session = SessionState::default();

        session.login(StaffRole::Manager);
        assert!(session.is_logged_in());
        assert_eq!(session.dashboard(), Some(DashboardVariant::Manager));
        assert!(!session.can_manage_catalog());

        session.login(StaffRole::Admin);
        assert_eq!(session.dashboard(), Some(DashboardVariant::Admin));
        assert!(session.can_manage_catalog());

        session.logout();
        assert!(!session.is_logged_in());
        assert_eq!(session.dashboard(), None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = SessionState::default();
        session.login(StaffRole::Supervisor);
        session.save(&path).unwrap();

        let loaded = SessionState::load(&path).unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.dashboard(), Some(DashboardVariant::Supervisor));
    }

    #[test]
    fn test_saved_file_uses_the_local_storage_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = SessionState::default();
        session.login(StaffRole::Admin);
        session.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["isLoggedIn"], true);
        assert_eq!(json["userRole"], "admin");
    }

    #[test]
    fn test_load_missing_file_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionState::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            SessionState::load(&path),
            Err(SessionError::Corrupt(_))
        ));
    }

    #[test]
    fn test_logged_in_without_role_renders_login_page() {
        let session: SessionState = serde_json::from_str(r#"{"isLoggedIn": true}"#).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.dashboard(), None);
        assert!(!session.can_manage_catalog());
    }

    #[test]
    fn test_authenticate_against_the_client_table() {
        assert_eq!(authenticate("admin", "admin123"), Some(StaffRole::Admin));
        assert_eq!(
            authenticate("supervisor", "supervisor123"),
            Some(StaffRole::Supervisor)
        );
        assert_eq!(authenticate("admin", "wrong"), None);
        assert_eq!(authenticate("intruder", "admin123"), None);
    }
}
