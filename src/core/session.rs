//! Identity/session store - Simulated authentication.
//!
//! Login and register model a network round-trip with a fixed delay; only the
//! two hardcoded demo credential pairs can log in, while registration always
//! succeeds with a fresh non-admin principal. The active principal persists
//! under the `user` key so a reload restores the session. Overlapping
//! login/register calls are not serialized - the last one to resolve wins.

use crate::core::Notifier;
use crate::entities::Principal;
use crate::errors::{Error, Result};
use crate::storage::{KeyValueStore, USER_KEY};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

const ADMIN_EMAIL: &str = "admin@example.com";
const USER_EMAIL: &str = "user@example.com";
const DEMO_PASSWORD: &str = "password";

/// Holds the active principal (if any) and its persistence handle.
pub struct SessionStore {
    user: Option<Principal>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<Notifier>,
    /// Simulated network round-trip applied to login and register.
    network_delay: Duration,
}

impl SessionStore {
    /// Restores a previously persisted principal. An unreadable record is
    /// discarded from storage and the session stays anonymous (logged only).
    #[must_use]
    pub fn load(
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<Notifier>,
        network_delay: Duration,
    ) -> Self {
        let user = match storage.get(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Principal>(&raw) {
                Ok(principal) => Some(principal),
                Err(err) => {
                    warn!("discarding unreadable session record: {err}");
                    if let Err(err) = storage.remove(USER_KEY) {
                        warn!("failed to clear corrupt session record: {err}");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("failed to read session record: {err}");
                None
            }
        };
        SessionStore {
            user,
            storage,
            notifier,
            network_delay,
        }
    }

    /// The active principal, or `None` when anonymous.
    #[must_use]
    pub fn current(&self) -> Option<&Principal> {
        self.user.as_ref()
    }

    /// True when the active principal carries the admin flag.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Authenticates against the two fixed demo credential pairs after the
    /// simulated network delay. Success persists and activates the principal.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCredentials`] for any other email/password
    /// combination; session state is left unchanged.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Principal> {
        tokio::time::sleep(self.network_delay).await;

        let principal = match (email, password) {
            (ADMIN_EMAIL, DEMO_PASSWORD) => Principal {
                id: "1".to_string(),
                name: "Admin User".to_string(),
                email: ADMIN_EMAIL.to_string(),
                is_admin: true,
            },
            (USER_EMAIL, DEMO_PASSWORD) => Principal {
                id: "2".to_string(),
                name: "Regular User".to_string(),
                email: USER_EMAIL.to_string(),
                is_admin: false,
            },
            _ => {
                info!(%email, "login rejected");
                return Err(Error::InvalidCredentials);
            }
        };

        info!(%email, is_admin = principal.is_admin, "login succeeded");
        self.activate(principal.clone());
        Ok(principal)
    }

    /// Registers a new account after the simulated network delay. There is no
    /// uniqueness check - registration always succeeds with a fresh non-admin
    /// principal, which is persisted and activated.
    pub async fn register(&mut self, name: &str, email: &str, _password: &str) -> Principal {
        tokio::time::sleep(self.network_delay).await;

        let principal = Principal {
            id: format!("user_{}", Uuid::new_v4().simple()),
            name: name.to_string(),
            email: email.to_string(),
            is_admin: false,
        };
        info!(%email, "registered new account");
        self.activate(principal.clone());
        principal
    }

    /// Clears the active principal and its persisted record, and emits a
    /// success toast.
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(err) = self.storage.remove(USER_KEY) {
            warn!("failed to clear session record: {err}");
        }
        self.notifier.success("Logged out successfully");
        info!("logged out");
    }

    fn activate(&mut self, principal: Principal) {
        match serde_json::to_string(&principal) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(USER_KEY, &raw) {
                    warn!("failed to persist session record: {err}");
                }
            }
            Err(err) => warn!("failed to serialize session record: {err}"),
        }
        self.user = Some(principal);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Severity;
    use crate::test_utils::{memory_storage, test_session};

    #[tokio::test]
    async fn test_admin_login_succeeds() {
        let (mut session, _storage, _notifier) = test_session();

        let principal = session.login("admin@example.com", "password").await.unwrap();
        assert!(principal.is_admin);
        assert_eq!(principal.name, "Admin User");
        assert!(session.is_admin());
        assert_eq!(session.current().unwrap().id, "1");
    }

    #[tokio::test]
    async fn test_regular_login_is_not_admin() {
        let (mut session, _storage, _notifier) = test_session();

        let principal = session.login("user@example.com", "password").await.unwrap();
        assert!(!principal.is_admin);
        assert!(!session.is_admin());
    }

    #[tokio::test]
    async fn test_wrong_credentials_leave_session_anonymous() {
        let (mut session, storage, _notifier) = test_session();

        let err = session.login("x@x.com", "wrong").await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
        assert!(session.current().is_none());
        assert_eq!(storage.get(USER_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_register_always_succeeds_non_admin() {
        let (mut session, storage, _notifier) = test_session();

        let principal = session.register("Jane", "jane@example.com", "hunter2").await;
        assert!(principal.id.starts_with("user_"));
        assert!(!principal.is_admin);
        assert_eq!(session.current(), Some(&principal));

        // Persisted for the next load.
        let raw = storage.get(USER_KEY).unwrap().unwrap();
        let stored: Principal = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, principal);
    }

    #[tokio::test]
    async fn test_logout_clears_state_and_emits_toast() {
        let (mut session, storage, notifier) = test_session();
        session.login("admin@example.com", "password").await.unwrap();

        session.logout();
        assert!(session.current().is_none());
        assert_eq!(storage.get(USER_KEY).unwrap(), None);

        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Success);
        assert_eq!(toasts[0].message, "Logged out successfully");
    }

    #[tokio::test]
    async fn test_round_trip_restores_principal() {
        let (mut session, storage, notifier) = test_session();
        session.login("admin@example.com", "password").await.unwrap();

        let restored = SessionStore::load(
            storage as Arc<dyn KeyValueStore>,
            notifier,
            Duration::ZERO,
        );
        assert_eq!(restored.current(), session.current());
    }

    #[tokio::test]
    async fn test_corrupt_session_record_is_discarded() {
        let storage = memory_storage();
        storage.set(USER_KEY, "{broken").unwrap();

        let session = SessionStore::load(
            Arc::clone(&storage) as Arc<dyn KeyValueStore>,
            Arc::new(Notifier::new()),
            Duration::ZERO,
        );
        assert!(session.current().is_none());
        assert_eq!(storage.get(USER_KEY).unwrap(), None);
    }
}
