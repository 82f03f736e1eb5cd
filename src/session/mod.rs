//! Session broadcast store.
//!
//! `SessionStore` is constructed once at startup and cloned into every
//! consumer that needs it. It owns the "session active" flag, the
//! persistence of that flag, and the list of subscribers notified when it
//! changes. Consumers can read the flag and subscribe; only `activate` and
//! `deactivate` change it.

mod error;

pub use error::SessionError;

use crate::storage::KeyValueStore;
use log::*;
use std::sync::{Arc, Mutex, MutexGuard};

/// Storage key under which the active session is persisted.
///
pub const SESSION_KEY: &str = "isLoggedIn";

/// Persisted value meaning "session active".
///
pub const ACTIVE_SENTINEL: &str = "1";

/// Snapshot of the session flag delivered to subscribers.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct SessionState {
    pub active: bool,
}

/// Values submitted from the login form.
///
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Subscription(u64);

type Listener = Arc<dyn Fn(SessionState) + Send + Sync>;

struct Inner {
    state: SessionState,
    storage: Box<dyn KeyValueStore>,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
}

/// Cloneable handle to the shared session.
///
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<Inner>>,
}

impl SessionStore {
    /// Build the store, reading the persisted flag once. A storage failure
    /// is logged and treated as "no session".
    ///
    pub fn restore(storage: Box<dyn KeyValueStore>) -> Self {
        let active = match storage.get(SESSION_KEY) {
            Ok(value) => value.as_deref() == Some(ACTIVE_SENTINEL),
            Err(e) => {
                warn!("Failed to read persisted session, starting inactive: {}", e);
                false
            }
        };
        info!(
            "Restored session: {}",
            if active { "active" } else { "inactive" }
        );
        SessionStore {
            inner: Arc::new(Mutex::new(Inner {
                state: SessionState { active },
                storage,
                listeners: vec![],
                next_subscription: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Listeners never run under the lock; a poisoned `Inner` is consistent.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn state(&self) -> SessionState {
        self.lock().state
    }

    pub fn is_active(&self) -> bool {
        self.state().active
    }

    /// Register a listener called with every new session state.
    ///
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(SessionState) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let subscription = Subscription(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((subscription, Arc::new(listener)));
        subscription
    }

    /// Detach a listener. Returns false if it was not registered.
    ///
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != subscription);
        inner.listeners.len() != before
    }

    /// Start a session. No verification happens beyond rejecting empty
    /// credentials.
    ///
    pub fn activate(&self, credentials: &Credentials) -> Result<(), SessionError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(SessionError::EmptyCredentials);
        }
        info!("Activating session for {}", credentials.email);
        let listeners = {
            let mut inner = self.lock();
            if let Err(e) = inner.storage.set(SESSION_KEY, ACTIVE_SENTINEL) {
                warn!("Failed to persist session: {}", e);
            }
            inner.state.active = true;
            Self::snapshot_listeners(&inner)
        };
        Self::notify(&listeners, SessionState { active: true });
        Ok(())
    }

    /// End the session and forget the persisted flag.
    ///
    pub fn deactivate(&self) {
        info!("Deactivating session");
        let listeners = {
            let mut inner = self.lock();
            if let Err(e) = inner.storage.remove(SESSION_KEY) {
                warn!("Failed to clear persisted session: {}", e);
            }
            inner.state.active = false;
            Self::snapshot_listeners(&inner)
        };
        Self::notify(&listeners, SessionState { active: false });
    }

    fn snapshot_listeners(inner: &Inner) -> Vec<Listener> {
        inner
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    // Runs without the lock held so listeners may read the store.
    fn notify(listeners: &[Listener], state: SessionState) {
        for listener in listeners {
            listener(state);
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SessionStore")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    /// Shares one `MemoryStore` between the session and the test so the
    /// persisted value can be inspected after mutations.
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<MemoryStore>>);

    impl SharedStore {
        fn value(&self) -> Option<String> {
            self.0.lock().unwrap().get(SESSION_KEY).unwrap()
        }
    }

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.lock().unwrap().get(key)
        }
        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.lock().unwrap().set(key, value)
        }
        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.0.lock().unwrap().remove(key)
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::DeserializationFailed("broken".to_string()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::SerializationFailed("broken".to_string()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::SerializationFailed("broken".to_string()))
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn restore_without_key_is_inactive() {
        let session = SessionStore::restore(Box::new(MemoryStore::new()));
        assert!(!session.is_active());
    }

    #[test]
    fn restore_with_sentinel_is_active() {
        let storage = MemoryStore::with_entry(SESSION_KEY, ACTIVE_SENTINEL);
        let session = SessionStore::restore(Box::new(storage));
        assert!(session.is_active());
    }

    #[test]
    fn restore_with_other_value_is_inactive() {
        let storage = MemoryStore::with_entry(SESSION_KEY, "true");
        let session = SessionStore::restore(Box::new(storage));
        assert!(!session.is_active());
    }

    #[test]
    fn restore_with_broken_storage_is_inactive() {
        let session = SessionStore::restore(Box::new(BrokenStore));
        assert!(!session.is_active());
    }

    #[test]
    fn activate_persists_and_sets_active() {
        let storage = SharedStore::default();
        let session = SessionStore::restore(Box::new(storage.clone()));
        session
            .activate(&credentials("a@b.com", "secret1"))
            .unwrap();
        assert!(session.is_active());
        assert_eq!(storage.value(), Some(ACTIVE_SENTINEL.to_string()));
    }

    #[test]
    fn activate_rejects_empty_credentials() {
        let storage = SharedStore::default();
        let session = SessionStore::restore(Box::new(storage.clone()));
        assert!(matches!(
            session.activate(&credentials("", "secret1")),
            Err(SessionError::EmptyCredentials)
        ));
        assert!(matches!(
            session.activate(&credentials("a@b.com", "")),
            Err(SessionError::EmptyCredentials)
        ));
        assert!(!session.is_active());
        assert_eq!(storage.value(), None);
    }

    #[test]
    fn deactivate_removes_key_and_clears_flag() {
        let storage = SharedStore::default();
        let session = SessionStore::restore(Box::new(storage.clone()));
        session
            .activate(&credentials("a@b.com", "secret1"))
            .unwrap();
        session.deactivate();
        assert!(!session.is_active());
        assert_eq!(storage.value(), None);
    }

    #[test]
    fn restart_after_activate_restores_session() {
        let storage = SharedStore::default();
        let session = SessionStore::restore(Box::new(storage.clone()));
        session
            .activate(&credentials("a@b.com", "secret1"))
            .unwrap();
        let restarted = SessionStore::restore(Box::new(storage));
        assert!(restarted.is_active());
    }

    #[test]
    fn storage_failure_does_not_block_mutators() {
        let session = SessionStore::restore(Box::new(BrokenStore));
        session
            .activate(&credentials("a@b.com", "secret1"))
            .unwrap();
        assert!(session.is_active());
        session.deactivate();
        assert!(!session.is_active());
    }

    #[test]
    fn subscribers_notified_in_order_before_mutator_returns() {
        let session = SessionStore::restore(Box::new(MemoryStore::new()));
        let seen = Arc::new(Mutex::new(Vec::new()));
        for name in ["header", "main"] {
            let seen = Arc::clone(&seen);
            session.subscribe(move |state| seen.lock().unwrap().push((name, state.active)));
        }

        session
            .activate(&credentials("a@b.com", "secret1"))
            .unwrap();
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("header", true), ("main", true)]
        );

        session.deactivate();
        assert_eq!(seen.lock().unwrap().len(), 4);
        assert_eq!(seen.lock().unwrap()[3], ("main", false));
    }

    #[test]
    fn subscriber_can_read_store_during_notification() {
        let session = SessionStore::restore(Box::new(MemoryStore::new()));
        let observed = Arc::new(Mutex::new(None));
        let reader = session.clone();
        let slot = Arc::clone(&observed);
        session.subscribe(move |_| *slot.lock().unwrap() = Some(reader.is_active()));
        session
            .activate(&credentials("a@b.com", "secret1"))
            .unwrap();
        assert_eq!(*observed.lock().unwrap(), Some(true));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let session = SessionStore::restore(Box::new(MemoryStore::new()));
        let count = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&count);
        let subscription = session.subscribe(move |_| *counter.lock().unwrap() += 1);
        session.deactivate();
        assert!(session.unsubscribe(subscription));
        assert!(!session.unsubscribe(subscription));
        session.deactivate();
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn clones_share_state() {
        let session = SessionStore::restore(Box::new(MemoryStore::new()));
        let consumer = session.clone();
        session
            .activate(&credentials("a@b.com", "secret1"))
            .unwrap();
        assert!(consumer.is_active());
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let debug = format!("{:?}", credentials("a@b.com", "secret1"));
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("secret1"));
    }
}
