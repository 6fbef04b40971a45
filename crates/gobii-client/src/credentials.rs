//! In-memory API key holder shared by concurrent requests.

use std::fmt;

use tokio::sync::RwLock;

/// Holds the API key behind a lock so concurrent `set`/`get` calls always
/// observe a whole value, either the one before or the one after a write.
#[derive(Default)]
pub struct CredentialStore {
    api_key: RwLock<Option<String>>,
}

impl CredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored key unconditionally.
    pub async fn set(&self, key: impl Into<String>) {
        *self.api_key.write().await = Some(key.into());
    }

    /// Current key, or `None` if never set or cleared.
    pub async fn get(&self) -> Option<String> {
        self.api_key.read().await.clone()
    }

    pub async fn clear(&self) {
        *self.api_key.write().await = None;
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn empty_until_set() {
        let store = CredentialStore::new();
        assert!(store.get().await.is_none());

        store.set("key-1").await;
        assert_eq!(store.get().await.as_deref(), Some("key-1"));
    }

    #[tokio::test]
    async fn set_replaces_and_clear_removes() {
        let store = CredentialStore::new();
        store.set("key-1").await;
        store.set("key-2").await;
        assert_eq!(store.get().await.as_deref(), Some("key-2"));

        store.clear().await;
        assert!(store.get().await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writers_never_tear_values() {
        let store = Arc::new(CredentialStore::new());
        let candidates: Arc<Vec<String>> =
            Arc::new((0..8).map(|i| format!("key-{i}-").repeat(64)).collect());

        let mut handles = Vec::new();
        for key in candidates.iter().cloned() {
            let store = Arc::clone(&store);
            let candidates = Arc::clone(&candidates);
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    store.set(key.clone()).await;
                    let seen = store.get().await.expect("key was set");
                    assert!(candidates.contains(&seen));
                }
            }));
        }
        for handle in handles {
            handle.await.expect("task panicked");
        }

        let last = store.get().await.expect("key was set");
        assert!(candidates.contains(&last));
    }

    #[test]
    fn debug_output_redacts_key() {
        let store = CredentialStore::new();
        let rendered = format!("{store:?}");
        assert!(rendered.contains("<redacted>"));
    }
}
