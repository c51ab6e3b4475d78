/// Cached backend session: the bearer token and the signed-in user's
/// profile, both kept in the same client-local store as the ledger.
use crate::error::StorageError;
use crate::storage::models::UserProfile;
use crate::storage::{keys, KeyValue};

pub struct SessionCache<S: KeyValue> {
    storage: S,
}

impl<S: KeyValue> SessionCache<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The cached bearer token, if any. Read failures degrade to `None`
    /// so a flaky store just means an unauthenticated request.
    pub fn token(&self) -> Option<String> {
        match self.storage.get(keys::ACCESS_TOKEN) {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Could not read cached token: {}", e);
                None
            }
        }
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(keys::ACCESS_TOKEN, token)
    }

    pub fn profile(&self) -> Option<UserProfile> {
        let raw = match self.storage.get(keys::USER_PROFILE) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("Could not read cached profile: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("Cached profile is corrupt: {}", e);
                None
            }
        }
    }

    pub fn set_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile)?;
        self.storage.set(keys::USER_PROFILE, &raw)
    }

    /// Drop both the token and the cached profile.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(keys::ACCESS_TOKEN)?;
        self.storage.remove(keys::USER_PROFILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn caches_token_and_profile() {
        let session = SessionCache::new(MemoryStore::new());
        assert_eq!(session.token(), None);
        assert!(session.profile().is_none());

        session.set_token("abc123").unwrap();
        session
            .set_profile(&UserProfile {
                email: "demo@mankat.dev".to_string(),
                full_name: Some("Demo User".to_string()),
            })
            .unwrap();

        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert_eq!(session.profile().unwrap().email, "demo@mankat.dev");

        session.clear().unwrap();
        assert_eq!(session.token(), None);
        assert!(session.profile().is_none());
    }
}
