use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use super::kv::KeyValueStore;
use super::models::CommandProfile;

/// Key the whole profile collection is stored under.
pub const PROFILES_KEY: &str = "custom_buttons";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    #[error("Failed to serialize profiles: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("A profile with ID '{0}' already exists")]
    DuplicateId(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// CRUD over the profile collection, persisted as one JSON array.
///
/// Every mutation is a read-modify-write of the whole blob, serialized by an
/// internal write lock so concurrent callers cannot lose each other's updates.
pub struct ProfileStore<S: KeyValueStore> {
    backend: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Returns the stored profiles in order.
    ///
    /// A missing or unreadable blob yields an empty list; only backend
    /// failures are reported as errors.
    pub fn load_all(&self) -> Result<Vec<CommandProfile>, StoreError> {
        let Some(blob) = self.backend.get(PROFILES_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<CommandProfile>>(&blob) {
            Ok(profiles) => Ok(profiles),
            Err(e) => {
                warn!(error = %e, "persisted profiles are unreadable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the persisted collection with `profiles`.
    pub fn save_all(&self, profiles: &[CommandProfile]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(profiles)?;
        self.backend.set(PROFILES_KEY, &blob)?;
        debug!(count = profiles.len(), "saved profiles");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<CommandProfile>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|p| p.id == id))
    }

    /// Appends `profile`, assigning a fresh id when it has none.
    ///
    /// A caller-supplied id that is already stored is rejected with
    /// [`StoreError::DuplicateId`].
    pub fn add(&self, profile: CommandProfile) -> Result<CommandProfile, StoreError> {
        let _guard = self.lock()?;
        let mut profiles = self.load_all()?;
        let mut profile = profile;
        if !profile.is_persisted() {
            profile.id = Uuid::new_v4().to_string();
        } else if profiles.iter().any(|p| p.id == profile.id) {
            return Err(StoreError::DuplicateId(profile.id));
        }

        profiles.push(profile.clone());
        self.save_all(&profiles)?;
        debug!(id = %profile.id, name = %profile.name, "added profile");
        Ok(profile)
    }

    /// Replaces the entry with the same id in place.
    ///
    /// Returns `false` and leaves storage untouched when no entry matches.
    pub fn update(&self, profile: &CommandProfile) -> Result<bool, StoreError> {
        let _guard = self.lock()?;
        let mut profiles = self.load_all()?;
        let Some(index) = profiles.iter().position(|p| p.id == profile.id) else {
            debug!(id = %profile.id, "update skipped, no such profile");
            return Ok(false);
        };

        profiles[index] = profile.clone();
        self.save_all(&profiles)?;
        Ok(true)
    }

    /// Removes every entry with `id`. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.lock()?;
        let mut profiles = self.load_all()?;
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        if profiles.len() == before {
            debug!(id, "delete skipped, no such profile");
            return Ok(false);
        }

        self.save_all(&profiles)?;
        Ok(true)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.write_lock.lock().map_err(|_| StoreError::Poisoned)
    }
}
