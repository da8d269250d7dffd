//! User profile persistence

use crate::store::{load_json, save_json, KeyValueStore, StoreError, StoreKey};
use food4mood_shared::models::UserProfile;

/// Profile repository
///
/// The profile is created once at onboarding, mutated only by an
/// explicit update, and destroyed on explicit reset together with the
/// data derived from it.
pub struct ProfileRepository;

impl ProfileRepository {
    /// Load the stored profile, if any
    pub fn load<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<Option<UserProfile>, StoreError> {
        load_json(store, StoreKey::Profile)
    }

    /// Save (create or update) the profile
    pub fn save<S: KeyValueStore + ?Sized>(
        store: &mut S,
        profile: &UserProfile,
    ) -> Result<(), StoreError> {
        save_json(store, StoreKey::Profile, profile)
    }

    /// Reset the profile and everything that follows its lifecycle:
    /// goals and favorites go with it.
    pub fn reset<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
        store.delete(StoreKey::Profile)?;
        store.delete(StoreKey::Goals)?;
        store.delete(StoreKey::Favorites)
    }
}
