//! Favorited meals
//!
//! Favorites are keyed by a content hash of the meal rather than its
//! display name, so two generated meals that happen to share a name do
//! not collide.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::store::{load_json, save_json, KeyValueStore, StoreError, StoreKey};
use food4mood_shared::models::Meal;

/// Stable identity for a meal: SHA-256 over name and description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealId(String);

impl MealId {
    pub fn for_meal(meal: &Meal) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(meal.name.as_bytes());
        hasher.update(b"\n");
        hasher.update(meal.description.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A favorited meal with its identity and save time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteMeal {
    pub id: MealId,
    pub meal: Meal,
    pub saved_at: DateTime<Utc>,
}

/// Favorites repository
pub struct FavoritesRepository;

impl FavoritesRepository {
    /// All favorites, oldest first
    pub fn list<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<Vec<FavoriteMeal>, StoreError> {
        Ok(load_json(store, StoreKey::Favorites)?.unwrap_or_default())
    }

    /// Whether this meal is currently favorited
    pub fn is_favorite<S: KeyValueStore + ?Sized>(
        store: &mut S,
        meal: &Meal,
    ) -> Result<bool, StoreError> {
        let id = MealId::for_meal(meal);
        Ok(Self::list(store)?.iter().any(|f| f.id == id))
    }

    /// Add a meal. Adding an already-favorited meal is a no-op.
    pub fn add<S: KeyValueStore + ?Sized>(store: &mut S, meal: &Meal) -> Result<(), StoreError> {
        let mut favorites = Self::list(store)?;
        let id = MealId::for_meal(meal);
        if favorites.iter().any(|f| f.id == id) {
            return Ok(());
        }
        favorites.push(FavoriteMeal {
            id,
            meal: meal.clone(),
            saved_at: Utc::now(),
        });
        save_json(store, StoreKey::Favorites, &favorites)
    }

    /// Remove a meal. Removing an absent meal is a no-op.
    pub fn remove<S: KeyValueStore + ?Sized>(store: &mut S, meal: &Meal) -> Result<(), StoreError> {
        let mut favorites = Self::list(store)?;
        let id = MealId::for_meal(meal);
        favorites.retain(|f| f.id != id);
        save_json(store, StoreKey::Favorites, &favorites)
    }

    /// Toggle a meal; returns whether it is a favorite afterwards
    pub fn toggle<S: KeyValueStore + ?Sized>(
        store: &mut S,
        meal: &Meal,
    ) -> Result<bool, StoreError> {
        if Self::is_favorite(store, meal)? {
            Self::remove(store, meal)?;
            Ok(false)
        } else {
            Self::add(store, meal)?;
            Ok(true)
        }
    }
}
