//! Nutritional goals persistence

use crate::store::{load_json, save_json, KeyValueStore, StoreError, StoreKey};
use food4mood_shared::models::{NutritionalGoals, UserProfile};
use food4mood_shared::nutrition::calculate_recommended_goals;

/// Goals repository
///
/// Goals are derived from the profile unless the user saved an explicit
/// override. Their lifecycle follows the profile's.
pub struct GoalsRepository;

impl GoalsRepository {
    /// Load the explicit override, if one was saved
    pub fn load<S: KeyValueStore + ?Sized>(
        store: &mut S,
    ) -> Result<Option<NutritionalGoals>, StoreError> {
        load_json(store, StoreKey::Goals)
    }

    /// Save an explicit override
    pub fn save<S: KeyValueStore + ?Sized>(
        store: &mut S,
        goals: &NutritionalGoals,
    ) -> Result<(), StoreError> {
        save_json(store, StoreKey::Goals, goals)
    }

    /// Goals in effect: the saved override, or targets derived from the
    /// profile
    pub fn effective<S: KeyValueStore + ?Sized>(
        store: &mut S,
        profile: &UserProfile,
    ) -> Result<NutritionalGoals, StoreError> {
        Ok(Self::load(store)?.unwrap_or_else(|| calculate_recommended_goals(profile)))
    }

    /// Drop the override, returning to derived goals
    pub fn reset<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
        store.delete(StoreKey::Goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use food4mood_shared::models::{FoodPreference, Gender};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Asha".to_string(),
            age: 30,
            gender: Gender::Male,
            height: 175.0,
            weight: 70.0,
            target_weight: 68.0,
            food_preference: FoodPreference::Mixed,
            allergies: String::new(),
            region: "Kerala".to_string(),
        }
    }

    #[test]
    fn effective_goals_fall_back_to_the_calculator() {
        let mut store = MemoryStore::new();
        let goals = GoalsRepository::effective(&mut store, &profile()).unwrap();
        assert_eq!(goals, calculate_recommended_goals(&profile()));
    }

    #[test]
    fn a_saved_override_wins() {
        let mut store = MemoryStore::new();
        let custom = NutritionalGoals {
            calories: 2200,
            protein: 160,
            carbs: 220,
            fats: 70,
            water: 3000,
        };
        GoalsRepository::save(&mut store, &custom).unwrap();

        let goals = GoalsRepository::effective(&mut store, &profile()).unwrap();
        assert_eq!(goals, custom);
    }

    #[test]
    fn corrupt_goals_regenerate_from_the_profile() {
        let mut store = MemoryStore::new();
        store.set(StoreKey::Goals, "{calories: oops}").unwrap();

        let goals = GoalsRepository::effective(&mut store, &profile()).unwrap();
        assert_eq!(goals, calculate_recommended_goals(&profile()));
        // The corrupted entry is gone
        assert!(store.get(StoreKey::Goals).unwrap().is_none());
    }

    #[test]
    fn reset_drops_the_override() {
        let mut store = MemoryStore::new();
        let custom = NutritionalGoals {
            calories: 2200,
            protein: 160,
            carbs: 220,
            fats: 70,
            water: 3000,
        };
        GoalsRepository::save(&mut store, &custom).unwrap();
        GoalsRepository::reset(&mut store).unwrap();
        assert!(GoalsRepository::load(&mut store).unwrap().is_none());
    }
}
