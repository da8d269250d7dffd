//! Nutrition goal calculations
//!
//! Derives daily calorie, macro, and water targets from a user profile.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Total**: Every syntactically valid profile produces a result
//! 3. **Evidence-Based**: BMR uses the Mifflin-St Jeor equation

use crate::models::{Gender, NutritionalGoals, UserProfile};

/// Sedentary-to-light activity multiplier applied to BMR. Fixed in this
/// version; there is no activity question at onboarding.
pub const ACTIVITY_MULTIPLIER: f64 = 1.375;

/// Flat daily calorie adjustment for a gain or cut goal, regardless of
/// how far the target weight is from the current weight.
pub const GOAL_ADJUSTMENT_KCAL: f64 = 300.0;

/// Target calories never drop below this floor.
pub const MIN_TARGET_CALORIES: f64 = 1200.0;

/// Default daily water goal in milliliters, independent of the profile.
pub const DAILY_WATER_GOAL_ML: u32 = 2500;

const PROTEIN_SPLIT: f64 = 0.30;
const CARBS_SPLIT: f64 = 0.40;
const FATS_SPLIT: f64 = 0.30;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// The equation is defined for two sexes only; for `Gender::Other` the
/// result is the arithmetic mean of the male and female values.
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
        Gender::Other => ((base + 5.0) + (base - 161.0)) / 2.0,
    }
}

/// Calculate recommended daily goals from a profile
///
/// Maintenance calories are BMR × [`ACTIVITY_MULTIPLIER`], adjusted by a
/// flat ±[`GOAL_ADJUSTMENT_KCAL`] depending on whether the target weight
/// is above or below the current weight, floored at
/// [`MIN_TARGET_CALORIES`], and rounded to the nearest multiple of 10.
/// Macros follow a 30% protein / 40% carbs / 30% fat split at 4/4/9 kcal
/// per gram. Grams × kcal-per-gram only approximately sums back to the
/// calorie target; rounding drift is expected.
pub fn calculate_recommended_goals(profile: &UserProfile) -> NutritionalGoals {
    let maintenance = calculate_bmr(profile) * ACTIVITY_MULTIPLIER;

    let adjustment = if profile.target_weight > profile.weight {
        GOAL_ADJUSTMENT_KCAL
    } else if profile.target_weight < profile.weight {
        -GOAL_ADJUSTMENT_KCAL
    } else {
        0.0
    };

    let target = (maintenance + adjustment).max(MIN_TARGET_CALORIES);
    let calories = round_to_nearest_ten(target);
    let calories_f = f64::from(calories);

    NutritionalGoals {
        calories,
        protein: ((calories_f * PROTEIN_SPLIT) / KCAL_PER_GRAM_PROTEIN).round() as u32,
        carbs: ((calories_f * CARBS_SPLIT) / KCAL_PER_GRAM_CARBS).round() as u32,
        fats: ((calories_f * FATS_SPLIT) / KCAL_PER_GRAM_FAT).round() as u32,
        water: DAILY_WATER_GOAL_ML,
    }
}

fn round_to_nearest_ten(value: f64) -> u32 {
    ((value / 10.0).round() * 10.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodPreference;
    use proptest::prelude::*;

    fn profile(weight: f64, height: f64, age: u32, gender: Gender, target_weight: f64) -> UserProfile {
        UserProfile {
            name: "Test".to_string(),
            age,
            gender,
            height,
            weight,
            target_weight,
            food_preference: FoodPreference::Mixed,
            allergies: String::new(),
            region: "Nowhere".to_string(),
        }
    }

    #[test]
    fn worked_example_for_a_cut_goal() {
        // 70 kg, 175 cm, 30 y, male, losing weight:
        // BMR 1648.75, maintenance 2267.03, minus 300, rounded to 1970.
        let goals = calculate_recommended_goals(&profile(70.0, 175.0, 30, Gender::Male, 68.0));
        assert_eq!(goals.calories, 1970);
        assert_eq!(goals.protein, 148);
        assert_eq!(goals.carbs, 197);
        assert_eq!(goals.fats, 66);
        assert_eq!(goals.water, 2500);
    }

    #[test]
    fn male_and_female_differ_only_in_the_constant() {
        let male = calculate_bmr(&profile(70.0, 175.0, 30, Gender::Male, 70.0));
        let female = calculate_bmr(&profile(70.0, 175.0, 30, Gender::Female, 70.0));
        assert_eq!(male - female, 166.0);
    }

    #[test]
    fn other_gender_averages_the_two_formulas() {
        let male = calculate_bmr(&profile(70.0, 175.0, 30, Gender::Male, 70.0));
        let female = calculate_bmr(&profile(70.0, 175.0, 30, Gender::Female, 70.0));
        let other = calculate_bmr(&profile(70.0, 175.0, 30, Gender::Other, 70.0));
        assert_eq!(other, (male + female) / 2.0);
    }

    #[test]
    fn gain_goal_adds_exactly_three_hundred_calories() {
        let maintain = calculate_recommended_goals(&profile(70.0, 175.0, 30, Gender::Male, 70.0));
        let bulk = calculate_recommended_goals(&profile(70.0, 175.0, 30, Gender::Male, 75.0));
        assert_eq!(bulk.calories, maintain.calories + 300);
    }

    #[test]
    fn cut_goal_removes_exactly_three_hundred_calories() {
        let maintain = calculate_recommended_goals(&profile(70.0, 175.0, 30, Gender::Male, 70.0));
        let cut = calculate_recommended_goals(&profile(70.0, 175.0, 30, Gender::Male, 65.0));
        assert_eq!(cut.calories, maintain.calories - 300);
    }

    #[test]
    fn adjustment_ignores_the_size_of_the_weight_gap() {
        let small_gap = calculate_recommended_goals(&profile(70.0, 175.0, 30, Gender::Male, 69.0));
        let large_gap = calculate_recommended_goals(&profile(70.0, 175.0, 30, Gender::Male, 40.0));
        assert_eq!(small_gap.calories, large_gap.calories);
    }

    #[test]
    fn extreme_profiles_hit_the_calorie_floor() {
        let goals = calculate_recommended_goals(&profile(20.0, 50.0, 120, Gender::Female, 20.0));
        assert_eq!(goals.calories, 1200);
    }

    proptest! {
        #[test]
        fn goals_are_positive_and_aligned(
            weight in 20.0f64..=500.0,
            height in 50.0f64..=300.0,
            age in 1u32..=120,
            target_weight in 20.0f64..=500.0,
            gender_idx in 0usize..3,
        ) {
            let gender = [Gender::Male, Gender::Female, Gender::Other][gender_idx];
            let goals = calculate_recommended_goals(&profile(weight, height, age, gender, target_weight));
            prop_assert!(goals.calories > 0);
            prop_assert_eq!(goals.calories % 10, 0);
            prop_assert_eq!(goals.water, DAILY_WATER_GOAL_ML);
        }
    }
}
