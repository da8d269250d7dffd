//! Data models for the Food 4 Mood application

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Gender, as collected at onboarding
///
/// Used only as an input to the nutrition formulas; `Other` averages the
/// male and female constants (see [`crate::nutrition`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Dietary preference, passed to the provider as a hard constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodPreference {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
    Mixed,
}

impl fmt::Display for FoodPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FoodPreference::Vegetarian => "Vegetarian",
            FoodPreference::NonVegetarian => "Non-Vegetarian",
            FoodPreference::Vegan => "Vegan",
            FoodPreference::Mixed => "Mixed",
        };
        write!(f, "{}", label)
    }
}

/// User profile collected at onboarding
///
/// Owned by the client and sent with every recommendation request.
/// Heights are centimeters, weights kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 1, max = 120))]
    pub age: u32,
    pub gender: Gender,
    #[validate(range(min = 50.0, max = 300.0))]
    pub height: f64,
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight: f64,
    #[validate(range(min = 20.0, max = 500.0))]
    pub target_weight: f64,
    pub food_preference: FoodPreference,
    /// Comma-separated free text, may be empty
    #[serde(default)]
    pub allergies: String,
    pub region: String,
}

/// Mood snapshot for a single recommendation request. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    /// Slider value, 0-100 inclusive
    pub feeling: u8,
    /// Short label, normally drawn from the category vocabulary
    pub descriptor: String,
}

/// Daily nutritional targets
///
/// Derived from the profile by the calculator, or overridden by an
/// explicit user edit. Calories are kcal, macros grams, water ml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalGoals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
    pub water: u32,
}

/// A single recommended meal
///
/// All four nutrition fields are present even when zero; the provider
/// schema marks every field required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub description: String,
    pub estimated_calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fats_grams: f64,
    /// Step-by-step cooking instructions, in order
    pub recipe: Vec<String>,
    /// Ingredients with quantities, in order
    pub ingredients: Vec<String>,
    pub cuisine_type: String,
    pub health_focus: String,
}

/// The four fixed meal slots every response must populate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub drink: Meal,
    pub main_course: Meal,
    pub snack: Meal,
    pub light_dish: Meal,
}

/// Full payload of one AI round trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub mood_summary: String,
    pub recommendations: Recommendations,
}

/// Request body sent to the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub profile: UserProfile,
    pub mood: Mood,
}

/// API error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
