//! Provider request contract
//!
//! Defines both directions of the exchange with the generative model: the
//! natural-language instruction built from profile and mood, and the
//! structural schema the model's JSON output must satisfy. Both sides of
//! the wire use this module so the shapes cannot drift apart.

use serde_json::{json, Value};

use crate::models::{Mood, UserProfile};
use crate::mood::MoodCategory;

/// Returns the JSON schema for a single meal object
///
/// All ten fields are mandatory; the four nutrition numbers must be
/// present even when zero.
pub fn meal_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "Name of the meal." },
            "description": { "type": "string", "description": "A short, enticing description of the meal." },
            "estimated_calories": { "type": "number", "description": "Estimated calories for one serving." },
            "protein_grams": { "type": "number", "description": "Grams of protein." },
            "carbs_grams": { "type": "number", "description": "Grams of carbohydrates." },
            "fats_grams": { "type": "number", "description": "Grams of fat." },
            "recipe": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Step-by-step cooking instructions."
            },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of ingredients with quantities."
            },
            "cuisine_type": { "type": "string", "description": "e.g., Italian, Mexican, Indian." },
            "health_focus": { "type": "string", "description": "e.g., low-carb, high-protein, mood-boosting." }
        },
        "required": [
            "name", "description", "estimated_calories", "protein_grams",
            "carbs_grams", "fats_grams", "recipe", "ingredients",
            "cuisine_type", "health_focus"
        ]
    })
}

/// Returns the JSON schema for the full provider response
///
/// A single object with a mood summary and exactly the four meal slots:
/// drink, main course, snack, light dish. No substitutes, no extras.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "mood_summary": {
                "type": "string",
                "description": "A short, warm, and calm summary of the user's mood and how the food choices relate to it."
            },
            "recommendations": {
                "type": "object",
                "properties": {
                    "drink": meal_schema(),
                    "main_course": meal_schema(),
                    "snack": meal_schema(),
                    "light_dish": meal_schema()
                },
                "required": ["drink", "main_course", "snack", "light_dish"]
            }
        },
        "required": ["mood_summary", "recommendations"]
    })
}

/// Build the natural-language instruction for one recommendation request
///
/// Every profile field is interpolated verbatim (empty allergies become
/// "None"), the mood appears as its bucketed category plus the free-text
/// descriptor, and the food preference is stated as a hard constraint.
pub fn build_prompt(profile: &UserProfile, mood: &Mood) -> String {
    let category = MoodCategory::from_feeling(mood.feeling);
    let allergies = if profile.allergies.trim().is_empty() {
        "None"
    } else {
        profile.allergies.as_str()
    };

    format!(
        "You are Food 4 Mood, an AI nutrition and mood assistant with an elegant, calm, and premium tone.\n\
         \n\
         User Profile:\n\
         - Name: {name}\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Height: {height} cm\n\
         - Weight: {weight} kg\n\
         - Target Weight: {target_weight} kg\n\
         - Food Preference: {food_preference}\n\
         - Allergies: {allergies}\n\
         - Region: {region} (suggest locally relevant ingredients where possible)\n\
         \n\
         User's Current Mood:\n\
         - Feeling Category: {category}\n\
         - Description: \"{descriptor}\"\n\
         \n\
         Goal:\n\
         Generate a personalized, balanced, and mood-appropriate meal plan for one day. \
         The plan must include one drink, one main course, one snack, and one light dish.\n\
         Each recommendation must be tailored to the user's profile, preferences, allergies, and current mood. \
         For example, if the user is stressed, suggest calming foods like chamomile tea. \
         If they are tired, suggest energizing foods like a protein-rich snack. \
         Adhere strictly to the user's food preference (e.g., no meat for vegetarians).\n\
         \n\
         Output MUST be a single, valid JSON object that strictly adheres to the provided schema. \
         Do not include any text, markdown, or explanations outside of the JSON object.",
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        height = profile.height,
        weight = profile.weight,
        target_weight = profile.target_weight,
        food_preference = profile.food_preference,
        allergies = allergies,
        region = profile.region,
        category = category.prompt_label(),
        descriptor = mood.descriptor,
    )
}
