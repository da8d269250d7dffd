//! Input validation functions
//!
//! Field bounds live on the `UserProfile` derive; this module turns
//! validation failures into user-displayable messages and covers the
//! pieces the derive cannot express.

use validator::Validate;

use crate::models::{Mood, UserProfile};

/// Validate a full profile, returning a displayable message on failure
pub fn validate_profile(profile: &UserProfile) -> Result<(), String> {
    if let Err(errors) = profile.validate() {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .copied()
            .unwrap_or("profile");
        return Err(format!("Invalid value for {}", field_display_label(field)));
    }
    Ok(())
}

/// Validate a mood snapshot
pub fn validate_mood(mood: &Mood) -> Result<(), String> {
    if mood.feeling > 100 {
        return Err("Mood feeling must be between 0 and 100".to_string());
    }
    if mood.descriptor.len() > 100 {
        return Err("Mood descriptor too long".to_string());
    }
    Ok(())
}

/// Split the comma-separated allergies field into individual entries
pub fn parse_allergies(allergies: &str) -> Vec<String> {
    allergies
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map a profile field name to a user-facing label
fn field_display_label(field: &str) -> &str {
    match field {
        "name" => "name",
        "age" => "age",
        "height" => "height (cm)",
        "weight" => "weight (kg)",
        "target_weight" => "target weight (kg)",
        _ => field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodPreference, Gender};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Asha".to_string(),
            age: 30,
            gender: Gender::Male,
            height: 175.0,
            weight: 70.0,
            target_weight: 68.0,
            food_preference: FoodPreference::Mixed,
            allergies: "peanuts, shellfish".to_string(),
            region: "Kerala".to_string(),
        }
    }

    #[test]
    fn valid_profile_passes() {
        assert!(validate_profile(&profile()).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut p = profile();
        p.name = String::new();
        let message = validate_profile(&p).unwrap_err();
        assert!(message.contains("name"));
    }

    #[test]
    fn implausible_age_is_rejected() {
        let mut p = profile();
        p.age = 0;
        assert!(validate_profile(&p).is_err());
        p.age = 200;
        assert!(validate_profile(&p).is_err());
    }

    #[test]
    fn non_positive_weight_is_rejected() {
        let mut p = profile();
        p.weight = 0.0;
        let message = validate_profile(&p).unwrap_err();
        assert!(message.contains("weight"));
    }

    #[test]
    fn non_finite_height_is_rejected() {
        let mut p = profile();
        p.height = f64::NAN;
        assert!(validate_profile(&p).is_err());
        p.height = f64::INFINITY;
        assert!(validate_profile(&p).is_err());
    }

    #[test]
    fn feeling_above_one_hundred_is_rejected() {
        let mood = Mood {
            feeling: 101,
            descriptor: "Calm".to_string(),
        };
        assert!(validate_mood(&mood).is_err());

        let mood = Mood {
            feeling: 100,
            descriptor: "Calm".to_string(),
        };
        assert!(validate_mood(&mood).is_ok());
    }

    #[test]
    fn allergies_split_on_commas_and_trim() {
        assert_eq!(
            parse_allergies(" peanuts , shellfish,,  "),
            vec!["peanuts".to_string(), "shellfish".to_string()]
        );
        assert!(parse_allergies("").is_empty());
    }
}
