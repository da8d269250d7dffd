//! Meal sharing
//!
//! Formats a meal as a text block and hands it to the platform: a native
//! share sheet when one is available, the clipboard otherwise. The
//! embedding shell supplies both capabilities.

use food4mood_shared::models::Meal;
use thiserror::Error;
use tracing::warn;

/// Sharing error type
#[derive(Error, Debug)]
pub enum ShareError {
    /// The user dismissed the native share sheet
    #[error("share cancelled")]
    Cancelled,

    #[error("share failed: {0}")]
    Failed(String),
}

/// Native share capability (e.g. a platform share sheet)
pub trait ShareTarget {
    fn share(&mut self, title: &str, text: &str) -> Result<(), ShareError>;
}

/// Clipboard-write capability
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ShareError>;
}

/// Which mechanism handled the share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMethod {
    Share,
    Copy,
}

/// Outcome reported back to the UI
///
/// A cancelled native share and a hard failure both report
/// `success: false`; callers that need to tell them apart can wrap the
/// `ShareTarget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareOutcome {
    pub method: ShareMethod,
    pub success: bool,
}

/// Format a meal as shareable text
///
/// Title line, description, "Ingredients" as a bulleted list, "Recipe"
/// as a numbered list, and a fixed attribution line.
pub fn format_meal_for_sharing(meal: &Meal) -> String {
    let ingredients = meal
        .ingredients
        .iter()
        .map(|i| format!("- {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let recipe = meal
        .recipe
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n\nIngredients\n{}\n\nRecipe\n{}\n\nShared from Food 4 Mood!",
        meal.name, meal.description, ingredients, recipe
    )
}

/// Share a meal through the preferred available channel
pub fn share_meal(
    meal: &Meal,
    share: Option<&mut dyn ShareTarget>,
    clipboard: &mut dyn Clipboard,
) -> ShareOutcome {
    let text = format_meal_for_sharing(meal);

    if let Some(target) = share {
        let success = match target.share(&meal.name, &text) {
            Ok(()) => true,
            Err(e) => {
                warn!("Native share did not complete: {}", e);
                false
            }
        };
        return ShareOutcome {
            method: ShareMethod::Share,
            success,
        };
    }

    let success = match clipboard.write_text(&text) {
        Ok(()) => true,
        Err(e) => {
            warn!("Clipboard write failed: {}", e);
            false
        }
    };
    ShareOutcome {
        method: ShareMethod::Copy,
        success,
    }
}
