//! Mood buckets and descriptor vocabulary
//!
//! The 0-100 feeling slider collapses into three categories for prompting
//! purposes. The category only shapes the natural-language instruction;
//! the required output schema is the same for every mood.

use serde::{Deserialize, Serialize};

/// Coarse mood category derived from the feeling value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Negative,
    Neutral,
    Positive,
}

impl MoodCategory {
    /// Bucket a 0-100 feeling value. Boundaries are exact: values below
    /// 33 are negative, 33 through 65 neutral, 66 and above positive.
    pub fn from_feeling(feeling: u8) -> Self {
        if feeling < 33 {
            MoodCategory::Negative
        } else if feeling < 66 {
            MoodCategory::Neutral
        } else {
            MoodCategory::Positive
        }
    }

    /// Label interpolated into the provider prompt
    pub fn prompt_label(&self) -> &'static str {
        match self {
            MoodCategory::Negative => "negative",
            MoodCategory::Neutral => "neutral",
            MoodCategory::Positive => "positive",
        }
    }

    /// Fixed descriptor vocabulary offered for this category
    pub fn descriptors(&self) -> &'static [&'static str] {
        match self {
            MoodCategory::Negative => &[
                "Tired", "Sad", "Lonely", "Bored", "Stressed", "Anxious", "Overwhelmed", "Grumpy",
            ],
            MoodCategory::Neutral => &[
                "Calm", "Neutral", "Focused", "Content", "Relaxed", "Thoughtful", "Peaceful",
                "Indifferent",
            ],
            MoodCategory::Positive => &[
                "Happy", "Energetic", "Motivated", "Excited", "Joyful", "Proud", "Creative",
                "Playful",
            ],
        }
    }
}
