//! Food 4 Mood Client Library
//!
//! Consumer-side pieces of the application: the recommendation API
//! client, typed local persistence (profile, goals, favorites), and
//! meal sharing. UI rendering lives in the embedding shell; this crate
//! owns the data flow underneath it.

pub mod api;
pub mod repositories;
pub mod share;
pub mod store;

// Re-export commonly used items
pub use api::{ClientError, RecommendationClient};
pub use repositories::{FavoritesRepository, GoalsRepository, ProfileRepository};
