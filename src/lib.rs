//! Draft assistant for League of Legends: suggests the next pick from
//! synergy, counter and composition-gap rules, and summarizes each side's
//! composition as a five-axis radar profile.

pub mod analysis;
pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod knowledge;

pub use analysis::champion::{Attributes, Character, Tag};
pub use analysis::recommender::{DraftRecommender, Recommendation, ScoringWeights};
pub use analysis::roster::{Roster, ToggleOutcome};
pub use analysis::team_stats::{compute_stats, TeamCompositionStats};
pub use error::AppError;
pub use knowledge::{DamageType, KnowledgeBase};
