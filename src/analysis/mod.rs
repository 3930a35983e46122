pub mod champion;
pub mod recommender;
pub mod roster;
pub mod team_stats;
