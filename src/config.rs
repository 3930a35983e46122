use crate::analysis::recommender::DEFAULT_ALLY_CAPACITY;
use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DDRAGON_VERSION: &str = "13.24.1";
pub const DEFAULT_DDRAGON_LANGUAGE: &str = "es_ES";

#[derive(Debug, Clone)]
pub struct Config {
    pub ddragon_version: String,
    pub ddragon_language: String,
    /// Picks the ally roster accepts.
    pub ally_limit: usize,
    pub enemy_limit: usize,
    /// Ally count at which the recommender stops suggesting picks.
    pub recommend_ally_capacity: usize,
    pub knowledge_base_path: Option<PathBuf>,
    pub catalog_max_age_hours: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ddragon_version: DEFAULT_DDRAGON_VERSION.to_string(),
            ddragon_language: DEFAULT_DDRAGON_LANGUAGE.to_string(),
            ally_limit: 4,
            enemy_limit: 5,
            recommend_ally_capacity: DEFAULT_ALLY_CAPACITY,
            knowledge_base_path: None,
            catalog_max_age_hours: 168,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let ddragon_version = lookup("DDRAGON_VERSION").unwrap_or(defaults.ddragon_version);
        let ddragon_language = lookup("DDRAGON_LANGUAGE").unwrap_or(defaults.ddragon_language);

        let ally_limit = parse_number(&lookup, "ALLY_LIMIT", defaults.ally_limit)?;
        let enemy_limit = parse_number(&lookup, "ENEMY_LIMIT", defaults.enemy_limit)?;
        let recommend_ally_capacity = parse_number(
            &lookup,
            "RECOMMEND_ALLY_CAPACITY",
            defaults.recommend_ally_capacity,
        )?;
        let catalog_max_age_hours =
            parse_number(&lookup, "CATALOG_MAX_AGE_HOURS", defaults.catalog_max_age_hours)?;

        let knowledge_base_path = lookup("KNOWLEDGE_BASE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            ddragon_version,
            ddragon_language,
            ally_limit,
            enemy_limit,
            recommend_ally_capacity,
            knowledge_base_path,
            catalog_max_age_hours,
        })
    }
}

fn parse_number<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("{} must be a positive number, got '{}'", key, raw))
        }),
        None => Ok(default),
    }
}
