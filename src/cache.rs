use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use crate::analysis::champion::Character;
use crate::error::AppError;

/// Converted champion catalog for one patch and language, kept on disk so
/// later runs can skip the download.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogCache {
    pub version: String,
    pub language: String,
    pub fetched_at: DateTime<Utc>,
    pub champions: Vec<Character>,
}

impl CatalogCache {
    pub fn new(version: &str, language: &str, champions: Vec<Character>) -> Self {
        CatalogCache {
            version: version.to_string(),
            language: language.to_string(),
            fetched_at: Utc::now(),
            champions,
        }
    }

    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".league_draft")
    }

    pub fn cache_path(dir: &Path, version: &str, language: &str) -> PathBuf {
        dir.join(format!("catalog_{}_{}.json", version.replace('.', "_"), language))
    }

    /// `Ok(None)` when nothing has been cached for this patch yet.
    pub fn load(dir: &Path, version: &str, language: &str) -> Result<Option<Self>, AppError> {
        let path = Self::cache_path(dir, version, language);

        match fs::read_to_string(&path) {
            Ok(content) => {
                let cache = serde_json::from_str(&content).map_err(|e| {
                    AppError::CacheError(format!("Failed to parse cache: {}", e))
                })?;
                Ok(Some(cache))
            }
            Err(_) => Ok(None),
        }
    }

    /// Highest patch cached for `language`. Unreadable files are skipped.
    pub fn newest(dir: &Path, language: &str) -> Option<Self> {
        let entries = fs::read_dir(dir).ok()?;
        let suffix = format!("_{}.json", language);
        let mut newest: Option<Self> = None;

        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with("catalog_") || !name.ends_with(&suffix) {
                continue;
            }

            let parsed = fs::read_to_string(entry.path())
                .ok()
                .and_then(|content| serde_json::from_str::<Self>(&content).ok());
            let cache = match parsed {
                Some(cache) if cache.language == language => cache,
                _ => {
                    tracing::debug!(file = %name, "skipping unusable catalog cache");
                    continue;
                }
            };

            let is_newer = newest
                .as_ref()
                .map_or(true, |best| version_key(&cache.version) > version_key(&best.version));
            if is_newer {
                newest = Some(cache);
            }
        }

        newest
    }

    pub fn save(&self, dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(dir).map_err(|e| {
            AppError::CacheError(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let path = Self::cache_path(dir, &self.version, &self.language);
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::CacheError(format!("Failed to serialize cache: {}", e))
        })?;

        fs::write(&path, json).map_err(|e| {
            AppError::CacheError(format!("Failed to write cache: {}", e))
        })?;

        tracing::debug!(path = %path.display(), champions = self.champions.len(), "catalog cached");
        Ok(())
    }

    pub fn is_stale(&self, max_age_hours: u64) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        age.num_hours() >= max_age_hours as i64
    }
}

/// "13.24.1" -> [13, 24, 1], so patches compare numerically.
fn version_key(version: &str) -> Vec<u64> {
    version.split('.').map(|part| part.parse().unwrap_or(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::champion::{Attributes, Tag};
    use chrono::Duration;

    fn sample() -> CatalogCache {
        let ornn = Character::new("Ornn", "Ornn", &[Tag::Tank], Attributes { attack: 5.0, magic: 3.0, defense: 9.0, difficulty: 5.0 });
        CatalogCache::new("13.24.1", "es_ES", vec![ornn])
    }

    #[test]
    fn test_missing_cache_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CatalogCache::load(dir.path(), "13.24.1", "es_ES").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = sample();
        cache.save(dir.path()).unwrap();

        let loaded = CatalogCache::load(dir.path(), "13.24.1", "es_ES").unwrap().unwrap();
        assert_eq!(loaded.champions, cache.champions);
        assert!(CatalogCache::load(dir.path(), "13.24.1", "en_US").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_cache_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = CatalogCache::cache_path(dir.path(), "13.24.1", "es_ES");
        fs::write(&path, "{ broken").unwrap();
        let err = CatalogCache::load(dir.path(), "13.24.1", "es_ES").unwrap_err();
        assert!(matches!(err, AppError::CacheError(_)));
    }

    #[test]
    fn test_newest_picks_highest_patch_for_language() {
        let dir = tempfile::tempdir().unwrap();
        for (version, language) in [("9.3.1", "es_ES"), ("13.24.1", "es_ES"), ("14.1.1", "es_ES"), ("15.1.1", "en_US")] {
            CatalogCache::new(version, language, Vec::new()).save(dir.path()).unwrap();
        }
        fs::write(CatalogCache::cache_path(dir.path(), "99.1.1", "es_ES"), "{ broken").unwrap();

        let newest = CatalogCache::newest(dir.path(), "es_ES").unwrap();
        assert_eq!(newest.version, "14.1.1");
        assert_eq!(CatalogCache::newest(dir.path(), "en_US").unwrap().version, "15.1.1");
        assert!(CatalogCache::newest(dir.path(), "ko_KR").is_none());
    }

    #[test]
    fn test_newest_without_cache_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CatalogCache::newest(&dir.path().join("missing"), "es_ES").is_none());
    }

    #[test]
    fn test_staleness() {
        let mut cache = sample();
        assert!(!cache.is_stale(1));
        cache.fetched_at = Utc::now() - Duration::hours(200);
        assert!(cache.is_stale(168));
    }
}
