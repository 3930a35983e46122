//! Hand-authored draft knowledge: synergy pairs, counter pairs and damage
//! types, keyed by champion id.
//!
//! The table is read-only once built and is versioned independently of the
//! champion catalog. Every lookup is total: an id with no entry behaves as an
//! empty list.

mod builtin;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    AD,
    AP,
    Tank,
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageType::AD => write!(f, "AD"),
            DamageType::AP => write!(f, "AP"),
            DamageType::Tank => write!(f, "Tank"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    /// ally id -> candidates that pair well with that ally
    #[serde(default)]
    pub synergies: BTreeMap<String, Vec<String>>,
    /// threat id -> candidates that beat it
    #[serde(default)]
    pub counters: BTreeMap<String, Vec<String>>,
    /// Carried for display; scoring does not read it.
    #[serde(default)]
    pub damage_types: BTreeMap<String, DamageType>,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        fn to_map(table: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
            table
                .iter()
                .map(|(key, values)| {
                    (key.to_string(), values.iter().map(|v| v.to_string()).collect())
                })
                .collect()
        }

        KnowledgeBase {
            synergies: to_map(builtin::SYNERGIES),
            counters: to_map(builtin::COUNTERS),
            damage_types: builtin::DAMAGE_TYPES
                .iter()
                .map(|(id, kind)| (id.to_string(), *kind))
                .collect(),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|e| {
            AppError::KnowledgeBaseError(format!("Failed to parse knowledge base: {}", e))
        })
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::KnowledgeBaseError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let kb = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            synergies = kb.synergies.len(),
            counters = kb.counters.len(),
            "loaded knowledge base"
        );
        Ok(kb)
    }

    pub fn synergies_of(&self, id: &str) -> &[String] {
        self.synergies.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn counters_of(&self, id: &str) -> &[String] {
        self.counters.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_synergy(&self, ally_id: &str, candidate_id: &str) -> bool {
        self.synergies_of(ally_id).iter().any(|id| id == candidate_id)
    }

    pub fn is_counter(&self, threat_id: &str, candidate_id: &str) -> bool {
        self.counters_of(threat_id).iter().any(|id| id == candidate_id)
    }

    pub fn damage_type(&self, id: &str) -> Option<DamageType> {
        self.damage_types.get(id).copied()
    }

    /// Ids whose synergy list names `id`.
    pub fn synergy_partners_of(&self, id: &str) -> Vec<&str> {
        self.synergies
            .iter()
            .filter(|(_, list)| list.iter().any(|v| v == id))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Threats that `id` is listed as an answer to.
    pub fn threats_countered_by(&self, id: &str) -> Vec<&str> {
        self.counters
            .iter()
            .filter(|(_, list)| list.iter().any(|v| v == id))
            .map(|(key, _)| key.as_str())
            .collect()
    }
}
