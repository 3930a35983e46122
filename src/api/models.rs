use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Data Dragon champion.json response
#[derive(Debug, Deserialize, Serialize)]
pub struct DataDragonChampions {
    #[serde(default)]
    pub version: String,
    /// Keyed by champion id; a BTreeMap keeps catalog order stable.
    pub data: BTreeMap<String, ChampionDto>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChampionDto {
    pub id: String,
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub info: ChampionInfoDto,
    #[serde(default)]
    pub image: Option<ImageDto>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct ChampionInfoDto {
    #[serde(default)]
    pub attack: f64,
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub magic: f64,
    #[serde(default)]
    pub difficulty: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImageDto {
    pub full: String,
}
