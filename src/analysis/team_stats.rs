use super::champion::{Character, Tag};
use serde::Serialize;

/// Radar profile of one roster. Every field lies in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TeamCompositionStats {
    pub attack: f64,
    pub magic: f64,
    pub defense: f64,
    pub crowd_control: f64,
    pub mobility: f64,
}

impl TeamCompositionStats {
    /// Axes in radar order, with their display labels.
    pub fn axes(&self) -> [(&'static str, f64); 5] {
        [
            ("Daño Físico", self.attack),
            ("Magia", self.magic),
            ("Tanque", self.defense),
            ("Control (CC)", self.crowd_control),
            ("Movilidad", self.mobility),
        ]
    }
}

// Per-champion ceilings used to normalize each axis.
const BASE_ATTRIBUTE_MAX: f64 = 10.0;
const CROWD_CONTROL_MAX: f64 = 8.0;
const MOBILITY_MAX: f64 = 9.0;

fn crowd_control_score(champion: &Character) -> f64 {
    let mut score = 0.0;
    if champion.has_tag(Tag::Tank) || champion.has_tag(Tag::Support) {
        score += 8.0;
    }
    if champion.has_tag(Tag::Mage) {
        score += 5.0;
    }
    if champion.has_tag(Tag::Fighter) {
        score += 3.0;
    }
    score
}

fn mobility_score(champion: &Character) -> f64 {
    let mut score = 0.0;
    if champion.has_tag(Tag::Assassin) {
        score += 9.0;
    }
    if champion.has_tag(Tag::Fighter) || champion.has_tag(Tag::Marksman) {
        score += 6.0;
    }
    if champion.has_tag(Tag::Mage) {
        score += 3.0;
    }
    score
}

fn normalize(total: f64, team_size: usize, per_champion_max: f64) -> f64 {
    let ceiling = team_size as f64 * per_champion_max;
    ((total / ceiling) * 100.0).min(100.0)
}

pub fn compute_stats(roster: &[Character]) -> TeamCompositionStats {
    if roster.is_empty() {
        return TeamCompositionStats::default();
    }

    let mut totals = TeamCompositionStats::default();

    for champion in roster {
        // Negative ratings are not meaningful; read them as 0.
        totals.attack += champion.attributes.attack.max(0.0);
        totals.magic += champion.attributes.magic.max(0.0);
        totals.defense += champion.attributes.defense.max(0.0);
        totals.crowd_control += crowd_control_score(champion);
        totals.mobility += mobility_score(champion);
    }

    let n = roster.len();
    TeamCompositionStats {
        attack: normalize(totals.attack, n, BASE_ATTRIBUTE_MAX),
        magic: normalize(totals.magic, n, BASE_ATTRIBUTE_MAX),
        defense: normalize(totals.defense, n, BASE_ATTRIBUTE_MAX),
        crowd_control: normalize(totals.crowd_control, n, CROWD_CONTROL_MAX),
        mobility: normalize(totals.mobility, n, MOBILITY_MAX),
    }
}
