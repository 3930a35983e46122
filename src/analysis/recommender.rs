use super::champion::{Character, Tag};
use crate::knowledge::KnowledgeBase;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub character: Character,
    pub score: i32,
    /// In the order the rules fired.
    pub reasons: Vec<String>,
}

/// Points awarded by each scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub synergy_with_ally: i32,
    pub complements_ally: i32,
    pub counters_enemy: i32,
    pub missing_tank: i32,
    pub missing_magic_damage: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            synergy_with_ally: 15,
            complements_ally: 10,
            counters_enemy: 20,
            missing_tank: 8,
            missing_magic_damage: 5,
        }
    }
}

pub const DEFAULT_ALLY_CAPACITY: usize = 5;
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Suggests the next pick from synergy, counter and composition-gap rules.
pub struct DraftRecommender<'kb> {
    knowledge: &'kb KnowledgeBase,
    weights: ScoringWeights,
    ally_capacity: usize,
    max_results: usize,
}

/// Rosters after removing duplicate ids and ids claimed by both sides.
struct Sides<'a> {
    allies: Vec<&'a Character>,
    enemies: Vec<&'a Character>,
    ally_count: usize,
    taken: HashSet<&'a str>,
}

impl<'a> Sides<'a> {
    fn sanitize(ally: &'a [Character], enemy: &'a [Character]) -> Self {
        let allies = dedup_by_id(ally, "ally");
        let enemies = dedup_by_id(enemy, "enemy");

        let ally_ids: HashSet<&str> = allies.iter().map(|c| c.id.as_str()).collect();
        let enemy_ids: HashSet<&str> = enemies.iter().map(|c| c.id.as_str()).collect();
        let contested: HashSet<&str> = ally_ids.intersection(&enemy_ids).copied().collect();

        for id in &contested {
            tracing::warn!(champion = %id, "champion is in both rosters; ignoring it on both sides");
        }

        let ally_count = allies.len();
        let taken = ally_ids.union(&enemy_ids).copied().collect();

        Sides {
            allies: allies
                .into_iter()
                .filter(|c| !contested.contains(c.id.as_str()))
                .collect(),
            enemies: enemies
                .into_iter()
                .filter(|c| !contested.contains(c.id.as_str()))
                .collect(),
            ally_count,
            taken,
        }
    }
}

fn dedup_by_id<'a>(roster: &'a [Character], side: &str) -> Vec<&'a Character> {
    let mut seen = HashSet::new();
    roster
        .iter()
        .filter(|c| {
            let fresh = seen.insert(c.id.as_str());
            if !fresh {
                tracing::warn!(champion = %c.id, side, "duplicate pick in roster; counting it once");
            }
            fresh
        })
        .collect()
}

impl<'kb> DraftRecommender<'kb> {
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        DraftRecommender {
            knowledge,
            weights: ScoringWeights::default(),
            ally_capacity: DEFAULT_ALLY_CAPACITY,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_ally_capacity(mut self, capacity: usize) -> Self {
        self.ally_capacity = capacity;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Ranks every catalog champion not already picked on either side.
    ///
    /// Returns at most `max_results` entries, all with a positive score,
    /// sorted by score descending. Equal scores keep catalog order.
    /// An empty catalog or a full ally roster yields an empty list.
    pub fn recommend(
        &self,
        catalog: &[Character],
        ally: &[Character],
        enemy: &[Character],
    ) -> Vec<Recommendation> {
        let sides = Sides::sanitize(ally, enemy);

        if catalog.is_empty() || sides.ally_count >= self.ally_capacity {
            return Vec::new();
        }

        let ally_tags: HashSet<Tag> = sides
            .allies
            .iter()
            .flat_map(|c| c.tags.iter().copied())
            .collect();

        let mut recommendations: Vec<Recommendation> = catalog
            .iter()
            .filter(|candidate| !sides.taken.contains(candidate.id.as_str()))
            .map(|candidate| self.score_candidate(candidate, &sides, &ally_tags))
            .filter(|rec| rec.score > 0)
            .collect();

        // sort_by is stable, so ties stay in catalog order
        recommendations.sort_by(|a, b| b.score.cmp(&a.score));
        recommendations.truncate(self.max_results);

        tracing::debug!(
            candidates = catalog.len(),
            returned = recommendations.len(),
            "scored draft candidates"
        );

        recommendations
    }

    fn score_candidate(
        &self,
        candidate: &Character,
        sides: &Sides<'_>,
        ally_tags: &HashSet<Tag>,
    ) -> Recommendation {
        let mut score: i32 = 0;
        let mut reasons = Vec::new();

        for ally in &sides.allies {
            if self.knowledge.has_synergy(&ally.id, &candidate.id) {
                score = score.saturating_add(self.weights.synergy_with_ally);
                reasons.push(format!("Buena sinergia con {}", ally.name));
            }

            if self.knowledge.has_synergy(&candidate.id, &ally.id) {
                score = score.saturating_add(self.weights.complements_ally);
                reasons.push(format!("Complementa a {}", ally.name));
            }
        }

        for enemy in &sides.enemies {
            if self.knowledge.is_counter(&enemy.id, &candidate.id) {
                score = score.saturating_add(self.weights.counters_enemy);
                reasons.push(format!("Counter directo de {}", enemy.name));
            }
        }

        let has_tank = ally_tags.contains(&Tag::Tank);
        let has_magic = ally_tags.contains(&Tag::Mage) || ally_tags.contains(&Tag::Support);

        if !has_tank && candidate.has_tag(Tag::Tank) {
            score = score.saturating_add(self.weights.missing_tank);
            reasons.push("Tu equipo necesita un Tanque".to_string());
        }

        if !has_magic && candidate.has_tag(Tag::Mage) {
            score = score.saturating_add(self.weights.missing_magic_damage);
            reasons.push("Falta daño mágico".to_string());
        }

        Recommendation {
            character: candidate.clone(),
            score,
            reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::champion::Attributes;

    fn champ(id: &str, tags: &[Tag]) -> Character {
        Character::new(id, id, tags, Attributes::default())
    }

    fn ids(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.character.id.as_str()).collect()
    }

    #[test]
    fn test_empty_catalog_gives_nothing() {
        let kb = KnowledgeBase::builtin();
        let recommender = DraftRecommender::new(&kb);
        assert!(recommender.recommend(&[], &[], &[]).is_empty());
    }

    #[test]
    fn test_full_ally_roster_gives_nothing() {
        let kb = KnowledgeBase::builtin();
        let recommender = DraftRecommender::new(&kb).with_ally_capacity(2);
        let catalog = vec![champ("Malphite", &[Tag::Tank])];
        let ally = vec![champ("Zed", &[Tag::Assassin]), champ("Jinx", &[Tag::Marksman])];
        assert!(recommender.recommend(&catalog, &ally, &[]).is_empty());
    }

    #[test]
    fn test_duplicate_allies_do_not_fill_capacity_or_double_count() {
        let kb = KnowledgeBase::builtin();
        let recommender = DraftRecommender::new(&kb).with_ally_capacity(2);
        let yasuo = champ("Yasuo", &[Tag::Fighter, Tag::Assassin]);
        let catalog = vec![yasuo.clone(), champ("Malphite", &[Tag::Tank, Tag::Fighter])];

        let recs = recommender.recommend(&catalog, &[yasuo.clone(), yasuo], &[]);
        assert_eq!(ids(&recs), vec!["Malphite"]);
        // forward synergy from Yasuo once, plus the tank gap
        assert_eq!(recs[0].score, 15 + 8);
    }

    #[test]
    fn test_contested_pick_is_ignored_on_both_sides() {
        let kb = KnowledgeBase::builtin();
        let recommender = DraftRecommender::new(&kb);
        let vayne = champ("Vayne", &[Tag::Marksman]);
        let catalog = vec![vayne.clone(), champ("Cho'Gath", &[])];

        let recs = recommender.recommend(&catalog, &[vayne.clone()], &[vayne]);
        // No counter bonus from a contested Vayne, and Vayne is not a candidate
        assert!(recs.is_empty());
    }

    #[test]
    fn test_forward_and_reverse_synergy_stack() {
        let mut kb = KnowledgeBase::default();
        kb.synergies.insert("Xayah".into(), vec!["Rakan".into()]);
        kb.synergies.insert("Rakan".into(), vec!["Xayah".into()]);
        let recommender = DraftRecommender::new(&kb);

        let catalog = vec![champ("Rakan", &[Tag::Support])];
        let ally = vec![champ("Xayah", &[Tag::Marksman])];
        let recs = recommender.recommend(&catalog, &ally, &[]);

        assert_eq!(recs[0].score, 25);
        assert_eq!(
            recs[0].reasons,
            vec!["Buena sinergia con Xayah".to_string(), "Complementa a Xayah".to_string()]
        );
    }

    #[test]
    fn test_ties_keep_catalog_order_and_truncate() {
        let kb = KnowledgeBase::default();
        let recommender = DraftRecommender::new(&kb).with_max_results(3);
        let catalog: Vec<Character> = ["Ornn", "Sion", "Rammus", "Maokai", "Zac"]
            .iter()
            .map(|id| champ(id, &[Tag::Tank]))
            .collect();

        let recs = recommender.recommend(&catalog, &[], &[]);
        assert_eq!(ids(&recs), vec!["Ornn", "Sion", "Rammus"]);
        assert!(recs.iter().all(|r| r.score == 8));
    }

    #[test]
    fn test_custom_weights() {
        let kb = KnowledgeBase::builtin();
        let weights = ScoringWeights {
            counters_enemy: 50,
            ..ScoringWeights::default()
        };
        let recommender = DraftRecommender::new(&kb).with_weights(weights);
        let catalog = vec![champ("Sion", &[Tag::Tank, Tag::Fighter])];
        let enemy = vec![champ("Vayne", &[Tag::Marksman])];

        let recs = recommender.recommend(&catalog, &[], &enemy);
        assert_eq!(recs[0].score, 58);
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let kb = KnowledgeBase::builtin();
        let weights = ScoringWeights {
            counters_enemy: i32::MAX,
            missing_tank: i32::MAX,
            ..ScoringWeights::default()
        };
        let recommender = DraftRecommender::new(&kb).with_weights(weights);
        let catalog = vec![champ("Ornn", &[Tag::Tank])];
        let enemy = vec![champ("Vayne", &[Tag::Marksman]), champ("Fiora", &[Tag::Fighter])];

        let recs = recommender.recommend(&catalog, &[], &enemy);
        assert_eq!(recs[0].score, i32::MAX);
        assert_eq!(recs[0].reasons.len(), 3);
    }

    #[test]
    fn test_zero_score_candidates_are_dropped() {
        let kb = KnowledgeBase::builtin();
        let recommender = DraftRecommender::new(&kb);
        let catalog = vec![champ("Teemo", &[Tag::Marksman, Tag::Assassin])];
        assert!(recommender.recommend(&catalog, &[], &[]).is_empty());
    }

    #[test]
    fn test_support_ally_closes_magic_gap() {
        let kb = KnowledgeBase::default();
        let recommender = DraftRecommender::new(&kb);
        let catalog = vec![champ("Lux", &[Tag::Mage, Tag::Support])];
        let ally = vec![champ("Braum", &[Tag::Support, Tag::Tank])];
        assert!(recommender.recommend(&catalog, &ally, &[]).is_empty());
    }
}
