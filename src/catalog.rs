use crate::analysis::champion::{Attributes, Character, Tag};
use crate::api::models::{ChampionDto, DataDragonChampions};

impl From<&ChampionDto> for Character {
    fn from(dto: &ChampionDto) -> Self {
        let mut character = Character::new(
            &dto.id,
            &dto.name,
            &[],
            Attributes {
                attack: dto.info.attack,
                magic: dto.info.magic,
                defense: dto.info.defense,
                difficulty: dto.info.difficulty,
            },
        );
        character.title = dto.title.clone();
        character.image = dto.image.as_ref().map(|img| img.full.clone());

        for raw in &dto.tags {
            match raw.parse::<Tag>() {
                Ok(tag) => character.push_tag(tag),
                Err(_) => tracing::debug!(champion = %dto.id, tag = %raw, "dropping unknown tag"),
            }
        }

        character
    }
}

/// Flattens a champion.json payload into catalog order (by id).
pub fn from_data_dragon(payload: &DataDragonChampions) -> Vec<Character> {
    payload.data.values().map(Character::from).collect()
}

/// Name search plus optional role filter. An empty query matches everything.
pub fn filter<'a>(catalog: &'a [Character], query: &str, role: Option<Tag>) -> Vec<&'a Character> {
    let query = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
        .filter(|c| role.map_or(true, |tag| c.has_tag(tag)))
        .collect()
}

/// Resolves a user-typed champion by id, then by display name.
pub fn find<'a>(catalog: &'a [Character], needle: &str) -> Option<&'a Character> {
    let needle = needle.trim();
    catalog
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(needle))
        .or_else(|| {
            let lowered = needle.to_lowercase();
            catalog.iter().find(|c| c.name.to_lowercase() == lowered)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "champion",
        "version": "13.24.1",
        "data": {
            "Chogath": {
                "id": "Chogath", "key": "31", "name": "Cho'Gath", "title": "el Terror del Vacío",
                "tags": ["Tank", "Mage"],
                "info": { "attack": 3, "defense": 7, "magic": 7, "difficulty": 5 },
                "image": { "full": "Chogath.png" }
            },
            "Ahri": {
                "id": "Ahri", "key": "103", "name": "Ahri", "title": "la Vastaya de Nueve Colas",
                "tags": ["Mage", "Assassin", "Jungler"],
                "info": { "attack": 3, "defense": 4, "magic": 8, "difficulty": 5 }
            },
            "MonkeyKing": {
                "id": "MonkeyKing", "key": "62", "name": "Wukong",
                "tags": ["Fighter", "Tank"],
                "info": { "attack": 8, "defense": 5, "magic": 2 }
            }
        }
    }"#;

    fn sample_catalog() -> Vec<Character> {
        let payload: DataDragonChampions = serde_json::from_str(SAMPLE).unwrap();
        from_data_dragon(&payload)
    }

    #[test]
    fn test_conversion_keeps_known_tags_in_order() {
        let catalog = sample_catalog();
        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["Ahri", "Chogath", "MonkeyKing"]);

        let ahri = &catalog[0];
        assert_eq!(ahri.tags, vec![Tag::Mage, Tag::Assassin]);
        assert_eq!(ahri.attributes.magic, 8.0);
        assert!(ahri.image.is_none());

        let chogath = &catalog[1];
        assert_eq!(chogath.name, "Cho'Gath");
        assert_eq!(chogath.image.as_deref(), Some("Chogath.png"));
        assert_eq!(catalog[2].attributes.difficulty, 0.0);
    }

    #[test]
    fn test_filter_by_name_and_role() {
        let catalog = sample_catalog();

        let all = filter(&catalog, "", None);
        assert_eq!(all.len(), 3);

        let tanks = filter(&catalog, "", Some(Tag::Tank));
        let tank_ids: Vec<&str> = tanks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(tank_ids, vec!["Chogath", "MonkeyKing"]);

        let named = filter(&catalog, "GATH", None);
        assert_eq!(named.len(), 1);
        assert_eq!(named[0].id, "Chogath");

        assert!(filter(&catalog, "wu", Some(Tag::Mage)).is_empty());
    }

    #[test]
    fn test_find_by_id_or_name() {
        let catalog = sample_catalog();
        assert_eq!(find(&catalog, "monkeyking").map(|c| c.name.as_str()), Some("Wukong"));
        assert_eq!(find(&catalog, "cho'gath").map(|c| c.id.as_str()), Some("Chogath"));
        assert!(find(&catalog, "Teemo").is_none());
    }
}
