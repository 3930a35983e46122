use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role archetype as published by Data Dragon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Fighter,
    Tank,
    Mage,
    Assassin,
    Support,
    Marksman,
}

impl Tag {
    pub const ALL: [Tag; 6] = [
        Tag::Fighter,
        Tag::Tank,
        Tag::Mage,
        Tag::Assassin,
        Tag::Support,
        Tag::Marksman,
    ];

    /// Label shown in role filters.
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Fighter => "Luchador",
            Tag::Tank => "Tanque",
            Tag::Mage => "Mago",
            Tag::Assassin => "Asesino",
            Tag::Support => "Soporte",
            Tag::Marksman => "Tirador",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Tag::Fighter => "Fighter",
            Tag::Tank => "Tank",
            Tag::Mage => "Mage",
            Tag::Assassin => "Assassin",
            Tag::Support => "Support",
            Tag::Marksman => "Marksman",
        };
        write!(f, "{}", id)
    }
}

impl FromStr for Tag {
    type Err = String;

    /// Accepts the Data Dragon id or the filter label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| {
                tag.to_string().eq_ignore_ascii_case(needle)
                    || tag.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

/// Base ratings from the catalog. Values are small non-negative numbers
/// with no fixed upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub attack: f64,
    #[serde(default)]
    pub magic: f64,
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub difficulty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub image: Option<String>,
}

impl Character {
    pub fn new(id: &str, name: &str, tags: &[Tag], attributes: Attributes) -> Self {
        let mut character = Character {
            id: id.to_string(),
            name: name.to_string(),
            title: String::new(),
            tags: Vec::with_capacity(tags.len()),
            attributes,
            image: None,
        };
        for tag in tags {
            character.push_tag(*tag);
        }
        character
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Tags behave as an ordered set: a repeated tag is ignored.
    pub fn push_tag(&mut self, tag: Tag) {
        if !self.has_tag(tag) {
            self.tags.push(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parses_id_and_label() {
        assert_eq!("Tank".parse::<Tag>(), Ok(Tag::Tank));
        assert_eq!("marksman".parse::<Tag>(), Ok(Tag::Marksman));
        assert_eq!("Tirador".parse::<Tag>(), Ok(Tag::Marksman));
        assert_eq!("soporte".parse::<Tag>(), Ok(Tag::Support));
        assert!("Jungler".parse::<Tag>().is_err());
    }

    #[test]
    fn test_new_deduplicates_tags() {
        let c = Character::new("Zac", "Zac", &[Tag::Tank, Tag::Fighter, Tag::Tank], Attributes::default());
        assert_eq!(c.tags, vec![Tag::Tank, Tag::Fighter]);
        assert!(c.has_tag(Tag::Fighter));
        assert!(!c.has_tag(Tag::Mage));
    }
}
