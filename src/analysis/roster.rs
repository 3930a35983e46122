use super::champion::Character;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The roster is at capacity and the character was not in it.
    Rejected,
}

/// One side of the draft: picked champions in pick order, bounded by a
/// capacity. Membership is by id.
#[derive(Debug, Clone)]
pub struct Roster {
    capacity: usize,
    picks: Vec<Character>,
}

impl Roster {
    pub fn new(capacity: usize) -> Self {
        Roster {
            capacity,
            picks: Vec::with_capacity(capacity),
        }
    }

    /// Removes the character when it is already picked, otherwise adds it
    /// if there is room.
    pub fn toggle(&mut self, character: &Character) -> ToggleOutcome {
        if let Some(pos) = self.picks.iter().position(|c| c.id == character.id) {
            self.picks.remove(pos);
            return ToggleOutcome::Removed;
        }

        if self.is_full() {
            return ToggleOutcome::Rejected;
        }

        self.picks.push(character.clone());
        ToggleOutcome::Added
    }

    pub fn contains(&self, id: &str) -> bool {
        self.picks.iter().any(|c| c.id == id)
    }

    pub fn is_full(&self) -> bool {
        self.picks.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn characters(&self) -> &[Character] {
        &self.picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::champion::{Attributes, Tag};

    fn champ(id: &str) -> Character {
        Character::new(id, id, &[Tag::Fighter], Attributes::default())
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut roster = Roster::new(2);
        assert_eq!(roster.toggle(&champ("Garen")), ToggleOutcome::Added);
        assert!(roster.contains("Garen"));
        assert_eq!(roster.toggle(&champ("Garen")), ToggleOutcome::Removed);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_toggle_respects_capacity() {
        let mut roster = Roster::new(2);
        roster.toggle(&champ("Garen"));
        roster.toggle(&champ("Darius"));
        assert!(roster.is_full());
        assert_eq!(roster.toggle(&champ("Sett")), ToggleOutcome::Rejected);
        assert_eq!(roster.len(), 2);

        // Removing still works on a full roster
        assert_eq!(roster.toggle(&champ("Darius")), ToggleOutcome::Removed);
        assert_eq!(roster.toggle(&champ("Sett")), ToggleOutcome::Added);
        let ids: Vec<_> = roster.characters().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["Garen", "Sett"]);
    }
}
