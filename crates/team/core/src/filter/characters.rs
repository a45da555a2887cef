use std::collections::{BTreeMap, BTreeSet};

use crate::model::Character;

/// Character browser query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterFilter {
    /// Case-insensitive name substring.
    pub search: String,
    /// Characters must carry every one of these tags.
    pub tags: BTreeSet<String>,
}

impl CharacterFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Flips a tag; returns whether it is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_owned())
        }
    }

    pub fn matches(&self, character: &Character) -> bool {
        character
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            && self.tags.iter().all(|tag| character.has_tag(tag))
    }

    pub fn apply<'a>(&self, pool: &'a [Character]) -> Vec<&'a Character> {
        pool.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Tags carried by at least `min_occurrences` characters, alphabetically.
pub fn tag_vocabulary(characters: &[Character], min_occurrences: usize) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for character in characters {
        let distinct: BTreeSet<&str> = character.visual_tags.iter().map(String::as_str).collect();
        for tag in distinct {
            *counts.entry(tag).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count >= min_occurrences)
        .map(|(tag, _)| tag.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Character> {
        vec![
            Character::new("Goku").with_tags(["Saiyan", "Son Family"]),
            Character::new("Gohan").with_tags(["Saiyan", "Son Family", "Hybrid Saiyan"]),
            Character::new("Frieza").with_tags(["Frieza Force"]),
        ]
    }

    #[test]
    fn search_and_tags_are_anded() {
        let roster = roster();
        let filter = CharacterFilter::new().with_search("go");
        assert_eq!(filter.apply(&roster).len(), 2);

        let filter = filter.with_tags(["Hybrid Saiyan"]);
        let names: Vec<_> = filter.apply(&roster).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Gohan"]);
    }

    #[test]
    fn vocabulary_hides_rare_tags() {
        assert_eq!(tag_vocabulary(&roster(), 2), vec!["Saiyan", "Son Family"]);
        assert_eq!(tag_vocabulary(&roster(), 1).len(), 4);
    }
}
