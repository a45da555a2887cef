//! Validated collections of catalog records.

use std::collections::BTreeMap;

use crate::error::{BuilderError, ErrorSeverity};
use crate::model::{Character, Equipment};

/// Record family, used in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
    Character,
    Equipment,
}

/// A catalog that cannot be adopted. Loading fails as a whole.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A record is missing a required field.
    #[error("{kind} record #{index} is malformed: {reason}")]
    MalformedRecord {
        kind: RecordKind,
        /// Position of the record in its source array.
        index: usize,
        reason: &'static str,
    },

    /// Two equipment records share an id.
    #[error("equipment id {id:?} is used by records #{first} and #{second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

impl BuilderError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::MalformedRecord { .. } => "CATALOG_MALFORMED_RECORD",
            CatalogError::DuplicateId { .. } => "CATALOG_DUPLICATE_ID",
        }
    }
}

/// Checks that every character has a name.
pub fn validate_characters(characters: &[Character]) -> Result<(), CatalogError> {
    if let Some(index) = characters.iter().position(|c| c.name.trim().is_empty()) {
        return Err(CatalogError::MalformedRecord {
            kind: RecordKind::Character,
            index,
            reason: "name is blank",
        });
    }
    Ok(())
}

/// Checks that every equipment has a name and that non-empty ids are unique.
pub fn validate_equipment(equipment: &[Equipment]) -> Result<(), CatalogError> {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();

    for (index, item) in equipment.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(CatalogError::MalformedRecord {
                kind: RecordKind::Equipment,
                index,
                reason: "name is blank",
            });
        }

        let Some(id) = item.id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };
        if let Some(&first) = seen.get(id) {
            return Err(CatalogError::DuplicateId {
                id: id.to_owned(),
                first,
                second: index,
            });
        }
        seen.insert(id, index);
    }

    Ok(())
}

/// Characters and equipment available to a planning session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    characters: Vec<Character>,
    equipment: Vec<Equipment>,
}

impl Catalog {
    /// Builds a catalog after validating both record sets.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found; nothing is adopted on error.
    pub fn new(characters: Vec<Character>, equipment: Vec<Equipment>) -> Result<Self, CatalogError> {
        validate_characters(&characters)?;
        validate_equipment(&equipment)?;
        Ok(Self {
            characters,
            equipment,
        })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    /// Replaces the character set. The current set is kept on error.
    pub fn replace_characters(&mut self, characters: Vec<Character>) -> Result<(), CatalogError> {
        validate_characters(&characters)?;
        self.characters = characters;
        Ok(())
    }

    /// Replaces the equipment set. The current set is kept on error.
    pub fn replace_equipment(&mut self, equipment: Vec<Equipment>) -> Result<(), CatalogError> {
        validate_equipment(&equipment)?;
        self.equipment = equipment;
        Ok(())
    }

    /// Finds a character by id, code or (case-insensitive) name.
    pub fn find_character(&self, reference: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.is_referenced_by(reference))
    }

    /// Finds equipment by id or (case-insensitive) name.
    pub fn find_equipment(&self, reference: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.is_referenced_by(reference))
    }
}
