use crate::error::{BuilderError, ErrorSeverity};

/// Rejected equip requests. The build is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildError {
    /// The same catalog item already occupies a slot.
    #[error("{name} is already equipped in slot {slot}")]
    DuplicateEquip {
        /// Name of the rejected equipment.
        name: String,
        /// Slot holding the existing copy.
        slot: usize,
    },

    /// Every slot is occupied.
    #[error("all {capacity} equipment slots are occupied")]
    SlotsFull {
        /// Number of slots in a build.
        capacity: usize,
    },
}

impl BuilderError for BuildError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BuildError::DuplicateEquip { .. } => ErrorSeverity::Validation,
            // Freeing a slot makes the same request succeed
            BuildError::SlotsFull { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BuildError::DuplicateEquip { .. } => "BUILD_DUPLICATE_EQUIP",
            BuildError::SlotsFull { .. } => "BUILD_SLOTS_FULL",
        }
    }
}
