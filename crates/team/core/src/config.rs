/// Builder limits and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Tags carried by fewer characters than this are hidden from the tag vocabulary.
    pub tag_min_occurrences: usize,
}

impl BuilderConfig {
    // ===== compile-time constants =====
    /// Equipment slots in one build.
    pub const EQUIP_SLOTS: usize = 3;
    /// Largest battle-member multiplier; toggling past it wraps to 0.
    pub const MAX_MULTIPLIER: u8 = 3;
    /// Residual fragments up to this many characters are dropped as noise.
    pub const RESIDUAL_MIN_CHARS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TAG_MIN_OCCURRENCES: usize = 2;

    pub fn new() -> Self {
        Self {
            tag_min_occurrences: Self::DEFAULT_TAG_MIN_OCCURRENCES,
        }
    }

    pub fn with_tag_min_occurrences(tag_min_occurrences: usize) -> Self {
        Self {
            tag_min_occurrences,
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}
