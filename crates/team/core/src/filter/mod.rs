//! Candidate filtering for equipment and characters.
//!
//! Every predicate here is a pure function of its arguments; the facet sets are
//! plain values owned by the caller.
mod characters;
mod equipment;

pub use characters::{CharacterFilter, tag_vocabulary};
pub use equipment::{
    EquipmentFilter, condition_facets, effect_facets, has_conditions, is_applicable,
    matches_effect,
};
