//! Deterministic team-building logic.
//!
//! `team-core` turns free-form equipment effect text into typed stat
//! contributions, aggregates them over a three-slot build and filters
//! equipment candidates for a selected character. It performs no I/O; loaders
//! and front ends feed it records and read back an [`Analysis`].
//! All interactive state changes flow through [`planner::BuildPlanner`].
pub mod build;
pub mod catalog;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod filter;
pub mod model;
pub mod planner;
pub mod stats;

pub use build::{Build, BuildError, EquippedInstance, InstanceId, SelectionKey, SelectionStore};
pub use catalog::{Catalog, CatalogError, RecordKind};
pub use config::BuilderConfig;
pub use effect::{Contribution, MatchRule, ParseContext, ParsedLine, parse_effect};
pub use engine::{Analysis, BranchSelector, analyze};
pub use error::{BuilderError, ErrorSeverity};
pub use filter::{CharacterFilter, EquipmentFilter};
pub use model::{Character, ConditionGroup, ConditionLogic, Element, Equipment, EquipmentSlotEffect};
pub use planner::BuildPlanner;
pub use stats::{StatEntry, StatKind, StatSheet};
