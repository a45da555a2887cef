//! Stat vocabulary and the aggregated stat sheet.
mod registry;
mod sheet;

pub use registry::{STAT_KEYWORDS, StatKind};
pub use sheet::{StatEntry, StatSheet};
