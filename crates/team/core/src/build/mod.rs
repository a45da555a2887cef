//! Equipped items and their run-time state.
//!
//! A [`Build`] is a fixed array of equipment slots; the [`SelectionStore`]
//! remembers which OR option is active per equipped instance and effect line.
mod error;
mod instance;
mod selection;

pub use error::BuildError;
pub use instance::{Build, EquippedInstance, InstanceId};
pub use selection::{SelectionKey, SelectionStore};
