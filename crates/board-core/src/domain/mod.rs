//! Domain Layer
//!
//! Board entities and their identifiers.
//! This layer has NO external dependencies (except serde for serialization).

mod card;
mod entity;
mod list;

pub use card::{Card, CardId};
pub use entity::{position_of, Entity};
pub use list::{List, ListId};
