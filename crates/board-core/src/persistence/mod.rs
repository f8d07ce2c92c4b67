//! Persistence Layer
//!
//! The whole board is one JSON document stored under a single key.

mod codec;
mod memory;
mod store;

pub use codec::{decode, encode};
pub use memory::MemoryStore;
pub use store::{KeyValueStore, Persistence};
