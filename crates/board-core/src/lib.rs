//! Board Core
//!
//! Layered architecture:
//! - domain: Card and List entities
//! - ids: time-based, collision-free id allocation
//! - persistence: key-value store abstraction and JSON codec
//! - board: the state container every view mutates through

pub mod board;
pub mod config;
pub mod domain;
pub mod error;
pub mod ids;
pub mod persistence;

pub use board::{Board, PendingDrag, RenameSession};
pub use config::BoardConfig;
pub use domain::{Card, CardId, Entity, List, ListId};
pub use error::{BoardError, BoardResult, StorageError, StorageResult};
pub use ids::{Clock, FixedClock, IdAllocator};
pub use persistence::{KeyValueStore, MemoryStore, Persistence};
