//! Domain Layer - Core Entity Trait
//!
//! Every board entity is addressed by a unique, copyable id.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Index of the first entity with the given id
pub fn position_of<T: Entity>(items: &[T], id: T::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
