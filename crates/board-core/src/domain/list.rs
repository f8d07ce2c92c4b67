//! List Entity
//!
//! A titled, ordered sequence of cards. Insertion order is display order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::entity::{position_of, Entity};

/// List identifier, unique across the whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub u64);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list#{}", self.0)
    }
}

/// A list of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    /// Create an empty list
    pub fn new(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cards: Vec::new(),
        }
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    pub fn contains_card(&self, id: CardId) -> bool {
        self.card(id).is_some()
    }

    /// Append a card at the end
    pub fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove a card by id, returning it if it was present
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        position_of(&self.cards, id).map(|index| self.cards.remove(index))
    }
}

impl Entity for List {
    type Id = ListId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
