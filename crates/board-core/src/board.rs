//! Board State Container
//!
//! Owns the ordered lists plus the single-slot view state (which list title
//! is being renamed, which card is editable, which card is in flight).
//! Every data change is written through to the store before returning.

use std::collections::HashSet;

use crate::config::BoardConfig;
use crate::domain::{position_of, Card, CardId, List, ListId};
use crate::error::BoardResult;
use crate::ids::{Clock, IdAllocator};
use crate::persistence::{KeyValueStore, Persistence};

/// A list title currently open for renaming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSession {
    pub list: ListId,
    /// Initial input text: current title, or empty for a brand-new list
    pub prefill: String,
}

/// The card being dragged and the list it was picked up from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDrag {
    pub card: Card,
    pub source: ListId,
}

pub struct Board<S> {
    lists: Vec<List>,
    editing_list: Option<RenameSession>,
    editing_card: Option<CardId>,
    pending_drag: Option<PendingDrag>,
    ids: IdAllocator,
    persistence: Persistence<S>,
    config: BoardConfig,
}

impl<S: KeyValueStore> Board<S> {
    /// Load the saved board from `store` (empty when nothing usable is saved)
    pub fn open(store: S, config: BoardConfig, clock: Box<dyn Clock>) -> Self {
        let persistence = Persistence::new(store, config.storage_key.clone());
        let mut lists = persistence.load();
        let mut ids = IdAllocator::seeded(max_id(&lists), clock);

        let repaired = repair_duplicate_ids(&mut lists, &mut ids);
        if repaired > 0 {
            log::warn!("Reassigned {} duplicate ids in saved board", repaired);
        }

        Self {
            lists,
            editing_list: None,
            editing_card: None,
            pending_drag: None,
            ids,
            persistence,
            config,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn list(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|list| list.id == id)
    }

    pub fn card(&self, list: ListId, card: CardId) -> Option<&Card> {
        self.list(list).and_then(|l| l.card(card))
    }

    /// List ids in display order
    pub fn list_ids(&self) -> Vec<ListId> {
        self.lists.iter().map(|list| list.id).collect()
    }

    /// Card ids of one list in display order (empty for unknown lists)
    pub fn card_ids(&self, list: ListId) -> Vec<CardId> {
        self.list(list)
            .map(|l| l.cards.iter().map(|card| card.id).collect())
            .unwrap_or_default()
    }

    pub fn editing_list(&self) -> Option<ListId> {
        self.editing_list.as_ref().map(|session| session.list)
    }

    /// Input prefill when `list` is the one being renamed
    pub fn rename_prefill(&self, list: ListId) -> Option<&str> {
        self.editing_list
            .as_ref()
            .filter(|session| session.list == list)
            .map(|session| session.prefill.as_str())
    }

    pub fn editing_card(&self) -> Option<CardId> {
        self.editing_card
    }

    pub fn is_editing_card(&self, card: CardId) -> bool {
        self.editing_card == Some(card)
    }

    pub fn pending_drag(&self) -> Option<&PendingDrag> {
        self.pending_drag.as_ref()
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    // ========================
    // Lists
    // ========================

    /// Append a list and open its title for renaming
    pub fn add_list(&mut self, title: Option<&str>) -> BoardResult<ListId> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(self.config.default_list_title.as_str())
            .to_string();

        let id = self.ids.next_list_id();
        log::debug!("Adding {} '{}'", id, title);
        self.lists.push(List::new(id, title));
        self.editing_list = Some(RenameSession {
            list: id,
            prefill: String::new(),
        });
        self.persist()?;
        Ok(id)
    }

    /// Open an existing list's title for renaming
    pub fn begin_rename(&mut self, id: ListId) -> bool {
        let Some(list) = self.list(id) else {
            return false;
        };
        let prefill = list.title.clone();
        self.editing_list = Some(RenameSession { list: id, prefill });
        true
    }

    /// Close the rename input without touching the title
    pub fn cancel_rename(&mut self) {
        self.editing_list = None;
    }

    /// Set the title to the trimmed input unless it is blank.
    /// Leaves rename mode either way. Returns whether the title changed.
    pub fn rename_list(&mut self, id: ListId, new_title: &str) -> BoardResult<bool> {
        self.editing_list = None;

        let title = new_title.trim();
        if title.is_empty() {
            log::debug!("Ignoring blank title for {}", id);
            return Ok(false);
        }
        let Some(list) = self.list_mut(id) else {
            return Ok(false);
        };
        list.title = title.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Remove a list together with its cards
    pub fn delete_list(&mut self, id: ListId) -> BoardResult<Option<List>> {
        let Some(index) = position_of(&self.lists, id) else {
            return Ok(None);
        };
        let removed = self.lists.remove(index);
        log::debug!("Deleted {} ({} cards)", id, removed.cards.len());

        if self.editing_list() == Some(id) {
            self.editing_list = None;
        }
        if self.editing_card.is_some_and(|card| removed.contains_card(card)) {
            self.editing_card = None;
        }
        if self.pending_drag.as_ref().is_some_and(|drag| drag.source == id) {
            self.pending_drag = None;
        }

        self.persist()?;
        Ok(Some(removed))
    }

    // ========================
    // Cards
    // ========================

    /// Append a card to `list` and make it the editable card
    pub fn add_card(&mut self, list: ListId, text: &str) -> BoardResult<Option<CardId>> {
        let Some(index) = position_of(&self.lists, list) else {
            return Ok(None);
        };
        let id = self.ids.next_card_id();
        self.lists[index].push_card(Card::new(id, text));
        self.editing_card = Some(id);
        log::debug!("Added {} to {}", id, list);
        self.persist()?;
        Ok(Some(id))
    }

    /// Replace a list's whole card sequence.
    ///
    /// Rejected (nothing saved) when `cards` repeats an id or reuses the id
    /// of a card that lives in another list.
    pub fn set_cards(&mut self, list: ListId, cards: Vec<Card>) -> BoardResult<bool> {
        let Some(index) = position_of(&self.lists, list) else {
            return Ok(false);
        };

        let mut seen = HashSet::new();
        let clash = cards.iter().any(|card| {
            !seen.insert(card.id)
                || self
                    .lists
                    .iter()
                    .any(|other| other.id != list && other.contains_card(card.id))
        });
        if clash {
            log::warn!("Rejected card sequence for {}: duplicate card ids", list);
            return Ok(false);
        }

        if let Some(max) = cards.iter().map(|card| card.id.0).max() {
            self.ids.observe(max);
        }
        self.lists[index].cards = cards;
        self.forget_missing_card_edit();
        self.persist()?;
        Ok(true)
    }

    /// Live edit of one card's text
    pub fn edit_card_text(&mut self, list: ListId, card: CardId, text: &str) -> BoardResult<bool> {
        let Some(target) = self.list_mut(list).and_then(|l| l.card_mut(card)) else {
            return Ok(false);
        };
        target.text = text.to_string();
        self.persist()?;
        Ok(true)
    }

    pub fn delete_card(&mut self, list: ListId, card: CardId) -> BoardResult<Option<Card>> {
        let Some(removed) = self.list_mut(list).and_then(|l| l.remove_card(card)) else {
            return Ok(None);
        };
        if self.editing_card == Some(card) {
            self.editing_card = None;
        }
        log::debug!("Deleted {} from {}", card, list);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Make `card` the only editable card
    pub fn begin_card_edit(&mut self, card: CardId) -> bool {
        let exists = self.lists.iter().any(|list| list.contains_card(card));
        if exists {
            self.editing_card = Some(card);
        }
        exists
    }

    pub fn end_card_edit(&mut self) {
        self.editing_card = None;
    }

    // ========================
    // Drag and drop
    // ========================

    /// Remember `card` of `source` as the card in flight
    pub fn start_drag(&mut self, source: ListId, card: CardId) -> bool {
        let Some(picked) = self.card(source, card).cloned() else {
            return false;
        };
        self.pending_drag = Some(PendingDrag {
            card: picked,
            source,
        });
        true
    }

    pub fn cancel_drag(&mut self) {
        self.pending_drag = None;
    }

    /// Drop the card in flight onto `dest`. The slot is cleared whatever
    /// the outcome; without a pending drag nothing happens.
    pub fn drop_pending(&mut self, dest: ListId) -> BoardResult<bool> {
        let Some(drag) = self.pending_drag.take() else {
            return Ok(false);
        };
        self.move_card(drag.source, &drag.card, dest)
    }

    /// Take `card` out of `source` and append it to `dest`.
    ///
    /// No-op when `dest` is gone or `card` is no longer in `source`.
    /// Dropping on the source list moves the card to its end.
    pub fn move_card(&mut self, source: ListId, card: &Card, dest: ListId) -> BoardResult<bool> {
        let Some(dest_index) = position_of(&self.lists, dest) else {
            log::debug!("Drop target {} no longer exists", dest);
            return Ok(false);
        };
        let Some(moved) = self.list_mut(source).and_then(|l| l.remove_card(card.id)) else {
            log::debug!("{} is no longer in {}", card.id, source);
            return Ok(false);
        };
        log::debug!("Moving {} from {} to {}", moved.id, source, dest);
        self.lists[dest_index].push_card(moved);
        self.persist()?;
        Ok(true)
    }

    // ========================
    // Internals
    // ========================

    fn list_mut(&mut self, id: ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    fn forget_missing_card_edit(&mut self) {
        if let Some(card) = self.editing_card {
            if !self.lists.iter().any(|list| list.contains_card(card)) {
                self.editing_card = None;
            }
        }
    }

    fn persist(&mut self) -> BoardResult<()> {
        self.persistence.save(&self.lists)
    }
}

/// Largest list or card id on the board
fn max_id(lists: &[List]) -> u64 {
    lists
        .iter()
        .flat_map(|list| std::iter::once(list.id.0).chain(list.cards.iter().map(|c| c.id.0)))
        .max()
        .unwrap_or(0)
}

/// Give every repeated list id and card id a fresh one. Returns how many changed.
fn repair_duplicate_ids(lists: &mut [List], ids: &mut IdAllocator) -> usize {
    let mut seen_lists = HashSet::new();
    let mut seen_cards = HashSet::new();
    let mut repaired = 0;

    for list in lists.iter_mut() {
        if !seen_lists.insert(list.id) {
            list.id = ids.next_list_id();
            repaired += 1;
        }
        for card in list.cards.iter_mut() {
            if !seen_cards.insert(card.id) {
                card.id = ids.next_card_id();
                repaired += 1;
            }
        }
    }
    repaired
}
