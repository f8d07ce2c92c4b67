//! Board Context
//!
//! The board lives in one signal provided via the Leptos Context API.
//! Views read through the tracked getters and mutate through the methods
//! below, which log storage failures instead of panicking.

use board_core::{Board, BoardConfig, BoardResult, CardId, ListId};
use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::storage::{BrowserClock, BrowserStorage};

pub type BrowserBoard = Board<BrowserStorage>;

/// App-wide board handle
#[derive(Clone, Copy)]
pub struct BoardContext {
    board: RwSignal<BrowserBoard>,
    /// Hover state of list drop targets
    pub dnd: DndSignals<ListId>,
}

impl BoardContext {
    pub fn new(board: BrowserBoard) -> Self {
        Self {
            board: RwSignal::new(board),
            dnd: create_dnd_signals(),
        }
    }

    /// Open the board saved in this browser
    pub fn open() -> Self {
        let board = Board::open(BrowserStorage, BoardConfig::default(), Box::new(BrowserClock));
        Self::new(board)
    }

    // ========================
    // Tracked reads
    // ========================

    pub fn list_ids(&self) -> Vec<ListId> {
        self.board.with(|b| b.list_ids())
    }

    pub fn card_ids(&self, list: ListId) -> Vec<CardId> {
        self.board.with(|b| b.card_ids(list))
    }

    pub fn list_title(&self, list: ListId) -> String {
        self.board
            .with(|b| b.list(list).map(|l| l.title.clone()))
            .unwrap_or_default()
    }

    pub fn card_text(&self, list: ListId, card: CardId) -> String {
        self.board
            .with(|b| b.card(list, card).map(|c| c.text.clone()))
            .unwrap_or_default()
    }

    pub fn is_renaming(&self, list: ListId) -> bool {
        self.board.with(|b| b.editing_list() == Some(list))
    }

    pub fn is_editing_card(&self, card: CardId) -> bool {
        self.board.with(|b| b.is_editing_card(card))
    }

    /// Initial text of the rename input (not tracked)
    pub fn rename_prefill(&self, list: ListId) -> String {
        self.board
            .with_untracked(|b| b.rename_prefill(list).unwrap_or_default().to_string())
    }

    // ========================
    // Lists
    // ========================

    pub fn add_list(&self) {
        self.apply("add list", |b| b.add_list(None));
    }

    pub fn begin_rename(&self, list: ListId) {
        self.board.update(|b| {
            b.begin_rename(list);
        });
    }

    pub fn cancel_rename(&self) {
        self.board.update(|b| b.cancel_rename());
    }

    pub fn rename_list(&self, list: ListId, title: &str) {
        self.apply("rename list", |b| b.rename_list(list, title));
    }

    pub fn delete_list(&self, list: ListId) {
        self.apply("delete list", |b| b.delete_list(list));
    }

    // ========================
    // Cards
    // ========================

    pub fn add_card(&self, list: ListId) {
        self.apply("add card", |b| b.add_card(list, ""));
    }

    pub fn edit_card_text(&self, list: ListId, card: CardId, text: &str) {
        self.apply("edit card", |b| b.edit_card_text(list, card, text));
    }

    pub fn delete_card(&self, list: ListId, card: CardId) {
        self.apply("delete card", |b| b.delete_card(list, card));
    }

    pub fn begin_card_edit(&self, card: CardId) {
        self.board.update(|b| {
            b.begin_card_edit(card);
        });
    }

    pub fn end_card_edit(&self) {
        self.board.update(|b| b.end_card_edit());
    }

    // ========================
    // Drag and drop
    // ========================

    pub fn start_drag(&self, source: ListId, card: CardId) {
        self.board.update(|b| {
            b.start_drag(source, card);
        });
    }

    pub fn drop_pending(&self, dest: ListId) {
        self.apply("move card", |b| b.drop_pending(dest));
    }

    /// Clear a drag that ended without a drop (no-op after a drop)
    pub fn cancel_drag(&self) {
        let pending = self.board.with_untracked(|b| b.pending_drag().is_some());
        if pending {
            self.board.update(|b| b.cancel_drag());
        }
    }

    fn apply<T>(&self, action: &str, op: impl FnOnce(&mut BrowserBoard) -> BoardResult<T>) {
        if let Some(Err(e)) = self.board.try_update(op) {
            log::error!("Failed to {}: {}", action, e);
        }
    }
}
