//! Board Integration Tests
//!
//! End-to-end flows through the public board API with an in-memory store.

use board_core::persistence::decode;
use board_core::{Board, BoardConfig, Card, FixedClock, KeyValueStore, ListId, MemoryStore};

fn open(store: MemoryStore) -> Board<MemoryStore> {
    Board::open(store, BoardConfig::default(), Box::new(FixedClock(1_700_000_000_000)))
}

fn saved_json(board: &Board<MemoryStore>) -> String {
    board
        .persistence()
        .store()
        .get(BoardConfig::DEFAULT_STORAGE_KEY)
        .expect("read")
        .expect("board saved")
}

#[test]
fn test_add_list_add_card_delete_list() {
    let mut board = open(MemoryStore::new());
    assert!(board.is_empty());

    let list = board.add_list(None).unwrap();
    assert_eq!(board.lists().len(), 1);
    assert_eq!(board.list(list).unwrap().title, "New List");
    assert!(board.list(list).unwrap().cards.is_empty());

    board.add_card(list, "Buy milk").unwrap();
    let cards = &board.list(list).unwrap().cards;
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].text, "Buy milk");

    board.delete_list(list).unwrap();
    assert!(board.is_empty());
    assert_eq!(saved_json(&board), "[]");
}

#[test]
fn test_move_round_trip_restores_content() {
    let mut board = open(MemoryStore::new());
    let a = board.add_list(Some("A")).unwrap();
    let b = board.add_list(Some("B")).unwrap();
    let first = board.add_card(a, "first").unwrap().unwrap();
    let second = board.add_card(a, "second").unwrap().unwrap();
    let original: Vec<Card> = board.list(a).unwrap().cards.clone();

    board.start_drag(a, first);
    board.drop_pending(b).unwrap();
    board.start_drag(b, first);
    board.drop_pending(a).unwrap();

    let mut now: Vec<Card> = board.list(a).unwrap().cards.clone();
    // same content, but the moved card now sits at the end
    assert_eq!(board.card_ids(a), vec![second, first]);
    now.sort_by_key(|c| c.id);
    let mut expected = original;
    expected.sort_by_key(|c| c.id);
    assert_eq!(now, expected);
    assert!(board.list(b).unwrap().cards.is_empty());
}

#[test]
fn test_delete_list_only_removes_its_cards() {
    let mut board = open(MemoryStore::new());
    let keep = board.add_list(Some("Keep")).unwrap();
    let doomed = board.add_list(Some("Drop")).unwrap();
    board.add_card(keep, "k1").unwrap();
    board.add_card(doomed, "d1").unwrap();
    board.add_card(doomed, "d2").unwrap();
    board.add_card(keep, "k2").unwrap();
    let kept_before = board.list(keep).unwrap().cards.clone();

    let removed = board.delete_list(doomed).unwrap().unwrap();
    assert_eq!(removed.cards.len(), 2);
    assert_eq!(board.list(keep).unwrap().cards, kept_before);
}

#[test]
fn test_reopen_restores_board() {
    let mut board = open(MemoryStore::new());
    let todo = board.add_list(Some("Todo")).unwrap();
    board.rename_list(todo, "  Today ").unwrap();
    let card = board.add_card(todo, "").unwrap().unwrap();
    board.edit_card_text(todo, card, "stretch").unwrap();
    board.add_list(None).unwrap();

    let json = saved_json(&board);
    let reopened = open(MemoryStore::with_entry(BoardConfig::DEFAULT_STORAGE_KEY, &json));

    assert_eq!(reopened.lists(), board.lists());
    assert_eq!(reopened.list(todo).unwrap().title, "Today");
    assert_eq!(reopened.editing_list(), None);
    assert_eq!(reopened.editing_card(), None);
}

#[test]
fn test_every_change_is_saved() {
    let mut board = open(MemoryStore::new());
    let a = board.add_list(None).unwrap();
    let b = board.add_list(None).unwrap();
    let card = board.add_card(a, "x").unwrap().unwrap();
    board.start_drag(a, card);
    board.drop_pending(b).unwrap();

    let saved = decode(&saved_json(&board)).unwrap();
    assert_eq!(saved, board.lists());
    assert_eq!(board.persistence().store().writes(), 4);
}

#[test]
fn test_corrupt_state_opens_empty() {
    let store = MemoryStore::with_entry(BoardConfig::DEFAULT_STORAGE_KEY, "[{\"id\": ");
    let mut board = open(store);
    assert!(board.is_empty());

    board.add_list(None).unwrap();
    assert_eq!(decode(&saved_json(&board)).unwrap().len(), 1);
}

#[test]
fn test_custom_storage_key() {
    let config = BoardConfig::default().with_storage_key("other");
    let mut board = Board::open(MemoryStore::new(), config, Box::new(FixedClock(1)));
    board.add_list(None).unwrap();

    let store = board.persistence().store();
    assert!(store.get("other").unwrap().is_some());
    assert!(store.get(BoardConfig::DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn test_unknown_list_operations_are_noops() {
    let mut board = open(MemoryStore::new());
    let ghost = ListId(404);
    assert!(!board.rename_list(ghost, "x").unwrap());
    assert!(board.delete_list(ghost).unwrap().is_none());
    assert!(board.add_card(ghost, "x").unwrap().is_none());
    assert!(!board.set_cards(ghost, Vec::new()).unwrap());
    assert_eq!(board.persistence().store().writes(), 0);
}
