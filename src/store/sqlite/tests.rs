//! Tests for the SQLite memo store.

use crate::domain::{MemoId, MemoInput, Tag};
use crate::session::UserId;
use crate::store::{MemoStore, SqliteStore};
use chrono::{DateTime, Duration, Utc};
use pretty_assertions::assert_eq;

fn user() -> UserId {
    UserId::new("default")
}

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn input(title: &str, order: i64) -> MemoInput {
    let now = ts("2024-01-15T10:30:00Z");
    MemoInput::new(None, title, "<p>body</p>", vec![], now, now, order).unwrap()
}

// ===========================================
// Save / fetch round-trips
// ===========================================

#[test]
fn save_without_id_assigns_one() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let id = store.save(&user(), &input("First", 0)).unwrap();

    let memo = store.fetch_by_id(&user(), &id).unwrap().unwrap();
    assert_eq!(memo.id(), &id);
    assert_eq!(memo.title(), "First");
}

#[test]
fn save_round_trips_all_fields() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let created = ts("2024-01-15T10:30:00Z");
    let updated = ts("2024-02-01T08:00:00Z");
    let tags = vec![Tag::with_id("t1", "#travel"), Tag::with_id("t2", "#food")];
    let input =
        MemoInput::new(None, "Trip", "<p>Pack light</p>", tags, created, updated, 4).unwrap();

    let id = store.save(&user(), &input).unwrap();
    let memo = store.fetch_by_id(&user(), &id).unwrap().unwrap();

    assert_eq!(memo.title(), "Trip");
    assert_eq!(memo.content(), "<p>Pack light</p>");
    assert_eq!(memo.created_at(), created);
    assert_eq!(memo.updated_at(), updated);
    assert_eq!(memo.order(), 4);
    let texts: Vec<_> = memo.tags().iter().map(Tag::text).collect();
    assert_eq!(texts, vec!["#travel", "#food"]);
}

#[test]
fn tag_order_survives_round_trip() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let now = ts("2024-01-15T10:30:00Z");
    let tags = vec![
        Tag::with_id("t1", "#c"),
        Tag::with_id("t2", "#a"),
        Tag::with_id("t3", "#b"),
    ];
    let input = MemoInput::new(None, "Ordered", "", tags, now, now, 0).unwrap();

    let id = store.save(&user(), &input).unwrap();
    let memo = store.fetch_by_id(&user(), &id).unwrap().unwrap();

    let texts: Vec<_> = memo.tags().iter().map(Tag::text).collect();
    assert_eq!(texts, vec!["#c", "#a", "#b"], "positions should be preserved");
}

#[test]
fn fetch_by_id_returns_none_for_missing() {
    let store = SqliteStore::open_in_memory().unwrap();
    let result = store.fetch_by_id(&user(), &MemoId::new()).unwrap();
    assert!(result.is_none());
}

// ===========================================
// Updates
// ===========================================

#[test]
fn update_preserves_created_at() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let created = ts("2024-01-15T10:30:00Z");
    let first = MemoInput::new(None, "Draft", "", vec![], created, created, 0).unwrap();
    let id = store.save(&user(), &first).unwrap();

    let later = created + Duration::hours(2);
    let second =
        MemoInput::new(Some(id.clone()), "Draft v2", "", vec![], created, later, 0).unwrap();
    store.save(&user(), &second).unwrap();

    let memo = store.fetch_by_id(&user(), &id).unwrap().unwrap();
    assert_eq!(memo.title(), "Draft v2");
    assert_eq!(memo.created_at(), created, "created_at must never change");
    assert_eq!(memo.updated_at(), later);
}

#[test]
fn update_replaces_tag_list() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let now = ts("2024-01-15T10:30:00Z");
    let first = MemoInput::new(
        None,
        "Tagged",
        "",
        vec![Tag::with_id("t1", "#old")],
        now,
        now,
        0,
    )
    .unwrap();
    let id = store.save(&user(), &first).unwrap();

    let second = MemoInput::new(
        Some(id.clone()),
        "Tagged",
        "",
        vec![Tag::with_id("t2", "#new"), Tag::with_id("t3", "#fresh")],
        now,
        now,
        0,
    )
    .unwrap();
    store.save(&user(), &second).unwrap();

    let memo = store.fetch_by_id(&user(), &id).unwrap().unwrap();
    let texts: Vec<_> = memo.tags().iter().map(Tag::text).collect();
    assert_eq!(texts, vec!["#new", "#fresh"]);
}

#[test]
fn update_does_not_create_second_row() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let id = store.save(&user(), &input("One", 0)).unwrap();
    let now = ts("2024-01-15T10:30:00Z");
    let update = MemoInput::new(Some(id), "One edited", "", vec![], now, now, 0).unwrap();
    store.save(&user(), &update).unwrap();

    assert_eq!(store.count(&user()).unwrap(), 1);
}

// ===========================================
// fetch_all ordering
// ===========================================

#[test]
fn fetch_all_orders_by_creation_order() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.save(&user(), &input("Second", 1)).unwrap();
    store.save(&user(), &input("First", 0)).unwrap();
    store.save(&user(), &input("Third", 2)).unwrap();

    let memos = store.fetch_all(&user()).unwrap();
    let titles: Vec<_> = memos.iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[test]
fn fetch_all_empty_store() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.fetch_all(&user()).unwrap().is_empty());
}

// ===========================================
// Per-user isolation
// ===========================================

#[test]
fn users_do_not_see_each_others_memos() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    let id = store.save(&alice, &input("Alice memo", 0)).unwrap();

    assert!(store.fetch_by_id(&bob, &id).unwrap().is_none());
    assert!(store.fetch_all(&bob).unwrap().is_empty());
    assert_eq!(store.count(&alice).unwrap(), 1);
    assert_eq!(store.count(&bob).unwrap(), 0);
}

#[test]
fn delete_is_scoped_to_user() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    let id = store.save(&alice, &input("Alice memo", 0)).unwrap();

    store.delete(&bob, &id).unwrap();
    assert!(store.fetch_by_id(&alice, &id).unwrap().is_some());
}

// ===========================================
// Delete / count
// ===========================================

#[test]
fn delete_removes_memo_and_tags() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let now = ts("2024-01-15T10:30:00Z");
    let input = MemoInput::new(
        None,
        "Doomed",
        "",
        vec![Tag::with_id("t1", "#gone")],
        now,
        now,
        0,
    )
    .unwrap();
    let id = store.save(&user(), &input).unwrap();

    store.delete(&user(), &id).unwrap();

    assert!(store.fetch_by_id(&user(), &id).unwrap().is_none());
    let orphans: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM memo_tags", [], |row| row.get(0))
        .unwrap();
    assert_eq!(orphans, 0, "tag rows should be gone");
}

#[test]
fn delete_missing_memo_is_idempotent() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    assert!(store.delete(&user(), &MemoId::new()).is_ok());
}

#[test]
fn count_tracks_saves_and_deletes() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.count(&user()).unwrap(), 0);

    let id = store.save(&user(), &input("One", 0)).unwrap();
    store.save(&user(), &input("Two", 1)).unwrap();
    assert_eq!(store.count(&user()).unwrap(), 2);

    store.delete(&user(), &id).unwrap();
    assert_eq!(store.count(&user()).unwrap(), 1);
}

// ===========================================
// Persistence across connections
// ===========================================

#[test]
fn open_persists_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("data").join("memos.db");

    let id = {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.save(&user(), &input("Durable", 0)).unwrap()
    };

    let store = SqliteStore::open(&db_path).unwrap();
    let memo = store.fetch_by_id(&user(), &id).unwrap().unwrap();
    assert_eq!(memo.title(), "Durable");
}
