//! ファイルストアテスト
//!
//! 匿名IDとお気に入りがJSONファイルに永続化されることを検証

use abno_catalog::store::FileStore;
use abno_catalog_common::{ensure_user_id, FavoritesStore, KeyValueStore};
use tempfile::tempdir;

/// 存在しないファイルは空のストアとして開く
#[test]
fn test_open_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path().join("storage.json"));

    assert!(store.load("userId").is_none());
    assert!(!store.path().exists());
}

/// 保存した値は開き直しても残る
#[test]
fn test_save_and_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("storage.json");

    {
        let store = FileStore::open(&path);
        store.save("userId", "user-123");
    }

    let store = FileStore::open(&path);
    assert_eq!(store.load("userId").as_deref(), Some("user-123"));
}

/// 削除はファイルにも反映される
#[test]
fn test_remove_persists() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let store = FileStore::open(&path);
    store.save("favorites", r#"["E1"]"#);
    store.remove("favorites");

    let reopened = FileStore::open(&path);
    assert!(reopened.load("favorites").is_none());
}

/// 壊れたファイルは無視して空から始める
#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json {").unwrap();

    let store = FileStore::open(&path);
    assert!(store.load("userId").is_none());

    // 次の保存で正しいJSONに置き換わる
    store.save("userId", "fresh");
    let reopened = FileStore::open(&path);
    assert_eq!(reopened.load("userId").as_deref(), Some("fresh"));
}

/// 匿名IDは2回目以降も同じ値
#[test]
fn test_user_id_stable_across_runs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let first = ensure_user_id(&FileStore::open(&path));
    let second = ensure_user_id(&FileStore::open(&path));

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

/// お気に入りの切り替えが次回起動時にも残る
#[test]
fn test_favorites_survive_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    {
        let store = FileStore::open(&path);
        let mut favorites = FavoritesStore::load(&store);
        favorites.toggle("E1");
        favorites.toggle("E2");
        favorites.toggle("E1");
    }

    let store = FileStore::open(&path);
    let favorites = FavoritesStore::load(&store);
    assert!(favorites.is_favorite("E2"));
    assert!(!favorites.is_favorite("E1"));
    assert_eq!(favorites.favorites().ids(), ["E2".to_string()]);
}
