//! お気に入り
//!
//! サーバーとは無関係にローカルに保存するIDの集合。
//! カタログから消えたIDも削除せずにそのまま残す。

use crate::storage::{KeyValueStore, FAVORITES_KEY};

/// お気に入りIDの集合（追加順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID列から生成（重複は最初の1件のみ残す）
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut favorites = Self::new();
        for id in ids {
            let id = id.into();
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// 登録状態を反転し、反転後に登録されているかを返す
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(index) = self.ids.iter().position(|fav| fav == id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// 保存済みのお気に入りを読み込む
///
/// 値が壊れている場合は警告を出して空から始める
pub fn load_favorites<S: KeyValueStore + ?Sized>(store: &S) -> Favorites {
    let Some(raw) = store.load(FAVORITES_KEY) else {
        return Favorites::new();
    };

    match serde_json::from_str::<Option<Vec<String>>>(&raw) {
        Ok(ids) => Favorites::from_ids(ids.unwrap_or_default()),
        Err(e) => {
            tracing::warn!("stored favorites are corrupt, starting empty: {}", e);
            Favorites::new()
        }
    }
}

/// お気に入りを保存（空ならキーごと削除）
pub fn save_favorites<S: KeyValueStore + ?Sized>(store: &S, favorites: &Favorites) {
    if favorites.is_empty() {
        store.remove(FAVORITES_KEY);
        return;
    }

    match serde_json::to_string(favorites.ids()) {
        Ok(json) => store.save(FAVORITES_KEY, &json),
        Err(e) => tracing::error!("failed to serialize favorites: {}", e),
    }
}

/// 変更のたびに即時保存するお気に入りストア
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    favorites: Favorites,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn load(store: S) -> Self {
        let favorites = load_favorites(&store);
        Self { store, favorites }
    }

    pub fn toggle(&mut self, id: &str) {
        let now_favorite = self.favorites.toggle(id);
        tracing::debug!("favorite {} -> {}", id, now_favorite);
        save_favorites(&self.store, &self.favorites);
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// 全削除。呼び出し側でユーザーの確認を取ってから呼ぶこと
    pub fn clear(&mut self) {
        self.favorites.clear();
        save_favorites(&self.store, &self.favorites);
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_twice_restores() {
        let mut favorites = Favorites::from_ids(["A", "B"]);
        let original = favorites.clone();

        assert!(favorites.toggle("C"));
        assert!(!favorites.toggle("C"));
        assert_eq!(favorites, original);

        assert!(!favorites.toggle("A"));
        assert!(favorites.toggle("A"));
        assert!(favorites.contains("A"));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_from_ids_dedupes() {
        let favorites = Favorites::from_ids(["A", "B", "A"]);
        assert_eq!(favorites.ids(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_store_persists_on_toggle() {
        let backing = MemoryStore::new();
        let mut store = FavoritesStore::load(&backing);

        store.toggle("O-01-04");
        assert!(store.is_favorite("O-01-04"));
        assert_eq!(backing.load(FAVORITES_KEY).as_deref(), Some(r#"["O-01-04"]"#));

        let reloaded = FavoritesStore::load(&backing);
        assert!(reloaded.is_favorite("O-01-04"));
    }

    #[test]
    fn test_store_clear_removes_key() {
        let backing = MemoryStore::new();
        let mut store = FavoritesStore::load(&backing);
        store.toggle("A");
        store.toggle("B");

        store.clear();
        assert!(store.favorites().is_empty());
        assert_eq!(backing.load(FAVORITES_KEY), None);
    }

    #[test]
    fn test_load_corrupt_value() {
        let backing = MemoryStore::new();
        backing.save(FAVORITES_KEY, "not json");

        let store = FavoritesStore::load(&backing);
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_load_null_value() {
        let backing = MemoryStore::new();
        backing.save(FAVORITES_KEY, "null");

        assert!(load_favorites(&backing).is_empty());
    }

    #[test]
    fn test_stale_ids_are_kept() {
        let backing = MemoryStore::new();
        backing.save(FAVORITES_KEY, r#"["GONE-01", "A"]"#);

        let store = FavoritesStore::load(&backing);
        assert!(store.is_favorite("GONE-01"));
        assert_eq!(store.favorites().len(), 2);
    }
}
