//! localStorageによるキー・バリューストア
//!
//! localStorageが使えない環境（プライベートモード等）では何も保存しない。

use abno_catalog_common::KeyValueStore;
use web_sys::Storage;

#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Option<Storage> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        tracing::warn!("localStorage is not available");
    }
    storage
}

impl KeyValueStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("failed to write {}: {:?}", key, e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("failed to remove {}: {:?}", key, e);
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use abno_catalog_common::{ensure_user_id, FavoritesStore};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_user_id_persists_in_local_storage() {
        BrowserStore.remove("userId");

        let first = ensure_user_id(&BrowserStore);
        let second = ensure_user_id(&BrowserStore);

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(BrowserStore.load("userId"), Some(first));
    }

    #[wasm_bindgen_test]
    fn test_favorites_round_trip() {
        BrowserStore.remove("favorites");

        let mut favorites = FavoritesStore::load(BrowserStore);
        favorites.toggle("E1");
        assert_eq!(BrowserStore.load("favorites").as_deref(), Some(r#"["E1"]"#));

        favorites.toggle("E1");
        assert!(BrowserStore.load("favorites").is_none());
    }
}
