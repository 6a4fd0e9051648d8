//! 匿名ユーザーID
//!
//! 初回にUUID v4を生成して保存し、以降は保存済みの値を返す。

use crate::storage::{KeyValueStore, USER_ID_KEY};

/// 匿名ユーザーIDを取得（無ければ生成して保存）
pub fn ensure_user_id<S: KeyValueStore + ?Sized>(store: &S) -> String {
    if let Some(id) = store.load(USER_ID_KEY).filter(|id| !id.trim().is_empty()) {
        return id;
    }

    let id = uuid::Uuid::new_v4().to_string();
    store.save(USER_ID_KEY, &id);
    tracing::debug!("generated anonymous user id {}", id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_generates_and_persists() {
        let store = MemoryStore::new();
        let id = ensure_user_id(&store);

        assert_eq!(id.len(), 36);
        assert_eq!(store.load(USER_ID_KEY).as_deref(), Some(id.as_str()));
    }

    #[test]
    fn test_returns_existing_unchanged() {
        let store = MemoryStore::new();
        store.save(USER_ID_KEY, "existing-user");

        assert_eq!(ensure_user_id(&store), "existing-user");
        assert_eq!(ensure_user_id(&store), "existing-user");
    }

    #[test]
    fn test_stable_across_calls() {
        let store = MemoryStore::new();
        let first = ensure_user_id(&store);
        let second = ensure_user_id(&store);
        assert_eq!(first, second);
    }
}
