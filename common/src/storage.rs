//! ローカル永続化のキー・バリューストア
//!
//! ブラウザはlocalStorage、CLIはJSONファイルで実装する。
//! 書き込み失敗は実装側でログに残し、呼び出し側には返さない。

use std::cell::RefCell;
use std::collections::HashMap;

/// 匿名ユーザーIDのキー
pub const USER_ID_KEY: &str = "userId";

/// お気に入りID配列（JSON）のキー
pub const FAVORITES_KEY: &str = "favorites";

/// 文字列のキー・バリューストア
pub trait KeyValueStore {
    /// 値を読み込む。無ければNone
    fn load(&self, key: &str) -> Option<String>;

    /// 値を保存する
    fn save(&self, key: &str, value: &str);

    /// 値を削除する
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// メモリ上のストア（テスト・一時利用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
