//! JSONファイルによるキー・バリューストア
//!
//! ブラウザのlocalStorageの代わり。全体を1つのJSONオブジェクトとして保存する。

use abno_catalog_common::KeyValueStore;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
    cache: RefCell<HashMap<String, String>>,
}

impl FileStore {
    /// ファイルを開く（無い・壊れている場合は空から始める）
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let cache = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("ストアファイルのパースに失敗: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("ストアファイルの読み込みに失敗: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("ストア: {}", path.display());

        Self {
            path,
            cache: RefCell::new(cache),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("ストアディレクトリの作成に失敗: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(&*self.cache.borrow()) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.path, data) {
                    tracing::error!("ストアファイルの書き込みに失敗: {}", e);
                }
            }
            Err(e) => tracing::error!("ストアのシリアライズに失敗: {}", e),
        }
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.cache.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.cache
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&self, key: &str) {
        let removed = self.cache.borrow_mut().remove(key).is_some();
        if removed {
            self.persist();
        }
    }
}
