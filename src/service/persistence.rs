//! 存檔轉接層
//!
//! 以 key-value 方式保存對局快照與生涯統計。
//! 引擎只產生 / 接收可序列化的快照，實際存放位置由 `SnapshotStore` 決定。

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::state::SessionState;
use super::stats::StatsBook;

pub const GAME_KEY: &str = "game";
pub const STATS_KEY: &str = "stats";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value 儲存
pub trait SnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// 記憶體儲存（測試與模擬器用）
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// 檔案儲存：每個 key 一個 `<key>.json`
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// 目錄不存在時建立
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key);
        debug!(path = %path.display(), bytes = value.len(), "writing snapshot");
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 存檔欄位：對局快照在 `game`，生涯統計在 `stats`
#[derive(Debug)]
pub struct SaveSlots<S> {
    store: S,
}

impl<S: SnapshotStore> SaveSlots<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn save_game(&mut self, state: &SessionState) -> Result<(), PersistenceError> {
        self.write(GAME_KEY, state)
    }

    pub fn load_game(&self) -> Result<Option<SessionState>, PersistenceError> {
        self.read(GAME_KEY)
    }

    pub fn clear_game(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(GAME_KEY)
    }

    pub fn save_stats(&mut self, stats: &StatsBook) -> Result<(), PersistenceError> {
        self.write(STATS_KEY, stats)
    }

    /// 沒有存檔時回傳空的統計
    pub fn load_stats(&self) -> Result<StatsBook, PersistenceError> {
        Ok(self.read(STATS_KEY)?.unwrap_or_default())
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        match self.store.get(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================
