//! 服務層模組
//!
//! 提供對局狀態機、觀測構建、動作遮罩、生涯統計與存檔功能

pub mod action_mask;
pub mod observation;
pub mod persistence;
pub mod state;
pub mod stats;
pub mod summary;

pub use action_mask::{action_mask_from_state, Action, ActionMask};
pub use observation::Observation;
pub use persistence::{FileStore, MemoryStore, PersistenceError, SaveSlots, SnapshotStore};
pub use state::{GameSession, MoveRecord, Phase, PlayMode, SessionState};
pub use stats::{player_title, HighScoreEntry, PlayerTitle, StatsBook};
pub use summary::{GameSummary, JokerCounts, TierCounts};

#[cfg(test)]
mod integration_tests;
