//! 生涯統計
//!
//! 累積每局摘要：總場數、總得分、最佳紀錄、命中分布、Joker 觸發次數與排行榜。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::summary::{GameSummary, JokerCounts, TierCounts};
use crate::game::{DeckMode, MAX_HIGH_SCORES, PLAYER_TITLE_THRESHOLDS};

/// 排行榜項目
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    pub elapsed: u64,
    pub deck_mode: DeckMode,
    pub max_multiplier: u32,
    pub recorded_at: DateTime<Utc>,
}

/// 生涯統計
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsBook {
    pub games_played: u32,
    pub total_points: u64,
    pub best_score: u64,
    /// 最短完賽時間，尚無紀錄時為 None
    pub fastest_finish: Option<u64>,
    pub best_multiplier: u32,
    pub total_guesses: u64,
    pub tiers: TierCounts,
    pub jokers_activated: JokerCounts,
    pub high_scores: Vec<HighScoreEntry>,
}

impl StatsBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記錄一局結果
    pub fn record(&mut self, summary: &GameSummary, recorded_at: DateTime<Utc>) {
        self.games_played += 1;
        self.total_points = self.total_points.saturating_add(summary.final_score);
        self.best_score = self.best_score.max(summary.final_score);
        self.fastest_finish = Some(match self.fastest_finish {
            Some(best) => best.min(summary.elapsed),
            None => summary.elapsed,
        });
        self.best_multiplier = self.best_multiplier.max(summary.max_multiplier);
        self.total_guesses += summary.guesses as u64;
        self.tiers.merge(&summary.tiers);
        self.jokers_activated.merge(&summary.jokers_activated);

        self.high_scores.push(HighScoreEntry {
            score: summary.final_score,
            elapsed: summary.elapsed,
            deck_mode: summary.deck_mode,
            max_multiplier: summary.max_multiplier,
            recorded_at,
        });
        // 穩定排序：同分時先到者在前
        self.high_scores.sort_by(|a, b| b.score.cmp(&a.score));
        self.high_scores.truncate(MAX_HIGH_SCORES);
    }

    pub fn record_now(&mut self, summary: &GameSummary) {
        self.record(summary, Utc::now());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 命中率（0..=1），尚未猜過時為 0
    pub fn accuracy(&self) -> f64 {
        let total = self.tiers.total();
        if total == 0 {
            return 0.0;
        }
        self.tiers.hits() as f64 / total as f64
    }

    pub fn title(&self) -> PlayerTitle {
        player_title(self.total_points)
    }
}

/// 玩家稱號
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerTitle {
    pub rank: &'static str,
    pub name: &'static str,
    pub min_points: u64,
}

/// 取不超過累積分數的最高門檻
pub fn player_title(total_points: u64) -> PlayerTitle {
    let (min_points, rank, name) = PLAYER_TITLE_THRESHOLDS
        .iter()
        .rev()
        .find(|(min, _, _)| *min <= total_points)
        .copied()
        .unwrap_or(PLAYER_TITLE_THRESHOLDS[0]);
    PlayerTitle {
        rank,
        name,
        min_points,
    }
}

// ============================================================================
// 單元測試
// ============================================================================
