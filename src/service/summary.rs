//! 對局統計摘要
//!
//! 對局結束時交給外部統計模組的資料；引擎本身不保存跨局紀錄。

use serde::{Deserialize, Serialize};

use crate::game::{DeckMode, JokerVariant, MatchTier};

/// 各命中等級的次數
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub exact: u32,
    pub rank_color: u32,
    pub rank: u32,
    pub suit: u32,
    pub color: u32,
    pub miss: u32,
}

impl TierCounts {
    /// Joker 不屬於猜測等級，忽略
    pub fn record(&mut self, tier: MatchTier) {
        match tier {
            MatchTier::Exact => self.exact += 1,
            MatchTier::RankColor => self.rank_color += 1,
            MatchTier::Rank => self.rank += 1,
            MatchTier::Suit => self.suit += 1,
            MatchTier::Color => self.color += 1,
            MatchTier::Miss => self.miss += 1,
            MatchTier::Joker => {}
        }
    }

    pub fn hits(&self) -> u32 {
        self.exact + self.rank_color + self.rank + self.suit + self.color
    }

    pub fn total(&self) -> u32 {
        self.hits() + self.miss
    }

    pub fn merge(&mut self, other: &TierCounts) {
        self.exact += other.exact;
        self.rank_color += other.rank_color;
        self.rank += other.rank;
        self.suit += other.suit;
        self.color += other.color;
        self.miss += other.miss;
    }
}

/// 各 Joker 變體的觸發次數
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokerCounts {
    pub red: u32,
    pub black: u32,
    pub green: u32,
}

impl JokerCounts {
    pub fn record(&mut self, variant: JokerVariant) {
        match variant {
            JokerVariant::Red => self.red += 1,
            JokerVariant::Black => self.black += 1,
            JokerVariant::Green => self.green += 1,
        }
    }

    pub fn get(&self, variant: JokerVariant) -> u32 {
        match variant {
            JokerVariant::Red => self.red,
            JokerVariant::Black => self.black,
            JokerVariant::Green => self.green,
        }
    }

    pub fn total(&self) -> u32 {
        self.red + self.black + self.green
    }

    pub fn merge(&mut self, other: &JokerCounts) {
        self.red += other.red;
        self.black += other.black;
        self.green += other.green;
    }
}

/// 單局結果
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub final_score: u64,
    pub elapsed: u64,
    pub deck_mode: DeckMode,
    pub max_multiplier: u32,
    pub guesses: u32,
    pub tiers: TierCounts,
    pub jokers_activated: JokerCounts,
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_counts() {
        let mut counts = TierCounts::default();
        for tier in [MatchTier::Exact, MatchTier::Rank, MatchTier::Miss, MatchTier::Joker] {
            counts.record(tier);
        }
        assert_eq!(counts.exact, 1);
        assert_eq!(counts.rank, 1);
        assert_eq!(counts.miss, 1);
        assert_eq!(counts.hits(), 2);
        assert_eq!(counts.total(), 3);

        let mut merged = TierCounts::default();
        merged.merge(&counts);
        merged.merge(&counts);
        assert_eq!(merged.total(), 6);
    }

    #[test]
    fn test_joker_counts() {
        let mut counts = JokerCounts::default();
        counts.record(JokerVariant::Red);
        counts.record(JokerVariant::Red);
        counts.record(JokerVariant::Green);
        assert_eq!(counts.get(JokerVariant::Red), 2);
        assert_eq!(counts.get(JokerVariant::Black), 0);
        assert_eq!(counts.total(), 3);
    }
}
