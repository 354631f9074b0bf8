//! 命中等級定義

use serde::{Deserialize, Serialize};

/// 命中等級（依優先序由高到低，互斥）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    #[serde(rename = "exact")]
    Exact,      // 點數 + 花色
    #[serde(rename = "rank+color")]
    RankColor,  // 點數 + 同色（不同花色）
    #[serde(rename = "rank")]
    Rank,
    #[serde(rename = "suit")]
    Suit,
    #[serde(rename = "color")]
    Color,
    #[serde(rename = "miss")]
    Miss,
    #[serde(rename = "joker")]
    Joker,      // 翻到 Joker，由 Joker 系統處理
}

impl MatchTier {
    /// 命中等級索引（用於統計）
    pub fn to_index(&self) -> usize {
        match self {
            MatchTier::Exact => 0,
            MatchTier::RankColor => 1,
            MatchTier::Rank => 2,
            MatchTier::Suit => 3,
            MatchTier::Color => 4,
            MatchTier::Miss => 5,
            MatchTier::Joker => 6,
        }
    }

    /// 是否為得分命中（非 miss、非 joker）
    pub fn is_hit(&self) -> bool {
        !matches!(self, MatchTier::Miss | MatchTier::Joker)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::RankColor => "rank+color",
            MatchTier::Rank => "rank",
            MatchTier::Suit => "suit",
            MatchTier::Color => "color",
            MatchTier::Miss => "miss",
            MatchTier::Joker => "joker",
        }
    }
}

/// 單次判定結果
///
/// `points` 在 resolver 輸出時為基礎分；記入歷史時為乘上倍數後的實得分。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub points: u64,
    pub tier: MatchTier,
    pub is_exact: bool,
}

impl MatchResult {
    pub fn new(tier: MatchTier, points: u64) -> Self {
        Self {
            points,
            tier,
            is_exact: tier == MatchTier::Exact,
        }
    }

    pub fn joker() -> Self {
        Self::new(MatchTier::Joker, 0)
    }

    pub fn is_miss(&self) -> bool {
        self.tier == MatchTier::Miss
    }
}

// ============================================================================
// 單元測試
// ============================================================================
