//! 平衡數值表
//!
//! 計分表、連擊倍數、Joker 加成與欄位上限皆為可注入資料。
//! 預設值取自 `constants`；JSON 文件只需列出要覆寫的欄位。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cards::DeckMode;
use super::constants::{
    LARGE_JOKER_SLOTS, MAX_STREAK_LEVEL, RED_JOKER_MULTIPLIER, SMALL_JOKER_SLOTS,
    STREAK_MULTIPLIERS,
};
use super::match_types::MatchTier;

/// 單一牌組模式的基礎分數表
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTable {
    pub exact: u32,
    pub rank_color: u32,
    pub rank: u32,
    pub suit: u32,
    pub color: u32,
}

impl PointTable {
    /// 36 張模式
    pub const SMALL: PointTable = PointTable {
        exact: 250,
        rank_color: 100,
        rank: 50,
        suit: 25,
        color: 10,
    };

    /// 52 張模式
    pub const LARGE: PointTable = PointTable {
        exact: 500,
        rank_color: 150,
        rank: 75,
        suit: 25,
        color: 10,
    };

    /// miss / joker 固定 0 分
    pub fn points_for(&self, tier: MatchTier) -> u32 {
        match tier {
            MatchTier::Exact => self.exact,
            MatchTier::RankColor => self.rank_color,
            MatchTier::Rank => self.rank,
            MatchTier::Suit => self.suit,
            MatchTier::Color => self.color,
            MatchTier::Miss | MatchTier::Joker => 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid rules document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("streak multiplier at level {level} must be at least 1")]
    ZeroMultiplier { level: usize },

    #[error("streak multipliers must not decrease (level {level})")]
    DecreasingMultiplier { level: usize },

    #[error("red joker bonus must be a finite factor >= 1.0, got {0}")]
    InvalidBonus(f64),
}

/// 全部平衡數值
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub small_points: PointTable,
    pub large_points: PointTable,
    pub streak_multipliers: [u32; MAX_STREAK_LEVEL as usize],
    pub red_joker_bonus: f64,
    pub small_joker_slots: usize,
    pub large_joker_slots: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            small_points: PointTable::SMALL,
            large_points: PointTable::LARGE,
            streak_multipliers: STREAK_MULTIPLIERS,
            red_joker_bonus: RED_JOKER_MULTIPLIER,
            small_joker_slots: SMALL_JOKER_SLOTS,
            large_joker_slots: LARGE_JOKER_SLOTS,
        }
    }
}

impl Rules {
    /// 解析並驗證 JSON 規則文件
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        for (idx, &mult) in self.streak_multipliers.iter().enumerate() {
            let level = idx + 1;
            if mult == 0 {
                return Err(RulesError::ZeroMultiplier { level });
            }
            if idx > 0 && mult < self.streak_multipliers[idx - 1] {
                return Err(RulesError::DecreasingMultiplier { level });
            }
        }
        if !self.red_joker_bonus.is_finite() || self.red_joker_bonus < 1.0 {
            return Err(RulesError::InvalidBonus(self.red_joker_bonus));
        }
        Ok(())
    }

    pub fn points(&self, mode: DeckMode) -> &PointTable {
        match mode {
            DeckMode::Small => &self.small_points,
            DeckMode::Large => &self.large_points,
        }
    }

    pub fn joker_slots(&self, mode: DeckMode) -> usize {
        match mode {
            DeckMode::Small => self.small_joker_slots,
            DeckMode::Large => self.large_joker_slots,
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let rules = Rules::default();
        assert_eq!(rules.points(DeckMode::Small).points_for(MatchTier::Exact), 250);
        assert_eq!(rules.points(DeckMode::Large).points_for(MatchTier::RankColor), 150);
        assert_eq!(rules.points(DeckMode::Large).points_for(MatchTier::Miss), 0);
        assert_eq!(rules.points(DeckMode::Small).points_for(MatchTier::Joker), 0);
        assert_eq!(rules.joker_slots(DeckMode::Small), 1);
        assert_eq!(rules.joker_slots(DeckMode::Large), 2);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let rules = Rules::from_json(r#"{"red_joker_bonus": 1.5, "small_joker_slots": 3}"#).unwrap();
        assert_eq!(rules.red_joker_bonus, 1.5);
        assert_eq!(rules.small_joker_slots, 3);
        assert_eq!(rules.large_points, PointTable::LARGE);
        assert_eq!(rules.streak_multipliers, STREAK_MULTIPLIERS);
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(Rules::from_json("{ not json"), Err(RulesError::Parse(_))));

        let zero = r#"{"streak_multipliers": [0,2,4,8,15,25,40,60,80,120]}"#;
        assert!(matches!(
            Rules::from_json(zero),
            Err(RulesError::ZeroMultiplier { level: 1 })
        ));

        let falling = r#"{"streak_multipliers": [1,2,4,8,15,25,40,30,80,120]}"#;
        assert!(matches!(
            Rules::from_json(falling),
            Err(RulesError::DecreasingMultiplier { level: 8 })
        ));

        assert!(matches!(
            Rules::from_json(r#"{"red_joker_bonus": 0.5}"#),
            Err(RulesError::InvalidBonus(_))
        ));
    }
}
