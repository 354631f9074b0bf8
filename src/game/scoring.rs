//! 計分引擎
//!
//! 將猜測與翻開的牌比對，依優先序判定命中等級並查表取得基礎分：
//! exact > rank+color > rank > suit > color > miss。
//! 同點數同花色必為 exact，因此 rank+color 只會出現在花色不同時。

use super::cards::{Card, DeckMode, Guess};
use super::match_types::{MatchResult, MatchTier};
use super::rules::Rules;

/// 判定命中等級（不查分數）
pub fn classify(guess: &Guess, revealed: &Card) -> MatchTier {
    let (rank, suit) = match revealed.as_regular() {
        Some(regular) => regular,
        None => return MatchTier::Joker,
    };

    let rank_match = guess.rank == rank;
    let suit_match = guess.suit == suit;
    let color_match = guess.suit.color() == suit.color();

    if rank_match && suit_match {
        MatchTier::Exact
    } else if rank_match && color_match {
        MatchTier::RankColor
    } else if rank_match {
        MatchTier::Rank
    } else if suit_match {
        MatchTier::Suit
    } else if color_match {
        MatchTier::Color
    } else {
        MatchTier::Miss
    }
}

/// 使用預設數值表判定
pub fn resolve(guess: &Guess, revealed: &Card, mode: DeckMode) -> MatchResult {
    resolve_with_rules(guess, revealed, mode, &Rules::default())
}

/// 使用指定數值表判定
pub fn resolve_with_rules(guess: &Guess, revealed: &Card, mode: DeckMode, rules: &Rules) -> MatchResult {
    let tier = classify(guess, revealed);
    let points = rules.points(mode).points_for(tier) as u64;
    MatchResult::new(tier, points)
}

/// 基礎分 × 連擊倍數（整數，無小數分，溢位時封頂）
pub fn apply_multiplier(base_points: u64, multiplier: u32) -> u64 {
    base_points.saturating_mul(multiplier as u64)
}

// ============================================================================
// 單元測試
// ============================================================================
