//! 牌組建構
//!
//! 依牌組模式建立一般牌，混入 Joker 並洗牌。
//! 所有函數都回傳新的 `Vec`，不修改輸入。

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards::{Card, DeckMode, Suit};

/// 建立模式內所有 (花色, 點數) 組合
///
/// 順序固定為花色優先、點數其次，洗牌前的順序對呼叫端無意義。
pub fn build_regular_cards(mode: DeckMode) -> Vec<Card> {
    let ranks = mode.ranks();
    let mut cards = Vec::with_capacity(Suit::all().len() * ranks.len());
    for &suit in Suit::all() {
        for &rank in ranks {
            cards.push(Card::regular(rank, suit));
        }
    }
    cards
}

/// 均勻隨機排列（Fisher-Yates）
pub fn shuffle<T: Clone, R: Rng + ?Sized>(cards: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// 一般牌 + Joker 合併後洗牌
pub fn mix_in_jokers<R: Rng + ?Sized>(regular: &[Card], loadout: &[Card], rng: &mut R) -> Vec<Card> {
    let mut full = Vec::with_capacity(regular.len() + loadout.len());
    full.extend_from_slice(regular);
    full.extend_from_slice(loadout);
    shuffle(&full, rng)
}

/// 開局用的完整牌組
pub fn build_game_deck<R: Rng + ?Sized>(mode: DeckMode, loadout: &[Card], rng: &mut R) -> Vec<Card> {
    let regular = build_regular_cards(mode);
    mix_in_jokers(&regular, loadout, rng)
}

// ============================================================================
// 單元測試
// ============================================================================
