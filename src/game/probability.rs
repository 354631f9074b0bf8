//! 即時機率計算
//!
//! 對剩餘牌組中的一般牌計算四種命中機率。Joker 對玩家不可見，不計入。
//! 四個機率是獨立計數，不是互斥的等級。

use serde::{Deserialize, Serialize};

use super::cards::{Card, Guess};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    pub exact_card: f64,
    pub rank: f64,
    pub suit: f64,
    pub color: f64,
}

pub fn calculate(guess: &Guess, remaining: &[Card]) -> Probabilities {
    let mut total = 0usize;
    let mut exact = 0usize;
    let mut rank = 0usize;
    let mut suit = 0usize;
    let mut color = 0usize;

    let guess_color = guess.suit.color();
    for (card_rank, card_suit) in remaining.iter().filter_map(Card::as_regular) {
        total += 1;
        if card_rank == guess.rank && card_suit == guess.suit {
            exact += 1;
        }
        if card_rank == guess.rank {
            rank += 1;
        }
        if card_suit == guess.suit {
            suit += 1;
        }
        if card_suit.color() == guess_color {
            color += 1;
        }
    }

    if total == 0 {
        return Probabilities::default();
    }

    let total = total as f64;
    Probabilities {
        exact_card: exact as f64 / total,
        rank: rank as f64 / total,
        suit: suit as f64 / total,
        color: color as f64 / total,
    }
}

/// 顯示用百分比，固定一位小數，例如 `2.8%`
pub fn format_probability(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

// ============================================================================
// 單元測試
// ============================================================================
