//! 遊戲核心模組
//!
//! 純規則層，不持有狀態：
//! - `constants`: 遊戲常量
//! - `cards`: 卡牌、花色、點數、牌組模式
//! - `decks`: 建牌、洗牌、混入 Joker
//! - `match_types`: 命中等級定義
//! - `scoring`: 命中判定與計分
//! - `streak`: 連擊倍數
//! - `joker`: Joker 效果與護盾判定
//! - `probability`: 即時機率
//! - `rules`: 可注入的平衡數值表

pub mod constants;
pub mod cards;
pub mod decks;
pub mod match_types;
pub mod scoring;
pub mod streak;
pub mod joker;
pub mod probability;
pub mod rules;

pub use constants::*;
pub use cards::{Card, Color, DeckMode, Guess, JokerVariant, Rank, Suit};
pub use decks::{build_game_deck, build_regular_cards, mix_in_jokers, shuffle};
pub use match_types::{MatchResult, MatchTier};
pub use scoring::{apply_multiplier, classify, resolve, resolve_with_rules};
pub use joker::{
    activate, apply_red_joker_bonus, check_shield_protection, JokerActivation, JokerEffect,
    ShieldCheck,
};
pub use probability::{calculate, format_probability, Probabilities};
pub use rules::{PointTable, Rules, RulesError};
