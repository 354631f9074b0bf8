//! 卡牌、花色、點數與牌組模式定義

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{LARGE_JOKER_SLOTS, SMALL_JOKER_SLOTS};

/// 花色
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// 所有花色（建牌順序）
    pub fn all() -> &'static [Suit] {
        &[Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
    }

    /// 紅心/方塊為紅色，黑桃/梅花為黑色
    pub fn color(&self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// 花色顏色
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

/// 點數（2 最小，A 最大）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// 全部 13 種點數
    pub fn all() -> &'static [Rank] {
        &[
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// Joker 變體
///
/// 新增變體時，所有 `match` 都會在編譯期報錯，必須逐一處理。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JokerVariant {
    Red,   // buffer ×1.3
    Black, // 護盾：抵擋下一次 miss
    Green, // 保留，無效果
}

impl JokerVariant {
    pub fn all() -> &'static [JokerVariant] {
        &[JokerVariant::Red, JokerVariant::Black, JokerVariant::Green]
    }
}

/// 卡牌：一般牌或 Joker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Card {
    Regular { suit: Suit, rank: Rank },
    Joker { variant: JokerVariant },
}

impl Card {
    pub fn regular(rank: Rank, suit: Suit) -> Self {
        Card::Regular { suit, rank }
    }

    pub fn joker(variant: JokerVariant) -> Self {
        Card::Joker { variant }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker { .. })
    }

    /// 一般牌的 (點數, 花色)，Joker 回傳 None
    pub fn as_regular(&self) -> Option<(Rank, Suit)> {
        match *self {
            Card::Regular { suit, rank } => Some((rank, suit)),
            Card::Joker { .. } => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Regular { suit, rank } => write!(f, "{}{}", rank.label(), suit.symbol()),
            Card::Joker { variant } => write!(f, "{:?} Joker", variant),
        }
    }
}

/// 玩家猜測（永遠不是 Joker）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    pub rank: Rank,
    pub suit: Suit,
}

impl Guess {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

/// 牌組模式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckMode {
    /// 36 張：6..A
    #[default]
    Small,
    /// 52 張：2..A
    Large,
}

impl DeckMode {
    /// 此模式使用的點數集合
    pub fn ranks(&self) -> &'static [Rank] {
        match self {
            DeckMode::Small => &Rank::all()[4..],
            DeckMode::Large => Rank::all(),
        }
    }

    /// 一般牌張數
    pub fn card_count(&self) -> usize {
        self.ranks().len() * Suit::all().len()
    }

    /// 預設 Joker 欄位上限
    pub fn max_joker_slots(&self) -> usize {
        match self {
            DeckMode::Small => SMALL_JOKER_SLOTS,
            DeckMode::Large => LARGE_JOKER_SLOTS,
        }
    }

    /// 此模式是否可以使用該點數
    pub fn allows_rank(&self, rank: Rank) -> bool {
        self.ranks().contains(&rank)
    }
}

// ============================================================================
// 單元測試
// ============================================================================
