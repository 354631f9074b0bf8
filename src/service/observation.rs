//! Observation 構建
//!
//! 顯示層使用的唯讀視圖：
//! - 分數、buffer、連擊等級與倍數
//! - 連擊狀態文字與命中後的倍數
//! - 剩餘牌數（一般牌 / Joker 分開）
//! - 上一手結果
//! - 選填的即時機率

use serde::{Deserialize, Serialize};

use super::state::{GameSession, Phase};
use crate::game::streak::status_for;
use crate::game::{calculate, Card, Guess, JokerActivation, MatchResult, Probabilities};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub phase: Phase,
    pub turn: u32,
    pub elapsed: u64,

    pub total_score: u64,
    pub buffer: u64,
    pub streak_level: u8,
    pub multiplier: u32,
    pub next_multiplier: u32,
    pub streak_status: String,
    pub shield_active: bool,

    /// 面朝下時不揭露
    pub current_card: Option<Card>,
    pub remaining_regular: usize,
    pub remaining_jokers: usize,
    pub discarded: usize,

    pub last_result: Option<MatchResult>,
    pub last_joker: Option<JokerActivation>,
    pub odds: Option<Probabilities>,
}

impl Observation {
    /// 有傳入猜測時附帶對剩餘牌組的機率
    pub fn from_session(session: &GameSession, odds_guess: Option<Guess>) -> Self {
        let state = session.state();
        let current_card = if state.card_face_up {
            state.current_card
        } else {
            None
        };

        Self {
            phase: state.phase,
            turn: state.turn,
            elapsed: state.elapsed,
            total_score: state.total_score,
            buffer: state.buffer,
            streak_level: state.streak_level,
            multiplier: state.streak_multiplier,
            next_multiplier: session.next_multiplier(),
            streak_status: status_for(state.streak_level as i32).to_string(),
            shield_active: state.shield_active,
            current_card,
            remaining_regular: state.remaining_regular(),
            remaining_jokers: state.remaining_jokers(),
            discarded: state.discard_pile.len(),
            last_result: state.last_result,
            last_joker: state.last_joker.clone(),
            odds: odds_guess.map(|guess| calculate(&guess, &state.deck)),
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================
