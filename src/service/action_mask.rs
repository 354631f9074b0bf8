//! Action Mask 構建
//!
//! 回報目前狀態下哪些動作會真正生效（不是 no-op），
//! 讓顯示層可以停用按鈕而不必重複前置條件邏輯。

use serde::{Deserialize, Serialize};

use super::state::{GameSession, Phase, SessionState};

/// 對局動作
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ChooseLoadout,
    Deal,
    Guess,
    Bank,
    Discard,
    EndGame,
    Tick,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[
            Action::ChooseLoadout,
            Action::Deal,
            Action::Guess,
            Action::Bank,
            Action::Discard,
            Action::EndGame,
            Action::Tick,
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMask {
    pub choose_loadout: bool,
    pub deal: bool,
    pub guess: bool,
    pub bank: bool,
    pub discard: bool,
    pub end_game: bool,
    pub tick: bool,
}

impl ActionMask {
    pub fn from_session(session: &GameSession) -> Self {
        action_mask_from_state(session.state())
    }

    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::ChooseLoadout => self.choose_loadout,
            Action::Deal => self.deal,
            Action::Guess => self.guess,
            Action::Bank => self.bank,
            Action::Discard => self.discard,
            Action::EndGame => self.end_game,
            Action::Tick => self.tick,
        }
    }

    /// 目前可用的動作列表
    pub fn allowed(&self) -> Vec<Action> {
        Action::all().iter().copied().filter(|&a| self.allows(a)).collect()
    }
}

/// 從對局狀態構建 action mask
///
/// `choose_loadout` 只看階段；Joker 數量是否超過上限取決於呼叫時的參數。
pub fn action_mask_from_state(state: &SessionState) -> ActionMask {
    if state.phase == Phase::GameOver {
        return ActionMask::default();
    }

    let idle = state.phase == Phase::Idle;
    let has_card = state.current_card.is_some();
    let in_play = !matches!(state.phase, Phase::Init | Phase::Loadout);

    ActionMask {
        choose_loadout: state.phase == Phase::Loadout,
        deal: in_play && !has_card,
        guess: idle && has_card,
        bank: idle && state.buffer > 0,
        discard: has_card,
        end_game: true,
        tick: true,
    }
}

// ============================================================================
// 單元測試
// ============================================================================
