//! 遊戲狀態管理
//!
//! `GameSession` 持有唯一可變的對局狀態，只能透過動作方法修改。
//! 違反前置條件的動作一律是靜默 no-op（只記 debug log），呼叫端不需預先檢查。
//!
//! 階段流程：
//! `Init -> Loadout -> Idle <-> (Showing | JokerActivation) -> Idle -> Banking -> Idle -> GameOver`

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::game::joker::{activate_with_bonus, apply_buffer_bonus, check_shield_protection};
use crate::game::streak::{advance, multiplier_with_rules};
use crate::game::{
    apply_multiplier, build_game_deck, resolve_with_rules, Card, DeckMode, Guess,
    JokerActivation, JokerVariant, MatchResult, Rules, MAX_STREAK_LEVEL, MIN_STREAK_LEVEL,
};

use super::summary::{GameSummary, JokerCounts, TierCounts};

/// 對局階段
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Init,
    Loadout,         // 選擇 Joker
    Idle,            // 等待玩家動作
    Showing,         // 一般牌已翻開
    JokerActivation, // Joker 效果觸發中
    Banking,         // buffer 已存入總分
    GameOver,
}

/// 遊戲模式（僅供外部顯示層使用）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    #[default]
    Normal,
    Training,
}

/// 單手紀錄
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub turn: u32,
    pub guess: Guess,
    pub revealed: Card,
    /// 命中時為乘上倍數後的實得分，miss / joker 為 0
    pub result: MatchResult,
    pub buffer_after: u64,
    pub total_after: u64,
    pub multiplier: u32,
}

/// 可序列化的對局快照（不含亂數產生器）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    // 設定
    pub deck_mode: DeckMode,
    pub play_mode: PlayMode,
    pub loadout: Vec<Card>,

    // 牌組（從前端抽牌）
    pub deck: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub current_card: Option<Card>,
    pub card_face_up: bool,

    // 分數
    pub total_score: u64,
    pub buffer: u64,
    pub streak_level: u8,
    pub streak_multiplier: u32,
    pub shield_active: bool,

    // 進度
    pub phase: Phase,
    pub turn: u32,
    pub elapsed: u64,
    pub last_result: Option<MatchResult>,
    pub last_joker: Option<JokerActivation>,
    pub history: Vec<MoveRecord>,

    // 統計（對局結束時匯出）
    pub max_multiplier: u32,
    pub guess_count: u32,
    pub tier_counts: TierCounts,
    pub jokers_activated: JokerCounts,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            deck_mode: DeckMode::Small,
            play_mode: PlayMode::Normal,
            loadout: Vec::new(),
            deck: Vec::new(),
            discard_pile: Vec::new(),
            current_card: None,
            card_face_up: false,
            total_score: 0,
            buffer: 0,
            streak_level: MIN_STREAK_LEVEL,
            streak_multiplier: 1,
            shield_active: false,
            phase: Phase::Init,
            turn: 0,
            elapsed: 0,
            last_result: None,
            last_joker: None,
            history: Vec::new(),
            max_multiplier: 1,
            guess_count: 0,
            tier_counts: TierCounts::default(),
            jokers_activated: JokerCounts::default(),
        }
    }
}

impl SessionState {
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// 剩餘牌組中的一般牌數
    pub fn remaining_regular(&self) -> usize {
        self.deck.iter().filter(|c| !c.is_joker()).count()
    }

    pub fn remaining_jokers(&self) -> usize {
        self.deck.iter().filter(|c| c.is_joker()).count()
    }
}

/// 對局狀態機
pub struct GameSession {
    rng: StdRng,
    rules: Rules,
    state: SessionState,
}

impl GameSession {
    /// 以系統亂數建立
    pub fn new() -> Self {
        Self::from_parts(StdRng::from_entropy(), Rules::default(), SessionState::default())
    }

    /// 以固定種子建立（可重現）
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rules(Rules::default(), seed)
    }

    pub fn with_rules(rules: Rules, seed: u64) -> Self {
        Self::from_parts(StdRng::seed_from_u64(seed), rules, SessionState::default())
    }

    /// 從快照還原；亂數產生器不在快照內，需重新給種子
    pub fn restore(state: SessionState, rules: Rules, seed: u64) -> Self {
        Self::from_parts(StdRng::seed_from_u64(seed), rules, state)
    }

    fn from_parts(rng: StdRng, rules: Rules, mut state: SessionState) -> Self {
        state.streak_level = state.streak_level.clamp(MIN_STREAK_LEVEL, MAX_STREAK_LEVEL);
        state.streak_multiplier = multiplier_with_rules(state.streak_level as i32, &rules);
        Self { rng, rules, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// 目前等級命中後的倍數
    pub fn next_multiplier(&self) -> u32 {
        multiplier_with_rules(advance(self.state.streak_level) as i32, &self.rules)
    }

    // =========================================================================
    // 動作
    // =========================================================================

    /// 重置所有狀態並進入 Joker 選擇
    pub fn setup(&mut self, deck_mode: DeckMode, play_mode: PlayMode) {
        self.state = SessionState {
            deck_mode,
            play_mode,
            phase: Phase::Loadout,
            streak_multiplier: self.level_one_multiplier(),
            max_multiplier: self.level_one_multiplier(),
            ..SessionState::default()
        };
        info!(?deck_mode, ?play_mode, "session set up");
    }

    /// 選擇 Joker、建立牌組並發第一張牌
    ///
    /// Joker 數量超過此模式欄位上限時拒絕，狀態不變並回傳 `false`。
    pub fn choose_loadout(&mut self, jokers: &[JokerVariant]) -> bool {
        if self.state.phase != Phase::Loadout {
            debug!(phase = ?self.state.phase, "choose_loadout ignored: not in loadout phase");
            return false;
        }

        let max_slots = self.rules.joker_slots(self.state.deck_mode);
        if jokers.len() > max_slots {
            warn!(
                requested = jokers.len(),
                max_slots,
                deck_mode = ?self.state.deck_mode,
                "loadout rejected: too many jokers"
            );
            return false;
        }

        let loadout: Vec<Card> = jokers.iter().map(|&v| Card::joker(v)).collect();
        let mut deck = build_game_deck(self.state.deck_mode, &loadout, &mut self.rng);
        // 牌組至少有一般牌，非空
        let first = deck.remove(0);

        self.state.loadout = loadout;
        self.state.deck = deck;
        self.state.current_card = Some(first);
        self.state.card_face_up = false;
        self.state.turn = 1;
        self.state.phase = Phase::Idle;
        info!(jokers = jokers.len(), cards = self.state.deck.len() + 1, "deck built");
        true
    }

    /// 從牌組前端發一張面朝下的牌；牌組為空時結束對局
    pub fn deal(&mut self) {
        match self.state.phase {
            Phase::Init | Phase::Loadout | Phase::GameOver => {
                debug!(phase = ?self.state.phase, "deal ignored");
                return;
            }
            _ => {}
        }
        if self.state.current_card.is_some() {
            debug!("deal ignored: current card must be discarded first");
            return;
        }

        if self.state.deck.is_empty() {
            self.end_game();
            return;
        }

        let next = self.state.deck.remove(0);
        self.state.current_card = Some(next);
        self.state.card_face_up = false;
        self.state.turn += 1;
        self.state.last_result = None;
        self.state.last_joker = None;
        self.state.phase = Phase::Idle;
    }

    /// 提交猜測並結算目前的牌
    pub fn guess(&mut self, guess: Guess) {
        if self.state.phase != Phase::Idle {
            debug!(phase = ?self.state.phase, "guess ignored: not idle");
            return;
        }
        let card = match self.state.current_card {
            Some(card) => card,
            None => {
                debug!("guess ignored: no current card");
                return;
            }
        };

        match card {
            Card::Joker { variant } => self.reveal_joker(guess, card, variant),
            Card::Regular { .. } => self.resolve_regular(guess, card),
        }
    }

    /// Joker：觸發效果，不計分、不影響連擊
    fn reveal_joker(&mut self, guess: Guess, card: Card, variant: JokerVariant) {
        let activation = activate_with_bonus(variant, self.rules.red_joker_bonus);

        if let Some(factor) = activation.effect.buffer_multiplier {
            self.state.buffer = apply_buffer_bonus(self.state.buffer, factor);
        }
        if activation.effect.shield {
            self.state.shield_active = true;
        }
        self.state.jokers_activated.record(variant);

        self.state.history.push(MoveRecord {
            turn: self.state.turn,
            guess,
            revealed: card,
            result: MatchResult::joker(),
            buffer_after: self.state.buffer,
            total_after: self.state.total_score,
            multiplier: self.state.streak_multiplier,
        });
        trace!(?variant, buffer = self.state.buffer, shield = self.state.shield_active, "joker revealed");

        self.state.card_face_up = true;
        self.state.last_joker = Some(activation);
        self.state.last_result = None;
        self.state.phase = Phase::JokerActivation;
    }

    /// 一般牌：命中加分升級，miss 燒 buffer（護盾可擋）並重置連擊
    fn resolve_regular(&mut self, guess: Guess, card: Card) {
        let base = resolve_with_rules(&guess, &card, self.state.deck_mode, &self.rules);

        let shown = if base.is_miss() {
            let shield = check_shield_protection(self.state.shield_active, true);
            if !shield.buffer_protected {
                self.state.buffer = 0;
            }
            self.state.shield_active = shield.shield_remaining;
            self.reset_streak();
            base
        } else {
            let points = apply_multiplier(base.points, self.state.streak_multiplier);
            self.state.buffer = self.state.buffer.saturating_add(points);
            self.state.streak_level = advance(self.state.streak_level);
            self.state.streak_multiplier =
                multiplier_with_rules(self.state.streak_level as i32, &self.rules);
            self.state.shield_active =
                check_shield_protection(self.state.shield_active, false).shield_remaining;
            MatchResult { points, ..base }
        };

        self.state.tier_counts.record(shown.tier);
        self.state.guess_count += 1;
        self.state.max_multiplier = self.state.max_multiplier.max(self.state.streak_multiplier);

        self.state.history.push(MoveRecord {
            turn: self.state.turn,
            guess,
            revealed: card,
            result: shown,
            buffer_after: self.state.buffer,
            total_after: self.state.total_score,
            multiplier: self.state.streak_multiplier,
        });
        trace!(
            turn = self.state.turn,
            tier = shown.tier.label(),
            points = shown.points,
            buffer = self.state.buffer,
            multiplier = self.state.streak_multiplier,
            "guess resolved"
        );

        self.state.card_face_up = true;
        self.state.last_result = Some(shown);
        self.state.last_joker = None;
        self.state.phase = Phase::Showing;
    }

    /// 將 buffer 存入總分；同時重置連擊並放棄未用的護盾
    pub fn bank(&mut self) {
        if self.state.buffer == 0 {
            debug!("bank ignored: empty buffer");
            return;
        }
        if self.state.phase != Phase::Idle {
            debug!(phase = ?self.state.phase, "bank ignored: not idle");
            return;
        }

        self.state.total_score = self.state.total_score.saturating_add(self.state.buffer);
        let banked = self.state.buffer;
        self.state.buffer = 0;
        self.reset_streak();
        self.state.shield_active = false;
        self.state.phase = Phase::Banking;
        info!(banked, total = self.state.total_score, "buffer banked");
    }

    /// 將目前的牌移入棄牌堆，接著發下一張或結束對局
    pub fn discard(&mut self) {
        if self.state.phase == Phase::GameOver {
            debug!("discard ignored: game over");
            return;
        }
        let card = match self.state.current_card.take() {
            Some(card) => card,
            None => {
                debug!("discard ignored: no current card");
                return;
            }
        };

        self.state.discard_pile.push(card);
        self.state.card_face_up = false;

        if self.state.deck.is_empty() {
            self.end_game();
        } else {
            self.deal();
        }
    }

    /// 結束對局：剩餘 buffer 自動存入總分
    pub fn end_game(&mut self) {
        if self.state.phase == Phase::GameOver {
            debug!("end_game ignored: already over");
            return;
        }
        self.state.total_score = self.state.total_score.saturating_add(self.state.buffer);
        self.state.buffer = 0;
        self.state.phase = Phase::GameOver;
        info!(
            total = self.state.total_score,
            turns = self.state.history.len(),
            elapsed = self.state.elapsed,
            "game over"
        );
    }

    /// 計時 +1
    pub fn tick(&mut self) {
        if self.state.phase == Phase::GameOver {
            return;
        }
        self.state.elapsed += 1;
    }

    /// 交給外部統計模組的摘要
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            final_score: self.state.total_score.saturating_add(self.state.buffer),
            elapsed: self.state.elapsed,
            deck_mode: self.state.deck_mode,
            max_multiplier: self.state.max_multiplier,
            guesses: self.state.guess_count,
            tiers: self.state.tier_counts,
            jokers_activated: self.state.jokers_activated,
        }
    }

    fn level_one_multiplier(&self) -> u32 {
        multiplier_with_rules(MIN_STREAK_LEVEL as i32, &self.rules)
    }

    fn reset_streak(&mut self) {
        self.state.streak_level = MIN_STREAK_LEVEL;
        self.state.streak_multiplier = self.level_one_multiplier();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// 單元測試
// ============================================================================
