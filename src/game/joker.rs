//! Joker 系統
//!
//! 翻到 Joker 時觸發一次性效果，不計分、不中斷連擊：
//! - Red: buffer ×1.3（向下取整）
//! - Black: 啟動護盾，抵擋下一次 miss 的 buffer 燒毀
//! - Green: 保留，無效果
//!
//! 新增變體時先加到 `JokerVariant`，再補上這裡的 `match` 分支。

use serde::{Deserialize, Serialize};

use super::cards::JokerVariant;
use super::constants::RED_JOKER_MULTIPLIER;

/// Joker 效果
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JokerEffect {
    pub buffer_multiplier: Option<f64>,
    pub shield: bool,
}

/// Joker 觸發結果
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JokerActivation {
    pub variant: JokerVariant,
    pub description: String,
    pub effect: JokerEffect,
}

/// 使用預設加成觸發
pub fn activate(variant: JokerVariant) -> JokerActivation {
    activate_with_bonus(variant, RED_JOKER_MULTIPLIER)
}

/// 使用指定的 Red Joker 加成觸發
pub fn activate_with_bonus(variant: JokerVariant, red_bonus: f64) -> JokerActivation {
    let (description, effect) = match variant {
        JokerVariant::Red => (
            format!("Buffer boosted by {:.0}%!", (red_bonus - 1.0) * 100.0),
            JokerEffect {
                buffer_multiplier: Some(red_bonus),
                shield: false,
            },
        ),
        JokerVariant::Black => (
            "Shield up! Your next miss will not burn the buffer".to_string(),
            JokerEffect {
                buffer_multiplier: None,
                shield: true,
            },
        ),
        JokerVariant::Green => ("Ability coming soon".to_string(), JokerEffect::default()),
    };

    JokerActivation {
        variant,
        description,
        effect,
    }
}

/// buffer × 加成，向下取整；超出範圍時封頂於 `u64::MAX`
pub fn apply_buffer_bonus(buffer: u64, factor: f64) -> u64 {
    (buffer as f64 * factor).floor() as u64
}

/// 預設 Red Joker 加成
pub fn apply_red_joker_bonus(buffer: u64) -> u64 {
    apply_buffer_bonus(buffer, RED_JOKER_MULTIPLIER)
}

/// 護盾判定結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShieldCheck {
    pub buffer_protected: bool,
    pub shield_remaining: bool,
}

/// 護盾只擋一次 miss；命中時保留，不影響連擊重置
pub fn check_shield_protection(shield_active: bool, is_miss: bool) -> ShieldCheck {
    match (shield_active, is_miss) {
        (false, _) => ShieldCheck {
            buffer_protected: false,
            shield_remaining: false,
        },
        (true, false) => ShieldCheck {
            buffer_protected: false,
            shield_remaining: true,
        },
        (true, true) => ShieldCheck {
            buffer_protected: true,
            shield_remaining: false,
        },
    }
}

// ============================================================================
// 單元測試
// ============================================================================
