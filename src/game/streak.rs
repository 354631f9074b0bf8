//! 連擊系統
//!
//! 等級 1..=10，每次命中 +1（封頂），miss 或存分時歸 1。
//! 查表前一律先夾住等級，超出範圍的輸入不會出錯。

use super::constants::{MAX_STREAK_LEVEL, MIN_STREAK_LEVEL, STREAK_STATUS_LABELS};
use super::rules::Rules;

fn clamp_level(level: i32) -> usize {
    level.clamp(MIN_STREAK_LEVEL as i32, MAX_STREAK_LEVEL as i32) as usize
}

/// 預設倍數表
pub fn multiplier_for(level: i32) -> u32 {
    multiplier_with_rules(level, &Rules::default())
}

pub fn multiplier_with_rules(level: i32, rules: &Rules) -> u32 {
    rules.streak_multipliers[clamp_level(level) - 1]
}

/// 命中後升一級
pub fn advance(level: u8) -> u8 {
    level.saturating_add(1).min(MAX_STREAK_LEVEL)
}

/// 重置為 (等級 1, 倍數 1)
pub fn reset() -> (u8, u32) {
    (MIN_STREAK_LEVEL, multiplier_for(MIN_STREAK_LEVEL as i32))
}

/// 等級狀態文字（純顯示）
pub fn status_for(level: i32) -> &'static str {
    STREAK_STATUS_LABELS[clamp_level(level) - 1]
}

// ============================================================================
// 單元測試
// ============================================================================
