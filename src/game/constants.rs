//! 遊戲常量定義

// ============================================================================
// 牌組常量
// ============================================================================

pub const SMALL_DECK_SIZE: usize = 36;   // 6..A × 4 花色
pub const LARGE_DECK_SIZE: usize = 52;   // 2..A × 4 花色
pub const SMALL_JOKER_SLOTS: usize = 1;  // 36 張模式 Joker 欄位
pub const LARGE_JOKER_SLOTS: usize = 2;  // 52 張模式 Joker 欄位

// ============================================================================
// 連擊常量
// ============================================================================

pub const MIN_STREAK_LEVEL: u8 = 1;
pub const MAX_STREAK_LEVEL: u8 = 10;

/// 連擊等級 1..=10 對應的倍數
pub const STREAK_MULTIPLIERS: [u32; MAX_STREAK_LEVEL as usize] =
    [1, 2, 4, 8, 15, 25, 40, 60, 80, 120];

/// 連擊等級狀態文字（純顯示用）
pub const STREAK_STATUS_LABELS: [&str; MAX_STREAK_LEVEL as usize] = [
    "Warming Up",
    "Good Start",
    "Skilled",
    "On Fire!",
    "Elite",
    "Incredible",
    "Phenomenal",
    "Mystic Luck",
    "Card Master",
    "GOD OF THE GAME",
];

// ============================================================================
// Joker 常量
// ============================================================================

pub const RED_JOKER_MULTIPLIER: f64 = 1.3;  // Red Joker: buffer ×1.3

// ============================================================================
// 統計常量
// ============================================================================

pub const MAX_HIGH_SCORES: usize = 10;   // 排行榜保留筆數

// 玩家稱號門檻 (累積分數, 等級, 名稱)
pub const PLAYER_TITLE_THRESHOLDS: [(u64, &str, &str); 10] = [
    (0, "6", "Novice"),
    (10_000, "7", "Novice"),
    (20_000, "8", "Novice"),
    (35_000, "9", "Novice"),
    (50_000, "10", "Novice"),
    (50_000, "J", "Amateur"),
    (150_000, "Q", "Experienced"),
    (400_000, "K", "Pro"),
    (1_000_000, "A", "Master"),
    (5_000_000, "Joker", "Legend"),
];
