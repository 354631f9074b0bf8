//! 猜牌遊戲引擎
//!
//! - `game`: 純規則（牌組、命中判定、連擊、Joker、機率、平衡數值）
//! - `service`: 對局狀態機與周邊（觀測、動作遮罩、統計、存檔）

pub mod game;
pub mod service;
