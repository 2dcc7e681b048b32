//! 遊戲常量定義

// ============================================================================
// 遊戲規則常量
// ============================================================================

pub const ALL_PINS: i32 = 10;            // 每局球瓶數
pub const FRAMES_PER_GAME: usize = 10;   // 每場局數
pub const MAX_THROWS: usize = 21;        // 一場最多投球數（第十局最多 3 球）
