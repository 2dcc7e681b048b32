//! 計分引擎
//!
//! 以單一前進游標走過十局，strike/spare 的獎勵分以固定距離向後查看。
//! 超出已記錄範圍的位置一律視為 0，因此未完成的比賽也能得到部分分數。

use super::constants::{ALL_PINS, FRAMES_PER_GAME};

// ============================================================================
// 局型判定
// ============================================================================

/// 單局的類型
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
}

impl FrameKind {
    /// 判定從 `throw` 開始的這一局屬於哪一類
    pub fn at(throws: &[i32], throw: usize) -> Self {
        if is_strike(throws, throw) {
            FrameKind::Strike
        } else if is_spare(throws, throw) {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    /// 這一局本身佔用的投球數
    pub fn throws_consumed(self) -> usize {
        match self {
            FrameKind::Strike => 1,
            FrameKind::Spare | FrameKind::Open => 2,
        }
    }
}

/// 讀取某次投球的球瓶數，尚未投出的位置為 0
fn pins_at(throws: &[i32], throw: usize) -> i64 {
    throws.get(throw).copied().map(i64::from).unwrap_or(0)
}

/// 一球擊倒全部球瓶
pub fn is_strike(throws: &[i32], throw: usize) -> bool {
    pins_at(throws, throw) == i64::from(ALL_PINS)
}

/// 兩球合計擊倒全部球瓶
pub fn is_spare(throws: &[i32], throw: usize) -> bool {
    frame_points_at(throws, throw) == i64::from(ALL_PINS)
}

/// 從 `throw` 開始連續兩球的分數
pub fn frame_points_at(throws: &[i32], throw: usize) -> i64 {
    pins_at(throws, throw) + pins_at(throws, throw + 1)
}

/// Strike 局分數：10 + 後兩球
pub fn strike_bonus_at(throws: &[i32], throw: usize) -> i64 {
    i64::from(ALL_PINS) + frame_points_at(throws, throw + 1)
}

/// Spare 局分數：10 + 下一球
pub fn spare_bonus_at(throws: &[i32], throw: usize) -> i64 {
    i64::from(ALL_PINS) + pins_at(throws, throw + 2)
}

// ============================================================================
// 總分計算
// ============================================================================

/// 計算十局累計總分
///
/// 任何長度的輸入都合法；不足的投球以 0 計算。第十局不做特殊處理，
/// 額外的投球自然由前面局的獎勵分吸收。
pub fn score_throws(throws: &[i32]) -> i64 {
    let mut sum = 0i64;
    let mut throw = 0usize;

    for _ in 0..FRAMES_PER_GAME {
        let kind = FrameKind::at(throws, throw);
        sum += match kind {
            FrameKind::Strike => strike_bonus_at(throws, throw),
            FrameKind::Spare => spare_bonus_at(throws, throw),
            FrameKind::Open => frame_points_at(throws, throw),
        };
        throw += kind.throws_consumed();
    }

    sum
}
