//! 單場比賽狀態

use super::constants::MAX_THROWS;
use super::error::{GameError, GameResult};
use super::scoring::score_throws;

/// 一場比賽的投球紀錄
///
/// 固定 21 格、初始為 0 的緩衝區加上寫入游標。計分時讀取整個緩衝區，
/// 所以尚未投出的位置會以 0 參與 look-ahead。
#[derive(Clone, Debug)]
pub struct GameState {
    throws: [i32; MAX_THROWS],
    next_index: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            throws: [0; MAX_THROWS],
            next_index: 0,
        }
    }

    /// 記錄一次投球
    ///
    /// 不檢查球瓶數範圍。緩衝區已滿時回傳 `GameComplete`，狀態不變。
    pub fn record_throw(&mut self, pins: i32) -> GameResult<()> {
        let slot = self
            .throws
            .get_mut(self.next_index)
            .ok_or(GameError::GameComplete { max_throws: MAX_THROWS })?;
        *slot = pins;
        self.next_index += 1;
        Ok(())
    }

    /// 目前累計分數
    pub fn score(&self) -> i64 {
        score_throws(&self.throws)
    }

    /// 已記錄的投球
    pub fn throws(&self) -> &[i32] {
        &self.throws[..self.next_index]
    }

    pub fn throw_count(&self) -> usize {
        self.next_index
    }

    pub fn is_full(&self) -> bool {
        self.next_index >= MAX_THROWS
    }
}
