//! 遊戲錯誤類型

use thiserror::Error;

/// 遊戲狀態操作可能發生的錯誤
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// 已記錄滿一場的投球數
    #[error("game already complete: all {max_throws} throws recorded")]
    GameComplete { max_throws: usize },
}

pub type GameResult<T> = Result<T, GameError>;
