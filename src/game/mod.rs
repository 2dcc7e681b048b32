//! 遊戲核心模組
//!
//! 包含保齡球比賽的核心定義：
//! - `constants`: 遊戲常量
//! - `state`: 單場比賽的投球紀錄
//! - `scoring`: 計分引擎
//! - `error`: 錯誤類型

pub mod constants;
pub mod error;
pub mod scoring;
pub mod state;

pub use constants::*;
pub use error::{GameError, GameResult};
pub use scoring::{score_throws, FrameKind};
pub use state::GameState;
