//! HTTP 服務
//!
//! `POST /roll` 記錄一球並回傳最新分數，`GET /score` 回傳目前分數。
//! 方法不符由路由回應 405。

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::game::{GameError, GameState};

/// 共享的比賽狀態，讀寫都在同一把鎖內完成
#[derive(Clone, Default)]
pub struct AppState {
    game: Arc<Mutex<GameState>>,
}

impl AppState {
    pub fn new(game: GameState) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameState>, ApiError> {
        self.game.lock().map_err(|_| ApiError::LockPoisoned)
    }
}

#[derive(Deserialize)]
pub struct RollRequest {
    #[serde(default)]
    pub pins: i32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ScoreResponse {
    pub score: i64,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("lock error")]
    LockPoisoned,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Game(GameError::GameComplete { .. }) => StatusCode::CONFLICT,
            ApiError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "request rejected");
        (status, self.to_string()).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/roll", post(roll))
        .route("/score", get(score))
        .with_state(state)
}

// 直接解析原始 body，不要求 content-type
async fn roll(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ScoreResponse>), ApiError> {
    let request: RollRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let score = {
        let mut game = state.lock()?;
        game.record_throw(request.pins)?;
        game.score()
    };

    debug!(pins = request.pins, score, "throw recorded");
    Ok((StatusCode::CREATED, Json(ScoreResponse { score })))
}

async fn score(State(state): State<AppState>) -> Result<Json<ScoreResponse>, ApiError> {
    let score = state.lock()?.score();
    Ok(Json(ScoreResponse { score }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_THROWS;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError::InvalidBody("eof".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(GameError::GameComplete { max_throws: MAX_THROWS }).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::LockPoisoned.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_roll_request_defaults_missing_pins() {
        let request: RollRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.pins, 0);
    }

    #[test]
    fn test_roll_request_rejects_non_integer_pins() {
        assert!(serde_json::from_str::<RollRequest>(r#"{"pins": "seven"}"#).is_err());
        assert!(serde_json::from_str::<RollRequest>(r#"{"pins": 4.5}"#).is_err());
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let state = AppState::default();
        let poisoned = state.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoned.game.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(state.lock(), Err(ApiError::LockPoisoned)));
    }
}
