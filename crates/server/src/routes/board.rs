//! Board API endpoints
//!
//! Each call maps one user action onto a session operation and answers with
//! the full board, so clients re-render from a single response.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use momentum_core::kanban::{Board, Column, Direction};
use momentum_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveTaskRequest {
    pub target: Column,
}

#[derive(Debug, Deserialize)]
pub struct SwapTaskRequest {
    pub direction: Direction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnResponse {
    pub id: Column,
    pub title: &'static str,
    pub tasks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_hint: Option<&'static str>,
    pub reorderable: bool,
    pub targets: &'static [Column],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub notice: String,
    pub total: usize,
    pub columns: Vec<ColumnResponse>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

fn board_response(state: &AppState, board: Board) -> Json<BoardResponse> {
    let columns = Column::ALL
        .into_iter()
        .map(|column| {
            let tasks = board.column(column).to_vec();
            ColumnResponse {
                id: column,
                title: column.title(),
                empty_hint: tasks.is_empty().then(|| column.empty_hint()),
                tasks,
                reorderable: column.reorderable(),
                targets: column.targets(),
            }
        })
        .collect();

    Json(BoardResponse {
        notice: state.session().load_outcome().notice(&board),
        total: board.total(),
        columns,
    })
}

fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        Error::IllegalTransition { .. } => StatusCode::CONFLICT,
        Error::Storage(_) => {
            warn!("Board storage failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/board - Current board; saves the snapshot on every read
async fn get_board(State(state): State<AppState>) -> ApiResult<Json<BoardResponse>> {
    let board = state.session().render().await.map_err(error_response)?;
    Ok(board_response(&state, board))
}

/// POST /api/board/tasks - Add a task to To Do
async fn add_task(
    State(state): State<AppState>,
    Json(req): Json<AddTaskRequest>,
) -> ApiResult<Json<BoardResponse>> {
    // Whitespace-only input counts as empty; anything else is stored verbatim
    let text = if req.text.trim().is_empty() {
        ""
    } else {
        req.text.as_str()
    };

    let board = state.session().add(text).await.map_err(error_response)?;
    Ok(board_response(&state, board))
}

/// POST /api/board/{column}/{index}/move - Move a task to another column
async fn move_task(
    State(state): State<AppState>,
    Path((column, index)): Path<(Column, usize)>,
    Json(req): Json<MoveTaskRequest>,
) -> ApiResult<Json<BoardResponse>> {
    let board = state
        .session()
        .move_task(column, index, req.target)
        .await
        .map_err(error_response)?;
    Ok(board_response(&state, board))
}

/// POST /api/board/{column}/{index}/swap - Reorder a task
async fn swap_task(
    State(state): State<AppState>,
    Path((column, index)): Path<(Column, usize)>,
    Json(req): Json<SwapTaskRequest>,
) -> ApiResult<Json<BoardResponse>> {
    let board = state
        .session()
        .swap(column, index, req.direction)
        .await
        .map_err(error_response)?;
    Ok(board_response(&state, board))
}

/// DELETE /api/board/{column}/{index} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path((column, index)): Path<(Column, usize)>,
) -> ApiResult<Json<BoardResponse>> {
    let board = state
        .session()
        .delete(column, index)
        .await
        .map_err(error_response)?;
    Ok(board_response(&state, board))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/board", get(get_board))
        .route("/api/board/tasks", post(add_task))
        .route("/api/board/{column}/{index}", delete(delete_task))
        .route("/api/board/{column}/{index}/move", post(move_task))
        .route("/api/board/{column}/{index}/swap", post(swap_task))
}
