//! HTTP surface for Linkboard (axum).
//!
//! ```text
//! GET  /             -> index   (listing page as JSON)
//! POST /add          -> add     (303 back to the listing)
//! POST /delete/{id}  -> delete  (303 back to the listing)
//! ```
//!
//! Store work is blocking, so every handler runs it on the blocking pool.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::request_handler::{handle_add, handle_delete, handle_index, AddLinkForm, ListingParams, ReturnState};
use crate::types::errors::StoreError;
use crate::types::listing::ListingPage;

/// Handler-level error type. Details are logged, never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Convenience type alias for handler return values.
pub type HttpResult<T> = Result<T, HttpError>;

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        let body = json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Builds the application router.
pub fn router(app: App) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add))
        .route("/delete/{id}", post(delete))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

/// GET /
async fn index(State(app): State<App>, Query(params): Query<ListingParams>) -> HttpResult<Json<ListingPage>> {
    let page = tokio::task::spawn_blocking(move || handle_index(&app, &params)).await??;
    Ok(Json(page))
}

/// POST /add
async fn add(State(app): State<App>, Form(form): Form<AddLinkForm>) -> HttpResult<Redirect> {
    let location = tokio::task::spawn_blocking(move || handle_add(&app, &form)).await??;
    Ok(Redirect::to(&location))
}

/// POST /delete/{id}
///
/// The body only carries redirect state, so a missing or unreadable form
/// still deletes and redirects to the default listing.
async fn delete(
    State(app): State<App>,
    Path(id): Path<i64>,
    form: Result<Form<ReturnState>, FormRejection>,
) -> HttpResult<Redirect> {
    let state = form.map(|Form(state)| state).unwrap_or_default();
    let location = tokio::task::spawn_blocking(move || handle_delete(&app, id, &state)).await??;
    Ok(Redirect::to(&location))
}
