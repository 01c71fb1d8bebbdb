//! Movie API handlers
//!
//! Contains HTTP request handlers for movie CRUD operations.
//!
//! Every handler answers with `Content-Type: application/json`, including the
//! responses that carry no body, and every JSON body ends with a newline. In
//! compat mode an unknown id produces an empty 200 response and request bodies
//! are decoded best-effort; strict mode turns those cases into `AppError`s.

use crate::config::ApiMode;
use crate::error::AppError;
use crate::state::{Movie, MovieId, SharedState, MAX_ID_ATTEMPTS};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Empty 200 response that still advertises a JSON content type
fn empty_json() -> Response {
    [(header::CONTENT_TYPE, "application/json")].into_response()
}

/// Serialize `value` as a newline-terminated JSON body
fn json_line<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let mut body = serde_json::to_vec(value).map_err(|e| AppError::Internal(e.into()))?;
    body.push(b'\n');
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Response for an id that matched nothing
fn missing(mode: ApiMode, id: MovieId) -> Result<Response, AppError> {
    debug!(movie_id = %id, %mode, "Movie not found");
    if mode.is_strict() {
        Err(AppError::MovieNotFound(id))
    } else {
        Ok(empty_json())
    }
}

/// Decode a request body into a movie
///
/// Strict mode requires exactly one well-typed movie object. Compat mode
/// takes what it can from the first JSON value and falls back to an empty
/// movie when there is nothing usable.
fn decode_movie(body: &[u8], mode: ApiMode) -> Result<Movie, AppError> {
    if mode.is_strict() {
        return serde_json::from_slice::<Movie>(body)
            .map_err(|e| AppError::InvalidMovie(e.to_string()));
    }

    Ok(Movie::decode_lenient(body).unwrap_or_else(|| {
        warn!(body_len = body.len(), "Malformed movie body, using an empty movie");
        Movie::default()
    }))
}

/// GET /movies - List all movies
pub async fn list_movies(State(state): State<SharedState>) -> Result<Response, AppError> {
    let state = state.read().await;
    json_line(&state.movies())
}

/// GET /movies/:id - Get a specific movie
pub async fn get_movie(
    State(state): State<SharedState>,
    Path(id): Path<MovieId>,
) -> Result<Response, AppError> {
    let state = state.read().await;
    match state.find_movie(&id) {
        Some(movie) => json_line(movie),
        None => missing(state.mode(), id),
    }
}

/// POST /movies - Create a new movie under a generated id
pub async fn create_movie(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let mut state = state.write().await;
    let movie = decode_movie(&body, state.mode())?;
    let created = state
        .add_movie(movie)
        .ok_or(AppError::IdSpaceExhausted(MAX_ID_ATTEMPTS))?;

    info!(movie_id = %created.id, title = %created.title, "Movie created");
    json_line(&created)
}

/// PUT /movies/:id - Replace a movie, moving it to the end of the collection
pub async fn update_movie(
    State(state): State<SharedState>,
    Path(id): Path<MovieId>,
    body: Bytes,
) -> Result<Response, AppError> {
    let mut state = state.write().await;
    let Some(index) = state.position(&id) else {
        return missing(state.mode(), id);
    };

    let movie = decode_movie(&body, state.mode())?;
    let updated = state.replace_at(index, movie);

    info!(movie_id = %updated.id, title = %updated.title, "Movie updated");
    json_line(&updated)
}

/// DELETE /movies/:id - Delete a movie
///
/// Never writes a body. In compat mode deleting an unknown id is
/// indistinguishable from a successful delete.
pub async fn delete_movie(
    State(state): State<SharedState>,
    Path(id): Path<MovieId>,
) -> Result<Response, AppError> {
    let mut state = state.write().await;
    match state.remove_movie(&id) {
        Some(removed) => {
            info!(movie_id = %removed.id, "Movie deleted");
            Ok(empty_json())
        }
        None => missing(state.mode(), id),
    }
}
