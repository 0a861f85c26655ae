use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::carbon::round_carbon;
use crate::error::AppError;
use crate::models::Entry;
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateEntry {
    url: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteAck {
    success: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/data", get(list_entries).post(create_entry))
        .route("/api/data/{id}", delete(delete_entry))
}

/// Read an optional sign and the leading run of digits, ignoring the rest
/// (`"2abc"` is 2). Ids without leading digits match nothing.
fn parse_leading_id(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits = raw[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    raw[..sign_len + digits].parse().ok()
}

async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, AppError> {
    let mut entries = state.store.list().await?;
    entries.reverse();
    Ok(Json(entries))
}

async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntry>, JsonRejection>,
) -> Result<Json<Entry>, AppError> {
    let url = match payload {
        Ok(Json(form)) => form.url,
        Err(rejection) => {
            tracing::debug!("Rejected create body: {rejection}");
            None
        }
    };
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return Err(AppError::Validation("URL required".to_string()));
    };

    let carbon = round_carbon(state.carbon.next_carbon());
    let existing = state.store.list().await?;
    let entry = Entry::new(url, carbon, &existing, Utc::now());
    state.store.append(&entry).await?;

    tracing::info!(id = entry.id, rating = %entry.rating, "Recorded carbon check for {}", entry.url);
    Ok(Json(entry))
}

async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, AppError> {
    if !state.store.exists().await? {
        return Err(AppError::NotFound("No data".to_string()));
    }

    let id = parse_leading_id(&id);
    let entries = state.store.list().await?;
    let before = entries.len();
    let kept: Vec<Entry> = entries.into_iter().filter(|e| Some(e.id) != id).collect();
    state.store.rewrite(&kept).await?;

    tracing::info!(?id, removed = before - kept.len(), "Deleted entry");
    Ok(Json(DeleteAck { success: true }))
}
