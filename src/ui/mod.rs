//! State for the single-page checker view.
//!
//! The browser script applies the same transitions against the JSON API;
//! the server uses them to render the first paint of the shell.

pub mod view;

use serde::Serialize;

use crate::models::Entry;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// History, newest first.
    pub entries: Vec<Entry>,
    /// The entry shown in the result card.
    pub latest: Option<Entry>,
    pub url_input: String,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// The history list arrived from the API.
    Loaded(Vec<Entry>),
    InputChanged(String),
    Created(Entry),
    Deleted(i64),
    RequestFailed(String),
}

pub fn reduce(mut state: UiState, action: Action) -> UiState {
    match action {
        Action::Loaded(entries) => {
            if let Some(first) = entries.first() {
                state.latest = Some(first.clone());
            }
            state.entries = entries;
        }
        Action::InputChanged(url) => state.url_input = url,
        Action::Created(entry) => {
            state.entries.insert(0, entry.clone());
            state.latest = Some(entry);
            state.url_input.clear();
        }
        // The result card keeps showing a deleted entry until the next check.
        Action::Deleted(id) => state.entries.retain(|e| e.id != id),
        Action::RequestFailed(reason) => {
            tracing::warn!("Request from checker view failed: {reason}");
        }
    }
    state
}
