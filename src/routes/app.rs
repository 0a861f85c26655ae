use askama::Template;
use axum::{
    extract::State,
    http::{Method, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::error::AppError;
use crate::ui::{self, view::PageView, Action, UiState};
use crate::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct ShellTemplate {
    page: PageView,
    initial_state: String,
    static_hash: &'static str,
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// JSON for an inline `<script>` block.
fn script_json(state: &UiState) -> Result<String, AppError> {
    let json = serde_json::to_string(state)?;
    Ok(json.replace("</", "<\\/"))
}

/// Fallback for every unrouted path: the checker page for browser routes,
/// a JSON 404 for anything under `/api`.
pub async fn shell(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    if is_api_path(uri.path()) || !(method == Method::GET || method == Method::HEAD) {
        return Err(AppError::NotFound("Not found".to_string()));
    }

    let mut entries = state.store.list().await?;
    entries.reverse();
    let ui_state = ui::reduce(UiState::default(), Action::Loaded(entries));

    let template = ShellTemplate {
        page: PageView::from(&ui_state),
        initial_state: script_json(&ui_state)?,
        static_hash: crate::STATIC_HASH,
    };
    Ok(Html(template.render()?).into_response())
}
