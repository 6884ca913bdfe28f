use crate::cards::panel_html;
use crate::panel::PanelSnapshot;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.panel.snapshot().await;
    let inner = panel_html(&snapshot.content, &state.config);
    Html(render_index(&state.config, &inner))
}

pub async fn panel_fragment(State(state): State<AppState>) -> Html<String> {
    let content = state.panel.content().await;
    Html(panel_html(&content, &state.config))
}

pub async fn get_panel(State(state): State<AppState>) -> Json<PanelSnapshot> {
    Json(state.panel.snapshot().await)
}
