use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Serialize;

use crate::content::Project;
use crate::portfolio::{all_tags, apply_filter, PageQuery, ViewState};
use crate::render::{render_page, PageAssets, PageContext};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    /// Every tag offered by the filter, sorted.
    pub tags: Vec<String>,
    /// The selection actually applied, after dropping unknown tags.
    pub selected: Vec<String>,
    pub projects: Vec<Project>,
}

/// GET /
///
/// Renders the page for the section and tag selection in the query string.
pub async fn handle_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let tags = all_tags(&state.content.projects);
    let view = ViewState::from_query(&query, &tags);
    let assets = PageAssets::scan(&state.config, &state.content);

    Html(render_page(PageContext {
        content: state.content.clone(),
        view,
        assets,
        contact: None,
    }))
}

/// GET /api/v1/projects
///
/// Same filter as the Projects section, as JSON. Only `tags` is read from the query.
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<ProjectListResponse> {
    let tags = all_tags(&state.content.projects);
    let view = ViewState::from_query(&query, &tags);
    let projects = apply_filter(&state.content.projects, &view.selection)
        .into_iter()
        .cloned()
        .collect();

    Json(ProjectListResponse {
        selected: view.selection.iter().cloned().collect(),
        tags,
        projects,
    })
}
