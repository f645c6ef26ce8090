use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};

use crate::analysis::{ProjectCard, ResultsView};
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "projects/list.html")]
struct CatalogTemplate {
    backend_url: String,
    results: ResultsView,
}

#[derive(Template)]
#[template(path = "projects/show.html")]
struct ProjectTemplate {
    card: ProjectCard,
}

pub async fn list(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let projects = state.backend.list_projects().await?;

    let template = CatalogTemplate {
        backend_url: state.backend.base_url().to_string(),
        results: ResultsView::build(&projects),
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn show(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let project = state
        .backend
        .get_project(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let template = ProjectTemplate {
        card: ProjectCard::from_project(&project),
    };
    Ok(Html(template.render().unwrap_or_default()))
}
