//! Axum route handlers for the content API.
//!
//! Reads are always mounted. Writes are mounted only in debug mode and
//! append to or replace in-memory content; nothing is persisted.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use crate::content::ContentSnapshot;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::content::{EducationEntry, ExperienceEntry, Project};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TextUpdate {
    pub text: String,
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// GET /api/v1/content
pub async fn handle_get_content(State(state): State<AppState>) -> Json<ContentSnapshot> {
    Json(state.store.read().await.snapshot())
}

/// PUT /api/v1/content/bio
pub async fn handle_update_bio(
    State(state): State<AppState>,
    AppJson(req): AppJson<TextUpdate>,
) -> StatusCode {
    state.store.write().await.update_bio(req.text);
    info!("Bio replaced");
    StatusCode::NO_CONTENT
}

/// PUT /api/v1/content/about
pub async fn handle_update_about(
    State(state): State<AppState>,
    AppJson(req): AppJson<TextUpdate>,
) -> StatusCode {
    state.store.write().await.update_about(req.text);
    info!("About text replaced");
    StatusCode::NO_CONTENT
}

/// POST /api/v1/content/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    AppJson(project): AppJson<Project>,
) -> Result<StatusCode, AppError> {
    require("title", &project.title)?;
    require("description", &project.description)?;

    info!(title = %project.title, "Project added");
    state.store.write().await.add_project(project);
    Ok(StatusCode::CREATED)
}

/// POST /api/v1/content/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    AppJson(entry): AppJson<ExperienceEntry>,
) -> Result<StatusCode, AppError> {
    require("title", &entry.title)?;
    require("company", &entry.company)?;

    info!(company = %entry.company, "Experience entry added");
    state.store.write().await.add_experience(entry);
    Ok(StatusCode::CREATED)
}

/// POST /api/v1/content/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    AppJson(entry): AppJson<EducationEntry>,
) -> Result<StatusCode, AppError> {
    require("degree", &entry.degree)?;
    require("institution", &entry.institution)?;

    info!(institution = %entry.institution, "Education entry added");
    state.store.write().await.add_education(entry);
    Ok(StatusCode::CREATED)
}
