//! Question generation handler.

use axum::{Json, extract::State};

use crate::api::extractors::ValidatedGeneration;
use crate::api::state::AppState;
use crate::domain::QuestionSet;
use crate::error::Result;

/// Generate a set of subtraction questions.
pub async fn generate_questions(
    State(state): State<AppState>,
    ValidatedGeneration(request): ValidatedGeneration,
) -> Result<Json<QuestionSet>> {
    let questions = state.generate(&request)?;
    Ok(Json(questions))
}
