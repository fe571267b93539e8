//! Validated generation request extractor.

use std::future::Future;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::api::state::AppState;
use crate::domain::{GenerationQuery, GenerationRequest};
use crate::error::AppError;

/// A `GenerationRequest` parsed and validated from the query string.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedGeneration(pub GenerationRequest);

impl FromRequestParts<AppState> for ValidatedGeneration {
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = Query::<GenerationQuery>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
            .and_then(|Query(query)| {
                query
                    .validate(state.config.generator.max_questions)
                    .map(Self)
                    .map_err(AppError::Validation)
            });
        std::future::ready(result)
    }
}
