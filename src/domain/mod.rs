//! Domain models for the quiz service.
//!
//! This module contains the generation request, the generated questions,
//! and the API contracts that wrap them.

pub mod dto;
pub mod question;
pub mod request;

pub use dto::{ApiResponse, GenerationQuery, HealthResponse};
pub use question::{OPTION_COUNT, OperandPair, Question, QuestionSet};
pub use request::{FieldError, GenerationRequest, MAX_DIGITS, MIN_DIGITS};
