//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::request::{FieldError, GenerationRequest, digits_in_range, digits_message};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}

/// Raw query parameters for question generation.
///
/// Every field is kept as an optional string so that each malformed
/// parameter can be reported individually instead of failing on the first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationQuery {
    /// Number of questions.
    pub questions: Option<String>,

    /// Decimal width of the minuend.
    pub minuend_digits: Option<String>,

    /// Decimal width of the subtrahend.
    pub subtrahend_digits: Option<String>,

    /// `true` or `false`.
    pub borrowing: Option<String>,
}

impl GenerationQuery {
    /// Validate the query and turn it into a `GenerationRequest`.
    ///
    /// # Errors
    ///
    /// Returns every field-level failure found.
    pub fn validate(&self, max_questions: u32) -> Result<GenerationRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let questions = parse_field(
            &mut errors,
            "questions",
            self.questions.as_deref(),
            |raw| raw.parse::<u32>().ok(),
            "must be a positive integer",
        );
        if let Some(count) = questions
            && count > max_questions
        {
            errors.push(FieldError::new(
                "questions",
                Some(count.to_string()),
                format!("must not exceed {max_questions}"),
            ));
        }

        let minuend_digits = parse_field(
            &mut errors,
            "minuend_digits",
            self.minuend_digits.as_deref(),
            |raw| raw.parse::<u8>().ok(),
            &digits_message(),
        );
        let subtrahend_digits = parse_field(
            &mut errors,
            "subtrahend_digits",
            self.subtrahend_digits.as_deref(),
            |raw| raw.parse::<u8>().ok(),
            &digits_message(),
        );
        let borrowing = parse_field(
            &mut errors,
            "borrowing",
            self.borrowing.as_deref(),
            parse_bool,
            "must be true or false",
        );

        match (questions, minuend_digits, subtrahend_digits, borrowing) {
            (Some(count), Some(minuend), Some(subtrahend), Some(borrowing))
                if errors.is_empty() =>
            {
                GenerationRequest::new(count, minuend, subtrahend, borrowing)
            }
            (_, minuend, subtrahend, _) => {
                // Range rules still apply to the widths that did parse.
                for (field, digits) in [
                    ("minuend_digits", minuend),
                    ("subtrahend_digits", subtrahend),
                ] {
                    if let Some(d) = digits
                        && !digits_in_range(d)
                    {
                        errors.push(FieldError::new(
                            field,
                            Some(d.to_string()),
                            digits_message(),
                        ));
                    }
                }
                Err(errors)
            }
        }
    }
}

fn parse_field<T>(
    errors: &mut Vec<FieldError>,
    field: &str,
    raw: Option<&str>,
    parse: impl FnOnce(&str) -> Option<T>,
    message: &str,
) -> Option<T> {
    let Some(raw) = raw else {
        errors.push(FieldError::new(field, None, "is required"));
        return None;
    };

    let parsed = parse(raw);
    if parsed.is_none() {
        errors.push(FieldError::new(field, Some(raw.to_string()), message));
    }
    parsed
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(questions: &str, minuend: &str, subtrahend: &str, borrowing: &str) -> GenerationQuery {
        GenerationQuery {
            questions: Some(questions.to_string()),
            minuend_digits: Some(minuend.to_string()),
            subtrahend_digits: Some(subtrahend.to_string()),
            borrowing: Some(borrowing.to_string()),
        }
    }

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        assert_eq!(response.code, 0);
        assert_eq!(response.message, "success");
        assert_eq!(response.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_valid_query() {
        let request = query("10", "6", "4", "false").validate(1000).unwrap();
        assert_eq!(request.question_count(), 10);
        assert_eq!(request.minuend_digits(), 6);
        assert_eq!(request.subtrahend_digits(), 4);
        assert!(!request.borrowing());
    }

    #[test]
    fn test_missing_params() {
        let errors = GenerationQuery::default().validate(1000).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|e| e.message == "is required"));
        assert!(errors.iter().all(|e| e.value.is_none()));
    }

    #[test]
    fn test_wrong_types() {
        let errors = query("hello", "six", "yes", "5").validate(1000).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["questions", "minuend_digits", "subtrahend_digits", "borrowing"]
        );
        assert_eq!(errors[3].message, "must be true or false");
        assert_eq!(errors[0].value.as_deref(), Some("hello"));
    }

    #[test]
    fn test_range_exceeded() {
        let errors = query("10", "13", "11", "true").validate(1000).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "must be integer between 1 and 10");
    }

    #[test]
    fn test_range_reported_alongside_type_errors() {
        let errors = query("ten", "13", "4", "true").validate(1000).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["questions", "minuend_digits"]);
    }

    #[test]
    fn test_subtrahend_wider_than_minuend() {
        let errors = query("10", "6", "8", "true").validate(1000).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "subtrahend_digits");
    }

    #[test]
    fn test_zero_and_negative_questions() {
        assert!(query("0", "3", "2", "false").validate(1000).is_err());
        assert!(query("-4", "3", "2", "false").validate(1000).is_err());
    }

    #[test]
    fn test_question_cap() {
        let errors = query("1001", "3", "2", "false").validate(1000).unwrap_err();
        assert_eq!(errors[0].message, "must not exceed 1000");
        assert!(query("1000", "3", "2", "false").validate(1000).is_ok());
    }

    #[test]
    fn test_borrowing_literal_is_strict() {
        assert!(query("1", "3", "2", "1").validate(1000).is_err());
        assert!(query("1", "3", "2", "TRUE").validate(1000).is_err());
        assert!(query("1", "3", "2", "true").validate(1000).unwrap().borrowing());
    }
}
