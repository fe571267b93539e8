//! Generation request model.

use serde::Serialize;

/// Smallest accepted operand width.
pub const MIN_DIGITS: u8 = 1;

/// Largest accepted operand width.
pub const MAX_DIGITS: u8 = 10;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Query parameter name.
    pub field: String,

    /// Raw value as received, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Human-readable reason.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(
        field: impl Into<String>,
        value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            value,
            message: message.into(),
        }
    }
}

/// Validated input to question generation.
///
/// Fields are private so a request can only exist once its invariants hold:
/// at least one question, both widths in `[1, 10]`, the subtrahend no wider
/// than the minuend, and borrowing only when the minuend has two or more digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    question_count: u32,
    minuend_digits: u8,
    subtrahend_digits: u8,
    borrowing: bool,
}

impl GenerationRequest {
    /// Build a request, collecting every violated rule.
    ///
    /// # Errors
    ///
    /// Returns one `FieldError` per violated rule.
    pub fn new(
        question_count: u32,
        minuend_digits: u8,
        subtrahend_digits: u8,
        borrowing: bool,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        if question_count == 0 {
            errors.push(FieldError::new(
                "questions",
                Some(question_count.to_string()),
                "must be a positive integer",
            ));
        }

        let minuend_ok = digits_in_range(minuend_digits);
        if !minuend_ok {
            errors.push(FieldError::new(
                "minuend_digits",
                Some(minuend_digits.to_string()),
                digits_message(),
            ));
        }

        let subtrahend_ok = digits_in_range(subtrahend_digits);
        if !subtrahend_ok {
            errors.push(FieldError::new(
                "subtrahend_digits",
                Some(subtrahend_digits.to_string()),
                digits_message(),
            ));
        }

        if minuend_ok && subtrahend_ok && subtrahend_digits > minuend_digits {
            errors.push(FieldError::new(
                "subtrahend_digits",
                Some(subtrahend_digits.to_string()),
                "subtrahend_digits can't exceed minuend_digits",
            ));
        }

        // A one-digit minuend can never borrow against a subtrahend it bounds.
        if minuend_ok && borrowing && minuend_digits < 2 {
            errors.push(FieldError::new(
                "borrowing",
                Some("true".to_string()),
                "borrowing requires minuend_digits of at least 2",
            ));
        }

        if errors.is_empty() {
            Ok(Self {
                question_count,
                minuend_digits,
                subtrahend_digits,
                borrowing,
            })
        } else {
            Err(errors)
        }
    }

    /// Number of questions to generate.
    #[must_use]
    pub const fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Decimal width of every minuend.
    #[must_use]
    pub const fn minuend_digits(&self) -> u8 {
        self.minuend_digits
    }

    /// Decimal width of every subtrahend.
    #[must_use]
    pub const fn subtrahend_digits(&self) -> u8 {
        self.subtrahend_digits
    }

    /// Whether each question must require borrowing.
    #[must_use]
    pub const fn borrowing(&self) -> bool {
        self.borrowing
    }
}

/// Whether an operand width is accepted.
#[must_use]
pub const fn digits_in_range(digits: u8) -> bool {
    digits >= MIN_DIGITS && digits <= MAX_DIGITS
}

pub(crate) fn digits_message() -> String {
    format!("must be integer between {MIN_DIGITS} and {MAX_DIGITS}")
}
