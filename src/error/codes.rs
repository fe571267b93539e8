//! Error code constants.
//!
//! Error codes are organized by category:
//! - 3xxx: Validation errors
//! - 4xxx: Resource errors
//! - 5xxx: Generation/Internal errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Validation Errors (3xxx) =====

    /// Bad request / malformed query string.
    pub const BAD_REQUEST: Self = Self(3001);

    /// Invalid parameter value.
    pub const INVALID_PARAM: Self = Self(3003);

    // ===== Resource Errors (4xxx) =====

    /// Resource not found.
    pub const NOT_FOUND: Self = Self(4001);

    // ===== Generation/Internal Errors (5xxx) =====

    /// Question generation could not satisfy the request.
    pub const GENERATION_FAILED: Self = Self(5001);

    /// Internal server error.
    pub const INTERNAL_ERROR: Self = Self(5002);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            3000..=3999 => ErrorCategory::Validation,
            4000..=4999 => ErrorCategory::Resource,
            5000..=5999 => ErrorCategory::Internal,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Validation errors (3xxx).
    Validation,
    /// Resource errors (4xxx).
    Resource,
    /// Generation and internal errors (5xxx).
    Internal,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Resource => write!(f, "resource"),
            Self::Internal => write!(f, "internal"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::BAD_REQUEST.as_i32(), 3001);
        assert_eq!(ErrorCode::INVALID_PARAM.as_i32(), 3003);
        assert_eq!(ErrorCode::NOT_FOUND.as_i32(), 4001);
        assert_eq!(ErrorCode::GENERATION_FAILED.as_i32(), 5001);
        assert_eq!(i32::from(ErrorCode::INTERNAL_ERROR), 5002);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ErrorCode::INVALID_PARAM.category(),
            ErrorCategory::Validation
        );
        assert_eq!(ErrorCode::NOT_FOUND.category(), ErrorCategory::Resource);
        assert_eq!(
            ErrorCode::GENERATION_FAILED.category(),
            ErrorCategory::Internal
        );
        assert_eq!(ErrorCode(42).category(), ErrorCategory::Unknown);
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
    }
}
