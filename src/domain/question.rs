//! Question models.

use serde::{Deserialize, Serialize};

/// Number of multiple-choice options per question.
pub const OPTION_COUNT: usize = 4;

/// A minuend/subtrahend pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandPair {
    /// Number subtracted from.
    pub minuend: u64,
    /// Number being subtracted.
    pub subtrahend: u64,
}

impl OperandPair {
    /// Create a new operand pair.
    #[must_use]
    pub const fn new(minuend: u64, subtrahend: u64) -> Self {
        Self {
            minuend,
            subtrahend,
        }
    }

    /// Signed difference `minuend - subtrahend`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn difference(&self) -> i64 {
        // Operands never exceed eleven decimal digits.
        self.minuend as i64 - self.subtrahend as i64
    }
}

/// A single subtraction question with its answer choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Number subtracted from.
    pub minuend: u64,

    /// Number being subtracted.
    pub subtrahend: u64,

    /// Answer choices; `correct` appears at a random slot.
    pub options: [i64; OPTION_COUNT],

    /// The correct answer.
    pub correct: i64,
}

impl Question {
    /// Whether the options include the correct answer.
    #[must_use]
    pub fn has_correct_option(&self) -> bool {
        self.options.contains(&self.correct)
    }
}

/// Ordered questions produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(Vec<Question>);

impl QuestionSet {
    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the questions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.0.iter()
    }

    /// Consume the set, returning the questions.
    #[must_use]
    pub fn into_inner(self) -> Vec<Question> {
        self.0
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self(questions)
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
