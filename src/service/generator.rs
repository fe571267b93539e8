//! Question generation service.
//!
//! Draws operand pairs of the requested widths, adjusts them for borrowing,
//! and attaches multiple-choice options.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::domain::{GenerationRequest, OperandPair, Question, QuestionSet};
use crate::error::GenerationError;
use crate::service::borrowing::adjust_for_borrowing;
use crate::service::digits::requires_borrowing;
use crate::service::options::generate_options;
use crate::service::random::RandomSource;

/// Service producing question sets.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    /// Operand draws allowed per question before giving up.
    max_draw_attempts: u32,
}

impl QuestionGenerator {
    /// Create a new generator.
    #[must_use]
    pub const fn new(config: &GeneratorConfig) -> Self {
        Self {
            max_draw_attempts: config.max_draw_attempts,
        }
    }

    /// Generate `request.question_count()` independent questions.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::AttemptsExhausted` if any question fails to
    /// find a valid operand pair within the configured number of draws. No
    /// partial set is returned.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        rng: &mut impl RandomSource,
    ) -> Result<QuestionSet, GenerationError> {
        let mut questions = Vec::with_capacity(request.question_count() as usize);
        let mut redraws = 0_u64;

        for _ in 0..request.question_count() {
            let (question, attempts) = self.generate_question(request, rng)?;
            redraws += u64::from(attempts - 1);
            questions.push(question);
        }

        let borrowing = if request.borrowing() { "true" } else { "false" };
        metrics::counter!("quiz_questions_generated_total", "borrowing" => borrowing)
            .increment(questions.len() as u64);
        metrics::counter!("quiz_operand_redraws_total").increment(redraws);

        debug!(
            count = questions.len(),
            minuend_digits = request.minuend_digits(),
            subtrahend_digits = request.subtrahend_digits(),
            borrowing = request.borrowing(),
            redraws,
            "Generated question set"
        );

        Ok(QuestionSet::from(questions))
    }

    /// Generate one question, returning it with the number of draws used.
    fn generate_question(
        &self,
        request: &GenerationRequest,
        rng: &mut impl RandomSource,
    ) -> Result<(Question, u32), GenerationError> {
        for attempt in 1..=self.max_draw_attempts {
            let drawn = draw_operands(request, rng);
            let pair = adjust_for_borrowing(drawn, request.borrowing());

            if !is_acceptable(request, pair) {
                continue;
            }

            let options = generate_options(pair, rng);
            let question = Question {
                minuend: pair.minuend,
                subtrahend: pair.subtrahend,
                options,
                correct: pair.difference(),
            };
            return Ok((question, attempt));
        }

        Err(GenerationError::AttemptsExhausted {
            attempts: self.max_draw_attempts,
            minuend_digits: request.minuend_digits(),
            subtrahend_digits: request.subtrahend_digits(),
            borrowing: request.borrowing(),
        })
    }
}

/// Draw a minuend of the requested width and a subtrahend no larger than it.
fn draw_operands(request: &GenerationRequest, rng: &mut impl RandomSource) -> OperandPair {
    let (minuend_low, minuend_high) = width_bounds(request.minuend_digits());
    let minuend = rng.next_in_range(minuend_low, minuend_high);

    let (subtrahend_low, subtrahend_high) = width_bounds(request.subtrahend_digits());
    let subtrahend = rng.next_in_range(subtrahend_low, subtrahend_high.min(minuend));

    OperandPair::new(minuend, subtrahend)
}

/// Whether an adjusted pair still satisfies every question invariant.
fn is_acceptable(request: &GenerationRequest, pair: OperandPair) -> bool {
    let (minuend_low, minuend_high) = width_bounds(request.minuend_digits());
    let (subtrahend_low, subtrahend_high) = width_bounds(request.subtrahend_digits());

    (minuend_low..minuend_high).contains(&pair.minuend)
        && (subtrahend_low..subtrahend_high).contains(&pair.subtrahend)
        && pair.subtrahend <= pair.minuend
        && requires_borrowing(pair.minuend, pair.subtrahend) == request.borrowing()
}

/// Half-open range of integers with exactly `digits` decimal digits.
const fn width_bounds(digits: u8) -> (u64, u64) {
    let digits = digits as u32;
    (10_u64.pow(digits - 1), 10_u64.pow(digits))
}
