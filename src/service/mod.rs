//! Service layer module.
//!
//! Contains the question generation logic: random sources, digit
//! manipulation, borrowing adjustment, and option synthesis.

pub mod borrowing;
pub mod digits;
pub mod generator;
pub mod options;
pub mod random;

pub use borrowing::adjust_for_borrowing;
pub use generator::QuestionGenerator;
pub use options::generate_options;
pub use random::{RandomSource, RngSource, SequenceRandom};
