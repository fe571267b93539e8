//! Request extractors.

pub mod generation;

pub use generation::ValidatedGeneration;
