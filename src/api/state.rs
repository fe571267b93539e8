//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use parking_lot::Mutex;
use rand::rngs::StdRng;

use crate::config::AppConfig;
use crate::domain::{GenerationRequest, QuestionSet};
use crate::error::Result;
use crate::service::{QuestionGenerator, RngSource};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Question generation service.
    pub generator: Arc<QuestionGenerator>,
    /// Prometheus handle, present when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
    /// Shared generator used when a seed is configured.
    seeded_rng: Option<Arc<Mutex<RngSource<StdRng>>>>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let generator = Arc::new(QuestionGenerator::new(&config.generator));

        let seeded_rng = config
            .generator
            .seed
            .map(|seed| Arc::new(Mutex::new(RngSource::seeded(seed))));

        Self {
            config,
            generator,
            metrics: None,
            seeded_rng,
        }
    }

    /// Attach a Prometheus handle for the metrics endpoint.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Generate a question set using the configured random source.
    ///
    /// # Errors
    ///
    /// Returns an error if generation exhausts its draw budget.
    pub fn generate(&self, request: &GenerationRequest) -> Result<QuestionSet> {
        let questions = match &self.seeded_rng {
            Some(rng) => self.generator.generate(request, &mut *rng.lock())?,
            None => self.generator.generate(request, &mut RngSource::thread())?,
        };
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_state(seed: u64) -> AppState {
        let mut config = AppConfig::default();
        config.generator.seed = Some(seed);
        AppState::new(Arc::new(config))
    }

    #[test]
    fn test_seeded_states_agree() {
        let request = GenerationRequest::new(8, 5, 3, true).unwrap();
        let first = seeded_state(99).generate(&request).unwrap();
        let second = seeded_state(99).generate(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_state_advances() {
        let state = seeded_state(5);
        let request = GenerationRequest::new(8, 6, 6, false).unwrap();
        let first = state.generate(&request).unwrap();
        let second = state.generate(&request).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_unseeded_state() {
        let state = AppState::new(Arc::new(AppConfig::default()));
        let request = GenerationRequest::new(3, 4, 2, false).unwrap();
        assert_eq!(state.generate(&request).unwrap().len(), 3);
        assert!(state.metrics.is_none());
    }
}
