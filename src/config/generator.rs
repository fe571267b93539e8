//! Question generator configuration.

use config::ConfigError;
use serde::Deserialize;

/// Question generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Largest accepted `questions` parameter.
    #[serde(default = "default_max_questions")]
    pub max_questions: u32,

    /// Operand draws allowed per question before generation fails.
    #[serde(default = "default_max_draw_attempts")]
    pub max_draw_attempts: u32,

    /// Seed for a shared deterministic generator. Unset means thread-local randomness.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Validate the generator configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_questions == 0 {
            return Err(ConfigError::Message(
                "generator.max_questions cannot be 0".to_string(),
            ));
        }
        if self.max_draw_attempts == 0 {
            return Err(ConfigError::Message(
                "generator.max_draw_attempts cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

const fn default_max_questions() -> u32 {
    1000
}

const fn default_max_draw_attempts() -> u32 {
    1000
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
            max_draw_attempts: default_max_draw_attempts(),
            seed: None,
        }
    }
}
