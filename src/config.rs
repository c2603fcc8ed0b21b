// Configuration module for reading Agent.toml
// Search mode, depth, time margins, evaluation weights and opening rule are
// fixed at agent construction and never change mid-search.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::eval::EvalKind;
use crate::opening::OpeningPolicy;
use crate::search::SearchMode;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub timing: TimingConfig,
    pub evaluation: EvaluationConfig,
    pub opening: OpeningConfig,
}

/// Search algorithm selection
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub max_depth: u8,
}

/// Time margins, in milliseconds of remaining budget
#[derive(Debug, Deserialize, Clone)]
pub struct TimingConfig {
    /// Below this, a running search stops descending
    pub safety_margin_ms: u64,
    /// Above this, another deepening iteration may start
    pub iteration_margin_ms: u64,
}

/// Evaluation function and its weights
#[derive(Debug, Deserialize, Clone)]
pub struct EvaluationConfig {
    pub kind: EvalKind,
    pub opponent_mobility_weight: f64,
    pub center_weight: f64,
    pub proximity_weight: f64,
    pub bump_penalty: f64,
}

/// Opening shortcut for the first two plies
#[derive(Debug, Deserialize, Clone)]
pub struct OpeningConfig {
    pub policy: OpeningPolicy,
    /// Seed for the random policy; drawn from the OS when absent
    pub seed: Option<u64>,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Agent.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, ConfigError>` - Parsed and validated configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads default configuration from Agent.toml in the project root
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file("Agent.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the values in Agent.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig {
                mode: SearchMode::AlphaBeta,
                max_depth: 50,
            },
            timing: TimingConfig {
                safety_margin_ms: 10,
                iteration_margin_ms: 50,
            },
            evaluation: EvaluationConfig {
                kind: EvalKind::OpenMove,
                opponent_mobility_weight: 2.0,
                center_weight: 1.0,
                proximity_weight: 1.0,
                bump_penalty: 5.0,
            },
            opening: OpeningConfig {
                policy: OpeningPolicy::Fixed,
                seed: None,
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            warn!("Could not load Agent.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_depth == 0 {
            return Err(ConfigError::Validation(
                "search.max_depth must be > 0".into(),
            ));
        }
        if self.timing.iteration_margin_ms < self.timing.safety_margin_ms {
            return Err(ConfigError::Validation(
                "timing.iteration_margin_ms must be >= timing.safety_margin_ms".into(),
            ));
        }
        let weights = [
            self.evaluation.opponent_mobility_weight,
            self.evaluation.center_weight,
            self.evaluation.proximity_weight,
            self.evaluation.bump_penalty,
        ];
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(ConfigError::Validation(
                "evaluation weights must be finite".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.search.max_depth, 50);
        assert_eq!(config.timing.safety_margin_ms, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_agent_toml_can_be_parsed() {
        // This test ensures Agent.toml is valid and can be parsed
        let result = Config::from_file("Agent.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Agent.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Agent.toml").expect("Agent.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        // Search
        assert_eq!(file_config.search.mode, hardcoded_config.search.mode);
        assert_eq!(file_config.search.max_depth, hardcoded_config.search.max_depth);

        // Timing
        assert_eq!(
            file_config.timing.safety_margin_ms,
            hardcoded_config.timing.safety_margin_ms
        );
        assert_eq!(
            file_config.timing.iteration_margin_ms,
            hardcoded_config.timing.iteration_margin_ms
        );

        // Evaluation
        assert_eq!(file_config.evaluation.kind, hardcoded_config.evaluation.kind);
        assert_eq!(
            file_config.evaluation.opponent_mobility_weight,
            hardcoded_config.evaluation.opponent_mobility_weight
        );
        assert_eq!(
            file_config.evaluation.center_weight,
            hardcoded_config.evaluation.center_weight
        );
        assert_eq!(
            file_config.evaluation.proximity_weight,
            hardcoded_config.evaluation.proximity_weight
        );
        assert_eq!(
            file_config.evaluation.bump_penalty,
            hardcoded_config.evaluation.bump_penalty
        );

        // Opening
        assert_eq!(file_config.opening.policy, hardcoded_config.opening.policy);
        assert_eq!(file_config.opening.seed, hardcoded_config.opening.seed);
    }

    #[test]
    fn test_parses_modes_and_seed() {
        let config: Config = toml::from_str(
            r#"
            [search]
            mode = "minimax"
            max_depth = 4

            [timing]
            safety_margin_ms = 5
            iteration_margin_ms = 20

            [evaluation]
            kind = "custom"
            opponent_mobility_weight = 1.5
            center_weight = 0.5
            proximity_weight = 0.0
            bump_penalty = 3.0

            [opening]
            policy = "random"
            seed = 42
            "#,
        )
        .expect("inline config should parse");

        assert_eq!(config.search.mode, SearchMode::Minimax);
        assert_eq!(config.evaluation.kind, EvalKind::Custom);
        assert_eq!(config.opening.policy, OpeningPolicy::Random);
        assert_eq!(config.opening.seed, Some(42));
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = Config::default_hardcoded();
        config.search.max_depth = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_missing_file_returns_error() {
        let result = Config::from_file("nonexistent.toml");
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}
