//! Configuration module for the Widgetboard console.
//!
//! This module handles parsing configuration from environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `WIDGETBOARD_ID_STRATEGY` | No | `sequential` | Widget id generator: `sequential` or `random` |
//! | `WIDGETBOARD_ID_PREFIX` | No | `widget` | Prefix for sequential ids |
//! | `WIDGETBOARD_OUTPUT` | No | `text` | Output format: `text` or `json` |
//! | `WIDGETBOARD_PROMPT` | No | `> ` | Prompt shown by the interactive shell |
//!
//! # Example
//!
//! ```no_run
//! use widgetboard_console::config::Config;
//!
//! let config = Config::from_env().expect("Failed to load configuration");
//! println!("Output: {:?}", config.output);
//! ```

use std::env;

use thiserror::Error;
use widgetboard_core::ids::{IdGenerator, RandomIds, SequentialIds, DEFAULT_SEQUENTIAL_PREFIX};

/// Default interactive prompt.
const DEFAULT_PROMPT: &str = "> ";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// How new widget identifiers are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `<prefix>-1`, `<prefix>-2`, ...
    #[default]
    Sequential,
    /// `wgt_` followed by 20 random alphanumeric characters.
    Random,
}

/// How the console prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}

/// Configuration for the Widgetboard console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Widget id generator to inject into the store.
    pub id_strategy: IdStrategy,

    /// Prefix used by the sequential generator. Never empty.
    pub id_prefix: String,

    /// Output format for command results.
    pub output: OutputFormat,

    /// Prompt printed before each line when the shell is interactive.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            id_prefix: DEFAULT_SEQUENTIAL_PREFIX.to_string(),
            output: OutputFormat::default(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Creates a new `Config` by parsing environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - `WIDGETBOARD_ID_STRATEGY` is neither `sequential` nor `random`
    /// - `WIDGETBOARD_ID_PREFIX` is set but blank
    /// - `WIDGETBOARD_OUTPUT` is neither `text` nor `json`
    pub fn from_env() -> Result<Self, ConfigError> {
        // Optional: WIDGETBOARD_ID_STRATEGY (default: sequential)
        let id_strategy = match env::var("WIDGETBOARD_ID_STRATEGY") {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "sequential" => IdStrategy::Sequential,
                "random" => IdStrategy::Random,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "WIDGETBOARD_ID_STRATEGY".to_string(),
                        message: format!("expected 'sequential' or 'random', got '{val}'"),
                    })
                }
            },
            Err(_) => IdStrategy::default(),
        };

        // Optional: WIDGETBOARD_ID_PREFIX (default: widget, must not be blank)
        let id_prefix = match env::var("WIDGETBOARD_ID_PREFIX") {
            Ok(val) => {
                let trimmed = val.trim();
                if trimmed.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: "WIDGETBOARD_ID_PREFIX".to_string(),
                        message: "prefix cannot be empty".to_string(),
                    });
                }
                trimmed.to_string()
            }
            Err(_) => DEFAULT_SEQUENTIAL_PREFIX.to_string(),
        };

        // Optional: WIDGETBOARD_OUTPUT (default: text)
        let output = match env::var("WIDGETBOARD_OUTPUT") {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "WIDGETBOARD_OUTPUT".to_string(),
                        message: format!("expected 'text' or 'json', got '{val}'"),
                    })
                }
            },
            Err(_) => OutputFormat::default(),
        };

        // Optional: WIDGETBOARD_PROMPT (default: "> ")
        let prompt = env::var("WIDGETBOARD_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        Ok(Self {
            id_strategy,
            id_prefix,
            output,
            prompt,
        })
    }

    /// Builds the id generator selected by this configuration.
    #[must_use]
    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Sequential => Box::new(SequentialIds::new(self.id_prefix.as_str())),
            IdStrategy::Random => Box::new(RandomIds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper to run tests with isolated environment variables.
    /// Clears all WIDGETBOARD_* vars before the test and restores them after.
    fn with_clean_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let saved_vars: Vec<(String, String)> = env::vars()
            .filter(|(k, _)| k.starts_with("WIDGETBOARD_"))
            .collect();

        for (key, _) in &saved_vars {
            env::remove_var(key);
        }

        let result = f();

        // Drop anything the test set, then restore the originals
        let test_vars: Vec<String> = env::vars()
            .map(|(k, _)| k)
            .filter(|k| k.starts_with("WIDGETBOARD_"))
            .collect();
        for key in test_vars {
            env::remove_var(key);
        }
        for (key, value) in saved_vars {
            env::set_var(key, value);
        }

        result
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        with_clean_env(|| {
            let config = Config::from_env().expect("should parse empty environment");
            assert_eq!(config, Config::default());
            assert_eq!(config.id_prefix, "widget");
            assert_eq!(config.prompt, "> ");
        });
    }

    #[test]
    #[serial]
    fn test_full_config() {
        with_clean_env(|| {
            env::set_var("WIDGETBOARD_ID_STRATEGY", "Random");
            env::set_var("WIDGETBOARD_ID_PREFIX", " card ");
            env::set_var("WIDGETBOARD_OUTPUT", "JSON");
            env::set_var("WIDGETBOARD_PROMPT", "wb> ");

            let config = Config::from_env().expect("should parse full config");

            assert_eq!(config.id_strategy, IdStrategy::Random);
            assert_eq!(config.id_prefix, "card");
            assert_eq!(config.output, OutputFormat::Json);
            assert_eq!(config.prompt, "wb> ");
        });
    }

    #[test]
    #[serial]
    fn test_invalid_id_strategy() {
        with_clean_env(|| {
            env::set_var("WIDGETBOARD_ID_STRATEGY", "clock");

            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, ref message }
                    if key == "WIDGETBOARD_ID_STRATEGY" && message.contains("'clock'")
            ));
        });
    }

    #[test]
    #[serial]
    fn test_blank_prefix_rejected() {
        with_clean_env(|| {
            env::set_var("WIDGETBOARD_ID_PREFIX", "   ");

            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, ref message }
                    if key == "WIDGETBOARD_ID_PREFIX" && message.contains("cannot be empty")
            ));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        with_clean_env(|| {
            env::set_var("WIDGETBOARD_OUTPUT", "xml");

            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, .. } if key == "WIDGETBOARD_OUTPUT"
            ));
        });
    }

    #[test]
    fn test_sequential_generator_uses_prefix() {
        let config = Config {
            id_prefix: "card".to_string(),
            ..Config::default()
        };
        let mut ids = config.id_generator();
        assert_eq!(ids.next_id(), "card-1");
    }

    #[test]
    fn test_random_generator_format() {
        let config = Config {
            id_strategy: IdStrategy::Random,
            ..Config::default()
        };
        assert!(config.id_generator().next_id().starts_with("wgt_"));
    }
}
