//! Service configuration
//!
//! Built once at startup and handed to each service; nothing below this layer
//! reads the process environment.

use shared_types::limits::DEFAULT_MAX_INPUT_CHARS;
use shared_types::Limits;

use crate::error::ServiceError;

pub const DEFAULT_PRIMARY_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_FALLBACK_MODEL: &str = "gemini-1.5-pro";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub limits: Limits,
    /// Model the external text-generation capability should try first
    pub primary_model: String,
    /// Model it should fall back to on quota errors
    pub fallback_model: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            primary_model: DEFAULT_PRIMARY_MODEL.to_string(),
            fallback_model: DEFAULT_FALLBACK_MODEL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// Expected variables:
    /// - MAX_INPUT_CHARS: chars kept from each document (default: 60000)
    /// - GEMINI_MODEL: primary model name
    /// - GEMINI_FALLBACK_MODEL: fallback model name
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_input_chars = match lookup("MAX_INPUT_CHARS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ServiceError::Config(format!("MAX_INPUT_CHARS must be a positive integer, got '{}'", raw))
            })?,
            None => DEFAULT_MAX_INPUT_CHARS,
        };
        if max_input_chars == 0 {
            return Err(ServiceError::Config(
                "MAX_INPUT_CHARS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            limits: Limits::default().with_max_input_chars(max_input_chars),
            primary_model: lookup("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_PRIMARY_MODEL.to_string()),
            fallback_model: lookup("GEMINI_FALLBACK_MODEL")
                .unwrap_or_else(|| DEFAULT_FALLBACK_MODEL.to_string()),
        })
    }

    /// Override the input cap
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.limits = self.limits.with_max_input_chars(max_input_chars);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.limits.max_input_chars, 60_000);
    }

    #[test]
    fn test_reads_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("MAX_INPUT_CHARS", "1200"),
            ("GEMINI_MODEL", "model-a"),
            ("GEMINI_FALLBACK_MODEL", "model-b"),
        ]))
        .unwrap();
        assert_eq!(config.limits.max_input_chars, 1200);
        assert_eq!(config.primary_model, "model-a");
        assert_eq!(config.fallback_model, "model-b");
    }

    #[test]
    fn test_rejects_bad_max_chars() {
        let err = ServiceConfig::from_lookup(lookup(&[("MAX_INPUT_CHARS", "lots")])).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));

        let err = ServiceConfig::from_lookup(lookup(&[("MAX_INPUT_CHARS", "0")])).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }
}
