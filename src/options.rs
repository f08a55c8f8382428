// ⚙️ Validator Options - configuration for amount validators
// Built in code with the with_* builders, or loaded from JSON

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::precision::smallest_step;

/// Largest integer an f64 represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// ============================================================================
// ERROR MESSAGES
// ============================================================================

/// Caller-supplied overrides for the default failure messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<String>,

    /// Also used for non-finite input
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub whole: Option<String>,
}

// ============================================================================
// AMOUNT OPTIONS
// ============================================================================

/// Options accepted by every amount validator factory.
///
/// Keys use camelCase on the wire (`allowZero`, `errorMessages`) so option
/// objects coming from form definitions deserialize unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Maximum number of fractional digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,

    pub allow_zero: bool,

    pub error_messages: ErrorMessages,
}

impl AmountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: explicit lower bound
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Builder: explicit upper bound
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Builder: maximum decimal places
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Builder: let zero through the default minimum
    pub fn allow_zero(mut self, allow: bool) -> Self {
        self.allow_zero = allow;
        self
    }

    pub fn with_error_messages(mut self, messages: ErrorMessages) -> Self {
        self.error_messages = messages;
        self
    }

    pub fn with_min_message(mut self, message: impl Into<String>) -> Self {
        self.error_messages.min = Some(message.into());
        self
    }

    pub fn with_max_message(mut self, message: impl Into<String>) -> Self {
        self.error_messages.max = Some(message.into());
        self
    }

    pub fn with_decimals_message(mut self, message: impl Into<String>) -> Self {
        self.error_messages.decimals = Some(message.into());
        self
    }

    pub fn with_type_message(mut self, message: impl Into<String>) -> Self {
        self.error_messages.type_ = Some(message.into());
        self
    }

    /// Effective lower bound after applying defaults
    ///
    /// Explicit `min` wins. Otherwise zero when allowed, else the smallest step
    /// for the configured decimals, else machine epsilon.
    pub fn effective_minimum(&self) -> f64 {
        if let Some(min) = self.min {
            return min;
        }
        if self.allow_zero {
            return 0.0;
        }
        match self.decimals {
            Some(decimals) => smallest_step(decimals),
            None => f64::EPSILON,
        }
    }

    /// Effective upper bound after applying defaults
    pub fn effective_maximum(&self) -> f64 {
        self.max.unwrap_or(MAX_SAFE_INTEGER)
    }

    /// Parse options from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: AmountOptions =
            serde_json::from_str(json).context("Failed to parse amount options JSON")?;
        log::debug!("Loaded amount options: {:?}", options);
        Ok(options)
    }

    /// Load options from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read options file: {:?}", path.as_ref()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Invalid options file: {:?}", path.as_ref()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_minimum_is_epsilon() {
        let options = AmountOptions::new();
        assert_eq!(options.effective_minimum(), f64::EPSILON);
        assert_eq!(options.effective_maximum(), MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_minimum_follows_decimals() {
        assert_eq!(AmountOptions::new().with_decimals(2).effective_minimum(), 0.01);
        assert_eq!(AmountOptions::new().with_decimals(18).effective_minimum(), 1e-18);
        assert_eq!(AmountOptions::new().with_decimals(0).effective_minimum(), 1.0);
    }

    #[test]
    fn test_allow_zero_drops_minimum_to_zero() {
        let options = AmountOptions::new().with_decimals(2).allow_zero(true);
        assert_eq!(options.effective_minimum(), 0.0);
    }

    #[test]
    fn test_explicit_min_wins_over_allow_zero() {
        let options = AmountOptions::new().with_min(5.0).allow_zero(true);
        assert_eq!(options.effective_minimum(), 5.0);
    }

    #[test]
    fn test_from_json_uses_camel_case() {
        let options = AmountOptions::from_json_str(
            r#"{"min": 10, "max": 1000, "decimals": 2, "allowZero": true,
                "errorMessages": {"min": "too small", "type": "numbers only"}}"#,
        )
        .unwrap();

        assert_eq!(options.min, Some(10.0));
        assert_eq!(options.max, Some(1000.0));
        assert_eq!(options.decimals, Some(2));
        assert!(options.allow_zero);
        assert_eq!(options.error_messages.min.as_deref(), Some("too small"));
        assert_eq!(options.error_messages.type_.as_deref(), Some("numbers only"));
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(AmountOptions::from_json_str("{}").unwrap(), AmountOptions::default());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(AmountOptions::from_json_str("not json").is_err());
        assert!(AmountOptions::from_json_str(r#"{"decimals": -1}"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"decimals": 18}}"#).unwrap();

        let options = AmountOptions::from_file(file.path()).unwrap();
        assert_eq!(options.decimals, Some(18));
    }

    #[test]
    fn test_from_missing_file() {
        let err = AmountOptions::from_file("/nonexistent/options.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read options file"));
    }
}
