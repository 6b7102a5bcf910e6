//! Suggestion display configuration.
//!
//! Controls how many completions are shown after each keystroke and how they
//! are laid out.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound on `max_suggestions`, keeps a redraw within one screen
const MAX_SUGGESTIONS_LIMIT: usize = 100;

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Number of suggestions shown after each keystroke
    pub max_suggestions: usize,

    /// Whether definitions are printed next to suggested words
    pub show_definitions: bool,

    /// Line printed above the suggestion list
    pub header: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 2,
            show_definitions: true,
            header: "Top Suggestions:".to_string(),
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions == 0 || self.max_suggestions > MAX_SUGGESTIONS_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "display.max_suggestions".to_string(),
                message: format!("must be between 1 and {MAX_SUGGESTIONS_LIMIT}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display_is_valid() {
        let display = DisplayConfig::default();
        assert_eq!(display.max_suggestions, 2);
        assert!(display.validate().is_ok());
    }

    #[test]
    fn test_max_suggestions_bounds() {
        let mut display = DisplayConfig {
            max_suggestions: 0,
            ..Default::default()
        };
        assert!(matches!(
            display.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));

        display.max_suggestions = MAX_SUGGESTIONS_LIMIT;
        assert!(display.validate().is_ok());

        display.max_suggestions = MAX_SUGGESTIONS_LIMIT + 1;
        assert!(display.validate().is_err());
    }
}
