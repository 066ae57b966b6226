//! Scroll controller configuration
//!
//! Two layers:
//! - [`ScrollNavOptions`] - what callers pass in; every field optional,
//!   deserializable from the camelCase JSON shape used by the browser API
//! - [`ScrollNavConfig`] - the immutable, validated configuration a
//!   controller owns after construction
//!
//! # Example
//!
//! ```rust
//! use scroll_nav_core::config::ScrollNavOptions;
//!
//! let config = ScrollNavOptions::new()
//!     .tolerance(12.0)
//!     .show_at_bottom(false)
//!     .resolve(64.0)
//!     .unwrap();
//!
//! assert_eq!(config.start_offset, 64.0);
//! assert_eq!(config.tolerance, 12.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrollNavError};

/// Default minimum offset delta that triggers a transition
pub const DEFAULT_TOLERANCE: f64 = 8.0;

/// Default class applied from construction onward
pub const DEFAULT_BASE_CLASS: &str = "scroll-nav";

/// Default class applied in the fixed state
pub const DEFAULT_FIXED_CLASS: &str = "scroll-nav--fixed";

/// Default class applied in the hidden state
pub const DEFAULT_HIDDEN_CLASS: &str = "scroll-nav--hidden";

// ============================================================================
// Class Names
// ============================================================================

/// Class names identifying the three visual states
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNames {
    /// Applied permanently from construction
    pub base: String,
    /// Applied in the fixed state
    pub fixed: String,
    /// Applied in the hidden state
    pub hidden: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_CLASS.to_string(),
            fixed: DEFAULT_FIXED_CLASS.to_string(),
            hidden: DEFAULT_HIDDEN_CLASS.to_string(),
        }
    }
}

impl ClassNames {
    fn validate(&self) -> Result<()> {
        for (role, name) in [
            ("base", &self.base),
            ("fixed", &self.fixed),
            ("hidden", &self.hidden),
        ] {
            if name.is_empty() {
                return Err(ScrollNavError::InvalidOptions(format!(
                    "classNames.{role} must not be empty"
                )));
            }
            if name.chars().any(char::is_whitespace) {
                return Err(ScrollNavError::InvalidOptions(format!(
                    "classNames.{role} must be a single class, got {name:?}"
                )));
            }
        }

        if self.base == self.fixed || self.base == self.hidden || self.fixed == self.hidden {
            return Err(ScrollNavError::InvalidOptions(
                "classNames.base, classNames.fixed and classNames.hidden must be distinct"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// Partial class name overrides as supplied by callers
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNameOptions {
    pub base: Option<String>,
    pub fixed: Option<String>,
    pub hidden: Option<String>,
}

impl ClassNameOptions {
    fn resolve(self) -> ClassNames {
        let defaults = ClassNames::default();
        ClassNames {
            base: self.base.unwrap_or(defaults.base),
            fixed: self.fixed.unwrap_or(defaults.fixed),
            hidden: self.hidden.unwrap_or(defaults.hidden),
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Caller-supplied options; unset fields fall back to defaults
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollNavOptions {
    /// Threshold below which direction logic is inert
    ///
    /// Defaults to the tracked element's rendered height.
    pub start_offset: Option<f64>,
    /// Minimum offset delta to trigger a transition (default: 8)
    pub tolerance: Option<f64>,
    /// Force the fixed state at the document bottom (default: true)
    pub show_at_bottom: Option<bool>,
    /// Class name overrides
    pub class_names: ClassNameOptions,
}

impl ScrollNavOptions {
    /// Options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from their JSON representation
    ///
    /// `null` and the empty string are treated as "no options".
    pub fn from_json(json: &str) -> Result<Self> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    /// Set the start offset
    pub fn start_offset(mut self, start_offset: f64) -> Self {
        self.start_offset = Some(start_offset);
        self
    }

    /// Set the tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Set whether the document bottom forces the fixed state
    pub fn show_at_bottom(mut self, show_at_bottom: bool) -> Self {
        self.show_at_bottom = Some(show_at_bottom);
        self
    }

    /// Override the base class
    pub fn base_class(mut self, class: impl Into<String>) -> Self {
        self.class_names.base = Some(class.into());
        self
    }

    /// Override the fixed class
    pub fn fixed_class(mut self, class: impl Into<String>) -> Self {
        self.class_names.fixed = Some(class.into());
        self
    }

    /// Override the hidden class
    pub fn hidden_class(mut self, class: impl Into<String>) -> Self {
        self.class_names.hidden = Some(class.into());
        self
    }

    /// Apply defaults and validate
    ///
    /// `element_height` is the tracked element's height measured once at
    /// construction. It only matters when no start offset was given, and it
    /// is not re-read if the element later resizes.
    pub fn resolve(self, element_height: f64) -> Result<ScrollNavConfig> {
        let start_offset = self.start_offset.unwrap_or(element_height);
        if !start_offset.is_finite() {
            return Err(ScrollNavError::InvalidOptions(format!(
                "startOffset must be finite, got {start_offset}"
            )));
        }

        let tolerance = self.tolerance.unwrap_or(DEFAULT_TOLERANCE);
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ScrollNavError::InvalidOptions(format!(
                "tolerance must be a finite number >= 0, got {tolerance}"
            )));
        }

        let class_names = self.class_names.resolve();
        class_names.validate()?;

        Ok(ScrollNavConfig {
            start_offset,
            tolerance,
            show_at_bottom: self.show_at_bottom.unwrap_or(true),
            class_names,
        })
    }
}

// ============================================================================
// Resolved Configuration
// ============================================================================

/// Validated configuration owned by one controller
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollNavConfig {
    /// Threshold below which direction logic is inert
    pub start_offset: f64,
    /// Minimum offset delta to trigger a transition
    pub tolerance: f64,
    /// Force the fixed state at the document bottom
    pub show_at_bottom: bool,
    /// Class names for the three visual states
    pub class_names: ClassNames,
}

impl Default for ScrollNavConfig {
    fn default() -> Self {
        Self {
            start_offset: 0.0,
            tolerance: DEFAULT_TOLERANCE,
            show_at_bottom: true,
            class_names: ClassNames::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_element_height() {
        let config = ScrollNavOptions::new().resolve(72.0).unwrap();
        assert_eq!(config.start_offset, 72.0);
        assert_eq!(config.tolerance, 8.0);
        assert!(config.show_at_bottom);
        assert_eq!(config.class_names, ClassNames::default());
    }

    #[test]
    fn test_explicit_start_offset_wins() {
        let config = ScrollNavOptions::new()
            .start_offset(0.0)
            .resolve(72.0)
            .unwrap();
        assert_eq!(config.start_offset, 0.0);
    }

    #[test]
    fn test_zero_tolerance_is_legal() {
        let config = ScrollNavOptions::new().tolerance(0.0).resolve(0.0).unwrap();
        assert_eq!(config.tolerance, 0.0);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let err = ScrollNavOptions::new().tolerance(-1.0).resolve(0.0);
        assert!(matches!(err, Err(ScrollNavError::InvalidOptions(_))));
    }

    #[test]
    fn test_non_finite_start_offset_rejected() {
        let err = ScrollNavOptions::new().start_offset(f64::NAN).resolve(0.0);
        assert!(matches!(err, Err(ScrollNavError::InvalidOptions(_))));
    }

    #[test]
    fn test_duplicate_class_names_rejected() {
        let err = ScrollNavOptions::new()
            .fixed_class("nav")
            .hidden_class("nav")
            .resolve(0.0);
        assert!(matches!(err, Err(ScrollNavError::InvalidOptions(_))));
    }

    #[test]
    fn test_class_name_with_whitespace_rejected() {
        let err = ScrollNavOptions::new().base_class("nav bar").resolve(0.0);
        assert!(matches!(err, Err(ScrollNavError::InvalidOptions(_))));

        let err = ScrollNavOptions::new().hidden_class("").resolve(0.0);
        assert!(matches!(err, Err(ScrollNavError::InvalidOptions(_))));
    }

    #[test]
    fn test_parse_camel_case_json() {
        let options = ScrollNavOptions::from_json(
            r#"{"startOffset": 120, "tolerance": 4, "showAtBottom": false,
                "classNames": {"fixed": "header--pinned"}}"#,
        )
        .unwrap();

        assert_eq!(options.start_offset, Some(120.0));
        assert_eq!(options.tolerance, Some(4.0));
        assert_eq!(options.show_at_bottom, Some(false));

        let config = options.resolve(0.0).unwrap();
        assert_eq!(config.class_names.base, DEFAULT_BASE_CLASS);
        assert_eq!(config.class_names.fixed, "header--pinned");
        assert_eq!(config.class_names.hidden, DEFAULT_HIDDEN_CLASS);
    }

    #[test]
    fn test_parse_empty_and_null() {
        assert_eq!(ScrollNavOptions::from_json("").unwrap(), ScrollNavOptions::new());
        assert_eq!(ScrollNavOptions::from_json("null").unwrap(), ScrollNavOptions::new());
        assert_eq!(ScrollNavOptions::from_json("{}").unwrap(), ScrollNavOptions::new());
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let err = ScrollNavOptions::from_json(r#"{"tolerance": "large"}"#);
        assert!(matches!(err, Err(ScrollNavError::Parse(_))));
    }
}
