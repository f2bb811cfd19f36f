//! Configuration types for navtree processing.
//!
//! This module provides configuration structures that control how index
//! files are formatted and linted. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining format and lint settings.
//! - [`FormatConfig`] - Controls the canonical output format of the writer.
//! - [`LintConfig`] - Controls the structural lints.
//!
//! # Example
//!
//! ```
//! # use navtree::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.format().indent_width(), 4);
//! ```

use serde::Deserialize;

/// Top-level application configuration combining format and lint settings.
///
/// Groups [`FormatConfig`] and [`LintConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Format configuration section.
    #[serde(default)]
    format: FormatConfig,

    /// Lint configuration section.
    #[serde(default)]
    lint: LintConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified format and lint configurations.
    ///
    /// # Arguments
    ///
    /// * `format` - Output format settings for the writer.
    /// * `lint` - Structural lint settings.
    pub fn new(format: FormatConfig, lint: LintConfig) -> Self {
        Self { format, lint }
    }

    /// Returns the format configuration.
    pub fn format(&self) -> &FormatConfig {
        &self.format
    }

    /// Returns the lint configuration.
    pub fn lint(&self) -> &LintConfig {
        &self.lint
    }
}

/// Output format configuration for the writer.
///
/// The defaults reproduce the generator's own formatting byte-for-byte:
/// 4-space indentation and no trailing newline after the final `];`.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    /// Spaces of indentation per nesting depth.
    #[serde(default = "default_indent_width")]
    indent_width: usize,

    /// Whether to emit a newline after the final `];`.
    #[serde(default)]
    trailing_newline: bool,
}

impl FormatConfig {
    /// Creates a new [`FormatConfig`].
    pub fn new(indent_width: usize, trailing_newline: bool) -> Self {
        Self {
            indent_width,
            trailing_newline,
        }
    }

    /// Spaces of indentation per nesting depth.
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Whether a newline follows the final `];`.
    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            trailing_newline: false,
        }
    }
}

fn default_indent_width() -> usize {
    4
}

/// Structural lint configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LintConfig {
    /// Expected number of member sections (sorted runs after the compound
    /// prefix). When set, a differing derived count is an error: breaking
    /// the alphabetical order inside a group splits it into extra runs.
    #[serde(default)]
    expected_member_sections: Option<usize>,
}

impl LintConfig {
    /// Creates a new [`LintConfig`].
    pub fn new(expected_member_sections: Option<usize>) -> Self {
        Self {
            expected_member_sections,
        }
    }

    /// Expected number of member sections, if configured.
    pub fn expected_member_sections(&self) -> Option<usize> {
        self.expected_member_sections
    }
}
