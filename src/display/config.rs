//! Display settings for record printing.

use crate::error::{EdaError, Result};
use serde::{Deserialize, Serialize};

/// Line printed after each record: `ch` repeated `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
    pub ch: char,
    pub count: usize,
}

impl Default for Separator {
    fn default() -> Self {
        Self { ch: '-', count: 100 }
    }
}

impl Separator {
    /// The rendered separator line.
    pub fn line(&self) -> String {
        std::iter::repeat(self.ch).take(self.count).collect()
    }
}

/// How records are laid out when printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width used for wrapping and for aligning short values.
    pub wrap_width: usize,
    /// Print one aligned, truncated line per field instead of wrapping.
    pub truncate: bool,
    /// Maximum value width in truncating mode.
    pub max_colwidth: usize,
    /// Separator printed after each record.
    pub separator: Separator,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            wrap_width: 100,
            truncate: false,
            max_colwidth: 50,
            separator: Separator::default(),
        }
    }
}

impl DisplayConfig {
    /// Check that widths are usable.
    pub fn validate(&self) -> Result<()> {
        if self.wrap_width == 0 {
            return Err(EdaError::InvalidArgument(
                "Wrap width must be at least 1".to_string(),
            ));
        }
        if self.max_colwidth == 0 {
            return Err(EdaError::InvalidArgument(
                "Maximum column width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.wrap_width, 100);
        assert!(!config.truncate);
        assert_eq!(config.separator.line(), "-".repeat(100));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: DisplayConfig = serde_yaml::from_str("wrap_width: 60\ntruncate: true\n").unwrap();
        assert_eq!(config.wrap_width, 60);
        assert!(config.truncate);
        assert_eq!(config.max_colwidth, 50);
        assert_eq!(config.separator, Separator::default());
    }

    #[test]
    fn test_validate() {
        assert!(DisplayConfig::default().validate().is_ok());
        let config = DisplayConfig {
            wrap_width: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EdaError::InvalidArgument(_))));
    }
}
