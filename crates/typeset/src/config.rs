//! Loading typography configuration and breakpoint tables from YAML or JSON.
//!
//! A configuration document is either the literal `false`, which disables
//! the subsystem, or a mapping of [`TypographyOptions`]. `true` and an empty
//! document both mean "enabled with defaults".
//!
//! ```rust
//! use typeset::TypographyConfig;
//!
//! assert!(TypographyConfig::from_yaml("false").unwrap().is_disabled());
//!
//! let config = TypographyConfig::from_yaml("prefix: app-\nscoped: true\n").unwrap();
//! assert_eq!(config.options().unwrap().prefix.as_deref(), Some("app-"));
//! ```
//!
//! Files are recognised by extension, see [`CONFIG_EXTENSIONS`].

use std::path::Path;

use typeset_css::BreakpointTable;

use crate::error::TypographyError;
use crate::options::TypographyOptions;

/// Recognized configuration file extensions.
pub const CONFIG_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Whether the typography subsystem is enabled, and with which options.
#[derive(Debug, Clone, PartialEq)]
pub enum TypographyConfig {
    /// No instance is created.
    Disabled,
    /// An instance is created from these (possibly empty) options.
    Enabled(TypographyOptions),
}

impl TypographyConfig {
    pub fn is_disabled(&self) -> bool {
        matches!(self, TypographyConfig::Disabled)
    }

    /// Returns the options when enabled.
    pub fn options(&self) -> Option<&TypographyOptions> {
        match self {
            TypographyConfig::Enabled(options) => Some(options),
            TypographyConfig::Disabled => None,
        }
    }

    /// Parses a YAML configuration document.
    pub fn from_yaml(yaml: &str) -> Result<Self, TypographyError> {
        let root: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| TypographyError::parse(e.to_string()))?;
        match root {
            serde_yaml::Value::Null | serde_yaml::Value::Bool(true) => Ok(Self::default()),
            serde_yaml::Value::Bool(false) => Ok(TypographyConfig::Disabled),
            value => serde_yaml::from_value(value)
                .map(TypographyConfig::Enabled)
                .map_err(|e| TypographyError::parse(e.to_string())),
        }
    }

    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, TypographyError> {
        let root: serde_json::Value =
            serde_json::from_str(json).map_err(|e| TypographyError::parse(e.to_string()))?;
        match root {
            serde_json::Value::Null | serde_json::Value::Bool(true) => Ok(Self::default()),
            serde_json::Value::Bool(false) => Ok(TypographyConfig::Disabled),
            value => serde_json::from_value(value)
                .map(TypographyConfig::Enabled)
                .map_err(|e| TypographyError::parse(e.to_string())),
        }
    }

    /// Loads a configuration file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`TypographyError::Load`] if the file cannot be read or has an
    /// unrecognized extension, and [`TypographyError::Parse`] (carrying the
    /// path) if its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TypographyError> {
        let path = path.as_ref();
        let content = read_config(path)?;
        let parsed = match format_of(path)? {
            Format::Yaml => Self::from_yaml(&content),
            Format::Json => Self::from_json(&content),
        };
        parsed.map_err(|e| e.at_path(path))
    }
}

impl Default for TypographyConfig {
    fn default() -> Self {
        TypographyConfig::Enabled(TypographyOptions::default())
    }
}

impl From<TypographyOptions> for TypographyConfig {
    fn from(options: TypographyOptions) -> Self {
        TypographyConfig::Enabled(options)
    }
}

impl From<bool> for TypographyConfig {
    fn from(enabled: bool) -> Self {
        if enabled {
            TypographyConfig::default()
        } else {
            TypographyConfig::Disabled
        }
    }
}

impl From<Option<TypographyOptions>> for TypographyConfig {
    fn from(options: Option<TypographyOptions>) -> Self {
        TypographyConfig::Enabled(options.unwrap_or_default())
    }
}

/// Loads a breakpoint table (`name: width` mapping) from a YAML or JSON file.
pub fn load_breakpoints<P: AsRef<Path>>(path: P) -> Result<BreakpointTable, TypographyError> {
    let path = path.as_ref();
    let content = read_config(path)?;
    let parsed = match format_of(path)? {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| TypographyError::Parse {
        path: Some(path.to_path_buf()),
        message,
    })
}

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> Result<Format, TypographyError> {
    let name = path.to_string_lossy();
    match CONFIG_EXTENSIONS.iter().find(|ext| name.ends_with(*ext)) {
        Some(&".json") => Ok(Format::Json),
        Some(_) => Ok(Format::Yaml),
        None => Err(TypographyError::Load {
            message: format!(
                "Unrecognized extension for {} (expected one of {})",
                path.display(),
                CONFIG_EXTENSIONS.join(", ")
            ),
        }),
    }
}

fn read_config(path: &Path) -> Result<String, TypographyError> {
    std::fs::read_to_string(path).map_err(|e| TypographyError::Load {
        message: format!("Failed to read {}: {}", path.display(), e),
    })
}
