//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/jdlib/jdlib.toml` (or an explicit file)
//! 3. Environment variables: `JD_*` prefix (`JD_ROOT`, `JD_INDENT_WIDTH`, ...)
//! 4. Command-line flags, applied by the CLI layer

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for jdlib.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Root of the Johnny Decimal library (default: ~/jd)
    pub root: PathBuf,
    /// Spaces per tree level
    pub indent_width: usize,
    /// Indent the tree with tabs instead of spaces
    pub use_tabs: bool,
    /// Include files when printing the tree
    pub show_files: bool,
    /// Create `<name>.md` inside new identifiers
    pub placeholder: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: default_root(),
            indent_width: 4,
            use_tabs: false,
            show_files: false,
            placeholder: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub root: Option<PathBuf>,
    pub indent_width: Option<usize>,
    pub use_tabs: Option<bool>,
    pub show_files: Option<bool>,
    pub placeholder: Option<bool>,
}

fn default_root() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join("jd"))
        .unwrap_or_else(|| PathBuf::from("~/jd"))
}

/// Get the XDG config directory for jdlib.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jdlib").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("jdlib.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in the root path.
    fn expand_paths(&mut self) {
        let expanded = expand_path(self.root.to_string_lossy().as_ref());
        self.root = PathBuf::from(expanded);
    }

    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            root: overlay.root.clone().unwrap_or_else(|| self.root.clone()),
            indent_width: overlay.indent_width.unwrap_or(self.indent_width),
            use_tabs: overlay.use_tabs.unwrap_or(self.use_tabs),
            show_files: overlay.show_files.unwrap_or(self.show_files),
            placeholder: overlay.placeholder.unwrap_or(self.placeholder),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; must exist when given.
    ///   Without it the global file is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                Self::from_file(path)?
            }
            None => match global_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Defaults overlaid with a single TOML file, no environment.
    pub fn from_file(path: &Path) -> Result<Self, ApplicationError> {
        debug!("from_file: {}", path.display());
        let raw = load_raw_settings(path)?;
        let mut settings = Self::default().merge_with(&raw);
        settings.expand_paths();
        Ok(settings)
    }

    /// Apply JD_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        settings.with_env(None)
    }

    /// Overlay `JD_*` variables from `source`, or from the process
    /// environment when `None`. Values that fail to parse are errors.
    pub fn with_env(self, source: Option<Map<String, String>>) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("JD")
                    .prefix_separator("_")
                    .separator("__")
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        let overlay = RawSettings {
            root: env_value::<String>(&config, "root")?.map(PathBuf::from),
            indent_width: env_value(&config, "indent_width")?,
            use_tabs: env_value(&config, "use_tabs")?,
            show_files: env_value(&config, "show_files")?,
            placeholder: env_value(&config, "placeholder")?,
        };
        debug!("env overlay: {:?}", overlay);
        Ok(self.merge_with(&overlay))
    }

    /// Replace the root with an expanded command-line value.
    pub fn with_root(mut self, root: &Path) -> Self {
        self.root = PathBuf::from(expand_path(&root.to_string_lossy()));
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# jdlib configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/jdlib/jdlib.toml
#   Env:    JD_* environment variables (JD_ROOT, JD_INDENT_WIDTH, ...)
#   Flags:  --jd-root on the command line

# Root of the Johnny Decimal library
# root = "~/jd"

# Tree printing
# indent_width = 4
# use_tabs = false
# show_files = false

# Create an empty <name>.md inside every new identifier
# placeholder = false
"#
        .to_string()
    }
}

/// `None` when unset, an error when set but unparsable.
fn env_value<T: serde::de::DeserializeOwned>(
    config: &Config,
    key: &str,
) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("JD_{}: {}", key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_then_root_is_jd_in_home() {
        let settings = Settings::default();
        assert!(settings.root.ends_with("jd"));
        assert_eq!(settings.indent_width, 4);
        assert!(!settings.use_tabs);
    }

    #[test]
    fn given_tilde_in_root_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            root: PathBuf::from("~/jd"),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let root = settings.root.to_string_lossy();
        assert!(root.starts_with(&home), "root should start with home dir: {}", root);
        assert!(!root.contains('~'), "root should not contain tilde: {}", root);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_kept() {
        let base = Settings::default();
        let overlay = RawSettings {
            indent_width: Some(2),
            use_tabs: Some(true),
            ..RawSettings::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.indent_width, 2);
        assert!(merged.use_tabs);
        assert_eq!(merged.root, base.root);
        assert_eq!(merged.placeholder, base.placeholder);
    }

    #[test]
    fn given_settings_when_to_toml_then_contains_fields() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("root ="));
        assert!(toml.contains("indent_width = 4"));
    }

    #[test]
    fn given_template_when_parsed_then_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.root.is_none());
    }
}
