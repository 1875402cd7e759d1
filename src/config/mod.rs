//! Run configuration: optional `blurfill.toml` merged with CLI arguments.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [rewrite] section + validation
//! ├── error      # ConfigError
//! ├── util       # config discovery, path resolution
//! └── mod.rs     # RunConfig (this file)
//! ```
//!
//! Precedence is CLI argument > config file > built-in default.

mod error;
mod section;
mod util;

pub use error::ConfigError;
use section::RewriteConfig;

use util::{find_config_file, resolve_against};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file name looked up when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "blurfill.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blurfill.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunConfig {
    /// Absolute path to the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory config-relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Report without writing (CLI only)
    #[serde(skip)]
    pub dry_run: bool,

    /// Rewrite settings
    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl RunConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing default config
    /// is fine; a missing file named explicitly with `--config` is not.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        crate::logger::set_verbose(cli.verbose);

        let config_name = cli
            .config
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CONFIG_NAME));

        let mut config = match find_config_file(config_name, cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None if cli.config.is_some() => {
                let path = resolve_against(cwd, config_name);
                let err = std::io::Error::from(std::io::ErrorKind::NotFound);
                return Err(ConfigError::Io(path, err).into());
            }
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG_NAME);
                Self {
                    root: cwd.to_path_buf(),
                    ..Self::default()
                }
            }
        };

        config.resolve_files();
        config.apply_cli(cli, cwd);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "{}", Self::unknown_fields_message(fields, path));
    }

    /// Warning text: header line followed by one `- field` line per field.
    fn unknown_fields_message(fields: &[String], path: &Path) -> String {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());

        let mut message = format!("unknown fields in {display_path}, ignoring:");
        for field in fields {
            message.push_str("\n- ");
            message.push_str(field);
        }
        message
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Make `[rewrite] files` absolute, relative to the config file.
    fn resolve_files(&mut self) {
        for file in &mut self.rewrite.files {
            *file = resolve_against(&self.root, file);
        }
    }

    /// Apply CLI arguments on top of the file values.
    fn apply_cli(&mut self, cli: &Cli, cwd: &Path) {
        Self::update_option(&mut self.rewrite.height_class, cli.height_class.as_ref());
        Self::update_option(&mut self.rewrite.img_class, cli.img_class.as_ref());
        self.dry_run = cli.dry_run;

        // CLI paths replace the configured list, relative to cwd
        if !cli.paths.is_empty() {
            self.rewrite.files = cli
                .paths
                .iter()
                .map(|path| resolve_against(cwd, path))
                .collect();
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.rewrite.validate();
        if self.rewrite.files.is_empty() {
            errors.push("no input files: pass PATH arguments or set [rewrite] files".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Files to rewrite, in order.
    pub fn files(&self) -> &[PathBuf] {
        &self.rewrite.files
    }

    /// Path for display: relative to the root when possible.
    pub fn root_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
pub fn test_parse_config(content: &str) -> RunConfig {
    let (parsed, ignored) = RunConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}
