//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the settings types built
//! from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `BARRELIZE__<SECTION>__<KEY>`
//! 3. Config file: `--config`, else `.barrelize.toml` in the CWD, else the
//!    per-user config file
//! 4. Built-in defaults (always present)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use barrelize_core::domain::{ExclusionList, GeneratorSettings, OrganizeSettings};

use crate::error::{CliError, CliResult};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".barrelize.toml";

/// Environment prefix; nested keys are separated by `__`.
const ENV_PREFIX: &str = "BARRELIZE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where flat component files live and what they look like.
    pub organize: OrganizeConfig,
    /// `copy-config` source and exclusions.
    pub copy: CopyConfig,
    /// The external component generator used by `add`.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizeConfig {
    pub root: PathBuf,
    pub extension: String,
    pub index_extension: String,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        let defaults = OrganizeSettings::default();
        Self {
            root: defaults.root,
            extension: defaults.extension,
            index_extension: defaults.index_extension,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    pub source: PathBuf,
    pub exclude: Vec<String>,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(".claude"),
            exclude: ExclusionList::default().names().to_vec(),
        }
    }
}

/// Generator command line.
///
/// `env` entries are `NAME=value` strings so variable names keep their case
/// through every config source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let defaults = GeneratorSettings::default();
        Self {
            program: defaults.program,
            args: defaults.args,
            env: defaults
                .env
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of defaults.
    ///
    /// An explicit `config_file` must exist; a discovered one is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = ::config::Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(::config::File::from(path.as_path()).required(true));
            }
            None => {
                if let Some(path) = Self::discover() {
                    tracing::debug!(path = %path.display(), "Using discovered config file");
                    builder = builder.add_source(::config::File::from(path).required(false));
                }
            }
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("copy.exclude")
                .with_list_parse_key("generator.args")
                .with_list_parse_key("generator.env"),
        );

        let loaded = builder.build().context("Failed to read configuration")?;
        loaded
            .try_deserialize()
            .context("Configuration has an unexpected shape")
    }

    /// First existing config file: local, then per-user.
    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::global_config_path().filter(|p| p.is_file())
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "barrelize", "barrelize")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file this run reads (or would read) its configuration from.
    pub fn config_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(Self::discover)
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Organizer settings, before CLI overrides.
    pub fn organize_settings(&self) -> OrganizeSettings {
        OrganizeSettings {
            root: self.organize.root.clone(),
            extension: self.organize.extension.clone(),
            index_extension: self.organize.index_extension.clone(),
        }
    }

    pub fn exclusions(&self) -> ExclusionList {
        ExclusionList::new(self.copy.exclude.iter().cloned())
    }

    /// Generator settings; fails on an `env` entry without `=`.
    pub fn generator_settings(&self) -> CliResult<GeneratorSettings> {
        let env = self
            .generator
            .env
            .iter()
            .map(|entry| {
                entry
                    .split_once('=')
                    .filter(|(name, _)| !name.trim().is_empty())
                    .map(|(name, value)| (name.trim().to_owned(), value.to_owned()))
                    .ok_or_else(|| CliError::ConfigError {
                        message: format!("generator.env entry '{entry}' is not NAME=value"),
                        source: None,
                    })
            })
            .collect::<CliResult<BTreeMap<_, _>>>()?;

        Ok(GeneratorSettings {
            program: self.generator.program.clone(),
            args: self.generator.args.clone(),
            env,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_core_settings() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.organize_settings(), OrganizeSettings::default());
        assert_eq!(cfg.generator_settings().unwrap(), GeneratorSettings::default());
        assert_eq!(cfg.copy.exclude, ["settings.local.json"]);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("barrelize.toml");
        fs::write(
            &path,
            "[organize]\nroot = \"src/components\"\nextension = \"jsx\"\n\n\
             [generator]\nprogram = \"npx\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.organize.root, PathBuf::from("src/components"));
        assert_eq!(cfg.organize.extension, "jsx");
        // Unset keys keep their defaults.
        assert_eq!(cfg.organize.index_extension, "ts");
        assert_eq!(cfg.generator.program, "npx");
        assert_eq!(cfg.generator.args, ["shadcn", "add"]);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_env_entry_is_config_error() {
        let mut cfg = AppConfig::default();
        cfg.generator.env = vec!["NO_EQUALS_SIGN".into()];
        assert!(matches!(
            cfg.generator_settings(),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn env_entries_keep_case() {
        let mut cfg = AppConfig::default();
        cfg.generator.env = vec!["Mixed_Case=a=b".into()];
        let settings = cfg.generator_settings().unwrap();
        assert_eq!(settings.env.get("Mixed_Case").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn explicit_config_path_wins() {
        let p = AppConfig::config_path(Some(Path::new("custom.toml")));
        assert_eq!(p, PathBuf::from("custom.toml"));
    }
}
