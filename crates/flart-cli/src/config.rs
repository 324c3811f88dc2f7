//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`GenerationConfig`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--style`, `--state`; applied at the call-site)
//! 2. Environment variables (`FLART_PROJECTDIR`, `FLART_MODELS__USEFREEZED`, ...)
//! 3. Config file (`flart_config.json` or `--config FILE`)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use flart_core::domain::{GenerationConfig, SerializationStyle, StateManagement};

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "flart_config.json";

/// Prefix of the environment overrides.
const ENV_PREFIX: &str = "FLART";

/// Persisted configuration, serialized in the `flart_config.json` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Flutter project root; `~/` and relative paths are resolved on use.
    #[serde(rename = "projectDir", alias = "projectdir")]
    pub project_dir: String,
    pub models: ModelsConfig,
    pub screens: ScreensConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    #[serde(rename = "useFreezed", alias = "usefreezed")]
    pub use_freezed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreensConfig {
    #[serde(rename = "useCubit", alias = "usecubit")]
    pub use_cubit: bool,
    #[serde(rename = "useFreezed", alias = "usefreezed")]
    pub use_freezed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_dir: ".".into(),
            models: ModelsConfig::default(),
            screens: ScreensConfig::default(),
        }
    }
}

// ── Environment overrides ─────────────────────────────────────────────────────

// The environment source lowercases its keys, so it is read into its own
// all-optional shape and merged after the file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Overrides {
    #[serde(rename = "projectdir")]
    project_dir: Option<String>,
    models: ModelOverrides,
    screens: ScreenOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModelOverrides {
    #[serde(rename = "usefreezed")]
    use_freezed: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScreenOverrides {
    #[serde(rename = "usecubit")]
    use_cubit: Option<bool>,
    #[serde(rename = "usefreezed")]
    use_freezed: Option<bool>,
}

impl AppConfig {
    /// Load configuration from the file and the process environment.
    ///
    /// A missing default file yields the defaults; a missing file named with
    /// `--config` is an error.
    #[instrument(skip_all)]
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let path = Self::config_path(config_file);
        let mut config = Self::from_file(&path, config_file.is_some())?;
        config.apply(Self::env_overrides(Environment::with_prefix(ENV_PREFIX))?);
        debug!(path = %path.display(), ?config, "Configuration loaded");
        Ok(config)
    }

    /// Path of the file [`Self::load`] reads.
    pub fn config_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file
            .cloned()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    fn from_file(path: &Path, required: bool) -> CliResult<Self> {
        if !required && !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Json).required(required))
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .map_err(|e| CliError::config(format!("cannot read {}: {e}", path.display()), e))
    }

    fn env_overrides(source: Environment) -> CliResult<Overrides> {
        Config::builder()
            .add_source(
                source
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<Overrides>())
            .map_err(|e| CliError::config(format!("invalid {ENV_PREFIX}_ variable: {e}"), e))
    }

    fn apply(&mut self, overrides: Overrides) {
        if let Some(dir) = overrides.project_dir {
            self.project_dir = dir;
        }
        if let Some(flag) = overrides.models.use_freezed {
            self.models.use_freezed = flag;
        }
        if let Some(flag) = overrides.screens.use_cubit {
            self.screens.use_cubit = flag;
        }
        if let Some(flag) = overrides.screens.use_freezed {
            self.screens.use_freezed = flag;
        }
    }

    /// Absolute, existing project directory.
    pub fn resolve_project_dir(&self) -> CliResult<PathBuf> {
        let expanded = expand_home(&self.project_dir)?;
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            std::env::current_dir()
                .map_err(|e| CliError::io("Failed to read the working directory", e))?
                .join(expanded)
        };
        // Drops `.` segments; `..` is left for the OS to resolve.
        let absolute: PathBuf = absolute.components().collect();

        if !absolute.is_dir() {
            return Err(CliError::ConfigError {
                message: format!(
                    "project directory '{}' does not exist",
                    absolute.display()
                ),
                source: None,
            });
        }
        Ok(absolute)
    }

    /// Options for `model`, before CLI overrides.
    pub fn model_generation(&self) -> GenerationConfig {
        GenerationConfig::new(
            SerializationStyle::from_use_freezed(self.models.use_freezed),
            StateManagement::default(),
        )
    }

    /// Options for `screen`, before CLI overrides.
    pub fn screen_generation(&self) -> GenerationConfig {
        GenerationConfig::new(
            SerializationStyle::from_use_freezed(self.screens.use_freezed),
            StateManagement::from_use_cubit(self.screens.use_cubit),
        )
    }

    /// Pretty JSON in the persisted layout.
    pub fn to_json(&self) -> CliResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to serialise config: {e}"), e))
    }

    /// Look up a dotted key such as `screens.useCubit`.
    ///
    /// Keys match case-insensitively so the environment spelling works too.
    pub fn get(&self, key: &str) -> CliResult<String> {
        match key.to_ascii_lowercase().as_str() {
            "projectdir" => Ok(self.project_dir.clone()),
            "models.usefreezed" => Ok(self.models.use_freezed.to_string()),
            "screens.usecubit" => Ok(self.screens.use_cubit.to_string()),
            "screens.usefreezed" => Ok(self.screens.use_freezed.to_string()),
            _ => Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            }),
        }
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(raw: &str) -> CliResult<PathBuf> {
    let rest = match raw.strip_prefix("~/") {
        Some(rest) => rest,
        None if raw == "~" => "",
        None => return Ok(PathBuf::from(raw)),
    };

    let home = directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| CliError::ConfigError {
            message: "cannot expand '~': home directory is unknown".into(),
            source: None,
        })?;
    Ok(home.join(rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.project_dir, ".");
        assert!(!cfg.models.use_freezed);
        assert!(!cfg.screens.use_cubit);
        assert!(!cfg.screens.use_freezed);
    }

    #[test]
    fn file_fields_fill_in_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "screens": { "useCubit": true } }"#);

        let cfg = AppConfig::from_file(&path, true).unwrap();
        assert_eq!(cfg.project_dir, ".");
        assert!(cfg.screens.use_cubit);
        assert!(!cfg.screens.use_freezed);
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let cfg = AppConfig::from_file(Path::new("/nonexistent/flart_config.json"), false).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let err = AppConfig::from_file(Path::new("/nonexistent/custom.json"), true).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(matches!(
            AppConfig::from_file(&path, true),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn environment_overrides_file_values() {
        let overrides = AppConfig::env_overrides(env(&[
            ("FLART_PROJECTDIR", "/srv/app"),
            ("FLART_MODELS__USEFREEZED", "true"),
        ]))
        .unwrap();

        let mut cfg = AppConfig::default();
        cfg.screens.use_cubit = true;
        cfg.apply(overrides);

        assert_eq!(cfg.project_dir, "/srv/app");
        assert!(cfg.models.use_freezed);
        assert!(cfg.screens.use_cubit);
    }

    #[test]
    fn resolve_existing_absolute_dir() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig {
            project_dir: dir.path().display().to_string(),
            ..AppConfig::default()
        };
        assert_eq!(cfg.resolve_project_dir().unwrap(), dir.path());
    }

    #[test]
    fn resolve_missing_dir_is_configuration_error() {
        let cfg = AppConfig {
            project_dir: "/definitely/not/here/flart".into(),
            ..AppConfig::default()
        };
        let err = cfg.resolve_project_dir().unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = directories::BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(expand_home("~/apps/demo").unwrap(), home.join("apps/demo"));
        assert_eq!(expand_home("apps/demo").unwrap(), PathBuf::from("apps/demo"));
    }

    #[test]
    fn generation_configs_follow_flags() {
        let cfg = AppConfig {
            models: ModelsConfig { use_freezed: true },
            screens: ScreensConfig {
                use_cubit: true,
                use_freezed: false,
            },
            ..AppConfig::default()
        };

        let model = cfg.model_generation();
        assert_eq!(model.serialization, Some(SerializationStyle::Generated));

        let screen = cfg.screen_generation();
        assert_eq!(screen.serialization, Some(SerializationStyle::Plain));
        assert_eq!(screen.state_management, Some(StateManagement::Cubit));
    }

    #[test]
    fn json_uses_persisted_key_names() {
        let json = AppConfig::default().to_json().unwrap();
        assert!(json.contains("\"projectDir\": \".\""));
        assert!(json.contains("\"useCubit\": false"));
    }

    #[test]
    fn get_accepts_either_spelling() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("screens.useCubit").unwrap(), "false");
        assert_eq!(cfg.get("projectdir").unwrap(), ".");
        assert!(cfg.get("models.nope").is_err());
    }
}
