// src/config/settings.rs
use anyhow::{Context, Result};
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Serialize, Deserialize};

/// Settings file looked up in the working directory (`visor.toml`, `visor.json`, ...).
pub const SETTINGS_FILE: &str = "visor";
pub const ENV_PREFIX: &str = "VISOR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for the simulated analyzer; entropy when absent.
    pub seed: Option<u64>,
    pub window_width: f32,
    pub window_height: f32,
    pub override_rules_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            window_width: 1024.0,
            window_height: 768.0,
            override_rules_enabled: true,
        }
    }
}

impl Settings {
    /// Defaults, then the optional settings file, then `VISOR_*` variables.
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(SETTINGS_FILE).required(false));
        Self::from_builder(builder, Some(Self::environment()))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }

    /// `environment` is layered last, so it overrides every file value.
    fn from_builder(builder: ConfigBuilder<DefaultState>, environment: Option<Environment>) -> Result<Self> {
        let builder = match environment {
            Some(environment) => builder.add_source(environment),
            None => builder,
        };

        builder
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::Map;

    fn from_toml(content: &str) -> Result<Settings> {
        from_toml_and_env(content, None)
    }

    fn from_toml_and_env(content: &str, vars: Option<&[(&str, &str)]>) -> Result<Settings> {
        let builder = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml));
        let environment = vars.map(|vars| {
            let mut map = Map::new();
            for (key, value) in vars {
                map.insert(key.to_string(), value.to_string());
            }
            Settings::environment().source(Some(map))
        });
        Settings::from_builder(builder, environment)
    }

    #[test]
    fn test_empty_source_gives_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.override_rules_enabled);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = from_toml("seed = 42\noverride_rules_enabled = false\n").unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.override_rules_enabled);
        assert_eq!(settings.window_width, 1024.0);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        assert!(from_toml("seed = \"not a number\"").is_err());
    }

    #[test]
    fn test_environment_overrides_file() {
        let vars = [
            ("VISOR_SEED", "7"),
            ("VISOR_OVERRIDE_RULES_ENABLED", "false"),
            ("OTHER_SEED", "99"),
        ];
        let settings = from_toml_and_env("seed = 42\nwindow_width = 800.0\n", Some(&vars[..])).unwrap();

        assert_eq!(settings.seed, Some(7));
        assert!(!settings.override_rules_enabled);
        assert_eq!(settings.window_width, 800.0);
        assert_eq!(settings.window_height, 768.0);
    }

    #[test]
    fn test_empty_environment_keeps_file_values() {
        let settings = from_toml_and_env("seed = 42\n", Some(&[] as &[(&str, &str)])).unwrap();
        assert_eq!(settings.seed, Some(42));
    }
}
