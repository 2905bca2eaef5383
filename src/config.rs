pub mod keybindings;
pub mod styles;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

pub use keybindings::{key_event_to_string, parse_key_event, parse_key_sequence, KeyBindings};
pub use styles::{parse_style, Palette, Styles};

use crate::{content::Portfolio, theme::Theme, typewriter::TypewriterConfig, utils};

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub typewriter: Option<TypewriterConfig>,
    #[serde(default)]
    pub portfolio: Option<Portfolio>,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dirs(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// The configuration embedded in the binary.
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn from_dirs(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);
        cfg.validate()?;
        Ok(cfg)
    }

    fn merge_defaults(&mut self, default_config: Config) {
        for (mode, default_bindings) in default_config.keybindings.iter() {
            let user_bindings = self.keybindings.entry(*mode).or_default();
            for (key, action) in default_bindings.iter() {
                user_bindings
                    .entry(key.clone())
                    .or_insert_with(|| action.clone());
            }
        }
        for (theme, default_styles) in default_config.styles.iter() {
            let user_styles = self.styles.entry(*theme).or_default();
            for (style_key, style) in default_styles.iter() {
                user_styles
                    .entry(style_key.clone())
                    .or_insert_with(|| *style);
            }
        }
        if self.theme.is_none() {
            self.theme = default_config.theme;
        }
        if self.typewriter.is_none() {
            self.typewriter = default_config.typewriter;
        }
        if self.portfolio.is_none() {
            self.portfolio = default_config.portfolio;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.typewriter()
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn typewriter(&self) -> TypewriterConfig {
        self.typewriter.clone().unwrap_or_default()
    }

    pub fn portfolio(&self) -> Portfolio {
        self.portfolio.clone().unwrap_or_default()
    }

    pub fn data_dir(&self) -> &Path {
        &self.config._data_dir
    }
}
