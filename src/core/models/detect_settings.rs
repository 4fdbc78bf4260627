use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LotteryStrategy {
    #[default]
    LogOnly,
    PatternMatching,
}

impl fmt::Display for LotteryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LotteryStrategy::LogOnly => write!(f, "LogOnly"),
            LotteryStrategy::PatternMatching => write!(f, "PatternMatching"),
        }
    }
}

/// What the lottery pattern is tested against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LotteryMatchUnit {
    #[default]
    Annotation,
    CombinedText,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectSettings {
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub lottery_strategy: LotteryStrategy,
    #[serde(default)]
    pub lottery_match_unit: LotteryMatchUnit,
}

fn default_api_endpoint() -> String {
    global_constants::DEFAULT_VISION_API_ENDPOINT.to_string()
}

impl Default for DetectSettings {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            api_key: None,
            lottery_strategy: LotteryStrategy::default(),
            lottery_match_unit: LotteryMatchUnit::default(),
        }
    }
}

impl DetectSettings {
    pub fn load() -> anyhow::Result<Self> {
        let lookup = |name: &str| std::env::var(name).ok();
        let settings_path = Self::get_settings_file_path(lookup)?;
        let mut settings = Self::load_from(&settings_path)?;
        settings.apply_overrides(lookup);
        Ok(settings)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file found, using defaults",
                global_constants::LOG_TAG_SETTINGS
            );
            let default_settings = Self::default();
            if let Err(e) = default_settings.save_to(settings_path) {
                log::warn!(
                    "{} Could not write default settings: {:#}",
                    global_constants::LOG_TAG_SETTINGS,
                    e
                );
            }
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings from {:?}", settings_path))?;
        let settings: DetectSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {:?}", settings_path))?;

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} Endpoint: {}, lottery strategy: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.api_endpoint,
            settings.lottery_strategy
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", settings_path))?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(())
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(global_constants::ENV_API_KEY) {
            if !api_key.trim().is_empty() {
                log::debug!(
                    "{} API key taken from {}",
                    global_constants::LOG_TAG_SETTINGS,
                    global_constants::ENV_API_KEY
                );
                self.api_key = Some(api_key.trim().to_string());
            }
        }
    }

    fn get_settings_file_path<F>(lookup: F) -> anyhow::Result<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(explicit_path) = lookup(global_constants::ENV_SETTINGS_PATH) {
            return Ok(PathBuf::from(explicit_path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
