use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRY_CODE: &str = "86";
pub const DEFAULT_LANGUAGE: &str = "zh-cn";
pub const DEFAULT_TIME_ZONE: &str = "Asia/Shanghai";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelfserveConfig {
    pub default_country_code: Option<String>,
    pub language: Option<String>,
    pub time_zone: Option<String>,
    pub display_name_expression: Option<String>,
    #[serde(default)]
    pub scrub_fields: Vec<String>,
}

impl SelfserveConfig {
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("selfserve").join("config.toml")
    }

    pub fn load() -> Self {
        let path = Self::config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| e.to_string())?;

        std::fs::write(&path, contents).map_err(|e| e.to_string())
    }

    pub fn country_code(&self) -> &str {
        self.default_country_code
            .as_deref()
            .unwrap_or(DEFAULT_COUNTRY_CODE)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn time_zone(&self) -> &str {
        self.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE)
    }
}

fn xdg_config_home() -> PathBuf {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("./config"))
}
