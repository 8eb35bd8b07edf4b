use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub struct YamlConfigFile {
    path: PathBuf,
}

impl YamlConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load<TConfig>(&self) -> Result<TConfig, String>
    where
        TConfig: DeserializeOwned + Validate + Default,
    {
        if !self.path.exists() {
            return Ok(TConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read config file {}: {}", self.path.display(), e))?;

        let config: TConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", self.path.display(), e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }

    pub fn store<TConfig>(&self, config: &TConfig) -> Result<(), String>
    where
        TConfig: Serialize + Validate,
    {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.path.display(), e))?;

        Ok(())
    }
}
