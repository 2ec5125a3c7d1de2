use serde::Deserialize;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Read-only config loader: missing content yields the default config,
/// present content must deserialize and validate. The loaded value is
/// cached for subsequent calls.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider: FileContentConfigProvider::new(file_path.to_string()),
            config_serializer: YamlConfigSerializer {},
        }
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(config_data) = self.config_content_provider.get_config_content()? {
            let config = self.config_serializer.deserialize(&config_data)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Difficulty;

    struct InMemoryProvider {
        content: Option<String>,
    }

    impl InMemoryProvider {
        fn new(content: Option<&str>) -> Self {
            Self {
                content: content.map(str::to_string),
            }
        }
    }

    impl ConfigContentProvider for InMemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.clone())
        }
    }

    #[test]
    fn test_missing_content_falls_back_to_default() {
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(InMemoryProvider::new(None), YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_valid_content_is_loaded() {
        let yaml =
            "x_player_name: Alice\no_player_name: Bob\nmultiplayer: false\ndifficulty: hard\n";
        let manager: ConfigManager<_, GameConfig, _> = ConfigManager::new(
            InMemoryProvider::new(Some(yaml)),
            YamlConfigSerializer::new(),
        );
        let config = manager.get_config().unwrap();
        assert_eq!(config.x_player_name, "Alice");
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert!(!config.multiplayer);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load() {
        let yaml = "x_player_name: ''\no_player_name: Bob\nmultiplayer: true\ndifficulty: easy\n";
        let manager: ConfigManager<_, GameConfig, _> = ConfigManager::new(
            InMemoryProvider::new(Some(yaml)),
            YamlConfigSerializer::new(),
        );
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let manager: ConfigManager<_, GameConfig, _> = ConfigManager::new(
            InMemoryProvider::new(Some("not: [valid")),
            YamlConfigSerializer::new(),
        );
        assert!(manager.get_config().is_err());
    }
}
