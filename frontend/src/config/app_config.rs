//! Application Configuration
//!
//! Manages frontend configuration: camera device, capture resolution,
//! default model and logging settings.

use logging::LogLevel;
use std::fs;
use std::path::PathBuf;
use vision::ModelVariant;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Camera device index passed to the capture backend
    pub camera_device: i32,
    /// Requested capture width in pixels
    pub frame_width: u32,
    /// Requested capture height in pixels
    pub frame_height: u32,
    /// Model variant preselected at startup
    pub default_model: ModelVariant,
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            camera_device: 0,
            frame_width: 800,
            frame_height: 600,
            default_model: ModelVariant::Nano,
            log_path: PathBuf::from("livesight.log"),
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a .conf file
    ///
    /// Format:
    /// ```text
    /// camera_device=0
    /// frame_width=800
    /// frame_height=600
    /// default_model=yolov8n
    /// log_path=livesight.log
    /// log_level=Info
    /// ```
    ///
    /// Unknown keys are ignored with a warning; malformed values fall
    /// back to the default for that key.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key=value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                match key {
                    "camera_device" => {
                        config.camera_device = value.parse().unwrap_or(config.camera_device);
                    }
                    "frame_width" => {
                        config.frame_width = value.parse().unwrap_or(config.frame_width);
                    }
                    "frame_height" => {
                        config.frame_height = value.parse().unwrap_or(config.frame_height);
                    }
                    "default_model" => {
                        config.default_model =
                            ModelVariant::from_identifier(value).unwrap_or(config.default_model);
                    }
                    "log_path" => {
                        config.log_path = PathBuf::from(value);
                    }
                    "log_level" => {
                        config.log_level = value.parse().unwrap_or(LogLevel::Info);
                    }
                    _ => {
                        // Ignore unknown keys for forward compatibility
                        eprintln!("Warning: Unknown configuration key '{}' ignored", key);
                    }
                }
            }
        }

        Ok(config)
    }

    /// Loads configuration from multiple possible locations
    /// Tries in order: ./app.conf, ./frontend/app.conf, ../app.conf
    /// Falls back to default configuration if no file is found
    pub fn load() -> Self {
        let config_paths = vec!["app.conf", "frontend/app.conf", "../app.conf"];

        for path in config_paths {
            match Self::load_from_file(path) {
                Ok(config) => {
                    println!("Loaded configuration from: {}", path);
                    return config;
                }
                Err(_) => continue,
            }
        }

        println!("No configuration file found, using defaults");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.camera_device, 0);
        assert_eq!(config.frame_width, 800);
        assert_eq!(config.frame_height, 600);
        assert_eq!(config.default_model, ModelVariant::Nano);
        assert_eq!(config.log_path, PathBuf::from("livesight.log"));
    }

    #[test]
    fn test_load_from_content() {
        let content = "\
            # Test config\n\
            camera_device=2\n\
            frame_width=1280\n\
            frame_height=720\n\
            default_model=yolov8m\n\
            log_path=/tmp/test.log\n\
            log_level=Debug\n\
        ";

        let dir = tempdir().unwrap();
        let path = dir.path().join("app.conf");
        fs::write(&path, content).unwrap();

        let config = AppConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.camera_device, 2);
        assert_eq!(config.frame_width, 1280);
        assert_eq!(config.frame_height, 720);
        assert_eq!(config.default_model, ModelVariant::Medium);
        assert_eq!(config.log_path, PathBuf::from("/tmp/test.log"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_malformed_values_keep_defaults() {
        let content = "\
            camera_device=webcam\n\
            frame_width=-5\n\
            default_model=yolov9z\n\
            unknown_key=whatever\n\
        ";

        let dir = tempdir().unwrap();
        let path = dir.path().join("app.conf");
        fs::write(&path, content).unwrap();

        let config = AppConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.camera_device, 0);
        assert_eq!(config.frame_width, 800);
        assert_eq!(config.default_model, ModelVariant::Nano);
    }
}
