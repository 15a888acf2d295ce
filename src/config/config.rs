use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, warn};

pub static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::load(None)));

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_path")]
    pub log_path: String,

    /// Minimum minutes between two different visitors. Unset disables the rule.
    #[serde(default)]
    pub early_entry_minutes: Option<u32>,
}

fn default_log_path() -> String {
    "visitors.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_path: default_log_path(),
            early_entry_minutes: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load(config_path: Option<&str>) -> Self {
        let default_paths = ["visitor_log.toml", "/etc/visitor_log/config.toml"];

        let paths: Vec<&str> = config_path
            .into_iter()
            .chain(default_paths)
            .collect();

        Self::load_from(&paths)
    }

    /// First config in `paths` that parses, or the defaults.
    pub fn load_from(paths: &[&str]) -> Self {
        for &path in paths {
            match Self::from_file(path) {
                Ok(config) => {
                    info!("config loaded from {}", path);
                    return config;
                }
                Err(err) => {
                    if let Some(io_err) = err.downcast_ref::<io::Error>() {
                        if io_err.kind() == io::ErrorKind::NotFound {
                            continue;
                        }
                    }
                    warn!("{} failed to load: {}", path, err);
                }
            }
        }

        info!("falling back to default config");
        Config::default()
    }
}
