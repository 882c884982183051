use serde::Deserialize;
use std::path::PathBuf;

/// Complete service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the server listens on
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Seed data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Directory holding the optional per-collection JSON seed files
    #[serde(default = "default_seed_directory")]
    pub directory: PathBuf,
}

fn default_seed_directory() -> PathBuf {
    PathBuf::from("data")
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            directory: default_seed_directory(),
        }
    }
}

/// Admin surface configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Shared secret gating the control-room routes (demo-grade)
    #[serde(default = "default_passphrase")]
    pub passphrase: String,
}

fn default_passphrase() -> String {
    "digikumbh-admin".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            passphrase: default_passphrase(),
        }
    }
}

/// Assistant configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Cosmetic "thinking" pause before a canned answer is returned (ms)
    #[serde(default = "default_answer_delay_ms")]
    pub answer_delay_ms: u64,
}

fn default_answer_delay_ms() -> u64 {
    600
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            answer_delay_ms: default_answer_delay_ms(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            seed: SeedConfig::default(),
            admin: AdminConfig::default(),
            assistant: AssistantConfig::default(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&contents)?;
    Ok(config)
}
