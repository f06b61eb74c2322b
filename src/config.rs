use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LendSyncError, Result};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KafkaAuth {
    pub enabled: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProducesTopics {
    pub for_borrower: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsumesTopics {
    pub for_lender: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KafkaTopics {
    pub produces: ProducesTopics,
    pub consumes: ConsumesTopics,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KafkaConfig {
    pub client_id: Option<String>,
    pub host: String,
    pub port: u16,
    pub verbose: Option<bool>,
    pub auth: Option<KafkaAuth>,
    pub topics: KafkaTopics,
}

impl KafkaConfig {
    pub fn broker(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn auth_enabled(&self) -> bool {
        self.auth
            .as_ref()
            .and_then(|auth| auth.enabled)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvConfig {
    pub kafka: KafkaConfig,
}

/// Deployment configuration. Topic names and broker coordinates are scoped
/// per environment; `environment` selects the active section unless the
/// caller overrides it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub environment: Option<String>,
    pub environments: HashMap<String, EnvConfig>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| LendSyncError::Config(e.to_string()))?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| LendSyncError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn environment(&self, name: Option<&str>) -> Result<&EnvConfig> {
        let name = name
            .or(self.environment.as_deref())
            .ok_or_else(|| LendSyncError::Config("no environment selected".to_string()))?;
        self.environments
            .get(name)
            .ok_or_else(|| LendSyncError::Config(format!("unknown environment '{name}'")))
    }
}
