use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub api: ApiConfig,
    pub aggregate: Option<AggregateConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateConfig {
    pub concurrent_requests: Option<usize>,
    pub run_timeout_secs: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FeedError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FeedError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with the matching environment
    /// variable; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;

        if let Some(timeout) = self.api.connect_timeout_secs {
            validation::validate_range("api.connect_timeout_secs", timeout, 1, 300)?;
        }

        if let Some(aggregate) = &self.aggregate {
            if let Some(concurrent) = aggregate.concurrent_requests {
                validation::validate_positive_number(
                    "aggregate.concurrent_requests",
                    concurrent,
                    1,
                )?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.api.base_url
    }

    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.api.connect_timeout_secs.unwrap_or(30))
    }

    fn concurrent_requests(&self) -> usize {
        self.aggregate
            .as_ref()
            .and_then(|aggregate| aggregate.concurrent_requests)
            .unwrap_or(5)
    }

    fn run_timeout(&self) -> Duration {
        Duration::from_secs(
            self.aggregate
                .as_ref()
                .and_then(|aggregate| aggregate.run_timeout_secs)
                .unwrap_or(10),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
