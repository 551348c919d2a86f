use std::env;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::errors::ConfigurationError;

pub const DOWNSTREAM_FUNCTION_NAME: &str = "DOWNSTREAM_FUNCTION_NAME";
pub const DOWNSTREAM_ENDPOINT: &str = "DOWNSTREAM_ENDPOINT";
pub const SERVICE_NAME: &str = "SERVICE_NAME";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Loads a `.env` file from the working directory, if there is one, and
/// returns its path. Runs before logging is set up, so callers log the path.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

/// Loads the given env file, returning its path when it was read.
pub fn load_dotenv_file(path: &Path) -> Option<PathBuf> {
    dotenv::from_path(path).ok().map(|_| path.to_path_buf())
}

/// Reads a process environment variable, treating empty values as unset.
pub fn process_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Where a proxy handler forwards its requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(tag = "kind", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DownstreamTarget {
    Function { name: String },
    Endpoint { url: String },
}

impl DownstreamTarget {
    pub fn function_from_env() -> Result<Self, ConfigurationError> {
        Self::function_from(process_env)
    }

    pub fn endpoint_from_env() -> Result<Self, ConfigurationError> {
        Self::endpoint_from(process_env)
    }

    pub fn function_from(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        required(&lookup, DOWNSTREAM_FUNCTION_NAME).map(|name| Self::Function { name })
    }

    pub fn endpoint_from(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let url = required(&lookup, DOWNSTREAM_ENDPOINT)?;
        Url::parse(&url).map_err(|e| ConfigurationError::Invalid {
            name: DOWNSTREAM_ENDPOINT.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::Endpoint { url })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub service_name: String,
    pub log_level: String,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            service_name: required(&lookup, SERVICE_NAME)?,
            log_level: lookup(LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, ConfigurationError> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigurationError::Missing(name.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn function_target_reads_name() {
        let target =
            DownstreamTarget::function_from(lookup_from(&[(DOWNSTREAM_FUNCTION_NAME, "orders")]))
                .unwrap();
        assert_eq!(
            target,
            DownstreamTarget::Function {
                name: "orders".to_string()
            }
        );
    }

    #[test]
    fn missing_function_name_fails_fast() {
        let err = DownstreamTarget::function_from(lookup_from(&[])).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::Missing(DOWNSTREAM_FUNCTION_NAME.to_string())
        );
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = DownstreamTarget::endpoint_from(lookup_from(&[(DOWNSTREAM_ENDPOINT, "")]))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::Missing(DOWNSTREAM_ENDPOINT.to_string()));
    }

    #[test]
    fn endpoint_must_be_an_absolute_url() {
        let err = DownstreamTarget::endpoint_from(lookup_from(&[(DOWNSTREAM_ENDPOINT, "foo/api")]))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::Invalid { ref name, .. } if name == DOWNSTREAM_ENDPOINT));
    }

    #[test]
    fn target_serializes_with_kind_tag() {
        let target = DownstreamTarget::endpoint_from(lookup_from(&[(
            DOWNSTREAM_ENDPOINT,
            "https://foo.com/api",
        )]))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            json!({"kind": "endpoint", "url": "https://foo.com/api"})
        );
        assert_eq!(target.to_string(), "endpoint");
    }

    #[test]
    fn service_config_defaults_log_level() {
        let config = ServiceConfig::from_lookup(lookup_from(&[(SERVICE_NAME, "partner")])).unwrap();
        assert_eq!(config.service_name, "partner");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn env_file_path_is_returned_once_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".env");
        std::fs::write(&file, "APIFUNCS_CONFIG_TEST_MARKER=loaded\n").unwrap();

        assert_eq!(load_dotenv_file(&file), Some(file.clone()));
        assert_eq!(
            process_env("APIFUNCS_CONFIG_TEST_MARKER").as_deref(),
            Some("loaded")
        );
        assert_eq!(load_dotenv_file(&dir.path().join("missing.env")), None);
    }

    #[test]
    fn service_config_requires_service_name() {
        let err = ServiceConfig::from_lookup(lookup_from(&[(LOG_LEVEL, "debug")])).unwrap_err();
        assert_eq!(err, ConfigurationError::Missing(SERVICE_NAME.to_string()));
    }
}
