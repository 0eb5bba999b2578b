use crate::error::{BadEnvVarSnafu, ParseApiUrlSnafu, ParseTimeoutSnafu, RosterResult};
use dotenvy::var;
use snafu::ResultExt;
use std::{sync::Arc, time::Duration};
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            api_config: Arc::new(ApiConfig::new()?),
            server_ip: optional_var("ROSTER_SERVER_IP")?
                .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string()),
        })
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Duration,
}

impl ApiConfig {
    pub fn new() -> RosterResult<Self> {
        let base_url = optional_var("ROSTER_API_URL")?.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout = match optional_var("ROSTER_API_TIMEOUT_SECS")? {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .context(ParseTimeoutSnafu { original: secs })?,
            ),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Self::from_parts(&base_url, timeout)
    }

    pub fn from_parts(base_url: &str, timeout: Duration) -> RosterResult<Self> {
        let base_url = Url::parse(base_url).context(ParseApiUrlSnafu {
            original: base_url,
        })?;
        Ok(Self { base_url, timeout })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Unset is fine (we have defaults), anything else going wrong isn't.
fn optional_var(name: &'static str) -> RosterResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn parses_base_url() {
        let config = ApiConfig::from_parts("http://localhost:5000", Duration::from_secs(3)).unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:5000/");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn rejects_garbage_url() {
        let err = ApiConfig::from_parts("not a url", Duration::from_secs(3)).unwrap_err();
        assert!(matches!(err, RosterError::ParseApiUrl { .. }));
    }
}
