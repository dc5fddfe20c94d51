//! Form-relay configuration read from compile-time environment variables.
//!
//! The access key is supplied at build time (for example
//! `PORTFOLIO_RELAY_ACCESS_KEY=... trunk build --release`) so the credential
//! never lives in source.

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const ACCESS_KEY_VAR: &str = "PORTFOLIO_RELAY_ACCESS_KEY";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing form relay access key (set {var} at build time)")]
    MissingAccessKey { var: &'static str },
    #[error("invalid form relay endpoint '{0}' (expected an http(s) URL)")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
}

impl RelayConfig {
    /// Build relay config from the variables captured when the crate was compiled.
    ///
    /// Required:
    /// - `PORTFOLIO_RELAY_ACCESS_KEY`
    ///
    /// Optional:
    /// - `PORTFOLIO_RELAY_ENDPOINT`: default Web3Forms submit URL
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(option_env!("PORTFOLIO_RELAY_ENDPOINT"), option_env!("PORTFOLIO_RELAY_ACCESS_KEY"))
    }

    /// Parse raw variable values. Blank values count as absent.
    pub fn from_vars(endpoint: Option<&str>, access_key: Option<&str>) -> Result<Self, ConfigError> {
        let access_key = non_blank(access_key)
            .ok_or(ConfigError::MissingAccessKey { var: ACCESS_KEY_VAR })?
            .to_owned();

        let endpoint = non_blank(endpoint)
            .unwrap_or(DEFAULT_RELAY_ENDPOINT)
            .trim_end_matches('/')
            .to_owned();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }

        Ok(Self { endpoint, access_key })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
