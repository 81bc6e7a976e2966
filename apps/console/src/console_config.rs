use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use profiledesk_core::AppError;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub backend_base_url: Url,
    pub console_host: String,
    pub console_port: u16,
    pub backend_timeout: Option<Duration>,
}

impl ConsoleConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_base_url = required_non_empty(&lookup, "BACKEND_BASE_URL")?;
        let backend_base_url = Url::parse(backend_base_url.trim()).map_err(|error| {
            AppError::Validation(format!(
                "invalid BACKEND_BASE_URL '{backend_base_url}': {error}"
            ))
        })?;
        if !matches!(backend_base_url.scheme(), "http" | "https") {
            return Err(AppError::Validation(format!(
                "BACKEND_BASE_URL must use http or https, got '{}'",
                backend_base_url.scheme()
            )));
        }

        let console_host = lookup("CONSOLE_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let console_port = lookup("CONSOLE_PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3002);

        let backend_timeout = lookup("BACKEND_TIMEOUT_SECS")
            .filter(|value| !value.trim().is_empty())
            .map(|value| match value.trim().parse::<u64>() {
                Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
                _ => Err(AppError::Validation(format!(
                    "BACKEND_TIMEOUT_SECS must be a positive number of seconds, got '{value}'"
                ))),
            })
            .transpose()?;

        Ok(Self {
            backend_base_url,
            console_host,
            console_port,
            backend_timeout,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.console_host).map_err(|error| {
            AppError::Internal(format!(
                "invalid CONSOLE_HOST '{}': {error}",
                self.console_host
            ))
        })?;
        Ok(SocketAddr::from((host, self.console_port)))
    }

    pub fn http_client(&self) -> Result<reqwest::Client, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.backend_timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|error| AppError::Internal(format!("failed to build http client: {error}")))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_non_empty<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }
    Ok(value)
}
