use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use tracing::info;

/// Runtime settings, read once from the environment at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Directory holding the built frontend (`trunk build` output)
    pub static_dir: PathBuf,
    /// Origin allowed to call the API cross-site (the trunk dev server)
    pub cors_origin: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let host: std::net::IpAddr = try_load("DATA_FORM_HOST", "127.0.0.1")?;
        let port: u16 = try_load("DATA_FORM_PORT", "3000")?;

        Ok(Self {
            addr: SocketAddr::new(host, port),
            static_dir: try_load("DATA_FORM_STATIC_DIR", "../frontend/dist")?,
            cors_origin: try_load("DATA_FORM_CORS_ORIGIN", "http://localhost:8080")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("../frontend/dist"),
            cors_origin: "http://localhost:8080".to_string(),
        }
    }
}

fn try_load<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_falls_back_to_default() {
        let port: u16 = try_load("DATA_FORM_TEST_UNSET_PORT", "4321").unwrap();
        assert_eq!(port, 4321);
    }

    #[test]
    fn test_try_load_rejects_invalid_default() {
        let result: Result<u16> = try_load("DATA_FORM_TEST_UNSET_PORT", "not-a-port");
        assert!(result.is_err());
    }
}
