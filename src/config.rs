use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_upload_size: usize,
    pub backend_timeout: Option<Duration>,
    pub session_ttl: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let backend_url = env_or("RFP_BACKEND_URL", "http://localhost:5000")
            .trim_end_matches('/')
            .to_string();
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(format!(
                "Invalid RFP_BACKEND_URL: expected an http(s) URL, got '{backend_url}'"
            ));
        }

        let host: IpAddr = env_or("RFP_HOST", "127.0.0.1")
            .parse()
            .map_err(|e| format!("Invalid RFP_HOST: {e}"))?;

        let port: u16 = env_or("RFP_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid RFP_PORT: {e}"))?;

        let max_upload_size: usize = env_or("RFP_MAX_UPLOAD_SIZE", "16777216")
            .parse()
            .map_err(|e| format!("Invalid RFP_MAX_UPLOAD_SIZE: {e}"))?;

        let backend_timeout = match std::env::var("RFP_BACKEND_TIMEOUT_SECS").ok() {
            Some(raw) if !raw.trim().is_empty() => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|e| format!("Invalid RFP_BACKEND_TIMEOUT_SECS: {e}"))?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        let session_ttl: u64 = env_or("RFP_SESSION_TTL_SECS", "43200")
            .parse()
            .map_err(|e| format!("Invalid RFP_SESSION_TTL_SECS: {e}"))?;

        let log_level = env_or("RFP_LOG_LEVEL", "info");

        Ok(Config {
            backend_url,
            host,
            port,
            max_upload_size,
            backend_timeout,
            session_ttl: Duration::from_secs(session_ttl),
            log_level,
        })
    }

    /// Human readable upload cap, e.g. `16MB`.
    pub fn max_upload_label(&self) -> String {
        const MB: usize = 1024 * 1024;
        if self.max_upload_size >= MB && self.max_upload_size % MB == 0 {
            format!("{}MB", self.max_upload_size / MB)
        } else {
            format!("{} bytes", self.max_upload_size)
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
