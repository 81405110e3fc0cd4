//! Environment-driven server configuration.

use std::env;
use std::path::PathBuf;

const DEFAULT_MODEL_PATH: &str = "yolov8n.onnx";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
// 5001 avoids colliding with the co-located primary backend on 5000.
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub bind_addr: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH)),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        };
        assert_eq!(config.listen_addr(), "0.0.0.0:5001");
    }
}
