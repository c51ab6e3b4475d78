/// Client configuration from environment variables
///
/// Controls the backend base URL and where the file-backed demo store
/// keeps its data.
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the account backend, without a trailing slash
    pub api_base_url: String,
    /// Directory used by the file-backed key-value store
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// - `API_BASE_URL`: backend endpoint (default `http://localhost:8080`)
    /// - `DEMO_DATA_DIR`: file store directory (default `./data`)
    pub fn from_env() -> Self {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();
        log::info!("Backend base URL: {}", api_base_url);

        let data_dir = env::var("DEMO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        Self {
            api_base_url,
            data_dir,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            data_dir: PathBuf::from("./data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
