use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// Root of the abuse API, e.g. `https://api.ote-godaddy.com`
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default)]
    pub transport: Transport,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

fn default_port() -> u16 {
    8000
}

pub fn load(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&config_str)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

impl Config {
    /// The configured base URL without trailing slashes.
    pub fn base_url(&self) -> Result<String> {
        let Some(base_url) = self.api.base_url.as_deref() else {
            bail!("no API base URL configured (set api.base_url or ABUSE_API_BASE_URL)");
        };
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            bail!("API base URL is empty");
        }
        Ok(base_url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_yaml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  base_url: https://api.example.com/").unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.base_url().unwrap(), "https://api.example.com");
        assert_eq!(config.server.transport, Transport::Stdio);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn reads_server_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api:\n  base_url: http://localhost:1234\nserver:\n  transport: http\n  port: 9100"
        )
        .unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.server.transport, Transport::Http);
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let config = Config::default();
        assert!(config.base_url().is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = load(Path::new("/nonexistent/abuse-mcp.yml")).unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/abuse-mcp.yml"));
    }
}
