use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    LoadError(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Listener {
    pub host: String,
    pub port: u16,
}

impl Default for Listener {
    fn default() -> Self {
        Listener {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct UpstreamConfig {
    /// Base URL of the upstream sessions API, e.g. `https://api.openf1.org/v1`.
    pub base_url: String,
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct MetricsConfig {
    pub statsd_host: String,
    pub statsd_port: u16,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub listener: Listener,
    pub upstream: UpstreamConfig,
    pub metrics: Option<MetricsConfig>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let data = serde_yaml::from_reader(file)?;

        Ok(data)
    }

    /// Bootstraps a config from the environment when no file is given.
    ///
    /// `OPENF1_API_URL` may be unset; startup still succeeds and the client
    /// reports the missing base URL on the first fetch instead.
    pub fn from_env() -> Self {
        Config {
            listener: Listener::default(),
            upstream: UpstreamConfig {
                base_url: std::env::var("OPENF1_API_URL").unwrap_or_default(),
            },
            metrics: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp_file(s: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        write!(tmp, "{}", s).expect("write yaml");

        tmp
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
            listener:
                host: 0.0.0.0
                port: 8080
            upstream:
                base_url: https://api.openf1.org/v1
            metrics:
                statsd_host: 127.0.0.1
                statsd_port: 8125
            "#;
        let tmp = write_tmp_file(yaml);
        let config = Config::from_file(tmp.path()).expect("load config");

        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.upstream.base_url, "https://api.openf1.org/v1");
        assert_eq!(
            config.metrics,
            Some(MetricsConfig {
                statsd_host: "127.0.0.1".into(),
                statsd_port: 8125,
            })
        );
    }

    #[test]
    fn listener_and_metrics_are_optional() {
        let yaml = r#"
            upstream:
                base_url: https://api.openf1.org/v1
            "#;
        let tmp = write_tmp_file(yaml);
        let config = Config::from_file(tmp.path()).expect("load config");

        assert_eq!(config.listener, Listener::default());
        assert!(config.metrics.is_none());
    }

    #[test]
    fn upstream_section_is_required() {
        let yaml = r#"
            listener:
                host: 0.0.0.0
                port: 8080
            "#;
        let tmp = write_tmp_file(yaml);
        assert!(matches!(
            Config::from_file(tmp.path()).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        assert!(matches!(
            Config::from_file(Path::new("/nonexistent/paddock.yaml")).unwrap_err(),
            ConfigError::LoadError(_)
        ));
    }
}
