use core::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Url;

use control::{CoreConfig, Temperature};

#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default("")]
    weatherlink_url: &'static str,
    #[default("")]
    opensprinkler_url: &'static str,
    #[default("")]
    email_url: &'static str,
    #[default("")]
    email_key: &'static str,
    #[default(57.0)]
    activate_below_f: f32,
    #[default(58.0)]
    deactivate_at_or_above_f: f32,
    #[default(60)]
    poll_interval: u64,
    // Maximum of 8 hours of sprinkling per activation
    #[default(28800)]
    safety_ceiling: u32,
    #[default(30)]
    http_timeout: u64,
}

#[derive(Clone, Debug)]
pub struct Endpoints {
    pub weatherlink: Url,
    pub opensprinkler: Url,
    pub email: Url,
    pub email_key: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub poll_interval: Duration,
    pub http_timeout: Duration,
    pub thresholds: CoreConfig,
    pub endpoints: Endpoints,
}

impl Config {
    pub fn read() -> Result<Self> {
        Config::try_from(TOML_CONFIG)
    }
}

fn parse_url(name: &str, value: &str) -> Result<Url> {
    if value.is_empty() {
        bail!("Missing {} in cfg.toml", name);
    }
    Url::parse(value).with_context(|| format!("Invalid {} in cfg.toml", name))
}

impl TryFrom<TomlConfig> for Config {
    type Error = anyhow::Error;

    fn try_from(config: TomlConfig) -> Result<Self> {
        if config.email_key.is_empty() {
            bail!("Missing email_key in cfg.toml");
        }
        if config.poll_interval == 0 {
            bail!("poll_interval must be at least one second");
        }

        let thresholds = CoreConfig::new(
            Temperature::new(config.activate_below_f),
            Temperature::new(config.deactivate_at_or_above_f),
            config.safety_ceiling,
        )?;

        Ok(Config {
            poll_interval: Duration::from_secs(config.poll_interval),
            http_timeout: Duration::from_secs(config.http_timeout),
            thresholds,
            endpoints: Endpoints {
                weatherlink: parse_url("weatherlink_url", config.weatherlink_url)?,
                opensprinkler: parse_url("opensprinkler_url", config.opensprinkler_url)?,
                email: parse_url("email_url", config.email_url)?,
                email_key: config.email_key.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> TomlConfig {
        TomlConfig {
            weatherlink_url: "http://weatherlinklive.local/v1/current_conditions",
            opensprinkler_url: "http://192.168.1.79/cm?pw=XXX&sid=23",
            email_url: "https://email.example.com/send",
            email_key: "key",
            activate_below_f: 57.0,
            deactivate_at_or_above_f: 58.0,
            poll_interval: 60,
            safety_ceiling: 28800,
            http_timeout: 30,
        }
    }

    #[test]
    fn test_complete_config() {
        let config = Config::try_from(complete()).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.thresholds.safety_ceiling(), 28800);
        assert_eq!(config.endpoints.opensprinkler.query(), Some("pw=XXX&sid=23"));
    }

    #[test]
    fn test_missing_url() {
        let config = TomlConfig {
            weatherlink_url: "",
            ..complete()
        };
        assert!(Config::try_from(config).is_err());
    }

    #[test]
    fn test_missing_key() {
        let config = TomlConfig {
            email_key: "",
            ..complete()
        };
        assert!(Config::try_from(config).is_err());
    }

    #[test]
    fn test_thresholds_without_gap() {
        let config = TomlConfig {
            activate_below_f: 58.0,
            ..complete()
        };
        assert!(Config::try_from(config).is_err());
    }

    #[test]
    fn test_zero_interval() {
        let config = TomlConfig {
            poll_interval: 0,
            ..complete()
        };
        assert!(Config::try_from(config).is_err());
    }
}
