use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub seed_demo: bool,
    pub recent_jobs_limit: usize,
    pub skill_preview_limit: usize,
    pub log_json: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo: true,
            recent_jobs_limit: 5,
            skill_preview_limit: 4,
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();
        Ok(Self {
            seed_demo: get_env_parse_or("JOB_BOARD_SEED_DEMO", defaults.seed_demo)?,
            recent_jobs_limit: get_env_parse_or(
                "JOB_BOARD_RECENT_LIMIT",
                defaults.recent_jobs_limit,
            )?,
            skill_preview_limit: get_env_parse_or(
                "JOB_BOARD_SKILL_PREVIEW_LIMIT",
                defaults.skill_preview_limit,
            )?,
            log_json: get_env_parse_or("JOB_BOARD_LOG_JSON", defaults.log_json)?,
        })
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults_for_unset_variables() {
        let value: usize = get_env_parse_or("JOB_BOARD_TEST_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn rejects_unparsable_values() {
        env::set_var("JOB_BOARD_TEST_BAD_LIMIT", "five");
        let err = get_env_parse_or::<usize>("JOB_BOARD_TEST_BAD_LIMIT", 5).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("JOB_BOARD_TEST_BAD_LIMIT")));
    }
}
