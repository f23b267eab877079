use chrono::Offset;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "CAMPUS_NAVIGATOR_";

const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/predict";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),
    #[error("invalid predict url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("utc offset out of range: {0} hours")]
    InvalidOffset(i32),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub predict_url: String,
    /// `{output}` is replaced with the path the camera should write to.
    pub camera_command: String,
    pub prompt_for_permissions: bool,
    pub demo_mode: bool,
    pub logger_timezone: chrono::FixedOffset,
}

/// Raw overrides as read from the environment, all optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigEnv {
    predict_url: Option<String>,
    camera_command: Option<String>,
    prompt_permissions: Option<bool>,
    demo_mode: Option<bool>,
    utc_offset_hours: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_url: DEFAULT_PREDICT_URL.to_string(),
            camera_command: "fswebcam --no-banner {output}".to_string(),
            prompt_for_permissions: true,
            demo_mode: false,
            logger_timezone: chrono::Utc.fix(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then applies `CAMPUS_NAVIGATOR_*` variables
    /// over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let env = envy::prefixed(ENV_PREFIX).from_env::<ConfigEnv>()?;
        Self::default().with_overrides(env)
    }

    #[cfg(test)]
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, ConfigEnv>(vars)?;
        Self::default().with_overrides(env)
    }

    fn with_overrides(mut self, env: ConfigEnv) -> Result<Self, ConfigError> {
        if let Some(url) = env.predict_url {
            if let Err(e) = reqwest::Url::parse(&url) {
                return Err(ConfigError::InvalidUrl {
                    reason: e.to_string(),
                    url,
                });
            }
            self.predict_url = url;
        }
        if let Some(command) = env.camera_command {
            self.camera_command = command;
        }
        if let Some(prompt) = env.prompt_permissions {
            self.prompt_for_permissions = prompt;
        }
        if let Some(demo_mode) = env.demo_mode {
            self.demo_mode = demo_mode;
        }
        if let Some(hours) = env.utc_offset_hours {
            self.logger_timezone = chrono::FixedOffset::east_opt(hours * 3600)
                .ok_or(ConfigError::InvalidOffset(hours))?;
        }
        Ok(self)
    }
}
