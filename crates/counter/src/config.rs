use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub slack_bot_token: String,
    pub api_bind: String,
    pub period_days: i64,
    pub cache_ttl_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let slack_bot_token = std::env::var("SLACK_BOT_USER_TOKEN")
            .or_else(|_| std::env::var("MVPBOARD_SLACK_TOKEN"))?;
        let api_bind =
            std::env::var("MVPBOARD_API_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let period_days = std::env::var("MVPBOARD_PERIOD_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        let cache_ttl_secs = std::env::var("MVPBOARD_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        Ok(Self {
            slack_bot_token,
            api_bind,
            period_days,
            cache_ttl_secs,
        })
    }
}
