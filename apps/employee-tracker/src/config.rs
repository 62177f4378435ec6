use anyhow::Context;
use platform_db::DatabaseSettings;

/// Everything the binary reads from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub show_banner: bool,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let database =
            DatabaseSettings::from_env().context("database configuration is incomplete")?;
        Ok(Self {
            database,
            show_banner: !env_bool("TRACKER_NO_BANNER", false),
        })
    }
}

fn env_bool(var: &str, default: bool) -> bool {
    std::env::var(var)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}
