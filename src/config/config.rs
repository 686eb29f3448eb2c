use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    /// DuckDB file path (or `:memory:`). Unset means chat runs without persistence.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            url: Some(":memory:".to_string()),
            name: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SCROLL").separator("__"))
            // Plain variables the deployment environment already provides
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.name", std::env::var("DATABASE_NAME").ok())?
            .build()?;

        let mut app_config: AppConfig = settings.try_deserialize()?;

        app_config.server.host = expand_env(&app_config.server.host);
        app_config.database.url = app_config.database.url.as_deref().and_then(non_empty_env);
        app_config.database.name = app_config.database.name.as_deref().and_then(non_empty_env);

        Ok(app_config)
    }
}

fn non_empty_env(val: &str) -> Option<String> {
    let expanded = expand_env(val);
    if expanded.trim().is_empty() {
        None
    } else {
        Some(expanded)
    }
}

fn expand_env(val: &str) -> String {
    if val.starts_with("${") && val.ends_with('}') {
        let var_name = &val[2..val.len() - 1];
        std::env::var(var_name).unwrap_or_default()
    } else {
        val.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_passthrough() {
        assert_eq!(expand_env("scroll.duckdb"), "scroll.duckdb");
    }

    #[test]
    fn test_unset_placeholder_is_dropped() {
        assert_eq!(non_empty_env("${SCROLL_TEST_SURELY_UNSET_VAR}"), None);
        assert_eq!(non_empty_env("   "), None);
        assert_eq!(non_empty_env("chat.duckdb"), Some("chat.duckdb".to_string()));
    }

    #[test]
    fn test_in_memory_database_is_configured() {
        assert!(DatabaseConfig::in_memory().is_configured());
        assert!(!DatabaseConfig::default().is_configured());
    }
}
