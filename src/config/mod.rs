use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_GEOCODING_API_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const DEFAULT_FORECAST_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub redis_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub weather_cache_ttl_secs: u64,
    pub geocoding_api_url: String,
    pub forecast_api_url: String,
    pub suggestion_language: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        // PORT 兼容旧的部署脚本
        let server_port = env::var("SERVER_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port,
            weather_cache_ttl_secs: parse_or("WEATHER_CACHE_TTL_SECS", 300),
            geocoding_api_url: env::var("GEOCODING_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEOCODING_API_URL.into()),
            forecast_api_url: env::var("FORECAST_API_URL")
                .unwrap_or_else(|_| DEFAULT_FORECAST_API_URL.into()),
            suggestion_language: env::var("SUGGESTION_LANGUAGE").unwrap_or_else(|_| "de".into()),
            http_timeout_secs: parse_or("HTTP_TIMEOUT_SECS", 10),
        })
    }

    /// Settings pointing both upstream APIs at `base_url`, used by tests
    /// against a mock server.
    pub fn for_upstream(base_url: &str) -> Self {
        Config {
            database_url: String::new(),
            redis_url: None,
            server_host: "127.0.0.1".into(),
            server_port: 0,
            weather_cache_ttl_secs: 300,
            geocoding_api_url: format!("{}/v1/search", base_url),
            forecast_api_url: format!("{}/v1/forecast", base_url),
            suggestion_language: "de".into(),
            http_timeout_secs: 5,
        }
    }

    pub fn weather_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.weather_cache_ttl_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value {:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
