use std::sync::Arc;

use crate::utils::cache_key;

use super::cache::WeatherCache;
use super::client::WeatherClient;
use super::types::{CitySuggestion, WeatherError, WeatherPayload};

/// Cache-first weather lookup shared by the widget handlers.
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    cache: Arc<dyn WeatherCache>,
}

impl WeatherService {
    pub fn new(client: WeatherClient, cache: Arc<dyn WeatherCache>) -> Self {
        Self { client, cache }
    }

    pub async fn weather_for(&self, location: &str) -> Result<WeatherPayload, WeatherError> {
        let key = cache_key(location);

        if let Some(data) = self.cache.get(&key).await {
            tracing::debug!("Weather cache hit for {}", key);
            return Ok(data);
        }

        tracing::debug!("Weather cache miss for {}, fetching upstream", key);
        let data = self.client.fetch_weather(location).await?;
        self.cache.set(&key, &data).await;
        Ok(data)
    }

    pub async fn suggest_cities(&self, name: &str) -> Result<Vec<CitySuggestion>, WeatherError> {
        self.client.suggest_cities(name).await
    }
}
