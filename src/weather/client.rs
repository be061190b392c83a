//! Open-Meteo geocoding and forecast client.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::Config;

use super::types::{CitySuggestion, Coordinates, WeatherCondition, WeatherError, WeatherPayload};

const SUGGESTION_COUNT: u8 = 5;

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    id: i64,
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    admin1: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: Option<HourlySeries>,
}

#[derive(Debug, Deserialize)]
struct HourlySeries {
    #[serde(default)]
    time: Vec<i64>,
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    weather_code: Vec<Option<i32>>,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Arc<Client>,
    geocoding_url: String,
    forecast_url: String,
    suggestion_language: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(config.http_timeout()).build()?;

        Ok(Self {
            client: Arc::new(client),
            geocoding_url: config.geocoding_api_url.clone(),
            forecast_url: config.forecast_api_url.clone(),
            suggestion_language: config.suggestion_language.clone(),
        })
    }

    pub async fn geocode(&self, city: &str) -> Result<Coordinates, WeatherError> {
        let body = self.search(city, 1, "en").await?;

        let first = body
            .results
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))?;

        tracing::debug!(
            "Geocoded {} to ({}, {})",
            city,
            first.latitude,
            first.longitude
        );
        Ok(Coordinates {
            latitude: first.latitude,
            longitude: first.longitude,
        })
    }

    pub async fn forecast(&self, coords: Coordinates) -> Result<WeatherPayload, WeatherError> {
        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("hourly", "temperature_2m,weather_code".to_string()),
                ("timeformat", "unixtime".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let hourly = body.hourly.ok_or(WeatherError::MissingHourlyData)?;
        payload_at(&hourly, Utc::now().timestamp())
    }

    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherPayload, WeatherError> {
        let coords = self.geocode(city).await?;
        self.forecast(coords).await
    }

    /// Autocomplete lookup. A geocoder reply without `results` means no match.
    pub async fn suggest_cities(&self, name: &str) -> Result<Vec<CitySuggestion>, WeatherError> {
        let language = self.suggestion_language.clone();
        let body = self.search(name, SUGGESTION_COUNT, &language).await?;

        Ok(body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|r| CitySuggestion {
                id: r.id,
                name: r.name,
                country: r.country.unwrap_or_default(),
                admin1: r.admin1,
            })
            .collect())
    }

    async fn search(
        &self,
        name: &str,
        count: u8,
        language: &str,
    ) -> Result<GeocodingResponse, WeatherError> {
        let count = count.to_string();
        let response = self
            .client
            .get(&self.geocoding_url)
            .query(&[
                ("name", name),
                ("count", count.as_str()),
                ("language", language),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))
    }
}

/// Index of the timestamp closest to `now`; the earlier entry wins a tie.
pub fn select_nearest(times: &[i64], now: i64) -> Option<usize> {
    times
        .iter()
        .enumerate()
        .min_by_key(|(_, t)| (**t - now).unsigned_abs())
        .map(|(i, _)| i)
}

fn payload_at(hourly: &HourlySeries, now: i64) -> Result<WeatherPayload, WeatherError> {
    let idx = select_nearest(&hourly.time, now).ok_or(WeatherError::MissingHourlyData)?;

    let temperature = hourly
        .temperature_2m
        .get(idx)
        .copied()
        .flatten()
        .ok_or(WeatherError::MissingHourlyData)?;
    let code = hourly.weather_code.get(idx).copied().flatten().unwrap_or(0);

    Ok(WeatherPayload {
        temperature: (temperature * 10.0).round() / 10.0,
        description: WeatherCondition::from_wmo_code(code).description().to_string(),
    })
}
