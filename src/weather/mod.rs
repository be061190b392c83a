//! Weather lookups against Open-Meteo, fronted by a short-lived cache.

pub mod cache;
pub mod client;
pub mod service;
pub mod types;

pub use cache::{MemoryWeatherCache, RedisWeatherCache, WeatherCache, DEFAULT_WEATHER_TTL};
pub use client::WeatherClient;
pub use service::WeatherService;
pub use types::*;
