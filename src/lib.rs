use std::sync::Arc;

use config::Config;
use database::WidgetStore;
use weather::WeatherService;

pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod utils;
pub mod weather;

#[derive(Clone)]
pub struct AppState {
    pub widgets: Arc<dyn WidgetStore>,
    pub weather: WeatherService,
    pub config: Config,
}
