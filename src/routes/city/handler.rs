use axum::extract::{Json, Query, State};
use serde::Deserialize;

use crate::AppState;
use crate::error::AppError;
use crate::weather::CitySuggestion;

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub name: Option<String>,
}

/// City autocomplete for the search box.
#[axum::debug_handler]
pub async fn suggest_cities(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<Vec<CitySuggestion>>, AppError> {
    let name = query.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let suggestions = state.weather.suggest_cities(name).await?;
    Ok(Json(suggestions))
}
