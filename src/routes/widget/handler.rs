use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use futures_util::future::try_join_all;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::utils::{normalize_location, validate_location};

use super::model::{CreateWidgetRequest, DeleteWidgetResponse, WidgetResponse};

#[axum::debug_handler]
pub async fn list_widgets(
    State(state): State<AppState>,
) -> Result<Json<Vec<WidgetResponse>>, AppError> {
    let widgets = state.widgets.list().await?;
    tracing::debug!("Resolving weather for {} widgets", widgets.len());

    // 并发获取天气，任意一个失败则整个请求失败
    let lookups = widgets.into_iter().map(|widget| {
        let weather = state.weather.clone();
        async move {
            let location = normalize_location(&widget.location);
            let data = weather.weather_for(&location).await?;
            Ok::<_, AppError>(WidgetResponse::new(widget, location, data))
        }
    });

    Ok(Json(try_join_all(lookups).await?))
}

#[axum::debug_handler]
pub async fn create_widget(
    State(state): State<AppState>,
    payload: Result<Json<CreateWidgetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WidgetResponse>), AppError> {
    let Json(req) = payload?;
    let location = validate_location(req.location.as_deref())?;

    if state.widgets.find_by_location(&location).await?.is_some() {
        return Err(AppError::Conflict(
            "Widget for this location already exists".into(),
        ));
    }

    // 先查天气，查不到的城市不落库
    let weather = state.weather.weather_for(&location).await?;
    let widget = state.widgets.insert(&location, req.user_id).await?;

    let location = widget.location.clone();
    Ok((
        StatusCode::CREATED,
        Json(WidgetResponse::new(widget, location, weather)),
    ))
}

#[axum::debug_handler]
pub async fn delete_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteWidgetResponse>, AppError> {
    let not_found = || AppError::NotFound("Widget not found".into());

    let id = Uuid::parse_str(&id).map_err(|_| not_found())?;
    match state.widgets.delete(id).await? {
        Some(widget) => {
            tracing::info!("Deleted widget {} ({})", widget.id, widget.location);
            Ok(Json(DeleteWidgetResponse {
                message: "Widget deleted successfully".into(),
            }))
        }
        None => Err(not_found()),
    }
}
