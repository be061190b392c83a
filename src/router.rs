use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::CorsLayer;

use crate::{AppState, middleware::log_errors, routes};

pub fn widget_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/widgets",
            get(routes::widget::list_widgets).post(routes::widget::create_widget),
        )
        .route("/widgets/{id}", delete(routes::widget::delete_widget))
}

pub fn city_routes() -> Router<AppState> {
    Router::new().route("/cities", get(routes::city::suggest_cities))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::hello))
        .merge(widget_routes())
        .merge(city_routes())
        .layer(axum::middleware::from_fn(log_errors))
        // 前端部署在不同的源上
        .layer(CorsLayer::permissive())
        .with_state(state)
}
