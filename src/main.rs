use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wetter_backend::{
    AppState,
    config::Config,
    database::PgWidgetStore,
    router::create_router,
    weather::{MemoryWeatherCache, RedisWeatherCache, WeatherCache, WeatherClient, WeatherService},
};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("DATABASE_URL must be set");

    // 设置数据库连接池
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'wetter_backend';")
                    .await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to Postgres");
    tracing::info!("Database is connected");

    let store = PgWidgetStore::new(pool);
    store.migrate().await.expect("Failed to run migrations");

    // 天气缓存：配置了 Redis 则多实例共享，否则进程内缓存
    let cache: Arc<dyn WeatherCache> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str()).expect("Failed to create Redis client");
            tracing::info!("Using Redis weather cache");
            Arc::new(RedisWeatherCache::new(
                Arc::new(client),
                config.weather_cache_ttl(),
            ))
        }
        None => {
            tracing::info!("Using in-memory weather cache");
            Arc::new(MemoryWeatherCache::new(config.weather_cache_ttl()))
        }
    };

    let client = WeatherClient::new(&config).expect("Failed to build HTTP client");

    // 设置应用状态
    let state = AppState {
        widgets: Arc::new(store),
        weather: WeatherService::new(client, cache),
        config: config.clone(),
    };

    let app = create_router(state);

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Server is running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");

    tracing::info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
