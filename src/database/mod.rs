// 数据库模块
// 组件记录的存储接口及其实现

pub mod memory; // 内存存储，测试和本地运行用
pub mod postgres; // Postgres 存储

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub use memory::MemoryWidgetStore;
pub use postgres::PgWidgetStore;

/// A saved widget. `location` is stored already title-cased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Widget {
    pub id: Uuid,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Widget for location {0} already exists")]
    DuplicateLocation(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait WidgetStore: Send + Sync {
    /// All widgets, oldest first.
    async fn list(&self) -> Result<Vec<Widget>, StoreError>;

    /// Case-insensitive exact match on the location.
    async fn find_by_location(&self, location: &str) -> Result<Option<Widget>, StoreError>;

    async fn insert(&self, location: &str, user_id: Option<Uuid>) -> Result<Widget, StoreError>;

    /// Returns the removed widget, or `None` when no widget had this id.
    async fn delete(&self, id: Uuid) -> Result<Option<Widget>, StoreError>;
}
