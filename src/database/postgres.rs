use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{StoreError, Widget, WidgetStore};

/// 组件存储库实现
#[derive(Debug, Clone)]
pub struct PgWidgetStore {
    pool: PgPool,
}

impl PgWidgetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `widgets` table and its indexes if they are missing.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl WidgetStore for PgWidgetStore {
    async fn list(&self) -> Result<Vec<Widget>, StoreError> {
        let widgets = sqlx::query_as::<_, Widget>(
            r#"
            SELECT id, location, created_at, user_id
            FROM widgets
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(widgets)
    }

    async fn find_by_location(&self, location: &str) -> Result<Option<Widget>, StoreError> {
        let widget = sqlx::query_as::<_, Widget>(
            r#"
            SELECT id, location, created_at, user_id
            FROM widgets
            WHERE lower(location) = lower($1)
            LIMIT 1
            "#,
        )
        .bind(location)
        .fetch_optional(&self.pool)
        .await?;

        Ok(widget)
    }

    async fn insert(&self, location: &str, user_id: Option<Uuid>) -> Result<Widget, StoreError> {
        let id = Uuid::new_v4();

        let result = sqlx::query_as::<_, Widget>(
            r#"
            INSERT INTO widgets (id, location, created_at, user_id)
            VALUES ($1, $2, NOW(), $3)
            RETURNING id, location, created_at, user_id
            "#,
        )
        .bind(id)
        .bind(location)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(widget) => {
                tracing::info!("Created widget {} for {}", widget.id, widget.location);
                Ok(widget)
            }
            // 并发创建时由唯一索引兜底
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::DuplicateLocation(location.to_string()))
            }
            Err(e) => {
                tracing::error!("Failed to create widget: {:?}", e);
                Err(e.into())
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Widget>, StoreError> {
        let widget = sqlx::query_as::<_, Widget>(
            r#"
            DELETE FROM widgets
            WHERE id = $1
            RETURNING id, location, created_at, user_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(widget)
    }
}
