use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use super::{StoreError, Widget, WidgetStore};

/// Widget storage held in process memory. Mirrors the unique
/// `lower(location)` index of the Postgres schema.
#[derive(Debug, Default)]
pub struct MemoryWidgetStore {
    widgets: Mutex<Vec<Widget>>,
}

impl MemoryWidgetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WidgetStore for MemoryWidgetStore {
    async fn list(&self) -> Result<Vec<Widget>, StoreError> {
        Ok(self.widgets.lock().clone())
    }

    async fn find_by_location(&self, location: &str) -> Result<Option<Widget>, StoreError> {
        let needle = location.to_lowercase();
        Ok(self
            .widgets
            .lock()
            .iter()
            .find(|w| w.location.to_lowercase() == needle)
            .cloned())
    }

    async fn insert(&self, location: &str, user_id: Option<Uuid>) -> Result<Widget, StoreError> {
        let mut widgets = self.widgets.lock();
        let needle = location.to_lowercase();
        if widgets.iter().any(|w| w.location.to_lowercase() == needle) {
            return Err(StoreError::DuplicateLocation(location.to_string()));
        }

        let widget = Widget {
            id: Uuid::new_v4(),
            location: location.to_string(),
            created_at: Utc::now(),
            user_id,
        };
        widgets.push(widget.clone());
        Ok(widget)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Widget>, StoreError> {
        let mut widgets = self.widgets.lock();
        Ok(widgets
            .iter()
            .position(|w| w.id == id)
            .map(|idx| widgets.remove(idx)))
    }
}
