use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::Widget;
use crate::weather::WeatherPayload;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWidgetRequest {
    pub location: Option<String>,
    pub user_id: Option<Uuid>,
}

/// Widget as the frontend sees it, with current weather attached.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub location: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<Uuid>,
    pub weather: WeatherPayload,
}

impl WidgetResponse {
    pub fn new(widget: Widget, location: String, weather: WeatherPayload) -> Self {
        Self {
            id: widget.id,
            location,
            created_at: widget.created_at,
            user_id: widget.user_id,
            weather,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteWidgetResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_frontend_field_names() {
        let widget = Widget {
            id: Uuid::new_v4(),
            location: "Berlin".into(),
            created_at: Utc::now(),
            user_id: None,
        };
        let id = widget.id;
        let resp = WidgetResponse::new(
            widget,
            "Berlin".into(),
            WeatherPayload {
                temperature: 18.2,
                description: "Cloudy".into(),
            },
        );

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["_id"], id.to_string());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("userId").is_none());
        assert_eq!(json["weather"]["temperature"], 18.2);
        assert_eq!(json["weather"]["description"], "Cloudy");
    }

    #[test]
    fn request_accepts_missing_location() {
        let req: CreateWidgetRequest = serde_json::from_str("{}").unwrap();
        assert!(req.location.is_none());
        assert!(req.user_id.is_none());
    }
}
