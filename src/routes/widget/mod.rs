mod handler;
mod model;

pub use handler::{create_widget, delete_widget, list_widgets};
pub use model::{CreateWidgetRequest, DeleteWidgetResponse, WidgetResponse};
