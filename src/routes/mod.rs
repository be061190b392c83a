pub mod city;
pub mod widget;

/// Health check.
pub async fn hello() -> &'static str {
    "Hello World!"
}
