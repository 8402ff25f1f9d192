//! Static greeting endpoints.

use axum::Json;
use axum::extract::Path;
use serde::Serialize;

/// Body of the greeting endpoints.
#[derive(Serialize)]
pub struct Greeting {
    pub message: String,
}

/// `GET /`
pub async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Mental Health and Social Media API".to_string(),
    })
}

/// `GET /hello/{name}`
pub async fn hello(Path(name): Path<String>) -> Json<Greeting> {
    Json(Greeting {
        message: format!("Hello {name}, welcome to the survey management system"),
    })
}
