//! Greeting endpoint

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HelloResponse {
    pub hello: &'static str,
}

/// GET /
pub(super) async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        hello: "Welcome to todomart",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn says_hello() {
        let Json(body) = hello().await;
        assert!(!body.hello.is_empty());
    }
}
