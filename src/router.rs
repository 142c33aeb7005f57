//! Liveness endpoint for external uptime probing.
//!
//! Serves a single static route; uptime monitors hit `GET /` to confirm the
//! process is alive. Runs alongside the gateway client in its own task.

use axum::{routing::get, Router};

const ALIVE_MESSAGE: &str = "🧠 warden is alive!";

pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    ALIVE_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Tests that the root route answers with the static alive message.
    ///
    /// Expected: 200 OK with the fixed body
    #[tokio::test]
    async fn root_returns_alive_message() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, ALIVE_MESSAGE.as_bytes());
    }
}
