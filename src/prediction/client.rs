use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

/// Where forwarded statistics go. Not configurable.
pub const PREDICTION_URL: &str = "http://127.0.0.1:5000/points-prediction";

/// Anything that can accept an encoded prediction payload.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// POST `body` and return the remote status code.
    ///
    /// Only transport failures are errors; any status the service answers
    /// with, including 5xx, is `Ok`.
    async fn submit(&self, body: String) -> Result<StatusCode>;

    /// Target URL, for logging.
    fn endpoint(&self) -> &str;
}

/// HTTP client for the points-prediction service.
#[derive(Clone)]
pub struct HttpPredictionClient {
    http: Client,
    url: String,
}

impl HttpPredictionClient {
    /// Client with reqwest's default connection and timeout behaviour.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(PREDICTION_URL)
    }

    fn with_endpoint(url: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpPredictionClient {
            http,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    async fn submit(&self, body: String) -> Result<StatusCode> {
        debug!("POST {} ({} bytes)", self.url, body.len());

        let resp = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .context("Prediction service request failed")?;

        let status = resp.status();
        if status.is_success() {
            debug!("Prediction service answered {}", status);
        } else {
            warn!("Prediction service answered {} (ignored)", status);
        }
        Ok(status)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, routing::post, Router};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<(Option<String>, String)>>>;

    async fn spawn_prediction_stub(status: StatusCode) -> (String, Captured) {
        let captured: Captured = Arc::default();
        let sink = captured.clone();
        let app = Router::new().route(
            "/points-prediction",
            post(move |headers: HeaderMap, body: String| {
                let sink = sink.clone();
                async move {
                    let content_type = headers
                        .get(CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    sink.lock().unwrap().push((content_type, body));
                    status
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        (format!("http://{}/points-prediction", addr), captured)
    }

    #[test]
    fn test_default_endpoint_is_fixed() {
        let client = HttpPredictionClient::new().unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:5000/points-prediction");
    }

    #[tokio::test]
    async fn test_submit_posts_json_body() {
        let (url, captured) = spawn_prediction_stub(StatusCode::OK).await;
        let client = HttpPredictionClient::with_endpoint(&url).unwrap();

        let status = client.submit(r#""{\"MIN\": \"36\"}""#.to_string()).await.unwrap();
        assert_eq!(status, StatusCode::OK);

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].0.as_deref(), Some("application/json"));
        assert_eq!(captured[0].1, r#""{\"MIN\": \"36\"}""#);
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_failure() {
        let (url, _captured) = spawn_prediction_stub(StatusCode::INTERNAL_SERVER_ERROR).await;
        let client = HttpPredictionClient::with_endpoint(&url).unwrap();

        let status = client.submit("\"{}\"".to_string()).await.unwrap();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        // Grab a free port, then close it again.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            HttpPredictionClient::with_endpoint(&format!("http://{}/points-prediction", addr))
                .unwrap();
        assert!(client.submit("\"{}\"".to_string()).await.is_err());
    }
}
