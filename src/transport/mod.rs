use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::{PixError, PixResult};

/// Performs the remote calls issued by a connection. Retry, backoff and
/// cancellation policy live behind this seam, not in the connection.
#[async_trait]
pub trait RestCaller: Send + Sync {
    async fn get_json(&self, url: &str, headers: &[(String, String)]) -> PixResult<Value>;

    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Value,
    ) -> PixResult<Value>;
}

/// Default reqwest-backed caller.
pub struct HttpCaller {
    http_client: Client,
}

impl HttpCaller {
    pub fn new() -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { http_client }
    }
}

impl Default for HttpCaller {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RestCaller for HttpCaller {
    async fn get_json(&self, url: &str, headers: &[(String, String)]) -> PixResult<Value> {
        let mut request = self.http_client.get(url);

        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;

        handle_response(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Value,
    ) -> PixResult<Value> {
        let mut request = self.http_client.post(url).json(body);

        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;

        handle_response(response).await
    }
}

async fn handle_response(response: reqwest::Response) -> PixResult<Value> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse OpenPix response: {} - Body: {}", e, body);
            PixError::Api(format!("Failed to parse response: {}", e))
        })
    } else {
        tracing::error!("OpenPix API error: {} - {}", status, body);

        let error_msg = match status {
            StatusCode::BAD_REQUEST => {
                if let Ok(error) = serde_json::from_str::<ApiErrorBody>(&body) {
                    error.error
                } else {
                    "Bad request".to_string()
                }
            }
            StatusCode::UNAUTHORIZED => "Invalid application credentials".to_string(),
            StatusCode::NOT_FOUND => "Resource not found".to_string(),
            StatusCode::TOO_MANY_REQUESTS => "Rate limit exceeded".to_string(),
            _ => format!("API error: {}", status),
        };

        Err(PixError::Api(error_msg))
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: String,
}
