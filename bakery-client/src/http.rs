//! HTTP client for the bakery REST API

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;

use crate::{ClientConfig, ClientError, ClientResult};

/// Thin JSON wrapper around `reqwest`
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(Method::GET, path, None::<&()>).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.url(path)).query(query);
        Self::handle_response(request.send().await?).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(Method::POST, path, None::<&()>).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        self.send(Method::PUT, path, Some(body)).await
    }

    /// Make a DELETE request; the server answers 204 with no body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, path, "Sending request");
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::handle_response(request.send().await?).await
    }

    /// Decode a success body, or turn an error body into [`ClientError::Api`]
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        Err(parse_error(status, text))
    }
}

fn parse_error(status: StatusCode, body: String) -> ClientError {
    match serde_json::from_str::<ApiResponse<serde_json::Value>>(&body) {
        Ok(parsed) if parsed.code.is_some() => ClientError::Api(parsed.into_error()),
        _ => ClientError::Status { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"code":4003,"message":"Only pending orders can be cancelled","details":{"status":"accepted"}}"#;
        let err = parse_error(StatusCode::CONFLICT, body.to_string());
        assert_eq!(err.code(), Some(ErrorCode::OrderNotCancellable));

        let err = parse_error(StatusCode::UNPROCESSABLE_ENTITY, "missing field `name`".into());
        assert!(matches!(err, ClientError::Status { status, .. } if status == StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(client.url("/api/Cakes"), "http://localhost:5000/api/Cakes");
        assert_eq!(client.url("api/Cakes/1"), "http://localhost:5000/api/Cakes/1");
    }
}
