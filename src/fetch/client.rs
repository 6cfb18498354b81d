/// Messages API client implementation.
///
/// This module provides `ApiClient` for fetching response records with a single
/// synchronous GET request, along with its error type and builder.
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

/// Endpoint used when neither the builder nor the environment names one.
pub const DEFAULT_API_URL: &str = "https://devapi.beyondchats.com/api/get_message_with_sources";

/// Environment variable consulted when no URL is set on the builder.
const API_URL_ENV: &str = "CITEMAP_API_URL";

/// Errors that can occur when fetching response records.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-related errors (connection failures, DNS resolution, body read, etc.)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// Response body is not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Response body is non-empty JSON but not an array of records
    #[error("Unexpected response body: expected a JSON array, got {found}")]
    UnexpectedBody { found: &'static str },

    /// Invalid URL configuration error
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Builder for constructing `ApiClient` instances.
///
/// # Examples
///
/// ```
/// use citemap::fetch::ApiClientBuilder;
///
/// let client = ApiClientBuilder::new()
///     .url("http://localhost:8080/api/messages")
///     .build()
///     .expect("Failed to create client");
/// ```
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    url: Option<String>,
}

impl ApiClientBuilder {
    /// Creates a new `ApiClientBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL records are fetched from.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builds the `ApiClient` with the configured settings.
    ///
    /// # Environment Variables
    ///
    /// If `url()` was not called, this method will check the `CITEMAP_API_URL`
    /// environment variable. If not set, it defaults to [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the URL cannot be parsed.
    pub fn build(self) -> Result<ApiClient, FetchError> {
        let url = match self.url {
            Some(url) => url,
            None => std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        };

        reqwest::Url::parse(&url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        // Library default timeouts; no overrides.
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(FetchError::Network)?;

        Ok(ApiClient { client, url })
    }
}

/// Synchronous HTTP client for the messages API.
///
/// Performs exactly one GET per call. There is no retry logic.
pub struct ApiClient {
    client: reqwest::blocking::Client,
    url: String,
}

/// Trait for anything that can supply ResponseItem-shaped records.
///
/// Implemented by `ApiClient`; enables substituting canned records in tests.
pub trait ResponseSource {
    /// Returns the raw records, not yet validated.
    fn fetch_records(&self) -> Result<Vec<Value>, FetchError>;
}

impl ApiClient {
    /// Returns the URL configured for this client.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_internal(&self) -> Result<Vec<Value>, FetchError> {
        debug!(url = %self.url, "fetching response records");

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(FetchError::Network)?;
        let json: Value = serde_json::from_str(&body).map_err(FetchError::Serialization)?;

        match json {
            Value::Array(records) => {
                debug!(count = records.len(), "fetched response records");
                Ok(records)
            }
            other if is_empty_body(&other) => {
                debug!(body = json_kind(&other), "empty response body");
                Ok(Vec::new())
            }
            other => Err(FetchError::UnexpectedBody {
                found: json_kind(&other),
            }),
        }
    }
}

impl ResponseSource for ApiClient {
    fn fetch_records(&self) -> Result<Vec<Value>, FetchError> {
        self.fetch_internal()
    }
}

/// Fetches records from `url`, logging and swallowing any failure.
///
/// Returns `None` if the URL is invalid or the request fails for any reason.
/// Callers that need to tell a failed fetch apart from an empty one should
/// use [`ApiClient`] directly.
pub fn fetch_data(url: &str) -> Option<Vec<Value>> {
    let result = ApiClientBuilder::new()
        .url(url)
        .build()
        .and_then(|client| client.fetch_records());

    match result {
        Ok(records) => Some(records),
        Err(e) => {
            error!("Error fetching data from API: {e}");
            None
        }
    }
}

/// Returns true for bodies that carry no records: `null`, `false`, zero,
/// and empty strings or objects.
fn is_empty_body(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves a single canned HTTP response on a loopback port and returns its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let mut request = Vec::new();
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}/api/get_message_with_sources", addr)
    }

    #[test]
    fn http_error_variant_with_status_code() {
        let err = FetchError::Http { status: 404 };
        let msg = format!("{}", err);
        assert!(msg.contains("HTTP error"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn builder_sets_custom_url() {
        let builder = ApiClientBuilder::new().url("http://example.com/api");
        assert_eq!(builder.url, Some("http://example.com/api".to_string()));
    }

    #[test]
    #[serial]
    fn build_uses_default_url_when_unset() {
        unsafe {
            std::env::remove_var(API_URL_ENV);
        }

        let client = ApiClientBuilder::new().build().unwrap();
        assert_eq!(client.url(), DEFAULT_API_URL);
    }

    #[test]
    #[serial]
    fn build_reads_url_environment_variable_if_set() {
        unsafe {
            std::env::set_var(API_URL_ENV, "http://custom-host:9000/messages");
        }

        let client = ApiClientBuilder::new().build().unwrap();
        assert_eq!(client.url(), "http://custom-host:9000/messages");

        unsafe {
            std::env::remove_var(API_URL_ENV);
        }
    }

    #[test]
    #[serial]
    fn builder_url_takes_precedence_over_environment() {
        unsafe {
            std::env::set_var(API_URL_ENV, "http://env-host:9000/messages");
        }

        let client = ApiClientBuilder::new()
            .url("http://builder-host:9000/messages")
            .build()
            .unwrap();
        assert_eq!(client.url(), "http://builder-host:9000/messages");

        unsafe {
            std::env::remove_var(API_URL_ENV);
        }
    }

    #[test]
    fn build_returns_error_if_invalid_url_provided() {
        let result = ApiClientBuilder::new().url("not-a-valid-url").build();
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn fetch_returns_records_from_json_array() {
        let url = serve_once("200 OK", r#"[{"response": "hi", "sources": []}]"#);
        let client = ApiClientBuilder::new().url(url).build().unwrap();

        let records = client.fetch_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["response"], "hi");
    }

    #[test]
    fn fetch_maps_server_error_to_http_variant() {
        let url = serve_once("500 Internal Server Error", "{}");
        let client = ApiClientBuilder::new().url(url).build().unwrap();

        let result = client.fetch_records();
        assert!(matches!(result, Err(FetchError::Http { status: 500 })));
    }

    #[test]
    fn fetch_rejects_non_array_body() {
        let url = serve_once("200 OK", r#"{"data": []}"#);
        let client = ApiClientBuilder::new().url(url).build().unwrap();

        match client.fetch_records() {
            Err(FetchError::UnexpectedBody { found }) => assert_eq!(found, "an object"),
            other => panic!("Expected UnexpectedBody, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn fetch_treats_null_and_empty_object_bodies_as_no_records() {
        for body in ["null", "{}", "\"\""] {
            let url = serve_once("200 OK", body);
            let client = ApiClientBuilder::new().url(url).build().unwrap();
            assert!(client.fetch_records().unwrap().is_empty(), "body {body}");
        }
    }

    #[test]
    fn fetch_rejects_invalid_json_body() {
        let url = serve_once("200 OK", "not json");
        let client = ApiClientBuilder::new().url(url).build().unwrap();

        assert!(matches!(
            client.fetch_records(),
            Err(FetchError::Serialization(_))
        ));
    }

    #[test]
    fn fetch_data_returns_none_for_unreachable_host() {
        assert!(fetch_data("http://127.0.0.1:65535/api").is_none());
    }

    #[test]
    fn fetch_data_returns_none_for_invalid_url() {
        assert!(fetch_data("not-a-valid-url").is_none());
    }

    #[test]
    fn fetch_data_returns_none_for_http_error() {
        let url = serve_once("404 Not Found", "{}");
        assert!(fetch_data(&url).is_none());
    }
}
