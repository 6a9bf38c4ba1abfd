//! # GitHub Client
//!
//! HTTP client for the GitHub REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};

use super::error::{LookupError, LookupResult};
use super::RepositoryLookup;
use crate::RepositorySummary;

/// Media type recommended by the GitHub REST API.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// HTTP client for the GitHub API.
///
/// The client is cheaply cloneable and can be shared across tasks.
///
/// # Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use explorer_core::GithubClient;
///
/// let client = GithubClient::new("https://api.github.com", Duration::from_secs(30))?;
/// let repo = client.get_repository("facebook/react").await?;
/// println!("{}: {}", repo.full_name, repo.description);
/// ```
#[derive(Clone, Debug)]
pub struct GithubClient {
    base_url: String,
    http: Client,
}

impl GithubClient {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a new client against the given API base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The API root, e.g. `https://api.github.com`
    /// * `timeout` - Timeout applied to every request
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> LookupResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let http = Client::builder()
            .user_agent(concat!("github-explorer/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieves a repository by its `owner/name` identifier.
    ///
    /// # Errors
    ///
    /// * [`LookupError::NotFound`] - The API answered 404
    /// * [`LookupError::Status`] - Any other non-success status
    /// * [`LookupError::Network`] - Network request failed
    /// * [`LookupError::MalformedResponse`] - Body is not a repository summary
    pub async fn get_repository(&self, identifier: &str) -> LookupResult<RepositorySummary> {
        let url = format!("{}/repos/{}", self.base_url, identifier);
        tracing::debug!(%url, "Fetching repository");

        let res = self.http.get(&url).send().await?;
        let status = res.status();

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(identifier.to_string()));
        }

        if !status.is_success() {
            let message = match res.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%url, error = %e, "Failed to read error response body");
                    format!("unreadable response body: {e}")
                }
            };

            return Err(LookupError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = res.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| LookupError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl RepositoryLookup for GithubClient {
    async fn fetch_repository(&self, identifier: &str) -> LookupResult<RepositorySummary> {
        self.get_repository(identifier).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GithubClient {
        GithubClient::new(server.uri(), GithubClient::DEFAULT_TIMEOUT).unwrap()
    }

    #[tokio::test]
    async fn test_get_repository_parses_summary() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/facebook/react"))
            .and(header("accept", GITHUB_MEDIA_TYPE))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "full_name": "facebook/react",
                "description": "A JS library",
                "owner": { "login": "facebook", "avatar_url": "http://x/a.png" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let repo = client_for(&mock_server)
            .get_repository("facebook/react")
            .await
            .unwrap();

        assert_eq!(repo.full_name, "facebook/react");
        assert_eq!(repo.owner.login, "facebook");
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_ignored() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/rust-lang/rust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "full_name": "rust-lang/rust",
                "description": null,
                "owner": { "login": "rust-lang", "avatar_url": "http://x/r.png" }
            })))
            .mount(&mock_server)
            .await;

        let client = GithubClient::new(
            format!("{}/", mock_server.uri()),
            GithubClient::DEFAULT_TIMEOUT,
        )
        .unwrap();

        assert_eq!(client.base_url(), mock_server.uri());
        let repo = client.get_repository("rust-lang/rust").await.unwrap();
        assert_eq!(repo.description, "");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/nobody/nothing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Not Found"
            })))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .get_repository("nobody/nothing")
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::NotFound(ref id) if id == "nobody/nothing"));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/facebook/react"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .get_repository("facebook/react")
            .await
            .unwrap_err();

        match err {
            LookupError::Status { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_error_without_body_keeps_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/facebook/react"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .get_repository("facebook/react")
            .await
            .unwrap_err();

        match err {
            LookupError::Status { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unexpected_body_maps_to_malformed_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/facebook/react"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .get_repository("facebook/react")
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_network() {
        // Port 1 is reserved and refuses connections on loopback.
        let client =
            GithubClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

        let err = client.get_repository("facebook/react").await.unwrap_err();
        assert!(matches!(err, LookupError::Network(_)));
    }
}
