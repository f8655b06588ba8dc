/// HTTP client for the Pixabay search API
///
/// One GET per call, no retry, no backoff: a failure propagates
/// immediately to the controller, which surfaces it as a toast.

use thiserror::Error;

use super::types::SearchResponse;
use crate::state::session::PER_PAGE;

/// Production API endpoint
const BASE_URL: &str = "https://pixabay.com/api/";

/// Errors the search client can produce.
/// The variants carry owned strings so the error can ride inside iced
/// messages (which must be `Clone`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Transport-level failure (DNS, connection, TLS, ...)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("server responded with HTTP {0}")]
    Status(u16),
    /// The body was not the JSON shape we expect
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Malformed(err.to_string())
        } else {
            SearchError::Network(err.to_string())
        }
    }
}

/// Thin wrapper around `reqwest::Client` holding the API credential.
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SearchClient {
    /// Create a client against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Create a client against an arbitrary endpoint (used by tests)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch one page of search results.
    ///
    /// The request shape is fixed: photos only, horizontal orientation,
    /// safe search on, 40 results per page. Only `q` and `page` vary.
    pub async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResponse, SearchError> {
        let page = page.to_string();
        let per_page = PER_PAGE.to_string();

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("image_type", "photo"),
                ("orientation", "horizontal"),
                ("safesearch", "true"),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|err| SearchError::Malformed(err.to_string()))
    }

    /// Download raw image bytes (gallery thumbnails and full-size views)
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, SearchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(server: &mockito::ServerGuard) -> SearchClient {
        SearchClient::with_base_url("test-key".to_string(), server.url())
    }

    #[tokio::test]
    async fn test_fetch_page_parses_hits() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("key".into(), "test-key".into()),
                mockito::Matcher::UrlEncoded("q".into(), "sunset".into()),
                mockito::Matcher::UrlEncoded("image_type".into(), "photo".into()),
                mockito::Matcher::UrlEncoded("orientation".into(), "horizontal".into()),
                mockito::Matcher::UrlEncoded("safesearch".into(), "true".into()),
                mockito::Matcher::UrlEncoded("page".into(), "2".into()),
                mockito::Matcher::UrlEncoded("per_page".into(), "40".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "total": 120, "totalHits": 83,
                    "hits": [{
                        "id": 1,
                        "tags": "sunset, sea",
                        "webformatURL": "http://img/web.jpg",
                        "largeImageURL": "http://img/large.jpg",
                        "likes": 10, "views": 100, "comments": 3, "downloads": 42
                    }]
                }"#,
            )
            .create_async()
            .await;

        let page = test_client(&server).fetch_page("sunset", 2).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.total_hits, 83);
        assert_eq!(page.hits.len(), 1);
        assert_eq!(page.hits[0].downloads, 42);
    }

    #[tokio::test]
    async fn test_fetch_page_empty_results() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"total": 0, "totalHits": 0, "hits": []}"#)
            .create_async()
            .await;

        let page = test_client(&server).fetch_page("zxqj", 1).await.unwrap();

        assert_eq!(page.total_hits, 0);
        assert!(page.hits.is_empty());
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .with_body("[ERROR 429] API rate limit exceeded")
            .create_async()
            .await;

        let err = test_client(&server).fetch_page("cats", 1).await.unwrap_err();

        assert_eq!(err, SearchError::Status(429));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_malformed_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = test_client(&server).fetch_page("cats", 1).await.unwrap_err();

        assert!(matches!(err, SearchError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_fetch_image_returns_bytes() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/img.jpg")
            .with_status(200)
            .with_body(vec![0xFF, 0xD8, 0xFF, 0xD9])
            .create_async()
            .await;

        let url = format!("{}/img.jpg", server.url());
        let bytes = test_client(&server).fetch_image(&url).await.unwrap();

        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }

    #[tokio::test]
    async fn test_fetch_image_missing_maps_to_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/gone.jpg")
            .with_status(404)
            .create_async()
            .await;

        let url = format!("{}/gone.jpg", server.url());
        let err = test_client(&server).fetch_image(&url).await.unwrap_err();

        assert_eq!(err, SearchError::Status(404));
    }
}
