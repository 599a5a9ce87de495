//! HTTP client for the postal-code address lookup service
//!
//! Issues `GET {endpoint}?zipcode=...` and decodes the JSON body. The service
//! reports rejected input in the body's `status` field of a 200 response;
//! such bodies carry no results and decode to an empty lookup result.

use super::traits::PostalLookup;
use super::types::{AddressLookupResult, LookupError, LookupResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;

/// Default lookup endpoint
pub const DEFAULT_ENDPOINT: &str = "https://zipcloud.ibsnet.co.jp/api/search";

/// Status the service reports in the body on success
const STATUS_OK: u16 = 200;

/// Client for the address lookup service
#[derive(Debug, Clone)]
pub struct ZipcloudClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ZipcloudClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid lookup endpoint: {endpoint}"))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, endpoint })
    }

    fn request_url(&self, postal_code: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("zipcode", postal_code);
        url
    }
}

#[async_trait]
impl PostalLookup for ZipcloudClient {
    async fn lookup(&self, postal_code: &str) -> Result<AddressLookupResult, LookupError> {
        let url = self.request_url(postal_code);
        tracing::debug!(%url, "Requesting address lookup");

        let response: LookupResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Rejected input (e.g. wrong digit count) comes back as a body status
        // with no results, which the form reports like any other miss.
        if response.status != STATUS_OK {
            tracing::debug!(
                postal_code,
                status = response.status,
                message = response.message.as_deref().unwrap_or_default(),
                "Lookup service rejected the postal code"
            );
        }

        let candidates = response.results.unwrap_or_default();
        if let Some(first) = candidates.first() {
            tracing::debug!(
                postal_code,
                candidates = candidates.len(),
                zipcode = %first.zipcode,
                prefcode = %first.prefcode,
                prefecture = %first.address1,
                "Address lookup succeeded"
            );
        }

        Ok(AddressLookupResult { candidates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ZipcloudClient {
        ZipcloudClient::new(&format!("{}/api/search", server.uri())).unwrap()
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let err = ZipcloudClient::new("not a url").unwrap_err();
        assert!(err.to_string().contains("Invalid lookup endpoint"));
    }

    #[test]
    fn test_request_url_carries_zipcode() {
        let client = ZipcloudClient::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(
            client.request_url("1000001").as_str(),
            "https://zipcloud.ibsnet.co.jp/api/search?zipcode=1000001"
        );
    }

    #[test]
    fn test_request_url_encodes_input() {
        let client = ZipcloudClient::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(
            client.request_url("100 0001&x=1").as_str(),
            "https://zipcloud.ibsnet.co.jp/api/search?zipcode=100+0001%26x%3D1"
        );
    }

    #[tokio::test]
    async fn test_lookup_returns_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("zipcode", "1000001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": null,
                "results": [{
                    "address1": "東京都",
                    "address2": "千代田区",
                    "address3": "千代田",
                    "kana1": "ﾄｳｷｮｳﾄ",
                    "kana2": "ﾁﾖﾀﾞｸ",
                    "kana3": "ﾁﾖﾀﾞ",
                    "prefcode": "13",
                    "zipcode": "1000001"
                }],
                "status": 200
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).await.lookup("1000001").await.unwrap();
        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.resolve_city("1000001").unwrap(), "千代田区千代田");
    }

    #[tokio::test]
    async fn test_lookup_with_no_results_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": null,
                "results": null,
                "status": 200
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).await.lookup("0000000").await.unwrap();
        assert!(result.candidates.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_postal_code_is_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "パラメータ「郵便番号」の桁数が不正です。",
                "results": null,
                "status": 400
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).await.lookup("12").await.unwrap();
        assert!(result.candidates.is_empty());
        let err = result.resolve_city("12").unwrap_err();
        assert!(matches!(err, LookupError::AddressNotFound { .. }));
        assert!(err.is_user_facing());
    }

    #[tokio::test]
    async fn test_lookup_http_error_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).await.lookup("1000001").await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
        assert!(!err.is_user_facing());
    }

    #[tokio::test]
    async fn test_lookup_malformed_body_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.lookup("1000001").await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }
}
