use anyhow::Context;
use log::debug;
use reqwest::{
    Client, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, LINK, USER_AGENT},
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    GitHubFetcher, RepositoryPage, RepositorySummary, SearchRequest, StdResult, UserProfile,
};

/// The REST production endpoint for GitHub.
pub const GITHUB_REST_ENDPOINT: &str = "https://api.github.com";

const GITHUB_USER_AGENT: &str = "github-user-search";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// Parse error
    #[error("Parsing error: {0}")]
    Parse(String),
    /// Remote error
    #[error("Remote error: {0}")]
    Remote(String),
    /// Unexpected HTTP status
    #[error("Unexpected status {status} for {url}")]
    Status {
        /// The HTTP status code returned
        status: u16,
        /// The URL requested
        url: String,
    },
}

/// Extracts the `page` number of the `rel="last"` entry of a `Link` header.
fn parse_last_page(link_header: &str) -> Option<u32> {
    link_header.split(',').find_map(|entry| {
        let (target, params) = entry.trim().split_once(';')?;
        if !params.split(';').any(|param| param.trim() == r#"rel="last""#) {
            return None;
        }
        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;

        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}

/// Fetches user data from the GitHub REST API.
#[derive(Debug)]
pub struct RestFetcher {
    client: Client,
    endpoint: Url,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance targeting the given endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid API endpoint: {endpoint}"))?;
        if endpoint.cannot_be_a_base() {
            return Err(
                FetcherError::Parse(format!("Endpoint cannot be a base URL: {endpoint}")).into(),
            );
        }
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(GITHUB_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    fn user_url(&self, user_name: &str, suffix: Option<&str>) -> StdResult<Url> {
        let mut url = self.endpoint.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                FetcherError::Parse(format!("Endpoint cannot be a base URL: {}", self.endpoint))
            })?;
            segments.pop_if_empty().push("users").push(user_name);
            if let Some(suffix) = suffix {
                segments.push(suffix);
            }
        }

        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> StdResult<(HeaderMap, String)> {
        let response = request
            .send()
            .await
            .map_err(|e| FetcherError::Remote(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetcherError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            }
            .into());
        }
        let headers = response.headers().to_owned();
        let body = response
            .text()
            .await
            .map_err(|e| FetcherError::Remote(e.to_string()))?;

        Ok((headers, body))
    }

    fn parse_body<T: DeserializeOwned>(body: &str) -> StdResult<T> {
        Ok(serde_json::from_str(body).map_err(|e| FetcherError::Parse(e.to_string()))?)
    }
}

#[async_trait::async_trait]
impl GitHubFetcher for RestFetcher {
    async fn fetch_user(&self, request: &SearchRequest) -> StdResult<UserProfile> {
        let url = self.user_url(request.user_name(), None)?;
        debug!("Fetching user profile: {url}");
        let (_, body) = self.send(self.client.get(url)).await?;

        Self::parse_body(&body)
    }

    async fn fetch_repositories(&self, request: &SearchRequest) -> StdResult<RepositoryPage> {
        let url = self.user_url(request.user_name(), Some("repos"))?;
        debug!("Fetching repositories: {url}, page={}", request.page());
        let (headers, body) = self
            .send(
                self.client
                    .get(url)
                    .query(&[("page", request.page()), ("per_page", request.per_page())]),
            )
            .await?;
        let repositories: Vec<RepositorySummary> = Self::parse_body(&body)?;
        let last_page = headers
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_last_page);

        Ok(RepositoryPage::new(repositories, last_page))
    }
}
