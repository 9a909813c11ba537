use crate::{RepositoryPage, SearchRequest, StdResult, UserProfile};

/// A trait for fetching user data from the GitHub API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GitHubFetcher: Sync + Send {
    /// Fetches the profile of the user searched.
    async fn fetch_user(&self, request: &SearchRequest) -> StdResult<UserProfile>;

    /// Fetches the requested page of the user public repositories.
    async fn fetch_repositories(&self, request: &SearchRequest) -> StdResult<RepositoryPage>;
}
