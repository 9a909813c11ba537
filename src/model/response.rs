use super::RepositorySummary;

/// One page of the public repositories of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositoryPage {
    /// Retrieved repositories, in the order returned by the API
    pub(crate) repositories: Vec<RepositorySummary>,

    /// The last page number advertised by the API `Link` header, if any
    pub(crate) last_page: Option<u32>,
}

impl RepositoryPage {
    /// Creates a new `RepositoryPage` instance.
    pub fn new(repositories: Vec<RepositorySummary>, last_page: Option<u32>) -> Self {
        Self {
            repositories,
            last_page,
        }
    }

    /// Retrieves the list of repositories.
    pub fn repositories(&self) -> &[RepositorySummary] {
        &self.repositories
    }

    /// Retrieves the last page number advertised by the API.
    pub fn last_page(&self) -> Option<u32> {
        self.last_page
    }

    /// Consumes the page, returning its repositories.
    pub fn into_repositories(self) -> Vec<RepositorySummary> {
        self.repositories
    }
}
