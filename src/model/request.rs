use std::fmt::Display;

use super::REPOSITORIES_PER_PAGE;

/// A search request being made to the GitHub API for a user and one page of their repositories.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SearchRequest {
    /// The name of the user searched.
    pub(crate) user_name: String,

    /// The page of repositories requested, starting at 1.
    pub(crate) page: u32,

    /// The number of repositories per page.
    pub(crate) per_page: u32,

    /// The dispatch sequence number, increasing with each request issued.
    pub(crate) sequence: u64,
}

impl SearchRequest {
    /// Creates a new `SearchRequest` with the given user name, page and sequence number.
    pub fn new(user_name: &str, page: u32, sequence: u64) -> Self {
        Self {
            user_name: user_name.to_string(),
            page,
            per_page: REPOSITORIES_PER_PAGE,
            sequence,
        }
    }

    /// Retrieves the name of the user searched.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Retrieves the page requested.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Retrieves the number of repositories per page.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Retrieves the dispatch sequence number.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Creates a dummy `SearchRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("octocat", 1, 1)
    }
}

impl Display for SearchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchRequest #{}: user_name={}, page={}, per_page={}",
            self.sequence, self.user_name, self.page, self.per_page
        )
    }
}
