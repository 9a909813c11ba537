use std::fmt::Display;

use super::{PaginationState, RepositorySummary, UserProfile};

/// A snapshot of everything displayed by the search tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// The query dispatched after debouncing
    pub(crate) query: String,

    /// The pagination of the repositories
    pub(crate) pagination: PaginationState,

    /// The last user profile fetched
    pub(crate) user: Option<UserProfile>,

    /// The last page of repositories fetched
    pub(crate) repositories: Option<Vec<RepositorySummary>>,

    /// Whether a fetch is in flight
    pub(crate) is_fetching: bool,
}

impl SearchState {
    /// Retrieves the query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Retrieves the pagination.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Retrieves the user profile, if one has been fetched.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Retrieves the repositories, if a page has been fetched.
    pub fn repositories(&self) -> Option<&[RepositorySummary]> {
        self.repositories.as_deref()
    }

    /// Checks whether a fetch is in flight.
    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Checks whether nothing has been searched yet.
    pub fn is_idle(&self) -> bool {
        self.query.is_empty() && !self.is_fetching
    }
}

impl Display for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchState: query={:?}, {}, user={}, repositories={}, fetching={}",
            self.query,
            self.pagination,
            self.user
                .as_ref()
                .map(|user| user.login().to_string())
                .unwrap_or_default(),
            self.repositories
                .as_ref()
                .map(|repositories| repositories.len())
                .unwrap_or_default(),
            self.is_fetching
        )
    }
}
