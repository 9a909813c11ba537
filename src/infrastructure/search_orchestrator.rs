use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use log::{debug, error, info, warn};
use tokio::sync::RwLock;

use crate::{
    GitHubFetcher, PaginationState, SearchRenderer, SearchRequest, SearchState, StdResult,
};

/// Drives the fetches of a user profile and repositories as the query or page changes.
///
/// Each dispatched fetch carries a sequence number; only the latest one is allowed to
/// update the state, so a slow response never overwrites the result of a newer search.
pub struct SearchOrchestrator {
    fetcher: Arc<dyn GitHubFetcher>,
    renderer: Arc<dyn SearchRenderer>,
    state: RwLock<SearchState>,
    latest_sequence: AtomicU64,
}

impl SearchOrchestrator {
    /// Creates a new `SearchOrchestrator` instance with the given fetcher and renderer.
    pub fn new(fetcher: Arc<dyn GitHubFetcher>, renderer: Arc<dyn SearchRenderer>) -> Self {
        Self {
            fetcher,
            renderer,
            state: RwLock::new(SearchState::default()),
            latest_sequence: AtomicU64::new(0),
        }
    }

    /// Returns a snapshot of the current state.
    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Searches a new user, starting from the first page of repositories.
    pub async fn set_query(&self, query: &str) -> StdResult<()> {
        let query = query.trim();
        {
            let mut state = self.state.write().await;
            if state.query == query {
                debug!("Query unchanged: {query:?}");
                return Ok(());
            }
            state.query = query.to_string();
            state.pagination = PaginationState::default();
        }

        self.refresh().await
    }

    /// Moves to another page of repositories. Returns whether the page was accepted.
    pub async fn set_page(&self, page: u32) -> StdResult<bool> {
        {
            let mut state = self.state.write().await;
            if state.query.is_empty() {
                warn!("No user searched, ignoring page {page}");
                return Ok(false);
            }
            if state.pagination.current_page() == page {
                return Ok(false);
            }
            if !state.pagination.accepts(page) {
                warn!("Page {page} is out of range, {}", state.pagination);
                return Ok(false);
            }
            state.pagination.set_current_page(page);
        }
        self.refresh().await?;

        Ok(true)
    }

    /// Moves to the next page of repositories.
    pub async fn next_page(&self) -> StdResult<bool> {
        let current_page = self.state.read().await.pagination.current_page();

        self.set_page(current_page.saturating_add(1)).await
    }

    /// Moves to the previous page of repositories.
    pub async fn previous_page(&self) -> StdResult<bool> {
        let current_page = self.state.read().await.pagination.current_page();

        self.set_page(current_page.saturating_sub(1)).await
    }

    /// Fetches the user and the current page of repositories for the current query.
    ///
    /// Fetch failures are logged and leave the state untouched.
    pub async fn refresh(&self) -> StdResult<()> {
        let request = {
            let mut state = self.state.write().await;
            let sequence = self.latest_sequence.fetch_add(1, Ordering::SeqCst) + 1;
            if state.query.is_empty() {
                state.is_fetching = false;
                None
            } else {
                state.is_fetching = true;
                Some(SearchRequest::new(
                    &state.query,
                    state.pagination.current_page(),
                    sequence,
                ))
            }
        };
        self.render_snapshot().await?;
        let Some(request) = request else {
            return Ok(());
        };

        info!("Processing request: {request}");
        if let Err(e) = self.load(&request).await {
            error!("Error fetching GitHub repositories for {request}: {e}");
        }
        {
            let mut state = self.state.write().await;
            if !self.is_latest(&request) {
                return Ok(());
            }
            state.is_fetching = false;
        }

        self.render_snapshot().await
    }

    fn is_latest(&self, request: &SearchRequest) -> bool {
        request.sequence() == self.latest_sequence.load(Ordering::SeqCst)
    }

    async fn load(&self, request: &SearchRequest) -> StdResult<()> {
        let user = self.fetcher.fetch_user(request).await?;
        {
            let mut state = self.state.write().await;
            if !self.is_latest(request) {
                info!("Discarding stale user for {request}");
                return Ok(());
            }
            info!("Fetched {user}");
            state
                .pagination
                .set_total_pages(PaginationState::total_pages_for(
                    user.public_repo_count(),
                    request.per_page(),
                ));
            state.user = Some(user);
        }

        let page = self.fetcher.fetch_repositories(request).await?;
        let mut state = self.state.write().await;
        if !self.is_latest(request) {
            info!("Discarding stale repositories for {request}");
            return Ok(());
        }
        if let Some(last_page) = page.last_page() {
            if last_page != state.pagination.total_pages() {
                debug!(
                    "Link header advertises {last_page} pages, {} derived from the profile",
                    state.pagination.total_pages()
                );
            }
        }
        for repository in page.repositories() {
            debug!("Fetched {repository}");
        }
        state.repositories = Some(page.into_repositories());

        Ok(())
    }

    async fn render_snapshot(&self) -> StdResult<()> {
        let state = self.snapshot().await;
        debug!("Rendering {state}");

        self.renderer.render(&state).await
    }
}
