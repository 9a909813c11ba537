use crate::{SearchState, StdResult};

/// A trait for presenting the search state to the user.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchRenderer: Sync + Send {
    /// Renders a snapshot of the search state.
    async fn render(&self, state: &SearchState) -> StdResult<()>;
}
