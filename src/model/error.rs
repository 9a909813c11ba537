/// The standard result type used throughout the search tool.
pub type StdResult<T> = Result<T, anyhow::Error>;
