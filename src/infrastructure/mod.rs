mod debouncer;
mod fetcher_rest;
mod renderer_terminal;
mod search_orchestrator;

pub use debouncer::*;
pub use fetcher_rest::*;
pub use renderer_terminal::*;
pub use search_orchestrator::*;
