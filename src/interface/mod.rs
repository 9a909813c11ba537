mod fetcher;
mod renderer;

pub use fetcher::*;
pub use renderer::*;
