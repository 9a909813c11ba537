mod count;
mod entities;
mod error;
mod input;
mod pagination;
mod request;
mod response;
mod state;

pub use count::*;
pub use entities::*;
pub use error::*;
pub use input::*;
pub use pagination::*;
pub use request::*;
pub use response::*;
pub use state::*;
