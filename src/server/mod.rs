pub mod dto;
pub use dto::*;

pub mod handlers;
pub use handlers::*;

pub mod server;
pub use server::*;
