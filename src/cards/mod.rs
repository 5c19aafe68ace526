pub mod card;
pub use card::*;

pub mod draw;
pub use draw::*;
