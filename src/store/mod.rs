pub mod error;
pub use error::*;

pub mod kv;
pub use kv::*;

pub mod memory;
pub use memory::*;

pub mod redis;
pub use self::redis::*;
