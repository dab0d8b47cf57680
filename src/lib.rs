pub mod analysis;
pub mod caption;
pub mod config;
pub mod error;
pub mod server;

pub use error::{Error, Result};
