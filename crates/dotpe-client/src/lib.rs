pub mod client;
pub mod error;

pub use client::DotpeClient;
pub use error::DotpeError;
