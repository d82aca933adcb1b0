pub mod message;
pub mod event;
pub mod api;
pub mod dataset;
pub mod analytics;
pub mod config;
pub mod error;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::ConsoleError;
pub type Result<T> = std::result::Result<T, ConsoleError>;
