//! Session state core of the retail console.
//!
//! Everything here is plain Rust: the browser only shows up behind
//! [`ports::AgentApiPort`].

pub mod ports;
pub mod event_bus;
pub mod store;
pub mod timeline;
pub mod analytics;
pub mod dispatcher;
