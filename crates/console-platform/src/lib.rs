//! Browser adapters for the console core.

pub mod http;
