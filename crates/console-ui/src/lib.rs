//! egui panels for the retail console.
//!
//! Panels never call the dispatcher themselves: they render [`state::UiState`]
//! and hand back what the user asked for.

pub mod panels;
pub mod state;
pub mod theme;
