//! Screens and the result-passing machinery between them.
pub mod builder;
pub mod navigation;
pub mod outcome;
pub mod quest_detail;
pub mod slot_panel;
