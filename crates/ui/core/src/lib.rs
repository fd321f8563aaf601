//! Frontend-agnostic UI core: the session view-model, its update-event
//! channel, and the background-value helper.
pub mod event;
pub mod tasks;
pub mod view_model;

pub use event::SlotUpdate;
pub use tasks::spawn_value;
pub use view_model::SetBuilderModel;
