//! Terminal rendering: setup, theme, widgets, and the frame composer.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
