//! Reusable two-part (label, value) display cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::presentation::theme::WyrmdexTheme;

/// Preconfigured label/value pair for preset-driven construction.
#[derive(Clone, Copy, Debug)]
pub struct CellPreset {
    pub label: &'static str,
    pub value: &'static str,
}

/// A label/value row where the label hides entirely when empty.
///
/// Construction paths: explicit label+value ([`LabelValueCell::new`]),
/// blank ([`Default`]), or preset-driven ([`LabelValueCell::from_preset`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelValueCell {
    label: String,
    value: String,
}

impl LabelValueCell {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn from_preset(preset: &CellPreset) -> Self {
        Self::new(preset.label, preset.value)
    }

    pub fn set_label_text(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_value_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn label_text(&self) -> &str {
        &self.label
    }

    pub fn value_text(&self) -> &str {
        &self.value
    }

    /// The label element is shown only when its text is non-empty.
    pub fn label_visible(&self) -> bool {
        !self.label.is_empty()
    }

    /// Renders the cell as a single styled line.
    pub fn line(&self, theme: &WyrmdexTheme) -> Line<'_> {
        let mut spans = Vec::with_capacity(2);
        if self.label_visible() {
            spans.push(Span::styled(
                format!("{}: ", self.label),
                theme.label_style(),
            ));
        }
        spans.push(Span::styled(self.value.as_str(), theme.value_style()));
        Line::from(spans)
    }
}

impl Widget for &LabelValueCell {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line(&WyrmdexTheme::new()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_is_hidden() {
        let mut cell = LabelValueCell::default();
        assert!(!cell.label_visible());

        cell.set_label_text("Reward");
        assert!(cell.label_visible());

        cell.set_label_text("");
        assert!(!cell.label_visible());
    }

    #[test]
    fn value_round_trips() {
        let mut cell = LabelValueCell::new("Fee", "0");
        cell.set_value_text("10");
        assert_eq!(cell.value_text(), "10");
        assert_eq!(cell.label_text(), "Fee");
    }

    #[test]
    fn preset_construction_carries_both_texts() {
        let preset = CellPreset {
            label: "Stars",
            value: "★★★",
        };
        let cell = LabelValueCell::from_preset(&preset);
        assert_eq!(cell.label_text(), "Stars");
        assert_eq!(cell.value_text(), "★★★");
    }

    #[test]
    fn hidden_label_renders_value_only() {
        let cell = LabelValueCell::new("", "120z");
        let line = cell.line(&WyrmdexTheme::new());
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, "120z");
    }
}
