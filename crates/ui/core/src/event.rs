//! Update events emitted by the view-model after mutations.

/// Names the slot index whose panel should refresh, or nothing.
///
/// Emitted once per effective mutation and consumed once by the builder
/// screen; a `None` payload is an explicit no-op signal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlotUpdate {
    pub slot: Option<usize>,
}

impl SlotUpdate {
    /// An update naming no slot; subscribers refresh nothing.
    pub const fn none() -> Self {
        Self { slot: None }
    }

    /// An update naming the slot at `index`.
    pub const fn slot(index: usize) -> Self {
        Self { slot: Some(index) }
    }
}
