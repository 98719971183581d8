use serde::{Deserialize, Serialize};

/// Pointer position and the record currently under it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pointer: Option<(f64, f64)>,
    hovered: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn pointer(self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Index of the hovered record in dataset order.
    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered: Option<usize>) {
        self.pointer = Some((x, y));
        self.hovered = hovered;
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
        self.hovered = None;
    }
}
