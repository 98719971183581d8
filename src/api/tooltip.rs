use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Field, Record};

/// Hover text binding for the current `(x, y)` field pair.
///
/// Rebuilt whenever a selection changes; `generation` counts rebuilds so
/// hosts can tell a stale binding from a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipBinding {
    x_field: Field,
    y_field: Field,
    generation: u64,
}

/// Lines shown for one hovered record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub lines: SmallVec<[String; 2]>,
}

impl TooltipBinding {
    #[must_use]
    pub fn new(x_field: Field, y_field: Field) -> Self {
        Self {
            x_field,
            y_field,
            generation: 0,
        }
    }

    /// Replaces the binding for a new field pair.
    #[must_use]
    pub fn rebind(self, x_field: Field, y_field: Field) -> Self {
        Self {
            x_field,
            y_field,
            generation: self.generation + 1,
        }
    }

    #[must_use]
    pub fn fields(self) -> (Field, Field) {
        (self.x_field, self.y_field)
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn content(self, record: &Record) -> TooltipContent {
        let mut lines = SmallVec::new();
        for field in [self.x_field, self.y_field] {
            lines.push(format!("{}{}", field.tooltip_prefix(), record.value(field)));
        }
        TooltipContent { lines }
    }
}
