use serde::{Deserialize, Serialize};

use crate::core::Axis;

/// Part of the chart that needs redrawing after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    XAxis,
    YAxis,
    Points,
    Labels,
    Tooltip,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::XAxis => 1 << 0,
            Self::YAxis => 1 << 1,
            Self::Points => 1 << 2,
            Self::Labels => 1 << 3,
            Self::Tooltip => 1 << 4,
        }
    }

    #[must_use]
    pub const fn axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::XAxis,
            Axis::Y => Self::YAxis,
        }
    }
}

/// Bitmask of invalidation topics used for selective redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::XAxis.bit()
        | InvalidationTopic::YAxis.bit()
        | InvalidationTopic::Points.bit()
        | InvalidationTopic::Labels.bit()
        | InvalidationTopic::Tooltip.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    /// Redraw set for a field switch on `axis`: that axis, the points along
    /// it, the label group and the tooltip binding.
    #[must_use]
    pub const fn field_switch(axis: Axis) -> Self {
        Self::from_topic(InvalidationTopic::axis(axis))
            .with_topic(InvalidationTopic::Points)
            .with_topic(InvalidationTopic::Labels)
            .with_topic(InvalidationTopic::Tooltip)
    }
}
