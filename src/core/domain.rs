//! Scale domain rules for the active axis fields.
//!
//! The padding rules are literal: X pads multiplicatively
//! (assumes non-negative values), Y only gains headroom at the low end.

use ordered_float::OrderedFloat;

use crate::core::{Dataset, Field};

pub const X_DOMAIN_LOW_FACTOR: f64 = 0.8;
pub const X_DOMAIN_HIGH_FACTOR: f64 = 1.2;
pub const Y_DOMAIN_LOW_OFFSET: f64 = 1.0;

/// `[0.8 * min, 1.2 * max]` of `field` over all records.
#[must_use]
pub fn compute_x_domain(dataset: &Dataset, field: Field) -> (f64, f64) {
    let (min, max) = field_extent(dataset, field);
    (min * X_DOMAIN_LOW_FACTOR, max * X_DOMAIN_HIGH_FACTOR)
}

/// `[min - 1, max]` of `field` over all records.
#[must_use]
pub fn compute_y_domain(dataset: &Dataset, field: Field) -> (f64, f64) {
    let (min, max) = field_extent(dataset, field);
    (min - Y_DOMAIN_LOW_OFFSET, max)
}

#[must_use]
pub fn field_extent(dataset: &Dataset, field: Field) -> (f64, f64) {
    let min = dataset
        .values(field)
        .map(OrderedFloat)
        .min()
        .map_or(0.0, |value| value.0);
    let max = dataset
        .values(field)
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |value| value.0);
    (min, max)
}
