use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = SQRT_2;

/// Continuous linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// Y axis maps larger values upwards. A zero-span domain maps every value to
/// the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        validate_domain(domain)?;
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Replaces the domain in place, keeping the pixel range.
    pub fn set_domain(&mut self, domain: (f64, f64)) -> ChartResult<()> {
        validate_domain(domain)?;
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        Ok(())
    }

    pub fn with_domain(mut self, domain: (f64, f64)) -> ChartResult<Self> {
        self.set_domain(domain)?;
        Ok(self)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let domain_span = self.domain_end - self.domain_start;
        if domain_span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / domain_span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Returns roughly `count` evenly spaced "nice" values inside the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (start, stop) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        if start == stop && count > 0 {
            return vec![start];
        }
        let Some(range) = tick_range(start, stop, count as f64) else {
            return Vec::new();
        };
        (range.first..=range.last)
            .map(|index| range.value_at(index))
            .collect()
    }

    /// Step between consecutive values returned by `ticks(count)`.
    #[must_use]
    pub fn tick_step(self, count: usize) -> Option<f64> {
        let (start, stop) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        tick_range(start, stop, count as f64).map(|range| range.step())
    }
}

fn validate_domain(domain: (f64, f64)) -> ChartResult<()> {
    if !domain.0.is_finite() || !domain.1.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "scale domain must be finite, got [{}, {}]",
            domain.0, domain.1
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct TickRange {
    first: i64,
    last: i64,
    // Negative increments encode `1 / -increment` to keep small steps exact.
    increment: f64,
}

impl TickRange {
    fn value_at(self, index: i64) -> f64 {
        if self.increment < 0.0 {
            index as f64 / -self.increment
        } else {
            index as f64 * self.increment
        }
    }

    fn step(self) -> f64 {
        if self.increment < 0.0 {
            1.0 / -self.increment
        } else {
            self.increment
        }
    }
}

fn tick_range(start: f64, stop: f64, count: f64) -> Option<TickRange> {
    if count.is_nan() || count <= 0.0 || !start.is_finite() || !stop.is_finite() {
        return None;
    }
    if stop <= start {
        return None;
    }

    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = (start * inc).round();
        last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = (start / inc).round();
        last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    if last < first {
        return None;
    }

    Some(TickRange {
        first: first as i64,
        last: last as i64,
        increment,
    })
}

/// Formats a tick value with the precision implied by the tick step and
/// comma thousands separators (`40,000`, `12.5`).
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
