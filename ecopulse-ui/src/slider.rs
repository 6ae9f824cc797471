//! Arrow-key stepping for range inputs.

use crate::keys::Key;

const DEFAULT_MIN: f64 = 0.0;
const DEFAULT_MAX: f64 = 100.0;
const DEFAULT_STEP: f64 = 1.0;

/// Bounds and step of a range input, with the HTML defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for RangeSpec {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
        }
    }
}

impl RangeSpec {
    #[must_use]
    pub fn from_attributes(min: Option<&str>, max: Option<&str>, step: Option<&str>) -> Self {
        let min = parse_number(min).unwrap_or(DEFAULT_MIN);
        let max = parse_number(max).unwrap_or(DEFAULT_MAX).max(min);
        let step = parse_number(step)
            .filter(|s| *s > 0.0)
            .unwrap_or(DEFAULT_STEP);
        Self { min, max, step }
    }

    /// Parse the current value, defaulting to the midpoint like a browser does.
    #[must_use]
    pub fn value_or_default(&self, raw: Option<&str>) -> f64 {
        parse_number(raw).unwrap_or_else(|| self.min + (self.max - self.min) / 2.0)
    }

    /// Value after pressing `key`, or `None` when `key` is not an arrow.
    #[must_use]
    pub fn step(&self, value: f64, key: Key) -> Option<f64> {
        let next = match key {
            Key::ArrowUp | Key::ArrowRight => value + self.step,
            Key::ArrowDown | Key::ArrowLeft => value - self.step,
            _ => return None,
        };
        Some(next.clamp(self.min, self.max))
    }
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Render a value the way a range input reports it: integral values carry no fraction.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
