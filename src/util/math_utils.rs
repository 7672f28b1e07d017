use std::fmt;

use super::format_utils::format_value;

/// Running mean and sum of squared deviations (Welford's online update).
///
/// A constant input keeps `mean` exactly equal to that constant and `m2`
/// exactly zero, which a sum-then-divide mean does not guarantee.
///
/// Values are multiplied by `2^-scale_exp` before they are accumulated and
/// results are scaled back up, so a power-of-two scale is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningMoments {
    count: usize,
    mean: f64,
    m2: f64,
    scale_exp: i32,
}

impl Default for RunningMoments {
    fn default() -> Self {
        Self::with_scale_exponent(0)
    }
}

impl RunningMoments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale_exponent(scale_exp: i32) -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            scale_exp,
        }
    }

    /// Accumulates `values`, falling back to a scaled pass when the spread of
    /// finite inputs overflows the unscaled accumulator.
    pub fn from_values(values: &[f64]) -> Self {
        let moments: Self = values.iter().copied().collect();
        if moments.is_finite() || values.iter().any(|v| !v.is_finite()) {
            return moments;
        }

        let max_abs = values.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        let scale_exp = binary_exponent(max_abs);
        let mut scaled = Self::with_scale_exponent(scale_exp);
        for value in values {
            scaled.push(*value);
        }
        scaled
    }

    pub fn push(&mut self, value: f64) {
        let value = value * 2f64.powi(-self.scale_exp);
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.m2.is_finite()
    }

    /// `None` until at least one value has been pushed.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean * 2f64.powi(self.scale_exp))
        }
    }

    /// Bessel-corrected (n - 1) standard deviation.
    ///
    /// A spread wider than `f64::MAX` comes out as `inf`.
    pub fn sample_std_deviation(&self) -> Deviation {
        if self.count < 2 {
            return Deviation::Insufficient;
        }
        let variance = self.m2 / (self.count - 1) as f64;
        Deviation::Sample(variance.sqrt() * 2f64.powi(self.scale_exp))
    }
}

impl FromIterator<f64> for RunningMoments {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut moments = RunningMoments::new();
        for value in iter {
            moments.push(value);
        }
        moments
    }
}

/// Unbiased binary exponent of a normal `f64`, i.e. `floor(log2(value))`.
fn binary_exponent(value: f64) -> i32 {
    ((value.to_bits() >> 52) & 0x7ff) as i32 - 1023
}

/// Sample standard deviation of a sequence.
///
/// Fewer than two samples carry no spread information; that case is kept
/// distinct from a measured spread of zero so it can be rendered as `0`
/// rather than `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deviation {
    Insufficient,
    Sample(f64),
}

impl Deviation {
    pub fn value(&self) -> f64 {
        match self {
            Deviation::Insufficient => 0.0,
            Deviation::Sample(value) => *value,
        }
    }
}

impl fmt::Display for Deviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deviation::Insufficient => write!(f, "0"),
            Deviation::Sample(value) => write!(f, "{}", format_value(*value)),
        }
    }
}

/**
Calculates the arithmetic mean of a slice of f64 values.

## Arguments
- `values`: A slice of f64 values.

## Returns
The mean of the values, or `None` if the slice is empty.
 */
pub fn mean(values: &[f64]) -> Option<f64> {
    RunningMoments::from_values(values).mean()
}

/**
Calculates the sample standard deviation of a slice of f64 values.

## Arguments
- `values`: A slice of f64 values.

## Returns
`Deviation::Sample` with the Bessel-corrected standard deviation, or
`Deviation::Insufficient` when there are fewer than two values.
 */
pub fn sample_std_deviation(values: &[f64]) -> Deviation {
    RunningMoments::from_values(values).sample_std_deviation()
}
