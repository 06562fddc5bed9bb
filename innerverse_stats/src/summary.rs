// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`

/// Mean and spread of a set of lens values.
///
/// The all-zero value is what an empty input produces; it is a normal state
/// (nothing has been charted yet), not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    /// Arithmetic mean.
    pub equilibrium: f64,
    /// Population standard deviation.
    pub flux: f64,
}

impl Summary {
    /// The summary of an empty input.
    pub const EMPTY: Self = Self {
        equilibrium: 0.0,
        flux: 0.0,
    };
}

/// Aggregates `values` into a [`Summary`].
///
/// The input must already exclude undefined entries. An empty input yields
/// [`Summary::EMPTY`]. The variance is the population variance (divided by
/// `n`, not `n - 1`).
///
/// ```rust
/// use innerverse_stats::aggregate;
///
/// let s = aggregate([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert_eq!(s.equilibrium, 5.0);
/// assert!((s.flux - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn aggregate<I>(values: I) -> Summary
where
    I: IntoIterator<Item = f64>,
{
    let mut acc = Accumulator::new();
    acc.extend(values);
    acc.finish()
}

/// Single-pass accumulator behind [`aggregate`].
///
/// The mean is reported as `sum / n`; the spread uses Welford's update so no
/// second pass over the input is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Accumulator {
    count: u64,
    sum: f64,
    running_mean: f64,
    m2: f64,
}

impl Accumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            running_mean: 0.0,
            m2: 0.0,
        }
    }

    /// Adds one value.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        let delta = value - self.running_mean;
        self.running_mean += delta / self.count as f64;
        self.m2 += delta * (value - self.running_mean);
    }

    /// Number of values pushed so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the summary of everything pushed so far.
    #[must_use]
    pub fn finish(&self) -> Summary {
        if self.count == 0 {
            return Summary::EMPTY;
        }
        let n = self.count as f64;
        Summary {
            equilibrium: self.sum / n,
            flux: (self.m2.max(0.0) / n).sqrt(),
        }
    }
}

impl Extend<f64> for Accumulator {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for Summary {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        aggregate(iter)
    }
}
