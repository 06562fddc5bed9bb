// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Lower bound of a defined lens value.
pub const LENS_MIN: f64 = -100.0;

/// Upper bound of a defined lens value.
pub const LENS_MAX: f64 = 100.0;

/// One of the three fixed attributes every node carries.
///
/// The order of the variants is the storage order inside a node and is
/// relied upon by everything that iterates lens values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lens {
    /// The outward, self-directed lens.
    Ego,
    /// The relational lens.
    Soul,
    /// The transpersonal lens.
    Spirit,
}

impl Lens {
    /// Number of lenses on every node.
    pub const COUNT: usize = 3;

    /// All lenses in storage order.
    pub const ALL: [Self; Self::COUNT] = [Self::Ego, Self::Soul, Self::Spirit];

    /// Index of this lens in a node's value array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ego => "Ego",
            Self::Soul => "Soul",
            Self::Spirit => "Spirit",
        }
    }
}

/// Normalizes a raw lens value.
///
/// Finite values are clamped into `[LENS_MIN, LENS_MAX]`; NaN and infinities
/// collapse to `None` (undefined) rather than being rejected.
#[must_use]
pub fn normalize_lens_value(value: f64) -> Option<f64> {
    value
        .is_finite()
        .then_some(value.clamp(LENS_MIN, LENS_MAX))
}

#[cfg(test)]
mod tests {
    use super::{LENS_MAX, LENS_MIN, Lens, normalize_lens_value};

    #[test]
    fn lens_order_matches_indices() {
        for (i, lens) in Lens::ALL.iter().enumerate() {
            assert_eq!(lens.index(), i);
        }
        assert_eq!(Lens::Spirit.name(), "Spirit");
    }

    #[test]
    fn normalize_clamps_and_drops_non_finite() {
        assert_eq!(normalize_lens_value(42.5), Some(42.5));
        assert_eq!(normalize_lens_value(250.0), Some(LENS_MAX));
        assert_eq!(normalize_lens_value(-1e9), Some(LENS_MIN));
        assert_eq!(normalize_lens_value(f64::NAN), None);
        assert_eq!(normalize_lens_value(f64::INFINITY), None);
    }
}
