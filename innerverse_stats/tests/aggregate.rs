// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `innerverse_stats` against hand-computed statistics, plus
//! property tests for the aggregate invariants.

use innerverse_model::{Atlas, Axis, GroupId, Lens};
use innerverse_stats::{
    Summary, aggregate, axis_summaries, group_summaries, group_summary, lens_summaries,
    node_summaries, nodes_for_axis,
};
use proptest::prelude::*;

fn naive(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Fills all 18 lens slots of group 1 with 10, 20, ..., 180 in node/lens order.
fn charted_group_one() -> Atlas {
    let mut atlas = Atlas::reference();
    let ids: Vec<_> = atlas
        .group(GroupId(1))
        .expect("group 1 exists")
        .nodes()
        .iter()
        .map(|n| n.id())
        .collect();
    let mut value = 10.0;
    for id in ids {
        for lens in Lens::ALL {
            assert!(atlas.set_lens(id, lens, Some(value)));
            value += 10.0;
        }
    }
    atlas
}

#[test]
fn eighteen_values_in_a_group_match_manual_statistics() {
    let atlas = charted_group_one();
    let group = atlas.group(GroupId(1)).expect("group 1 exists");
    let s = group_summary(group);

    let values: Vec<f64> = (1..=18).map(|i| f64::from(i) * 10.0).collect();
    let (mean, stddev) = naive(&values);
    assert!((mean - 95.0).abs() < 1e-9);
    assert!((s.equilibrium - mean).abs() < 1e-9);
    assert!((s.flux - stddev).abs() < 1e-9);
    // Population stddev of 10..=180 step 10 is 10 * sqrt((18^2 - 1) / 12).
    assert!((s.flux - 10.0 * (323.0_f64 / 12.0).sqrt()).abs() < 1e-9);
}

#[test]
fn untouched_groups_stay_empty() {
    let atlas = charted_group_one();
    let groups = group_summaries(&atlas);
    assert_eq!(groups[&GroupId(3)], Summary::EMPTY);
    assert_eq!(groups[&GroupId(2)], Summary::EMPTY);
    assert_ne!(groups[&GroupId(1)], Summary::EMPTY);
}

#[test]
fn lens_and_axis_subsets() {
    let atlas = charted_group_one();

    // Ego values are 10, 40, 70, ..., 160.
    let lenses = lens_summaries(&atlas);
    let ego: Vec<f64> = (0..6).map(|i| f64::from(10 + 30 * i)).collect();
    let (mean, stddev) = naive(&ego);
    assert!((lenses.ego.equilibrium - mean).abs() < 1e-9);
    assert!((lenses.ego.flux - stddev).abs() < 1e-9);

    // Group 1 is top-left: it feeds Doing and Seeing but not Being or Feeling.
    let axes = axis_summaries(&atlas);
    assert_eq!(axes.doing, axes.seeing);
    assert_eq!(axes.get(Axis::Being), Summary::EMPTY);
    assert_eq!(axes.feeling, Summary::EMPTY);

    assert_eq!(nodes_for_axis(&atlas, Axis::Seeing).count(), 6);
    assert_eq!(nodes_for_axis(&atlas, Axis::Feeling).count(), 0);
}

#[test]
fn node_summaries_cover_every_node() {
    let atlas = charted_group_one();
    let nodes = node_summaries(&atlas);
    assert_eq!(nodes.len(), 24);
    let first = atlas.groups()[0].nodes()[0].id();
    // 10, 20, 30.
    assert!((nodes[&first].equilibrium - 20.0).abs() < 1e-12);
}

proptest! {
    #[test]
    fn equilibrium_is_the_arithmetic_mean(values in prop::collection::vec(-100.0_f64..=100.0, 1..64)) {
        let s = aggregate(values.iter().copied());
        let (mean, stddev) = naive(&values);
        prop_assert!((s.equilibrium - mean).abs() < 1e-9);
        prop_assert!((s.flux - stddev).abs() < 1e-7);
    }

    #[test]
    fn flux_is_non_negative(values in prop::collection::vec(-100.0_f64..=100.0, 0..64)) {
        prop_assert!(aggregate(values).flux >= 0.0);
    }

    #[test]
    fn flux_is_zero_iff_values_are_equal(
        value in -100.0_f64..=100.0,
        len in 1_usize..32,
        other in -100.0_f64..=100.0,
    ) {
        let equal = vec![value; len];
        prop_assert_eq!(aggregate(equal.iter().copied()).flux, 0.0);

        let mut mixed = equal;
        mixed.push(other);
        let flux = aggregate(mixed).flux;
        if other == value {
            prop_assert_eq!(flux, 0.0);
        } else {
            prop_assert!(flux > 0.0);
        }
    }
}
