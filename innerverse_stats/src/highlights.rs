// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use innerverse_model::{Atlas, GroupId, LENS_MAX, LENS_MIN, NodeId};

use crate::composite::{group_summary, node_summary};

/// Range of the values a user has charted so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spectrum {
    /// Smallest defined value.
    pub min: f64,
    /// Largest defined value.
    pub max: f64,
}

impl Spectrum {
    /// The full lens range, reported when nothing is defined yet.
    pub const FULL: Self = Self {
        min: LENS_MIN,
        max: LENS_MAX,
    };
}

/// Minimum and maximum over every defined lens value in the atlas.
///
/// Falls back to [`Spectrum::FULL`] when no value is defined.
#[must_use]
pub fn personal_spectrum(atlas: &Atlas) -> Spectrum {
    atlas
        .nodes()
        .flat_map(|n| n.defined_values())
        .fold(None, |range: Option<Spectrum>, v| {
            Some(match range {
                None => Spectrum { min: v, max: v },
                Some(r) => Spectrum {
                    min: r.min.min(v),
                    max: r.max.max(v),
                },
            })
        })
        .unwrap_or(Spectrum::FULL)
}

/// A ranked entity and the metric it was ranked by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight<Id> {
    /// The node or group.
    pub id: Id,
    /// Node equilibrium or group flux, depending on the list.
    pub value: f64,
}

/// Notable nodes and groups of a charted atlas.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlights {
    /// Up to three fully-defined nodes with the largest `|equilibrium|`.
    pub most_pronounced: Vec<Highlight<NodeId>>,
    /// Up to three fully-defined nodes with the smallest `|equilibrium|`.
    pub most_balanced: Vec<Highlight<NodeId>>,
    /// Up to two groups with the largest positive flux.
    pub most_complex: Vec<Highlight<GroupId>>,
    /// Up to two groups with the smallest positive flux.
    pub most_harmonious: Vec<Highlight<GroupId>>,
}

const NODE_HIGHLIGHTS: usize = 3;
const GROUP_HIGHLIGHTS: usize = 2;

/// Ranks nodes and groups for the highlights panel.
///
/// Returns `None` until at least three nodes are fully defined, or when no
/// group has any spread yet. Ties keep atlas order.
#[must_use]
pub fn highlights(atlas: &Atlas) -> Option<Highlights> {
    let nodes: Vec<Highlight<NodeId>> = atlas
        .nodes()
        .filter(|n| n.is_fully_defined())
        .map(|n| Highlight {
            id: n.id(),
            value: node_summary(n).equilibrium,
        })
        .collect();
    if nodes.len() < NODE_HIGHLIGHTS {
        return None;
    }

    let groups: Vec<Highlight<GroupId>> = atlas
        .groups()
        .iter()
        .map(|g| Highlight {
            id: g.id(),
            value: group_summary(g).flux,
        })
        .filter(|h| h.value > 0.0)
        .collect();
    if groups.is_empty() {
        return None;
    }

    Some(Highlights {
        most_pronounced: top_by(&nodes, NODE_HIGHLIGHTS, |a, b| {
            b.value.abs().total_cmp(&a.value.abs())
        }),
        most_balanced: top_by(&nodes, NODE_HIGHLIGHTS, |a, b| {
            a.value.abs().total_cmp(&b.value.abs())
        }),
        most_complex: top_by(&groups, GROUP_HIGHLIGHTS, |a, b| b.value.total_cmp(&a.value)),
        most_harmonious: top_by(&groups, GROUP_HIGHLIGHTS, |a, b| a.value.total_cmp(&b.value)),
    })
}

fn top_by<T: Copy>(
    items: &[T],
    n: usize,
    compare: impl FnMut(&T, &T) -> core::cmp::Ordering,
) -> Vec<T> {
    let mut ranked = items.to_vec();
    ranked.sort_by(compare);
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use innerverse_model::{Atlas, Lens, NodeId};

    use super::{Spectrum, highlights, personal_spectrum};

    fn define(atlas: &mut Atlas, node: u32, value: f64) {
        for lens in Lens::ALL {
            atlas.set_lens(NodeId(node), lens, Some(value));
        }
    }

    #[test]
    fn spectrum_defaults_to_full_range() {
        assert_eq!(personal_spectrum(&Atlas::reference()), Spectrum::FULL);
    }

    #[test]
    fn spectrum_tracks_extremes() {
        let mut atlas = Atlas::reference();
        atlas.set_lens(NodeId(11), Lens::Ego, Some(-12.0));
        atlas.set_lens(NodeId(44), Lens::Spirit, Some(63.0));
        atlas.set_lens(NodeId(23), Lens::Soul, Some(5.0));
        assert_eq!(personal_spectrum(&atlas), Spectrum { min: -12.0, max: 63.0 });
    }

    #[test]
    fn highlights_need_three_defined_nodes() {
        let mut atlas = Atlas::reference();
        define(&mut atlas, 11, 10.0);
        define(&mut atlas, 12, 90.0);
        assert!(highlights(&atlas).is_none());
    }

    #[test]
    fn highlights_rank_nodes_and_groups() {
        let mut atlas = Atlas::reference();
        define(&mut atlas, 11, 10.0);
        define(&mut atlas, 12, -90.0);
        define(&mut atlas, 13, 40.0);
        define(&mut atlas, 14, 0.0);
        // Group 2 gets a wide spread, group 1 a narrower one.
        define(&mut atlas, 21, -100.0);
        define(&mut atlas, 22, 100.0);

        let h = highlights(&atlas).expect("enough data for highlights");
        let pronounced: Vec<u32> = h.most_pronounced.iter().map(|x| x.id.0).collect();
        assert_eq!(pronounced, [21, 22, 12]);
        let balanced: Vec<u32> = h.most_balanced.iter().map(|x| x.id.0).collect();
        assert_eq!(balanced, [14, 11, 13]);

        assert_eq!(h.most_complex.len(), 2);
        assert_eq!(h.most_complex[0].id.0, 2);
        assert_eq!(h.most_harmonious[0].id.0, 1);
    }
}
