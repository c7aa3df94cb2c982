//! Geometric intersection finder.
//!
//! Scans node pairs drawn from two frequency groups and reports the pairs
//! that are both grid-aligned and in harmonic distance ratio.
//!
//! # Predicate
//!
//! A pair `(a, b)` qualifies when both hold:
//!
//! 1. Alignment: same column, same row, or on a 45° diagonal
//!    (`|dx| == |dy|`).
//! 2. Harmonic distance: the Euclidean distances of `a` and `b` from the
//!    grid origin `(0, 0)` are in a 2:1 ratio, either way around, within
//!    [`HARMONIC_EPSILON`].
//!
//! Distances are measured from the origin, not between the two nodes.

use crate::graph::{Antenna, Graph, NodeId};

/// Floating tolerance for the 2:1 harmonic distance comparison.
pub const HARMONIC_EPSILON: f64 = 1e-6;

/// Whether two antennas share a row, a column, or a 45° diagonal.
#[must_use]
pub fn is_aligned(a: &Antenna, b: &Antenna) -> bool {
    a.x == b.x || a.y == b.y || (a.x - b.x).abs() == (a.y - b.y).abs()
}

/// Whether the origin distances of two antennas are in a 2:1 ratio.
#[must_use]
pub fn is_harmonic_pair(a: &Antenna, b: &Antenna) -> bool {
    let dist_a = origin_distance(a);
    let dist_b = origin_distance(b);
    (dist_a - 2.0 * dist_b).abs() < HARMONIC_EPSILON
        || (dist_b - 2.0 * dist_a).abs() < HARMONIC_EPSILON
}

fn origin_distance(n: &Antenna) -> f64 {
    let x = f64::from(n.x);
    let y = f64::from(n.y);
    (x * x + y * y).sqrt()
}

/// Report every qualifying pair `(a, b)` with `a.frequency == freq_a` and
/// `b.frequency == freq_b`.
///
/// Pairs are tested in node-store order for `a`, nested with node-store
/// order for `b`; nothing is deduplicated. With `freq_a == freq_b` the
/// degenerate self-pair (distance 0 from itself) qualifies, so callers
/// normally pass distinct frequencies.
pub fn find_intersections<F>(graph: &Graph, freq_a: char, freq_b: char, mut on_pair: F)
where
    F: FnMut(NodeId, NodeId),
{
    for (ia, a) in graph.nodes() {
        if a.frequency != freq_a {
            continue;
        }
        for (ib, b) in graph.nodes() {
            if b.frequency != freq_b {
                continue;
            }
            if is_aligned(a, b) && is_harmonic_pair(a, b) {
                on_pair(ia, ib);
            }
        }
    }
}

/// Collect every qualifying pair as `(a, b)` handle tuples.
#[must_use]
pub fn collect_intersections(graph: &Graph, freq_a: char, freq_b: char) -> Vec<(NodeId, NodeId)> {
    let mut pairs = Vec::new();
    find_intersections(graph, freq_a, freq_b, |a, b| pairs.push((a, b)));
    pairs
}
