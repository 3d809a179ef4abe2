//! Synthesis of insertion handles between consecutive real vertices.
//!
//! A midpoint sits at the center of the bounding box of its two parent
//! vertices. For pairs that do not straddle the antimeridian this is the
//! arithmetic mean of the two positions.

use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::{bounds::Bounds, point::LatLng, ring::VertexRing, vertex::VertexId};

/// Rebuilds the midpoint handles of `ring` from its real vertices.
///
/// One midpoint is placed between every consecutive pair of real vertices,
/// plus the wrap-around pair (last, first) once there are at least three.
/// A midpoint already sitting between the same pair is moved in place rather
/// than replaced, so the operation is idempotent down to handle identity.
/// Midpoints that no longer sit between a valid pair are discarded.
pub fn synthesize(ring: &mut VertexRing) {
    let reals: Vec<(VertexId, LatLng)> = ring
        .real_vertices()
        .map(|v| (v.id, v.position))
        .collect();

    if reals.len() < 2 {
        if ring.midpoint_len() > 0 {
            ring.retain(|v| !v.is_midpoint());
        }
        return;
    }

    let cyclic = reals.len() >= 3;
    let pairs: Vec<((VertexId, LatLng), (VertexId, LatLng))> = if cyclic {
        reals.iter().copied().circular_tuple_windows().collect()
    } else {
        reals.iter().copied().tuple_windows().collect()
    };

    let mut order = Vec::with_capacity(2 * reals.len());
    for ((a, from), (b, to)) in pairs {
        let center = Bounds::from_corners(from, to).center();
        order.push(a);
        order.push(place_midpoint(ring, a, b, center));
    }
    if !cyclic {
        order.extend(reals.last().map(|&(id, _)| id));
    }

    let keep: HashSet<VertexId> = order.iter().copied().collect();
    ring.retain(|v| keep.contains(&v.id));
    ring.relink(&order, cyclic);

    debug!(
        "synthesized {} midpoints over {} real vertices (closed: {})",
        ring.midpoint_len(),
        ring.real_len(),
        cyclic
    );
}

/// Reuses the midpoint directly between `a` and `b` if there is one, else
/// links a new one after `a`.
fn place_midpoint(
    ring: &mut VertexRing,
    a: VertexId,
    b: VertexId,
    center: LatLng,
) -> VertexId {
    let existing = ring.get(a).and_then(|v| v.next()).filter(|&m| {
        ring.get(m)
            .is_some_and(|v| v.is_midpoint() && v.next() == Some(b))
    });

    match existing.and_then(|m| ring.get_mut(m)) {
        Some(midpoint) => {
            midpoint.position = center;
            midpoint.id
        }
        None => ring.insert_midpoint(center, a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Vertex;
    use approx::assert_relative_eq;

    fn ring_of(points: &[(f64, f64)]) -> VertexRing {
        let mut ring = VertexRing::new();
        for &p in points {
            ring.insert(p.into(), None).unwrap();
        }
        ring
    }

    fn snapshot(ring: &VertexRing) -> Vec<(VertexId, bool, (f64, f64))> {
        ring.all_vertices()
            .map(|v: &Vertex| (v.id, v.is_midpoint(), v.position.into()))
            .collect()
    }

    #[test]
    fn empty_and_single_are_untouched() {
        let mut ring = VertexRing::new();
        synthesize(&mut ring);
        assert!(ring.is_empty());

        let mut ring = ring_of(&[(1.0, 1.0)]);
        synthesize(&mut ring);
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.midpoint_len(), 0);
        assert!(!ring.is_closed());
    }

    #[test]
    fn pair_gets_one_midpoint_and_stays_open() {
        let mut ring = ring_of(&[(0.0, 0.0), (0.0, 10.0)]);
        synthesize(&mut ring);

        let roles: Vec<bool> = ring.all_vertices().map(|v| v.is_midpoint()).collect();
        assert_eq!(roles, vec![false, true, false]);
        assert!(!ring.is_closed());

        let mid = ring.all_vertices().nth(1).unwrap();
        assert_relative_eq!(mid.lat(), 0.0);
        assert_relative_eq!(mid.lng(), 5.0);
    }

    #[test]
    fn triangle_wraps_around() {
        let mut ring = ring_of(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        synthesize(&mut ring);

        assert!(ring.is_closed());
        assert_eq!(ring.real_len(), 3);
        assert_eq!(ring.midpoint_len(), 3);

        let positions: Vec<(bool, (f64, f64))> = ring
            .all_vertices()
            .map(|v| (v.is_midpoint(), v.position.into()))
            .collect();
        assert_eq!(
            positions,
            vec![
                (false, (0.0, 0.0)),
                (true, (0.0, 5.0)),
                (false, (0.0, 10.0)),
                (true, (5.0, 10.0)),
                (false, (10.0, 10.0)),
                (true, (5.0, 5.0)),
            ]
        );

        let tail = ring.tail().unwrap();
        assert_eq!(ring.get(tail).unwrap().next(), ring.head());
    }

    #[test]
    fn idempotent() {
        let mut ring = ring_of(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        synthesize(&mut ring);
        let first = snapshot(&ring);
        synthesize(&mut ring);
        assert_eq!(first, snapshot(&ring));
    }

    #[test]
    fn new_vertex_reuses_untouched_midpoints() {
        let mut ring = ring_of(&[(0.0, 0.0), (0.0, 10.0)]);
        synthesize(&mut ring);
        let kept = ring.all_vertices().nth(1).unwrap().id;

        ring.insert(LatLng::new(10.0, 10.0), ring.last_real()).unwrap();
        synthesize(&mut ring);

        assert_eq!(ring.all_vertices().nth(1).unwrap().id, kept);
        assert_eq!(ring.midpoint_len(), 3);
        assert!(ring.is_closed());
    }

    #[test]
    fn stale_midpoints_are_discarded() {
        let mut ring = ring_of(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        synthesize(&mut ring);

        // Drop two reals directly, leaving orphaned midpoints behind.
        let reals: Vec<VertexId> = ring.real_vertices().map(|v| v.id).collect();
        ring.remove(reals[1]).unwrap();
        ring.remove(reals[2]).unwrap();
        synthesize(&mut ring);

        assert_eq!(ring.len(), 1);
        assert_eq!(ring.head(), Some(reals[0]));
    }
}
