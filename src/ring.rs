use id_arena::Arena;
use tracing::trace;

use crate::{
    error::EditErr,
    point::LatLng,
    vertex::{Vertex, VertexId},
};

/// Ordered collection of vertex handles, doubly linked by handle.
///
/// Storage is an arena: a handle stays valid (and is never reused) until the
/// ring is cleared, which swaps in a fresh arena so that stale handles from
/// an earlier drawing report `NotFound` instead of aliasing new vertices.
///
/// While open, the ring is a simple path from `head` to `tail`. Once closed,
/// `tail.next == head` and `head.prev == tail`.
#[derive(Default)]
pub struct VertexRing {
    arena: Arena<Vertex>,
    head: Option<VertexId>,
    tail: Option<VertexId>,
    len: usize,
    real_len: usize,
    closed: bool,
}

impl VertexRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live vertices, midpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn real_len(&self) -> usize {
        self.real_len
    }

    #[inline]
    pub fn midpoint_len(&self) -> usize {
        self.len - self.real_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn head(&self) -> Option<VertexId> {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> Option<VertexId> {
        self.tail
    }

    /// Live vertex lookup. Removed handles and handles issued by a previous
    /// arena yield `None`.
    #[inline]
    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.arena.get(id).filter(|v| !v.is_removed())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.arena.get_mut(id).filter(|v| !v.is_removed())
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.get(id).is_some()
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, EditErr> {
        self.get(id).ok_or(EditErr::NotFound(id))
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex, EditErr> {
        self.get_mut(id).ok_or(EditErr::NotFound(id))
    }

    /// Inserts a real vertex immediately after `after`, or at the end of the
    /// ring when `after` is `None`.
    pub fn insert(
        &mut self,
        position: LatLng,
        after: Option<VertexId>,
    ) -> Result<VertexId, EditErr> {
        let position = position.validated()?;
        if let Some(after) = after {
            self.vertex(after)?;
        }
        Ok(self.link_new(position, false, after))
    }

    /// Midpoint positions are derived from live vertices, so they are finite
    /// by construction and `after` must be live.
    pub(crate) fn insert_midpoint(&mut self, position: LatLng, after: VertexId) -> VertexId {
        debug_assert!(self.contains(after));
        self.link_new(position, true, Some(after))
    }

    fn link_new(
        &mut self,
        position: LatLng,
        is_midpoint: bool,
        after: Option<VertexId>,
    ) -> VertexId {
        let id = self
            .arena
            .alloc_with_id(|id| Vertex::new(id, position, is_midpoint));

        match after.or(self.tail) {
            None => {
                self.head = Some(id);
                self.tail = Some(id);
            }
            Some(prev) => {
                let next = self.arena[prev].next();
                self.arena[id].set_prev(Some(prev));
                self.arena[id].set_next(next);
                self.arena[prev].set_next(Some(id));
                if let Some(next) = next {
                    self.arena[next].set_prev(Some(id));
                }
                if self.tail == Some(prev) {
                    self.tail = Some(id);
                }
            }
        }

        self.len += 1;
        if !is_midpoint {
            self.real_len += 1;
        }
        trace!("linked vertex {} (midpoint: {})", id.index(), is_midpoint);
        id
    }

    /// Removes a vertex, joining its former neighbours directly. Returns a
    /// snapshot of the removed vertex.
    pub fn remove(&mut self, id: VertexId) -> Result<Vertex, EditErr> {
        let removed = *self.vertex(id)?;
        self.unlink(&removed);
        Ok(removed)
    }

    /// Removes every vertex for which `keep` returns `false`.
    pub(crate) fn retain<F: FnMut(&Vertex) -> bool>(&mut self, mut keep: F) {
        let doomed: Vec<VertexId> = self
            .all_vertices()
            .filter(|v| !keep(v))
            .map(|v| v.id)
            .collect();
        for id in doomed {
            // Links are re-read per vertex, earlier unlinks may have moved them.
            let vertex = self.arena[id];
            self.unlink(&vertex);
        }
    }

    fn unlink(&mut self, removed: &Vertex) {
        let id = removed.id;
        let (prev, next) = (removed.prev(), removed.next());

        // In a closed ring of one, the vertex is its own neighbour.
        let prev = prev.filter(|&p| p != id);
        let next = next.filter(|&n| n != id);

        if let Some(prev) = prev {
            self.arena[prev].set_next(next);
        }
        if let Some(next) = next {
            self.arena[next].set_prev(prev);
        }
        if self.head == Some(id) {
            self.head = next;
        }
        if self.tail == Some(id) {
            self.tail = prev;
        }

        self.arena[id].mark_removed();
        self.len -= 1;
        if !removed.is_midpoint() {
            self.real_len -= 1;
        }
        if self.len < 2 {
            self.open();
        }
        trace!("removed vertex {}", id.index());
    }

    /// Turns a midpoint into a real vertex in place.
    pub(crate) fn promote(&mut self, id: VertexId) -> Result<(), EditErr> {
        let vertex = self.vertex_mut(id)?;
        if vertex.is_midpoint() {
            vertex.promote();
            self.real_len += 1;
        }
        Ok(())
    }

    /// `(predecessor, successor)` of a live vertex.
    pub fn neighbors(
        &self,
        id: VertexId,
    ) -> Result<(Option<VertexId>, Option<VertexId>), EditErr> {
        let vertex = self.vertex(id)?;
        Ok((vertex.prev(), vertex.next()))
    }

    /// Links `tail` back to `head`. A ring of fewer than two vertices stays
    /// open.
    pub(crate) fn close(&mut self) {
        if self.len < 2 {
            return;
        }
        if let (Some(head), Some(tail)) = (self.head, self.tail) {
            self.arena[tail].set_next(Some(head));
            self.arena[head].set_prev(Some(tail));
            self.closed = true;
        }
    }

    pub(crate) fn open(&mut self) {
        if let Some(tail) = self.tail {
            self.arena[tail].set_next(None);
        }
        if let Some(head) = self.head {
            self.arena[head].set_prev(None);
        }
        self.closed = false;
    }

    /// Re-threads the ring through `order`, which must list every live
    /// vertex exactly once.
    pub(crate) fn relink(&mut self, order: &[VertexId], closed: bool) {
        debug_assert_eq!(order.len(), self.len);
        for (ix, &id) in order.iter().enumerate() {
            let prev = ix.checked_sub(1).map(|p| order[p]);
            let next = order.get(ix + 1).copied();
            self.arena[id].set_prev(prev);
            self.arena[id].set_next(next);
        }
        self.head = order.first().copied();
        self.tail = order.last().copied();
        if closed {
            self.close();
        } else {
            self.closed = false;
        }
    }

    /// All live vertices in ring order, midpoints included.
    pub fn all_vertices(&self) -> RingIter<'_> {
        RingIter {
            ring: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Real vertices in ring order.
    pub fn real_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.all_vertices().filter(|v| !v.is_midpoint())
    }

    pub fn real_positions(&self) -> impl Iterator<Item = LatLng> + '_ {
        self.real_vertices().map(|v| v.position)
    }

    pub fn last_real(&self) -> Option<VertexId> {
        self.real_vertices().last().map(|v| v.id)
    }

    /// Nearest live vertex within `tolerance` (planar degrees) of `position`.
    pub fn hit_test(&self, position: LatLng, tolerance: f64) -> Option<VertexId> {
        self.all_vertices()
            .map(|v| (v.id, v.position.planar_distance(&position)))
            .filter(|&(_, distance)| distance <= tolerance)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(id, _)| id)
    }

    /// Removes every vertex. Handles issued before the call are invalidated.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Walks a ring from its head. Bounded by the live count, so a closed ring
/// is visited exactly once.
pub struct RingIter<'a> {
    ring: &'a VertexRing,
    cursor: Option<VertexId>,
    remaining: usize,
}

impl<'a> Iterator for RingIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ring: &'a VertexRing = self.ring;
        let vertex = &ring.arena[self.cursor?];
        self.cursor = vertex.next();
        self.remaining -= 1;
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
