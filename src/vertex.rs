use id_arena::Id;

use crate::{
    point::LatLng,
    style::{HandleStyle, DRAGGABLE_HANDLE, MIDPOINT_HANDLE, REAL_HANDLE},
};

/// Opaque vertex handle. Unique for the lifetime of the ring that issued it.
pub type VertexId = Id<Vertex>;

/// A vertex handle on the map: either a real polygon corner or a
/// synthesized midpoint sitting between two real corners.
///
/// Ring order is stored as `prev`/`next` handles into the owning arena.
#[derive(Clone, Copy)]
pub struct Vertex {
    pub id: VertexId,
    pub position: LatLng,
    is_midpoint: bool,
    draggable: bool,
    prev: Option<VertexId>,
    next: Option<VertexId>,
    removed: bool,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, position: LatLng, is_midpoint: bool) -> Self {
        Self {
            id,
            position,
            is_midpoint,
            draggable: false,
            prev: None,
            next: None,
            removed: false,
        }
    }

    #[inline]
    pub fn is_midpoint(&self) -> bool {
        self.is_midpoint
    }

    #[inline]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    #[inline]
    pub fn prev(&self) -> Option<VertexId> {
        self.prev
    }

    #[inline]
    pub fn next(&self) -> Option<VertexId> {
        self.next
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.position.lat
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.position.lng
    }

    /// Radius and colour the host should draw this handle with.
    pub fn handle_style(&self) -> HandleStyle {
        if self.draggable {
            DRAGGABLE_HANDLE
        } else if self.is_midpoint {
            MIDPOINT_HANDLE
        } else {
            REAL_HANDLE
        }
    }

    #[inline]
    pub(crate) fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    /// Turns a midpoint into a permanent real vertex at its current location.
    #[inline]
    pub(crate) fn promote(&mut self) {
        self.is_midpoint = false;
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, prev: Option<VertexId>) {
        self.prev = prev;
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<VertexId>) {
        self.next = next;
    }

    #[inline]
    pub(crate) fn is_removed(&self) -> bool {
        self.removed
    }

    #[inline]
    pub(crate) fn mark_removed(&mut self) {
        debug_assert!(!self.removed);
        self.removed = true;
        self.draggable = false;
        self.prev = None;
        self.next = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use id_arena::Arena;

    #[test]
    fn handle_style_follows_role() {
        let mut arena = Arena::<Vertex>::new();
        let id = arena.alloc_with_id(|id| Vertex::new(id, LatLng::new(1.0, 2.0), true));
        let vertex = &mut arena[id];
        assert_eq!(vertex.handle_style(), MIDPOINT_HANDLE);

        vertex.promote();
        assert!(!vertex.is_midpoint());
        assert_eq!(vertex.handle_style(), REAL_HANDLE);

        vertex.set_draggable(true);
        assert_eq!(vertex.handle_style(), DRAGGABLE_HANDLE);
    }
}
