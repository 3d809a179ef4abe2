use tracing::{debug, info, warn};

use crate::{
    debug::COLOR_ORANGE,
    dbg_ring, emit_info,
    error::EditErr,
    info_label,
    midpoint::synthesize,
    overlay::{project, Overlay, OverlaySink},
    point::LatLng,
    polygon::Polygon,
    ring::VertexRing,
    vertex::{Vertex, VertexId},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Drawing,
    Closed,
}

/// Interactive polygon editing state machine.
///
/// Owns the vertex ring and the current drag selection. Every mutating call
/// either succeeds and notifies the overlay sink, or fails and leaves the
/// session untouched. Calls must be serialized by the host.
pub struct EditSession<S = ()> {
    ring: VertexRing,
    selection: Option<VertexId>,
    mode: Mode,
    sink: S,
}

impl EditSession<()> {
    /// A session whose overlay notifications are discarded. Use
    /// [`EditSession::overlay`] to pull the geometry instead.
    pub fn new() -> Self {
        Self::with_sink(())
    }
}

impl Default for EditSession<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> EditSession<S> {
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.mode == Mode::Drawing
    }

    #[inline]
    pub fn current_selection(&self) -> Option<VertexId> {
        self.selection
    }

    /// Read access for hit testing and handle rendering.
    #[inline]
    pub fn ring(&self) -> &VertexRing {
        &self.ring
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, EditErr> {
        self.ring.vertex(id)
    }

    pub fn is_midpoint(&self, id: VertexId) -> Result<bool, EditErr> {
        Ok(self.ring.vertex(id)?.is_midpoint())
    }

    /// The fill and outline for the current ring.
    pub fn overlay(&self) -> Overlay {
        project(&self.ring)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn require(&self, op: &'static str, mode: Mode) -> Result<(), EditErr> {
        if self.mode == mode {
            Ok(())
        } else {
            warn!("rejected `{}` while {:?}", op, self.mode);
            Err(EditErr::InvalidState {
                op,
                mode: self.mode,
            })
        }
    }
}

impl<S: OverlaySink> EditSession<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            ring: VertexRing::new(),
            selection: None,
            mode: Mode::Idle,
            sink,
        }
    }

    fn notify(&mut self) {
        let overlay = project(&self.ring);
        self.sink.overlay_changed(&overlay);
    }

    /// Clears the draggable flag of the selected vertex, if any. Does not
    /// resynthesize.
    fn drop_selection(&mut self) {
        if let Some(id) = self.selection.take() {
            if let Some(vertex) = self.ring.get_mut(id) {
                vertex.set_draggable(false);
            }
        }
    }

    fn remove_adjacent_midpoints(&mut self, target: &Vertex) -> Result<(), EditErr> {
        for neighbour in [target.prev(), target.next()].into_iter().flatten() {
            if neighbour != target.id
                && self.ring.get(neighbour).is_some_and(|v| v.is_midpoint())
            {
                self.ring.remove(neighbour)?;
            }
        }
        Ok(())
    }

    /// Begins a drawing, optionally seeded with `points` in order.
    pub fn start(&mut self, points: &[LatLng]) -> Result<(), EditErr> {
        if self.mode == Mode::Drawing {
            warn!("rejected `start` while {:?}", self.mode);
            return Err(EditErr::InvalidState {
                op: "start",
                mode: self.mode,
            });
        }
        for p in points {
            p.validated()?;
        }

        self.ring.clear();
        self.selection = None;
        for &p in points {
            self.ring.insert(p, None)?;
        }
        synthesize(&mut self.ring);
        self.mode = Mode::Drawing;

        info!(
            "{} drawing with {} initial points",
            info_label!("start"),
            points.len()
        );
        self.notify();
        Ok(())
    }

    /// Appends a real vertex after the last real vertex. Ends any drag in
    /// progress.
    pub fn add_vertex(&mut self, position: LatLng) -> Result<VertexId, EditErr> {
        self.require("add_vertex", Mode::Drawing)?;
        let position = position.validated()?;

        self.drop_selection();
        let after = self.ring.last_real();
        let id = self.ring.insert(position, after)?;
        synthesize(&mut self.ring);

        debug!("added vertex {} at {}", id.index(), position);
        self.notify();
        Ok(id)
    }

    /// Starts (`draggable = true`) or ends (`false`) dragging `id`.
    ///
    /// Starting a drag removes the midpoints adjacent to `id` until the drag
    /// ends, when all midpoints are resynthesized. A midpoint target is
    /// promoted to a real vertex at its current location.
    pub fn select_for_drag(
        &mut self,
        id: VertexId,
        draggable: bool,
    ) -> Result<(), EditErr> {
        self.require("select_for_drag", Mode::Drawing)?;
        self.ring.vertex(id)?;

        if !draggable {
            self.drop_selection();
            synthesize(&mut self.ring);
            debug!("drag of vertex {} ended", id.index());
            self.notify();
            return Ok(());
        }

        if let Some(previous) = self.selection {
            if previous != id {
                // Restore the midpoints around the previous selection first.
                // Midpoints between unchanged pairs are kept in place, so
                // `id` survives this.
                self.drop_selection();
                synthesize(&mut self.ring);
            }
        }
        let target = *self.ring.vertex(id)?;

        self.remove_adjacent_midpoints(&target)?;
        if target.is_midpoint() {
            self.ring.promote(id)?;
        }
        self.ring.vertex_mut(id)?.set_draggable(true);
        self.selection = Some(id);

        debug!(
            "vertex {} selected for drag (was midpoint: {})",
            id.index(),
            target.is_midpoint()
        );
        self.notify();
        Ok(())
    }

    /// Moves the selected vertex. Midpoints are left alone until the drag
    /// ends; only the overlay is refreshed.
    pub fn move_dragged(&mut self, position: LatLng) -> Result<(), EditErr> {
        self.require("move_dragged", Mode::Drawing)?;
        let id = self.selection.ok_or(EditErr::InvalidState {
            op: "move_dragged",
            mode: self.mode,
        })?;
        let position = position.validated()?;

        self.ring.vertex_mut(id)?.position = position;
        self.notify();
        Ok(())
    }

    /// Deletes a real vertex together with its adjacent midpoints.
    pub fn delete(&mut self, id: VertexId) -> Result<(), EditErr> {
        self.require("delete", Mode::Drawing)?;
        let target = *self.ring.vertex(id)?;
        if target.is_midpoint() {
            return Err(EditErr::InvalidArgument(format!(
                "vertex {} is a midpoint and cannot be deleted",
                id.index()
            )));
        }

        self.drop_selection();
        self.remove_adjacent_midpoints(&target)?;
        self.ring.remove(id)?;
        synthesize(&mut self.ring);

        debug!("deleted vertex {}", id.index());
        self.notify();
        Ok(())
    }

    /// Ends the current drag, if any, and resynthesizes midpoints.
    pub fn release_selection(&mut self) -> Result<(), EditErr> {
        self.require("release_selection", Mode::Drawing)?;
        match self.selection {
            Some(id) => self.select_for_drag(id, false),
            None => Ok(()),
        }
    }

    /// Deletes the vertex currently selected for drag.
    pub fn delete_selection(&mut self) -> Result<(), EditErr> {
        self.require("delete_selection", Mode::Drawing)?;
        let id = self.selection.ok_or(EditErr::InvalidState {
            op: "delete_selection",
            mode: self.mode,
        })?;
        self.delete(id)
    }

    /// Finishes the drawing and returns its boundary. The ring is cleared.
    pub fn stop(&mut self) -> Result<Polygon, EditErr> {
        self.require("stop", Mode::Drawing)?;

        emit_info!(
            sty:COLOR_ORANGE.bold(),
            fmt:"state before stop: {:#?}" | dbg_ring!(&self.ring)
        );
        let polygon = Polygon::from_ring(self.ring.real_positions());
        if !polygon.is_valid() {
            warn!(
                "stopping with {} real vertices: polygon is degenerate",
                self.ring.real_len()
            );
        }

        self.ring.clear();
        self.selection = None;
        self.mode = Mode::Closed;

        info!("{} polygon with {} points", info_label!("stop"), polygon.len());
        self.notify();
        Ok(polygon)
    }
}
