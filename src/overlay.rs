//! Projection of a vertex ring into the fill and outline the renderer draws.

use crate::{
    point::LatLng,
    ring::VertexRing,
    style::{OverlayStyle, OVERLAY_STYLE},
};

/// Single-ring fill over the real vertices. Empty below two real vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillGeometry {
    pub ring: Vec<LatLng>,
}

/// The outline polyline. Closed (first point repeated) only with three or
/// more real vertices; a two-point outline stays an open segment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutlineGeometry {
    pub points: Vec<LatLng>,
    pub closed: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlay {
    pub fill: FillGeometry,
    pub outline: OutlineGeometry,
    pub style: OverlayStyle,
}

impl Overlay {
    /// Nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.fill.ring.is_empty() && self.outline.points.is_empty()
    }
}

/// Computes the overlay for the current ring. Pure: the result depends on
/// nothing but the real vertices of `ring`.
pub fn project(ring: &VertexRing) -> Overlay {
    if ring.real_len() < 2 {
        return Overlay::default();
    }

    let ring_points: Vec<LatLng> = ring.real_positions().collect();
    let closed = ring_points.len() >= 3;

    let mut points = ring_points.clone();
    if closed {
        points.push(ring_points[0]);
    }

    Overlay {
        fill: FillGeometry { ring: ring_points },
        outline: OutlineGeometry { points, closed },
        style: OVERLAY_STYLE,
    }
}

/// Receives a fresh overlay after every mutating session call.
pub trait OverlaySink {
    fn overlay_changed(&mut self, overlay: &Overlay);
}

/// Discards notifications.
impl OverlaySink for () {
    fn overlay_changed(&mut self, _overlay: &Overlay) {}
}

/// Records every notification, in order.
impl OverlaySink for Vec<Overlay> {
    fn overlay_changed(&mut self, overlay: &Overlay) {
        self.push(overlay.clone());
    }
}

impl<S: OverlaySink + ?Sized> OverlaySink for &mut S {
    fn overlay_changed(&mut self, overlay: &Overlay) {
        (**self).overlay_changed(overlay)
    }
}
