//! Routing of hit-tested pointer events into session calls.
//!
//! The host resolves raw pointer coordinates against
//! [`VertexRing::hit_test`](crate::ring::VertexRing::hit_test) (or its own
//! renderer query) and forwards the outcome here.

use tracing::{debug, trace};

use crate::{
    error::EditErr,
    overlay::OverlaySink,
    point::LatLng,
    session::EditSession,
    vertex::VertexId,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    VertexClicked(VertexId),
    VertexLongClicked(VertexId),
    EmptyClicked(LatLng),
    EmptyLongClicked(LatLng),
}

/// What a dispatched event did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Selected(VertexId),
    Released,
    Added(VertexId),
    Ignored,
}

impl<S: OverlaySink> EditSession<S> {
    /// Applies the standard click behaviour of a drawing screen:
    ///
    /// - clicking the selected vertex ends its drag;
    /// - clicking any other vertex selects it for drag;
    /// - clicking empty space ends the current drag, or adds a vertex when
    ///   nothing is selected.
    ///
    /// Long clicks and events outside a drawing are ignored.
    pub fn dispatch(&mut self, event: PointerEvent) -> Result<Dispatch, EditErr> {
        if !self.is_drawing() {
            trace!("ignoring {:?} outside a drawing", event);
            return Ok(Dispatch::Ignored);
        }

        match event {
            PointerEvent::VertexClicked(id) => {
                if self.current_selection() == Some(id) {
                    self.select_for_drag(id, false)?;
                    Ok(Dispatch::Released)
                } else {
                    self.select_for_drag(id, true)?;
                    Ok(Dispatch::Selected(id))
                }
            }
            PointerEvent::EmptyClicked(position) => {
                if self.current_selection().is_some() {
                    self.release_selection()?;
                    Ok(Dispatch::Released)
                } else {
                    self.add_vertex(position).map(Dispatch::Added)
                }
            }
            PointerEvent::VertexLongClicked(_) | PointerEvent::EmptyLongClicked(_) => {
                debug!("long click {:?} has no editing action", event);
                Ok(Dispatch::Ignored)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_draw_select_and_release() {
        let mut session = EditSession::new();
        assert_eq!(
            session
                .dispatch(PointerEvent::EmptyClicked(LatLng::new(0.0, 0.0)))
                .unwrap(),
            Dispatch::Ignored
        );

        session.start(&[]).unwrap();
        let mut added = Vec::new();
        for p in [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)] {
            match session.dispatch(PointerEvent::EmptyClicked(p.into())).unwrap() {
                Dispatch::Added(id) => added.push(id),
                other => panic!("expected an added vertex, got {:?}", other),
            }
        }
        assert_eq!(session.ring().real_len(), 3);

        let hit = session
            .ring()
            .hit_test(LatLng::new(0.1, 9.9), 0.5)
            .unwrap();
        assert_eq!(hit, added[1]);
        assert_eq!(
            session.dispatch(PointerEvent::VertexClicked(hit)).unwrap(),
            Dispatch::Selected(hit)
        );

        // An empty click while dragging ends the drag instead of adding.
        assert_eq!(
            session
                .dispatch(PointerEvent::EmptyClicked(LatLng::new(50.0, 50.0)))
                .unwrap(),
            Dispatch::Released
        );
        assert_eq!(session.ring().real_len(), 3);
        assert_eq!(session.current_selection(), None);

        session.dispatch(PointerEvent::VertexClicked(hit)).unwrap();
        assert_eq!(
            session.dispatch(PointerEvent::VertexClicked(hit)).unwrap(),
            Dispatch::Released
        );
    }

    #[test]
    fn long_clicks_are_ignored() {
        let mut session = EditSession::new();
        session.start(&[LatLng::new(1.0, 1.0)]).unwrap();
        let id = session.ring().head().unwrap();
        let before = session.ring().len();

        assert_eq!(
            session.dispatch(PointerEvent::VertexLongClicked(id)).unwrap(),
            Dispatch::Ignored
        );
        assert_eq!(
            session
                .dispatch(PointerEvent::EmptyLongClicked(LatLng::new(2.0, 2.0)))
                .unwrap(),
            Dispatch::Ignored
        );
        assert_eq!(session.ring().len(), before);
    }
}
