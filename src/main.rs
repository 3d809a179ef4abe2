use polygon_editor::{
    EditErr, EditSession, LatLng, Overlay, OverlaySink, PointerEvent,
};
use tracing::info;

/// Logs every overlay the session emits, the way a renderer would receive
/// them.
struct LoggingRenderer;

impl OverlaySink for LoggingRenderer {
    fn overlay_changed(&mut self, overlay: &Overlay) {
        info!(
            "redraw: fill {:?} at {}, outline {:?} at {} (closed: {})",
            overlay.fill.ring,
            overlay.style.fill_opacity,
            overlay.outline.points,
            overlay.style.line_opacity,
            overlay.outline.closed
        );
    }
}

pub fn main() -> Result<(), EditErr> {
    tracing_subscriber::fmt()
        .pretty()
        // enable everything
        .with_max_level(tracing::Level::TRACE)
        // sets this to be the default, global collector for this application.
        .init();

    let mut session = EditSession::with_sink(LoggingRenderer);
    session.start(&[])?;

    for (lat, lng) in [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)] {
        session.dispatch(PointerEvent::EmptyClicked(LatLng::new(lat, lng)))?;
    }

    // Split the first edge by dragging its midpoint outward.
    if let Some(midpoint) = session.ring().hit_test(LatLng::new(0.0, 5.0), 0.5) {
        session.select_for_drag(midpoint, true)?;
        session.move_dragged(LatLng::new(-3.0, 5.0))?;
        for vertex in session.ring().all_vertices() {
            let style = vertex.handle_style();
            info!(
                "handle {}: {} radius {}",
                vertex.id.index(),
                style.color.name(),
                style.radius
            );
        }
        session.select_for_drag(midpoint, false)?;
    }
    info!("{:#?}", session);

    let polygon = session.stop()?;
    println!("{:?}", polygon.points());
    Ok(())
}
