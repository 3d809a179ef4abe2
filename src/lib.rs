//! Interactive polygon editing over draggable vertex handles.
//!
//! An [`EditSession`] keeps an ordered ring of real vertices with a
//! synthesized midpoint handle between each consecutive pair. Dragging a
//! midpoint splits its edge; every edit re-projects the ring into a fill and
//! an outline for the host renderer, and stopping yields a closed
//! [`Polygon`].

pub mod bounds;
pub mod debug;
pub mod error;
pub mod events;
pub mod midpoint;
pub mod overlay;
pub mod point;
pub mod polygon;
pub mod ring;
pub mod session;
pub mod style;
pub mod vertex;

pub use error::{EditErr, ErrorKind};
pub use events::{Dispatch, PointerEvent};
pub use overlay::{FillGeometry, OutlineGeometry, Overlay, OverlaySink};
pub use point::LatLng;
pub use polygon::Polygon;
pub use ring::VertexRing;
pub use session::{EditSession, Mode};
pub use vertex::{Vertex, VertexId};
