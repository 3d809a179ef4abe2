use itertools::Itertools;
use procr_ansi_term::{Color, Style};
use std::fmt;

use crate::{
    point::LatLng,
    ring::VertexRing,
    session::EditSession,
    vertex::{Vertex, VertexId},
};

const STYLE_TYPE_NAME: Style = Style::new().bold().fg(Color::Purple);
const STYLE_LABEL: Style = Style::new().fg(Color::Yellow);

pub const COLOR_GREEN: Color = Color::Fixed(40);
pub const COLOR_BLUE: Color = Color::Fixed(27);
pub const COLOR_ORANGE: Color = Color::Fixed(208);

pub const STYLE_DRAGGABLE: Style =
    Style::new().underline().bold().fg(Color::Red);

pub const STYLE_REAL: Style = Style::new().fg(COLOR_GREEN);

pub const STYLE_MIDPOINT: Style = Style::new().fg(COLOR_BLUE);

pub fn debug_with(
    f: impl Fn(&mut fmt::Formatter) -> fmt::Result,
) -> impl fmt::Debug {
    struct DebugWith<F>(F);

    impl<F> fmt::Debug for DebugWith<F>
    where
        F: Fn(&mut fmt::Formatter) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    DebugWith(f)
}

#[macro_export]
macro_rules! info_label {
    ($label:literal) => {
        procr_ansi_term::Style::new()
            .bold()
            .fg(procr_ansi_term::Color::Yellow)
            .paint(format_args!("({})", $label))
    };
}

#[macro_export]
macro_rules! emit_info {
    (sty:$style:expr, msg:$msg:literal) => {
        tracing::info!("{}", $style.paint($msg));
    };
    (sty:$style:expr, fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!("{}", $style.paint(format_args!($fmt, $($rest)*)));
    };
    (fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!($fmt, $($rest)*);
    };
}

impl fmt::Debug for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("@({},{})", self.lat, self.lng))
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

fn link(id: Option<VertexId>) -> String {
    id.map(|id| id.index().to_string())
        .unwrap_or_else(|| "_".to_string())
}

fn vertex_style(vertex: &Vertex) -> Style {
    if vertex.is_draggable() {
        STYLE_DRAGGABLE
    } else if vertex.is_midpoint() {
        STYLE_MIDPOINT
    } else {
        STYLE_REAL
    }
}

pub fn debug_vertex(
    vertex: &Vertex,
) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + '_ {
    move |f| {
        write!(f, "{}", Style::new().reset_prefix().paint(""))?;
        let tag = if vertex.is_midpoint() { "M" } else { "V" };
        write!(
            f,
            "{}{}",
            STYLE_LABEL.paint(format_args!("{}{}:", tag, vertex.id.index())),
            format_args!(
                " {} -> {} -> {}",
                link(vertex.prev()),
                vertex_style(vertex).paint(format_args!("{:?}", vertex.position)),
                link(vertex.next())
            )
        )
    }
}

#[macro_export]
macro_rules! dbg_vertex {
    ($vertex:expr) => {
        $crate::debug::debug_with($crate::debug::debug_vertex($vertex))
    };
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_vertex(self)(f)
    }
}

pub fn debug_ring(
    ring: &VertexRing,
) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + '_ {
    move |f| {
        write!(
            f,
            "{}",
            STYLE_TYPE_NAME.paint(if ring.is_closed() { "ring" } else { "path" })
        )?;
        f.write_str(&format!(
            "[ {} ",
            ring.all_vertices()
                .map(|v| format!("\n  {:?}", dbg_vertex!(v)))
                .join(",")
        ))?;
        if ring.is_empty() {
            f.write_str("]")
        } else {
            f.write_str("\n]")
        }
    }
}

#[macro_export]
macro_rules! dbg_ring {
    ($ring:expr) => {
        $crate::debug::debug_with($crate::debug::debug_ring($ring))
    };
}

impl fmt::Debug for VertexRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_ring(self)(f)
    }
}

macro_rules! dbg_field {
    ($formatter:expr, $field_id:literal, $data:expr) => {
        writeln!(
            $formatter,
            "\t{}: {:?}",
            STYLE_LABEL.paint($field_id),
            $data
        )
    };
}

impl<S> fmt::Debug for EditSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", STYLE_TYPE_NAME.paint("EditSession {"))?;
        dbg_field!(f, "mode", self.mode())?;
        dbg_field!(
            f,
            "selection",
            Style::new()
                .fg(COLOR_ORANGE)
                .paint(link(self.current_selection()))
        )?;
        dbg_field!(f, "ring", dbg_ring!(self.ring()))?;
        write!(f, "{}", STYLE_TYPE_NAME.paint("}"))
    }
}
