//! Appearance presets handed to the renderer alongside geometry.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleColor {
    Black,
    Red,
}

impl HandleColor {
    pub fn name(&self) -> &'static str {
        match self {
            HandleColor::Black => "black",
            HandleColor::Red => "red",
        }
    }
}

/// How a vertex handle is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleStyle {
    pub radius: f32,
    pub color: HandleColor,
}

/// Opacity of the fill and outline an [`Overlay`](crate::overlay::Overlay)
/// is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    pub fill_opacity: f32,
    pub line_opacity: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        OVERLAY_STYLE
    }
}

pub const REAL_HANDLE: HandleStyle = HandleStyle {
    radius: 15.0,
    color: HandleColor::Black,
};

pub const MIDPOINT_HANDLE: HandleStyle = HandleStyle {
    radius: 10.0,
    color: HandleColor::Black,
};

pub const DRAGGABLE_HANDLE: HandleStyle = HandleStyle {
    radius: 20.0,
    color: HandleColor::Red,
};

pub const OVERLAY_STYLE: OverlayStyle = OverlayStyle {
    fill_opacity: 0.5,
    line_opacity: 0.5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_dragged_handle_is_red() {
        assert_eq!(REAL_HANDLE.color.name(), "black");
        assert_eq!(MIDPOINT_HANDLE.color.name(), "black");
        assert_eq!(DRAGGABLE_HANDLE.color.name(), "red");
        assert!(DRAGGABLE_HANDLE.radius > REAL_HANDLE.radius);
        assert!(REAL_HANDLE.radius > MIDPOINT_HANDLE.radius);
    }
}
