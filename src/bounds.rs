use crate::point::LatLng;

/// An axis-aligned latitude/longitude box.
///
/// `east >= west` always holds: boxes are never built across the
/// antimeridian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub north: f64,
    pub east: f64,
    pub south: f64,
    pub west: f64,
}

impl Bounds {
    /// The box spanned by two arbitrary corners.
    #[inline]
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            north: a.lat.max(b.lat),
            east: a.lng.max(b.lng),
            south: a.lat.min(b.lat),
            west: a.lng.min(b.lng),
        }
    }

    /// Center of the box. This is where an insertion handle between two
    /// vertices is placed.
    #[inline]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    #[inline]
    pub fn contains(&self, p: LatLng) -> bool {
        self.south <= p.lat
            && p.lat <= self.north
            && self.west <= p.lng
            && p.lng <= self.east
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_in_any_order() {
        let a = LatLng::new(10.0, -5.0);
        let b = LatLng::new(-2.0, 7.0);
        assert_eq!(Bounds::from_corners(a, b), Bounds::from_corners(b, a));

        let bounds = Bounds::from_corners(a, b);
        assert_eq!(bounds.north, 10.0);
        assert_eq!(bounds.south, -2.0);
        assert_eq!(bounds.east, 7.0);
        assert_eq!(bounds.west, -5.0);
    }

    #[test]
    fn center_of_pair() {
        let c = Bounds::from_corners(LatLng::new(0.0, 10.0), LatLng::new(10.0, 10.0))
            .center();
        assert_relative_eq!(c.lat, 5.0);
        assert_relative_eq!(c.lng, 10.0);
        assert!(Bounds::from_corners(LatLng::new(0.0, 10.0), LatLng::new(10.0, 10.0))
            .contains(c));
    }
}
