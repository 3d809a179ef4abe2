use crate::point::LatLng;

/// The closed boundary produced when a drawing stops.
///
/// Points come from real vertices only, in ring order, with the first point
/// repeated at the end when there are at least three of them. Fewer than
/// three yields a degenerate polygon; check [`Polygon::is_valid`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<LatLng>,
}

impl Polygon {
    /// Builds the polygon from real-vertex positions in ring order.
    pub fn from_ring(positions: impl IntoIterator<Item = LatLng>) -> Self {
        let mut points: Vec<LatLng> = positions.into_iter().collect();
        if points.len() >= 3 {
            points.push(points[0]);
        }
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<LatLng> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed, with at least three distinct corners.
    pub fn is_valid(&self) -> bool {
        let Some((last, corners)) = self.points.split_last() else {
            return false;
        };
        if corners.first() != Some(last) {
            return false;
        }
        let distinct = corners
            .iter()
            .enumerate()
            .filter(|&(ix, corner)| !corners[..ix].contains(corner))
            .count();
        distinct >= 3
    }
}
