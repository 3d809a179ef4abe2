use std::cmp::Ordering;

use crate::error::EditErr;

/// A geographic position in degrees.
#[derive(Clone, Copy, Default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Rejects NaN and infinite coordinates.
    pub fn validated(self) -> Result<Self, EditErr> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(EditErr::InvalidArgument(format!(
                "non-finite coordinates {:?}",
                self
            )))
        }
    }

    /// Planar distance in degree space. Only meaningful for hit testing at
    /// screen scale.
    #[inline]
    pub fn planar_distance(&self, other: &LatLng) -> f64 {
        (self.lat - other.lat).hypot(self.lng - other.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for (f64, f64) {
    fn from(p: LatLng) -> Self {
        (p.lat, p.lng)
    }
}

impl PartialEq for LatLng {
    fn eq(&self, other: &Self) -> bool {
        self.lat.eq(&other.lat) && self.lng.eq(&other.lng)
    }
}

impl PartialOrd for LatLng {
    // South to north, then west to east.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.lat.partial_cmp(&other.lat)? {
            o @ (Ordering::Less | Ordering::Greater) => Some(o),
            Ordering::Equal => self.lng.partial_cmp(&other.lng),
        }
    }
}
