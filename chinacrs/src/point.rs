use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, NewGeoPoint};

/// Latitude and longitude pair in degrees.
///
/// The coordinate system the point is expressed in is not part of the type. It follows from the function that
/// produced the point. See [`typed`](crate::typed) for wrappers that do carry it.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Creates a new point from latitude and longitude.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Creates a new point from another one.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lng: other.lng(),
        }
    }
}

impl GeoPoint for Point {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

impl NewGeoPoint<f64> for Point {
    fn latlng(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lng.abs_diff_eq(&other.lng, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lat.relative_eq(&other.lat, epsilon, max_relative)
            && self.lng.relative_eq(&other.lng, epsilon, max_relative)
    }
}

/// Creates a new [`Point`] from latitude and longitude values (in degrees).
///
/// ```
/// use chinacrs::latlng;
///
/// let point = latlng!(39.9087, 116.3975);
/// assert_eq!(point.lat(), 39.9087);
/// assert_eq!(point.lng(), 116.3975);
/// ```
#[macro_export]
macro_rules! latlng {
    ($lat:expr, $lng:expr) => {
        $crate::Point::new($lat, $lng)
    };
}
