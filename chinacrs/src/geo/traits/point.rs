//! Point on the surface of the Earth given by latitude and longitude.

use num_traits::Float;

/// Point with latitude and longitude in degrees.
///
/// The trait says nothing about the coordinate system the values are given in. Implement it for your own point
/// types to use them with the [`Projection`](super::projection::Projection) implementations of this crate.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lng(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lng_rad(&self) -> Self::Num {
        self.lng().to_radians()
    }
}

/// Geographic point that can be constructed from its coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlng(lat: N, lng: N) -> Self;

    /// Creates a point from longitude and latitude (x, y order).
    fn lnglat(lng: N, lat: N) -> Self {
        Self::latlng(lat, lng)
    }
}
