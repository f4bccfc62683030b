//! Points that know their coordinate system.
//!
//! Passing a GCJ-02 point where WGS-84 is expected is a common and silent error when working with plain
//! [`Point`]s. The wrappers in this module make it a compile-time one:
//!
//! ```
//! use chinacrs::typed::{Bd09Point, Wgs84Point};
//!
//! let gps = Wgs84Point::new(39.9087, 116.3975);
//! let baidu: Bd09Point = gps.to_bd09();
//!
//! assert_eq!(baidu.point(), chinacrs::wgs2bd(39.9087, 116.3975));
//! ```
//!
//! Conversions go through the same functions as the untyped API, so the results are identical.

use serde::{Deserialize, Serialize};

use crate::crs::Crs;
use crate::geo::{GeoPoint, NewGeoPoint};
use crate::point::Point;
use crate::transform::{bd2gcj, bd2wgs, gcj2bd, gcj2wgs, wgs2bd, wgs2gcj};

macro_rules! typed_point {
    ($(#[$meta:meta])* $name:ident, $crs:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
        #[serde(transparent)]
        pub struct $name(Point);

        impl $name {
            /// Coordinate system of the point.
            pub const CRS: Crs = $crs;

            /// Creates a new point from latitude and longitude in degrees.
            pub const fn new(lat: f64, lng: f64) -> Self {
                Self(Point::new(lat, lng))
            }

            /// Marks the untyped point as being expressed in this coordinate system.
            pub const fn from_point(point: Point) -> Self {
                Self(point)
            }

            /// Latitude in degrees.
            pub const fn lat(&self) -> f64 {
                self.0.lat()
            }

            /// Longitude in degrees.
            pub const fn lng(&self) -> f64 {
                self.0.lng()
            }

            /// Returns the untyped point.
            pub const fn point(&self) -> Point {
                self.0
            }
        }

        impl GeoPoint for $name {
            type Num = f64;

            fn lat(&self) -> f64 {
                self.0.lat()
            }

            fn lng(&self) -> f64 {
                self.0.lng()
            }
        }

        impl NewGeoPoint<f64> for $name {
            fn latlng(lat: f64, lng: f64) -> Self {
                Self::new(lat, lng)
            }
        }

        impl From<$name> for Point {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

typed_point!(
    /// Point in WGS-84 coordinates.
    Wgs84Point,
    Crs::Wgs84
);
typed_point!(
    /// Point in GCJ-02 coordinates.
    Gcj02Point,
    Crs::Gcj02
);
typed_point!(
    /// Point in BD-09 coordinates.
    Bd09Point,
    Crs::Bd09
);

impl Wgs84Point {
    /// Converts the point into GCJ-02.
    pub fn to_gcj02(&self) -> Gcj02Point {
        Gcj02Point(wgs2gcj(self.lat(), self.lng()))
    }

    /// Converts the point into BD-09.
    pub fn to_bd09(&self) -> Bd09Point {
        Bd09Point(wgs2bd(self.lat(), self.lng()))
    }
}

impl Gcj02Point {
    /// Converts the point into WGS-84. The result is approximate.
    pub fn to_wgs84(&self) -> Wgs84Point {
        Wgs84Point(gcj2wgs(self.lat(), self.lng()))
    }

    /// Converts the point into BD-09.
    pub fn to_bd09(&self) -> Bd09Point {
        Bd09Point(gcj2bd(self.lat(), self.lng()))
    }
}

impl Bd09Point {
    /// Converts the point into WGS-84. The result is approximate.
    pub fn to_wgs84(&self) -> Wgs84Point {
        Wgs84Point(bd2wgs(self.lat(), self.lng()))
    }

    /// Converts the point into GCJ-02. The result is approximate.
    pub fn to_gcj02(&self) -> Gcj02Point {
        Gcj02Point(bd2gcj(self.lat(), self.lng()))
    }
}

impl From<Wgs84Point> for Gcj02Point {
    fn from(value: Wgs84Point) -> Self {
        value.to_gcj02()
    }
}

impl From<Wgs84Point> for Bd09Point {
    fn from(value: Wgs84Point) -> Self {
        value.to_bd09()
    }
}

impl From<Gcj02Point> for Bd09Point {
    fn from(value: Gcj02Point) -> Self {
        value.to_bd09()
    }
}

impl From<Gcj02Point> for Wgs84Point {
    fn from(value: Gcj02Point) -> Self {
        value.to_wgs84()
    }
}

impl From<Bd09Point> for Gcj02Point {
    fn from(value: Bd09Point) -> Self {
        value.to_gcj02()
    }
}

impl From<Bd09Point> for Wgs84Point {
    fn from(value: Bd09Point) -> Self {
        value.to_wgs84()
    }
}
