//! Tags for the supported coordinate systems.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChinaCrsError;
use crate::point::Point;
use crate::transform::{bd2gcj, bd2wgs, gcj2bd, gcj2wgs, wgs2bd, wgs2gcj};

/// Coordinate reference system a [`Point`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Crs {
    /// WGS-84, used by GPS.
    Wgs84,
    /// GCJ-02, the Chinese national obfuscated system.
    Gcj02,
    /// BD-09, used by Baidu maps.
    Bd09,
}

impl Crs {
    /// All supported systems.
    pub const ALL: [Crs; 3] = [Crs::Wgs84, Crs::Gcj02, Crs::Bd09];

    /// Converts a point given in `self` into the `to` system.
    ///
    /// Conversions into WGS-84 and out of BD-09 are approximate, see the functions of the crate root for details.
    ///
    /// ```
    /// use chinacrs::{wgs2bd, Crs, Point};
    ///
    /// let point = Point::new(39.9087, 116.3975);
    /// assert_eq!(Crs::Wgs84.convert(Crs::Bd09, &point), wgs2bd(39.9087, 116.3975));
    /// ```
    pub fn convert(self, to: Crs, point: &Point) -> Point {
        log::trace!("Converting {point:?} from {self} to {to}");

        let (lat, lng) = (point.lat(), point.lng());
        match (self, to) {
            (Crs::Wgs84, Crs::Gcj02) => wgs2gcj(lat, lng),
            (Crs::Wgs84, Crs::Bd09) => wgs2bd(lat, lng),
            (Crs::Gcj02, Crs::Wgs84) => gcj2wgs(lat, lng),
            (Crs::Gcj02, Crs::Bd09) => gcj2bd(lat, lng),
            (Crs::Bd09, Crs::Wgs84) => bd2wgs(lat, lng),
            (Crs::Bd09, Crs::Gcj02) => bd2gcj(lat, lng),
            (Crs::Wgs84, Crs::Wgs84) | (Crs::Gcj02, Crs::Gcj02) | (Crs::Bd09, Crs::Bd09) => *point,
        }
    }

    /// Returns true if converting from `self` into `to` gives an exact result of the forward formulas, rather than
    /// an approximation of an inverse.
    pub fn is_exact_conversion(self, to: Crs) -> bool {
        matches!(
            (self, to),
            (Crs::Wgs84, _) | (Crs::Gcj02, Crs::Gcj02 | Crs::Bd09) | (Crs::Bd09, Crs::Bd09)
        )
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Crs::Wgs84 => "WGS84",
            Crs::Gcj02 => "GCJ02",
            Crs::Bd09 => "BD09",
        };
        f.write_str(name)
    }
}

impl FromStr for Crs {
    type Err = ChinaCrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "wgs84" | "gps" => Ok(Crs::Wgs84),
            "gcj02" | "mars" => Ok(Crs::Gcj02),
            "bd09" | "baidu" => Ok(Crs::Bd09),
            _ => Err(ChinaCrsError::UnknownCrs(s.to_string())),
        }
    }
}

impl TryFrom<String> for Crs {
    type Error = ChinaCrsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Crs> for String {
    fn from(value: Crs) -> Self {
        value.to_string()
    }
}
