//! Conversion of geographic coordinates between the three coordinate systems used for mapping in China:
//!
//! * **WGS-84** - the global datum used by GPS receivers,
//! * **GCJ-02** - the state-mandated obfuscated system used by most domestic map providers,
//! * **BD-09** - Baidu's further obfuscated derivative of GCJ-02.
//!
//! The core of the crate is a set of pure functions operating on a [`Point`]:
//!
//! ```
//! use chinacrs::{gcj2bd, wgs2gcj};
//!
//! let gcj = wgs2gcj(39.9087, 116.3975);
//! let bd = gcj2bd(gcj.lat(), gcj.lng());
//!
//! assert!(bd.lat() > 39.9087);
//! ```
//!
//! A [`Point`] does not know which system it is expressed in. If you want the compiler to track this for you,
//! use the typed wrappers from the [`typed`] module, or tag the points with [`Crs`] and use [`Crs::convert`].
//!
//! Conversions from BD-09 ([`bd2gcj`]) and towards WGS-84 ([`gcj2wgs`], [`bd2wgs`]) are approximations, since the
//! forward transforms have no closed-form inverse. The residual error is around `1e-6` degrees for the former and
//! up to a few `1e-5` degrees for the latter.

pub mod crs;
pub mod error;
pub mod geo;
pub mod projection;
pub mod typed;

mod point;
mod transform;

#[cfg(feature = "geo-types")]
mod geo_types;
#[cfg(feature = "geojson")]
pub mod geojson;

pub use crs::Crs;
pub use error::ChinaCrsError;
pub use point::Point;
pub use transform::{
    bd2gcj, bd2wgs, gcj2bd, gcj2wgs, out_of_china, wgs2bd, wgs2gcj, PI, X_PI,
};
