//! Traits for points in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and conversion
//! between coordinate systems (see [`Projection`]).

mod datum;
pub mod traits;

pub use datum::Datum;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::{ChainProjection, InvertedProjection, Projection};
