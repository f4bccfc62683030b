//! [`Projection`] implementations for the conversions of the crate, so they can be combined with other projections
//! and applied to any point type implementing [`NewGeoPoint`].

use std::marker::PhantomData;

use crate::geo::{GeoPoint, NewGeoPoint, Projection};
use crate::point::Point;
use crate::transform::{bd2gcj, gcj2bd, gcj2wgs, wgs2gcj};

/// Converts WGS-84 points into GCJ-02. Unprojecting is approximate.
#[derive(Debug, Copy, Clone)]
pub struct Gcj02Projection<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> Gcj02Projection<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for Gcj02Projection<In, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In: NewGeoPoint<f64>, Out: NewGeoPoint<f64>> Projection for Gcj02Projection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        finite(wgs2gcj(input.lat(), input.lng()))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        finite(gcj2wgs(input.lat(), input.lng()))
    }
}

/// Converts GCJ-02 points into BD-09. Unprojecting is approximate.
#[derive(Debug, Copy, Clone)]
pub struct Bd09Projection<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> Bd09Projection<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for Bd09Projection<In, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In: NewGeoPoint<f64>, Out: NewGeoPoint<f64>> Projection for Bd09Projection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        finite(gcj2bd(input.lat(), input.lng()))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        finite(bd2gcj(input.lat(), input.lng()))
    }
}

fn finite<P: NewGeoPoint<f64>>(point: Point) -> Option<P> {
    if point.lat().is_finite() && point.lng().is_finite() {
        Some(P::latlng(point.lat(), point.lng()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{ChainProjection, InvertedProjection};
    use crate::transform::wgs2bd;
    use crate::typed::{Bd09Point, Gcj02Point, Wgs84Point};
    use approx::assert_abs_diff_eq;

    #[test]
    fn gcj02_projection() {
        let projection = Gcj02Projection::<Point, Point>::new();
        let wgs = Point::new(39.9087, 116.3975);
        let gcj = projection.project(&wgs).unwrap();
        assert_eq!(gcj, wgs2gcj(39.9087, 116.3975));

        let back = projection.unproject(&gcj).unwrap();
        assert_abs_diff_eq!(back, wgs, epsilon = 5e-5);
    }

    #[test]
    fn non_finite_is_rejected() {
        let projection = Bd09Projection::<Point, Point>::default();
        assert_eq!(projection.project(&Point::new(f64::NAN, 116.0)), None);
        assert_eq!(projection.unproject(&Point::new(39.0, f64::INFINITY)), None);
    }

    #[test]
    fn chain_wgs_to_bd() {
        let projection: ChainProjection<Wgs84Point, Gcj02Point, Bd09Point> = ChainProjection::new(
            Box::new(Gcj02Projection::<Wgs84Point, Gcj02Point>::new()),
            Box::new(Bd09Projection::<Gcj02Point, Bd09Point>::new()),
        );

        let bd = projection.project(&Wgs84Point::new(39.9087, 116.3975)).unwrap();
        assert_eq!(bd.point(), wgs2bd(39.9087, 116.3975));
    }

    #[test]
    fn inverted() {
        let projection: InvertedProjection<Bd09Point, Gcj02Point> =
            InvertedProjection::new(Box::new(Bd09Projection::<Gcj02Point, Bd09Point>::new()));

        let bd = Bd09Point::new(39.915043351185915, 116.40387297451515);
        let gcj = projection.project(&bd).unwrap();
        assert_abs_diff_eq!(gcj.point(), Point::new(39.9087, 116.3975), epsilon = 1e-6);
        assert_eq!(projection.unproject(&gcj).unwrap(), bd.to_gcj02().to_bd09());
    }
}
