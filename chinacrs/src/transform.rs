//! Closed-form conversions between WGS-84, GCJ-02 and BD-09.
//!
//! The coefficients below are empirically fitted. They, and the order of operations, must stay exactly as they
//! are for the results to match other implementations bit for bit.

use crate::geo::Datum;
use crate::point::Point;

/// Value of pi used by the conversion formulas.
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI: f64 = 3.1415926535897932384626;

/// Scale factor of the BD-09 angular corrections.
pub const X_PI: f64 = PI * 3000.0 / 180.0;

const MIN_LNG: f64 = 72.004;
const MAX_LNG: f64 = 137.8347;
const MIN_LAT: f64 = 0.8293;
const MAX_LAT: f64 = 55.8271;

/// Returns true if the point lies outside of the rectangle roughly enclosing mainland China.
///
/// This is a bounding box test, not a border check: points of neighbouring countries that fall inside the box are
/// treated as Chinese ones.
///
/// ```
/// use chinacrs::out_of_china;
///
/// assert!(!out_of_china(39.9087, 116.3975));
/// assert!(out_of_china(48.8566, 2.3522));
/// ```
pub fn out_of_china(lat: f64, lng: f64) -> bool {
    !(MIN_LNG..=MAX_LNG).contains(&lng) || !(MIN_LAT..=MAX_LAT).contains(&lat)
}

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Converts WGS-84 coordinates into GCJ-02.
///
/// Points outside of China (see [`out_of_china`]) are returned unchanged.
///
/// ```
/// use chinacrs::wgs2gcj;
///
/// let gcj = wgs2gcj(39.9087, 116.3975);
/// assert!((gcj.lat() - 39.9087).abs() > 0.001);
///
/// let paris = wgs2gcj(48.8566, 2.3522);
/// assert_eq!((paris.lat(), paris.lng()), (48.8566, 2.3522));
/// ```
pub fn wgs2gcj(lat: f64, lng: f64) -> Point {
    if out_of_china(lat, lng) {
        return Point::new(lat, lng);
    }

    let mut d_lat = transform_lat(lng - 105.0, lat - 35.0);
    let mut d_lng = transform_lng(lng - 105.0, lat - 35.0);

    let datum = Datum::KRASOVSKY_1940;
    let rad_lat = lat / 180.0 * PI;
    d_lat = (d_lat * 180.0) / (datum.meridian_radius(rad_lat) * PI);
    d_lng = (d_lng * 180.0) / (datum.parallel_radius(rad_lat) * PI);

    Point::new(lat + d_lat, lng + d_lng)
}

/// Converts GCJ-02 coordinates into BD-09.
///
/// Unlike [`wgs2gcj`], the offset is applied everywhere, including outside of China.
pub fn gcj2bd(lat: f64, lng: f64) -> Point {
    let x = lng;
    let y = lat;
    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();

    Point::new(z * theta.sin() + 0.006, z * theta.cos() + 0.0065)
}

/// Converts BD-09 coordinates into GCJ-02.
///
/// This is an approximate inverse of [`gcj2bd`]: a round trip leaves an error of up to about `1e-6` degrees.
pub fn bd2gcj(lat: f64, lng: f64) -> Point {
    let x = lng - 0.0065;
    let y = lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();

    Point::new(z * theta.sin(), z * theta.cos())
}

/// Converts WGS-84 coordinates into BD-09.
///
/// Same as calling [`wgs2gcj`] and then [`gcj2bd`]. Points outside of China skip the first step, but still get
/// the BD-09 offset.
pub fn wgs2bd(lat: f64, lng: f64) -> Point {
    let gcj = wgs2gcj(lat, lng);
    gcj2bd(gcj.lat(), gcj.lng())
}

/// Converts GCJ-02 coordinates into WGS-84.
///
/// The offset at the given point is subtracted once, so the result is off by up to a few `1e-5` degrees (a couple of
/// meters). Points outside of China are returned unchanged.
pub fn gcj2wgs(lat: f64, lng: f64) -> Point {
    if out_of_china(lat, lng) {
        return Point::new(lat, lng);
    }

    let gcj = wgs2gcj(lat, lng);
    Point::new(lat * 2.0 - gcj.lat(), lng * 2.0 - gcj.lng())
}

/// Converts BD-09 coordinates into WGS-84. Approximate, see [`bd2gcj`] and [`gcj2wgs`].
pub fn bd2wgs(lat: f64, lng: f64) -> Point {
    let gcj = bd2gcj(lat, lng);
    gcj2wgs(gcj.lat(), gcj.lng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const BEIJING: Point = Point::new(39.9087, 116.3975);
    const SHANGHAI: Point = Point::new(31.2304, 121.4737);

    const IN_CHINA: [Point; 6] = [
        BEIJING,
        SHANGHAI,
        Point::new(22.5431, 114.0579),
        Point::new(30.5728, 104.0668),
        Point::new(43.8256, 87.6168),
        Point::new(18.2528, 109.5119),
    ];

    fn bits(point: Point) -> (u64, u64) {
        (point.lat().to_bits(), point.lng().to_bits())
    }

    #[test]
    fn pi_literal() {
        assert_eq!(PI, std::f64::consts::PI);
        assert_abs_diff_eq!(X_PI, 52.35987755982988, epsilon = 1e-12);
    }

    #[test]
    fn china_box() {
        assert!(!out_of_china(BEIJING.lat(), BEIJING.lng()));
        assert!(!out_of_china(MIN_LAT, MIN_LNG));
        assert!(!out_of_china(MAX_LAT, MAX_LNG));

        assert!(out_of_china(39.9, 72.0));
        assert!(out_of_china(39.9, 137.9));
        assert!(out_of_china(0.8, 116.0));
        assert!(out_of_china(55.9, 116.0));
        assert!(out_of_china(f64::NAN, 116.0));
    }

    #[test]
    fn wgs2gcj_outside_china_is_identity() {
        for (lat, lng) in [
            (48.8566, 2.3522),
            (40.7128, -74.0060),
            (-33.8688, 151.2093),
            (39.9, 72.0039),
            (39.9, 137.8348),
            (0.8292, 116.0),
            (55.8272, 116.0),
        ] {
            let gcj = wgs2gcj(lat, lng);
            assert_eq!(bits(gcj), (lat.to_bits(), lng.to_bits()));
        }
    }

    #[test]
    fn wgs2gcj_beijing() {
        let gcj = wgs2gcj(BEIJING.lat(), BEIJING.lng());
        assert_abs_diff_eq!(
            gcj,
            Point::new(39.91010349934476, 116.40374357265176),
            epsilon = 1e-9
        );

        let d_lat = gcj.lat() - BEIJING.lat();
        let d_lng = gcj.lng() - BEIJING.lng();
        assert!((0.001..0.007).contains(&d_lat), "{d_lat}");
        assert!((0.002..0.007).contains(&d_lng), "{d_lng}");
    }

    #[test]
    fn wgs2gcj_shanghai() {
        assert_abs_diff_eq!(
            wgs2gcj(SHANGHAI.lat(), SHANGHAI.lng()),
            Point::new(31.22845773757727, 121.47822305927693),
            epsilon = 1e-9
        );
    }

    #[test]
    fn gcj2bd_beijing() {
        assert_abs_diff_eq!(
            gcj2bd(BEIJING.lat(), BEIJING.lng()),
            Point::new(39.915043351185915, 116.40387297451515),
            epsilon = 1e-9
        );
    }

    #[test]
    fn gcj2bd_applies_outside_china() {
        let bd = gcj2bd(48.8566, 2.3522);
        assert_abs_diff_eq!(
            bd,
            Point::new(48.8626095929417, 2.358818403434687),
            epsilon = 1e-9
        );
    }

    #[test]
    fn wgs2bd_is_composition() {
        for point in IN_CHINA.into_iter().chain([Point::new(48.8566, 2.3522)]) {
            let gcj = wgs2gcj(point.lat(), point.lng());
            assert_eq!(
                bits(wgs2bd(point.lat(), point.lng())),
                bits(gcj2bd(gcj.lat(), gcj.lng()))
            );
        }

        assert_abs_diff_eq!(
            wgs2bd(BEIJING.lat(), BEIJING.lng()),
            Point::new(39.91644274963076, 116.4101165864734),
            epsilon = 1e-9
        );
    }

    #[test]
    fn wgs2bd_outside_china_gets_bd_offset() {
        let bd = wgs2bd(48.8566, 2.3522);
        assert_eq!(bits(bd), bits(gcj2bd(48.8566, 2.3522)));
        assert_ne!(bd, Point::new(48.8566, 2.3522));
    }

    #[test]
    fn bd2gcj_round_trip() {
        for point in IN_CHINA {
            let bd = gcj2bd(point.lat(), point.lng());
            let gcj = bd2gcj(bd.lat(), bd.lng());
            assert_abs_diff_eq!(gcj, point, epsilon = 1e-6);
        }
    }

    #[test]
    fn gcj2wgs_round_trip() {
        for point in IN_CHINA {
            let gcj = wgs2gcj(point.lat(), point.lng());
            assert_abs_diff_eq!(gcj2wgs(gcj.lat(), gcj.lng()), point, epsilon = 5e-5);
        }

        let paris = gcj2wgs(48.8566, 2.3522);
        assert_eq!(paris, Point::new(48.8566, 2.3522));
    }

    #[test]
    fn bd2wgs_round_trip() {
        for point in IN_CHINA {
            let bd = wgs2bd(point.lat(), point.lng());
            assert_abs_diff_eq!(bd2wgs(bd.lat(), bd.lng()), point, epsilon = 5e-5);
        }
    }

    #[test]
    fn deterministic() {
        for point in IN_CHINA {
            let (lat, lng) = (point.lat(), point.lng());
            assert_eq!(bits(wgs2gcj(lat, lng)), bits(wgs2gcj(lat, lng)));
            assert_eq!(bits(gcj2bd(lat, lng)), bits(gcj2bd(lat, lng)));
            assert_eq!(bits(bd2gcj(lat, lng)), bits(bd2gcj(lat, lng)));
            assert_eq!(bits(wgs2bd(lat, lng)), bits(wgs2bd(lat, lng)));
        }
    }

    #[test]
    fn nan_propagates() {
        let bd = gcj2bd(f64::NAN, 116.0);
        assert!(bd.lat().is_nan());
        assert!(bd.lng().is_nan());

        let gcj = wgs2gcj(f64::NAN, 116.0);
        assert!(gcj.lat().is_nan());
    }
}
