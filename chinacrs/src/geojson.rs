//! Conversion of GeoJSON geometries between coordinate systems.

use geojson::{Geometry, Position, Value};

use crate::crs::Crs;
use crate::error::ChinaCrsError;
use crate::geo::{GeoPoint, NewGeoPoint};
use crate::point::Point;

/// GeoJSON position with at least two ordinates (longitude, latitude). Further ordinates are kept as is.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonPoint(Position);

impl GeoJsonPoint {
    /// Returns the underlying position.
    pub fn into_inner(self) -> Position {
        self.0
    }
}

impl TryFrom<Position> for GeoJsonPoint {
    type Error = ChinaCrsError;

    fn try_from(value: Position) -> Result<Self, Self::Error> {
        if value.len() < 2 {
            Err(ChinaCrsError::Conversion(
                "point must contain at least 2 dimensions".to_string(),
            ))
        } else {
            Ok(GeoJsonPoint(value))
        }
    }
}

impl GeoPoint for GeoJsonPoint {
    type Num = f64;

    fn lat(&self) -> Self::Num {
        self.0[1]
    }

    fn lng(&self) -> Self::Num {
        self.0[0]
    }
}

impl NewGeoPoint for GeoJsonPoint {
    fn latlng(lat: f64, lng: f64) -> Self {
        Self(vec![lng, lat])
    }
}

/// Returns a copy of the geometry with every position converted from `from` into `to` coordinate system.
///
/// Fails if any position has less than two ordinates.
///
/// ```
/// use chinacrs::Crs;
/// use chinacrs::geojson::convert_geometry;
/// use geojson::{Geometry, Value};
///
/// let line = Geometry::new(Value::LineString(vec![vec![116.3975, 39.9087], vec![121.4737, 31.2304]]));
/// let converted = convert_geometry(&line, Crs::Wgs84, Crs::Gcj02).unwrap();
///
/// let Value::LineString(points) = converted.value else { panic!() };
/// assert_eq!(points.len(), 2);
/// ```
pub fn convert_geometry(geometry: &Geometry, from: Crs, to: Crs) -> Result<Geometry, ChinaCrsError> {
    let mut converter = Converter {
        from,
        to,
        converted: 0,
    };
    let value = converter.value(&geometry.value)?;

    log::debug!(
        "Converted {} positions from {from} to {to}",
        converter.converted
    );

    Ok(Geometry {
        bbox: None,
        value,
        foreign_members: geometry.foreign_members.clone(),
    })
}

/// Same as [`convert_geometry`], for a bare geometry value.
pub fn convert_value(value: &Value, from: Crs, to: Crs) -> Result<Value, ChinaCrsError> {
    Converter {
        from,
        to,
        converted: 0,
    }
    .value(value)
}

struct Converter {
    from: Crs,
    to: Crs,
    converted: usize,
}

impl Converter {
    fn value(&mut self, value: &Value) -> Result<Value, ChinaCrsError> {
        Ok(match value {
            Value::Point(p) => Value::Point(self.position(p)?),
            Value::MultiPoint(points) => Value::MultiPoint(self.positions(points)?),
            Value::LineString(points) => Value::LineString(self.positions(points)?),
            Value::MultiLineString(lines) => Value::MultiLineString(self.rings(lines)?),
            Value::Polygon(polygon) => Value::Polygon(self.rings(polygon)?),
            Value::MultiPolygon(mp) => Value::MultiPolygon(
                mp.iter()
                    .map(|polygon| self.rings(polygon))
                    .collect::<Result<_, _>>()?,
            ),
            Value::GeometryCollection(geometries) => Value::GeometryCollection(
                geometries
                    .iter()
                    .map(|g| -> Result<Geometry, ChinaCrsError> {
                        Ok(Geometry {
                            bbox: None,
                            value: self.value(&g.value)?,
                            foreign_members: g.foreign_members.clone(),
                        })
                    })
                    .collect::<Result<_, _>>()?,
            ),
        })
    }

    fn rings(&mut self, rings: &[Vec<Position>]) -> Result<Vec<Vec<Position>>, ChinaCrsError> {
        rings.iter().map(|ring| self.positions(ring)).collect()
    }

    fn positions(&mut self, positions: &[Position]) -> Result<Vec<Position>, ChinaCrsError> {
        positions.iter().map(|p| self.position(p)).collect()
    }

    fn position(&mut self, position: &Position) -> Result<Position, ChinaCrsError> {
        let point = GeoJsonPoint::try_from(position.clone()).inspect_err(|_| {
            log::warn!("Invalid GeoJSON position: {position:?}");
        })?;

        let converted = self.from.convert(self.to, &Point::from(&point));
        let mut position = point.into_inner();
        position[0] = converted.lng();
        position[1] = converted.lat();
        self.converted += 1;

        Ok(position)
    }
}
