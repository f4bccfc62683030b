use geo_types::{coord, point, CoordFloat};

use crate::geo::{GeoPoint, NewGeoPoint};

impl<T: CoordFloat> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lng(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for geo_types::Point<T> {
    fn latlng(lat: T, lng: T) -> Self {
        point!(x: lng, y: lat)
    }
}

impl<T: CoordFloat> GeoPoint for geo_types::Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lng(&self) -> Self::Num {
        self.x
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for geo_types::Coord<T> {
    fn latlng(lat: T, lng: T) -> Self {
        coord! { x: lng, y: lat }
    }
}
