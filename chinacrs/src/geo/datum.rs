/// Reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    eccentricity_sq: f64,
}

impl Datum {
    /// Krasovsky 1940 ellipsoid. GCJ-02 offsets are computed on it.
    #[allow(clippy::excessive_precision)]
    pub const KRASOVSKY_1940: Self = Datum {
        semimajor: 6378245.0,
        eccentricity_sq: 0.00669342162296594323,
    };

    /// WGS-84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        eccentricity_sq: 0.006_694_379_990_14,
    };

    /// Semi-major axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// First eccentricity squared.
    pub fn eccentricity_sq(&self) -> f64 {
        self.eccentricity_sq
    }

    /// Meridional radius of curvature at the given latitude (in radians).
    pub fn meridian_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        let magic = 1.0 - self.eccentricity_sq * sin_lat * sin_lat;
        (self.semimajor * (1.0 - self.eccentricity_sq)) / (magic * magic.sqrt())
    }

    /// Radius of the parallel at the given latitude (in radians), i.e. the prime vertical radius of curvature
    /// multiplied by the cosine of latitude.
    pub fn parallel_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        let magic = 1.0 - self.eccentricity_sq * sin_lat * sin_lat;
        self.semimajor / magic.sqrt() * lat_rad.cos()
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
