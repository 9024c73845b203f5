// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! Ellipsoidal coordinates: longitude, latitude and height above an ellipsoid.

use super::{pack, unpack, EcefCoordinate, ProjectedCoordinate, SIZE};
use crate::error::{check_finite, Error, Result};
use crate::projection::Projection;
use crate::transformation::DatumTransformation;
use crate::{conversion, Degrees, Ellipsoid, Metres, Radians, Validate};
use core::fmt;

/// An ellipsoidal (geodetic) coordinate.
///
/// The longitude and latitude are held in radians, the height above the
/// ellipsoid in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EllipsoidalCoordinate {
    lon: f64,
    lat: f64,
    height: f64,
}

impl Validate for EllipsoidalCoordinate {
    /// Test whether an `EllipsoidalCoordinate` is valid.
    /// Whether all of its values are finite.
    fn is_valid(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite() && self.height.is_finite()
    }
}

impl EllipsoidalCoordinate {
    /// Constructor.
    /// * `lon` - the longitude in degrees.
    /// * `lat` - the latitude in degrees.
    /// * `height` - the height above the ellipsoid.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if any value is NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use geodetic_ecef::{Degrees, EllipsoidalCoordinate, Metres};
    ///
    /// let pecs = EllipsoidalCoordinate::new(Degrees(18.0), Degrees(46.0), Metres(0.0)).unwrap();
    /// assert_eq!(46.0_f64.to_radians(), pecs.lat().0);
    ///
    /// assert!(EllipsoidalCoordinate::new(Degrees(f64::NAN), Degrees(46.0), Metres(0.0)).is_err());
    /// ```
    pub fn new(lon: Degrees, lat: Degrees, height: Metres) -> Result<Self> {
        Self::from_radians(
            Radians(lon.0.to_radians()),
            Radians(lat.0.to_radians()),
            height,
        )
    }

    /// Construct an `EllipsoidalCoordinate` from radians.
    /// * `lon` - the longitude in radians.
    /// * `lat` - the latitude in radians.
    /// * `height` - the height above the ellipsoid.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if any value is NaN or infinite.
    pub fn from_radians(lon: Radians, lat: Radians, height: Metres) -> Result<Self> {
        Ok(Self::new_trusted(
            Radians(check_finite("Longitude", lon.0)?),
            Radians(check_finite("Latitude", lat.0)?),
            Metres(check_finite("Height", height.0)?),
        ))
    }

    /// Construct an `EllipsoidalCoordinate` without checking its values.
    /// * `lon` - the longitude in radians.
    /// * `lat` - the latitude in radians.
    /// * `height` - the height above the ellipsoid.
    #[must_use]
    pub const fn new_trusted(lon: Radians, lat: Radians, height: Metres) -> Self {
        Self {
            lon: lon.0,
            lat: lat.0,
            height: height.0,
        }
    }

    /// Unpack an `EllipsoidalCoordinate` from a little-endian record.
    /// * `bytes` - longitude and latitude in radians and height in metres,
    ///   as little-endian doubles.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if any value is NaN or infinite.
    pub fn from_bytes(bytes: &[u8; SIZE]) -> Result<Self> {
        let [lon, lat, height] = unpack(bytes);
        Self::from_radians(Radians(lon), Radians(lat), Metres(height))
    }

    /// Unpack an `EllipsoidalCoordinate` from a trusted little-endian record.
    #[must_use]
    pub fn from_bytes_trusted(bytes: &[u8; SIZE]) -> Self {
        let [lon, lat, height] = unpack(bytes);
        Self::new_trusted(Radians(lon), Radians(lat), Metres(height))
    }

    /// Pack the `EllipsoidalCoordinate` into a little-endian record.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIZE] {
        pack([self.lon, self.lat, self.height])
    }

    /// The longitude in radians.
    #[must_use]
    pub const fn lon(&self) -> Radians {
        Radians(self.lon)
    }

    /// The latitude in radians.
    #[must_use]
    pub const fn lat(&self) -> Radians {
        Radians(self.lat)
    }

    /// The longitude in degrees.
    #[must_use]
    pub fn lon_degrees(&self) -> Degrees {
        Degrees(self.lon.to_degrees())
    }

    /// The latitude in degrees.
    #[must_use]
    pub fn lat_degrees(&self) -> Degrees {
        Degrees(self.lat.to_degrees())
    }

    /// The height above the ellipsoid.
    #[must_use]
    pub const fn height(&self) -> Metres {
        Metres(self.height)
    }

    /// Convert to an `EcefCoordinate` using `ellipsoid`.
    #[must_use]
    pub fn to_ecef(&self, ellipsoid: &Ellipsoid) -> EcefCoordinate {
        conversion::calculate_ecef(self, ellipsoid)
    }

    /// Project the coordinate with `projection`.
    ///
    /// returns `None` if the coordinate cannot be projected.
    #[must_use]
    pub fn try_project(&self, projection: &dyn Projection) -> Option<ProjectedCoordinate> {
        projection.try_project_forward(self)
    }

    /// Transform the coordinate between datums.
    /// * `source` - the ellipsoid of this coordinate.
    /// * `target` - the ellipsoid of the result.
    /// * `transformation` - the datum transformation from `source` to `target`.
    /// * `forward` - the direction of `transformation`.
    ///
    /// returns `None` if the transformed point cannot be converted to
    /// ellipsoidal coordinates on `target`.
    #[must_use]
    pub fn try_transform(
        &self,
        source: &Ellipsoid,
        target: &Ellipsoid,
        transformation: &dyn DatumTransformation,
        forward: bool,
    ) -> Option<Self> {
        self.to_ecef(source)
            .transform(transformation, forward)
            .try_to_ellipsoidal(target)
    }

    /// The distance to another `EllipsoidalCoordinate`.
    ///
    /// # Errors
    ///
    /// Always returns `Error::Unsupported`: the ellipsoidal distance is not
    /// defined yet, convert to ECEF or projected coordinates instead.
    pub fn distance(&self, _other: &Self) -> Result<Metres> {
        Err(Error::Unsupported("ellipsoidal distance"))
    }
}

impl fmt::Display for EllipsoidalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lat: {}°; Lon: {}°; Alt: {} m",
            self.lat_degrees().0,
            self.lon_degrees().0,
            self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformation::NullTransformation;
    use crate::WGS84_ELLIPSOID;

    #[test]
    fn test_ellipsoidal_new() {
        let coord =
            EllipsoidalCoordinate::new(Degrees(18.0), Degrees(46.0), Metres(120.0)).unwrap();
        assert_eq!(18.0_f64.to_radians(), coord.lon().0);
        assert_eq!(46.0_f64.to_radians(), coord.lat().0);
        assert_eq!(Metres(120.0), coord.height());
        assert!((coord.lon_degrees().0 - 18.0).abs() < 1e-12);
        assert!((coord.lat_degrees().0 - 46.0).abs() < 1e-12);
        assert!(coord.is_valid());

        let coord = EllipsoidalCoordinate::from_radians(Radians(0.5), Radians(-0.25), Metres(0.0))
            .unwrap();
        assert_eq!(Radians(0.5), coord.lon());
        assert_eq!(Radians(-0.25), coord.lat());
    }

    #[test]
    fn test_ellipsoidal_new_invalid() {
        assert!(matches!(
            EllipsoidalCoordinate::new(Degrees(f64::NAN), Degrees(0.0), Metres(0.0)),
            Err(Error::NonFinite {
                name: "Longitude",
                ..
            })
        ));
        assert!(matches!(
            EllipsoidalCoordinate::new(Degrees(0.0), Degrees(f64::INFINITY), Metres(0.0)),
            Err(Error::NonFinite {
                name: "Latitude",
                ..
            })
        ));
        assert!(matches!(
            EllipsoidalCoordinate::from_radians(Radians(0.0), Radians(0.0), Metres(f64::NAN)),
            Err(Error::NonFinite { name: "Height", .. })
        ));

        let trusted =
            EllipsoidalCoordinate::new_trusted(Radians(f64::NAN), Radians(0.0), Metres(0.0));
        assert!(!trusted.is_valid());
    }

    #[test]
    fn test_ellipsoidal_bytes() {
        let coord =
            EllipsoidalCoordinate::new(Degrees(-77.0), Degrees(39.0), Metres(-12.5)).unwrap();
        let bytes = coord.to_bytes();
        assert_eq!(&coord.lon().0.to_le_bytes(), &bytes[0..8]);
        assert_eq!(&(-12.5_f64).to_le_bytes(), &bytes[16..24]);
        assert_eq!(coord, EllipsoidalCoordinate::from_bytes(&bytes).unwrap());

        let invalid =
            EllipsoidalCoordinate::new_trusted(Radians(0.0), Radians(f64::NAN), Metres(0.0))
                .to_bytes();
        assert!(EllipsoidalCoordinate::from_bytes(&invalid).is_err());
        assert!(!EllipsoidalCoordinate::from_bytes_trusted(&invalid).is_valid());
    }

    #[test]
    fn test_ellipsoidal_try_transform_identity() {
        let coord =
            EllipsoidalCoordinate::new(Degrees(18.0), Degrees(46.0), Metres(250.0)).unwrap();
        let result = coord
            .try_transform(
                &WGS84_ELLIPSOID,
                &WGS84_ELLIPSOID,
                &NullTransformation,
                true,
            )
            .unwrap();
        assert!((result.lon().0 - coord.lon().0).abs() < 1e-12);
        assert!((result.lat().0 - coord.lat().0).abs() < 1e-12);
        assert!((result.height().0 - coord.height().0).abs() < 1e-7);
    }

    #[test]
    fn test_ellipsoidal_distance_unsupported() {
        let coord = EllipsoidalCoordinate::default();
        assert!(matches!(
            coord.distance(&coord),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn test_ellipsoidal_display() {
        let coord =
            EllipsoidalCoordinate::new_trusted(Radians(0.0), Radians(0.0), Metres(1.5));
        assert_eq!("Lat: 0°; Lon: 0°; Alt: 1.5 m", coord.to_string());
    }
}
