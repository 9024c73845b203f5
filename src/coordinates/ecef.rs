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

//! Earth-Centred, Earth-Fixed Cartesian coordinates.

use super::{pack, unpack, EllipsoidalCoordinate, SIZE};
use crate::error::{check_finite, Result};
use crate::transformation::DatumTransformation;
use crate::{conversion, Ellipsoid, Metres, Validate};
use core::fmt;

/// A geocentric Cartesian coordinate in metres.
///
/// The `z` axis points to the North pole, the `x` axis to the intersection
/// of the Equator and the prime meridian.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EcefCoordinate {
    x: f64,
    y: f64,
    z: f64,
}

impl Validate for EcefCoordinate {
    /// Test whether an `EcefCoordinate` is valid.
    /// Whether all of its values are finite.
    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl EcefCoordinate {
    /// Constructor.
    /// * `x`, `y`, `z` - the coordinates in metres.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if any value is NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use geodetic_ecef::EcefCoordinate;
    ///
    /// let ecef = EcefCoordinate::new(4_081_882.4, 1_410_011.1, 4_678_199.4).unwrap();
    /// assert_eq!(1_410_011.1, ecef.y());
    ///
    /// assert!(EcefCoordinate::new(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self::new_trusted(
            check_finite("X", x)?,
            check_finite("Y", y)?,
            check_finite("Z", z)?,
        ))
    }

    /// Construct an `EcefCoordinate` without checking its values.
    /// * `x`, `y`, `z` - the coordinates in metres, they must be finite.
    #[must_use]
    pub const fn new_trusted(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Unpack an `EcefCoordinate` from a little-endian record.
    /// * `bytes` - `x`, `y` and `z` as little-endian doubles.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if any value is NaN or infinite.
    pub fn from_bytes(bytes: &[u8; SIZE]) -> Result<Self> {
        let [x, y, z] = unpack(bytes);
        Self::new(x, y, z)
    }

    /// Unpack an `EcefCoordinate` from a trusted little-endian record.
    /// * `bytes` - `x`, `y` and `z` as little-endian doubles.
    #[must_use]
    pub fn from_bytes_trusted(bytes: &[u8; SIZE]) -> Self {
        let [x, y, z] = unpack(bytes);
        Self::new_trusted(x, y, z)
    }

    /// Pack the `EcefCoordinate` into a little-endian record.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIZE] {
        pack([self.x, self.y, self.z])
    }

    /// The x coordinate in metres.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate in metres.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z coordinate in metres.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The straight line distance to another `EcefCoordinate`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> Metres {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        Metres(libm::sqrt(libm::fma(dx, dx, libm::fma(dy, dy, dz * dz))))
    }

    /// Convert to an `EllipsoidalCoordinate` on `ellipsoid`.
    ///
    /// returns `None` if the point is too close to the centre of the
    /// ellipsoid to be converted.
    #[must_use]
    pub fn try_to_ellipsoidal(&self, ellipsoid: &Ellipsoid) -> Option<EllipsoidalCoordinate> {
        conversion::calculate_ellipsoidal(self, ellipsoid)
    }

    /// Apply a datum transformation.
    /// * `transformation` - the datum transformation.
    /// * `forward` - the direction of the transformation.
    #[must_use]
    pub fn transform(&self, transformation: &dyn DatumTransformation, forward: bool) -> Self {
        transformation.transform(self, forward)
    }
}

impl fmt::Display for EcefCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m; {} m; {} m", self.x, self.y, self.z)
    }
}
