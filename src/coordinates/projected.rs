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

//! Projected (plane) coordinates.

use super::{pack, unpack, EllipsoidalCoordinate, SIZE};
use crate::error::{check_finite, Result};
use crate::projection::Projection;
use crate::Validate;
use core::fmt;

/// A coordinate in the plane of a `Projection`, in the linear units of
/// the projection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedCoordinate {
    x: f64,
    y: f64,
    z: f64,
}

impl Validate for ProjectedCoordinate {
    /// Test whether a `ProjectedCoordinate` is valid.
    /// Whether all of its values are finite.
    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl ProjectedCoordinate {
    /// Constructor.
    /// * `x`, `y` - the plane coordinates.
    /// * `z` - the height.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if any value is NaN or infinite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self::new_trusted(
            check_finite("X", x)?,
            check_finite("Y", y)?,
            check_finite("Z", z)?,
        ))
    }

    /// Construct a `ProjectedCoordinate` without checking its values.
    #[must_use]
    pub const fn new_trusted(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Unpack a `ProjectedCoordinate` from a little-endian record.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if any value is NaN or infinite.
    pub fn from_bytes(bytes: &[u8; SIZE]) -> Result<Self> {
        let [x, y, z] = unpack(bytes);
        Self::new(x, y, z)
    }

    /// Unpack a `ProjectedCoordinate` from a trusted little-endian record.
    #[must_use]
    pub fn from_bytes_trusted(bytes: &[u8; SIZE]) -> Self {
        let [x, y, z] = unpack(bytes);
        Self::new_trusted(x, y, z)
    }

    /// Pack the `ProjectedCoordinate` into a little-endian record.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIZE] {
        pack([self.x, self.y, self.z])
    }

    /// The x plane coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y plane coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The height.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The distance to another `ProjectedCoordinate` in the plane.
    #[must_use]
    pub fn distance_2d(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrt(libm::fma(dx, dx, dy * dy))
    }

    /// The distance to another `ProjectedCoordinate` including the height
    /// difference.
    #[must_use]
    pub fn distance_3d(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        libm::sqrt(libm::fma(dx, dx, libm::fma(dy, dy, dz * dz)))
    }

    /// Convert back to an `EllipsoidalCoordinate` with the inverse of `projection`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported` if `projection` has no inverse.
    pub fn to_ellipsoidal(&self, projection: &dyn Projection) -> Result<EllipsoidalCoordinate> {
        projection.project_inverse(self)
    }
}

impl fmt::Display for ProjectedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}; {}", self.x, self.y, self.z)
    }
}
