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

//! The spherical Mercator projection used by web maps, see:
//! [Web Mercator projection](https://en.wikipedia.org/wiki/Web_Mercator_projection).
//!
//! The latitude is not clamped: the projection of a pole is not finite.

use super::{try_projected, Projection};
use crate::error::{check_finite, Error, Result};
use crate::{ellipsoid, EllipsoidalCoordinate, Metres, ProjectedCoordinate, Radians};
use core::f64::consts::FRAC_PI_4;

/// The pseudo Mercator projection of a sphere of radius `k0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PseudoMercator {
    k0: f64,
}

impl PseudoMercator {
    /// Constructor.
    /// * `k0` - the scale of the projection: the radius of the sphere.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if `k0` is NaN or infinite or
    /// `Error::InvalidParameter` if `k0` is not positive.
    ///
    /// # Examples
    /// ```
    /// use geodetic_ecef::projection::PseudoMercator;
    ///
    /// let mercator = PseudoMercator::new(6_378_137.0).unwrap();
    /// assert_eq!(6_378_137.0, mercator.k0());
    ///
    /// assert!(PseudoMercator::new(f64::INFINITY).is_err());
    /// assert!(PseudoMercator::new(0.0).is_err());
    /// ```
    pub fn new(k0: f64) -> Result<Self> {
        let k0 = check_finite("k0", k0)?;
        if k0 <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "k0 must be positive, got: {k0}"
            )));
        }
        Ok(Self { k0 })
    }

    /// The scale of the projection.
    #[must_use]
    pub const fn k0(&self) -> f64 {
        self.k0
    }
}

impl Projection for PseudoMercator {
    fn try_project_forward(&self, coord: &EllipsoidalCoordinate) -> Option<ProjectedCoordinate> {
        try_projected(
            "PseudoMercator",
            self.k0 * coord.lon().0,
            self.k0 * libm::log(libm::tan(FRAC_PI_4 + 0.5 * coord.lat().0)),
            coord.height().0,
        )
    }

    fn project_inverse(&self, coord: &ProjectedCoordinate) -> Result<EllipsoidalCoordinate> {
        Ok(EllipsoidalCoordinate::new_trusted(
            Radians(coord.x() / self.k0),
            Radians(libm::atan(libm::sinh(coord.y() / self.k0))),
            Metres(coord.z()),
        ))
    }
}

/// The pseudo Mercator projection of the WGS 84 Semimajor axis sphere,
/// EPSG:3857.
pub static WGS84_PSEUDO_MERCATOR: PseudoMercator = PseudoMercator {
    k0: ellipsoid::wgs84::A.0,
};
