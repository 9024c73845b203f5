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

//! The transformation module contains the datum transformations between the
//! ECEF coordinates of different geodetic datums.
//!
//! A `DatumTransformation` is applied in either direction: `forward` from
//! the source datum to the target datum, or the inverse.

#![allow(clippy::suboptimal_flops)]

use crate::error::{check_finite, Error, Result};
use crate::EcefCoordinate;

/// A transformation between the ECEF coordinates of two geodetic datums.
pub trait DatumTransformation: Send + Sync {
    /// Transform an ECEF coordinate.
    /// * `ecef` - the coordinate to transform.
    /// * `forward` - true from the source datum to the target datum,
    ///   false from the target datum to the source datum.
    fn transform(&self, ecef: &EcefCoordinate, forward: bool) -> EcefCoordinate;
}

/// The identity transformation, between coincident datums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullTransformation;

impl DatumTransformation for NullTransformation {
    fn transform(&self, ecef: &EcefCoordinate, _forward: bool) -> EcefCoordinate {
        *ecef
    }
}

/// A three parameter geocentric translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeocentricTranslation {
    dx: f64,
    dy: f64,
    dz: f64,
}

impl GeocentricTranslation {
    /// Constructor.
    /// * `dx`, `dy`, `dz` - the translation in metres.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if any value is NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use geodetic_ecef::{DatumTransformation, EcefCoordinate};
    /// use geodetic_ecef::transformation::GeocentricTranslation;
    ///
    /// let ed50_to_wgs84 = GeocentricTranslation::new(-87.0, -96.0, -120.0).unwrap();
    /// let origin = EcefCoordinate::default();
    /// let result = ed50_to_wgs84.transform(&origin, true);
    /// assert_eq!(EcefCoordinate::new(-87.0, -96.0, -120.0).unwrap(), result);
    /// assert_eq!(origin, ed50_to_wgs84.transform(&result, false));
    /// ```
    pub fn new(dx: f64, dy: f64, dz: f64) -> Result<Self> {
        Ok(Self::new_trusted(
            check_finite("dX", dx)?,
            check_finite("dY", dy)?,
            check_finite("dZ", dz)?,
        ))
    }

    const fn new_trusted(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    /// The translation along the x axis in metres.
    #[must_use]
    pub const fn dx(&self) -> f64 {
        self.dx
    }

    /// The translation along the y axis in metres.
    #[must_use]
    pub const fn dy(&self) -> f64 {
        self.dy
    }

    /// The translation along the z axis in metres.
    #[must_use]
    pub const fn dz(&self) -> f64 {
        self.dz
    }
}

impl DatumTransformation for GeocentricTranslation {
    fn transform(&self, ecef: &EcefCoordinate, forward: bool) -> EcefCoordinate {
        if forward {
            EcefCoordinate::new_trusted(ecef.x() + self.dx, ecef.y() + self.dy, ecef.z() + self.dz)
        } else {
            EcefCoordinate::new_trusted(ecef.x() - self.dx, ecef.y() - self.dy, ecef.z() - self.dz)
        }
    }
}

/// The Hungarian HD72 datum to WGS 84 geocentric translation.
pub static HD72_TO_WGS84: GeocentricTranslation =
    GeocentricTranslation::new_trusted(52.17, -71.82, -14.9);

/// The number of radians in an arc-second.
const ARC_SECOND: f64 = core::f64::consts::PI / (180.0 * 3600.0);

/// Calculate the rotation matrix of a Helmert transformation: `Rz·Ry·Rx`.
/// * `rotation` - the rotations about the x, y and z axes in radians,
///   position vector convention.
#[must_use]
fn calculate_rotation_matrix(rotation: [f64; 3]) -> [[f64; 3]; 3] {
    let (sx, cx) = libm::sincos(rotation[0]);
    let (sy, cy) = libm::sincos(rotation[1]);
    let (sz, cz) = libm::sincos(rotation[2]);
    [
        [cz * cy, cz * sy * sx - sz * cx, cz * sy * cx + sz * sx],
        [sz * cy, sz * sy * sx + cz * cx, sz * sy * cx - cz * sx],
        [-sy, cy * sx, cy * cx],
    ]
}

/// A seven parameter Helmert similarity transformation, using the position
/// vector convention:
///
/// forward: `X′ = T + (1+s)·R·X`, inverse: `X = Rᵀ·(X′ − T) / (1+s)`
///
/// The rotation matrix `R` is exact, not the small angle approximation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Helmert {
    translation: [f64; 3],
    rotation: [f64; 3],
    scale: f64,

    matrix: [[f64; 3]; 3],
    factor: f64,
}

impl Helmert {
    /// Constructor.
    /// * `translation` - the translation along the x, y and z axes in metres.
    /// * `rotation` - the rotations about the x, y and z axes in arc-seconds.
    /// * `scale` - the scale difference in parts per million.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if any value is NaN or infinite,
    /// `Error::InvalidParameter` if the scale factor `1 + scale·10⁻⁶` is not
    /// positive.
    pub fn new(translation: [f64; 3], rotation: [f64; 3], scale: f64) -> Result<Self> {
        for (name, value) in ["tX", "tY", "tZ"].into_iter().zip(translation) {
            check_finite(name, value)?;
        }
        for (name, value) in ["rX", "rY", "rZ"].into_iter().zip(rotation) {
            check_finite(name, value)?;
        }
        check_finite("Scale", scale)?;

        let factor = 1.0 + scale * 1e-6;
        if factor <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Scale factor must be positive, got scale: {scale} ppm"
            )));
        }

        Ok(Self {
            translation,
            rotation,
            scale,
            matrix: calculate_rotation_matrix(rotation.map(|r| r * ARC_SECOND)),
            factor,
        })
    }

    /// The translation in metres.
    #[must_use]
    pub const fn translation(&self) -> [f64; 3] {
        self.translation
    }

    /// The rotations in arc-seconds.
    #[must_use]
    pub const fn rotation(&self) -> [f64; 3] {
        self.rotation
    }

    /// The scale difference in parts per million.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }
}

impl DatumTransformation for Helmert {
    fn transform(&self, ecef: &EcefCoordinate, forward: bool) -> EcefCoordinate {
        let r = &self.matrix;
        let [tx, ty, tz] = self.translation;
        if forward {
            let (x, y, z) = (ecef.x(), ecef.y(), ecef.z());
            EcefCoordinate::new_trusted(
                libm::fma(self.factor, r[0][0] * x + r[0][1] * y + r[0][2] * z, tx),
                libm::fma(self.factor, r[1][0] * x + r[1][1] * y + r[1][2] * z, ty),
                libm::fma(self.factor, r[2][0] * x + r[2][1] * y + r[2][2] * z, tz),
            )
        } else {
            let (x, y, z) = (ecef.x() - tx, ecef.y() - ty, ecef.z() - tz);
            EcefCoordinate::new_trusted(
                (r[0][0] * x + r[1][0] * y + r[2][0] * z) / self.factor,
                (r[0][1] * x + r[1][1] * y + r[2][1] * z) / self.factor,
                (r[0][2] * x + r[1][2] * y + r[2][2] * z) / self.factor,
            )
        }
    }
}
