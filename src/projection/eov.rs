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

//! The Hungarian Uniform National Projection, Egységes Országos Vetület (EOV).
//!
//! An oblique conformal cylindrical projection of the IUGG-67 ellipsoid, in
//! three steps:
//!
//! 1. a conformal mapping of the ellipsoid onto the Gaussian sphere;
//! 2. a rotation of the sphere about the fixed pole of the projection;
//! 3. an oblique Mercator mapping of the auxiliary sphere onto the plane.
//!
//! The false origin puts the whole of Hungary in the positive quadrant with
//! X (northing) below 400 km and Y (easting) above 400 km.
//!
//! See: [A1 vetületi szabályzat](https://lechnerkozpont.hu/data/sites/default/files/doc/iny/szabalyzatok/A1_vetuleti_szabalyzat.pdf).

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use super::{try_projected, Projection};
use crate::error::{Error, Result};
use crate::{EllipsoidalCoordinate, ProjectedCoordinate};
use core::f64::consts::FRAC_PI_4;

/// The radius of the Gaussian sphere in metres.
const R: f64 = 6_379_743.001;
/// The exponent of the conformal mapping onto the Gaussian sphere.
const N: f64 = 1.000_719_704_9;
/// The constant of the conformal mapping onto the Gaussian sphere.
const K: f64 = 1.003_110_008_3;
/// The Eccentricity of the IUGG-67 ellipsoid.
const E: f64 = 0.081_820_567_9;
/// The longitude of the projection centre in radians.
const LAMBDA_0: f64 = 0.33246029532469185650131667237359;
/// The sine of the latitude of the fixed pole on the Gaussian sphere.
const SIN_PHI_0: f64 = 0.73254289878737876179290512935584;
/// The cosine of the latitude of the fixed pole on the Gaussian sphere.
const COS_PHI_0: f64 = 0.68072086895891781187884673233212;
/// The scale factor on the central line.
const M0: f64 = 0.99993;
/// The false northing in metres.
const FALSE_X: f64 = 200_000.0;
/// The false easting in metres.
const FALSE_Y: f64 = 650_000.0;

/// The EOV projection.
///
/// The projection is forward only: `project_inverse` returns
/// `Error::Unsupported`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Eov;

impl Projection for Eov {
    /// Project an IUGG-67 ellipsoidal coordinate to EOV.
    ///
    /// The `x` value of the result is the EOV X (northing) and the `y` value
    /// is the EOV Y (easting). The height is unchanged.
    fn try_project_forward(&self, coord: &EllipsoidalCoordinate) -> Option<ProjectedCoordinate> {
        let lon = coord.lon().0;
        let lat = coord.lat().0;

        // the Gaussian sphere
        let lambda = N * (lon - LAMBDA_0);
        let (sin_lambda, cos_lambda) = libm::sincos(lambda);
        let e_sin_lat = E * libm::sin(lat);
        let ratio = libm::pow((1.0 - e_sin_lat) / (1.0 + e_sin_lat), 0.5 * N * E);
        let tan_n = libm::pow(libm::tan(libm::fma(0.5, lat, FRAC_PI_4)), N);
        let phi = 2.0 * (libm::atan(K * tan_n * ratio) - FRAC_PI_4);
        let (sin_phi, cos_phi) = libm::sincos(phi);

        // the auxiliary sphere
        let phi_v = libm::asin(libm::fma(
            COS_PHI_0,
            sin_phi,
            -SIN_PHI_0 * cos_phi * cos_lambda,
        ));
        let lambda_v = libm::asin(cos_phi * sin_lambda / libm::cos(phi_v));

        // the plane
        let scale = R * M0;
        try_projected(
            "EOV",
            FALSE_X + scale * libm::log(libm::tan(libm::fma(0.5, phi_v, FRAC_PI_4))),
            libm::fma(scale, lambda_v, FALSE_Y),
            coord.height().0,
        )
    }

    fn project_inverse(&self, _coord: &ProjectedCoordinate) -> Result<EllipsoidalCoordinate> {
        Err(Error::Unsupported("EOV inverse projection"))
    }
}

/// The EOV projection.
pub static EOV: Eov = Eov;
