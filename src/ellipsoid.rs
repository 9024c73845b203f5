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

//! The ellipsoid module contains types and functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius) and inverse
//! flattening, together with the constants derived from them that are used
//! by the ECEF conversions.

pub mod iugg67;
pub mod wgs84;

use crate::Metres;

/// The constants derived from the Semimajor axis and flattening of an
/// ellipsoid that are used to convert between ellipsoidal and ECEF
/// coordinates.
///
/// `c` is the linear eccentricity, `l` is half the square of the Eccentricity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// a² / c
    pub a_2_over_c: f64,
    /// b² / c²
    pub b_2_over_c_2: f64,
    /// 1 - e²
    pub one_minus_e_2: f64,
    /// 1 / a²
    pub recip_a_2: f64,
    /// (1 - e²) / a²
    pub one_minus_e_2_over_a_2: f64,
    /// e² / 2
    pub l: f64,
    /// 4 l²
    pub four_l_2: f64,
    /// l²
    pub l_2: f64,
    /// The minimum discriminant of the inverse conversion.
    pub h_min: f64,
}

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geodetic_ecef::Metres;
/// use geodetic_ecef::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geodetic_ecef::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the linear eccentricity of an ellipsoid: the distance from
/// its centre to a focus, `a·e`.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geodetic_ecef::Metres;
/// use geodetic_ecef::ellipsoid::{calculate_linear_eccentricity, wgs84};
///
/// assert_eq!(
///     Metres(521_854.008_423_385_27),
///     calculate_linear_eccentricity(wgs84::A, wgs84::F)
/// );
/// ```
#[must_use]
pub fn calculate_linear_eccentricity(a: Metres, f: f64) -> Metres {
    Metres(a.0 * libm::sqrt(calculate_sq_eccentricity(f)))
}

/// Calculate the minimum discriminant of the inverse ECEF conversion, `e¹²/4`.
///
/// Points whose discriminant is smaller than this cannot be converted to
/// ellipsoidal coordinates, they lie too close to the centre of the ellipsoid.
/// * `e_2` - the square of the Eccentricity.
/// # Examples
/// ```
/// use geodetic_ecef::ellipsoid::{calculate_min_discriminant, calculate_sq_eccentricity, wgs84};
///
/// let e_2 = calculate_sq_eccentricity(wgs84::F);
/// assert_eq!(2.250101820304301e-14, calculate_min_discriminant(e_2));
/// ```
#[must_use]
pub fn calculate_min_discriminant(e_2: f64) -> f64 {
    let e_6 = e_2 * e_2 * e_2;
    0.25 * e_6 * e_6
}

/// Calculate the ECEF conversion `Parameters` of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_parameters(a: Metres, f: f64) -> Parameters {
    let e_2 = calculate_sq_eccentricity(f);
    let b = calculate_minor_axis(a, f).0;
    let c = calculate_linear_eccentricity(a, f).0;

    let a_2 = a.0 * a.0;
    let one_minus_e_2 = 1.0 - e_2;
    let l = 0.5 * e_2;
    let l_2 = l * l;
    Parameters {
        a_2_over_c: a_2 / c,
        b_2_over_c_2: (b * b) / (c * c),
        one_minus_e_2,
        recip_a_2: 1.0 / a_2,
        one_minus_e_2_over_a_2: one_minus_e_2 / a_2,
        l,
        four_l_2: 4.0 * l_2,
        l_2,
        h_min: calculate_min_discriminant(e_2),
    }
}
