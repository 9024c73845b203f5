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

//! The conversion module contains functions for converting between
//! ellipsoidal and ECEF coordinates on an `Ellipsoid`.
//!
//! The ellipsoidal to ECEF conversion is direct.
//!
//! The ECEF to ellipsoidal conversion is non-iterative: it solves the
//! quartic equation of the foot point algebraically and then refines the
//! root with a single Newton-Raphson step, see:
//! [Vermeille H. An analytical method to transform geocentric into geodetic coordinates](https://doi.org/10.1007/s00190-010-0419-x).
//! It is accurate to within a few nanometres anywhere outside of a small
//! region around the centre of the ellipsoid, where it returns `None`.

#![allow(clippy::many_single_char_names, clippy::similar_names, clippy::suboptimal_flops)]

use crate::{EcefCoordinate, Ellipsoid, EllipsoidalCoordinate, Metres, Radians, Validate};

const INV_3: f64 = 1.0 / 3.0;
const INV_6: f64 = 1.0 / 6.0;
/// 1 / ∛2
#[allow(clippy::excessive_precision)]
const INV_CBRT_2: f64 = 0.793_700_525_984_099_737_375_852_819_636_154_130_195_746_663_949_92;

/// Calculate the ECEF coordinate of an ellipsoidal coordinate.
/// * `coord` - the ellipsoidal coordinate.
/// * `ellipsoid` - the `Ellipsoid` of `coord`.
///
/// # Examples
/// ```
/// use geodetic_ecef::{conversion, Degrees, EllipsoidalCoordinate, Metres, WGS84_ELLIPSOID};
///
/// let north_pole = EllipsoidalCoordinate::new(Degrees(0.0), Degrees(90.0), Metres(0.0)).unwrap();
/// let ecef = conversion::calculate_ecef(&north_pole, &WGS84_ELLIPSOID);
/// assert!(ecef.x().abs() < 1e-6);
/// assert!((WGS84_ELLIPSOID.b().0 - ecef.z()).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_ecef(coord: &EllipsoidalCoordinate, ellipsoid: &Ellipsoid) -> EcefCoordinate {
    let parameters = ellipsoid.parameters();
    let (sin_lat, cos_lat) = libm::sincos(coord.lat().0);
    let (sin_lon, cos_lon) = libm::sincos(coord.lon().0);
    let height = coord.height().0;

    // the prime vertical radius of curvature
    let n = parameters.a_2_over_c
        / libm::sqrt(libm::fma(cos_lat, cos_lat, parameters.b_2_over_c_2));
    let d = (n + height) * cos_lat;

    EcefCoordinate::new_trusted(
        d * cos_lon,
        d * sin_lon,
        libm::fma(parameters.one_minus_e_2, n, height) * sin_lat,
    )
}

/// Calculate the ECEF coordinates of a sequence of ellipsoidal coordinates.
/// * `coords` - the ellipsoidal coordinates.
/// * `ellipsoid` - the `Ellipsoid` of `coords`.
///
/// The coordinates are converted lazily, in order.
pub fn calculate_ecef_iter<'a, I>(
    coords: I,
    ellipsoid: &'a Ellipsoid,
) -> impl Iterator<Item = EcefCoordinate> + 'a
where
    I: IntoIterator<Item = EllipsoidalCoordinate>,
    I::IntoIter: 'a,
{
    coords
        .into_iter()
        .map(move |coord| calculate_ecef(&coord, ellipsoid))
}

/// Calculate the ellipsoidal coordinate of an ECEF coordinate.
/// * `ecef` - the ECEF coordinate.
/// * `ellipsoid` - the `Ellipsoid` of the result.
///
/// returns `None` if `ecef` is too close to the centre of the ellipsoid,
/// where the discriminant of the quartic equation is below its minimum,
/// or so far from it that the calculation overflows.
///
/// # Examples
/// ```
/// use geodetic_ecef::{conversion, EcefCoordinate, WGS84_ELLIPSOID};
///
/// let equator = EcefCoordinate::new(6_378_137.0, 0.0, 0.0).unwrap();
/// let coord = conversion::calculate_ellipsoidal(&equator, &WGS84_ELLIPSOID).unwrap();
/// assert_eq!(0.0, coord.lon().0);
/// assert_eq!(0.0, coord.lat().0);
/// assert!(coord.height().0.abs() < 1e-8);
///
/// let centre = EcefCoordinate::default();
/// assert!(conversion::calculate_ellipsoidal(&centre, &WGS84_ELLIPSOID).is_none());
/// ```
#[must_use]
pub fn calculate_ellipsoidal(
    ecef: &EcefCoordinate,
    ellipsoid: &Ellipsoid,
) -> Option<EllipsoidalCoordinate> {
    let parameters = ellipsoid.parameters();
    let (x, y, z) = (ecef.x(), ecef.y(), ecef.z());

    let ww = libm::fma(x, x, y * y);
    let m = parameters.recip_a_2 * ww;
    let n = parameters.one_minus_e_2_over_a_2 * z * z;
    let mpn = m + n;
    let p = INV_6 * (mpn - parameters.four_l_2);
    let pp = p * p;
    let g = parameters.l_2 * m * n;
    let h = libm::fma(2.0 * pp, p, g);

    // a non finite discriminant means that the input overflowed
    if !h.is_finite() || h < parameters.h_min {
        log::trace!("calculate_ellipsoidal: discriminant {h} below minimum for {ecef}");
        return None;
    }

    let c = INV_CBRT_2 * libm::cbrt(h + g + 2.0 * libm::sqrt(h * g));
    let i = -parameters.l_2 - 0.5 * mpn;
    let beta = libm::fma(INV_3, i, -c) - pp / c;
    let k = parameters.l_2 * (parameters.l_2 - mpn);

    let t_left = libm::sqrt(libm::sqrt(libm::fma(beta, beta, -k)) - 0.5 * (beta + i));
    // the argument may fall just below zero near latitudes of ±45.3°
    let t_right = libm::sqrt(libm::fabs(0.5 * (beta - i)));
    let t = if m < n {
        t_left + t_right
    } else {
        t_left - t_right
    };

    // a single Newton-Raphson correction of t
    let tt = t * t;
    let g = 2.0 * parameters.l * (m - n);
    let f_t = -libm::fma(tt, tt, libm::fma(2.0 * i, tt, libm::fma(g, t, k)));
    let df_dt = libm::fma(4.0 * tt, t, libm::fma(4.0 * i, t, g));
    let t = t + f_t / df_dt;

    let u = parameters.l + t;
    let v = t - parameters.l;
    let uz = u * z;
    let w = libm::sqrt(ww);
    let wv = w * v;

    let inv_uv = 1.0 / (u * v);
    let dw = w - wv * inv_uv;
    let dz = z - parameters.one_minus_e_2 * uz * inv_uv;
    let distance = libm::sqrt(libm::fma(dw, dw, dz * dz));
    let height = if u < 1.0 { -distance } else { distance };

    let coord = EllipsoidalCoordinate::new_trusted(
        Radians(libm::atan2(y, x)),
        Radians(libm::atan2(uz, wv)),
        Metres(height),
    );
    if coord.is_valid() {
        Some(coord)
    } else {
        log::trace!("calculate_ellipsoidal: non finite result for {ecef}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Degrees, IUGG67_ELLIPSOID, WGS84_ELLIPSOID};
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_calculate_ecef_equator() {
        let coord = EllipsoidalCoordinate::new(Degrees(0.0), Degrees(0.0), Metres(0.0)).unwrap();
        let ecef = calculate_ecef(&coord, &WGS84_ELLIPSOID);
        assert!(is_within_tolerance(6_378_137.0, ecef.x(), 1e-6));
        assert_eq!(0.0, ecef.y());
        assert_eq!(0.0, ecef.z());

        let coord = EllipsoidalCoordinate::new(Degrees(90.0), Degrees(0.0), Metres(100.0)).unwrap();
        let ecef = calculate_ecef(&coord, &WGS84_ELLIPSOID);
        assert!(ecef.x().abs() < 1e-6);
        assert!(is_within_tolerance(6_378_237.0, ecef.y(), 1e-6));
    }

    #[test]
    fn test_calculate_ecef_poles() {
        let b = WGS84_ELLIPSOID.b().0;

        let north = EllipsoidalCoordinate::new(Degrees(0.0), Degrees(90.0), Metres(0.0)).unwrap();
        let ecef = calculate_ecef(&north, &WGS84_ELLIPSOID);
        assert!(ecef.x().abs() < 1e-6);
        assert!(is_within_tolerance(b, ecef.z(), 1e-6));

        let south =
            EllipsoidalCoordinate::new(Degrees(0.0), Degrees(-90.0), Metres(10.0)).unwrap();
        let ecef = calculate_ecef(&south, &WGS84_ELLIPSOID);
        assert!(is_within_tolerance(-b - 10.0, ecef.z(), 1e-6));
    }

    #[test]
    fn test_calculate_ecef_iter() {
        let coords = [
            EllipsoidalCoordinate::new(Degrees(0.0), Degrees(0.0), Metres(0.0)).unwrap(),
            EllipsoidalCoordinate::new(Degrees(18.0), Degrees(46.0), Metres(150.0)).unwrap(),
            EllipsoidalCoordinate::new(Degrees(-120.0), Degrees(-30.0), Metres(-50.0)).unwrap(),
        ];
        let results: Vec<_> = calculate_ecef_iter(coords, &WGS84_ELLIPSOID).collect();
        assert_eq!(coords.len(), results.len());
        for (coord, ecef) in coords.iter().zip(&results) {
            assert_eq!(calculate_ecef(coord, &WGS84_ELLIPSOID), *ecef);
        }

        assert_eq!(0, calculate_ecef_iter(Vec::new(), &WGS84_ELLIPSOID).count());
    }

    #[test]
    fn test_calculate_ellipsoidal_centre() {
        let centre = EcefCoordinate::new(0.0, 0.0, 0.0).unwrap();
        assert!(calculate_ellipsoidal(&centre, &WGS84_ELLIPSOID).is_none());

        // 1 km from the centre is still inside the degenerate region
        let near_centre = EcefCoordinate::new(1_000.0, 0.0, 0.0).unwrap();
        assert!(calculate_ellipsoidal(&near_centre, &WGS84_ELLIPSOID).is_none());
    }

    #[test]
    fn test_calculate_ellipsoidal_overflow() {
        let far = EcefCoordinate::new(1e200, 1e200, 1e200).unwrap();
        assert!(calculate_ellipsoidal(&far, &WGS84_ELLIPSOID).is_none());
        assert!(far.try_to_ellipsoidal(&WGS84_ELLIPSOID).is_none());

        // the discriminant is finite but its product with g is not
        let far = EcefCoordinate::new(1e50, 0.0, 1e50).unwrap();
        assert!(calculate_ellipsoidal(&far, &WGS84_ELLIPSOID).is_none());

        let max = EcefCoordinate::new(f64::MAX, f64::MAX, f64::MAX).unwrap();
        assert!(calculate_ellipsoidal(&max, &IUGG67_ELLIPSOID).is_none());
    }

    #[test]
    fn test_calculate_ellipsoidal_poles() {
        let b = WGS84_ELLIPSOID.b().0;

        let north = EcefCoordinate::new(0.0, 0.0, b + 100.0).unwrap();
        let coord = calculate_ellipsoidal(&north, &WGS84_ELLIPSOID).unwrap();
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            coord.lat().0,
            1e-15
        ));
        assert!(is_within_tolerance(100.0, coord.height().0, 1e-8));

        let south = EcefCoordinate::new(0.0, 0.0, -b).unwrap();
        let coord = calculate_ellipsoidal(&south, &WGS84_ELLIPSOID).unwrap();
        assert!(is_within_tolerance(
            -core::f64::consts::FRAC_PI_2,
            coord.lat().0,
            1e-15
        ));
        assert!(coord.height().0.abs() < 1e-8);
    }

    fn round_trip(ellipsoid: &Ellipsoid) {
        let heights = [-5_000.0, 0.0, 100.0, 100_000.0, 10_000_000.0];
        for height in heights {
            for lat in (-90_i32..=90).step_by(5) {
                for lon in (-180_i32..180).step_by(15) {
                    let coord = EllipsoidalCoordinate::new(
                        Degrees(f64::from(lon)),
                        Degrees(f64::from(lat)),
                        Metres(height),
                    )
                    .unwrap();
                    let ecef = calculate_ecef(&coord, ellipsoid);
                    let result = calculate_ellipsoidal(&ecef, ellipsoid).unwrap();

                    // longitude is undefined at the poles
                    if lat.abs() != 90 {
                        let delta_lon =
                            libm::remainder(result.lon().0 - coord.lon().0, core::f64::consts::TAU);
                        assert!(
                            delta_lon.abs() < 1e-14,
                            "lon: {lon}, lat: {lat}, height: {height}"
                        );
                    }
                    assert!(
                        is_within_tolerance(coord.lat().0, result.lat().0, 1e-14),
                        "lon: {lon}, lat: {lat}, height: {height}"
                    );
                    assert!(
                        is_within_tolerance(height, result.height().0, 1e-7),
                        "lon: {lon}, lat: {lat}, height: {height}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_wgs84() {
        round_trip(&WGS84_ELLIPSOID);
    }

    #[test]
    fn test_round_trip_iugg67() {
        round_trip(&IUGG67_ELLIPSOID);
    }

    #[test]
    fn test_round_trip_derived_ellipsoid() {
        let grs80 = Ellipsoid::new(Metres(6_378_137.0), 298.257_222_101).unwrap();
        round_trip(&grs80);
    }
}
