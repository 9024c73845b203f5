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

//! geodetic-ecef
//!
//! A library for converting between the coordinate representations used in
//! geodesy:
//!
//! - geocentric Cartesian coordinates, Earth-Centred, Earth-Fixed
//!   ([ECEF](https://en.wikipedia.org/wiki/Earth-centered,_Earth-fixed_coordinate_system));
//! - ellipsoidal coordinates: longitude, latitude and height above a
//!   reference ellipsoid;
//! - projected coordinates: map coordinates of a projection.
//!
//! ## Ellipsoidal and ECEF coordinates
//!
//! Ellipsoidal coordinates are converted to ECEF coordinates using the
//! prime vertical radius of curvature, `N`:
//!
//! `X = (N+h)·cos(lat)·cos(lon)`, `Y = (N+h)·cos(lat)·sin(lon)`,
//! `Z = ((1−e²)·N+h)·sin(lat)`
//!
//! ECEF coordinates are converted to ellipsoidal coordinates using a
//! closed-form, non-iterative method which solves a quartic equation
//! algebraically and then refines the root with a single Newton-Raphson step,
//! see the [conversion] module.
//! Points too close to the centre of the ellipsoid cannot be converted,
//! the conversion returns `None` for them.
//!
//! ## Datum transformations
//!
//! A datum transformation converts ECEF coordinates of one geodetic datum to
//! another, e.g. the Hungarian HD72 datum to WGS 84.
//! A transformation between ellipsoidal coordinates on different ellipsoids
//! is performed by:
//!
//! ellipsoidal →(source ellipsoid)→ ECEF →(transformation)→ ECEF′ →(target ellipsoid)→ ellipsoidal′
//!
//! ## Projections
//!
//! Projections map ellipsoidal coordinates to plane coordinates, e.g. the
//! pseudo Mercator projection used by web maps and the Hungarian
//! [EOV](https://hu.wikipedia.org/wiki/Egys%C3%A9ges_orsz%C3%A1gos_vet%C3%BCleti_rendszer)
//! oblique conformal projection.
//!
//! ## Geoid models
//!
//! A geoid model provides the undulation of the geoid above the ellipsoid,
//! interpolated from a regular grid, e.g. the
//! [EGM96](https://earth-info.nga.mil/index.php?dir=wgs84&action=wgs84) model.
//!
//! ## Design
//!
//! The `Ellipsoid` struct represents an ellipsoid of revolution together
//! with the constants derived from its parameters which are used by the
//! ECEF conversions.
//! The statics `WGS84_ELLIPSOID` and `IUGG67_ELLIPSOID` are created once,
//! on first use, from precomputed parameters.
//!
//! All coordinate types are immutable values, checked to be finite on
//! construction unless they are the result of a calculation on checked values.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [libm](https://crates.io/crates/libm) - for the mathematical functions,
//!   especially fused multiply add;
//! - [once_cell](https://crates.io/crates/once_cell) - to create the statics;
//! - [thiserror](https://crates.io/crates/thiserror) - to define `Error`;
//! - [log](https://crates.io/crates/log) - for diagnostic logging.

extern crate angle_sc;
extern crate icao_units;

pub mod conversion;
pub mod coordinates;
pub mod ellipsoid;
pub mod error;
pub mod geoid;
pub mod projection;
pub mod transformation;

pub use angle_sc::{Degrees, Radians, Validate};
pub use coordinates::{EcefCoordinate, EllipsoidalCoordinate, ProjectedCoordinate};
pub use error::{Error, Result};
pub use geoid::{GeoidModel, GridDefinition};
pub use icao_units::si::Metres;
pub use projection::Projection;
pub use transformation::DatumTransformation;

use error::check_finite;
use once_cell::sync::Lazy;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The inverse flattening of the ellipsoid.
    inverse_flattening: f64,

    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,

    /// The ECEF conversion parameters of the ellipsoid.
    parameters: ellipsoid::Parameters,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `inverse_flattening` - the inverse flattening of the `Ellipsoid`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFinite` if either parameter is not finite, or
    /// `Error::InvalidParameter` if `a` is not positive or
    /// `inverse_flattening` is not greater than one.
    ///
    /// # Examples
    /// ```
    /// use geodetic_ecef::{Ellipsoid, Metres};
    ///
    /// let grs80 = Ellipsoid::new(Metres(6_378_137.0), 298.257_222_101).unwrap();
    /// assert_eq!(Metres(6_378_137.0), grs80.a());
    ///
    /// assert!(Ellipsoid::new(Metres(f64::NAN), 298.257_222_101).is_err());
    /// assert!(Ellipsoid::new(Metres(6_378_137.0), 0.5).is_err());
    /// ```
    pub fn new(a: Metres, inverse_flattening: f64) -> Result<Self> {
        check_finite("Semimajor axis", a.0)?;
        check_finite("Inverse flattening", inverse_flattening)?;
        if a.0 <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Semimajor axis must be positive, got: {}",
                a.0
            )));
        }
        if inverse_flattening <= 1.0 {
            return Err(Error::InvalidParameter(format!(
                "Inverse flattening must be greater than one, got: {inverse_flattening}"
            )));
        }

        let f = 1.0 / inverse_flattening;
        Ok(Self {
            a,
            inverse_flattening,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            e_2: ellipsoid::calculate_sq_eccentricity(f),
            parameters: ellipsoid::calculate_parameters(a, f),
        })
    }

    /// Construct an `Ellipsoid` from precomputed ECEF conversion parameters.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `inverse_flattening` - the inverse flattening of the `Ellipsoid`.
    /// * `parameters` - the ECEF conversion parameters, they are trusted.
    #[must_use]
    pub fn from_parameters(
        a: Metres,
        inverse_flattening: f64,
        parameters: ellipsoid::Parameters,
    ) -> Self {
        let f = 1.0 / inverse_flattening;
        Self {
            a,
            inverse_flattening,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            e_2: ellipsoid::calculate_sq_eccentricity(f),
            parameters,
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::from_parameters(
            ellipsoid::wgs84::A,
            ellipsoid::wgs84::INVERSE_FLATTENING,
            ellipsoid::wgs84::PARAMETERS,
        )
    }

    /// Construct an `Ellipsoid` with the IUGG-67 parameters.
    #[must_use]
    pub fn iugg67() -> Self {
        Self::from_parameters(
            ellipsoid::iugg67::A,
            ellipsoid::iugg67::INVERSE_FLATTENING,
            ellipsoid::iugg67::PARAMETERS,
        )
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The inverse flattening of the ellipsoid.
    #[must_use]
    pub const fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The ECEF conversion parameters of the ellipsoid.
    #[must_use]
    pub const fn parameters(&self) -> &ellipsoid::Parameters {
        &self.parameters
    }
}

/// A static instance of the WGS-84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// A static instance of the IUGG-67 `Ellipsoid`.
pub static IUGG67_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::iugg67);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsoid_wgs84() {
        let wgs84 = Ellipsoid::wgs84();

        assert_eq!(ellipsoid::wgs84::A, wgs84.a());
        assert_eq!(ellipsoid::wgs84::INVERSE_FLATTENING, wgs84.inverse_flattening());
        assert_eq!(ellipsoid::wgs84::F, wgs84.f());
        assert_eq!(Metres(6_356_752.314_245_179), wgs84.b());
        assert_eq!(0.0066943799901413165, wgs84.e_2());
        assert_eq!(&ellipsoid::wgs84::PARAMETERS, wgs84.parameters());

        assert_eq!(wgs84, *WGS84_ELLIPSOID);
        assert_ne!(wgs84, *IUGG67_ELLIPSOID);
    }

    #[test]
    fn test_ellipsoid_iugg67() {
        let iugg67 = Ellipsoid::iugg67();

        assert_eq!(Metres(6_378_160.0), iugg67.a());
        assert_eq!(298.247_167_427, iugg67.inverse_flattening());
        assert_eq!(iugg67, *IUGG67_ELLIPSOID);
    }

    #[test]
    fn test_ellipsoid_new() {
        let derived = Ellipsoid::new(
            ellipsoid::wgs84::A,
            ellipsoid::wgs84::INVERSE_FLATTENING,
        )
        .unwrap();

        // the public parameters are the same
        assert_eq!(WGS84_ELLIPSOID.a(), derived.a());
        assert_eq!(WGS84_ELLIPSOID.inverse_flattening(), derived.inverse_flattening());
        assert_eq!(WGS84_ELLIPSOID.b(), derived.b());

        // but the derived parameters are rounded differently
        assert_ne!(*WGS84_ELLIPSOID, derived);

        // an Ellipsoid derived twice is the same
        let derived_again = Ellipsoid::new(
            ellipsoid::wgs84::A,
            ellipsoid::wgs84::INVERSE_FLATTENING,
        )
        .unwrap();
        assert_eq!(derived, derived_again);
    }

    #[test]
    fn test_ellipsoid_new_invalid() {
        assert!(matches!(
            Ellipsoid::new(Metres(f64::INFINITY), 298.0),
            Err(Error::NonFinite {
                name: "Semimajor axis",
                ..
            })
        ));
        assert!(matches!(
            Ellipsoid::new(Metres(6_378_137.0), f64::NAN),
            Err(Error::NonFinite {
                name: "Inverse flattening",
                ..
            })
        ));
        assert!(matches!(
            Ellipsoid::new(Metres(-6_378_137.0), 298.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            Ellipsoid::new(Metres(6_378_137.0), 1.0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
