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

//! The projection module contains the map projections between ellipsoidal
//! and projected coordinates:
//!
//! - `PseudoMercator`: the spherical (web) Mercator projection;
//! - `Eov`: the Hungarian Uniform National Projection (EOV).
//!
//! The named projections `WGS84_PSEUDO_MERCATOR` and `EOV` are statics.

pub mod eov;
pub mod pseudo_mercator;

pub use eov::{Eov, EOV};
pub use pseudo_mercator::{PseudoMercator, WGS84_PSEUDO_MERCATOR};

use crate::error::Result;
use crate::{EllipsoidalCoordinate, ProjectedCoordinate, Validate};

/// A map projection.
pub trait Projection: Send + Sync {
    /// Project an ellipsoidal coordinate onto the plane.
    ///
    /// returns `None` if `coord` is outside of the domain of the projection.
    fn try_project_forward(&self, coord: &EllipsoidalCoordinate) -> Option<ProjectedCoordinate>;

    /// Project a plane coordinate back to an ellipsoidal coordinate.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported` if the projection has no inverse.
    fn project_inverse(&self, coord: &ProjectedCoordinate) -> Result<EllipsoidalCoordinate>;
}

/// Construct a `ProjectedCoordinate` from the results of a projection.
///
/// returns `None` if any of the values is not finite.
fn try_projected(name: &str, x: f64, y: f64, z: f64) -> Option<ProjectedCoordinate> {
    let coord = ProjectedCoordinate::new_trusted(x, y, z);
    if coord.is_valid() {
        Some(coord)
    } else {
        log::trace!("{name}: projection is not finite: {coord}");
        None
    }
}
