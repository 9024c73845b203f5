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

//! The wgs84 module contains the WGS 84 ellipsoid primary parameters from the ICAO
//! [WGS 84 Implementation Manual Version 2.4](https://www.icao.int/safety/pbn/Documentation/EUROCONTROL/Eurocontrol%20WGS%2084%20Implementation%20Manual.pdf)
//! Chapter 3, page 14, together with precomputed ECEF conversion parameters.

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::ellipsoid::{Metres, Parameters};

/// The WGS 84 Semimajor axis measured in metres.  
/// This is the radius at the equator.
pub const A: Metres = Metres(6_378_137.0);

/// The WGS 84 inverse flattening.
pub const INVERSE_FLATTENING: f64 = 298.257_223_563;

/// The WGS 84 flattening, a ratio.  
/// This is the flattening of the ellipsoid at the poles.
pub const F: f64 = 1.0 / INVERSE_FLATTENING;

/// The WGS 84 ECEF conversion parameters, precomputed to 21 significant digits.
pub const PARAMETERS: Parameters = Parameters {
    a_2_over_c: 7.79540464078689228919e+7,
    b_2_over_c_2: 1.48379031586596594555e+2,
    one_minus_e_2: 9.93305620009858682943e-1,
    recip_a_2: 2.45817225764733181057e-14,
    one_minus_e_2_over_a_2: 2.44171631847341700642e-14,
    l: 3.34718999507065852867e-3,
    four_l_2: 4.48147234524044602618e-5,
    l_2: 1.12036808631011150655e-5,
    h_min: 2.25010182030430273673e-14,
};
