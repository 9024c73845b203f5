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

//! The iugg67 module contains the parameters of the IUGG 1967 (GRS 67)
//! ellipsoid, the reference ellipsoid of the Hungarian HD72 datum,
//! together with precomputed ECEF conversion parameters.

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::ellipsoid::{Metres, Parameters};

/// The IUGG 67 Semimajor axis measured in metres.
pub const A: Metres = Metres(6_378_160.0);

/// The IUGG 67 inverse flattening.
pub const INVERSE_FLATTENING: f64 = 298.247_167_427;

/// The IUGG 67 ECEF conversion parameters.
pub const PARAMETERS: Parameters = Parameters {
    a_2_over_c: 77953015.54472138756884255225116071784371923853312579483747,
    b_2_over_c_2: 148.37400353277512592309407676358791088664820797948172,
    one_minus_e_2: 0.99330539467143234553962545076303279568120149009040,
    recip_a_2: 0.00000000000002458154529067306734509336180948059588,
    one_minus_e_2_over_a_2: 0.00000000000002441698154658570029591164741274099638,
    l: 0.00334730266428382723018727461848360215939925495480,
    four_l_2: 0.00004481774050528643273409507598118108187763457794,
    l_2: 0.00001120443512632160818352376899529527046940864448,
    h_min: 0.00000000000002250556300397114362153161399772866119,
};
