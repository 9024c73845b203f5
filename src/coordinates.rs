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

//! The coordinates module contains the coordinate types of the library:
//!
//! - `EcefCoordinate`: geocentric Cartesian coordinates in metres;
//! - `EllipsoidalCoordinate`: longitude, latitude and height above an ellipsoid;
//! - `ProjectedCoordinate`: plane coordinates of a `Projection`.
//!
//! All coordinates are immutable values of three `f64`s.
//! They are checked to be finite when they are constructed, except by the
//! `_trusted` constructors which are used for the results of calculations
//! on checked values.
//!
//! Each coordinate can be packed into, and unpacked from, a fixed record of
//! `SIZE` bytes: its three values as little-endian IEEE 754 doubles, in
//! field order.

pub mod ecef;
pub mod ellipsoidal;
pub mod projected;

pub use ecef::EcefCoordinate;
pub use ellipsoidal::EllipsoidalCoordinate;
pub use projected::ProjectedCoordinate;

/// The size of a packed coordinate in bytes.
pub const SIZE: usize = 3 * core::mem::size_of::<f64>();

const VALUE_SIZE: usize = core::mem::size_of::<f64>();

/// Pack three values into a little-endian coordinate record.
#[must_use]
pub(crate) fn pack(values: [f64; 3]) -> [u8; SIZE] {
    let mut bytes = [0u8; SIZE];
    for (chunk, value) in bytes.chunks_exact_mut(VALUE_SIZE).zip(values) {
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Unpack three values from a little-endian coordinate record.
#[must_use]
pub(crate) fn unpack(bytes: &[u8; SIZE]) -> [f64; 3] {
    let mut values = [0.0; 3];
    for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(VALUE_SIZE)) {
        let mut value_bytes = [0u8; VALUE_SIZE];
        value_bytes.copy_from_slice(chunk);
        *value = f64::from_le_bytes(value_bytes);
    }
    values
}
