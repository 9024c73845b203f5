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

//! The error module contains the `Error` type returned by the fallible
//! operations of the library.
//!
//! Degenerate geometry, e.g. converting the geocentre to ellipsoidal
//! coordinates, is *not* an error: it is the `None` outcome of the
//! `try_` functions.

use thiserror::Error;

/// The library error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A coordinate or parameter component is NaN or infinite.
    #[error("{name} must be finite, got: {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// A finite parameter outside of its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An operation without a verified definition.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A geoid grid whose sample count does not match its definition.
    #[error("Invalid geoid grid size, expected: {expected} samples, actual: {actual}")]
    GridSize { expected: usize, actual: usize },

    /// A missing or unreadable geoid grid file.
    #[error("Geoid grid IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The library result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Check that `value` is finite.
/// * `name` - the name of the value, for the error message.
/// * `value` - the value to check.
///
/// # Errors
///
/// Returns `Error::NonFinite` if `value` is NaN or infinite.
pub fn check_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { name, value })
    }
}
