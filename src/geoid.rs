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

//! The geoid module contains geoid models: the undulation of the geoid above
//! an ellipsoid, bilinearly interpolated from a regular grid of samples.
//!
//! A grid is described by a `GridDefinition`: rows run from north to south
//! and columns from west to east.
//! The samples are read from a flat file of row major, little-endian,
//! IEEE 754 single precision values.
//!
//! The EGM96 global model is loaded once, on first use, by [`egm96`].

use crate::error::{check_finite, Error, Result};
use crate::{Degrees, EllipsoidalCoordinate};
use log::debug;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The environment variable holding the path of the EGM96 grid file.
pub const EGM96_GRID_KEY: &str = "EGM96_GRID";

/// The path of the EGM96 grid file if `EGM96_GRID_KEY` is not set.
pub const EGM96_GRID_DEFAULT: &str = "data/egm96.flt";

const SAMPLE_SIZE: usize = core::mem::size_of::<f32>();

/// The layout and extent of a geoid grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDefinition {
    /// The name of the geoid model.
    pub name: &'static str,
    /// The number of rows, from north to south.
    pub rows: usize,
    /// The number of columns, from west to east.
    pub columns: usize,
    /// The size of a cell in longitude, degrees.
    pub cell_size_lon: f64,
    /// The size of a cell in latitude, degrees.
    pub cell_size_lat: f64,
    /// The western extent of the grid, degrees.
    pub west: f64,
    /// The northern extent of the grid, degrees.
    pub north: f64,
    /// Whether the samples are at the centres of the cells.
    pub centered: bool,
    /// Whether the grid wraps around from its eastern edge to its western edge.
    pub east_west_warp: bool,
}

impl GridDefinition {
    /// The number of samples in the grid.
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Check the parameters of the grid.
    fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(Error::InvalidParameter(format!(
                "{} grid must have rows and columns, got: {} x {}",
                self.name, self.rows, self.columns
            )));
        }
        for (name, value) in [
            ("Cell size longitude", self.cell_size_lon),
            ("Cell size latitude", self.cell_size_lat),
        ] {
            if check_finite(name, value)? <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{name} must be positive, got: {value}"
                )));
            }
        }
        check_finite("West", self.west)?;
        check_finite("North", self.north)?;
        Ok(())
    }

    /// Calculate the fractional column and row of a position in the grid.
    fn position(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lon_offset = if self.east_west_warp {
            // rem_euclid may round up to 360.0 for tiny negative offsets
            let offset = (lon - self.west).rem_euclid(360.0);
            if offset < 360.0 {
                offset
            } else {
                0.0
            }
        } else {
            lon - self.west
        };
        let x = lon_offset / self.cell_size_lon;
        let y = (self.north - lat) / self.cell_size_lat;
        if self.centered {
            (x - 0.5, y - 0.5)
        } else {
            (x, y)
        }
    }
}

/// The EGM96 global geoid grid: 15 minute cells centred on whole multiples
/// of a quarter degree, from the North pole to the South pole.
///
/// The column at 180° East repeats the column at 180° West, so the grid
/// does not wrap.
pub const EGM96_15_MINUTE: GridDefinition = GridDefinition {
    name: "EGM96",
    rows: 721,
    columns: 1441,
    cell_size_lon: 0.25,
    cell_size_lat: 0.25,
    west: -180.125,
    north: 90.125,
    centered: true,
    east_west_warp: false,
};

/// A linear interpolation between `left` and `right`.
fn interpolate(left: f64, right: f64, pos: f64) -> f64 {
    libm::fma(1.0 - pos, left, pos * right)
}

/// The columns or rows of a footprint and the fractional position between them.
#[allow(clippy::cast_possible_truncation)]
fn footprint(pos: f64) -> (i64, i64, f64) {
    let floor = libm::floor(pos);
    let fraction = pos - floor;
    let first = floor as i64;
    // a zero weight edge is not read
    let second = if fraction == 0.0 { first } else { first + 1 };
    (first, second, fraction)
}

/// Convert a footprint index to a grid index.
fn grid_index(index: i64, size: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < size)
}

/// A geoid model.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoidModel {
    definition: GridDefinition,
    samples: Box<[f32]>,
}

impl GeoidModel {
    /// Constructor.
    /// * `definition` - the layout and extent of the grid.
    /// * `samples` - the undulations in metres, row major from the north west.
    ///
    /// # Errors
    ///
    /// Returns `Error::GridSize` if the number of `samples` is not the number
    /// of samples in the grid, `Error::InvalidParameter` or `Error::NonFinite`
    /// if the `definition` is invalid.
    pub fn new(definition: GridDefinition, samples: Vec<f32>) -> Result<Self> {
        definition.validate()?;
        let expected = definition.sample_count();
        if samples.len() != expected {
            return Err(Error::GridSize {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            definition,
            samples: samples.into_boxed_slice(),
        })
    }

    /// Load a geoid model from a grid file.
    /// * `definition` - the layout and extent of the grid.
    /// * `path` - the path of the grid file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read or `Error::GridSize`
    /// if its length does not match the `definition`.
    pub fn load<P: AsRef<Path>>(definition: GridDefinition, path: P) -> Result<Self> {
        definition.validate()?;
        let path = path.as_ref();
        let expected = definition.sample_count();
        let file_len = path.metadata()?.len();
        if file_len != (expected * SAMPLE_SIZE) as u64 {
            return Err(Error::GridSize {
                expected,
                actual: usize::try_from(file_len).unwrap_or(usize::MAX) / SAMPLE_SIZE,
            });
        }

        debug!(
            "Loading {} geoid grid: {} x {} from {}",
            definition.name,
            definition.rows,
            definition.columns,
            path.display()
        );
        let mut file = BufReader::new(File::open(path)?);
        let mut samples = Vec::with_capacity(expected);
        for _ in 0..expected {
            samples.push(read_sample(&mut file)?);
        }
        Self::new(definition, samples)
    }

    /// The layout and extent of the grid.
    #[must_use]
    pub const fn definition(&self) -> &GridDefinition {
        &self.definition
    }

    /// The name of the geoid model.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.definition.name
    }

    /// The sample at `row` and `column`, or `None` if it is outside the grid.
    #[must_use]
    pub fn sample(&self, row: usize, column: usize) -> Option<f32> {
        if row < self.definition.rows && column < self.definition.columns {
            self.samples
                .get(row * self.definition.columns + column)
                .copied()
        } else {
            None
        }
    }

    /// The undulation of the geoid at an ellipsoidal coordinate, in metres.
    ///
    /// returns `None` if the coordinate is outside the grid.
    #[must_use]
    pub fn undulation(&self, coord: &EllipsoidalCoordinate) -> Option<f64> {
        self.undulation_at(coord.lon_degrees(), coord.lat_degrees())
    }

    /// The undulation of the geoid at `lon` and `lat`, in metres.
    ///
    /// returns `None` if the position is outside the grid or not finite.
    #[must_use]
    pub fn undulation_at(&self, lon: Degrees, lat: Degrees) -> Option<f64> {
        if !(lon.0.is_finite() && lat.0.is_finite()) {
            return None;
        }

        let (x, y) = self.definition.position(lon.0, lat.0);
        let (mut left, mut right, mut fx) = footprint(x);
        let (upper, lower, fy) = footprint(y);

        if self.definition.east_west_warp {
            let last = i64::try_from(self.definition.columns).ok()? - 1;
            if left == -1 {
                left = 0;
                right = last;
                fx = 1.0 - fx;
            } else if left == last && right != left {
                right = 0;
            }
        }

        let columns = self.definition.columns;
        let rows = self.definition.rows;
        let (left, right) = (grid_index(left, columns)?, grid_index(right, columns)?);
        let (upper, lower) = (grid_index(upper, rows)?, grid_index(lower, rows)?);

        let a = f64::from(self.sample(upper, left)?);
        let b = f64::from(self.sample(upper, right)?);
        let c = f64::from(self.sample(lower, left)?);
        let d = f64::from(self.sample(lower, right)?);
        Some(interpolate(
            interpolate(a, b, fx),
            interpolate(c, d, fx),
            fy,
        ))
    }
}

/// Read a little-endian sample from `src`.
fn read_sample(src: &mut impl Read) -> std::io::Result<f32> {
    let mut sample_bytes = [0u8; SAMPLE_SIZE];
    src.read_exact(&mut sample_bytes)?;
    Ok(f32::from_le_bytes(sample_bytes))
}

static EGM96: OnceCell<GeoidModel> = OnceCell::new();

/// The EGM96 geoid model.
///
/// The grid is loaded on the first call from the file named by the
/// `EGM96_GRID` environment variable, or `data/egm96.flt`.
/// Later calls return the same model.
///
/// # Errors
///
/// Returns the `Error` of `GeoidModel::load` if the grid cannot be loaded,
/// the load is retried on the next call.
pub fn egm96() -> Result<&'static GeoidModel> {
    EGM96.get_or_try_init(|| {
        let path =
            std::env::var(EGM96_GRID_KEY).unwrap_or_else(|_| String::from(EGM96_GRID_DEFAULT));
        debug!("Initialising EGM96 geoid model from {path}");
        GeoidModel::load(EGM96_15_MINUTE, path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Metres;
    use std::io::Write;

    /// A 3 x 4 grid of whole degree samples from 0°E, 2°N, valued `10·row + column`.
    const SMALL_GRID: GridDefinition = GridDefinition {
        name: "Small",
        rows: 3,
        columns: 4,
        cell_size_lon: 1.0,
        cell_size_lat: 1.0,
        west: 0.0,
        north: 2.0,
        centered: false,
        east_west_warp: false,
    };

    /// A global grid of 90° cells which wraps around.
    const WARP_GRID: GridDefinition = GridDefinition {
        name: "Warp",
        rows: 2,
        columns: 4,
        cell_size_lon: 90.0,
        cell_size_lat: 90.0,
        west: 0.0,
        north: 90.0,
        centered: false,
        east_west_warp: true,
    };

    #[allow(clippy::cast_precision_loss)]
    fn samples(definition: &GridDefinition) -> Vec<f32> {
        (0..definition.rows)
            .flat_map(|row| (0..definition.columns).map(move |col| (10 * row + col) as f32))
            .collect()
    }

    fn write_grid(name: &str, samples: &[f32]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "geodetic_ecef_{}_{name}.flt",
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        for sample in samples {
            file.write_all(&sample.to_le_bytes()).unwrap();
        }
        path
    }

    #[test]
    fn test_grid_definition() {
        assert_eq!(721 * 1441, EGM96_15_MINUTE.sample_count());
        assert!(EGM96_15_MINUTE.validate().is_ok());

        let mut invalid = SMALL_GRID;
        invalid.rows = 0;
        assert!(matches!(invalid.validate(), Err(Error::InvalidParameter(_))));

        let mut invalid = SMALL_GRID;
        invalid.cell_size_lat = f64::NAN;
        assert!(matches!(invalid.validate(), Err(Error::NonFinite { .. })));
    }

    #[test]
    fn test_geoid_model_new() {
        let model = GeoidModel::new(SMALL_GRID, samples(&SMALL_GRID)).unwrap();
        assert_eq!("Small", model.name());
        assert_eq!(&SMALL_GRID, model.definition());
        assert_eq!(Some(0.0), model.sample(0, 0));
        assert_eq!(Some(23.0), model.sample(2, 3));
        assert_eq!(None, model.sample(3, 0));
        assert_eq!(None, model.sample(0, 4));

        assert!(matches!(
            GeoidModel::new(SMALL_GRID, vec![0.0; 11]),
            Err(Error::GridSize {
                expected: 12,
                actual: 11
            })
        ));
    }

    #[test]
    fn test_undulation_at_nodes() {
        let model = GeoidModel::new(SMALL_GRID, samples(&SMALL_GRID)).unwrap();
        assert_eq!(Some(0.0), model.undulation_at(Degrees(0.0), Degrees(2.0)));
        assert_eq!(Some(11.0), model.undulation_at(Degrees(1.0), Degrees(1.0)));

        // the last row and column
        assert_eq!(Some(23.0), model.undulation_at(Degrees(3.0), Degrees(0.0)));
        assert_eq!(Some(3.0), model.undulation_at(Degrees(3.0), Degrees(2.0)));
    }

    #[test]
    fn test_undulation_at_interpolated() {
        let model = GeoidModel::new(SMALL_GRID, samples(&SMALL_GRID)).unwrap();
        assert_eq!(Some(11.5), model.undulation_at(Degrees(1.5), Degrees(1.0)));
        assert_eq!(Some(6.5), model.undulation_at(Degrees(1.5), Degrees(1.5)));
        assert_eq!(Some(17.0), model.undulation_at(Degrees(2.0), Degrees(0.5)));

        let coord =
            EllipsoidalCoordinate::new(Degrees(1.5), Degrees(1.0), Metres(100.0)).unwrap();
        let undulation = model.undulation(&coord).unwrap();
        assert!((undulation - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_undulation_at_outside() {
        let model = GeoidModel::new(SMALL_GRID, samples(&SMALL_GRID)).unwrap();
        assert_eq!(None, model.undulation_at(Degrees(-0.5), Degrees(1.0)));
        assert_eq!(None, model.undulation_at(Degrees(3.5), Degrees(1.0)));
        assert_eq!(None, model.undulation_at(Degrees(1.0), Degrees(2.5)));
        assert_eq!(None, model.undulation_at(Degrees(1.0), Degrees(-0.5)));
        assert_eq!(None, model.undulation_at(Degrees(f64::NAN), Degrees(1.0)));
    }

    #[test]
    fn test_undulation_at_warp() {
        let model = GeoidModel::new(WARP_GRID, samples(&WARP_GRID)).unwrap();

        // between the last column and the first
        assert_eq!(Some(1.5), model.undulation_at(Degrees(315.0), Degrees(90.0)));
        assert_eq!(Some(1.5), model.undulation_at(Degrees(-45.0), Degrees(90.0)));

        let east = model.undulation_at(Degrees(359.9), Degrees(45.0)).unwrap();
        let west = model.undulation_at(Degrees(-0.1), Degrees(45.0)).unwrap();
        assert!((east - west).abs() < 1e-12);
        assert!(east > 5.0 && east < 6.5);
    }

    #[test]
    fn test_undulation_at_warp_centered() {
        let mut definition = WARP_GRID;
        definition.centered = true;
        definition.west = -45.0;
        let model = GeoidModel::new(definition, samples(&definition)).unwrap();

        // the first column is centred on 0°, the last on 270°
        assert_eq!(Some(0.0), model.undulation_at(Degrees(0.0), Degrees(45.0)));
        assert_eq!(Some(3.0), model.undulation_at(Degrees(-90.0), Degrees(45.0)));
        assert_eq!(Some(1.5), model.undulation_at(Degrees(-45.0), Degrees(45.0)));
        assert_eq!(Some(1.5), model.undulation_at(Degrees(315.0), Degrees(45.0)));
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_egm96_grid_corners() {
        let samples: Vec<f32> = (0..EGM96_15_MINUTE.sample_count())
            .map(|i| i as f32)
            .collect();
        let model = GeoidModel::new(EGM96_15_MINUTE, samples).unwrap();

        assert_eq!(Some(0.0), model.undulation_at(Degrees(-180.0), Degrees(90.0)));
        assert_eq!(Some(1440.0), model.undulation_at(Degrees(180.0), Degrees(90.0)));
        assert_eq!(
            Some(f64::from(721 * 1441 - 1)),
            model.undulation_at(Degrees(180.0), Degrees(-90.0))
        );
        assert_eq!(
            Some(f64::from(360 * 1441 + 720)),
            model.undulation_at(Degrees(0.0), Degrees(0.0))
        );
        assert_eq!(None, model.undulation_at(Degrees(180.5), Degrees(0.0)));
    }

    #[test]
    fn test_geoid_model_load() {
        let expected = samples(&SMALL_GRID);
        let path = write_grid("load", &expected);
        let model = GeoidModel::load(SMALL_GRID, &path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(GeoidModel::new(SMALL_GRID, expected).unwrap(), model);
    }

    #[test]
    fn test_geoid_model_load_invalid() {
        let path = write_grid("short", &[0.0; 11]);
        let result = GeoidModel::load(SMALL_GRID, &path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(Error::GridSize {
                expected: 12,
                actual: 11
            })
        ));

        let missing = std::env::temp_dir().join("geodetic_ecef_missing.flt");
        assert!(matches!(
            GeoidModel::load(SMALL_GRID, missing),
            Err(Error::Io(_))
        ));
    }
}
