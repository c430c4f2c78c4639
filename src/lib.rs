#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the recurrence `z = z * z + c`, started at zero, never
//! runs off to infinity.  We can't iterate forever, so we iterate a
//! fixed number of times and, for each pixel, record how many steps
//! it took the point to leave the disc of radius two.  That count,
//! squeezed into eight bits, is the brightness of the pixel.  Points
//! that never leave are painted black.
//!
//! The pipeline runs strictly one way: a `PlaneMapper` turns a pixel
//! into a point, `escape_time` iterates the point, `intensity`
//! quantizes the count, and once every cell of the `Grid` is filled
//! the `pixmap` module writes it out as a plain-text PPM.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;

#[cfg(test)]
extern crate tempfile;

pub mod config;
pub mod driver;
pub mod error;
pub mod escape;
pub mod pixmap;
pub mod planes;
pub mod render;

pub use config::Config;
pub use driver::{run, Summary};
pub use error::RenderError;
pub use escape::{escape_time, intensity, IterationResult};
pub use pixmap::Format;
pub use planes::{Pixel, PlaneMapper, ViewWindow};
pub use render::{Grid, MandelbrotRenderer};
