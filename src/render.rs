// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Walks every pixel of the plane through the kernel and the
//! quantizer, filling a grid of gray levels.  There is a
//! single-threaded walk, and a threaded one that hands whole rows to
//! workers.  Every pixel depends only on its own coordinates, so both
//! produce the same grid.

use crossbeam;
use itertools::iproduct;
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use error::RenderError;
use escape::{escape_time, intensity};
use planes::{Pixel, PlaneMapper};

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, f64>>>>;

/// The dense field of samples, one per pixel, stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    samples: Vec<f64>,
}

impl Grid {
    /// Allocates a zeroed grid.  Both dimensions must be at least
    /// two.  Failing to get the memory is reported rather than
    /// aborting the process.
    pub fn new(width: usize, height: usize) -> Result<Grid, RenderError> {
        if width < 2 || height < 2 {
            return Err(RenderError::BadDimensions(width, height));
        }
        let len = width
            .checked_mul(height)
            .ok_or(RenderError::Allocation(width, height))?;
        let mut samples: Vec<f64> = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| RenderError::Allocation(width, height))?;
        samples.resize(len, 0.0);
        Ok(Grid {
            width,
            height,
            samples,
        })
    }

    /// The sample at a given pixel, or `None` if the pixel lies
    /// outside the grid.
    pub fn get(&self, pixel: &Pixel) -> Option<f64> {
        if pixel.0 >= self.width || pixel.1 >= self.height {
            return None;
        }
        Some(self.samples[pixel.1 * self.width + pixel.0])
    }

    /// All the samples, row 0 first.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// The samples one row at a time, row 0 first.
    pub fn rows(&self) -> ::std::slice::Chunks<f64> {
        self.samples.chunks(self.width)
    }
}

/// The parameters by which a Mandelbrot image is generated: the
/// mapping from pixels to points and the iteration limit.  Once set,
/// this object should not be mutable.
pub struct MandelbrotRenderer {
    plane: PlaneMapper,
    limit: usize,
}

impl MandelbrotRenderer {
    /// Requires a plane and the number of iterations to perform on a
    /// per-point basis, which must be at least one.
    pub fn new(plane: PlaneMapper, limit: usize) -> Result<Self, RenderError> {
        if limit == 0 {
            return Err(RenderError::BadIterations);
        }
        Ok(MandelbrotRenderer { plane, limit })
    }

    /// The plane this renderer walks.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The gray level of one pixel.
    pub fn shade(&self, pixel: &Pixel) -> f64 {
        let c = self.plane.pixel_to_point(pixel);
        intensity(escape_time(c, self.limit), self.limit)
    }

    fn shade_row(&self, row: usize, samples: &mut [f64]) {
        for (column, sample) in samples.iter_mut().enumerate() {
            *sample = self.shade(&Pixel(column, row));
        }
    }

    /// The main function for single-threaded rendering.
    pub fn render_single(&self) -> Result<Grid, RenderError> {
        let mut grid = Grid::new(self.plane.width(), self.plane.height())?;
        let width = grid.width;
        for (row, column) in iproduct!(0..self.plane.height(), 0..self.plane.width()) {
            grid.samples[row * width + column] = self.shade(&Pixel(column, row));
        }
        Ok(grid)
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  Rows are handed out from a shared queue; each
    /// row slice belongs to exactly one worker, so the grid itself is
    /// never locked.
    pub fn render(&self, threads: usize) -> Result<Grid, RenderError> {
        if threads == 0 {
            return Err(RenderError::BadThreads);
        }
        if threads == 1 {
            return self.render_single();
        }

        let mut grid = Grid::new(self.plane.width(), self.plane.height())?;
        let width = grid.width;
        crossbeam::scope(|spawner| {
            let rows: RowQueue = Arc::new(Mutex::new(grid.samples.chunks_mut(width).enumerate()));
            for worker in 0..threads {
                let rows = rows.clone();
                spawner.spawn(move |_| {
                    let mut done = 0;
                    loop {
                        let next = { rows.lock().unwrap().next() };
                        match next {
                            Some((row, samples)) => {
                                self.shade_row(row, samples);
                                done += 1;
                            }
                            None => {
                                break;
                            }
                        }
                    }
                    debug!("worker {} shaded {} rows", worker, done);
                });
            }
        })
        .map_err(|_| RenderError::ThreadPanic)?;
        Ok(grid)
    }
}
