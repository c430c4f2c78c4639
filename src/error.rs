// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between parsing a view and writing
//! the image.
use std::io;

/// The single error type of the renderer.  Precondition failures are
/// reported before any work is done; `Io` is what the writer hands
/// back when the destination can't be created or written.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The integral plane must be at least 2x2, since the mapping
    /// divides by `dimension - 1`.
    #[fail(display = "image must be at least 2x2 pixels, got {}x{}", _0, _1)]
    BadDimensions(usize, usize),

    /// The radius of the view must be positive and finite.
    #[fail(display = "view radius must be positive and finite, got {}", _0)]
    BadRadius(f64),

    /// The center of the view must be a finite point.
    #[fail(display = "view center must be finite, got {},{}", _0, _1)]
    BadCenter(f64, f64),

    /// At least one iteration is needed to classify a point.
    #[fail(display = "iteration limit must be at least 1")]
    BadIterations,

    /// At least one thread is needed to do the work.
    #[fail(display = "thread count must be at least 1")]
    BadThreads,

    /// The sample grid couldn't be allocated.
    #[fail(display = "could not allocate a {}x{} sample grid", _0, _1)]
    Allocation(usize, usize),

    /// One of the render workers died before finishing its rows.
    #[fail(display = "a render thread panicked")]
    ThreadPanic,

    /// Creating or writing the output file failed.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> RenderError {
        RenderError::Io(err)
    }
}
