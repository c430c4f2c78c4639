// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs of a single run, and their defaults.
use num::Complex;
use std::path::PathBuf;

use error::RenderError;
use pixmap::Format;
use planes::{PlaneMapper, ViewWindow};
use render::MandelbrotRenderer;

/// Real part of the default view center.
pub const CENTER_RE: f64 = -0.0452407411;
/// Imaginary part of the default view center.
pub const CENTER_IM: f64 = 0.9868162204352258;
/// Default view radius.  At this zoom neighbouring pixels are only a
/// few hundred ulps apart, so the picture is at the edge of what f64
/// can resolve.
pub const RADIUS: f64 = 2.7e-10;
/// Default iteration limit.
pub const ITERATIONS: usize = 1000;
/// Default width and height of the image.
pub const PIXELS: usize = 2000;
/// Default output file.
pub const OUTPUT: &str = "MandelbrotSetArr.pgm";

/// Everything needed to produce one image.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The point the view is centered on.
    pub center: Complex<f64>,
    /// Half the side of the square view.
    pub radius: f64,
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Maximum number of iterations per point.
    pub iterations: usize,
    /// Number of render threads.
    pub threads: usize,
    /// Where to write the image.
    pub output: PathBuf,
    /// Which flavour of the format to write.
    pub format: Format,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            center: Complex::new(CENTER_RE, CENTER_IM),
            radius: RADIUS,
            width: PIXELS,
            height: PIXELS,
            iterations: ITERATIONS,
            threads: 1,
            output: PathBuf::from(OUTPUT),
            format: Format::Ascii,
        }
    }
}

impl Config {
    /// Checks every precondition and builds the renderer this
    /// configuration describes.
    pub fn renderer(&self) -> Result<MandelbrotRenderer, RenderError> {
        if self.threads == 0 {
            return Err(RenderError::BadThreads);
        }
        let view = ViewWindow::new(self.center, self.radius)?;
        let plane = PlaneMapper::new(self.width, self.height, view)?;
        MandelbrotRenderer::new(plane, self.iterations)
    }
}
