// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a square window on the complex plane described by its center
//! and its radius.
use error::RenderError;
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the column, row of a pixel in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// A square window on the complex plane: everything within `radius`
/// of `center` along either axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewWindow {
    /// The point the window is centered on.
    pub center: Complex<f64>,
    /// Half the side of the window.
    pub radius: f64,
}

impl ViewWindow {
    /// Constructor.  Refuses windows that would produce nonsense:
    /// an infinite or NaN center, or a radius that isn't a positive,
    /// finite number.
    pub fn new(center: Complex<f64>, radius: f64) -> Result<ViewWindow, RenderError> {
        if !center.re.is_finite() || !center.im.is_finite() {
            return Err(RenderError::BadCenter(center.re, center.im));
        }
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(RenderError::BadRadius(radius));
        }
        Ok(ViewWindow { center, radius })
    }

    /// The left-lower corner of the window.
    pub fn begin(&self) -> Complex<f64> {
        Complex::new(self.center.re - self.radius, self.center.im - self.radius)
    }

    /// The right-upper corner of the window.
    pub fn end(&self) -> Complex<f64> {
        Complex::new(self.center.re + self.radius, self.center.im + self.radius)
    }
}

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a window on the complex plane.  Maps pixels of the former to
/// points of the latter.  The first and last pixel of each axis land
/// exactly on the edges of the window.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The window on the complex plane.
    pub view: ViewWindow,
    // The left-lower corner of the window, where pixel 0,0 lands.
    origin: Complex<f64>,
    // The distance on the complex plane between two neighbouring
    // pixels, horizontally and vertically.
    deltas: (f64, f64),
}

impl PlaneMapper where {
    /// Constructor.  Takes the size of the integral plane and the
    /// window to map it onto.  Both dimensions must be at least two,
    /// since the step between pixels is the span of the window
    /// divided by `dimension - 1`.
    pub fn new(width: usize, height: usize, view: ViewWindow) -> Result<PlaneMapper, RenderError> {
        if width < 2 || height < 2 {
            return Err(RenderError::BadDimensions(width, height));
        }

        let begin = view.begin();
        let end = view.end();
        let deltas = (
            (end.re - begin.re) / ((width as f64) - 1.0),
            (end.im - begin.im) / ((height as f64) - 1.0),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            view,
            origin: begin,
            deltas,
        })
    }

    /// The width of the integral plane.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// The height of the integral plane.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.  Always false
    /// for a mapper that made it through `new`.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number it corresponds to.  Row 0 lands on the bottom
    /// edge of the window, `centerY - radius`.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            (pixel.0 as f64) * self.deltas.0 + self.origin.re,
            (pixel.1 as f64) * self.deltas.1 + self.origin.im,
        )
    }
}
