// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel and the quantizer that turns its verdict
//! into a gray level.
use num::{clamp, Complex};

/// The radius of the disc a point has to leave to count as escaped.
const BAILOUT: f64 = 2.0;

/// What the kernel learned about a single point: how many steps it
/// ran, and whether the point left the disc before the limit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IterationResult {
    /// The step counter at the moment iteration stopped.  Starts at
    /// one, never exceeds the limit.
    pub iterations: usize,
    /// True iff the modulus passed two while the counter was still
    /// below the limit.
    pub escaped: bool,
}

/// This is our classic iterator function.  Starting from zero, apply
/// `z = z * z + c` until either the modulus of `z` exceeds two or the
/// counter reaches `max_iterations`.
///
/// The counter starts at one and the check comes before the update,
/// so the first check sees `z = 0` and every point gets at least one
/// update.  The modulus is taken with `hypot` rather than by summing
/// squares, and the real and imaginary parts are advanced together
/// from the previous `z`.  The real part is summed as `-y*y + x0 + x*x`,
/// left to right.  At deep zoom the rounding of each term shows up
/// in the counts, so that order is part of the contract.
pub fn escape_time(c: Complex<f64>, max_iterations: usize) -> IterationResult {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    let mut j = 1;
    while z.re.hypot(z.im) <= BAILOUT {
        if j >= max_iterations {
            return IterationResult {
                iterations: j,
                escaped: false,
            };
        }
        let re = -z.im * z.im + c.re + z.re * z.re;
        let im = 2.0 * z.re * z.im + c.im;
        z = Complex { re, im };
        j += 1;
    }
    // An overflowed orbit leaves NaN behind, which fails the
    // comparison above and lands here as an escape, as it should.
    IterationResult {
        iterations: j,
        escaped: j < max_iterations,
    }
}

/// Maps an iteration result to an 8-bit gray level.  Points that
/// escaped get brighter the longer they held out; points that never
/// escaped are black.
pub fn intensity(result: IterationResult, max_iterations: usize) -> f64 {
    if !result.escaped {
        return 0.0;
    }
    let color_factor = 256.0 / (max_iterations as f64);
    clamp(((result.iterations as f64) * color_factor).floor(), 0.0, 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{CENTER_IM, CENTER_RE, ITERATIONS, PIXELS, RADIUS};
    use planes::{Pixel, PlaneMapper, ViewWindow};

    // The modulus of z after `steps` updates, computed the long way.
    fn modulus_after(c: Complex<f64>, steps: usize) -> f64 {
        let (mut x, mut y) = (0.0_f64, 0.0_f64);
        for _ in 0..steps {
            let xtemp = -y * y + c.re + x * x;
            y = 2.0 * x * y + c.im;
            x = xtemp;
        }
        x.hypot(y)
    }

    fn sample_points() -> Vec<Complex<f64>> {
        let mut points = vec![];
        for i in 0..41 {
            for j in 0..41 {
                points.push(Complex::new(
                    -2.5 + (i as f64) * 0.09,
                    -1.5 + (j as f64) * 0.075,
                ));
            }
        }
        points
    }

    #[test]
    fn origin_never_escapes() {
        let r = escape_time(Complex::new(0.0, 0.0), 10);
        assert_eq!(
            r,
            IterationResult {
                iterations: 10,
                escaped: false
            }
        );
        assert_eq!(intensity(r, 10), 0.0);
    }

    #[test]
    fn far_point_escapes_after_its_first_update() {
        let r = escape_time(Complex::new(5.0, 5.0), 10);
        assert_eq!(
            r,
            IterationResult {
                iterations: 2,
                escaped: true
            }
        );
        assert_eq!(intensity(r, 10), (2.0_f64 * 256.0 / 10.0).floor());
        assert_eq!(intensity(r, 10), 51.0);
    }

    #[test]
    fn a_limit_of_one_classifies_everything_as_inside() {
        let r = escape_time(Complex::new(5.0, 5.0), 1);
        assert_eq!(r.iterations, 1);
        assert!(!r.escaped);
    }

    #[test]
    fn escape_on_the_last_step_counts_as_inside() {
        // 5+5i leaves the disc when the counter reads 2.
        let r = escape_time(Complex::new(5.0, 5.0), 2);
        assert_eq!(r.iterations, 2);
        assert!(!r.escaped);
        assert_eq!(intensity(r, 2), 0.0);
    }

    #[test]
    fn counts_stay_within_the_limit() {
        for limit in &[1, 2, 7, 100] {
            for c in sample_points() {
                let r = escape_time(c, *limit);
                assert!(r.iterations >= 1 && r.iterations <= *limit);
                if !r.escaped {
                    assert_eq!(r.iterations, *limit);
                }
            }
        }
    }

    #[test]
    fn escape_happens_exactly_at_the_reported_step() {
        for c in sample_points() {
            let r = escape_time(c, 200);
            if r.escaped {
                assert!(modulus_after(c, r.iterations - 1) > 2.0);
                if r.iterations > 1 {
                    assert!(modulus_after(c, r.iterations - 2) <= 2.0);
                }
            }
        }
    }

    #[test]
    fn kernel_is_idempotent() {
        for c in sample_points() {
            assert_eq!(escape_time(c, 150), escape_time(c, 150));
        }
    }

    #[test]
    fn kernel_is_symmetric_about_the_real_axis() {
        for c in sample_points() {
            assert_eq!(escape_time(c, 150), escape_time(c.conj(), 150));
        }
    }

    #[test]
    fn samples_stay_in_a_byte() {
        for limit in &[1, 3, 10, 255, 256, 1000] {
            for c in sample_points() {
                let s = intensity(escape_time(c, *limit), *limit);
                assert!(s >= 0.0 && s <= 255.0);
                assert_eq!(s, s.floor());
            }
        }
    }

    #[test]
    fn brightness_ramps_with_escape_time() {
        let quick = IterationResult {
            iterations: 3,
            escaped: true,
        };
        let slow = IterationResult {
            iterations: 900,
            escaped: true,
        };
        assert_eq!(intensity(quick, 1000), 0.0);
        assert_eq!(intensity(slow, 1000), 230.0);
        assert!(intensity(slow, 1000) > intensity(quick, 1000));
    }

    #[test]
    fn huge_points_escape_without_nan_trouble() {
        let r = escape_time(Complex::new(1.0e300, -1.0e300), 1000);
        assert!(r.escaped);
        assert_eq!(r.iterations, 2);
    }

    fn reference_plane() -> PlaneMapper {
        let view = ViewWindow::new(Complex::new(CENTER_RE, CENTER_IM), RADIUS).unwrap();
        PlaneMapper::new(PIXELS, PIXELS, view).unwrap()
    }

    // Pixels of the default view whose counts depend on the order the
    // real part is summed in.  Summing `x*x - y*y + x0` instead gives
    // 596, 474, 923, 440, 598, 455, 431, 508, 714, 582, 433 and 464.
    #[test]
    fn counts_at_the_reference_zoom() {
        let plane = reference_plane();
        let expected = [
            (1048, 64, 595),
            (1088, 80, 485),
            (976, 96, 933),
            (1144, 104, 441),
            (1192, 104, 596),
            (1256, 104, 454),
            (1272, 112, 430),
            (1168, 120, 509),
            (752, 128, 464),
            (896, 128, 584),
            (1064, 128, 435),
            (624, 136, 463),
        ];
        for &(column, row, count) in expected.iter() {
            let r = escape_time(plane.pixel_to_point(&Pixel(column, row)), ITERATIONS);
            assert_eq!(
                r,
                IterationResult {
                    iterations: count,
                    escaped: true
                },
                "pixel {},{}",
                column,
                row
            );
        }
    }

    #[test]
    fn reference_zoom_matches_left_to_right_summation() {
        let plane = reference_plane();
        for row in (0..PIXELS).step_by(97) {
            for column in (0..PIXELS).step_by(89) {
                let c = plane.pixel_to_point(&Pixel(column, row));
                let (mut x, mut y, mut j) = (0.0_f64, 0.0_f64, 1);
                while x.hypot(y) <= 2.0 && j < ITERATIONS {
                    let xtemp = -1.0 * y * y + c.re + x * x;
                    y = 2.0 * x * y + c.im;
                    x = xtemp;
                    j += 1;
                }
                assert_eq!(escape_time(c, ITERATIONS).iterations, j);
            }
        }
    }
}
