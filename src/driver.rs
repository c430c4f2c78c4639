// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Runs one configuration from start to finish: validate, render,
//! write.
use std::time::{Duration, Instant};

use config::Config;
use error::RenderError;
use pixmap::write_image;

/// What happened during a run.
#[derive(Copy, Clone, Debug)]
pub struct Summary {
    /// Wall-clock time spent filling the grid.
    pub render_time: Duration,
    /// Wall-clock time for the whole run, writing included.
    pub total_time: Duration,
    /// Whether the image made it to disk.
    pub written: bool,
}

/// Renders the configured view and writes it out.
///
/// Bad parameters and a failure to allocate the grid are errors.  A
/// failure to write the image is not: it is logged, and the run ends
/// normally with `written` set to false.
pub fn run(config: &Config) -> Result<Summary, RenderError> {
    let start = Instant::now();
    let renderer = config.renderer()?;
    info!(
        "rendering {}x{} around {},{} radius {:e}, {} iterations, {} thread(s)",
        config.width,
        config.height,
        config.center.re,
        config.center.im,
        config.radius,
        config.iterations,
        config.threads
    );

    let grid = renderer.render(config.threads)?;
    let render_time = start.elapsed();
    debug!("grid filled in {:?}", render_time);

    let written = match write_image(&config.output, &grid, config.format) {
        Ok(()) => {
            info!("wrote {}", config.output.display());
            true
        }
        Err(e) => {
            error!("{}: {}", config.output.display(), e);
            false
        }
    };

    Ok(Summary {
        render_time,
        total_time: start.elapsed(),
        written,
    })
}
