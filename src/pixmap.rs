// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a finished grid to disk as a portable anymap.
//!
//! The default is the plain-text pixmap (`P3`): a header, then one
//! `v v v` line per pixel, the same gray level on all three channels.
//! Rows are written in storage order, row 0 first.  The binary
//! graymap (`P5`) carries the same samples at one byte per pixel.
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use error::RenderError;
use render::Grid;

/// The comment line written into every plain-text header.
pub const COMMENT: &str = "#Mandelbrot";

/// The largest channel value a sample can take.
pub const MAX_CHANNEL: u8 = 255;

/// Which flavour of the format to write.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Format {
    /// `P3`, plain-text RGB with three equal channels per pixel.
    Ascii,
    /// `P5`, binary 8-bit graymap.
    Binary,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Format, String> {
        match s {
            "ascii" => Ok(Format::Ascii),
            "binary" => Ok(Format::Binary),
            _ => Err(format!("Unknown output format '{}'", s)),
        }
    }
}

/// Writes the grid as a plain-text pixmap.  The writer is flushed
/// before returning, so a late failure shows up here rather than
/// vanishing when the writer is dropped.
pub fn write_ascii<W: Write>(out: W, grid: &Grid) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    write!(
        out,
        "P3\n{}\n{} {}\n{}\n",
        COMMENT, grid.width, grid.height, MAX_CHANNEL
    )?;
    for row in grid.rows() {
        for sample in row {
            let v = *sample as u8;
            writeln!(out, "{} {} {}", v, v, v)?;
        }
    }
    out.flush()
}

/// Writes the grid as a binary graymap by way of the image crate.
pub fn write_binary<W: Write>(out: W, grid: &Grid) -> io::Result<()> {
    let (width, height) = dimensions(grid)?;
    let pixels: Vec<u8> = grid.samples().iter().map(|s| *s as u8).collect();
    let mut out = BufWriter::new(out);
    {
        let mut encoder =
            PNMEncoder::new(&mut out).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
        encoder.encode(&pixels[..], width, height, ColorType::Gray(8))?;
    }
    out.flush()
}

fn dimensions(grid: &Grid) -> io::Result<(u32, u32)> {
    if grid.width > u32::max_value() as usize || grid.height > u32::max_value() as usize {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "image too large for the binary encoder",
        ));
    }
    Ok((grid.width as u32, grid.height as u32))
}

/// Creates (or truncates) the file at `path` and writes the grid to
/// it.  The file is closed on every path out of this function.
pub fn write_image(path: &Path, grid: &Grid, format: Format) -> Result<(), RenderError> {
    let output = File::create(path)?;
    match format {
        Format::Ascii => write_ascii(output, grid)?,
        Format::Binary => write_binary(output, grid)?,
    }
    Ok(())
}
