// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::config;
use mandelbrot::{Config, Format};
use num::Complex;
use std::path::PathBuf;
use std::str::FromStr;

/// Splits `s` at the first `separator` and parses both halves.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let mut halves = s.splitn(2, separator);
    let l = halves.next()?.parse().ok()?;
    let r = halves.next()?.parse().ok()?;
    Some((l, r))
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex::new(re, im))
}

/// The one validator every option goes through: `parse` must
/// understand the text, and `accept` must like the value.
fn validate<T, P, A>(
    s: &str,
    parse: P,
    accept: A,
    unparsable: &str,
    rejected: &str,
) -> Result<(), String>
where
    P: Fn(&str) -> Option<T>,
    A: Fn(&T) -> bool,
{
    match parse(s) {
        Some(ref value) if accept(value) => Ok(()),
        Some(_) => Err(rejected.to_string()),
        None => Err(unparsable.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const CENTER: &str = "center";
const RADIUS: &str = "radius";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const FORMAT: &str = "format";

fn args<'a>(defaults: &'a Defaults) -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(config::OUTPUT)
                .help("Output file, overwritten if it exists"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value(&defaults.size)
                .validator(|s| {
                    validate(
                        &s,
                        |s| parse_pair::<usize>(s, 'x'),
                        |size: &(usize, usize)| size.0 >= 2 && size.1 >= 2,
                        "Could not parse output image size",
                        "Output image must be at least 2x2 pixels",
                    )
                })
                .help("Size of output image, at least 2x2"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value(&defaults.center)
                .validator(|s| {
                    validate(
                        &s,
                        parse_complex,
                        |c: &Complex<f64>| c.re.is_finite() && c.im.is_finite(),
                        "Could not parse view center",
                        "View center must be a finite point",
                    )
                })
                .help("Center of the view on the complex plane"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .default_value(&defaults.radius)
                .validator(|s| {
                    validate(
                        &s,
                        |s| s.parse::<f64>().ok(),
                        |r: &f64| *r > 0.0 && r.is_finite(),
                        "Could not parse radius",
                        "Radius must be a positive number",
                    )
                })
                .help("Half the side of the square view (the default is close to the limit of f64 precision)"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate(
                        &s,
                        |s| s.parse::<usize>().ok(),
                        |t: &usize| *t >= 1 && *t <= max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value(&defaults.iterations)
                .validator(move |s| {
                    validate(
                        &s,
                        |s| s.parse::<usize>().ok(),
                        |i: &usize| *i >= 1 && *i <= 1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Maximum number of iterations per point"),
        )
        .arg(
            Arg::with_name(FORMAT)
                .required(false)
                .long(FORMAT)
                .short("f")
                .takes_value(true)
                .possible_values(&["ascii", "binary"])
                .default_value("ascii")
                .help("Plain-text pixmap (P3) or binary graymap (P5)"),
        )
        .get_matches()
}

// clap 2 wants its defaults as borrowed strings.
struct Defaults {
    size: String,
    center: String,
    radius: String,
    iterations: String,
}

impl Defaults {
    fn new() -> Defaults {
        Defaults {
            size: format!("{}x{}", config::PIXELS, config::PIXELS),
            center: format!("{},{}", config::CENTER_RE, config::CENTER_IM),
            radius: format!("{:e}", config::RADIUS),
            iterations: config::ITERATIONS.to_string(),
        }
    }
}

fn configure(matches: &ArgMatches) -> Config {
    let size =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let center = parse_complex(matches.value_of(CENTER).unwrap()).expect("Error parsing center");
    let radius = f64::from_str(matches.value_of(RADIUS).unwrap()).expect("Error parsing radius");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count.");
    let format =
        Format::from_str(matches.value_of(FORMAT).unwrap()).expect("Could not parse format.");

    Config {
        center,
        radius,
        width: size.0,
        height: size.1,
        iterations,
        threads,
        output: PathBuf::from(matches.value_of(OUTPUT).unwrap()),
        format,
    }
}

fn main() {
    env_logger::init();
    let defaults = Defaults::new();
    let matches = args(&defaults);
    let config = configure(&matches);

    match mandelbrot::run(&config) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(summary) => {
            println!("time: {}", summary.render_time.as_secs());
            println!("Total Time: {}", summary.total_time.as_secs());
            println!("exported");
        }
    }
}
