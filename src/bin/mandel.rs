// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelbands;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use mandelbands::output::write_image;
use mandelbands::{RenderConfig, Renderer};
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<u16>(s, 'x') {
        Some((0, _)) | Some((_, 0)) => Err("Image dimensions must be positive".to_string()),
        Some(_) => Ok(()),
        None => Err("Could not parse output image size".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() && f > 0.0 => Ok(()),
        _ => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const CONTRAST: &str = "contrast";

const MAX_THREADS: usize = 1024;

fn args<'a>(
    default_threads: &'a str,
    default_iterations: &'a str,
    default_contrast: &'a str,
) -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .about("Multi-threaded Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the extension picks the format"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_size(&s))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX_THREADS,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", MAX_THREADS),
                    )
                })
                .help("Number of threads, and row-bands, to render with"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value(default_iterations)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Iterations after which a point counts as inside the set"),
        )
        .arg(
            Arg::with_name(CONTRAST)
                .required(false)
                .long(CONTRAST)
                .short("c")
                .takes_value(true)
                .default_value(default_contrast)
                .validator(|s| validate_positive(&s, "Contrast must be a positive number"))
                .help("Exponent of the color ramp"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let size = matches.value_of(SIZE).unwrap_or_default();
    let (width, height) = parse_pair::<u16>(size, 'x')
        .ok_or_else(|| format_err!("Error parsing image dimensions: {}", size))?;
    let (width, height) = (usize::from(width), usize::from(height));
    let threads = usize::from_str(matches.value_of(THREADS).unwrap_or_default())?;
    let iterations = u32::from_str(matches.value_of(ITERATIONS).unwrap_or_default())?;
    let contrast = f64::from_str(matches.value_of(CONTRAST).unwrap_or_default())?;
    let outfile = matches
        .value_of(OUTPUT)
        .ok_or_else(|| format_err!("No output file given"))?;

    let config = RenderConfig::default()
        .with_max_iterations(iterations)
        .with_contrast(contrast);
    let renderer = Renderer::new(width, height, config)?;
    debug!("{:?}", renderer.config());
    let mut pixels = vec![0u8; renderer.plane().byte_len()];

    let elapsed = renderer.render(&mut pixels, threads)?;
    let millis =
        elapsed.as_secs() as f64 * 1000.0 + f64::from(elapsed.subsec_nanos()) / 1_000_000.0;

    info!("rendered {}x{} in {:.3} ms", width, height, millis);
    write_image(outfile, &pixels, (width, height))?;
    info!("wrote {}", outfile);
    println!(
        "Rendered {}x{} with {} threads in {:.3} ms",
        width, height, threads, millis
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let default_threads = num_cpus::get().to_string();
    let default_iterations = mandelbands::config::MAX_ITERATIONS.to_string();
    let default_contrast = mandelbands::config::CONTRAST.to_string();
    let matches = args(&default_threads, &default_iterations, &default_contrast);

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
