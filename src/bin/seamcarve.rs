// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use anyhow::{bail, Context, Result};
use clap::{App, Arg, ArgMatches};
use seamcarve::{SeamCarver, SeamFinder};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

struct Options {
    input: PathBuf,
    output: PathBuf,
    columns: u32,
    rows: u32,
    energy: bool,
}

fn count(matches: &ArgMatches, name: &str) -> Result<u32> {
    let value = matches.value_of(name).unwrap_or("0");
    value
        .parse()
        .with_context(|| format!("--{} expects a whole number, not {:?}", name, value))
}

fn parse_args() -> Result<(Options, LevelFilter)> {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("columns")
                .short("c")
                .long("columns")
                .takes_value(true)
                .help("Number of vertical seams to remove"),
        )
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .takes_value(true)
                .help("Number of horizontal seams to remove"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy map of the carved image instead of the image"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .conflicts_with("verbose")
                .help("No logging at all"),
        )
        .get_matches();

    let level = if matches.is_present("quiet") {
        LevelFilter::OFF
    } else {
        match matches.occurrences_of("verbose") {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let options = Options {
        input: PathBuf::from(matches.value_of_os("input").unwrap_or_default()),
        output: PathBuf::from(matches.value_of_os("output").unwrap_or_default()),
        columns: count(&matches, "columns")?,
        rows: count(&matches, "rows")?,
        energy: matches.is_present("energy"),
    };
    Ok((options, level))
}

fn setup_logging(level: LevelFilter) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    tracing_subscriber::registry()
        .with(level)
        .with(stderr_layer)
        .init();
}

fn carve(options: &Options) -> Result<()> {
    let image = image::open(&options.input)
        .with_context(|| format!("cannot read {}", options.input.display()))?;
    let mut carver = SeamCarver::new(&image)?;
    let (width, height) = (carver.width(), carver.height());

    if options.columns >= width {
        bail!("cannot remove {} columns from an image {} wide", options.columns, width);
    }
    if options.rows >= height {
        bail!("cannot remove {} rows from an image {} high", options.rows, height);
    }

    info!(width, height, columns = options.columns, rows = options.rows, "carving");
    for _ in 0..options.columns {
        let seam = carver.find_vertical_seam();
        carver.remove_vertical_seam(&seam)?;
    }
    for _ in 0..options.rows {
        let seam = carver.find_horizontal_seam();
        carver.remove_horizontal_seam(&seam)?;
    }
    info!(width = carver.width(), height = carver.height(), "carved");

    let written = if options.energy {
        carver.energy_picture().save(&options.output)
    } else {
        carver.picture().save(&options.output)
    };
    written.with_context(|| format!("cannot write {}", options.output.display()))
}

fn main() -> Result<()> {
    let (options, level) = parse_args()?;
    setup_logging(level);
    if options.columns == 0 && options.rows == 0 && !options.energy {
        warn!("nothing to remove; the image will be copied unchanged");
    }
    carve(&options)
}
