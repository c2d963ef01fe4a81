use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use graphseam::{energy_to_image, Orientation, Picture, SeamCarver};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("graphseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::new("input")
                .help("The image to carve")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Where to write the result; the format follows the extension")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .help("Target width (defaults to the current width)")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("Target height (defaults to the current height)")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("highlight")
                .long("highlight")
                .help("Paint the next seam red instead of carving")
                .value_parser(["vertical", "horizontal"])
                .conflicts_with_all(["width", "height", "energy"]),
        )
        .arg(
            Arg::new("energy")
                .long("energy")
                .help("Write the energy map as a grayscale image instead of carving")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["width", "height"]),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let log_level = if matches.get_flag("debug") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let input = matches
        .get_one::<PathBuf>("input")
        .context("no input image given")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .context("no output path given")?;

    let image = image::open(input).with_context(|| format!("cannot read {}", input.display()))?;
    let picture = Picture::from_dynamic_image(&image)?;
    let (width, height) = picture.dimensions();
    tracing::info!("Loaded {}: {}x{}", input.display(), width, height);

    let mut carver = SeamCarver::new(&picture);

    if matches.get_flag("energy") {
        carver.log_energy_matrix()?;
        energy_to_image(&carver.energy_map()?)
            .save(output)
            .with_context(|| format!("cannot write {}", output.display()))?;
        tracing::info!("Wrote energy map to {}", output.display());
        return Ok(());
    }

    if let Some(direction) = matches.get_one::<String>("highlight") {
        let orientation = if direction == "vertical" {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let seam = carver.find_seam(orientation)?;
        carver.highlight_seam(&seam, orientation)?;
    } else {
        let new_width = matches.get_one::<u32>("width").copied().unwrap_or(width);
        let new_height = matches.get_one::<u32>("height").copied().unwrap_or(height);
        carver.carve(new_width, new_height)?;
    }

    let result = carver.into_picture();
    result
        .to_rgb_image()
        .save(output)
        .with_context(|| format!("cannot write {}", output.display()))?;
    tracing::info!(
        "Wrote {}: {}x{}",
        output.display(),
        result.width(),
        result.height()
    );
    Ok(())
}
