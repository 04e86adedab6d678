use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, Context};
use image::{ImageFormat, Rgb};
use unborder_common::{
    bin_common::init::init_eyre,
    borders::Bounds,
    utils::imgutils::{filled, paint},
};

#[derive(Parser)]
#[command()]
/// Creates a png with a red square surrounded by a thick black border
struct Cli {
    /// Where to save the image
    #[arg(default_value = "test_image.png")]
    output: PathBuf,
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = Cli::parse();

    let mut img = filled(200, 200, 0, 0, 0);
    paint(&mut img, Bounds::new(50, 50, 150, 150), Rgb([255, 0, 0]));

    img.save_with_format(&cli.output, ImageFormat::Png)
        .wrap_err_with(|| format!("Could not save to {:?}", cli.output))?;
    println!("Wrote {}", cli.output.display());

    Ok(())
}
