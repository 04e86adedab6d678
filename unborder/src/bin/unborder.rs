use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, Context};
use unborder::batch;
use unborder_common::{
    bin_common::{
        init::{init_eyre, init_logger},
        termination,
    },
    borders::BorderConf,
};

#[derive(Parser, Debug)]
#[command()]
/// Crops away the black or white borders of all jpeg and png images in a directory.
///
/// The results are saved next to the originals with the prefix `processed_`. Images that
/// are nothing but border are left alone.
///
/// This uses rayon, so the `RAYON_NUM_THREADS` environment variable might be of interest.
struct Cli {
    /// The directory with the images, subdirectories are not visited
    dir: PathBuf,
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = Cli::parse();
    init_logger()?;

    let term_cookie =
        termination::Cookie::new().wrap_err("failed to create term cookie")?;

    let summary = batch::process_dir(&cli.dir, &BorderConf::default(), || {
        term_cookie.is_terminating()
    })
    .wrap_err("failed to process the directory")?;

    if term_cookie.is_terminating() {
        log::warn!("Stopped by a termination signal");
    }
    summary.log_report();

    Ok(())
}
