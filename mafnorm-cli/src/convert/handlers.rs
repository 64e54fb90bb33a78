use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use mafnorm_core::convert::convert_directory;

pub fn run_convert(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to the input directory is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output directory path is required.");

    convert_directory(Path::new(input), Path::new(output))?;

    Ok(())
}
