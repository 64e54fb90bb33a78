use clap::{Arg, Command};

pub use mafnorm_core::consts::CONVERT_CMD;

pub fn create_convert_cli() -> Command {
    Command::new(CONVERT_CMD)
        .about("Convert a directory of MAF-derived .bed files into deduplicated single-alt variant records.")
        .long_about(
            "Convert every file ending in .bed under the input directory by removing \
            duplicated variants, splitting the REF ALT1 ALT2 columns into REF ALT AL1 AL2, \
            and removing from REF and ALT equal sequences of nucleotides preceding the \
            variant. Files that don't match the pattern are copied as-is into the output \
            directory, which is recreated on every run.",
        )
        .arg(
            Arg::new("input")
                .required(true)
                .help("Path to the directory containing the files to process"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .help("Output directory path"),
        )
}
