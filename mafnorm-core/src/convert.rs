use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::errors::TransformError;
use crate::transform::{transform_line, SeenVariants};
use crate::utils::{copy_dir_recursive, is_bed_file};

///
/// Convert a directory of MAF-derived files into the normalized layout.
///
/// `.bed` files are streamed through the variant transformation line by
/// line and written under the same name into the output directory; every
/// other entry is copied as-is (files byte-for-byte, directories
/// recursively). The output directory is recreated fresh on every run.
///
/// # Arguments:
/// - input: directory holding the files to process
/// - output: directory the converted tree is written into
///
pub fn convert_directory(input: &Path, output: &Path) -> Result<()> {
    println!("reading contents of {:?}", input);
    println!("transformed files will be written into {:?}", output);

    let entries = fs::read_dir(input).with_context(|| {
        format!(
            "There was an error reading the specified input directory: {:?}",
            input
        )
    })?;

    // consume the listing before touching the output directory, so a bad
    // input path can't wipe existing output
    let mut to_transform: Vec<PathBuf> = Vec::new();
    let mut to_copy: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_bed_file(&path) {
            to_transform.push(path);
        } else {
            to_copy.push(path);
        }
    }

    println!("{} entries to copy into {:?}", to_copy.len(), output);
    println!("{} files to transform", to_transform.len());

    if output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!(
                "There was an error removing the stale output directory: {:?}",
                output
            )
        })?;
    }
    fs::create_dir_all(output).with_context(|| {
        format!(
            "There was an error creating the output directory: {:?}",
            output
        )
    })?;

    for path in &to_copy {
        let name = path
            .file_name()
            .with_context(|| format!("Entry has no file name: {:?}", path))?;
        let target = output.join(name);
        if path.is_dir() {
            copy_dir_recursive(path, &target)?;
        } else {
            fs::copy(path, &target)
                .with_context(|| format!("There was an error copying: {:?}", path))?;
        }
    }

    let pb = ProgressBar::new(to_transform.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files ({msg})")?
            .progress_chars("##-"),
    );

    for path in &to_transform {
        let name = path
            .file_name()
            .with_context(|| format!("Entry has no file name: {:?}", path))?;
        pb.set_message(name.to_string_lossy().to_string());
        transform_file(path, &output.join(name))?;
        pb.inc(1);
    }

    pb.finish_with_message("done");

    Ok(())
}

///
/// Transform one `.bed` file, writing retained variants in input order. A
/// fresh deduplication state lives exactly as long as this call. A
/// non-empty file from which nothing is retained aborts the run: that
/// means the whole file was filtered away or is malformed, and silently
/// leaving an empty output file would hide it.
///
pub fn transform_file(input: &Path, output: &Path) -> Result<()> {
    let file = File::open(input).with_context(|| format!("Couldn't open file: {:?}", input))?;
    let reader = BufReader::new(file);

    let out_file =
        File::create(output).with_context(|| format!("Couldn't create file: {:?}", output))?;
    let mut writer = BufWriter::new(out_file);

    let mut seen = SeenVariants::new();
    let mut input_lines: usize = 0;
    let mut retained: usize = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!("There was an error reading line {} of {:?}", index + 1, input)
        })?;
        input_lines += 1;

        let transformed = transform_line(&line, &mut seen)
            .with_context(|| format!("Failed to transform {:?} at line {}", input, index + 1))?;

        for out_line in transformed {
            writer.write_all(out_line.as_bytes())?;
            writer.write_all(b"\n")?;
            retained += 1;
        }
    }
    writer.flush()?;

    if input_lines > 0 && retained == 0 {
        return Err(TransformError::NoVariantsRetained(input.display().to_string()).into());
    }

    Ok(())
}
