//! Turns a directory of consensus FASTQ files into one annotated FASTA file.
//!
//! Every record of `<sample>.fq` is renamed to `<sample>` and described with its
//! count of low quality positions. All inputs are parsed before the output is
//! opened, so a malformed file aborts the run without touching the output.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::ConvertError;
use crate::parser::parse_fastq_file;
use crate::sequence_record::{SequenceRecord, DEFAULT_LINE_WIDTH};

/// Extension of the consensus files picked up from the input directory.
pub const FASTQ_EXTENSION: &str = ".fq";

/// Lists the `.fq` files directly inside `dir`, in the order the filesystem
/// returns them. Hidden files and anything that is not a regular file are
/// skipped. A missing directory gives an empty list.
pub fn discover_fastq_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, ConvertError> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Input directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => continue,
        };
        if !name.ends_with(FASTQ_EXTENSION) || name.starts_with('.') {
            continue;
        }
        if !path.is_file() {
            debug!("Skipping {}: not a regular file", path.display());
            continue;
        }
        paths.push(path);
    }

    if paths.is_empty() {
        warn!("No {} files found in {}", FASTQ_EXTENSION, dir.display());
    }
    Ok(paths)
}

/// The identifier given to every record of `path`: its file name without the
/// directory and without the trailing `.fq`.
pub fn sample_basename<P: AsRef<Path>>(path: P) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(FASTQ_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Parses one FASTQ file and appends an annotated record for each of its
/// records to `records`. Returns how many were added.
pub fn read_sample<P: AsRef<Path>>(
    path: P,
    records: &mut Vec<SequenceRecord>,
) -> Result<usize, ConvertError> {
    let path = path.as_ref();
    let parse_error = |source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let basename = sample_basename(path);
    let reader = parse_fastq_file(path).map_err(parse_error)?;
    let mut n_records = 0;
    for record in reader {
        let record = record.map_err(parse_error)?;
        records.push(SequenceRecord::annotated(&basename, &record.seq));
        n_records += 1;
    }
    info!("Read {} record(s) from {}", n_records, path.display());
    Ok(n_records)
}

/// Reads every `.fq` file of `dir` into memory, file by file.
pub fn collect_records<P: AsRef<Path>>(dir: P) -> Result<Vec<SequenceRecord>, ConvertError> {
    let mut records = Vec::new();
    for path in discover_fastq_files(dir)? {
        read_sample(&path, &mut records)?;
    }
    Ok(records)
}

/// Writes `records` as FASTA to `writer`, wrapping sequences at `line_width`.
pub fn write_records<W: Write>(
    records: &[SequenceRecord],
    writer: &mut W,
    line_width: usize,
) -> io::Result<()> {
    for record in records {
        record.write_fasta(&mut *writer, line_width)?;
    }
    Ok(())
}

/// Converts all `.fq` files of `input_dir` into a single FASTA file at
/// `output_path`, creating or truncating it. Returns the number of records written.
///
/// # Example:
///
/// ```no_run
/// let n = fq2fasta::convert("consensus/", "submission.fasta").unwrap();
/// println!("{} records written", n);
/// ```
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_path: Q,
) -> Result<usize, ConvertError> {
    let records = collect_records(input_dir)?;

    let output_path = output_path.as_ref();
    let mut writer = BufWriter::new(File::create(output_path)?);
    write_records(&records, &mut writer, DEFAULT_LINE_WIDTH)?;
    writer.flush()?;

    info!("Wrote {} record(s) to {}", records.len(), output_path.display());
    Ok(records.len())
}
