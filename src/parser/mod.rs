//! Opening FASTQ inputs, compressed or not.
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

#[cfg(feature = "compression")]
use bzip2::read::BzDecoder;
#[cfg(feature = "compression")]
use flate2::read::MultiGzDecoder;
#[cfg(feature = "compression")]
use xz2::read::XzDecoder;

use crate::errors::ParseError;

mod fastq;

pub use crate::parser::fastq::{FastqRecord, Reader as FastqReader};

#[cfg(feature = "compression")]
fn decoder<'a, R: 'a + Read + Send>(magic: &[u8], stream: R) -> Box<dyn Read + Send + 'a> {
    match magic {
        [0x1F, 0x8B] => Box::new(MultiGzDecoder::new(stream)),
        [0x42, 0x5A] => Box::new(BzDecoder::new(stream)),
        [0xFD, 0x37] => Box::new(XzDecoder::new(stream)),
        _ => Box::new(stream),
    }
}

#[cfg(not(feature = "compression"))]
fn decoder<'a, R: 'a + Read + Send>(_magic: &[u8], stream: R) -> Box<dyn Read + Send + 'a> {
    Box::new(stream)
}

/// Wraps any reader into a FASTQ reader.
/// gzip, bz and xz streams are recognised from their first two bytes and decoded
/// when the `compression` feature is enabled.
pub fn parse_fastq_reader<'a, R: 'a + Read + Send>(
    mut reader: R,
) -> Result<FastqReader<Box<dyn Read + Send + 'a>>, ParseError> {
    let mut magic = Vec::with_capacity(2);
    (&mut reader).take(2).read_to_end(&mut magic)?;
    // Put the sniffed bytes back in front of the stream
    let stream = Cursor::new(magic.clone()).chain(reader);
    Ok(FastqReader::new(decoder(&magic, stream)))
}

/// Opens the file at `path` and returns an iterator over its FASTQ records.
pub fn parse_fastq_file<P: AsRef<Path>>(
    path: P,
) -> Result<FastqReader<Box<dyn Read + Send>>, ParseError> {
    let f = File::open(&path)?;
    parse_fastq_reader(f)
}
