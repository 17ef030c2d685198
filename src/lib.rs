#![crate_name = "fq2fasta"]
//! Combine a directory of consensus FASTQ files into one FASTA file where every
//! record is named after its sample and annotated with its count of low quality
//! positions.

pub mod convert;
pub mod errors;
pub mod parser;
pub mod quality;
pub mod sequence_record;

pub use convert::convert;
pub use errors::{ConvertError, ParseError, ParseErrorKind};
pub use parser::{parse_fastq_file, parse_fastq_reader, FastqReader, FastqRecord};
pub use sequence_record::SequenceRecord;
