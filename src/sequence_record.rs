//! Owned FASTA records produced by the conversion, and the FASTA writer.
use std::io::{self, Write};

use crate::quality::quality_description;

/// Sequence characters per line in the FASTA output.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// A record ready to be written as FASTA: an identifier, the sequence as it
/// was read and a free-text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub seq: Vec<u8>,
    pub desc: String,
}

impl SequenceRecord {
    pub fn new(id: String, seq: Vec<u8>, desc: String) -> Self {
        SequenceRecord { id, seq, desc }
    }

    /// Builds a record whose description is the low quality position count of `seq`.
    pub fn annotated(id: &str, seq: &[u8]) -> Self {
        SequenceRecord::new(id.to_string(), seq.to_vec(), quality_description(seq))
    }

    /// Write this SequenceRecord to writer as FASTA, wrapping the sequence at
    /// `line_width` characters (0 writes it on a single line).
    pub fn write_fasta(&self, writer: &mut dyn Write, line_width: usize) -> io::Result<()> {
        write_fasta(
            self.id.as_bytes(),
            self.desc.as_bytes(),
            &self.seq,
            writer,
            line_width,
        )
    }
}

/// Write a FASTA record. The header is `>id desc`, or `>id` when `desc` is empty.
/// An empty sequence only produces the header line.
pub fn write_fasta(
    id: &[u8],
    desc: &[u8],
    seq: &[u8],
    writer: &mut dyn Write,
    line_width: usize,
) -> io::Result<()> {
    writer.write_all(b">")?;
    writer.write_all(id)?;
    if !desc.is_empty() {
        writer.write_all(b" ")?;
        writer.write_all(desc)?;
    }
    writer.write_all(b"\n")?;
    if line_width == 0 {
        if !seq.is_empty() {
            writer.write_all(seq)?;
            writer.write_all(b"\n")?;
        }
        return Ok(());
    }
    for line in seq.chunks(line_width) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn to_fasta(rec: &SequenceRecord, line_width: usize) -> String {
        let mut out = Vec::new();
        rec.write_fasta(&mut out, line_width).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_annotated_record() {
        let rec = SequenceRecord::annotated("sample1", b"ACGTN");
        assert_eq!(rec.id, "sample1");
        assert_eq!(rec.seq, b"ACGTN");
        assert_eq!(rec.desc, "Low Quality Positions: 1");
        assert_eq!(
            to_fasta(&rec, DEFAULT_LINE_WIDTH),
            ">sample1 Low Quality Positions: 1\nACGTN\n"
        );
    }

    #[test]
    fn test_wrapping() {
        let seq = "ACGT".repeat(40);
        let rec = SequenceRecord::annotated("long", seq.as_bytes());
        let out = to_fasta(&rec, DEFAULT_LINE_WIDTH);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ">long Low Quality Positions: 0");
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[3].len(), 40);
        assert_eq!(lines[1..].concat(), seq);
    }

    #[test]
    fn test_exact_multiple_of_width() {
        let rec = SequenceRecord::annotated("x", b"acgtac");
        assert_eq!(
            to_fasta(&rec, 3),
            ">x Low Quality Positions: 6\nacg\ntac\n"
        );
    }

    #[test]
    fn test_no_wrapping() {
        let seq = "N".repeat(100);
        let rec = SequenceRecord::annotated("flat", seq.as_bytes());
        assert_eq!(
            to_fasta(&rec, 0),
            format!(">flat Low Quality Positions: 100\n{}\n", seq)
        );
    }

    #[test]
    fn test_empty_sequence() {
        let rec = SequenceRecord::annotated("empty", b"");
        assert_eq!(to_fasta(&rec, DEFAULT_LINE_WIDTH), ">empty Low Quality Positions: 0\n");
        assert_eq!(to_fasta(&rec, 0), ">empty Low Quality Positions: 0\n");
    }

    #[test]
    fn test_header_without_description() {
        let mut out = Vec::new();
        write_fasta(b"id", b"", b"ACGT", &mut out, DEFAULT_LINE_WIDTH).unwrap();
        assert_eq!(out, b">id\nACGT\n");
    }
}
