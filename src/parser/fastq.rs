//! Line-oriented FASTQ reader.
//!
//! Records may wrap their sequence and quality over several lines. Sequence
//! lines run until the `+` line; quality lines run until they cover the
//! sequence, so a quality line starting with `@` is only taken as the next
//! header once the quality is complete. Trailing whitespace is stripped from
//! every line and anything before the first `@` line is skipped.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::errors::{ErrorPosition, ParseError};

const BUFSIZE: usize = 64 * 1024;

/// One FASTQ record with its sequence and quality lines joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: Vec<u8>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

#[inline]
fn trim_end(line: &[u8]) -> &[u8] {
    match line.iter().rposition(|b| !b.is_ascii_whitespace()) {
        Some(last) => &line[..=last],
        None => &[],
    }
}

/// Parser for FASTQ data.
/// Does not handle decompression; [`parse_fastq_file`](../fn.parse_fastq_file.html)
/// does.
pub struct Reader<R: io::Read> {
    buf_reader: buffer_redux::BufReader<R>,
    // Last line read, with its line ending
    line: Vec<u8>,
    line_number: u64,
    started: bool,
    // `line` holds the header of the next record
    pending: bool,
    finished: bool,
}

impl<R: io::Read> Reader<R> {
    /// Creates a new reader with a 64 KiB buffer
    ///
    /// # Example:
    ///
    /// ```
    /// use fq2fasta::parser::FastqReader;
    /// let fastq = b"@id\nACGT\n+\nIIII";
    ///
    /// let mut reader = FastqReader::new(&fastq[..]);
    /// let record = reader.next().unwrap().unwrap();
    /// assert_eq!(record.seq, b"ACGT")
    /// ```
    pub fn new(reader: R) -> Self {
        Self {
            buf_reader: buffer_redux::BufReader::with_capacity(BUFSIZE, reader),
            line: Vec::new(),
            line_number: 0,
            started: false,
            pending: false,
            finished: false,
        }
    }

    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        if self.buf_reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }

    fn error_pos(&self, id: &[u8]) -> ErrorPosition {
        let id = id.split(|b| *b == b' ').next().unwrap_or_default();
        ErrorPosition {
            line: self.line_number,
            id: Some(String::from_utf8_lossy(id).into()),
        }
    }

    /// Moves to the first header line. Returns false if there is none.
    fn skip_preamble(&mut self) -> io::Result<bool> {
        while self.read_line()? {
            if self.line.first() == Some(&b'@') {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn read_record(&mut self) -> Result<Option<FastqRecord>, ParseError> {
        if !self.started {
            self.started = true;
            self.pending = self.skip_preamble()?;
        }
        if !self.pending {
            return Ok(None);
        }
        self.pending = false;

        // `line` is a header here: both the preamble skip and the quality loop stop on `@`
        let id = trim_end(&self.line[1..]).to_vec();

        let mut seq = Vec::new();
        loop {
            if !self.read_line()? {
                return Err(ParseError::new_unexpected_end(self.error_pos(&id)));
            }
            if self.line.first() == Some(&b'+') {
                break;
            }
            seq.extend_from_slice(trim_end(&self.line));
        }

        let sep_title = trim_end(&self.line[1..]);
        if !sep_title.is_empty() && sep_title != id.as_slice() {
            return Err(ParseError::new_mismatched_titles(
                &id,
                sep_title,
                self.error_pos(&id),
            ));
        }
        if let Some(&b) = seq.iter().find(|b| **b == b' ' || **b == b'\t') {
            return Err(ParseError::new_invalid_sequence(b, self.error_pos(&id)));
        }

        let mut qual = Vec::new();
        let mut qual_lines = 0;
        while self.read_line()? {
            if self.line.first() == Some(&b'@') && qual.len() >= seq.len() {
                self.pending = true;
                break;
            }
            qual_lines += 1;
            qual.extend_from_slice(trim_end(&self.line));
        }
        if qual_lines == 0 && !self.pending {
            return Err(ParseError::new_unexpected_end(self.error_pos(&id)));
        }
        if qual.len() != seq.len() {
            return Err(ParseError::new_unequal_length(
                seq.len(),
                qual.len(),
                self.error_pos(&id),
            ));
        }
        if let Some(&q) = qual.iter().find(|q| !(b'!'..=b'~').contains(*q)) {
            return Err(ParseError::new_invalid_quality(q, self.error_pos(&id)));
        }

        Ok(Some(FastqRecord { id, seq, qual }))
    }
}

impl Reader<File> {
    /// Creates a reader over an uncompressed file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        File::open(path).map(Self::new)
    }
}

impl<R: io::Read> Iterator for Reader<R> {
    type Item = Result<FastqRecord, ParseError>;

    /// Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
