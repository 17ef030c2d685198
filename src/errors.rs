//! Errors raised while reading consensus FASTQ files or writing the FASTA output.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Where in a FASTQ file a problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorPosition {
    /// 1-based line number (0 when unknown)
    pub line: u64,
    /// First word of the record header, if a header was read
    pub id: Option<String>,
}

impl fmt::Display for ErrorPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "record '{id}' at line {}", self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    Io,
    /// A `+` line repeating a title other than the header's
    InvalidSeparator,
    /// Space or tab inside the sequence
    InvalidSequence,
    /// Joined sequence and quality differ in length
    UnequalLengths,
    /// Quality byte outside of the Sanger range `!`..=`~`
    InvalidQuality,
    /// Input ended inside a record
    UnexpectedEnd,
}

/// A malformed FASTQ record, or an I/O failure while reading one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub msg: String,
    pub kind: ParseErrorKind,
    pub position: ErrorPosition,
}

fn escaped(byte: u8) -> String {
    (byte as char).escape_default().to_string()
}

impl ParseError {
    fn new(kind: ParseErrorKind, msg: String, position: ErrorPosition) -> Self {
        Self {
            msg,
            kind,
            position,
        }
    }

    pub fn new_mismatched_titles(header: &[u8], separator: &[u8], position: ErrorPosition) -> Self {
        let msg = format!(
            "Separator title '{}' does not match header title '{}'",
            String::from_utf8_lossy(separator),
            String::from_utf8_lossy(header)
        );
        Self::new(ParseErrorKind::InvalidSeparator, msg, position)
    }

    pub fn new_invalid_sequence(byte_found: u8, position: ErrorPosition) -> Self {
        let msg = format!("Whitespace '{}' inside the sequence", escaped(byte_found));
        Self::new(ParseErrorKind::InvalidSequence, msg, position)
    }

    pub fn new_unequal_length(seq_len: usize, qual_len: usize, position: ErrorPosition) -> Self {
        let msg = format!("Sequence length is {seq_len} but quality length is {qual_len}");
        Self::new(ParseErrorKind::UnequalLengths, msg, position)
    }

    pub fn new_invalid_quality(byte_found: u8, position: ErrorPosition) -> Self {
        let msg = format!("Invalid quality character '{}'", escaped(byte_found));
        Self::new(ParseErrorKind::InvalidQuality, msg, position)
    }

    pub fn new_unexpected_end(position: ErrorPosition) -> Self {
        let msg = String::from("Unexpected end of input");
        Self::new(ParseErrorKind::UnexpectedEnd, msg, position)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Io => write!(f, "I/O error: {}", self.msg),
            _ => write!(f, "{} ({})", self.msg, self.position),
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        Self::new(ParseErrorKind::Io, err.to_string(), ErrorPosition::default())
    }
}

impl StdError for ParseError {}

/// Everything that can abort a conversion run.
#[derive(Debug)]
pub enum ConvertError {
    /// Listing the input directory or writing the output failed
    Io(io::Error),
    /// An input file is not valid FASTQ
    Parse { path: PathBuf, source: ParseError },
}

impl From<io::Error> for ConvertError {
    fn from(e: io::Error) -> Self {
        ConvertError::Io(e)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(e) => write!(f, "I/O error: {}", e),
            ConvertError::Parse { path, source } => {
                write!(f, "Failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl StdError for ConvertError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConvertError::Io(e) => Some(e),
            ConvertError::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_position_display() {
        let pos = ErrorPosition {
            line: 5,
            id: Some("read1".to_string()),
        };
        assert_eq!(pos.to_string(), "record 'read1' at line 5");
        assert_eq!(ErrorPosition::default().to_string(), "line 0");
    }

    #[test]
    fn test_parse_error_display() {
        let e = ParseError::new_unequal_length(
            4,
            3,
            ErrorPosition {
                line: 4,
                id: Some("test".to_string()),
            },
        );
        assert_eq!(
            e.to_string(),
            "Sequence length is 4 but quality length is 3 (record 'test' at line 4)"
        );
        let e = ParseError::new_invalid_sequence(b'\t', ErrorPosition::default());
        assert_eq!(e.to_string(), "Whitespace '\\t' inside the sequence (line 0)");
    }

    #[test]
    fn test_convert_error_wraps_parse_error() {
        let e = ConvertError::Parse {
            path: PathBuf::from("dir/sample.fq"),
            source: ParseError::new_unexpected_end(ErrorPosition {
                line: 6,
                id: None,
            }),
        };
        assert_eq!(
            e.to_string(),
            "Failed to parse dir/sample.fq: Unexpected end of input (line 6)"
        );
        assert!(e.source().is_some());
    }
}
