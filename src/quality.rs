//! The rough quality heuristic used to annotate consensus sequences.
//!
//! A consensus caller writes uncertain positions as `N`, lowercase letters or
//! IUPAC ambiguity codes, so anything that is not an uppercase `A`, `C`, `G` or
//! `T` is counted as a low quality position.

/// Number of uppercase `A`, `C`, `G` and `T` bytes in `seq`.
pub fn good_bases(seq: &[u8]) -> usize {
    bytecount::count(seq, b'A')
        + bytecount::count(seq, b'C')
        + bytecount::count(seq, b'T')
        + bytecount::count(seq, b'G')
}

/// Number of positions in `seq` that are not an uppercase `A`, `C`, `G` or `T`.
#[inline]
pub fn rough_quality(seq: &[u8]) -> usize {
    seq.len() - good_bases(seq)
}

/// The FASTA description attached to every converted record.
pub fn quality_description(seq: &[u8]) -> String {
    format!("Low Quality Positions: {}", rough_quality(seq))
}
