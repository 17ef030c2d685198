#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate fq2fasta;

use std::io::Cursor;

use fq2fasta::parser::FastqReader;
use fq2fasta::quality::rough_quality;

fuzz_target!(|data: &[u8]| {
    let cursor = Cursor::new([b"@", data].concat());
    for record in FastqReader::new(cursor).flatten() {
        let _ = rough_quality(&record.seq);
    }
});
