#![no_main]

use libfuzzer_sys::fuzz_target;
use nbt_wire::primitive::{decode_twos_complement, read_uint};
use nbt_wire::SliceSource;

// Fuzz target: two's-complement assembly against the standard library.
//
// Takes 8 bytes of fuzz input and checks, for every width, that assembling
// the unsigned value and reinterpreting it matches `from_be_bytes`.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let b = &data[..8];

    let expect = [
        (1, i64::from(i8::from_be_bytes([b[0]]))),
        (2, i64::from(i16::from_be_bytes([b[0], b[1]]))),
        (4, i64::from(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))),
        (8, i64::from_be_bytes(b.try_into().unwrap())),
    ];

    for (width, expected) in expect {
        let raw = read_uint(&mut SliceSource::new(b), width).unwrap();
        assert_eq!(decode_twos_complement(width, raw), expected, "width {width}");
    }
});
