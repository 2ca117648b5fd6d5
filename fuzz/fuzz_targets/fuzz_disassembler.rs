//! Fuzz target for the disassembler.
//!
//! This target loads arbitrary bytes into memory and disassembles an
//! arbitrary range to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{disassemble, FlatMemory};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    load_address: u16,
    start: u16,
    length: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(input.load_address, &input.bytes);

    let lines = disassemble(&memory, input.start, input.length);

    let end = input.start as u32 + input.length as u32;
    let mut previous: Option<u16> = None;

    for (address, line) in &lines {
        // Every line starts inside the requested range
        assert!(*address as u32 >= input.start as u32);
        assert!((*address as u32) < end);

        // Addresses strictly increase
        if let Some(prev) = previous {
            assert!(*address > prev);
            assert!(*address - prev <= 3);
        }
        previous = Some(*address);

        let prefix = format!("${:04X}: ", address);
        assert!(line.starts_with(&prefix));
        assert!(line.ends_with('}'));
    }
});
