#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use matcalc_cli::reader::read_operands;

fuzz_target!(|data: &[u8]| {
    // The reader must reject malformed input with an error, never panic.
    // Cap the input so huge declared dimensions cannot allocate unbounded
    // buffers during fuzzing.
    if data.len() > 4096 {
        return;
    }
    let _ = read_operands(Cursor::new(data));
});
