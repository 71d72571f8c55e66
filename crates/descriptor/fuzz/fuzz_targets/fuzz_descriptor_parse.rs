#![no_main]

use libfuzzer_sys::fuzz_target;

use descriptor::AccessDescriptor;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic; both outcomes are fine.
        let _ = AccessDescriptor::parse(input);
    }
});
