#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use codes::AccessNames;
use descriptor::{AceEntry, NoResolver};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    entry: &'a str,
    service: bool,
}

fuzz_target!(|input: Input<'_>| {
    let names = if input.service {
        AccessNames::Service
    } else {
        AccessNames::Generic
    };
    let _ = AceEntry::parse(input.entry, names, &NoResolver);
});
