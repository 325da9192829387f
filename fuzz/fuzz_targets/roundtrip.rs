#![no_main]

use block_glyphs::fuzz::{FuzzCase, harness};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| { harness(data) });
