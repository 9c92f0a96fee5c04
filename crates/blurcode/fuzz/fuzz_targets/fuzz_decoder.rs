#![no_main]

use arbitrary::Arbitrary;
use blurcode::blurhash_decode;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    code: &'a str,
    width: u8,
    height: u8,
    punch: f32,
}

fuzz_target!(|input: Input<'_>| {
    // The decoder should never panic, regardless of input
    let _ = blurhash_decode(
        input.code,
        input.width as usize,
        input.height as usize,
        input.punch,
    );
});
