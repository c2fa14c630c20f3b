//! Fuzz target for board profile parsing and rendering.
//!
//! This fuzzer feeds arbitrary UTF-8 to the JSON and YAML profile parsers
//! and renders a small buffer with any profile that parses, checking for
//! panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use marquee::config::BoardProfile;
use marquee::pixels::{PixelBuffer, Rgb};

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let pixels = PixelBuffer::filled(4, 2, Rgb::new(255, 160, 0));
    for profile in [
        BoardProfile::from_json_str(text).ok(),
        BoardProfile::from_yaml_str(text).ok(),
    ]
    .into_iter()
    .flatten()
    {
        let _ = marquee::render(&profile, &pixels);
    }
});
