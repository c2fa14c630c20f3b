//! Fuzz target for geometry resolution.
//!
//! This fuzzer feeds arbitrary LED size and pitch triples to the resolver,
//! checking for panics or hangs and that every accepted geometry keeps its
//! outer dimensions consistent.

#![no_main]

use libfuzzer_sys::fuzz_target;
use marquee::geometry::resolve;

fuzz_target!(|data: (f64, f64, f64)| {
    let (led_size, pitch_h, pitch_v) = data;

    if let Ok(cell) = resolve(led_size, pitch_h, pitch_v) {
        assert!(cell.inner_size > 0);
        assert_eq!(cell.outer_width, cell.inner_size + 2 * cell.margin_h);
        assert_eq!(cell.outer_height, cell.inner_size + 2 * cell.margin_v);
    }
});
