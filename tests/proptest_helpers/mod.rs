#![allow(dead_code)]

use marquee::pixels::{PixelBuffer, Rgb};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Slack for comparisons that should hold exactly in real arithmetic.
pub const EPS_FLOAT: f64 = 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_rgb() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

/// A buffer between 1x1 and `max_w` x `max_h`.
pub fn arb_pixel_buffer(max_w: u32, max_h: u32) -> impl Strategy<Value = PixelBuffer> {
    (1..=max_w, 1..=max_h).prop_flat_map(|(w, h)| {
        prop::collection::vec(arb_rgb(), (w * h) as usize)
            .prop_map(move |pixels| PixelBuffer::new(w, h, pixels).expect("sized buffer"))
    })
}

/// A physical board with the LED at least as wide as any margin.
///
/// Gaps are whole multiples of 0.1 so the margins share a measurable unit.
pub fn arb_physical_board() -> impl Strategy<Value = (f64, f64, f64)> {
    (2.5f64..20.0, 0u32..=40, 0u32..=40).prop_map(|(led, gap_h, gap_v)| {
        (
            led,
            led + f64::from(gap_h) * 0.1,
            led + f64::from(gap_v) * 0.1,
        )
    })
}
