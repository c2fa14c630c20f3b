#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes a PNG whose pixels are given row-major.
pub fn write_png(path: &Path, width: u32, height: u32, pixels: &[[u8; 3]]) {
    assert_eq!(pixels.len(), (width * height) as usize, "pixel count");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }

    let mut img = image::RgbImage::new(width, height);
    for (i, rgb) in pixels.iter().enumerate() {
        let col = i as u32 % width;
        let row = i as u32 / width;
        img.put_pixel(col, row, image::Rgb(*rgb));
    }
    img.save(path).expect("write png file");
}

/// Writes the two-pixel red/green strip used across the CLI tests.
pub fn write_red_green_strip(dir: &Path) -> PathBuf {
    let path = dir.join("strip.png");
    write_png(&path, 2, 1, &[[255, 0, 0], [0, 255, 0]]);
    path
}

/// Extracts `#rrggbb` colors in document order.
pub fn colors_in_order(html: &str) -> Vec<String> {
    html.match_indices('#')
        .map(|(i, _)| html[i..i + 7].to_string())
        .collect()
}
