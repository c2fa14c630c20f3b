//! HTML preview generation.
//!
//! [`build`] turns a pixel grid into a table with one cell per LED, each
//! cell holding a dark outer box and a lit inner box sized by a resolved
//! [`CellGeometry`]. Rows are emitted top to bottom and cells left to
//! right, so the table reads the same way the image does.
//!
//! A pixel grid whose size differs from the declared LED grid is not an
//! error here: the builder returns a placeholder document describing the
//! mismatch so the caller always has something to display.

mod html;

pub use html::{BODY_STYLE, CELL_STYLE, TABLE_STYLE};

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::CellGeometry;
use crate::pixels::{GridSpec, PixelGrid};

/// Shape of the lit element inside each cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LedStyle {
    /// Square LEDs filling the inner box.
    #[default]
    Square,
    /// Fully rounded corners, approximating circular LEDs.
    Round,
}

/// Presentation options for [`build`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: LedStyle,
    /// CSS pixels per geometry unit.
    pub scale: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: LedStyle::Square,
            scale: 1,
        }
    }
}

/// The pixel grid does not have one pixel per LED.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("image is {image_width}x{image_height} pixels but the board has {grid} LEDs")]
pub struct DimensionMismatch {
    pub grid: GridSpec,
    pub image_width: u32,
    pub image_height: u32,
}

/// A complete, self-contained HTML document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupDocument(String);

impl MarkupDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for MarkupDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkupDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks that `pixels` has exactly one pixel per LED of `grid`.
pub fn check_dimensions(
    grid: GridSpec,
    pixels: &impl PixelGrid,
) -> Result<(), DimensionMismatch> {
    if grid.matches(pixels) {
        Ok(())
    } else {
        Err(DimensionMismatch {
            grid,
            image_width: pixels.width(),
            image_height: pixels.height(),
        })
    }
}

/// Builds the preview document for `pixels` laid out on `grid`.
///
/// Pure and deterministic: identical inputs produce identical bytes.
pub fn build(
    grid: GridSpec,
    geometry: &CellGeometry,
    pixels: &impl PixelGrid,
    options: &RenderOptions,
) -> MarkupDocument {
    if let Err(mismatch) = check_dimensions(grid, pixels) {
        warn!("rendering placeholder: {}", mismatch);
        let message = format!("Invalid image: {}", mismatch);
        return MarkupDocument(html::document(&html::placeholder(&message)));
    }

    let cell = html::LedCell::new(geometry, options);
    let row_len = cell.byte_len() * grid.columns() as usize + "<tr></tr>".len();
    let mut rows = String::with_capacity(row_len * grid.rows() as usize);

    for row in 0..grid.rows() {
        rows.push_str("<tr>");
        for col in 0..grid.columns() {
            cell.push(&mut rows, pixels.pixel_at(col, row));
        }
        rows.push_str("</tr>");
    }

    debug!(
        "built {} preview ({} bytes of rows, {:?})",
        grid,
        rows.len(),
        options.style
    );
    MarkupDocument(html::document(&html::table(&rows)))
}
