//! HTML fragments for the preview document.
//!
//! Every dynamic value written here is either an integer or a `#rrggbb`
//! color, so nothing needs escaping.

use crate::geometry::CellGeometry;
use crate::pixels::Rgb;

use super::{LedStyle, RenderOptions};

/// Style for the outer table: no gaps between cells.
pub const TABLE_STYLE: &str =
    "margin: 0; padding: 0; vertical-align: middle; border-spacing: 0; border-collapse: collapse;";

/// Style for each table cell: the unlit board is black.
pub const CELL_STYLE: &str =
    "background-color: black; margin: 0; padding: 0; vertical-align: middle;";

/// Style for the document body.
pub const BODY_STYLE: &str = "margin: 0; background-color: black;";

/// Wraps content in a minimal, self-contained HTML envelope.
pub fn document(content: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Marquee preview</title></head>\
         <body style=\"{BODY_STYLE}\">{content}</body></html>"
    )
}

/// Wraps rows in the board table.
pub fn table(rows: &str) -> String {
    format!("<table style=\"{TABLE_STYLE}\">{rows}</table>")
}

/// A paragraph shown in place of the board.
pub fn placeholder(message: &str) -> String {
    format!("<p style=\"color: white;\">{message}</p>")
}

/// Pre-rendered markup for one LED cell, split around the fill color.
///
/// Only the color varies between cells, so the surrounding markup is
/// formatted once per document.
pub struct LedCell {
    head: String,
    tail: String,
}

impl LedCell {
    pub fn new(geometry: &CellGeometry, options: &RenderOptions) -> Self {
        let scale = options.scale;
        let outer_width = geometry.outer_width.saturating_mul(scale);
        let outer_height = geometry.outer_height.saturating_mul(scale);
        let inner = geometry.inner_size.saturating_mul(scale);
        let margin_h = geometry.margin_h.saturating_mul(scale);
        let margin_v = geometry.margin_v.saturating_mul(scale);
        let radius = match options.style {
            LedStyle::Square => "",
            LedStyle::Round => " border-radius: 50%;",
        };

        let head = format!(
            "<td style=\"{CELL_STYLE}\">\
             <div style=\"width: {outer_width}px; height: {outer_height}px; overflow: hidden;\">\
             <div style=\"margin: {margin_v}px {margin_h}px; width: {inner}px; height: {inner}px; background-color: "
        );
        let tail = format!(";{radius}\"></div></div></td>");

        Self { head, tail }
    }

    /// Appends one cell lit with `color` to `out`.
    #[inline]
    pub fn push(&self, out: &mut String, color: Rgb) {
        out.push_str(&self.head);
        out.push_str(&color.to_string());
        out.push_str(&self.tail);
    }

    /// Length in bytes of one rendered cell.
    pub fn byte_len(&self) -> usize {
        // "#rrggbb"
        self.head.len() + 7 + self.tail.len()
    }
}
