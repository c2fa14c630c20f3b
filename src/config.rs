//! Board profiles.
//!
//! A profile bundles everything needed to preview an image on a given
//! board: LED counts, physical LED size and pitch, and presentation
//! options. Profiles are read from JSON or YAML; omitted fields fall back
//! to the reference board (128x32 LEDs, 2.5 size, 4 x 4 pitch).

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::MarqueeError;
use crate::geometry::PhysicalSpec;
use crate::markup::{LedStyle, RenderOptions};
use crate::pixels::GridSpec;

/// Largest accepted number of CSS pixels per geometry unit.
pub const MAX_SCALE: u32 = 100;

/// Complete description of a marquee board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardProfile {
    /// LEDs per row.
    pub columns: u32,
    /// LED rows.
    pub rows: u32,
    /// LED diameter, in any length unit.
    pub led_size: f64,
    /// Horizontal center-to-center spacing, same unit as `led_size`.
    pub pitch_h: f64,
    /// Vertical center-to-center spacing, same unit as `led_size`.
    pub pitch_v: f64,
    pub style: LedStyle,
    /// CSS pixels per geometry unit.
    pub scale: u32,
}

impl Default for BoardProfile {
    fn default() -> Self {
        Self {
            columns: 128,
            rows: 32,
            led_size: 2.5,
            pitch_h: 4.0,
            pitch_v: 4.0,
            style: LedStyle::Square,
            scale: 1,
        }
    }
}

impl BoardProfile {
    /// Loads a profile, choosing the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, MarqueeError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let profile = match ext.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?).map_err(|source| {
                MarqueeError::BoardJsonParse {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&fs::read_to_string(path)?)
                .map_err(|source| MarqueeError::BoardYamlParse {
                    path: path.to_path_buf(),
                    source,
                })?,
            _ => {
                return Err(MarqueeError::UnsupportedFormat(format!(
                    "board profile '{}' (supported: .json, .yaml, .yml)",
                    path.display()
                )));
            }
        };

        debug!("loaded board profile from {}: {:?}", path.display(), profile);
        Ok(profile)
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Validated physical LED dimensions.
    pub fn physical_spec(&self) -> Result<PhysicalSpec, MarqueeError> {
        Ok(PhysicalSpec::new(self.led_size, self.pitch_h, self.pitch_v)?)
    }

    /// Validated LED grid dimensions.
    pub fn grid_spec(&self) -> Result<GridSpec, MarqueeError> {
        GridSpec::new(self.columns, self.rows)
    }

    /// Validated presentation options.
    pub fn render_options(&self) -> Result<RenderOptions, MarqueeError> {
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(MarqueeError::InvalidScale(self.scale));
        }
        Ok(RenderOptions {
            style: self.style,
            scale: self.scale,
        })
    }
}
