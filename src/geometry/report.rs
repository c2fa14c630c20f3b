//! Human- and machine-readable summary of a resolved geometry.

use std::fmt;

use serde::Serialize;

use super::{CellGeometry, PhysicalSpec};

/// A physical specification paired with the geometry it resolves to.
#[derive(Clone, Debug, Serialize)]
pub struct GeometryReport {
    pub physical: PhysicalSpec,
    pub cell: CellGeometry,
}

impl GeometryReport {
    /// Creates a report for an already-resolved geometry.
    pub fn new(physical: PhysicalSpec, cell: CellGeometry) -> Self {
        Self { physical, cell }
    }
}

impl fmt::Display for GeometryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.physical;
        let c = &self.cell;

        writeln!(f, "Physical board")?;
        writeln!(f, "  LED size:        {}", p.led_size())?;
        writeln!(f, "  Pitch (h x v):   {} x {}", p.pitch_h(), p.pitch_v())?;
        writeln!(f, "  Margin (h x v):  {} x {}", p.border_h(), p.border_v())?;
        writeln!(f)?;
        writeln!(f, "Cell geometry (1 unit = {})", c.unit)?;
        writeln!(f, "  LED:             {0} x {0} units", c.inner_size)?;
        writeln!(
            f,
            "  Cell:            {} x {} units",
            c.outer_width, c.outer_height
        )?;
        writeln!(
            f,
            "  Margin (h x v):  {} x {} units",
            c.margin_h, c.margin_v
        )?;
        Ok(())
    }
}
