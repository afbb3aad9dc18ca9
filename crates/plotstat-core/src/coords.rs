//! Per-kind coordinates of a flattened sample.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate of one flattened sample, in the item's native axes.
///
/// The variant always matches the kind of the item the sample came from:
/// a curve sample sits at a single x position, an image sample at a raster
/// pixel, a scatter sample at an (x, y) point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Coords {
    /// x position of a curve sample
    Curve(f64),

    /// Pixel position of an image sample
    Image { row: usize, col: usize },

    /// Point position of a scatter sample
    Scatter { x: f64, y: f64 },
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coords::Curve(x) => write!(f, "[{}]", x),
            Coords::Image { row, col } => write!(f, "({}, {})", row, col),
            Coords::Scatter { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
