//! Uniform statistic context resolved from one plot item.

use crate::coords::Coords;
use crate::item::{ItemData, ItemKind, PlotItem};

/// Flat view of one item's samples, uniform across kinds.
///
/// Every statistic runs against a `StatContext` rather than raw item data, so
/// a statistic written once works for curves, images and scatters alike. The
/// context pairs a flattened value array with a per-kind coordinate lookup:
///
/// - curve: values are `y`, `coords_of(i)` is `x[i]`
/// - image: values are the raster flattened row-major, `coords_of(i)` is the
///   `(i / ncols, i % ncols)` pixel
/// - scatter: values are the weights, `coords_of(i)` is `(x[i], y[i])`
///
/// A context is a pure snapshot of one data version of one item: it is rebuilt
/// whenever the item's arrays are replaced and never shared across items.
#[derive(Clone, Debug)]
pub struct StatContext {
    values: Vec<f64>,
    axes: Axes,
}

#[derive(Clone, Debug)]
enum Axes {
    Curve { x: Vec<f64> },
    Image { ncols: usize },
    Scatter { x: Vec<f64>, y: Vec<f64> },
}

impl StatContext {
    /// Resolve the context for an item's current data
    pub fn resolve(item: &PlotItem) -> Self {
        match item.data() {
            ItemData::Curve { x, y } => Self {
                values: y.clone(),
                axes: Axes::Curve { x: x.clone() },
            },
            ItemData::Image(values) => Self {
                values: values.iter().copied().collect(),
                axes: Axes::Image {
                    ncols: values.ncols(),
                },
            },
            ItemData::Scatter { x, y, values } => Self {
                values: values.clone(),
                axes: Axes::Scatter {
                    x: x.clone(),
                    y: y.clone(),
                },
            },
        }
    }

    /// Kind of the item this context was resolved from
    pub fn kind(&self) -> ItemKind {
        match self.axes {
            Axes::Curve { .. } => ItemKind::Curve,
            Axes::Image { .. } => ItemKind::Image,
            Axes::Scatter { .. } => ItemKind::Scatter,
        }
    }

    /// Flattened sample values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of flattened samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the context holds no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coordinate of the flattened sample at `index`.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn coords_of(&self, index: usize) -> Option<Coords> {
        if index >= self.values.len() {
            return None;
        }
        Some(match &self.axes {
            Axes::Curve { x } => Coords::Curve(x[index]),
            Axes::Image { ncols } => Coords::Image {
                row: index / ncols,
                col: index % ncols,
            },
            Axes::Scatter { x, y } => Coords::Scatter {
                x: x[index],
                y: y[index],
            },
        })
    }

    /// x axis of the samples, for kinds that have one (curve and scatter)
    pub fn axis_x(&self) -> Option<&[f64]> {
        match &self.axes {
            Axes::Curve { x } => Some(x),
            Axes::Scatter { x, .. } => Some(x),
            Axes::Image { .. } => None,
        }
    }

    /// y axis of the samples (scatter only)
    pub fn axis_y(&self) -> Option<&[f64]> {
        match &self.axes {
            Axes::Scatter { y, .. } => Some(y),
            _ => None,
        }
    }
}
