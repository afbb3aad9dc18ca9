//! Plot items: named datasets of curve, image, or scatter shape.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ItemError, ItemResult};

/// Structural shape of a dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// 1D curve with x/y sample pairs
    Curve,

    /// 2D raster of values
    Image,

    /// Irregular point cloud with a value per point
    Scatter,
}

impl ItemKind {
    /// Get a human-readable display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::Curve => "curve",
            ItemKind::Image => "image",
            ItemKind::Scatter => "scatter",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raw sample arrays of one item
///
/// Constructors validate that the arrays of one item agree in length, so a
/// stored `ItemData` is always internally consistent. Zero-length arrays are
/// valid; statistics over them come out undefined rather than failing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ItemData {
    /// x/y sample pairs
    Curve { x: Vec<f64>, y: Vec<f64> },

    /// Raster values, row-major
    Image(Array2<f64>),

    /// Point positions with one weight value per point
    Scatter {
        x: Vec<f64>,
        y: Vec<f64>,
        values: Vec<f64>,
    },
}

impl ItemData {
    /// Create curve data, checking that x and y agree in length
    pub fn curve(x: Vec<f64>, y: Vec<f64>) -> ItemResult<Self> {
        if x.len() != y.len() {
            return Err(ItemError::CurveLengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(ItemData::Curve { x, y })
    }

    /// Create image data from a row-major raster
    pub fn image(values: Array2<f64>) -> Self {
        ItemData::Image(values)
    }

    /// Create scatter data, checking that all three arrays agree in length
    pub fn scatter(x: Vec<f64>, y: Vec<f64>, values: Vec<f64>) -> ItemResult<Self> {
        if x.len() != y.len() || x.len() != values.len() {
            return Err(ItemError::ScatterLengthMismatch {
                x: x.len(),
                y: y.len(),
                values: values.len(),
            });
        }
        Ok(ItemData::Scatter { x, y, values })
    }

    /// The structural kind of this data
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemData::Curve { .. } => ItemKind::Curve,
            ItemData::Image(_) => ItemKind::Image,
            ItemData::Scatter { .. } => ItemKind::Scatter,
        }
    }

    /// Number of samples (pixels for an image)
    pub fn len(&self) -> usize {
        match self {
            ItemData::Curve { y, .. } => y.len(),
            ItemData::Image(values) => values.len(),
            ItemData::Scatter { values, .. } => values.len(),
        }
    }

    /// Check whether there are no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identity of an item: legend plus kind.
///
/// A scene may hold a curve and an image under the same legend; the pair is
/// what uniquely names an item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId {
    pub legend: String,
    pub kind: ItemKind,
}

impl ItemId {
    pub fn new(legend: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            legend: legend.into(),
            kind,
        }
    }
}

/// A named dataset tracked by a scene.
///
/// The `version` counter is bumped every time the sample arrays are replaced;
/// consumers use it to know when a cached view of the data has gone stale.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlotItem {
    legend: String,
    data: ItemData,
    version: u64,
}

impl PlotItem {
    /// Create a new item
    pub fn new(legend: impl Into<String>, data: ItemData) -> Self {
        Self {
            legend: legend.into(),
            data,
            version: 0,
        }
    }

    pub fn legend(&self) -> &str {
        &self.legend
    }

    pub fn kind(&self) -> ItemKind {
        self.data.kind()
    }

    pub fn id(&self) -> ItemId {
        ItemId::new(self.legend.clone(), self.kind())
    }

    pub fn data(&self) -> &ItemData {
        &self.data
    }

    /// Data-version token, bumped on every `set_data`
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the sample arrays in place.
    ///
    /// The new data must be of the same kind, otherwise the item's identity
    /// would silently change under consumers indexing by `(legend, kind)`.
    pub fn set_data(&mut self, data: ItemData) -> ItemResult<()> {
        if data.kind() != self.kind() {
            return Err(ItemError::KindMismatch {
                expected: self.kind(),
                actual: data.kind(),
            });
        }
        self.data = data;
        self.version += 1;
        Ok(())
    }
}
