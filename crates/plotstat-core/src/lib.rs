//! plotstat-core - Plot item model for live plot statistics
//!
//! This crate provides the data layer shared by every plotstat consumer:
//!
//! - **PlotItem**: a named dataset of one of three kinds (curve, image, scatter)
//! - **StatContext**: the uniform flat view of one item's samples, used as the
//!   input to every statistic
//! - **PlotScene**: an in-memory item collection that queues change events for
//!   downstream consumers
//!
//! # Item kinds
//!
//! All statistics operate on a flattened value array plus a per-kind coordinate
//! lookup:
//!
//! - **Curve**: values are `y`, the coordinate of sample `i` is `x[i]`
//! - **Image**: values are the raster flattened row-major, the coordinate is
//!   the `(row, col)` pixel
//! - **Scatter**: values are the weights, the coordinate is the `(x, y)` point

pub mod context;
pub mod coords;
pub mod error;
pub mod item;
pub mod scene;
pub mod source;

pub use context::StatContext;
pub use coords::Coords;
pub use error::{ItemError, ItemResult};
pub use item::{ItemData, ItemId, ItemKind, PlotItem};
pub use scene::PlotScene;
pub use source::{ItemSource, PlotEvent};
