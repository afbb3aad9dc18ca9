//! plotstat-stats - Descriptive statistics over live plot items
//!
//! This crate computes a configurable set of descriptive statistics (min, max,
//! coordinates of the extrema, mean, standard deviation, center of mass, ...)
//! over the items of a plot scene and keeps the results synchronized as items
//! are added, removed, or get their data replaced.
//!
//! # Key Components
//!
//! - [`Stat`]: the trait every statistic implements, with the built-in set in
//!   [`builtins`]
//! - [`StatsHandler`]: an ordered, explicit registry of active statistics
//! - [`StatsTable`]: one row per live item, kept consistent through scene
//!   change events
//!
//! # Example
//!
//! ```
//! use plotstat_core::PlotScene;
//! use plotstat_stats::{StatsHandler, StatsTable};
//!
//! let mut scene = PlotScene::new();
//! scene.add_curve("curve0", (0..20).map(f64::from).collect(),
//!                 (0..20).map(f64::from).collect()).unwrap();
//!
//! let mut table = StatsTable::new(StatsHandler::basics());
//! table.process_events(&mut scene);
//!
//! assert_eq!(table.row_count(), 1);
//! ```

pub mod builtins;
pub mod handler;
pub mod stat;
pub mod table;

pub use builtins::{
    StatCom, StatCoordMax, StatCoordMin, StatDelta, StatMax, StatMean, StatMin, StatStd,
};
pub use handler::StatsHandler;
pub use stat::{FnStat, Stat, StatValue, StatsError, StatsResult, ALL_KINDS};
pub use table::{evaluate, StatRow, StatsTable};
