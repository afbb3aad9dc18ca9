//! The statistic trait, computed values, and statistic errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use plotstat_core::{Coords, ItemKind, StatContext};

/// All three item kinds, the default compatibility of a statistic
pub const ALL_KINDS: [ItemKind; 3] = [ItemKind::Curve, ItemKind::Image, ItemKind::Scatter];

/// Errors raised while computing statistics
#[derive(Error, Debug)]
pub enum StatsError {
    /// A statistic was invoked against an item kind it does not support
    #[error("statistic '{stat}' does not support {kind} items")]
    KindNotSupported { stat: String, kind: ItemKind },

    /// The item holds no (finite) samples; the cell value is undefined
    #[error("dataset holds no finite samples")]
    EmptyDataset,

    /// An event referenced an item the table does not track
    #[error("no tracked row for {kind} item '{legend}'")]
    UnknownIdentity { legend: String, kind: ItemKind },

    /// A user-registered statistic failed
    #[error("statistic computation failed: {0}")]
    ComputeFailed(String),
}

/// Result type alias for statistic operations
pub type StatsResult<T> = Result<T, StatsError>;

/// A computed statistic value.
///
/// `Undefined` is the sentinel for cells that could not be computed (empty
/// dataset, failed custom statistic); it is a value, not an error, so one bad
/// cell never blocks the rest of a row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StatValue {
    /// A plain scalar
    Scalar(f64),

    /// A coordinate in the item's native axes
    Coords(Coords),

    /// No value could be computed
    Undefined,
}

impl StatValue {
    /// The scalar payload, if any
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            StatValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// The coordinate payload, if any
    pub fn as_coords(&self) -> Option<Coords> {
        match self {
            StatValue::Coords(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, StatValue::Undefined)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Scalar(v) => write!(f, "{}", v),
            StatValue::Coords(c) => write!(f, "{}", c),
            StatValue::Undefined => f.write_str("-"),
        }
    }
}

/// A named statistic over a [`StatContext`].
///
/// Statistics are pure functions of a context and carry no per-item state, so
/// one definition serves every item it is applied to. Kind compatibility is a
/// flat capability set checked by the caller before `compute` is invoked;
/// `compute` itself must still reject incompatible contexts for direct callers.
pub trait Stat: Send + Sync {
    /// Unique name, also the table column key
    fn name(&self) -> &str;

    /// The item kinds this statistic supports
    fn compatible_kinds(&self) -> &[ItemKind] {
        &ALL_KINDS
    }

    /// Check compatibility with one kind
    fn is_compatible(&self, kind: ItemKind) -> bool {
        self.compatible_kinds().contains(&kind)
    }

    /// Compute the value for one context.
    ///
    /// Returns [`StatsError::EmptyDataset`] when the context holds no finite
    /// samples and [`StatsError::KindNotSupported`] for incompatible kinds.
    fn compute(&self, context: &StatContext) -> StatsResult<StatValue>;
}

type StatFn = dyn Fn(&StatContext) -> StatsResult<StatValue> + Send + Sync;

/// A statistic backed by a plain function or closure.
///
/// This is how user-defined statistics are registered without writing a new
/// type; the closure receives the same uniform context as the built-ins.
pub struct FnStat {
    name: String,
    kinds: Vec<ItemKind>,
    func: Box<StatFn>,
}

impl FnStat {
    /// Create a statistic compatible with every kind
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&StatContext) -> StatsResult<StatValue> + Send + Sync + 'static,
    {
        Self::with_kinds(name, ALL_KINDS.to_vec(), func)
    }

    /// Create a statistic restricted to the given kinds
    pub fn with_kinds<F>(name: impl Into<String>, kinds: Vec<ItemKind>, func: F) -> Self
    where
        F: Fn(&StatContext) -> StatsResult<StatValue> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kinds,
            func: Box::new(func),
        }
    }
}

impl Stat for FnStat {
    fn name(&self) -> &str {
        &self.name
    }

    fn compatible_kinds(&self) -> &[ItemKind] {
        &self.kinds
    }

    fn compute(&self, context: &StatContext) -> StatsResult<StatValue> {
        if !self.is_compatible(context.kind()) {
            return Err(StatsError::KindNotSupported {
                stat: self.name.clone(),
                kind: context.kind(),
            });
        }
        (self.func)(context)
    }
}

impl fmt::Debug for FnStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStat")
            .field("name", &self.name)
            .field("kinds", &self.kinds)
            .finish()
    }
}
