//! Ordered registry of active statistics.

use plotstat_core::ItemKind;

use crate::builtins::{
    StatCom, StatCoordMax, StatCoordMin, StatDelta, StatMax, StatMean, StatMin, StatStd,
};
use crate::stat::Stat;

/// The set of statistics applied to a table, in column order.
///
/// Handlers are plain constructible values, not singletons: two tables can
/// hold different statistic sets over the same scene concurrently.
///
/// Registration order determines column order. Registering a statistic whose
/// name is already taken replaces the previous definition but keeps its
/// position, so re-registering under an existing name swaps the computation
/// without moving the column. Last registration wins.
pub struct StatsHandler {
    stats: Vec<Box<dyn Stat>>,
}

impl StatsHandler {
    /// Create an empty handler
    pub fn empty() -> Self {
        Self { stats: Vec::new() }
    }

    /// Create a handler with the built-in statistic set.
    ///
    /// Column order: min, coords min, max, coords max, delta, mean, std, com.
    pub fn basics() -> Self {
        let mut handler = Self::empty();
        handler.register(Box::new(StatMin));
        handler.register(Box::new(StatCoordMin));
        handler.register(Box::new(StatMax));
        handler.register(Box::new(StatCoordMax));
        handler.register(Box::new(StatDelta));
        handler.register(Box::new(StatMean));
        handler.register(Box::new(StatStd));
        handler.register(Box::new(StatCom));
        handler
    }

    /// Register a statistic, replacing any previous one with the same name
    pub fn register(&mut self, stat: Box<dyn Stat>) {
        match self.stats.iter().position(|s| s.name() == stat.name()) {
            Some(pos) => self.stats[pos] = stat,
            None => self.stats.push(stat),
        }
    }

    /// Remove the statistic with the given name.
    ///
    /// Returns `false` if no such statistic was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        match self.stats.iter().position(|s| s.name() == name) {
            Some(pos) => {
                self.stats.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Get a statistic by name
    pub fn get(&self, name: &str) -> Option<&dyn Stat> {
        self.stats
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// All registered statistics, in registration order
    pub fn stats(&self) -> impl Iterator<Item = &dyn Stat> {
        self.stats.iter().map(|s| s.as_ref())
    }

    /// The statistics compatible with a kind, in registration order
    pub fn stats_for(&self, kind: ItemKind) -> impl Iterator<Item = &dyn Stat> {
        self.stats()
            .filter(move |s| s.is_compatible(kind))
    }

    /// All column names, in registration order
    pub fn column_names(&self) -> Vec<&str> {
        self.stats().map(|s| s.name()).collect()
    }

    /// The column names applicable to a kind
    pub fn columns_for(&self, kind: ItemKind) -> Vec<&str> {
        self.stats_for(kind).map(|s| s.name()).collect()
    }

    /// Number of registered statistics
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Check if the handler has no statistics
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl Default for StatsHandler {
    fn default() -> Self {
        Self::basics()
    }
}
