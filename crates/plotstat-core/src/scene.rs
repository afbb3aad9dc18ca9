//! In-memory item collection with a pending change-event queue.

use ndarray::Array2;
use std::collections::{HashMap, VecDeque};

use crate::error::{ItemError, ItemResult};
use crate::item::{ItemData, ItemId, ItemKind, PlotItem};
use crate::source::{ItemSource, PlotEvent};

/// An in-memory plot item collection.
///
/// The scene owns the items and records every mutation as a [`PlotEvent`] on a
/// pending queue. Consumers (a statistics table, typically) drain the queue to
/// stay synchronized without being wired into the mutation call sites.
///
/// Adding an item under an identity that is already present replaces the data
/// in place and records a data-changed event, never a duplicate.
#[derive(Default)]
pub struct PlotScene {
    items: Vec<PlotItem>,
    index: HashMap<ItemId, usize>,
    pending: VecDeque<PlotEvent>,
}

impl PlotScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a curve, replacing the data of an existing curve with this legend
    pub fn add_curve(
        &mut self,
        legend: impl Into<String>,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> ItemResult<()> {
        let data = ItemData::curve(x, y)?;
        self.add_item(legend.into(), data)
    }

    /// Add an image, replacing the data of an existing image with this legend
    pub fn add_image(&mut self, legend: impl Into<String>, values: Array2<f64>) -> ItemResult<()> {
        self.add_item(legend.into(), ItemData::image(values))
    }

    /// Add a scatter, replacing the data of an existing scatter with this legend
    pub fn add_scatter(
        &mut self,
        legend: impl Into<String>,
        x: Vec<f64>,
        y: Vec<f64>,
        values: Vec<f64>,
    ) -> ItemResult<()> {
        let data = ItemData::scatter(x, y, values)?;
        self.add_item(legend.into(), data)
    }

    fn add_item(&mut self, legend: String, data: ItemData) -> ItemResult<()> {
        let id = ItemId::new(legend.clone(), data.kind());
        match self.index.get(&id) {
            Some(&pos) => {
                self.items[pos].set_data(data)?;
                self.pending
                    .push_back(PlotEvent::ItemDataChanged(self.items[pos].clone()));
            }
            None => {
                let item = PlotItem::new(legend, data);
                self.index.insert(id, self.items.len());
                self.pending.push_back(PlotEvent::ItemAdded(item.clone()));
                self.items.push(item);
            }
        }
        Ok(())
    }

    /// Replace the data of an existing item
    pub fn set_data(&mut self, legend: &str, data: ItemData) -> ItemResult<()> {
        let id = ItemId::new(legend, data.kind());
        let pos = *self.index.get(&id).ok_or_else(|| ItemError::UnknownItem {
            legend: legend.to_string(),
            kind: data.kind(),
        })?;
        self.items[pos].set_data(data)?;
        self.pending
            .push_back(PlotEvent::ItemDataChanged(self.items[pos].clone()));
        Ok(())
    }

    /// Remove an item by identity.
    ///
    /// Returns `false` if no such item is present.
    pub fn remove(&mut self, legend: &str, kind: ItemKind) -> bool {
        let id = ItemId::new(legend, kind);
        match self.index.remove(&id) {
            Some(pos) => {
                self.items.remove(pos);
                for other in self.index.values_mut() {
                    if *other > pos {
                        *other -= 1;
                    }
                }
                self.pending.push_back(PlotEvent::ItemRemoved {
                    legend: legend.to_string(),
                    kind,
                });
                true
            }
            None => false,
        }
    }

    /// Look up an item by identity
    pub fn get(&self, legend: &str, kind: ItemKind) -> Option<&PlotItem> {
        let id = ItemId::new(legend, kind);
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the scene holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued, not yet drained events
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<PlotEvent> {
        self.pending.drain(..).collect()
    }
}

impl ItemSource for PlotScene {
    fn items(&self) -> Vec<PlotItem> {
        self.items.clone()
    }
}
