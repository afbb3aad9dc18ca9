//! Item source boundary: enumeration plus change events.

use serde::{Deserialize, Serialize};

use crate::item::{ItemKind, PlotItem};

/// A provider of plot items.
///
/// The statistics layer binds to one source at a time and resynchronizes
/// itself from `items()` on every rebind. Incremental changes after that are
/// delivered as [`PlotEvent`]s.
pub trait ItemSource {
    /// Snapshot of the currently live items, in insertion order
    fn items(&self) -> Vec<PlotItem>;
}

/// A change to an item collection.
///
/// Events carry owned snapshots of the affected item, so handling them needs
/// no reference back into the source and no GUI toolkit wiring.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PlotEvent {
    /// An item appeared in the collection
    ItemAdded(PlotItem),

    /// The item with this identity left the collection
    ItemRemoved { legend: String, kind: ItemKind },

    /// An item's sample arrays were replaced
    ItemDataChanged(PlotItem),
}

impl PlotEvent {
    /// Identity of the item this event concerns
    pub fn legend(&self) -> &str {
        match self {
            PlotEvent::ItemAdded(item) | PlotEvent::ItemDataChanged(item) => item.legend(),
            PlotEvent::ItemRemoved { legend, .. } => legend,
        }
    }

    /// Kind of the item this event concerns
    pub fn kind(&self) -> ItemKind {
        match self {
            PlotEvent::ItemAdded(item) | PlotEvent::ItemDataChanged(item) => item.kind(),
            PlotEvent::ItemRemoved { kind, .. } => *kind,
        }
    }
}
