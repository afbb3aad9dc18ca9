//! Statistics table kept synchronized with a live item collection.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use plotstat_core::{ItemId, ItemKind, ItemSource, PlotEvent, PlotItem, PlotScene, StatContext};

use crate::handler::StatsHandler;
use crate::stat::{Stat, StatValue, StatsError, StatsResult};

/// Evaluate every applicable statistic of `handler` for one item.
///
/// Compatibility is checked before each statistic runs; statistics that do not
/// support the item's kind are omitted from the result rather than reported as
/// errors. A statistic that fails to compute yields an undefined value for its
/// cell only, so one bad statistic never blocks the others.
pub fn evaluate(item: &PlotItem, handler: &StatsHandler) -> HashMap<String, StatValue> {
    let context = StatContext::resolve(item);
    evaluate_context(&context, handler, item.legend())
}

fn evaluate_context(
    context: &StatContext,
    handler: &StatsHandler,
    legend: &str,
) -> HashMap<String, StatValue> {
    let mut values = HashMap::new();
    for stat in handler.stats_for(context.kind()) {
        let value = match stat.compute(context) {
            Ok(value) => value,
            Err(StatsError::EmptyDataset) => StatValue::Undefined,
            Err(err) => {
                tracing::warn!(
                    "statistic '{}' failed for '{}': {}",
                    stat.name(),
                    legend,
                    err
                );
                StatValue::Undefined
            }
        };
        values.insert(stat.name().to_string(), value);
    }
    values
}

/// One table row: the computed statistics of one live item.
#[derive(Serialize, Deserialize)]
pub struct StatRow {
    /// Legend of the item this row tracks
    pub legend: String,

    /// Kind of the item this row tracks
    pub kind: ItemKind,

    values: HashMap<String, StatValue>,

    // Resolved context of the last seen data version. Reused while the
    // version matches, rebuilt when the item's arrays are replaced.
    #[serde(skip)]
    context: Option<(u64, StatContext)>,
}

impl StatRow {
    /// The computed value of one statistic, if applicable to this kind
    pub fn value(&self, stat: &str) -> Option<StatValue> {
        self.values.get(stat).copied()
    }

    /// All computed values, keyed by statistic name
    pub fn values(&self) -> &HashMap<String, StatValue> {
        &self.values
    }
}

/// A statistics table synchronized with a plot scene.
///
/// The table owns one [`StatRow`] per live item identity (`legend` + kind), in
/// the order items were first observed. It stays consistent through the scene
/// event stream:
///
/// - an added item gets a new row, computed immediately; adding an identity
///   that is already tracked is handled as a data change, never a duplicate
/// - a removed item drops its row and compacts the sequence
/// - a data change recomputes the row in place without moving it
/// - rebinding to another source clears everything and resynchronizes
///
/// Events referencing unknown identities are logged and ignored; a removal
/// racing ahead of a not-yet-processed addition is not an error.
pub struct StatsTable {
    handler: StatsHandler,
    rows: Vec<StatRow>,
    index: HashMap<ItemId, usize>,
}

impl StatsTable {
    /// Create a table applying the given statistic set
    pub fn new(handler: StatsHandler) -> Self {
        Self {
            handler,
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The active statistic set
    pub fn handler(&self) -> &StatsHandler {
        &self.handler
    }

    /// Register a statistic and recompute every row for it.
    ///
    /// Same replacement policy as [`StatsHandler::register`]: an existing name
    /// is replaced in place, keeping its column position.
    pub fn register_stat(&mut self, stat: Box<dyn Stat>) {
        self.handler.register(stat);
        self.recompute_all();
    }

    /// Unregister a statistic and drop its values from every row
    pub fn unregister_stat(&mut self, name: &str) -> bool {
        if !self.handler.unregister(name) {
            return false;
        }
        for row in &mut self.rows {
            row.values.remove(name);
        }
        true
    }

    /// Number of tracked rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The row at a display position
    pub fn row_at(&self, index: usize) -> Option<&StatRow> {
        self.rows.get(index)
    }

    /// All rows, in display order
    pub fn rows(&self) -> &[StatRow] {
        &self.rows
    }

    /// The row tracking one item identity
    pub fn row(&self, legend: &str, kind: ItemKind) -> Option<&StatRow> {
        let id = ItemId::new(legend, kind);
        self.index.get(&id).map(|&pos| &self.rows[pos])
    }

    /// One computed cell value
    pub fn value(&self, legend: &str, kind: ItemKind, stat: &str) -> Option<StatValue> {
        self.row(legend, kind).and_then(|row| row.value(stat))
    }

    /// The column names applicable to a kind, in column order
    pub fn columns_for(&self, kind: ItemKind) -> Vec<&str> {
        self.handler.columns_for(kind)
    }

    /// Drop every row
    pub fn clear(&mut self) {
        self.rows.clear();
        self.index.clear();
    }

    /// Drop all rows and resynchronize from a source's current items.
    ///
    /// With the `parallel` feature, statistic evaluation fans out over rayon;
    /// rows are still appended in the source's enumeration order.
    pub fn rebind(&mut self, source: &dyn ItemSource) {
        self.clear();
        let items = source.items();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let handler = &self.handler;
            let computed: Vec<(PlotItem, StatContext, HashMap<String, StatValue>)> = items
                .into_par_iter()
                .map(|item| {
                    let context = StatContext::resolve(&item);
                    let values = evaluate_context(&context, handler, item.legend());
                    (item, context, values)
                })
                .collect();
            for (item, context, values) in computed {
                self.insert_row(&item, context, values);
            }
        }

        #[cfg(not(feature = "parallel"))]
        for item in &items {
            self.item_added(item);
        }
    }

    /// Drain a scene's pending events through the table.
    ///
    /// Returns the number of events processed.
    pub fn process_events(&mut self, scene: &mut PlotScene) -> usize {
        let events = scene.drain_events();
        let processed = events.len();
        for event in events {
            self.on_event(event);
        }
        processed
    }

    /// Apply one change event
    pub fn on_event(&mut self, event: PlotEvent) {
        match event {
            PlotEvent::ItemAdded(item) => self.item_added(&item),
            PlotEvent::ItemRemoved { legend, kind } => self.item_removed(&legend, kind),
            PlotEvent::ItemDataChanged(item) => self.item_data_changed(&item),
        }
    }

    /// Track a new item.
    ///
    /// If the identity is already tracked this is a data change: the existing
    /// row is recomputed in place and no duplicate is appended. The context is
    /// resolved fresh either way, an add carries new data by definition.
    pub fn item_added(&mut self, item: &PlotItem) {
        let context = StatContext::resolve(item);
        let values = evaluate_context(&context, &self.handler, item.legend());
        if !self.index.contains_key(&item.id()) {
            tracing::debug!("tracking {} item '{}'", item.kind(), item.legend());
        }
        self.insert_row(item, context, values);
    }

    /// Stop tracking an item.
    ///
    /// Unknown identities are logged and ignored: a removal notification can
    /// benignly race an addition the table has not seen yet.
    pub fn item_removed(&mut self, legend: &str, kind: ItemKind) {
        match self.position(legend, kind) {
            Ok(pos) => {
                let id = ItemId::new(legend, kind);
                self.index.remove(&id);
                self.rows.remove(pos);
                for other in self.index.values_mut() {
                    if *other > pos {
                        *other -= 1;
                    }
                }
            }
            Err(err) => tracing::warn!("ignoring removal: {}", err),
        }
    }

    /// Recompute the row of an item whose data changed.
    ///
    /// The row keeps its position; an unknown identity is handled as an
    /// addition.
    pub fn item_data_changed(&mut self, item: &PlotItem) {
        let Some(&pos) = self.index.get(&item.id()) else {
            return self.item_added(item);
        };
        let context = match self.rows[pos].context.take() {
            Some((version, context)) if version == item.version() => context,
            _ => StatContext::resolve(item),
        };
        let values = evaluate_context(&context, &self.handler, item.legend());
        let row = &mut self.rows[pos];
        row.values = values;
        row.context = Some((item.version(), context));
    }

    fn position(&self, legend: &str, kind: ItemKind) -> StatsResult<usize> {
        let id = ItemId::new(legend, kind);
        self.index
            .get(&id)
            .copied()
            .ok_or_else(|| StatsError::UnknownIdentity {
                legend: legend.to_string(),
                kind,
            })
    }

    fn insert_row(
        &mut self,
        item: &PlotItem,
        context: StatContext,
        values: HashMap<String, StatValue>,
    ) {
        let id = item.id();
        match self.index.get(&id) {
            Some(&pos) => {
                let row = &mut self.rows[pos];
                row.values = values;
                row.context = Some((item.version(), context));
            }
            None => {
                self.index.insert(id, self.rows.len());
                self.rows.push(StatRow {
                    legend: item.legend().to_string(),
                    kind: item.kind(),
                    values,
                    context: Some((item.version(), context)),
                });
            }
        }
    }

    fn recompute_all(&mut self) {
        for pos in 0..self.rows.len() {
            let Some((version, context)) = self.rows[pos].context.take() else {
                continue;
            };
            let legend = self.rows[pos].legend.clone();
            let values = evaluate_context(&context, &self.handler, &legend);
            let row = &mut self.rows[pos];
            row.values = values;
            row.context = Some((version, context));
        }
    }
}

impl Default for StatsTable {
    fn default() -> Self {
        Self::new(StatsHandler::basics())
    }
}
