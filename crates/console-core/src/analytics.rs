//! Analytics aggregator — turns whatever the service sent into chart series
//! and summary metrics.
//!
//! Every function here is a pure function of the [`DatasetStore`] it is given.
//! Nothing is cached between calls; callers recompute after each write.
//!
//! Accepted shapes, for a dataset stored under `key`:
//! - bare: `[{"product": "TV", "amount": 10}, ...]` or `{"TV": 4, ...}`
//! - wrapped once under the same name: `{"sales": [...]}`, `{"inventory": {...}}`
//!
//! Anything else counts as absent: empty series and zero metrics.

use std::collections::HashMap;
use serde_json::{Map, Value};
use console_types::analytics::{Dashboard, Metrics, SeriesPoint};
use console_types::dataset::DatasetKind;

use crate::store::DatasetStore;

/// Characters kept in a display label
pub const LABEL_WIDTH: usize = 10;
pub const ELLIPSIS: &str = "…";

/// A sale record that had both a product name and a numeric amount.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord<'a> {
    pub product: &'a str,
    pub amount: f64,
}

/// First [`LABEL_WIDTH`] characters of `name`, plus [`ELLIPSIS`] if anything was cut.
pub fn truncate_label(name: &str) -> String {
    match name.char_indices().nth(LABEL_WIDTH) {
        Some((cut, _)) => format!("{}{}", &name[..cut], ELLIPSIS),
        None => name.to_string(),
    }
}

fn point(name: &str, value: f64) -> SeriesPoint {
    SeriesPoint {
        label: truncate_label(name),
        value,
        full_label: name.to_string(),
    }
}

/// Peel at most one same-named wrapper off `raw`, keeping whichever of the
/// wrapped or bare value passes `accept`.
fn unwrap_dataset<'a>(raw: &'a Value, key: &str, accept: fn(&Value) -> bool) -> Option<&'a Value> {
    match raw.get(key) {
        Some(inner) if accept(inner) => Some(inner),
        _ if accept(raw) => Some(raw),
        _ => None,
    }
}

/// Well-formed sale records, or `None` when there is no usable sales list.
pub fn sale_records(store: &DatasetStore) -> Option<Vec<SaleRecord<'_>>> {
    let key = DatasetKind::Sales.key();
    let list = unwrap_dataset(store.read(key)?, key, Value::is_array)?.as_array()?;
    let records = list
        .iter()
        .filter_map(|record| {
            Some(SaleRecord {
                product: record.get("product")?.as_str()?,
                amount: record.get("amount")?.as_f64()?,
            })
        })
        .collect();
    Some(records)
}

/// The product → stock mapping, or `None` when there is no usable inventory.
pub fn inventory_levels(store: &DatasetStore) -> Option<&Map<String, Value>> {
    let key = DatasetKind::Inventory.key();
    unwrap_dataset(store.read(key)?, key, Value::is_object)?.as_object()
}

/// Sales summed per product, in first-seen order.
pub fn sales_series(store: &DatasetStore) -> Vec<SeriesPoint> {
    let Some(records) = sale_records(store) else {
        return Vec::new();
    };

    let mut totals: Vec<(&str, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records {
        match index.get(record.product) {
            Some(&i) => totals[i].1 += record.amount,
            None => {
                index.insert(record.product, totals.len());
                totals.push((record.product, record.amount));
            }
        }
    }

    totals
        .into_iter()
        .map(|(product, amount)| point(product, amount))
        .collect()
}

/// One point per inventory entry with a numeric stock level.
pub fn inventory_series(store: &DatasetStore) -> Vec<SeriesPoint> {
    inventory_levels(store)
        .map(|levels| {
            levels
                .iter()
                .filter_map(|(product, stock)| Some(point(product, stock.as_f64()?)))
                .collect()
        })
        .unwrap_or_default()
}

pub fn metrics(store: &DatasetStore) -> Metrics {
    let records = sale_records(store).unwrap_or_default();
    let total_sales: f64 = records.iter().map(|r| r.amount).sum();
    let avg_sale = if records.is_empty() {
        0.0
    } else {
        total_sales / records.len() as f64
    };

    let (total_products, total_stock) = match inventory_levels(store) {
        Some(levels) => (
            levels.len(),
            levels.values().filter_map(Value::as_f64).sum::<f64>(),
        ),
        None => (0, 0.0),
    };

    Metrics {
        total_sales,
        total_products,
        total_stock,
        avg_sale,
    }
}

/// Everything the dashboard shows, computed from the current store.
pub fn summarize(store: &DatasetStore) -> Dashboard {
    Dashboard {
        sales: sales_series(store),
        inventory: inventory_series(store),
        metrics: metrics(store),
    }
}
