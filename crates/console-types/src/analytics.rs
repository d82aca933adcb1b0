//! Output shapes of the analytics aggregator.
//! The aggregation itself lives in `console-core::analytics`.

use serde::{Deserialize, Serialize};

/// One bar/slice of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Display label, cut to a fixed width
    pub label: String,
    pub value: f64,
    /// Untruncated name, for tooltips and detail views
    pub full_label: String,
}

impl SeriesPoint {
    /// Fraction of `total` this point represents, 0 when `total` is not positive.
    pub fn share_of(&self, total: f64) -> f64 {
        if total > 0.0 {
            self.value / total
        } else {
            0.0
        }
    }
}

/// Scalar summaries of the loaded datasets
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_sales: f64,
    pub total_products: usize,
    pub total_stock: f64,
    pub avg_sale: f64,
}

impl Metrics {
    /// Executive summary bullets
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("{} products in catalog", self.total_products),
            format!("${} in recorded sales", format_amount(self.total_sales)),
            format!("{} units in stock", format_amount(self.total_stock)),
            format!("Average ticket of ${}", format_amount(self.avg_sale.round())),
        ]
    }
}

/// Everything one dashboard render needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub sales: Vec<SeriesPoint>,
    pub inventory: Vec<SeriesPoint>,
    pub metrics: Metrics,
}

impl Dashboard {
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty() && self.inventory.is_empty()
    }
}

/// Format a number with thousands separators and at most two decimals.
///
/// `1234567.5` → `"1,234,567.5"`, `18.0` → `"18"`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (grouped != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
