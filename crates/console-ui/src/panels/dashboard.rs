//! Dashboard — metric cards, per-product bars, and the executive summary.
//!
//! Draws straight from `UiState::dashboard`; all numbers come precomputed
//! from the core.

use egui::{self, CornerRadius, RichText, ScrollArea, Sense, Vec2};
use console_types::analytics::{format_amount, Metrics, SeriesPoint};
use crate::state::UiState;
use crate::theme::*;

const LABEL_COLUMN: f32 = 90.0;
const VALUE_COLUMN: f32 = 80.0;
const BAR_HEIGHT: f32 = 14.0;

pub fn dashboard_panel(ui: &mut egui::Ui, state: &UiState) {
    let dashboard = &state.dashboard;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            metric_cards(ui, &dashboard.metrics);

            if !dashboard.sales.is_empty() {
                ui.add_space(8.0);
                card(ui, "Sales by Product", |ui| {
                    for point in &dashboard.sales {
                        bar_row(ui, point, 1.0 / max_value(&dashboard.sales), ACCENT, |p| {
                            format!("${}", format_amount(p.value))
                        });
                    }
                });
            }

            if !dashboard.inventory.is_empty() {
                ui.add_space(8.0);
                let total = dashboard.metrics.total_stock;
                card(ui, "Inventory Distribution", |ui| {
                    for (i, point) in dashboard.inventory.iter().enumerate() {
                        bar_row(ui, point, 1.0 / total.max(1.0), chart_color(i), |p| {
                            format!("{} ({:.0}%)", format_amount(p.value), p.share_of(total) * 100.0)
                        });
                    }
                });
            }

            ui.add_space(8.0);
            card(ui, "System Status", |ui| {
                status_row(ui, "AI Agent", "Active", SUCCESS);
                status_row(ui, "API Backend", "Connected", ACCENT);
                let data_color = if state.has_data() { WARNING } else { TEXT_SECONDARY };
                status_row(ui, "Data", state.data_status(), data_color);
            });

            if state.has_data() {
                ui.add_space(8.0);
                card(ui, "Executive Summary", |ui| {
                    for line in dashboard.metrics.summary_lines() {
                        ui.label(RichText::new(format!("• {}", line)).color(TEXT_PRIMARY));
                    }
                });
            }
        });
}

fn metric_cards(ui: &mut egui::Ui, metrics: &Metrics) {
    let cards = [
        ("Total Sales", format!("${}", format_amount(metrics.total_sales))),
        ("Products", metrics.total_products.to_string()),
        ("Total Stock", format_amount(metrics.total_stock)),
        ("Average Sale", format!("${}", format_amount(metrics.avg_sale.round()))),
    ];

    egui::Grid::new("metric_cards")
        .num_columns(2)
        .spacing(Vec2::new(8.0, 8.0))
        .show(ui, |ui| {
            for (i, (title, value)) in cards.iter().enumerate() {
                egui::Frame::default()
                    .fill(BG_SECONDARY)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(PANEL_PADDING)
                    .show(ui, |ui| {
                        ui.set_min_width(110.0);
                        ui.label(RichText::new(*title).color(TEXT_SECONDARY).small());
                        ui.label(RichText::new(value).color(TEXT_PRIMARY).strong().size(18.0));
                    });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

fn max_value(series: &[SeriesPoint]) -> f64 {
    series
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max)
        .max(f64::EPSILON)
}

/// One labelled horizontal bar; `scale` maps a value to the 0..=1 bar width.
fn bar_row(
    ui: &mut egui::Ui,
    point: &SeriesPoint,
    scale: f64,
    color: egui::Color32,
    value_text: impl Fn(&SeriesPoint) -> String,
) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [LABEL_COLUMN, BAR_HEIGHT],
            egui::Label::new(RichText::new(&point.label).color(TEXT_PRIMARY).small()),
        )
        .on_hover_text(&point.full_label);

        let width = (ui.available_width() - VALUE_COLUMN).max(10.0);
        let (rect, response) = ui.allocate_exact_size(Vec2::new(width, BAR_HEIGHT), Sense::hover());
        let fraction = (point.value * scale).clamp(0.0, 1.0) as f32;
        let bar = egui::Rect::from_min_size(rect.min, Vec2::new(width * fraction, rect.height()));
        ui.painter().rect_filled(rect, CornerRadius::same(3), BG_SURFACE);
        ui.painter().rect_filled(bar, CornerRadius::same(3), color);
        response.on_hover_text(format!("{}: {}", point.full_label, value_text(point)));

        ui.label(RichText::new(value_text(point)).color(TEXT_SECONDARY).small());
    });
}

fn status_row(ui: &mut egui::Ui, name: &str, status: &str, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(name).color(TEXT_PRIMARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(status).color(color).small());
            ui.label(RichText::new("●").color(color));
        });
    });
}

fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).color(TEXT_PRIMARY).strong());
            ui.add_space(4.0);
            add_contents(ui);
        });
}
