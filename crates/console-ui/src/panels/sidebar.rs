//! Sidebar — dataset generation, quick analyses, and previews of loaded data.

use egui::{self, RichText, ScrollArea, Vec2};
use console_types::dataset::DatasetKind;
use crate::state::UiState;
use crate::theme::*;

/// What the user asked for from the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    Generate(DatasetKind),
    Analyze(String),
}

/// Render the sidebar. Buttons are disabled while a request is in flight.
pub fn sidebar_panel(ui: &mut egui::Ui, state: &UiState, kinds: &[DatasetKind]) -> Option<SidebarAction> {
    let mut action = None;
    let enabled = !state.is_busy();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            section(ui, "Quick Actions", |ui| {
                for kind in kinds {
                    if action_button(ui, enabled, kind.generate_label()) {
                        action = Some(SidebarAction::Generate(*kind));
                    }
                }
            });

            ui.add_space(8.0);

            section(ui, "Quick Analysis", |ui| {
                for kind in kinds {
                    if action_button(ui, enabled, kind.analysis_label()) {
                        action = Some(SidebarAction::Analyze(kind.key().to_string()));
                    }
                }
            });

            if state.has_data() {
                ui.add_space(8.0);
                section(ui, "Generated Data", |ui| {
                    for card in &state.datasets {
                        ui.label(RichText::new(&card.key).color(TEXT_PRIMARY).strong());
                        egui::Frame::default()
                            .fill(BG_PRIMARY)
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(&card.preview)
                                        .color(TEXT_SECONDARY)
                                        .monospace()
                                        .small(),
                                );
                            });
                        ui.add_space(4.0);
                    }
                });
            }
        });

    if let Some(ref a) = action {
        log::debug!("Sidebar action: {:?}", a);
    }
    action
}

fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).color(ACCENT).strong());
            ui.add_space(4.0);
            add_contents(ui);
        });
}

fn action_button(ui: &mut egui::Ui, enabled: bool, label: &str) -> bool {
    let button = egui::Button::new(RichText::new(label).color(TEXT_PRIMARY))
        .fill(BG_SURFACE)
        .corner_radius(PANEL_ROUNDING)
        .min_size(Vec2::new(ui.available_width(), 30.0));
    ui.add_enabled(enabled, button).clicked()
}
