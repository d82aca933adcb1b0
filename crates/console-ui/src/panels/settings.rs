//! Settings panel — backend address and an explicit Apply button.

use egui::{self, RichText, Vec2};
use console_types::config::{ConsoleConfig, DEFAULT_API_BASE};
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was edited but not yet applied
    Changed,
    /// The user clicked Apply; rebuild the API adapter from the config
    Applied,
}

/// Feedback line shown next to the Apply button
#[derive(Clone)]
pub struct ApplyFeedback {
    pub message: String,
    pub success: bool,
}

/// Render the settings panel. Edits land in `config` directly.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut ConsoleConfig,
    feedback: Option<&ApplyFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut applied = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Agent API").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Base URL").color(TEXT_SECONDARY).small());
            let edit = egui::TextEdit::singleline(&mut config.api.base_url)
                .hint_text(DEFAULT_API_BASE);
            if ui.add(edit).changed() {
                changed = true;
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Chat endpoint: {}", config.api.endpoint("/chat")))
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Apply").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(100.0, 28.0)),
                );
                if btn.clicked() {
                    applied = true;
                }

                if ui
                    .add(
                        egui::Button::new(RichText::new("Reset").color(TEXT_PRIMARY))
                            .fill(BG_SURFACE)
                            .corner_radius(PANEL_ROUNDING),
                    )
                    .clicked()
                {
                    config.api.base_url = DEFAULT_API_BASE.to_string();
                    changed = true;
                }

                if let Some(fb) = feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if applied {
        SettingsAction::Applied
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}
