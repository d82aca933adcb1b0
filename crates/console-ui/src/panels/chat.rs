//! Chat panel — displays the conversation timeline and input field.

use chrono::Local;
use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use console_types::message::{Message, Role};
use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns Some(text) when the user submits a query,
/// either typed or picked from `starter_prompts`.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, starter_prompts: &[String]) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Chat with the Agent")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                        ui.label(RichText::new("●").color(status_color));
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 48.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.messages.is_empty() {
                            if let Some(prompt) = welcome(ui, starter_prompts, state.is_busy()) {
                                submitted = Some(prompt);
                            }
                        }

                        for message in &state.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if state.is_busy() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    RichText::new("The agent is working on it...")
                                        .color(TEXT_SECONDARY)
                                        .italics(),
                                );
                            });
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let busy = state.is_busy();
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Type your query here...")
                        .desired_width(ui.available_width() - 70.0)
                        .interactive(!busy)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = state.can_send();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(
                            RichText::new("Send").color(TEXT_PRIMARY),
                        )
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter_pressed = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if (enter_pressed && send_enabled) || send_btn.clicked() {
                        submitted = Some(state.input_text.trim().to_string());
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

/// Greeting plus clickable example queries, shown while the timeline is empty.
fn welcome(ui: &mut egui::Ui, starter_prompts: &[String], busy: bool) -> Option<String> {
    let mut picked = None;
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(
            RichText::new("Welcome to the Retail Console")
                .color(TEXT_PRIMARY)
                .strong()
                .size(16.0),
        );
        ui.label(
            RichText::new("Start a conversation or try one of these queries:")
                .color(TEXT_SECONDARY),
        );
        ui.add_space(8.0);
    });
    for prompt in starter_prompts {
        let button = egui::Button::new(RichText::new(format!("💡 {}", prompt)).color(TEXT_PRIMARY))
            .fill(BG_SURFACE)
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(ui.available_width(), 28.0));
        if ui.add_enabled(!busy, button).clicked() {
            picked = Some(prompt.clone());
        }
    }
    picked
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color) = match message.role {
        Role::User => ("You", ACCENT),
        Role::Agent => ("Agent", SUCCESS),
    };
    let bg = match message.role {
        Role::User => BG_SURFACE,
        Role::Agent => BG_PRIMARY,
    };
    let time = message.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string();

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(time).color(TEXT_SECONDARY).small());
                });
            });

            if message.is_failure() {
                egui::Frame::default()
                    .fill(ERROR_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(format!("❌ {}", message.display_text())).color(ERROR));
                    });
            } else {
                ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
            }
        });
}
