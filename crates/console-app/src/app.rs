//! Main egui application — composes all panels and drives the dispatcher.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use console_core::dispatcher::Dispatcher;
use console_core::event_bus::EventBus;
use console_core::ports::AgentApiPort;
use console_platform::http::HttpAgentApi;
use console_types::config::ConsoleConfig;
use console_types::dataset::DatasetKind;
use console_types::ConsoleError;
use console_ui::panels::settings::{ApplyFeedback, SettingsAction};
use console_ui::panels::sidebar::SidebarAction;
use console_ui::panels::{chat, dashboard, settings, sidebar};
use console_ui::state::UiState;
use console_ui::theme;

/// Query parameter that overrides the configured API base URL
const API_QUERY_PARAM: &str = "api";

/// The main application state
pub struct ConsoleApp {
    ui_state: UiState,
    config: ConsoleConfig,
    event_bus: EventBus,
    dispatcher: Dispatcher,
    api: Rc<dyn AgentApiPort>,
    apply_feedback: Option<ApplyFeedback>,
    first_frame: bool,
}

impl ConsoleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut config = ConsoleConfig::default();
        if let Some(base_url) = api_override() {
            log::info!("Using API base from query string: {}", base_url);
            config.api.base_url = base_url;
        }

        let event_bus = EventBus::new();
        let dispatcher = Dispatcher::new(event_bus.clone());
        let api: Rc<dyn AgentApiPort> = Rc::new(HttpAgentApi::new(config.api.clone()));
        log::info!("Agent API at {}", api.endpoint_name());

        Self {
            ui_state: UiState::new(),
            config,
            event_bus,
            dispatcher,
            api,
            apply_feedback: None,
            first_frame: true,
        }
    }

    fn rebuild_api(&mut self) {
        let api = HttpAgentApi::new(self.config.api.clone());
        self.apply_feedback = Some(ApplyFeedback {
            message: format!("Using {}", api.endpoint_name()),
            success: true,
        });
        self.api = Rc::new(api);
    }
}

/// `?api=<url>` from the page address, if present and non-blank.
fn api_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params
        .get(API_QUERY_PARAM)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the session core
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Retail Console")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!("API: {}", self.api.endpoint_name()))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    match settings::settings_panel(ui, &mut self.config, self.apply_feedback.as_ref()) {
                        SettingsAction::Applied => self.rebuild_api(),
                        SettingsAction::Changed => self.apply_feedback = None,
                        SettingsAction::None => {}
                    }
                });
        }

        // ── Sidebar ──────────────────────────────────────────
        let kinds = self.config.dataset_kinds.clone();
        SidePanel::left("sidebar")
            .min_width(220.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                match sidebar::sidebar_panel(ui, &self.ui_state, &kinds) {
                    Some(SidebarAction::Generate(kind)) => self.dispatch_generate(kind, ctx),
                    Some(SidebarAction::Analyze(name)) => self.dispatch_analysis(name, ctx),
                    None => {}
                }
            });

        // ── Dashboard ────────────────────────────────────────
        SidePanel::right("dashboard")
            .min_width(320.0)
            .max_width(420.0)
            .show(ctx, |ui| {
                dashboard::dashboard_panel(ui, &self.ui_state);
            });

        // ── Chat ─────────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            if let Some(text) = chat::chat_panel(ui, &mut self.ui_state, &self.config.starter_prompts) {
                self.dispatch_chat(text, ctx);
            }
        });
    }
}

impl ConsoleApp {
    /// Send a chat message to the agent (async)
    fn dispatch_chat(&self, text: String, ctx: &egui::Context) {
        let dispatcher = self.dispatcher.clone();
        let api = self.api.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = dispatcher.chat(api.as_ref(), &text).await;
            log_rejection("chat", result.err());
            ctx.request_repaint();
        });
    }

    /// Ask the agent for a sample dataset (async)
    fn dispatch_generate(&self, kind: DatasetKind, ctx: &egui::Context) {
        let dispatcher = self.dispatcher.clone();
        let api = self.api.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = dispatcher.generate_dataset(api.as_ref(), kind).await;
            log_rejection("generate", result.err());
            ctx.request_repaint();
        });
    }

    /// Run a canned analysis (async)
    fn dispatch_analysis(&self, name: String, ctx: &egui::Context) {
        let dispatcher = self.dispatcher.clone();
        let api = self.api.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = dispatcher.quick_analysis(api.as_ref(), &name).await;
            log_rejection("analysis", result.err());
            ctx.request_repaint();
        });
    }
}

/// Rejected submissions never reach the timeline; they only get logged.
fn log_rejection(what: &str, error: Option<ConsoleError>) {
    match error {
        None => {}
        Some(ConsoleError::Busy) => log::debug!("Ignored {} while another request is in flight", what),
        Some(ConsoleError::EmptyInput) => log::debug!("Ignored empty {} submission", what),
        Some(e) => log::error!("{} failed: {}", what, e),
    }
}
