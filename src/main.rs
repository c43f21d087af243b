//! Autobahn Dashboard.
//!
//! Karten-Dashboard fuer Baustellen, Sperrungen, Verkehrsmeldungen,
//! E-Ladestationen, LKW-Parkplaetze und Webcams der deutschen Autobahnen.
//! Datenquelle ist die oeffentliche Autobahn-API.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use autobahn_dashboard::client::{FetchService, HttpTrafficClient};
use autobahn_dashboard::shared::DashboardOptions;
use autobahn_dashboard::{ui, AppController, AppIntent, AppState};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Autobahn Dashboard v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Autobahn Dashboard"),
            ..Default::default()
        };

        eframe::run_native(
            "Autobahn Dashboard",
            options,
            Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DashboardApp {
    state: AppState,
    controller: AppController,
    intent_rx: Receiver<AppIntent>,
}

impl DashboardApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DashboardOptions::config_path();
        let dashboard_options = DashboardOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = dashboard_options;

        let (intent_tx, intent_rx) = std::sync::mpsc::channel();
        let controller = Self::build_controller(&state, intent_tx, cc.egui_ctx.clone());

        let mut app = Self {
            state,
            controller,
            intent_rx,
        };

        // Startup: Autobahn-Liste laden.
        app.process_events(vec![AppIntent::RoadsRequested]);
        app
    }

    /// Baut den Controller mit Live-Client. Schlaegt der Client-Aufbau
    /// fehl, startet die UI ohne Netzwerk-Anbindung.
    fn build_controller(
        state: &AppState,
        intent_tx: Sender<AppIntent>,
        egui_ctx: egui::Context,
    ) -> AppController {
        let client = match HttpTrafficClient::new(&state.options) {
            Ok(client) => client,
            Err(e) => {
                log::error!("HTTP-Client nicht initialisierbar: {:#}", e);
                return AppController::new();
            }
        };

        let service = match FetchService::new(Arc::new(client), intent_tx) {
            Ok(service) => service.with_notifier(Arc::new(move || egui_ctx.request_repaint())),
            Err(e) => {
                log::error!("FetchService nicht initialisierbar: {:#}", e);
                return AppController::new();
            }
        };

        AppController::with_fetcher(service)
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = Vec::new();

        // Netz-Completions aus dem Hintergrund-Kanal einsammeln.
        while let Ok(intent) = self.intent_rx.try_recv() {
            events.push(intent);
        }

        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl DashboardApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_road_picker(ctx, &mut self.state));
        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::render_table_panel(ctx, &self.state));
        events.extend(ui::render_map_panel(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.roads_loading
            || self.state.selection.pending_count() > 0
        {
            ctx.request_repaint();
        }
    }
}
