#![warn(clippy::all)]

//! Olympics Dashboard - an interactive medal data visualization tool.
//!
//! The application loads Olympic participation data from a URL or a
//! local JSON file, caches it in a reactive store, and renders summary
//! statistics plus a pie chart of medal totals. Clicking a chart
//! segment opens a per-country detail page.

mod olympics;
mod state;
mod ui;

use eframe::egui;
use olympics::{HttpFetcher, OlympicStore};
use state::{AppState, DashboardPresenter, DetailPresenter, Route};
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Olympics Dashboard",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}

/// Main application state and logic.
pub struct DashboardApp {
    /// Plain UI state the panels mutate directly
    state: AppState,

    /// Reactive cache of the loaded country collection
    store: OlympicStore,

    /// Derives statistics and chart data from the collection channel
    dashboard: DashboardPresenter,

    /// Present only while a country detail route is active
    detail: Option<DetailPresenter>,

    /// Whether the initial load has been kicked off
    initial_load_started: bool,
}

impl DashboardApp {
    /// Creates a new DashboardApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let store = OlympicStore::new(Arc::new(HttpFetcher::new()));
        let dashboard = DashboardPresenter::new(&store);

        Self {
            state: AppState::new(),
            store,
            dashboard,
            detail: None,
            initial_load_started: false,
        }
    }

    /// Starts a load of the configured source.
    fn start_load(&mut self, ctx: &egui::Context) {
        log::info!("Loading data from {}", self.state.source);
        self.state.status_message = format!("Loading {}...", self.state.source);
        self.store.load(ctx.clone(), &self.state.source);
    }

    /// Keeps the detail presenter in sync with the current route.
    ///
    /// Entering a detail route subscribes a presenter for that id;
    /// leaving it drops the presenter, releasing its subscription.
    fn sync_detail_presenter(&mut self) {
        match self.state.router.current() {
            Route::CountryDetail(id) => {
                let stale = self
                    .detail
                    .as_ref()
                    .map(|d| d.country_id() != id)
                    .unwrap_or(true);
                if stale {
                    self.detail = Some(DetailPresenter::new(&self.store, id));
                }
            }
            Route::Dashboard => {
                self.detail = None;
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.initial_load_started {
            self.initial_load_started = true;
            self.start_load(ctx);
        }

        if self.state.reload_requested {
            self.state.reload_requested = false;
            // Loads are not queued; ignore the request while one is
            // already in flight.
            if !self.store.is_loading() {
                self.start_load(ctx);
            }
        }

        // Check for a completed load
        if let Some(result) = self.store.poll() {
            match result {
                Ok(countries) if countries.is_empty() => {
                    log::warn!("Load returned no countries");
                    self.state.status_message = "Load finished with no data".to_string();
                }
                Ok(countries) => {
                    self.state.status_message = format!("Loaded {} countries", countries.len());
                }
                Err(e) => {
                    log::error!("Load failed: {}", e);
                    self.state.status_message = "Load failed".to_string();
                }
            }
        }

        self.sync_detail_presenter();

        ui::render_top_bar(ctx, &mut self.state, &self.store);

        match self.state.router.current() {
            Route::Dashboard => {
                ui::render_left_panel(ctx, &mut self.state, &self.store);
                ui::render_dashboard(ctx, &mut self.state, &self.dashboard);
            }
            Route::CountryDetail(_) => {
                if let Some(ref detail) = self.detail {
                    ui::render_detail(ctx, &mut self.state, detail);
                }
            }
        }
    }
}
