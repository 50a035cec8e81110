//! Application state management.
//!
//! Presenters subscribe to the store's channels and keep derived
//! models current; `AppState` holds the plain UI state the panels
//! mutate directly.

pub mod dashboard;
pub mod detail;
pub mod route;

pub use dashboard::DashboardPresenter;
pub use detail::DetailPresenter;
pub use route::{Route, Router};

/// Default data source: the bundled mock asset.
pub const DEFAULT_SOURCE: &str = "assets/mock/olympic.json";

/// Root application state shared across the UI panels.
pub struct AppState {
    /// Current route (dashboard or country detail)
    pub router: Router,

    /// Data source location (URL or local path), editable in the left panel
    pub source: String,

    /// Set by the left panel to request a (re)load on the next frame
    pub reload_requested: bool,

    /// Application status message displayed in the top bar
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            router: Router::new(),
            source: DEFAULT_SOURCE.to_string(),
            reload_requested: false,
            status_message: "Ready".to_string(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
