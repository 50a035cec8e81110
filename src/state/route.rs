//! Route model and navigation.
//!
//! Two views exist: the dashboard and a per-country detail page
//! reached via `country/<id>` paths, the navigation contract the
//! chart click handler drives.

/// The views the app can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    CountryDetail(u32),
}

/// Holds the current route and accepts path-string navigation.
pub struct Router {
    current: Route,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: Route::Dashboard,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Navigates to a path of the form `""` or `"country/<positive int>"`.
    ///
    /// Returns false (and stays on the current route) for paths that
    /// do not name a view.
    pub fn navigate_by_url(&mut self, path: &str) -> bool {
        match parse_route(path) {
            Some(route) => {
                log::info!("Navigating to {:?}", route);
                self.current = route;
                true
            }
            None => {
                log::warn!("Ignoring navigation to unknown path: {}", path);
                false
            }
        }
    }

    pub fn go_to_dashboard(&mut self) {
        self.current = Route::Dashboard;
    }
}

/// Parses a path string into a route.
fn parse_route(path: &str) -> Option<Route> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return Some(Route::Dashboard);
    }

    let id = path.strip_prefix("country/")?;
    let id: u32 = id.parse().ok()?;
    if id == 0 {
        return None;
    }
    Some(Route::CountryDetail(id))
}
