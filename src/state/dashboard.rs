//! Dashboard presenter: derives statistics and chart data from the
//! collection channel.

use crate::olympics::{ChartDataset, Country, OlympicStore, Statistic, Subscription};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Derived dashboard data, rebuilt on every collection emission.
#[derive(Default)]
pub struct DashboardModel {
    pub statistics: Vec<Statistic>,
    pub chart: ChartDataset,
}

/// Subscribes once to the collection channel and keeps the derived
/// model current. Dropping the presenter releases the subscription,
/// so later emissions no longer recompute.
pub struct DashboardPresenter {
    model: Rc<RefCell<DashboardModel>>,
    _countries_sub: Subscription,
}

impl DashboardPresenter {
    pub fn new(store: &OlympicStore) -> Self {
        let model = Rc::new(RefCell::new(DashboardModel::default()));

        let sink = Rc::clone(&model);
        let countries_sub = store.observe_countries(move |countries| {
            let mut model = sink.borrow_mut();
            model.statistics = compute_statistics(countries);
            model.chart = build_chart_dataset(countries);
            log::debug!("Dashboard recomputed for {} countries", countries.len());
        });

        Self {
            model,
            _countries_sub: countries_sub,
        }
    }

    /// Borrow of the current derived model for rendering.
    pub fn model(&self) -> Ref<'_, DashboardModel> {
        self.model.borrow()
    }
}

/// Derives the two summary statistics for a collection snapshot.
///
/// "Number of JOs" is the longest participation history among the
/// countries, a deliberate approximation of the distinct-editions
/// count carried over from the source dashboard.
fn compute_statistics(countries: &[Country]) -> Vec<Statistic> {
    let jo_count = countries
        .iter()
        .map(|c| c.participations.len() as u64)
        .max()
        .unwrap_or(0);

    vec![
        Statistic::new("Number of JOs", jo_count),
        Statistic::new("Number of countries", countries.len() as u64),
    ]
}

/// Maps a collection snapshot into a chart-ready dataset, one segment
/// per country in collection order.
fn build_chart_dataset(countries: &[Country]) -> ChartDataset {
    let mut dataset = ChartDataset::default();

    for country in countries {
        dataset.labels.push(country.name.clone());
        dataset.values.push(country.total_medals());
        dataset.ids.push(country.id);
    }

    dataset
}
