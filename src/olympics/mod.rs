//! Olympic data layer: types, fetch pipeline, and the reactive store.

pub mod fetch;
pub mod store;
pub mod subject;
pub mod types;

pub use fetch::{CountryFetcher, FetchError, HttpFetcher, LoadChannel};
pub use store::{OlympicStore, StoreError, FETCH_FAILED_MESSAGE, NO_DATA_MESSAGE};
pub use subject::{Subject, Subscription};
pub use types::{ChartDataset, Country, Participation, Statistic};
