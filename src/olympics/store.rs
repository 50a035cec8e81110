//! Reactive cache for the loaded country collection.
//!
//! The store holds the last successfully fetched collection plus a
//! loading flag and an advisory error message, each behind a
//! [`Subject`] so consumers observe the current value and every
//! subsequent change. The collection is only ever replaced wholesale.

use super::fetch::{CountryFetcher, LoadChannel, LoadResult};
use super::subject::{Subject, Subscription};
use super::types::Country;
use eframe::egui;
use std::sync::Arc;
use thiserror::Error;

/// Advisory message for a fetch that returned no records.
pub const NO_DATA_MESSAGE: &str = "No data found";

/// Advisory message for a failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred retrieving data";

/// Per-subscriber lookup failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Zero or duplicate id matches in the loaded collection.
    /// Duplicates are a data-integrity violation and are surfaced
    /// rather than silently resolved.
    #[error("country {0} not found")]
    CountryNotFound(u32),
}

/// Reactive store for Olympic participation data.
///
/// `load` runs the injected fetch capability on a background thread;
/// the UI update loop calls [`OlympicStore::poll`] to apply the
/// completion and receive the outcome. Concurrent loads are neither
/// deduplicated nor queued; callers serialize.
pub struct OlympicStore {
    countries: Subject<Vec<Country>>,
    loading: Subject<bool>,
    error: Subject<String>,
    load_channel: LoadChannel,
    fetcher: Arc<dyn CountryFetcher>,
}

impl OlympicStore {
    pub fn new(fetcher: Arc<dyn CountryFetcher>) -> Self {
        Self {
            countries: Subject::new(Vec::new()),
            loading: Subject::new(false),
            error: Subject::new(String::new()),
            load_channel: LoadChannel::new(),
            fetcher,
        }
    }

    /// Starts a load of `source`.
    ///
    /// Sets the loading flag immediately; the result is applied when
    /// [`OlympicStore::poll`] picks it up on the UI thread.
    pub fn load(&self, ctx: egui::Context, source: &str) {
        self.loading.next(true);
        self.load_channel
            .spawn(ctx, Arc::clone(&self.fetcher), source.to_string());
    }

    /// Non-blocking check for a completed load.
    ///
    /// Applies the store state machine and returns the outcome so the
    /// caller sees the failure path as well. Returns None while no
    /// load has completed.
    pub fn poll(&self) -> Option<LoadResult> {
        let result = self.load_channel.try_recv()?;
        Some(self.apply_load_result(result))
    }

    /// Applies a completed fetch to the cached state.
    ///
    /// A non-empty result replaces the collection and clears the
    /// error message. An empty result flags `NO_DATA_MESSAGE` and
    /// leaves the collection untouched. A failure flags
    /// `FETCH_FAILED_MESSAGE` and is handed back to the caller. The
    /// loading flag drops last so observers see loaded/failed state
    /// before the flag clears.
    fn apply_load_result(&self, result: LoadResult) -> LoadResult {
        let outcome = match result {
            Ok(countries) => {
                if countries.is_empty() {
                    self.error.next(NO_DATA_MESSAGE.to_string());
                } else {
                    self.error.next(String::new());
                    self.countries.next(countries.clone());
                }
                Ok(countries)
            }
            Err(e) => {
                self.error.next(FETCH_FAILED_MESSAGE.to_string());
                Err(e)
            }
        };

        self.loading.next(false);
        outcome
    }

    /// Observes the cached collection.
    ///
    /// Replays the current collection and delivers every replacement,
    /// filtered so subscribers never see an empty collection.
    pub fn observe_countries(
        &self,
        mut callback: impl FnMut(&[Country]) + 'static,
    ) -> Subscription {
        self.countries.subscribe(move |countries| {
            if !countries.is_empty() {
                callback(countries);
            }
        })
    }

    /// Observes a single country by identifier.
    ///
    /// Applies the same non-empty filter as [`observe_countries`],
    /// then delivers the unique match, or `CountryNotFound` when the
    /// id is absent or duplicated. Errors go to this subscriber only.
    ///
    /// [`observe_countries`]: OlympicStore::observe_countries
    pub fn observe_country_by_id(
        &self,
        id: u32,
        mut callback: impl FnMut(Result<Country, StoreError>) + 'static,
    ) -> Subscription {
        self.countries.subscribe(move |countries| {
            if countries.is_empty() {
                return;
            }

            let mut matches = countries.iter().filter(|c| c.id == id);
            match (matches.next(), matches.next()) {
                (Some(country), None) => callback(Ok(country.clone())),
                _ => callback(Err(StoreError::CountryNotFound(id))),
            }
        })
    }

    /// Observes the loading flag, starting with the current value.
    #[allow(dead_code)] // The immediate-mode UI polls is_loading() instead
    pub fn observe_loading(&self, callback: impl FnMut(&bool) + 'static) -> Subscription {
        self.loading.subscribe(callback)
    }

    /// Observes the advisory error message, starting with the current value.
    #[allow(dead_code)] // The immediate-mode UI polls error_message() instead
    pub fn observe_error(&self, callback: impl FnMut(&String) + 'static) -> Subscription {
        self.error.subscribe(callback)
    }

    /// Current loading flag (for immediate-mode rendering).
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Current advisory error message, empty when clear.
    pub fn error_message(&self) -> String {
        self.error.get()
    }

    /// Snapshot of the cached collection.
    pub fn countries(&self) -> Vec<Country> {
        self.countries.get()
    }

    /// Test hook: sets the loading flag without spawning a fetch.
    #[cfg(test)]
    pub fn begin_load_for_test(&self) {
        self.loading.next(true);
    }

    /// Test hook: applies a completed fetch directly, as poll() would.
    #[cfg(test)]
    pub fn complete_load_for_test(&self, result: LoadResult) -> LoadResult {
        self.apply_load_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::olympics::fetch::FetchError;
    use crate::olympics::types::Participation;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct UnusedFetcher;

    impl CountryFetcher for UnusedFetcher {
        fn fetch(&self, _source: &str) -> LoadResult {
            unreachable!("tests drive the store state machine directly")
        }
    }

    fn store() -> OlympicStore {
        OlympicStore::new(Arc::new(UnusedFetcher))
    }

    fn participation(id: u32, medals: u32) -> Participation {
        Participation {
            id,
            year: 2012 + 4 * id as i32,
            city: format!("City {id}"),
            medals_count: medals,
            athlete_count: 100,
        }
    }

    fn country(id: u32, name: &str, medals_per_games: &[u32]) -> Country {
        Country {
            id,
            name: name.to_string(),
            participations: medals_per_games
                .iter()
                .enumerate()
                .map(|(i, &m)| participation(i as u32 + 1, m))
                .collect(),
        }
    }

    fn sample_collection() -> Vec<Country> {
        vec![country(1, "A", &[3]), country(2, "B", &[1, 2])]
    }

    #[test]
    fn test_successful_load_emits_collection_and_clears_error() {
        let store = store();
        let emitted = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&emitted);
        let _sub = store.observe_countries(move |c| sink.borrow_mut().push(c.to_vec()));

        store.begin_load_for_test();
        assert!(store.is_loading());

        let outcome = store.complete_load_for_test(Ok(sample_collection()));
        assert!(outcome.is_ok());
        assert!(!store.is_loading());
        assert_eq!(store.error_message(), "");
        assert_eq!(*emitted.borrow(), vec![sample_collection()]);
    }

    #[test]
    fn test_empty_load_flags_no_data_without_emitting() {
        let store = store();
        let emissions = Rc::new(RefCell::new(0u32));

        let count = Rc::clone(&emissions);
        let _sub = store.observe_countries(move |_| *count.borrow_mut() += 1);

        store.begin_load_for_test();
        let outcome = store.complete_load_for_test(Ok(Vec::new()));

        // Not a failure, only flagged state.
        assert!(outcome.is_ok());
        assert_eq!(store.error_message(), NO_DATA_MESSAGE);
        assert!(!store.is_loading());
        assert_eq!(*emissions.borrow(), 0);
        assert!(store.countries().is_empty());
    }

    #[test]
    fn test_empty_load_leaves_previous_collection_untouched() {
        let store = store();
        let _ = store.complete_load_for_test(Ok(sample_collection()));

        let _ = store.complete_load_for_test(Ok(Vec::new()));

        assert_eq!(store.countries(), sample_collection());
        assert_eq!(store.error_message(), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_failed_load_flags_error_and_propagates() {
        let store = store();
        store.begin_load_for_test();

        let failure = FetchError::Io(std::io::Error::other("socket closed"));
        let outcome = store.complete_load_for_test(Err(failure));

        assert!(outcome.is_err());
        assert_eq!(store.error_message(), FETCH_FAILED_MESSAGE);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_loading_clears_after_state_is_applied() {
        let store = store();
        let transitions = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&transitions);
        let _countries_sub = store.observe_countries(move |_| sink.borrow_mut().push("loaded"));
        let sink = Rc::clone(&transitions);
        let _loading_sub = store.observe_loading(move |flag| {
            sink.borrow_mut()
                .push(if *flag { "loading" } else { "idle" })
        });

        store.begin_load_for_test();
        let _ = store.complete_load_for_test(Ok(sample_collection()));

        // Replayed initial value, then loading, then the collection
        // emission, then the flag dropping last.
        assert_eq!(
            *transitions.borrow(),
            vec!["idle", "loading", "loaded", "idle"]
        );
    }

    #[test]
    fn test_new_subscriber_replays_loaded_collection() {
        let store = store();
        let _ = store.complete_load_for_test(Ok(sample_collection()));

        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        let _sub = store.observe_countries(move |c| sink.borrow_mut().push(c.to_vec()));

        assert_eq!(*emitted.borrow(), vec![sample_collection()]);
    }

    #[test]
    fn test_subscriber_never_sees_initial_empty_collection() {
        let store = store();
        let emissions = Rc::new(RefCell::new(0u32));

        let count = Rc::clone(&emissions);
        let _sub = store.observe_countries(move |_| *count.borrow_mut() += 1);

        assert_eq!(*emissions.borrow(), 0);
    }

    #[test]
    fn test_observe_by_id_delivers_unique_match() {
        let store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _sub = store.observe_country_by_id(2, move |r| sink.borrow_mut().push(r));

        let _ = store.complete_load_for_test(Ok(sample_collection()));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].as_ref().unwrap().name, "B");
    }

    #[test]
    fn test_observe_by_id_absent_is_not_found() {
        let store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _sub = store.observe_country_by_id(99, move |r| sink.borrow_mut().push(r));

        let _ = store.complete_load_for_test(Ok(sample_collection()));

        assert_eq!(*seen.borrow(), vec![Err(StoreError::CountryNotFound(99))]);
    }

    #[test]
    fn test_observe_by_id_duplicate_is_integrity_error() {
        let store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _sub = store.observe_country_by_id(1, move |r| sink.borrow_mut().push(r));

        let duplicated = vec![country(1, "A", &[3]), country(1, "A bis", &[4])];
        let _ = store.complete_load_for_test(Ok(duplicated));

        assert_eq!(*seen.borrow(), vec![Err(StoreError::CountryNotFound(1))]);
    }

    #[test]
    fn test_observe_error_replays_current_message() {
        let store = store();
        let _ = store.complete_load_for_test(Ok(Vec::new()));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = store.observe_error(move |msg| sink.borrow_mut().push(msg.clone()));

        assert_eq!(*seen.borrow(), vec![NO_DATA_MESSAGE.to_string()]);
    }

    #[test]
    fn test_successful_load_clears_prior_error() {
        let store = store();
        let _ = store.complete_load_for_test(Ok(Vec::new()));
        assert_eq!(store.error_message(), NO_DATA_MESSAGE);

        let _ = store.complete_load_for_test(Ok(sample_collection()));
        assert_eq!(store.error_message(), "");
    }
}
