//! Country detail presenter, backing the `country/<id>` route.

use crate::olympics::{Country, OlympicStore, StoreError, Subscription};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

type DetailState = Option<Result<Country, StoreError>>;

/// Observes a single country by id for the detail page.
///
/// Holds None until the first qualifying collection emission; after
/// that, the unique match or the lookup error for this subscriber.
pub struct DetailPresenter {
    country_id: u32,
    state: Rc<RefCell<DetailState>>,
    _country_sub: Subscription,
}

impl DetailPresenter {
    pub fn new(store: &OlympicStore, country_id: u32) -> Self {
        let state = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&state);
        let country_sub = store.observe_country_by_id(country_id, move |result| {
            if let Err(ref e) = result {
                log::warn!("Country lookup failed: {}", e);
            }
            *sink.borrow_mut() = Some(result);
        });

        Self {
            country_id,
            state,
            _country_sub: country_sub,
        }
    }

    pub fn country_id(&self) -> u32 {
        self.country_id
    }

    pub fn state(&self) -> Ref<'_, DetailState> {
        self.state.borrow()
    }
}
