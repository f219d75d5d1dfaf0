//! Decides when a page is fetched and applies fetch results to the session.
//!
//! The orchestrator is the only writer of the page cache and the session
//! flags. It never performs I/O: [`FetchOrchestrator::ensure_loaded`] returns a
//! [`LoadDecision`], and the caller turns a [`LoadDecision::Fetch`] into a host
//! request. When the reply comes back, [`FetchOrchestrator::resolve`] stores it
//! under the key it was requested for.
//!
//! A key stays in the in-flight set from the moment its request is issued
//! until its reply is resolved, so navigating away and back while a request is
//! outstanding does not issue a second one.

use crate::domain::GalleryError;
use crate::gallery::fetch::{ApiEndpoint, FetchOutcome, FetchRequest, PageKey};
use crate::gallery::notify::Notification;
use crate::gallery::store::{SessionFlags, SessionStore};
use std::collections::BTreeSet;

/// What [`FetchOrchestrator::ensure_loaded`] decided for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadDecision {
    /// The page is cached; nothing to do.
    CacheHit,
    /// A request for the page is already outstanding.
    InFlight,
    /// The caller must issue this request.
    Fetch(FetchRequest),
    /// No usable endpoint is configured.
    Unavailable(Notification),
}

/// Cache-or-fetch policy and result bookkeeping.
#[derive(Debug, Clone)]
pub struct FetchOrchestrator {
    endpoint: std::result::Result<ApiEndpoint, String>,
    in_flight: BTreeSet<PageKey>,
}

impl FetchOrchestrator {
    /// Creates an orchestrator for a configured endpoint.
    #[must_use]
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self {
            endpoint: Ok(endpoint),
            in_flight: BTreeSet::new(),
        }
    }

    /// Creates an orchestrator that cannot fetch, reporting `error` instead.
    #[must_use]
    pub fn unavailable(error: &GalleryError) -> Self {
        Self {
            endpoint: Err(error.to_string()),
            in_flight: BTreeSet::new(),
        }
    }

    /// Whether a request for `key` is outstanding.
    #[must_use]
    pub fn is_in_flight(&self, key: &PageKey) -> bool {
        self.in_flight.contains(key)
    }

    /// Number of outstanding requests.
    #[must_use]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Makes sure `key` is loaded or being loaded, updating the session flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use zgallery::domain::{Category, SortCriterion};
    /// use zgallery::gallery::{ApiEndpoint, FetchOrchestrator, LoadDecision, SessionStore};
    ///
    /// let mut store = SessionStore::new(Category::new("sport").unwrap(), SortCriterion::Id);
    /// let mut orchestrator =
    ///     FetchOrchestrator::new(ApiEndpoint::parse("https://api.example.com").unwrap());
    ///
    /// let key = store.active_key();
    /// assert!(matches!(orchestrator.ensure_loaded(&mut store, &key), LoadDecision::Fetch(_)));
    /// assert_eq!(orchestrator.ensure_loaded(&mut store, &key), LoadDecision::InFlight);
    /// assert!(store.flags().loading);
    /// ```
    pub fn ensure_loaded(&mut self, store: &mut SessionStore, key: &PageKey) -> LoadDecision {
        let active = store.is_active(key);

        let cached_empty = store
            .cache()
            .get(&key.category, key.page)
            .map(Vec::is_empty);
        if let Some(empty) = cached_empty {
            if active {
                store.set_flags(SessionFlags::settled(empty));
            }
            tracing::debug!(category = %key.category, page = %key.page, "cache hit");
            return LoadDecision::CacheHit;
        }

        if self.in_flight.contains(key) {
            if active {
                store.set_flags(SessionFlags::LOADING);
            }
            return LoadDecision::InFlight;
        }

        match &self.endpoint {
            Ok(endpoint) => {
                if active {
                    store.set_flags(SessionFlags::LOADING);
                }
                self.in_flight.insert(key.clone());
                let request = endpoint.request(key.clone());
                tracing::info!(url = %request.url, "fetching page");
                LoadDecision::Fetch(request)
            }
            Err(reason) => {
                if active {
                    store.set_flags(SessionFlags::settled(true));
                }
                tracing::warn!(reason = %reason, "no endpoint, not fetching");
                LoadDecision::Unavailable(Notification::error(reason.clone()))
            }
        }
    }

    /// Applies the outcome of the request issued for `key`.
    ///
    /// Results always land in `key`'s slot. Flags are only touched when `key`
    /// is still the page on screen. Every failure yields a notification.
    pub fn resolve(
        &mut self,
        store: &mut SessionStore,
        key: PageKey,
        outcome: FetchOutcome,
    ) -> Option<Notification> {
        if !self.in_flight.remove(&key) {
            tracing::warn!(category = %key.category, page = %key.page, "reply for a page that was not requested");
        }
        let active = store.is_active(&key);

        match outcome {
            Ok(records) => {
                let exhausted = records.is_empty();
                tracing::info!(
                    category = %key.category,
                    page = %key.page,
                    count = records.len(),
                    active = active,
                    "page loaded"
                );
                if !store.store_results(key, records) {
                    tracing::warn!("page already cached, keeping first result");
                }
                if active {
                    store.set_flags(SessionFlags::settled(exhausted));
                }
                None
            }
            Err(err) => {
                tracing::warn!(
                    category = %key.category,
                    page = %key.page,
                    error = %err,
                    active = active,
                    "page fetch failed"
                );
                if active {
                    store.set_flags(SessionFlags::settled(true));
                }
                Some(Notification::from(&err))
            }
        }
    }
}
