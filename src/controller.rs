//! Application state controller.
//!
//! Owns [`NamesState`] and the collaborators that produce side effects. All
//! state changes go through [`NamesReducer`]; the controller only performs
//! the effect and dispatches its result.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::generation::{GenerationError, NameGenerator};
use crate::model::{NameRecord, RequestParameters};
use crate::share::Sharer;
use crate::storage::FavoritesStore;
use crate::ui::mvi::dispatch;
use crate::ui::names::{NamesIntent, NamesReducer, NamesState};

/// An accepted generation request, ready to run.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    pub request_id: u64,
    pub params: RequestParameters,
}

/// Result of running a [`GenerationTicket`].
#[derive(Debug)]
pub struct GenerationOutcome {
    pub request_id: u64,
    pub result: Result<Vec<NameRecord>, GenerationError>,
}

pub struct Controller {
    state: NamesState,
    generator: Arc<dyn NameGenerator>,
    favorites: FavoritesStore,
    sharer: Sharer,
    notification_ttl: Duration,
    next_request_id: u64,
}

impl Controller {
    pub fn new(
        generator: Arc<dyn NameGenerator>,
        favorites: FavoritesStore,
        sharer: Sharer,
        notification_ttl: Duration,
    ) -> Self {
        Self {
            state: NamesState::default(),
            generator,
            favorites,
            sharer,
            notification_ttl,
            next_request_id: 1,
        }
    }

    pub fn state(&self) -> &NamesState {
        &self.state
    }

    pub fn generator(&self) -> Arc<dyn NameGenerator> {
        Arc::clone(&self.generator)
    }

    pub fn is_favorite(&self, record: &NameRecord) -> bool {
        self.state.is_favorite(record)
    }

    /// Read favorites from storage. Called once at startup.
    pub fn load_favorites(&mut self) {
        let favorites = self.favorites.load();
        dispatch::<NamesReducer>(&mut self.state, NamesIntent::FavoritesLoaded { favorites });
    }

    /// Enter the loading state for `params`.
    ///
    /// Returns `None` while another generation is in flight.
    pub fn begin_generate(&mut self, params: RequestParameters) -> Option<GenerationTicket> {
        if self.state.is_loading {
            tracing::debug!("Generation already in flight, ignoring submit");
            return None;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        dispatch::<NamesReducer>(
            &mut self.state,
            NamesIntent::GenerateRequested { request_id },
        );
        Some(GenerationTicket { request_id, params })
    }

    /// Run the network part of a ticket. Touches no controller state.
    pub async fn run(generator: Arc<dyn NameGenerator>, ticket: GenerationTicket) -> GenerationOutcome {
        let result = generator.generate(&ticket.params).await;
        GenerationOutcome {
            request_id: ticket.request_id,
            result,
        }
    }

    /// Apply a finished generation.
    pub fn finish_generate(&mut self, outcome: GenerationOutcome) {
        let intent = match outcome.result {
            Ok(names) => NamesIntent::GenerationSucceeded {
                request_id: outcome.request_id,
                names,
            },
            Err(err) => {
                tracing::error!(
                    request_id = outcome.request_id,
                    error = %err,
                    "Name generation failed"
                );
                NamesIntent::GenerationFailed {
                    request_id: outcome.request_id,
                    message: err.user_message().to_string(),
                }
            }
        };
        dispatch::<NamesReducer>(&mut self.state, intent);
    }

    /// Generate in place: begin, run, finish.
    ///
    /// Returns `false` if the request was not accepted.
    pub async fn generate(&mut self, params: RequestParameters) -> bool {
        let Some(ticket) = self.begin_generate(params) else {
            return false;
        };
        let outcome = Self::run(self.generator(), ticket).await;
        self.finish_generate(outcome);
        true
    }

    /// Toggle a record in favorites and persist the new list.
    pub fn toggle_favorite(&mut self, record: &NameRecord) {
        let before = self.state.favorites.clone();
        dispatch::<NamesReducer>(
            &mut self.state,
            NamesIntent::ToggleFavorite {
                record: record.clone(),
            },
        );
        if self.state.favorites != before {
            self.favorites.save(&self.state.favorites);
        }
    }

    /// Share a record; clipboard outcomes raise a notification until `now + ttl`.
    pub fn share(&mut self, record: &NameRecord, now: Instant) {
        let outcome = self.sharer.share(record);
        tracing::debug!(name = %record.name, ?outcome, "Share finished");
        dispatch::<NamesReducer>(
            &mut self.state,
            NamesIntent::ShareFinished {
                outcome,
                expires_at: now + self.notification_ttl,
            },
        );
    }

    pub fn tick(&mut self, now: Instant) {
        if self.state.notification.is_some() {
            dispatch::<NamesReducer>(&mut self.state, NamesIntent::Tick { now });
        }
    }
}
