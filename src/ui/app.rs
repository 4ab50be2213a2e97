use crate::controller::{Controller, GenerationOutcome};
use crate::model::NameRecord;
use crate::ui::cards::{columns_for_width, Card, Section};
use crate::ui::events::AppEvent;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::dispatch;
use crate::ui::names::NamesState;
use crate::ui::thumbnail::ThumbnailCache;
use std::sync::mpsc;
use std::time::Instant;
use tokio::runtime::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form,
    Cards,
}

/// Terminal front-end state around the [`Controller`].
///
/// Runs on the UI thread. Generation is handed to the tokio runtime and its
/// outcome comes back as [`AppEvent::Generation`].
pub struct App {
    should_quit: bool,
    focus: Focus,
    form: FormState,
    controller: Controller,
    /// Index into [`App::cards`].
    selection: usize,
    animation_tick: u8,
    width: u16,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    thumbnails: ThumbnailCache,
}

impl App {
    pub fn new(controller: Controller, runtime: Handle, events: mpsc::Sender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Form,
            form: FormState::default(),
            controller,
            selection: 0,
            animation_tick: 0,
            width: 80,
            runtime,
            events,
            thumbnails: ThumbnailCache::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn names(&self) -> &NamesState {
        self.controller.state()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    /// Favorites first, then the latest results.
    pub fn cards(&self) -> Vec<Card<'_>> {
        let names = self.controller.state();
        let favorites = names.favorites.iter().map(|record| Card {
            record,
            section: Section::Favorites,
            is_favorite: true,
        });
        let generated = names.generated.iter().map(|record| Card {
            record,
            section: Section::Generated,
            is_favorite: names.is_favorite(record),
        });
        favorites.chain(generated).collect()
    }

    pub fn selected_record(&self) -> Option<NameRecord> {
        self.cards()
            .get(self.selection)
            .map(|card| card.record.clone())
    }

    /// Tab between the form and the cards. Cards need at least one entry.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form if !self.cards().is_empty() => Focus::Cards,
            _ => Focus::Form,
        };
        self.clamp_selection();
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
    }

    pub fn on_form(&mut self, intent: FormIntent) {
        if self.controller.state().is_loading {
            return;
        }
        dispatch::<FormReducer>(&mut self.form, intent);
    }

    /// Validate the form and start a generation.
    pub fn submit(&mut self) {
        if self.controller.state().is_loading {
            return;
        }

        let params = match self.form.to_params() {
            Ok(params) => params,
            Err(err) => {
                dispatch::<FormReducer>(
                    &mut self.form,
                    FormIntent::Rejected {
                        message: err.to_string(),
                    },
                );
                return;
            }
        };
        dispatch::<FormReducer>(&mut self.form, FormIntent::Accepted);

        let Some(ticket) = self.controller.begin_generate(params) else {
            return;
        };
        self.thumbnails.clear();

        let generator = self.controller.generator();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = Controller::run(generator, ticket).await;
            let _ = events.send(AppEvent::Generation(outcome));
        });
    }

    pub fn on_generation(&mut self, outcome: GenerationOutcome) {
        self.controller.finish_generate(outcome);
        self.clamp_selection();
    }

    /// Move the card selection by `delta`, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.cards().len();
        if count == 0 {
            return;
        }
        let next = self.selection as isize + delta;
        self.selection = next.clamp(0, count as isize - 1) as usize;
    }

    /// Move one grid row up or down.
    pub fn move_selection_rows(&mut self, rows: isize) {
        let columns = columns_for_width(self.width) as isize;
        self.move_selection(rows * columns);
    }

    pub fn toggle_selected(&mut self) {
        if let Some(record) = self.selected_record() {
            self.controller.toggle_favorite(&record);
            self.clamp_selection();
        }
    }

    pub fn share_selected(&mut self, now: Instant) {
        if let Some(record) = self.selected_record() {
            self.controller.share(&record, now);
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.controller.tick(now);
    }

    pub fn on_resize(&mut self, cols: u16, _rows: u16) {
        self.width = cols;
    }

    fn clamp_selection(&mut self) {
        let count = self.cards().len();
        if count == 0 {
            self.selection = 0;
            self.focus = Focus::Form;
        } else if self.selection >= count {
            self.selection = count - 1;
        }
    }
}
