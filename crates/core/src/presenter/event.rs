//! Presenter for a single trip event.
//!
//! Owns the event's card and edit form, switches between them and forwards
//! user intents to the [`Dispatcher`].

use uuid::Uuid;

use crate::trip::{TripEvent, UpdateKind, UserAction};

use super::listener::KeyListenerGuard;
use super::traits::{Board, Dispatcher};
use super::types::{
    ComponentId, EventIntent, EventMode, EventState, FormStatePatch, KeyboardKey, RenderPosition,
};

#[derive(Debug)]
pub struct EventPresenter {
    container: ComponentId,
    destinations: Vec<String>,
    event: Option<TripEvent>,
    mode: EventMode,
    card: Option<ComponentId>,
    form: Option<ComponentId>,
    key_listener: Option<KeyListenerGuard>,
}

impl EventPresenter {
    /// Creates a presenter that renders into `container`.
    pub fn new(container: ComponentId, destinations: Vec<String>) -> Self {
        Self {
            container,
            destinations,
            event: None,
            mode: EventMode::Preview,
            card: None,
            form: None,
            key_listener: None,
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.event.as_ref().map(|event| event.id)
    }

    pub fn event(&self) -> Option<&TripEvent> {
        self.event.as_ref()
    }

    pub fn mode(&self) -> EventMode {
        self.mode
    }

    pub fn card(&self) -> Option<ComponentId> {
        self.card
    }

    pub fn form(&self) -> Option<ComponentId> {
        self.form
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Replaces the destination list offered by forms built from now on.
    pub fn set_destinations(&mut self, destinations: Vec<String>) {
        self.destinations = destinations;
    }

    pub fn is_listening_keys(&self) -> bool {
        self.key_listener.is_some()
    }

    /// (Re)builds both views for `event`.
    ///
    /// The first call renders the card into the container. Later calls swap
    /// the new views in place of the old ones. While editing, a change that
    /// only flips the favorite flag keeps the form open; any other change
    /// closes it.
    pub fn init(&mut self, event: TripEvent, board: &mut dyn Board) {
        let was_favorite_update = self
            .event
            .as_ref()
            .is_some_and(|prev| is_favorite_only_change(prev, &event));

        let card = board.create_event_card(&event);
        let form = board.create_event_form(&event, &self.destinations);
        let prev_card = self.card.replace(card);
        let prev_form = self.form.replace(form);
        self.event = Some(event);

        let (Some(prev_card), Some(prev_form)) = (prev_card, prev_form) else {
            board.render(self.container, card, RenderPosition::BeforeEnd);
            return;
        };

        match self.mode {
            EventMode::Preview => board.replace(prev_card, card),
            EventMode::Edit if was_favorite_update => board.replace(prev_form, form),
            EventMode::Edit => {
                board.replace(prev_form, card);
                self.leave_edit(board);
            }
        }

        board.remove(prev_card);
        board.remove(prev_form);
    }

    /// Removes both views and drops the key listener if one is held.
    pub fn destroy(&mut self, board: &mut dyn Board) {
        if let Some(card) = self.card.take() {
            board.remove(card);
        }
        if let Some(form) = self.form.take() {
            board.remove(form);
        }
        self.leave_edit(board);
    }

    /// Handles one user intent. Returns the new mode if it changed.
    pub fn handle(
        &mut self,
        intent: EventIntent,
        board: &mut dyn Board,
        dispatcher: &mut dyn Dispatcher,
    ) -> Option<EventMode> {
        match intent {
            EventIntent::Edit => self.replace_card_with_form(board),
            EventIntent::Close => self.close_form(board),
            EventIntent::Key(KeyboardKey::Escape) if self.key_listener.is_some() => {
                self.close_form(board)
            }
            EventIntent::Key(_) => None,
            EventIntent::Submit(updated) => {
                self.submit(updated, dispatcher);
                None
            }
            EventIntent::Delete => {
                if let Some(event) = self.event.clone() {
                    dispatcher.change_event(UserAction::DeleteEvent, UpdateKind::Minor, event);
                }
                None
            }
            EventIntent::ToggleFavorite => {
                if let Some(event) = &self.event {
                    dispatcher.change_event(
                        UserAction::UpdateEvent,
                        UpdateKind::Patch,
                        event.with_favorite_toggled(),
                    );
                }
                None
            }
        }
    }

    /// Forces the card back into view if the form is open.
    pub fn reset_view(&mut self, board: &mut dyn Board) -> Option<EventMode> {
        if self.mode == EventMode::Preview {
            return None;
        }
        self.close_form(board)
    }

    /// Shows the in-flight state of a dispatched change.
    pub fn set_view_state(&mut self, state: EventState, board: &mut dyn Board) {
        let (Some(card), Some(form)) = (self.card, self.form) else {
            return;
        };

        match state {
            EventState::Saving => board.update_form(form, FormStatePatch::saving()),
            EventState::Deleting => board.update_form(form, FormStatePatch::deleting()),
            EventState::Aborting => {
                let active = match self.mode {
                    EventMode::Preview => card,
                    EventMode::Edit => form,
                };
                board.shake(
                    active,
                    Box::new(move |board: &mut dyn Board| {
                        board.update_form(form, FormStatePatch::idle())
                    }),
                );
            }
        }
    }

    fn submit(&self, updated: TripEvent, dispatcher: &mut dyn Dispatcher) {
        let Some(event) = &self.event else {
            return;
        };

        let kind = if event.has_same_schedule(&updated) {
            UpdateKind::Patch
        } else {
            UpdateKind::Minor
        };
        dispatcher.change_event(UserAction::UpdateEvent, kind, updated);
    }

    fn replace_card_with_form(&mut self, board: &mut dyn Board) -> Option<EventMode> {
        if self.mode == EventMode::Edit {
            return None;
        }
        let (Some(card), Some(form)) = (self.card, self.form) else {
            return None;
        };

        board.replace(card, form);
        self.mode = EventMode::Edit;
        if self.key_listener.is_none() {
            self.key_listener = Some(KeyListenerGuard::acquire(board));
        }
        tracing::debug!(id = ?self.id(), "Event form opened");
        Some(EventMode::Edit)
    }

    fn close_form(&mut self, board: &mut dyn Board) -> Option<EventMode> {
        if self.mode == EventMode::Preview {
            return None;
        }
        let (Some(card), Some(form), Some(event)) = (self.card, self.form, &self.event) else {
            return None;
        };

        board.reset_form(form, event);
        board.replace(form, card);
        self.leave_edit(board);
        tracing::debug!(id = ?self.id(), "Event form closed");
        Some(EventMode::Preview)
    }

    fn leave_edit(&mut self, board: &mut dyn Board) {
        if let Some(listener) = self.key_listener.take() {
            listener.release(board);
        }
        self.mode = EventMode::Preview;
    }
}

/// True when `next` differs from `prev` in the favorite flag and nothing else.
fn is_favorite_only_change(prev: &TripEvent, next: &TripEvent) -> bool {
    prev.is_favorite != next.is_favorite && prev.with_favorite_toggled() == *next
}
