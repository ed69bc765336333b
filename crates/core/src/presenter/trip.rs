//! Presenter for the whole trip board.
//!
//! Buckets events by day (or into a single sorted bucket), owns the active
//! sort mode and one [`EventPresenter`] per rendered event. At most one
//! child is in edit mode at a time.

use uuid::Uuid;

use crate::trip::{
    layout_events, unique_destinations, EventSortType, Result, TripError, TripEvent, TripLayout,
    UpdateKind,
};

use super::event::EventPresenter;
use super::traits::{Board, Dispatcher};
use super::types::{
    ComponentId, DayHeader, EventIntent, EventMode, EventState, KeyboardKey, RenderPosition,
};

#[derive(Debug)]
pub struct TripPresenter {
    container: ComponentId,
    sort_type: EventSortType,
    events: Vec<TripEvent>,
    initial_events: Vec<TripEvent>,
    destinations: Vec<String>,
    no_events: Option<ComponentId>,
    sort: Option<ComponentId>,
    trip_days: Option<ComponentId>,
    presenters: Vec<EventPresenter>,
    editing: Option<Uuid>,
}

impl TripPresenter {
    pub fn new(container: ComponentId) -> Self {
        Self {
            container,
            sort_type: EventSortType::default(),
            events: Vec::new(),
            initial_events: Vec::new(),
            destinations: Vec::new(),
            no_events: None,
            sort: None,
            trip_days: None,
            presenters: Vec::new(),
            editing: None,
        }
    }

    pub fn sort_type(&self) -> EventSortType {
        self.sort_type
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// The event whose form is currently open, if any.
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// True when the board shows the "no events" placeholder.
    pub fn is_empty(&self) -> bool {
        self.no_events.is_some()
    }

    /// IDs of the rendered events, in render order.
    pub fn rendered_ids(&self) -> Vec<Uuid> {
        self.presenters.iter().filter_map(EventPresenter::id).collect()
    }

    pub fn presenter(&self, id: Uuid) -> Option<&EventPresenter> {
        self.presenters.iter().find(|p| p.id() == Some(id))
    }

    /// Renders the board for `events`, tearing down anything already shown.
    pub fn init(&mut self, events: &[TripEvent], board: &mut dyn Board) {
        self.teardown(board);

        self.events = events.to_vec();
        self.initial_events = events.to_vec();
        self.destinations = unique_destinations(events);

        tracing::debug!(
            events = self.events.len(),
            destinations = self.destinations.len(),
            "Rendering trip"
        );
        self.render_trip(board);
    }

    /// Switches the sort mode and re-renders the day list.
    ///
    /// Returns false if `sort_type` is already active or the board shows the
    /// "no events" placeholder.
    pub fn change_sort_type(&mut self, sort_type: EventSortType, board: &mut dyn Board) -> bool {
        if self.sort_type == sort_type || self.trip_days.is_none() {
            return false;
        }

        self.clear_trip_days(board);
        self.sort_type = sort_type;
        if let Some(sort) = self.sort {
            board.update_sort(sort, sort_type);
        }
        self.render_events(board);
        true
    }

    /// Reacts to a store notification. `events` is the store's current content.
    ///
    /// `Patch` refreshes only the matching event, `Minor` re-renders the day
    /// list, `Major` rebuilds the whole board with the default sort.
    pub fn handle_model_event(
        &mut self,
        kind: UpdateKind,
        event: &TripEvent,
        events: &[TripEvent],
        board: &mut dyn Board,
    ) {
        self.events = events.to_vec();
        self.destinations = unique_destinations(events);

        match kind {
            UpdateKind::Patch => {
                let Some(idx) = self.position(event.id) else {
                    // Nothing rendered for this event yet
                    self.rerender_events(board);
                    return;
                };
                self.presenters[idx].set_destinations(self.destinations.clone());
                self.presenters[idx].init(event.clone(), board);
                if self.presenters[idx].mode() == EventMode::Preview
                    && self.editing == Some(event.id)
                {
                    self.editing = None;
                }
            }
            UpdateKind::Minor => self.rerender_events(board),
            UpdateKind::Major => {
                self.sort_type = EventSortType::default();
                self.init(events, board);
            }
        }
    }

    /// Routes a user intent to the presenter of event `id`.
    ///
    /// Opening a form closes whichever other form is open.
    pub fn handle_event_intent(
        &mut self,
        id: Uuid,
        intent: EventIntent,
        board: &mut dyn Board,
        dispatcher: &mut dyn Dispatcher,
    ) -> Result<()> {
        let idx = self.position(id).ok_or(TripError::EventNotFound(id))?;

        if intent == EventIntent::Edit {
            self.evict_editing(id, board);
        }

        match self.presenters[idx].handle(intent, board, dispatcher) {
            Some(EventMode::Edit) => self.editing = Some(id),
            Some(EventMode::Preview) if self.editing == Some(id) => self.editing = None,
            _ => {}
        }
        Ok(())
    }

    /// Delivers a document-level key press to the presenter holding the
    /// key listener.
    pub fn handle_key(
        &mut self,
        key: KeyboardKey,
        board: &mut dyn Board,
        dispatcher: &mut dyn Dispatcher,
    ) {
        let Some(id) = self
            .presenters
            .iter()
            .find(|p| p.is_listening_keys())
            .and_then(EventPresenter::id)
        else {
            return;
        };

        if let Err(error) = self.handle_event_intent(id, EventIntent::Key(key), board, dispatcher)
        {
            tracing::warn!(%error, "Key press for a vanished event");
        }
    }

    pub fn set_view_state(
        &mut self,
        id: Uuid,
        state: EventState,
        board: &mut dyn Board,
    ) -> Result<()> {
        let idx = self.position(id).ok_or(TripError::EventNotFound(id))?;
        self.presenters[idx].set_view_state(state, board);
        Ok(())
    }

    /// Closes every open form.
    pub fn reset_views(&mut self, board: &mut dyn Board) {
        for presenter in self.presenters.iter_mut() {
            presenter.reset_view(board);
        }
        self.editing = None;
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.presenters.iter().position(|p| p.id() == Some(id))
    }

    fn evict_editing(&mut self, incoming: Uuid, board: &mut dyn Board) {
        let Some(current) = self.editing.filter(|current| *current != incoming) else {
            return;
        };
        if let Some(idx) = self.position(current) {
            self.presenters[idx].reset_view(board);
        }
        self.editing = None;
    }

    fn render_trip(&mut self, board: &mut dyn Board) {
        if self.initial_events.is_empty() {
            let no_events = board.create_no_events();
            board.render(self.container, no_events, RenderPosition::BeforeEnd);
            self.no_events = Some(no_events);
            return;
        }

        let sort = board.create_sort(&EventSortType::ALL, self.sort_type);
        board.render(self.container, sort, RenderPosition::BeforeEnd);
        self.sort = Some(sort);

        let trip_days = board.create_trip_days();
        board.render(self.container, trip_days, RenderPosition::BeforeEnd);
        self.trip_days = Some(trip_days);

        self.render_events(board);
    }

    fn render_events(&mut self, board: &mut dyn Board) {
        match layout_events(self.sort_type, &self.events) {
            TripLayout::Days(days) => {
                for day in days {
                    let header = DayHeader {
                        number: day.number,
                        date: day.date,
                    };
                    self.render_trip_day(Some(header), day.events, board);
                }
            }
            TripLayout::Flat(events) => self.render_trip_day(None, events, board),
        }
    }

    fn render_trip_day(
        &mut self,
        header: Option<DayHeader>,
        events: Vec<TripEvent>,
        board: &mut dyn Board,
    ) {
        let Some(trip_days) = self.trip_days else {
            return;
        };

        let day = board.create_trip_day(header);
        board.render(trip_days, day.day, RenderPosition::BeforeEnd);

        for event in events {
            let mut presenter = EventPresenter::new(day.events_list, self.destinations.clone());
            presenter.init(event, board);
            self.presenters.push(presenter);
        }
    }

    fn rerender_events(&mut self, board: &mut dyn Board) {
        if self.trip_days.is_none() {
            return;
        }
        self.clear_trip_days(board);
        self.render_events(board);
    }

    fn clear_trip_days(&mut self, board: &mut dyn Board) {
        for mut presenter in self.presenters.drain(..) {
            presenter.destroy(board);
        }
        if let Some(trip_days) = self.trip_days {
            board.clear(trip_days);
        }
        self.editing = None;
    }

    fn teardown(&mut self, board: &mut dyn Board) {
        self.clear_trip_days(board);
        for component in [
            self.no_events.take(),
            self.sort.take(),
            self.trip_days.take(),
        ]
        .into_iter()
        .flatten()
        {
            board.remove(component);
        }
    }
}
