//! Session state: the store, the trip presenter and the terminal board.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Duration, Local, NaiveTime};
use rand::prelude::*;
use rand::rngs::StdRng;
use tripboard_core::presenter::{
    ComponentId, Dispatcher, EventIntent, EventState, KeyboardKey, TripPresenter,
};
use tripboard_core::store::EventStore;
use tripboard_core::trip::{
    offers_for_kind, Destination, EventKind, EventSortType, TripEvent, UpdateKind, UserAction,
};
use uuid::Uuid;

use crate::board::TerminalBoard;
use crate::cli::command::HELP;
use crate::cli::{Command, OutputFormat};
use crate::config::Config;
use crate::dispatcher::{ActionQueue, PendingAction};
use crate::error::{CliError, Result};
use crate::output::{format_output, BoardSnapshot};

type Notifications = Rc<RefCell<Vec<(UpdateKind, TripEvent)>>>;

/// What the session loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Quit,
}

/// Decides whether a dispatched change fails.
#[derive(Debug)]
pub struct FailurePolicy {
    rate: f64,
    rng: StdRng,
}

impl FailurePolicy {
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
            rng: StdRng::from_os_rng(),
        }
    }

    fn should_fail(&mut self) -> bool {
        self.rate > 0.0 && self.rng.random_bool(self.rate)
    }
}

pub struct App {
    store: EventStore,
    presenter: TripPresenter,
    board: TerminalBoard,
    root: ComponentId,
    actions: ActionQueue,
    notifications: Notifications,
    failures: FailurePolicy,
    format: OutputFormat,
}

impl App {
    pub fn new(events: &[TripEvent], sort: EventSortType, config: &Config) -> Self {
        let notifications: Notifications = Rc::default();

        let mut store = EventStore::new();
        store.set_events(events);
        let sink = Rc::clone(&notifications);
        store.subscribe(move |kind, event| sink.borrow_mut().push((kind, event.clone())));

        let mut board = TerminalBoard::new();
        let root = board.create_root();
        let mut presenter = TripPresenter::new(root);
        presenter.init(store.events(), &mut board);
        presenter.change_sort_type(sort, &mut board);

        Self {
            store,
            presenter,
            board,
            root,
            actions: ActionQueue::new(),
            notifications,
            failures: FailurePolicy::new(config.failure_rate),
            format: OutputFormat::Pretty,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn presenter(&self) -> &TripPresenter {
        &self.presenter
    }

    pub fn board(&self) -> &TerminalBoard {
        &self.board
    }

    /// Renders the board in the configured format.
    pub fn render(&self) -> String {
        match self.format {
            OutputFormat::Pretty => self.board.render_text(self.root),
            OutputFormat::Json => {
                let events = self
                    .board
                    .event_order(self.root)
                    .into_iter()
                    .filter_map(|id| self.store.get_event(id))
                    .collect();
                let snapshot = BoardSnapshot {
                    sort: self.presenter.sort_type(),
                    editing: self.presenter.editing(),
                    events,
                };
                format_output(&snapshot, OutputFormat::Json)
            }
        }
    }

    /// Runs one session command.
    pub fn execute(&mut self, command: Command) -> Result<Step> {
        match command {
            Command::Quit => return Ok(Step::Quit),
            Command::Help => return Ok(Step::Print(HELP.to_string())),
            Command::Json => {
                return Ok(Step::Print(format_output(
                    &self.store.events(),
                    OutputFormat::Pretty,
                )))
            }
            Command::Show => {}
            Command::Sort(sort) => {
                self.presenter.change_sort_type(sort, &mut self.board);
            }
            Command::Escape => {
                self.presenter
                    .handle_key(KeyboardKey::Escape, &mut self.board, &mut self.actions);
            }
            Command::Edit(n) => self.send(n, EventIntent::Edit)?,
            Command::Close(n) => self.send(n, EventIntent::Close)?,
            Command::Favorite(n) => self.send(n, EventIntent::ToggleFavorite)?,
            Command::Delete(n) => self.send(n, EventIntent::Delete)?,
            Command::Price(n, price) => {
                let mut updated = self.event_at(n)?;
                updated.price = price;
                self.send(n, EventIntent::Submit(updated))?;
            }
            Command::Shift(n, minutes) => {
                let updated = shift_event(self.event_at(n)?, minutes)
                    .ok_or_else(|| CliError::OutOfRange(format!("shift by {minutes} minutes")))?;
                self.send(n, EventIntent::Submit(updated))?;
            }
            Command::Add => {
                let kind = if self.presenter.is_empty() {
                    UpdateKind::Major
                } else {
                    UpdateKind::Minor
                };
                let event = self.new_event()?;
                self.actions.change_event(UserAction::AddEvent, kind, event);
            }
        }

        self.process_actions()?;
        let output = self.render();
        self.board.tick();
        Ok(Step::Print(output))
    }

    fn id_at(&self, position: usize) -> Result<Uuid> {
        self.board
            .event_order(self.root)
            .get(position.wrapping_sub(1))
            .copied()
            .ok_or(CliError::NoSuchPosition(position))
    }

    fn event_at(&self, position: usize) -> Result<TripEvent> {
        let id = self.id_at(position)?;
        self.store
            .get_event(id)
            .cloned()
            .ok_or(CliError::NoSuchPosition(position))
    }

    fn send(&mut self, position: usize, intent: EventIntent) -> Result<()> {
        let id = self.id_at(position)?;
        self.presenter
            .handle_event_intent(id, intent, &mut self.board, &mut self.actions)?;
        Ok(())
    }

    /// Applies queued changes to the store, showing their in-flight state.
    fn process_actions(&mut self) -> Result<()> {
        for PendingAction {
            action,
            kind,
            event,
        } in self.actions.drain()
        {
            let in_flight = match action {
                UserAction::UpdateEvent => Some(EventState::Saving),
                UserAction::DeleteEvent => Some(EventState::Deleting),
                UserAction::AddEvent => None,
            };
            if let Some(state) = in_flight {
                self.presenter
                    .set_view_state(event.id, state, &mut self.board)?;
            }

            if self.failures.should_fail() {
                tracing::warn!(?action, id = %event.id, "Change rejected");
                if in_flight.is_some() {
                    self.presenter
                        .set_view_state(event.id, EventState::Aborting, &mut self.board)?;
                }
                continue;
            }

            match action {
                UserAction::UpdateEvent => {
                    self.store.update_event(kind, event);
                }
                UserAction::DeleteEvent => {
                    self.store.delete_event(kind, &event);
                }
                UserAction::AddEvent => self.store.add_event(kind, event),
            }
            self.flush_notifications();
        }
        Ok(())
    }

    fn flush_notifications(&mut self) {
        let pending = std::mem::take(&mut *self.notifications.borrow_mut());
        for (kind, event) in pending {
            self.presenter
                .handle_model_event(kind, &event, self.store.events(), &mut self.board);
        }
    }

    /// A one-hour taxi starting where the trip currently ends.
    fn new_event(&self) -> Result<TripEvent> {
        let start = self
            .store
            .events()
            .iter()
            .map(|event| event.end)
            .max()
            .unwrap_or_else(|| {
                Local::now().date_naive().and_time(NaiveTime::MIN) + Duration::hours(12)
            });
        let destination = self
            .presenter
            .destinations()
            .first()
            .map(|name| Destination::new(name.as_str()))
            .unwrap_or_else(|| Destination::new("Amsterdam"));

        let end = start
            .checked_add_signed(Duration::hours(1))
            .ok_or_else(|| CliError::OutOfRange(format!("new event after {start}")))?;

        let mut event = TripEvent::new(EventKind::Taxi, destination, start, end, 20);
        event.offers = offers_for_kind(EventKind::Taxi);
        Ok(event)
    }
}

/// Moves both ends of `event` by `minutes`, or `None` if either leaves the
/// representable range.
fn shift_event(mut event: TripEvent, minutes: i64) -> Option<TripEvent> {
    let delta = Duration::try_minutes(minutes)?;
    event.start = event.start.checked_add_signed(delta)?;
    event.end = event.end.checked_add_signed(delta)?;
    Some(event)
}
