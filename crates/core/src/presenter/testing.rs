//! Test doubles for the presenter collaborators.

use std::collections::{BTreeMap, BTreeSet};

use crate::trip::{EventSortType, TripEvent, UpdateKind, UserAction};

use super::traits::{Board, Dispatcher, ShakeCallback};
use super::types::{
    ComponentId, DayHeader, FormState, FormStatePatch, KeyListenerId, RenderPosition,
    TripDayComponents,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Container,
    Card(TripEvent),
    Form(TripEvent),
    NoEvents,
    Sort(EventSortType),
    TripDays,
    TripDay(Option<DayHeader>),
    EventsList,
}

/// In-memory component tree that records what presenters asked for.
#[derive(Default)]
pub struct RecordingBoard {
    next_id: u64,
    components: BTreeMap<ComponentId, Component>,
    children: BTreeMap<ComponentId, Vec<ComponentId>>,
    forms: BTreeMap<ComponentId, FormState>,
    form_destinations: BTreeMap<ComponentId, Vec<String>>,
    listeners: BTreeSet<u64>,
    next_listener: u64,
    resets: Vec<(ComponentId, TripEvent)>,
    shakes: Vec<(ComponentId, ShakeCallback)>,
}

impl RecordingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_container(&mut self) -> ComponentId {
        self.insert(Component::Container)
    }

    pub fn children(&self, container: ComponentId) -> Vec<ComponentId> {
        self.children.get(&container).cloned().unwrap_or_default()
    }

    pub fn component(&self, id: ComponentId) -> Component {
        self.components[&id].clone()
    }

    pub fn exists(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    /// Every card or form currently attached below `root`, depth first.
    pub fn visible_events(&self, root: ComponentId) -> Vec<Component> {
        let mut found = Vec::new();
        for child in self.children(root) {
            match self.component(child) {
                component @ (Component::Card(_) | Component::Form(_)) => found.push(component),
                _ => found.extend(self.visible_events(child)),
            }
        }
        found
    }

    pub fn key_listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_key_listener(&self, id: KeyListenerId) -> bool {
        self.listeners.contains(&id.get())
    }

    pub fn resets(&self) -> Vec<(ComponentId, TripEvent)> {
        self.resets.clone()
    }

    pub fn form_state(&self, form: ComponentId) -> FormState {
        self.forms.get(&form).copied().unwrap_or_default()
    }

    /// Destinations a form was built with.
    pub fn form_destinations(&self, form: ComponentId) -> Vec<String> {
        self.form_destinations.get(&form).cloned().unwrap_or_default()
    }

    pub fn pending_shakes(&self) -> Vec<ComponentId> {
        self.shakes.iter().map(|(id, _)| *id).collect()
    }

    /// Completes every pending shake animation.
    pub fn finish_shakes(&mut self) {
        for (_, on_complete) in std::mem::take(&mut self.shakes) {
            on_complete(self);
        }
    }

    fn insert(&mut self, component: Component) -> ComponentId {
        let id = ComponentId::new(self.next_id);
        self.next_id += 1;
        self.components.insert(id, component);
        id
    }

    fn detach(&mut self, component: ComponentId) {
        for children in self.children.values_mut() {
            children.retain(|child| *child != component);
        }
    }

    fn drop_tree(&mut self, component: ComponentId) {
        for child in self.children.remove(&component).unwrap_or_default() {
            self.drop_tree(child);
        }
        self.components.remove(&component);
        self.forms.remove(&component);
        self.form_destinations.remove(&component);
    }
}

impl Board for RecordingBoard {
    fn create_event_card(&mut self, event: &TripEvent) -> ComponentId {
        self.insert(Component::Card(event.clone()))
    }

    fn create_event_form(&mut self, event: &TripEvent, destinations: &[String]) -> ComponentId {
        let form = self.insert(Component::Form(event.clone()));
        self.form_destinations.insert(form, destinations.to_vec());
        form
    }

    fn create_no_events(&mut self) -> ComponentId {
        self.insert(Component::NoEvents)
    }

    fn create_sort(&mut self, _sorts: &[EventSortType], active: EventSortType) -> ComponentId {
        self.insert(Component::Sort(active))
    }

    fn create_trip_days(&mut self) -> ComponentId {
        self.insert(Component::TripDays)
    }

    fn create_trip_day(&mut self, header: Option<DayHeader>) -> TripDayComponents {
        let day = self.insert(Component::TripDay(header));
        let events_list = self.insert(Component::EventsList);
        self.children.entry(day).or_default().push(events_list);
        TripDayComponents { day, events_list }
    }

    fn render(&mut self, container: ComponentId, component: ComponentId, position: RenderPosition) {
        let children = self.children.entry(container).or_default();
        match position {
            RenderPosition::AfterBegin => children.insert(0, component),
            RenderPosition::BeforeEnd => children.push(component),
        }
    }

    fn replace(&mut self, old: ComponentId, new: ComponentId) {
        for children in self.children.values_mut() {
            if let Some(slot) = children.iter_mut().find(|child| **child == old) {
                *slot = new;
            }
        }
    }

    fn remove(&mut self, component: ComponentId) {
        self.detach(component);
        self.drop_tree(component);
    }

    fn clear(&mut self, container: ComponentId) {
        for child in self.children(container) {
            self.remove(child);
        }
    }

    fn update_sort(&mut self, sort: ComponentId, active: EventSortType) {
        self.components.insert(sort, Component::Sort(active));
    }

    fn update_form(&mut self, form: ComponentId, patch: FormStatePatch) {
        self.forms.entry(form).or_default().apply(patch);
    }

    fn reset_form(&mut self, form: ComponentId, event: &TripEvent) {
        self.resets.push((form, event.clone()));
    }

    fn shake(&mut self, component: ComponentId, on_complete: ShakeCallback) {
        self.shakes.push((component, on_complete));
    }

    fn add_key_listener(&mut self) -> KeyListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.insert(id);
        KeyListenerId::new(id)
    }

    fn remove_key_listener(&mut self, id: KeyListenerId) {
        self.listeners.remove(&id.get());
    }
}

/// Dispatcher that only records calls.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub calls: Vec<(UserAction, UpdateKind, TripEvent)>,
}

impl Dispatcher for RecordingDispatcher {
    fn change_event(&mut self, action: UserAction, kind: UpdateKind, event: TripEvent) {
        self.calls.push((action, kind, event));
    }
}
