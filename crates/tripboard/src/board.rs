//! Terminal implementation of the rendering collaborator.
//!
//! Components live in an in-memory tree and are printed as indented text.
//! Shake animations complete on the next [`TerminalBoard::tick`].

use std::collections::{BTreeSet, HashMap};

use tripboard_core::presenter::{
    Board, ComponentId, DayHeader, FormState, FormStatePatch, KeyListenerId, RenderPosition,
    ShakeCallback, TripDayComponents,
};
use tripboard_core::trip::{EventSortType, TripEvent};
use uuid::Uuid;

#[derive(Debug, Clone)]
enum Node {
    Root,
    Card(TripEvent),
    Form {
        event: TripEvent,
        destinations: Vec<String>,
        state: FormState,
    },
    NoEvents,
    Sort {
        sorts: Vec<EventSortType>,
        active: EventSortType,
    },
    TripDays,
    TripDay(Option<DayHeader>),
    EventsList,
}

#[derive(Default)]
pub struct TerminalBoard {
    next_id: u64,
    nodes: HashMap<ComponentId, Node>,
    children: HashMap<ComponentId, Vec<ComponentId>>,
    listeners: BTreeSet<u64>,
    next_listener: u64,
    shaking: Vec<(ComponentId, ShakeCallback)>,
}

impl TerminalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a top-level container to render the trip into.
    pub fn create_root(&mut self) -> ComponentId {
        self.insert(Node::Root)
    }

    pub fn key_listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_shaking(&self) -> bool {
        !self.shaking.is_empty()
    }

    /// Completes pending animations.
    pub fn tick(&mut self) {
        for (_, on_complete) in std::mem::take(&mut self.shaking) {
            on_complete(self);
        }
    }

    /// IDs of the events shown below `root`, in display order.
    pub fn event_order(&self, root: ComponentId) -> Vec<Uuid> {
        let mut ids = Vec::new();
        self.collect_events(root, &mut ids);
        ids
    }

    /// Prints everything below `root`.
    pub fn render_text(&self, root: ComponentId) -> String {
        let mut out = String::new();
        let mut position = 0;
        self.write_node(root, 0, &mut position, &mut out);
        out.trim_end().to_string()
    }

    fn collect_events(&self, id: ComponentId, ids: &mut Vec<Uuid>) {
        match self.nodes.get(&id) {
            Some(Node::Card(event)) | Some(Node::Form { event, .. }) => ids.push(event.id),
            _ => {
                for child in self.children.get(&id).into_iter().flatten() {
                    self.collect_events(*child, ids);
                }
            }
        }
    }

    fn write_node(&self, id: ComponentId, depth: usize, position: &mut usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        let shaking = if self.shaking.iter().any(|(shaking, _)| *shaking == id) {
            " ~~ shake ~~"
        } else {
            ""
        };

        match self.nodes.get(&id) {
            Some(Node::Root) | Some(Node::TripDays) | Some(Node::EventsList) | None => {}
            Some(Node::NoEvents) => {
                out.push_str(&format!("{indent}Click New Event to create your first point of route\n"));
            }
            Some(Node::Sort { sorts, active }) => {
                let labels: Vec<String> = sorts
                    .iter()
                    .map(|sort| {
                        if sort == active {
                            format!("[{}]", sort.label())
                        } else {
                            sort.label().to_string()
                        }
                    })
                    .collect();
                out.push_str(&format!("{indent}SORT: {}\n", labels.join(" ")));
                out.push_str(&format!("{indent}{}\n", "-".repeat(40)));
            }
            Some(Node::TripDay(Some(header))) => {
                out.push_str(&format!(
                    "{indent}DAY {} - {}\n",
                    header.number,
                    header.date.format("%b %d")
                ));
            }
            Some(Node::TripDay(None)) => {}
            Some(Node::Card(event)) => {
                *position += 1;
                out.push_str(&format!(
                    "{indent}{:>2}. {}{}\n",
                    *position,
                    format_card(event),
                    shaking
                ));
                return;
            }
            Some(Node::Form {
                event,
                destinations,
                state,
            }) => {
                *position += 1;
                out.push_str(&format!(
                    "{indent}{:>2}. {}{}\n",
                    *position,
                    format_form(event, destinations, state),
                    shaking
                ));
                return;
            }
        }

        let depth = match self.nodes.get(&id) {
            Some(Node::TripDay(Some(_))) => depth + 1,
            _ => depth,
        };
        for child in self.children.get(&id).into_iter().flatten() {
            self.write_node(*child, depth, position, out);
        }
    }

    fn insert(&mut self, node: Node) -> ComponentId {
        let id = ComponentId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
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
        self.nodes.remove(&component);
        self.shaking.retain(|(id, _)| *id != component);
    }
}

impl Board for TerminalBoard {
    fn create_event_card(&mut self, event: &TripEvent) -> ComponentId {
        self.insert(Node::Card(event.clone()))
    }

    fn create_event_form(&mut self, event: &TripEvent, destinations: &[String]) -> ComponentId {
        self.insert(Node::Form {
            event: event.clone(),
            destinations: destinations.to_vec(),
            state: FormState::default(),
        })
    }

    fn create_no_events(&mut self) -> ComponentId {
        self.insert(Node::NoEvents)
    }

    fn create_sort(&mut self, sorts: &[EventSortType], active: EventSortType) -> ComponentId {
        self.insert(Node::Sort {
            sorts: sorts.to_vec(),
            active,
        })
    }

    fn create_trip_days(&mut self) -> ComponentId {
        self.insert(Node::TripDays)
    }

    fn create_trip_day(&mut self, header: Option<DayHeader>) -> TripDayComponents {
        let day = self.insert(Node::TripDay(header));
        let events_list = self.insert(Node::EventsList);
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
        for child in self.children.get(&container).cloned().unwrap_or_default() {
            self.remove(child);
        }
    }

    fn update_sort(&mut self, sort: ComponentId, active: EventSortType) {
        if let Some(Node::Sort { active: current, .. }) = self.nodes.get_mut(&sort) {
            *current = active;
        }
    }

    fn update_form(&mut self, form: ComponentId, patch: FormStatePatch) {
        if let Some(Node::Form { state, .. }) = self.nodes.get_mut(&form) {
            state.apply(patch);
        }
    }

    fn reset_form(&mut self, form: ComponentId, committed: &TripEvent) {
        if let Some(Node::Form { event, .. }) = self.nodes.get_mut(&form) {
            *event = committed.clone();
        }
    }

    fn shake(&mut self, component: ComponentId, on_complete: ShakeCallback) {
        self.shaking.push((component, on_complete));
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

fn format_card(event: &TripEvent) -> String {
    let star = if event.is_favorite { " *" } else { "" };
    let mut line = format!(
        "{:<28} {}-{} ({})  EUR {}{}",
        event.title(),
        event.start.format("%H:%M"),
        event.end.format("%H:%M"),
        format_duration(event),
        event.price,
        star
    );
    if !event.offers.is_empty() {
        let offers: Vec<String> = event
            .offers
            .iter()
            .map(|offer| format!("+{} EUR {}", offer.title, offer.price))
            .collect();
        line.push_str(&format!("  [{}]", offers.join(", ")));
    }
    line
}

fn format_form(event: &TripEvent, destinations: &[String], state: &FormState) -> String {
    let status = if state.is_saving {
        " (saving...)"
    } else if state.is_deleting {
        " (deleting...)"
    } else if state.is_disabled {
        " (disabled)"
    } else {
        ""
    };
    let favorite = if event.is_favorite { "yes" } else { "no" };
    format!(
        "EDIT {} | {} -> {} | EUR {} | favorite: {} | destinations: {}{}",
        event.title(),
        event.start.format("%d/%m/%y %H:%M"),
        event.end.format("%d/%m/%y %H:%M"),
        event.price,
        favorite,
        destinations.join(", "),
        status
    )
}

fn format_duration(event: &TripEvent) -> String {
    let minutes = event.duration().num_minutes();
    let (days, hours, mins) = (minutes / 1440, (minutes % 1440) / 60, minutes % 60);
    match (days, hours) {
        (0, 0) => format!("{mins:02}M"),
        (0, _) => format!("{hours:02}H {mins:02}M"),
        _ => format!("{days:02}D {hours:02}H {mins:02}M"),
    }
}
