//! Shared helpers for driving the plugin through `handle_event`.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::time::Duration;
use zgallery::app::{Action, AppState, Event};
use zgallery::gallery::{FetchRequest, HostReply, PageKey};
use zgallery::{handle_event, initialize, Config};

pub const API_URL: &str = "https://gallery.example.com/api";

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Plugin state for `category` with web access granted, plus the actions the
/// grant produced.
pub fn start(category: &str) -> (AppState, Vec<Action>) {
    let config = Config {
        api_url: Some(API_URL.to_string()),
        category: category.to_string(),
        ..Default::default()
    };
    let mut state = initialize(&config);
    let actions = send(&mut state, Event::PermissionsResult { granted: true }, ms(0));
    (state, actions)
}

pub fn send(state: &mut AppState, event: Event, now: Duration) -> Vec<Action> {
    handle_event(state, &event, now)
        .expect("event should be handled")
        .1
}

pub fn fetches(actions: &[Action]) -> Vec<FetchRequest> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::FetchPage(request) => Some(request.clone()),
            _ => None,
        })
        .collect()
}

pub fn timers(actions: &[Action]) -> Vec<Duration> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::ScheduleTimer(delay) => Some(*delay),
            _ => None,
        })
        .collect()
}

/// `n` records with ids `1..=n` and simple counters.
pub fn records(n: usize) -> Value {
    Value::Array(
        (1..=n)
            .map(|id| {
                json!({
                    "id": id,
                    "views": id * 10,
                    "downloads": id * 3,
                    "collections": id % 4,
                    "previewURL": format!("https://cdn.example.com/{id}.jpg"),
                })
            })
            .collect(),
    )
}

pub fn reply(key: &PageKey, status: u16, body: &Value) -> Event {
    Event::PageFetched {
        context: key.to_context(),
        reply: HostReply {
            status,
            headers: BTreeMap::from([(
                "content-type".to_string(),
                "application/json".to_string(),
            )]),
            body: body.to_string().into_bytes(),
        },
    }
}

pub fn ok(key: &PageKey, body: &Value) -> Event {
    reply(key, 200, body)
}

/// What the host delivers when no response arrived at all.
pub fn transport_failure(key: &PageKey) -> Event {
    Event::PageFetched {
        context: key.to_context(),
        reply: HostReply {
            status: 400,
            headers: BTreeMap::new(),
            body: b"connection refused".to_vec(),
        },
    }
}

/// Replaces the search box text with `text` and commits it immediately.
pub fn commit(state: &mut AppState, text: &str, now: Duration) -> Vec<Action> {
    let mut actions = send(state, Event::FocusSearch, now);
    for _ in 0..state.search_input.chars().count() {
        actions.extend(send(state, Event::Backspace, now));
    }
    for c in text.chars() {
        actions.extend(send(state, Event::Char(c), now));
    }
    actions.extend(send(state, Event::CommitSearch, now));
    actions
}

pub fn toast_messages(state: &AppState) -> Vec<String> {
    state
        .toasts
        .visible()
        .map(|toast| toast.notification.message.clone())
        .collect()
}
