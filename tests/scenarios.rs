//! End-to-end flows through `handle_event`, from permission grant to rendered
//! view model.

mod common;

use common::*;
use serde_json::json;
use zgallery::app::{Action, Event, InputMode};
use zgallery::domain::{Page, SortCriterion};
use zgallery::gallery::sorted_view;
use zgallery::ui::BodyState;

#[test]
fn full_first_page_enables_next() {
    let (mut state, actions) = start("sport");
    let requests = fetches(&actions);
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        format!("{API_URL}/images?category=sport&page=1")
    );
    assert!(state.store.flags().loading);
    assert_eq!(state.compute_viewmodel(40, 120).body, BodyState::Loading);

    send(&mut state, ok(&requests[0].key, &records(9)), ms(20));

    let flags = state.store.flags();
    assert!(!flags.loading);
    assert!(!flags.exhausted);
    assert!(state.store.can_go_next());
    let viewmodel = state.compute_viewmodel(40, 120);
    assert!(viewmodel.pagination.can_next);
    assert!(!viewmodel.pagination.can_prev);
    assert!(matches!(viewmodel.body, BodyState::Table { ref items, .. } if items.len() == 9));
}

#[test]
fn empty_second_page_is_exhausted() {
    let (mut state, actions) = start("sport");
    send(&mut state, ok(&fetches(&actions)[0].key, &records(9)), ms(20));

    let actions = send(&mut state, Event::NextPage, ms(30));
    let requests = fetches(&actions);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].key.page, Page::new(2).unwrap());

    send(&mut state, ok(&requests[0].key, &json!([])), ms(50));

    assert!(state.store.flags().exhausted);
    assert!(!state.store.can_go_next());
    let viewmodel = state.compute_viewmodel(40, 120);
    assert_eq!(viewmodel.body, BodyState::Exhausted);
    assert!(viewmodel.pagination.can_prev);
}

#[test]
fn unknown_category_shows_server_message() {
    let (mut state, actions) = start("zzz");
    let key = fetches(&actions)[0].key.clone();

    send(&mut state, reply(&key, 404, &json!({ "error": "category not found" })), ms(20));

    assert_eq!(toast_messages(&state), vec!["category not found"]);
    assert!(state.store.flags().exhausted);
    assert_eq!(state.compute_viewmodel(40, 120).toasts, vec!["category not found"]);
}

#[test]
fn downloads_sort_orders_descending() {
    let (mut state, actions) = start("sport");
    let body = json!([{ "id": 1, "downloads": 5 }, { "id": 2, "downloads": 9 }]);
    send(&mut state, ok(&fetches(&actions)[0].key, &body), ms(20));

    send(&mut state, Event::CycleSort, ms(30));
    send(&mut state, Event::CycleSort, ms(31));
    assert_eq!(state.store.sort_criterion(), SortCriterion::Downloads);

    let BodyState::Table { items, .. } = state.compute_viewmodel(40, 120).body else {
        panic!("expected a table");
    };
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);

    let cached = state.store.active_results().unwrap();
    let ordered: Vec<String> = sorted_view(cached, SortCriterion::Downloads)
        .iter()
        .map(|record| record.id.to_string())
        .collect();
    assert_eq!(ordered, vec!["2", "1"]);
}

#[test]
fn sorting_never_refetches() {
    let (mut state, actions) = start("sport");
    send(&mut state, ok(&fetches(&actions)[0].key, &records(3)), ms(20));

    for n in 0..8 {
        let actions = send(&mut state, Event::CycleSort, ms(30 + n));
        assert!(fetches(&actions).is_empty());
    }
    assert_eq!(state.store.sort_criterion(), SortCriterion::Id);
}

#[test]
fn revisiting_a_cached_page_does_not_fetch() {
    let (mut state, actions) = start("sport");
    send(&mut state, ok(&fetches(&actions)[0].key, &records(9)), ms(10));
    let page_two = fetches(&send(&mut state, Event::NextPage, ms(20)))[0].key.clone();
    send(&mut state, ok(&page_two, &records(4)), ms(30));

    assert!(fetches(&send(&mut state, Event::PrevPage, ms(40))).is_empty());
    assert_eq!(state.store.page(), Page::FIRST);
    assert!(!state.store.flags().loading);
    assert!(fetches(&send(&mut state, Event::Retry, ms(50))).is_empty());
}

#[test]
fn network_failure_is_not_cached_and_retry_refetches() {
    let (mut state, actions) = start("sport");
    let key = fetches(&actions)[0].key.clone();

    send(&mut state, transport_failure(&key), ms(20));
    assert_eq!(toast_messages(&state), vec!["Network error. Please try again later."]);
    assert!(state.store.flags().exhausted);
    assert!(state.store.cache().is_empty());

    let retry = fetches(&send(&mut state, Event::Retry, ms(30)));
    assert_eq!(retry.len(), 1);
    assert_eq!(retry[0].key, key);
}

#[test]
fn server_error_uses_generic_message() {
    let (mut state, actions) = start("sport");
    let key = fetches(&actions)[0].key.clone();

    send(&mut state, reply(&key, 503, &json!({ "error": "overloaded" })), ms(20));
    assert_eq!(toast_messages(&state), vec!["An error occurred while fetching data."]);
}

#[test]
fn stale_reply_lands_in_its_own_slot() {
    let (mut state, actions) = start("sport");
    let sport = fetches(&actions)[0].key.clone();

    let nature = fetches(&commit(&mut state, "nature", ms(10)))[0].key.clone();
    send(&mut state, ok(&sport, &records(2)), ms(20));

    assert!(state.store.flags().loading);
    assert!(state.store.active_results().is_none());
    assert_eq!(state.store.cache().get(&sport.category, sport.page).map(Vec::len), Some(2));

    send(&mut state, ok(&nature, &records(5)), ms(30));
    assert!(!state.store.flags().loading);
    assert_eq!(state.store.active_results().map(Vec::len), Some(5));
}

#[test]
fn detail_dialog_traps_focus_and_navigates() {
    let (mut state, actions) = start("sport");
    send(&mut state, ok(&fetches(&actions)[0].key, &records(3)), ms(10));

    send(&mut state, Event::OpenDetail, ms(20));
    assert_eq!(state.input_mode, InputMode::Detail);
    let detail = state.compute_viewmodel(40, 120).detail.unwrap();
    assert_eq!(detail.position, "1 / 3");
    assert!(detail.controls[0].focused);

    // Close -> Previous -> Next, then wrap back to Close.
    send(&mut state, Event::FocusNext, ms(21));
    send(&mut state, Event::FocusNext, ms(22));
    send(&mut state, Event::Activate, ms(23));
    send(&mut state, Event::DetailNext, ms(24));
    assert_eq!(state.compute_viewmodel(40, 120).detail.unwrap().position, "3 / 3");

    send(&mut state, Event::FocusNext, ms(25));
    let detail = state.compute_viewmodel(40, 120).detail.unwrap();
    assert!(detail.controls[0].focused);

    send(&mut state, Event::Activate, ms(27));
    assert!(state.detail.is_none());
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.selected_index, 2);
}

#[test]
fn denied_permission_never_fetches() {
    let config = zgallery::Config {
        api_url: Some(API_URL.to_string()),
        ..Default::default()
    };
    let mut state = zgallery::initialize(&config);
    let actions = send(&mut state, Event::PermissionsResult { granted: false }, ms(0));
    assert!(fetches(&actions).is_empty());
    assert!(fetches(&send(&mut state, Event::Retry, ms(5))).is_empty());
    assert!(matches!(state.compute_viewmodel(40, 120).body, BodyState::Empty(_)));
}

#[test]
fn missing_api_url_reports_instead_of_fetching() {
    let mut state = zgallery::initialize(&zgallery::Config::default());
    let actions = send(&mut state, Event::PermissionsResult { granted: true }, ms(0));

    assert!(fetches(&actions).is_empty());
    assert_eq!(toast_messages(&state).len(), 1);
    let BodyState::Empty(empty) = state.compute_viewmodel(40, 120).body else {
        panic!("expected the configuration message");
    };
    assert!(empty.subtitle.contains("api_url"));
}

#[test]
fn quit_hides_the_plugin() {
    let (mut state, _) = start("sport");
    assert_eq!(send(&mut state, Event::CloseFocus, ms(1)), vec![Action::CloseFocus]);
}
