use std::time::Duration;

use flickpick::search::{QueryParams, SearchCoordinator, DEBOUNCE_INTERVAL};

#[tokio::test(start_paused = true)]
async fn seeds_state_from_url_query() {
    let (coordinator, _commits) = SearchCoordinator::new("/search", QueryParams::parse("q=foo"));

    assert_eq!(coordinator.search_input(), "foo");
    assert_eq!(coordinator.search_param(), "foo");
    assert!(coordinator.is_input_active());
    assert_eq!(coordinator.last_page(), "/");
}

#[tokio::test(start_paused = true)]
async fn commits_after_quiet_period() {
    let (coordinator, mut commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.set_search_input("batman".to_string());
    assert_eq!(coordinator.search_param(), "");

    tokio::time::sleep(DEBOUNCE_INTERVAL + Duration::from_millis(100)).await;

    let commit = commits.recv().await.expect("commit after quiet period");
    assert_eq!(commit.param, "batman");
    assert_eq!(commit.url, "/search?q=batman");
    assert_eq!(coordinator.search_param(), "batman");
}

#[tokio::test(start_paused = true)]
async fn rapid_input_commits_only_final_value() {
    let (coordinator, mut commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.set_search_input("bat".to_string());
    tokio::time::sleep(Duration::from_millis(100)).await;
    coordinator.set_search_input("batman".to_string());
    tokio::time::sleep(DEBOUNCE_INTERVAL + Duration::from_millis(100)).await;

    let commit = commits.recv().await.expect("exactly one commit");
    assert_eq!(commit.param, "batman");
    assert_eq!(commit.url, "/search?q=batman");
    assert!(commits.try_recv().is_err(), "only one navigation may occur");
}

#[tokio::test(start_paused = true)]
async fn value_superseded_just_before_expiry_never_commits() {
    let (coordinator, mut commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.set_search_input("a".to_string());
    tokio::time::sleep(DEBOUNCE_INTERVAL - Duration::from_millis(1)).await;
    coordinator.set_search_input("ab".to_string());
    tokio::time::sleep(DEBOUNCE_INTERVAL - Duration::from_millis(1)).await;
    assert!(commits.try_recv().is_err(), "nothing committed yet");

    tokio::time::sleep(Duration::from_millis(10)).await;
    let commit = commits.recv().await.expect("final value commits");
    assert_eq!(commit.param, "ab");
    assert!(commits.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn empty_input_never_navigates() {
    let (coordinator, mut commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.set_search_input(String::new());
    tokio::time::sleep(DEBOUNCE_INTERVAL * 2).await;
    assert!(commits.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn clearing_input_cancels_pending_commit() {
    let (coordinator, mut commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.set_search_input("bat".to_string());
    tokio::time::sleep(Duration::from_millis(100)).await;
    coordinator.set_search_input(String::new());
    tokio::time::sleep(DEBOUNCE_INTERVAL * 2).await;

    assert!(commits.try_recv().is_err(), "cancelled burst must not commit");
    assert_eq!(coordinator.search_param(), "");
}

#[tokio::test(start_paused = true)]
async fn commit_preserves_unrelated_query_parameters() {
    let (coordinator, mut commits) =
        SearchCoordinator::new("/watch-history", QueryParams::parse("x=1"));

    coordinator.set_search_input("x".to_string());
    tokio::time::sleep(DEBOUNCE_INTERVAL + Duration::from_millis(100)).await;

    let commit = commits.recv().await.expect("commit");
    assert_eq!(commit.url, "/search?x=1&q=x");
}

#[tokio::test(start_paused = true)]
async fn repeat_commit_replaces_existing_q() {
    let (coordinator, mut commits) =
        SearchCoordinator::new("/watch-history", QueryParams::parse("x=1"));

    coordinator.set_search_input("bat".to_string());
    tokio::time::sleep(DEBOUNCE_INTERVAL + Duration::from_millis(100)).await;
    let first = commits.recv().await.expect("first commit");
    assert_eq!(first.url, "/search?x=1&q=bat");

    // The router lands on /search with q in the query
    coordinator.route_changed("/search", QueryParams::parse("x=1&q=bat"));

    coordinator.set_search_input("batman".to_string());
    tokio::time::sleep(DEBOUNCE_INTERVAL + Duration::from_millis(100)).await;
    let second = commits.recv().await.expect("second commit");
    assert_eq!(second.url, "/search?x=1&q=batman");
}

#[tokio::test(start_paused = true)]
async fn last_page_ignores_search_path() {
    let (coordinator, _commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.route_changed("/watch-history", QueryParams::new());
    assert_eq!(coordinator.last_page(), "/watch-history");

    coordinator.route_changed("/search", QueryParams::parse("q=x"));
    assert_eq!(coordinator.last_page(), "/watch-history");

    coordinator.route_changed("/", QueryParams::new());
    assert_eq!(coordinator.last_page(), "/");
}

#[tokio::test(start_paused = true)]
async fn clear_url_strips_q_and_keeps_the_rest() {
    let (coordinator, _commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.route_changed("/watch-history", QueryParams::parse("x=1"));
    coordinator.route_changed("/search", QueryParams::parse("x=1&q=x"));

    assert_eq!(coordinator.clear_url(), "/watch-history?x=1");
}

#[tokio::test(start_paused = true)]
async fn clear_url_without_parameters_is_bare_path() {
    let (coordinator, _commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.route_changed("/search", QueryParams::parse("q=x"));
    assert_eq!(coordinator.clear_url(), "/");
}

#[tokio::test(start_paused = true)]
async fn cancel_pending_stops_an_in_flight_commit() {
    let (coordinator, mut commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.set_search_input("batman".to_string());
    tokio::time::sleep(Duration::from_millis(100)).await;
    coordinator.cancel_pending();
    tokio::time::sleep(DEBOUNCE_INTERVAL * 2).await;

    assert!(commits.try_recv().is_err(), "cancelled task must not commit");
    assert_eq!(coordinator.search_param(), "");
}

#[tokio::test(start_paused = true)]
async fn drop_cancels_pending_commit() {
    let (coordinator, mut commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.set_search_input("batman".to_string());
    drop(coordinator);
    tokio::time::sleep(DEBOUNCE_INTERVAL * 2).await;

    // Sender side is gone and nothing was committed
    assert!(commits.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn external_param_override_does_not_navigate() {
    let (coordinator, mut commits) = SearchCoordinator::new("/", QueryParams::new());

    coordinator.set_search_param("forced".to_string());
    tokio::time::sleep(DEBOUNCE_INTERVAL * 2).await;

    assert_eq!(coordinator.search_param(), "forced");
    assert!(commits.try_recv().is_err());
}
