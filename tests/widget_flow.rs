//! End-to-end tests: the mounted widget against a mock users resource.
//!
//! Ids are pinned with `FixedIds` and the throttle is driven by a
//! `ManualClock`, so every scenario is deterministic.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::task::LocalSet;

use randuser::components::{Activation, App};
use randuser::config::ApiConfig;
use randuser::fetcher::{FixedIds, HttpUserSource};
use randuser::state::Status;
use randuser::throttle::ManualClock;

const INTERVAL: Duration = Duration::from_millis(1000);

fn user_json(id: u32, name: &str, phone: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "username": format!("user{id}"),
        "email": format!("user{id}@example.org"),
        "address": {
            "street": "Douglas Extension",
            "suite": "Suite 847",
            "city": "McKenziehaven",
            "zipcode": "59590-4157",
            "geo": { "lat": "-68.6102", "lng": "-47.0653" }
        },
        "phone": phone,
        "website": "ramiro.info",
        "company": {
            "name": "Romaguera-Jacobson",
            "catchPhrase": "Face to face bifurcated interface",
            "bs": "e-enable strategic applications"
        }
    })
}

fn mount(server: &MockServer, ids: Vec<u32>) -> (App, Rc<ManualClock>) {
    let source = HttpUserSource::new(&ApiConfig {
        base_url: server.url("/users"),
        timeout_secs: Some(5),
    })
    .unwrap();
    let clock = Rc::new(ManualClock::new());
    let app = App::mount_with_clock(
        Arc::new(source),
        Box::new(FixedIds::new(ids)),
        INTERVAL,
        clock.clone(),
    );
    (app, clock)
}

async fn settle(activation: Activation) {
    if let Activation::Fetching { handle, .. } = activation {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn click_shows_clementine_and_caches_her() {
    LocalSet::new()
        .run_until(async {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(GET).path("/users/3");
                    then.status(200)
                        .json_body(user_json(3, "Clementine Bauch", "1-463-123-4447x..."));
                })
                .await;
            let (app, _) = mount(&server, vec![3]);

            app.button().activate();
            // The button discards the activation, so poll until the fetch lands.
            for _ in 0..100 {
                if app.status() == Status::UserLoaded {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(20)).await;
            }

            mock.assert_async().await;
            let rendered = app.render();
            assert!(rendered.contains("Clementine Bauch"));
            assert!(rendered.contains("1-463-123-4447x..."));
            assert!(app.state().cached(3).is_some());
        })
        .await;
}

#[tokio::test]
async fn rendered_widget_matches_layout() {
    LocalSet::new()
        .run_until(async {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/users/1");
                    then.status(200)
                        .json_body(user_json(1, "Leanne Graham", "1-770-736-8031"));
                })
                .await;
            let (app, _) = mount(&server, vec![1]);

            settle(app.click()).await;

            let expected = "\
Get a random user
[ get random user ]

Username      | Phone number
--------------+---------------
Leanne Graham | 1-770-736-8031
";
            assert_eq!(app.render(), expected);
        })
        .await;
}

#[tokio::test]
async fn every_id_is_cached_under_itself() {
    LocalSet::new()
        .run_until(async {
            let server = MockServer::start_async().await;
            for id in 1..=10u32 {
                server
                    .mock_async(move |when, then| {
                        when.method(GET).path(format!("/users/{id}"));
                        then.status(200).json_body(user_json(id, &format!("User {id}"), "555"));
                    })
                    .await;
            }
            let (app, clock) = mount(&server, (1..=10).collect());

            for id in 1..=10u32 {
                settle(app.click()).await;
                let state = app.state();
                assert_eq!(state.current.as_ref().map(|u| u.id), Some(id));
                assert_eq!(state.cached(id).map(|u| u.id), Some(id));
                clock.advance(INTERVAL);
            }
            assert_eq!(app.state().cache.len(), 10);
        })
        .await;
}

#[tokio::test]
async fn cached_id_is_not_requested_twice() {
    LocalSet::new()
        .run_until(async {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(GET).path("/users/6");
                    then.status(200).json_body(user_json(6, "Mrs. Dennis Schulist", "1-477-935-8478 x6430"));
                })
                .await;
            let (app, clock) = mount(&server, vec![6]);

            settle(app.click()).await;
            let first = app.state().current;

            clock.advance(INTERVAL);
            assert!(matches!(app.click(), Activation::CacheHit(6)));

            mock.assert_hits_async(1).await;
            assert_eq!(app.state().current, first);
        })
        .await;
}

#[tokio::test]
async fn rapid_clicks_issue_one_request() {
    LocalSet::new()
        .run_until(async {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(GET).path("/users/2");
                    then.status(200).json_body(user_json(2, "Ervin Howell", "010-692-6593 x09125"));
                })
                .await;
            let (app, clock) = mount(&server, vec![2, 2, 2]);

            let first = app.click();
            clock.advance(Duration::from_millis(999));
            assert!(matches!(app.click(), Activation::Throttled));
            settle(first).await;

            mock.assert_hits_async(1).await;
        })
        .await;
}

#[tokio::test]
async fn server_error_leaves_no_user() {
    LocalSet::new()
        .run_until(async {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/users/5");
                    then.status(500);
                })
                .await;
            let (app, _) = mount(&server, vec![5]);

            settle(app.click()).await;

            assert_eq!(app.status(), Status::NoUser);
            assert!(app.state().cache.is_empty());
            assert_eq!(app.render(), "Get a random user\n[ get random user ]\n");
        })
        .await;
}

#[tokio::test]
async fn failure_after_success_keeps_last_user() {
    LocalSet::new()
        .run_until(async {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/users/1");
                    then.status(200).json_body(user_json(1, "Leanne Graham", "1-770-736-8031"));
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/users/2");
                    then.status(200).body("<html>not json</html>");
                })
                .await;
            let (app, clock) = mount(&server, vec![1, 2]);

            settle(app.click()).await;
            clock.advance(INTERVAL);
            settle(app.click()).await;

            let state = app.state();
            assert_eq!(state.current.map(|u| u.name), Some("Leanne Graham".to_string()));
            assert_eq!(state.cache.len(), 1);
        })
        .await;
}
