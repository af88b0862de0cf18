use std::time::Duration;

use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time to let the loader's request complete between frames.
const NETWORK_WAIT_MS: u64 = 20;

pub struct TestCtx<'a> {
    // keeps the mocked endpoint alive for the whole test
    _mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// App wired to a mock `/users` endpoint answering with `template`.
    ///
    /// `expected_requests` is verified when the mock server drops.
    pub async fn new_app(template: ResponseTemplate, expected_requests: u64) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(template)
            .expect(expected_requests)
            .mount(&mock_server)
            .await;

        let state = State::test(format!("{}/users", mock_server.uri()));
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    /// Steps `frames` frames, yielding to the runtime between them.
    pub async fn pump_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(NETWORK_WAIT_MS)).await;
        }
        self.harness.step();
    }
}

/// `count` users shaped like the jsonplaceholder payload.
pub fn placeholder_users(count: u64) -> serde_json::Value {
    let users: Vec<_> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("Member {id:02}"),
                "username": format!("member{id}"),
                "email": format!("member{id}@roster.test"),
                "phone": format!("555-01{id:02}"),
                "website": "roster.test",
                "address": {
                    "street": format!("{id} Elm St"),
                    "suite": "Apt. 1",
                    "city": "Springfield",
                    "zipcode": "00000",
                    "geo": { "lat": "0", "lng": "0" }
                },
                "company": {
                    "name": if id % 2 == 0 { "Initech" } else { "Globex" },
                    "catchPhrase": "",
                    "bs": ""
                }
            })
        })
        .collect();
    serde_json::Value::Array(users)
}
