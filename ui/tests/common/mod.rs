use std::time::Duration;

use adminui_ui::state::State;
use egui_kittest::Harness;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MEMBERS_PATH: &str = "/adminui-problem/members.json";

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Render, give the spawned request time to land, then render again so the
    /// result is polled and drawn.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(Duration::from_millis(200)).await;
        self.harness.step();
        self.harness.step();
    }
}

impl<'a> TestCtx<'a, State> {
    pub async fn new(
        location: &str,
        response: ResponseTemplate,
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
    ) -> Self {
        let mock_server = setup_mock_server(response).await;
        let state = State::test_at(mock_server.uri(), location);
        let harness = Harness::new_ui_state(app, state);

        Self {
            mock_server,
            harness,
        }
    }
}

#[allow(unused)]
pub async fn setup_mock_server(response: ResponseTemplate) -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MEMBERS_PATH))
        .respond_with(response)
        .mount(&mock_server)
        .await;

    mock_server
}

/// `count` members named `User 01`, `User 02`, ... with alternating roles.
pub fn members_json(count: usize) -> Value {
    let members: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": i.to_string(),
                "name": format!("User {i:02}"),
                "email": format!("user{i:02}@example.com"),
                "role": if i % 2 == 0 { "admin" } else { "member" },
            })
        })
        .collect();
    Value::Array(members)
}

pub fn members_response(count: usize) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(members_json(count))
}
