//! Whole-app smoke test through eframe.

mod common;

use adminui_ui::AdminApp;
use adminui_ui::state::State;
use common::{members_response, setup_mock_server};
use egui_kittest::Harness;
use kittest::Queryable;

#[tokio::test]
async fn test_app_loads_members_on_first_frame() {
    let server = setup_mock_server(members_response(3)).await;
    let app = AdminApp::new(State::test(server.uri()));
    let mut harness = Harness::new_eframe(|_| app);

    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    harness.step();
    harness.step();

    assert!(harness.query_by_label_contains("Admin Dashboard").is_some());
    assert!(harness.query_by_label_contains("Members").is_some());
    assert!(harness.query_by_label_contains("User 03").is_some());
    assert!(harness.query_by_label_contains("Page 1 of 1").is_some());
    assert_eq!(harness.state().state().members.table().members().len(), 3);
}
