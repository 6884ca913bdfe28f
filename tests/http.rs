mod common;

use common::{pick_free_port, slots_router, spawn_backend_thread};
use reqwest::Client;
use serde_json::{json, Value};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Dashboard child process, killed when the test that owns it finishes.
struct Dashboard {
    base_url: String,
    backend_url: String,
    child: Child,
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn backend_router() -> axum::Router {
    slots_router(json!([
        { "slot_id": 1, "is_occupied": false },
        { "slot_id": 2, "is_occupied": true, "vehicle_id": "KA01AB1234" }
    ]))
}

fn dashboard_command(port: u16) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_slot_status_panel"));
    command
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// Waits until the dashboard has rendered at least one tick of cards.
async fn wait_until_rendered(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/panel")).send().await {
            if let Ok(body) = resp.json::<Value>().await {
                if body["content"]["state"] == "cards" {
                    return;
                }
            }
        }
        if Instant::now() > deadline {
            panic!("dashboard did not render slots");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_dashboard() -> Dashboard {
    let backend_url = spawn_backend_thread(backend_router);
    let port = pick_free_port();
    let child = dashboard_command(port)
        .env("SLOTS_BASE_URL", &backend_url)
        .spawn()
        .expect("failed to spawn dashboard");

    let dashboard = Dashboard {
        base_url: format!("http://127.0.0.1:{port}"),
        backend_url,
        child,
    };
    wait_until_rendered(&dashboard.base_url).await;
    dashboard
}

#[tokio::test]
async fn http_index_embeds_slot_cards() {
    let dashboard = spawn_dashboard().await;
    let client = Client::new();

    let page = client
        .get(format!("{}/", dashboard.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(page.contains("<div id=\"slot-status\">"));
    assert!(page.contains("<h4>Slot 1</h4><p>Status: Vacant</p></div>"));
    assert!(page.contains("<h4>Slot 2</h4><p>Status: Occupied</p>"));
    assert_eq!(page.matches("KA01AB1234").count(), 1);
    assert!(page.contains(&format!("href=\"{}/slot/2\"", dashboard.backend_url)));
    assert!(!page.contains("/slot/1\""));
}

#[tokio::test]
async fn http_panel_reports_latest_snapshot() {
    let dashboard = spawn_dashboard().await;
    let client = Client::new();

    let snapshot: Value = client
        .get(format!("{}/api/panel", dashboard.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(snapshot["container_id"], "slot-status");
    let cards = snapshot["content"]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["heading"], "Slot 1");
    assert_eq!(cards[0]["status"], "Vacant");
    assert_eq!(cards[1]["vehicle_id"], "KA01AB1234");
    assert_eq!(cards[1]["detail_path"], "/slot/2");
    assert!(!snapshot["updated_at"].is_null());

    let fragment = client
        .get(format!("{}/panel", dashboard.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(fragment.starts_with("<div class=\"slot vacant\">"));
    assert!(!fragment.contains("<html"));
}

#[tokio::test]
async fn http_dashboard_refuses_to_start_without_backend() {
    let port = pick_free_port();
    let mut child = dashboard_command(port)
        .env_remove("SLOTS_BASE_URL")
        .spawn()
        .expect("failed to spawn dashboard");

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            let _ = child.wait();
            panic!("dashboard kept running without SLOTS_BASE_URL");
        }
        sleep(Duration::from_millis(50)).await;
    };

    assert!(!status.success());
    assert!(
        Client::new()
            .get(format!("http://127.0.0.1:{port}/"))
            .send()
            .await
            .is_err()
    );
}
