#![allow(dead_code)]

use axum::{routing::get, Json, Router};
use std::net::TcpListener;
use std::sync::mpsc;

pub fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// Serves `router` on the current runtime and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serves `router` on its own thread so it outlives any single test runtime.
pub fn spawn_backend_thread(router: fn() -> Router) -> String {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("backend runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let _ = tx.send(format!("http://{addr}"));
            axum::serve(listener, router()).await.unwrap();
        });
    });
    rx.recv().expect("backend address")
}

pub fn slots_router(body: serde_json::Value) -> Router {
    Router::new().route(
        "/slots/",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    )
}
