use crate::models::CardModel;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", content = "cards", rename_all = "lowercase")]
pub enum PanelContent {
    #[default]
    Empty,
    Cards(Vec<CardModel>),
    Warning,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct PanelSnapshot {
    pub container_id: String,
    pub content: PanelContent,
    pub updated_at: Option<DateTime<Local>>,
}

/// The render target. Owned by the host; the poller only swaps its children.
#[derive(Clone)]
pub struct SlotPanel {
    inner: Arc<Mutex<PanelSnapshot>>,
}

impl SlotPanel {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PanelSnapshot {
                container_id: container_id.into(),
                ..PanelSnapshot::default()
            })),
        }
    }

    /// Replaces all children in one write.
    pub async fn replace(&self, content: PanelContent) {
        let mut snapshot = self.inner.lock().await;
        snapshot.content = content;
        snapshot.updated_at = Some(Local::now());
    }

    pub async fn snapshot(&self) -> PanelSnapshot {
        self.inner.lock().await.clone()
    }

    pub async fn content(&self) -> PanelContent {
        self.inner.lock().await.content.clone()
    }
}
